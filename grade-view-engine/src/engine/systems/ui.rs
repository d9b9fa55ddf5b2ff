//! HUD panels: filter statistics, selection readout and hover tooltip.

use bevy::prelude::*;

use crate::engine::assets::sample_set::SampleSet;
use crate::engine::filter::engine::FilterStats;
use crate::engine::filter::window::FilterWindow;
use crate::engine::scene::legend::spawn_legend;
use crate::tools::picking::{HoverState, SelectionState};

#[derive(Component)]
pub struct StatsPanelText;

#[derive(Component)]
pub struct SelectionText;

#[derive(Component)]
pub struct TooltipText;

/// Spawn the static HUD layout once at startup.
pub fn spawn_hud(mut commands: Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(8.0),
            ..default()
        })
        .with_children(|panel| {
            panel.spawn((
                StatsPanelText,
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.9)),
            ));
            panel.spawn((
                SelectionText,
                Text::new("Click a point to inspect it"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.7)),
            ));
        });

    commands.spawn((
        TooltipText,
        Text::new(""),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgba(1.0, 1.0, 0.8, 0.95)),
        Node {
            position_type: PositionType::Absolute,
            ..default()
        },
        Visibility::Hidden,
    ));

    spawn_legend(&mut commands);
}

/// Refresh the statistics panel whenever the filter output or the
/// window changes.
pub fn update_stats_panel(
    stats: Res<FilterStats>,
    window: Res<FilterWindow>,
    samples: Res<SampleSet>,
    mut query: Query<&mut Text, With<StatsPanelText>>,
) {
    if !stats.is_changed() && !window.is_changed() && !samples.is_changed() {
        return;
    }
    let Ok(mut text) = query.single_mut() else {
        return;
    };

    let total = stats.mix.total().max(1) as f64;
    let pct = |n: usize| (n as f64 / total * 100.0).round() as i64;

    text.0 = format!(
        "{} of {} samples visible\n\
         Avg grade {:.1} g/T   ~{:.0} tons\n\
         Depth {:.0} to {:.0} m   Grade {:.1} to {:.1} g/T\n\
         Measured {}%  Indicated {}%  Inferred {}%",
        stats.visible_count,
        samples.len(),
        stats.avg_grade,
        stats.tonnage,
        window.depth_lo,
        window.depth_hi,
        window.grade_lo,
        window.grade_hi,
        pct(stats.mix.measured),
        pct(stats.mix.indicated),
        pct(stats.mix.inferred),
    );
}

/// Mirror the current selection into its readout line.
pub fn update_selection_text(
    selection: Res<SelectionState>,
    mut query: Query<&mut Text, With<SelectionText>>,
) {
    if !selection.is_changed() {
        return;
    }
    let Ok(mut text) = query.single_mut() else {
        return;
    };
    text.0 = match &selection.selected {
        Some(sample) => format!(
            "Selected: {:.2} g/T at {:.0} m ({})",
            sample.grade,
            sample.depth,
            sample.confidence.label()
        ),
        None => "Click a point to inspect it".to_string(),
    };
}

/// Place the grade tooltip beside the cursor while a point is hovered.
pub fn update_tooltip(
    hover: Res<HoverState>,
    mut query: Query<(&mut Text, &mut Node, &mut Visibility), With<TooltipText>>,
) {
    let Ok((mut text, mut node, mut visibility)) = query.single_mut() else {
        return;
    };
    match &hover.hovered {
        Some(sample) => {
            text.0 = format!("{:.2} g/T", sample.grade);
            node.left = Val::Px(sample.cursor.x + 10.0);
            node.top = Val::Px(sample.cursor.y + 10.0);
            *visibility = Visibility::Visible;
        }
        None => {
            *visibility = Visibility::Hidden;
        }
    }
}
