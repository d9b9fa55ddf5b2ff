use bevy::prelude::*;

use constants::colour_ramp::{MAX_GRADE, legend_samples};
use constants::render_settings::LEGEND_SAMPLES;

/// Spawn the vertical legend gradient: a column of swatches sampled
/// from the grade ramp, high grade at the top, with min/mid/max
/// labels. Static UI, built once at startup.
pub fn spawn_legend(commands: &mut Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(16.0),
            right: Val::Px(16.0),
            flex_direction: FlexDirection::Row,
            column_gap: Val::Px(6.0),
            ..default()
        })
        .with_children(|parent| {
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Column,
                    ..default()
                })
                .with_children(|column| {
                    for colour in legend_samples(LEGEND_SAMPLES) {
                        column.spawn((
                            Node {
                                width: Val::Px(16.0),
                                height: Val::Px(5.0),
                                ..default()
                            },
                            BackgroundColor(colour),
                        ));
                    }
                });
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Column,
                    justify_content: JustifyContent::SpaceBetween,
                    ..default()
                })
                .with_children(|labels| {
                    for text in [
                        format!("{} g/T", MAX_GRADE as i64),
                        format!("{} g/T", (MAX_GRADE * 0.5) as i64),
                        "0 g/T".to_string(),
                    ] {
                        labels.spawn((
                            Text::new(text),
                            TextFont {
                                font_size: 10.0,
                                ..default()
                            },
                            TextColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
                        ));
                    }
                });
        });
}
