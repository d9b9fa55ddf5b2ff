//! End-to-end pipeline coverage: CSV text in, filtered, framed and
//! pickable scene data out. No renderer involved.

use bevy::math::Vec3;

use constants::render_settings::{PICK_THRESHOLD, TONS_PER_POINT};
use grade_view_engine::engine::assets::bounds::SampleBounds;
use grade_view_engine::engine::filter::engine::apply_filter;
use grade_view_engine::engine::filter::window::FilterWindow;
use grade_view_engine::engine::loading::fallback::{FALLBACK_ROWS, synthetic_csv};
use grade_view_engine::engine::loading::normalise::ingest;
use grade_view_engine::engine::scene::frame::build_frame;
use grade_view_engine::tools::picking::pick_nearest;

const CSV: &str = "\
X,Y,Z,AUGT,CONF
0,0,-100,10,Measured
50,50,-500,25,Indicated
100,100,-900,35,Inferred
150,150,-1300,5,Measured
";

#[test]
fn csv_to_scene_pipeline() {
    let points = ingest(CSV);
    assert_eq!(points.len(), 4);

    let bounds = SampleBounds::from_points(&points).expect("non-empty dataset has bounds");
    assert_eq!((bounds.min_z, bounds.max_z), (-1300.0, -100.0));

    let mut window = FilterWindow::default();
    window.set_depth(-600.0, 0.0);
    window.set_grade(0.0, 30.0);

    let result = apply_filter(&points, &window, TONS_PER_POINT);
    assert_eq!(result.visible.len(), 2);
    assert_eq!(result.dimmed.len(), 2);
    assert_eq!(result.stats.avg_grade, 17.5);
    assert_eq!(result.stats.tonnage, 200.0);
    assert_eq!(result.stats.mix.measured, 1);
    assert_eq!(result.stats.mix.indicated, 1);
    assert_eq!(result.stats.mix.inferred, 0);

    // The frame brackets the full dataset, not the filtered subset.
    let frame = build_frame(&bounds);
    assert_eq!(frame.edges.len(), 12);
    assert!(frame.ticks.contains(&0.0));
    assert!(frame.ticks.iter().all(|z| *z >= -1300.0 && *z <= 0.0));

    // A ray down onto the shallow visible point picks it; the deeper
    // dimmed points are not candidates.
    let target = result.visible[0].position;
    let hit = pick_nearest(
        target + Vec3::new(3.0, 0.0, 500.0),
        Vec3::NEG_Z,
        &result.visible,
        PICK_THRESHOLD,
    );
    assert_eq!(hit, Some(0));
}

#[test]
fn picking_never_sees_filtered_out_points() {
    let points = ingest(CSV);
    let mut window = FilterWindow::default();
    window.set_depth(-600.0, 0.0);
    window.set_grade(0.0, 30.0);
    let result = apply_filter(&points, &window, TONS_PER_POINT);

    // Aim straight at the deepest sample, which failed the depth
    // predicate. Nothing visible lies near that ray.
    let dimmed_target = Vec3::new(150.0, 150.0, -1300.0);
    let hit = pick_nearest(
        dimmed_target + Vec3::new(0.0, 0.0, 200.0),
        Vec3::NEG_Z,
        &result.visible,
        PICK_THRESHOLD,
    );
    assert_eq!(hit, None);
}

#[test]
fn empty_input_degrades_gracefully() {
    let points = ingest("");
    assert!(points.is_empty());
    assert!(SampleBounds::from_points(&points).is_none());

    let result = apply_filter(&points, &FilterWindow::default(), TONS_PER_POINT);
    assert_eq!(result.stats.visible_count, 0);
    assert_eq!(result.stats.tonnage, 0.0);
}

#[test]
fn elevation_data_arrives_as_depth() {
    let points = ingest("Easting,Northing,RL,Grade\n0,0,250,12\n10,10,760,20\n");
    let bounds = SampleBounds::from_points(&points).unwrap();
    assert_eq!((bounds.min_z, bounds.max_z), (-760.0, -250.0));
}

#[test]
fn synthetic_fallback_matches_its_envelope() {
    let points = ingest(&synthetic_csv());
    assert_eq!(points.len(), FALLBACK_ROWS);
    for point in &points {
        assert!(point.x.abs() <= 400.0);
        assert!(point.y.abs() <= 300.0);
        assert!(point.z <= -200.0 && point.z >= -1300.0);
        assert!(point.grade >= 0.0);
    }
}
