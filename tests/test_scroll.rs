use hero_motion::{ScrollMapper, ScrollRegion};

#[test]
fn test_progress_clamps_to_unit_range() {
    let region = ScrollRegion::new(100.0, 1100.0);
    assert_eq!(region.progress(-500.0), 0.0);
    assert_eq!(region.progress(100.0), 0.0);
    assert_eq!(region.progress(600.0), 0.5);
    assert_eq!(region.progress(1100.0), 1.0);
    assert_eq!(region.progress(9999.0), 1.0);
}

#[test]
fn test_degenerate_region_snaps() {
    let region = ScrollRegion::new(500.0, 500.0);
    assert_eq!(region.progress(0.0), 0.0);
    assert_eq!(region.progress(500.0), 1.0);
}

#[test]
fn test_frame_and_dimension_outputs() {
    // 100 frames, width growing from 800 to 1280 over the region.
    let mapper = ScrollMapper::new(ScrollRegion::new(0.0, 2000.0), 100.0, 800.0, 1280.0);

    let at_top = mapper.update(0.0);
    assert_eq!(at_top.frame, 0.0);
    assert_eq!(at_top.dimension, 800.0);

    let midway = mapper.update(1000.0);
    assert_eq!(midway.progress, 0.5);
    assert_eq!(midway.frame, 49.5); // 0.5 * (100 - 1)
    assert_eq!(midway.dimension, 1040.0);

    let at_bottom = mapper.update(2000.0);
    assert_eq!(at_bottom.frame, 99.0);
    assert_eq!(at_bottom.dimension, 1280.0);
}

#[test]
fn test_single_frame_animation_maps_to_zero() {
    let mapper = ScrollMapper::new(ScrollRegion::new(0.0, 100.0), 1.0, 10.0, 20.0);
    assert_eq!(mapper.update(50.0).frame, 0.0);
}
