use hero_lottie::LottieJson;
use hero_motion::stage::{RecordingStage, StageOp};
use hero_motion::types::Bounds;
use hero_motion::{
    HeroSession, PlayerState, ScrollMapper, ScrollRegion, SessionConfig, MAX_VISIBLE_IMAGES,
};

const DT: f64 = 1.0 / 60.0;

fn model(markers: &str) -> LottieJson {
    serde_json::from_str(&format!(
        r#"{{ "ip": 0, "op": 100, "fr": 60, "w": 800, "h": 600, "markers": [{}] }}"#,
        markers
    ))
    .unwrap()
}

fn marker_model() -> LottieJson {
    model(r#"{ "tm": 40, "cm": "loop", "dr": 60 }"#)
}

fn run(session: &mut HeroSession, stage: &mut RecordingStage, seconds: f64) {
    let steps = (seconds / DT).round() as usize;
    for _ in 0..steps {
        session.update(DT, stage);
    }
}

#[test]
fn test_click_gate_is_single_use() {
    let mut session =
        HeroSession::new(marker_model(), SessionConfig::default()).with_rng_seed(1);
    let mut stage = RecordingStage::default();

    assert!(!session.has_started());
    assert!(session.start(&mut stage));
    assert!(stage.started);
    assert!(session.clock().playing);

    // Subsequent clicks are no-ops.
    assert!(!session.start(&mut stage));
    assert!(!session.start(&mut stage));
    assert_eq!(session.player_state(), PlayerState::FirstPass);
}

#[test]
fn test_intro_once_then_tail_loop() {
    let mut session =
        HeroSession::new(marker_model(), SessionConfig::default()).with_rng_seed(2);
    let mut stage = RecordingStage::default();
    session.start(&mut stage);

    // One second in: past the marker, still on the first pass range.
    run(&mut session, &mut stage, 1.0);
    assert_eq!(session.player_state(), PlayerState::TailLoop);

    // Well past the first completion the playhead must stay inside the
    // tail segment [40, 99] forever.
    run(&mut session, &mut stage, 4.0);
    for _ in 0..120 {
        session.update(DT, &mut stage);
        let frame = session.clock().current_frame;
        assert!(
            (40.0..=99.0).contains(&frame),
            "playhead {} left the tail segment",
            frame
        );
    }
    assert!(session.clock().playing);
}

#[test]
fn test_no_marker_respects_reduced_motion() {
    // Reduced motion: plays exactly once and stops at the last frame.
    let mut session = HeroSession::new(
        model(""),
        SessionConfig {
            reduced_motion: true,
            ..SessionConfig::default()
        },
    )
    .with_rng_seed(3);
    let mut stage = RecordingStage::default();
    session.start(&mut stage);
    run(&mut session, &mut stage, 3.0);

    assert_eq!(session.player_state(), PlayerState::WholeLoop);
    assert!(!session.clock().playing);
    assert_eq!(session.clock().current_frame, 99.0);

    // Without the preference the whole animation keeps looping.
    let mut session =
        HeroSession::new(model(""), SessionConfig::default()).with_rng_seed(3);
    let mut stage = RecordingStage::default();
    session.start(&mut stage);
    run(&mut session, &mut stage, 3.0);
    assert!(session.clock().loop_enabled);
    assert!(session.clock().playing);
}

#[test]
fn test_reduced_motion_stops_after_one_full_pass() {
    let mut session = HeroSession::new(
        marker_model(),
        SessionConfig {
            reduced_motion: true,
            ..SessionConfig::default()
        },
    )
    .with_rng_seed(4);
    let mut stage = RecordingStage::default();
    session.start(&mut stage);
    run(&mut session, &mut stage, 5.0);

    assert_eq!(session.player_state(), PlayerState::TailLoop);
    assert!(!session.clock().playing);
    assert_eq!(session.clock().current_frame, 99.0);
}

#[test]
fn test_container_fades_in_and_settles() {
    let mut session =
        HeroSession::new(marker_model(), SessionConfig::default()).with_rng_seed(5);
    let mut stage = RecordingStage::default();
    run(&mut session, &mut stage, 1.0);

    let opacities: Vec<f32> = stage
        .ops
        .iter()
        .filter_map(|op| match op {
            StageOp::SetOpacity { id: 0, opacity } => Some(*opacity),
            _ => None,
        })
        .collect();
    assert!(!opacities.is_empty());
    assert_eq!(*opacities.last().unwrap(), 1.0);
    // Monotonic ramp up.
    assert!(opacities.windows(2).all(|w| w[0] <= w[1]));
    // Emission stops once the fade settles; one second at 60Hz would be 60.
    assert!(opacities.len() <= 32);
}

#[test]
fn test_placeholders_fade_then_retire() {
    let config = SessionConfig {
        placeholder_ids: vec![1, 2],
        ..SessionConfig::default()
    };
    let mut session = HeroSession::new(marker_model(), config).with_rng_seed(6);
    let mut stage = RecordingStage::default();
    session.start(&mut stage);
    run(&mut session, &mut stage, 1.0);

    let fades = stage
        .ops
        .iter()
        .filter(|op| matches!(op, StageOp::SetOpacity { id: 1, .. }))
        .count();
    assert!(fades > 0);

    let retired: Vec<_> = stage
        .ops
        .iter()
        .filter_map(|op| match op {
            StageOp::Retire { id } => Some(*id),
            _ => None,
        })
        .collect();
    assert_eq!(retired, vec![1, 2]);
}

#[test]
fn test_placeholders_retire_instantly_under_reduced_motion() {
    let config = SessionConfig {
        reduced_motion: true,
        placeholder_ids: vec![1, 2],
        ..SessionConfig::default()
    };
    let mut session = HeroSession::new(marker_model(), config).with_rng_seed(7);
    let mut stage = RecordingStage::default();
    session.start(&mut stage);

    let retired = stage
        .ops
        .iter()
        .filter(|op| matches!(op, StageOp::Retire { .. }))
        .count();
    assert_eq!(retired, 2);
    let faded = stage
        .ops
        .iter()
        .filter(|op| matches!(op, StageOp::SetOpacity { id: 1, .. } | StageOp::SetOpacity { id: 2, .. }))
        .count();
    assert_eq!(faded, 0);
}

#[test]
fn test_image_cap_holds_for_session_lifetime() {
    let config = SessionConfig {
        bounds: Bounds::new(900.0, 500.0),
        ..SessionConfig::default()
    };
    let mut session = HeroSession::new(marker_model(), config).with_rng_seed(8);
    let mut stage = RecordingStage::default();

    // No images exist before the first interaction.
    run(&mut session, &mut stage, 1.0);
    assert!(session.images().is_empty());

    session.start(&mut stage);
    assert_eq!(session.images().len(), 9);

    for _ in 0..(30.0 / DT) as usize {
        session.update(DT, &mut stage);
        assert!(session.visible_image_count() <= MAX_VISIBLE_IMAGES);
    }
    // Thirty seconds of ticking must actually have shown something.
    assert!(stage
        .ops
        .iter()
        .any(|op| matches!(op, StageOp::Reveal { .. })));
}

#[test]
fn test_scroll_scrub_seeks_only_while_stopped() {
    let total = marker_model().total_frames();
    let mut session =
        HeroSession::new(marker_model(), SessionConfig::default()).with_rng_seed(9);
    session.bind_scroll(ScrollMapper::new(
        ScrollRegion::new(0.0, 2000.0),
        total,
        800.0,
        1280.0,
    ));

    // Scrubbing works from page load, before any click.
    let update = session.on_scroll(1000.0).unwrap();
    assert_eq!(update.frame, 49.5);
    assert_eq!(session.clock().current_frame, 49.5);
    assert!(!session.clock().playing);

    // Once click-gated playback runs, scrolling reports but does not seek.
    let mut stage = RecordingStage::default();
    session.start(&mut stage);
    session.update(DT, &mut stage);
    let frame_before = session.clock().current_frame;
    let update = session.on_scroll(2000.0).unwrap();
    assert_eq!(update.dimension, 1280.0);
    assert_eq!(session.clock().current_frame, frame_before);
}
