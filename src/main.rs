use hero_motion::stage::RecordingStage;
use hero_motion::{
    AssetLoader, DefaultAssetLoader, HeroSession, ScrollMapper, ScrollRegion, SessionConfig,
};

/// Stand-in document used when no animation file is passed on the command
/// line: a 100-frame header with its tail segment marked at frame 40.
const SAMPLE: &str = r#"{
    "nm": "sample header",
    "ip": 0, "op": 100, "fr": 60, "w": 800, "h": 600,
    "markers": [ { "tm": 40, "cm": "loop", "dr": 60 } ]
}"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let model = match std::env::args().nth(1) {
        Some(path) => DefaultAssetLoader.load_animation(&path)?,
        None => hero_lottie::parse(SAMPLE.as_bytes())?,
    };

    println!(
        "Loaded '{}': {} frames at {} fps, {} marker(s)",
        model.nm.as_deref().unwrap_or("unnamed"),
        model.total_frames(),
        model.fr,
        model.markers.len()
    );

    let mut config = SessionConfig::default();
    config.placeholder_ids = vec![1, 2];
    let total_frames = model.total_frames();
    let mut session = HeroSession::new(model, config);
    session.bind_scroll(ScrollMapper::new(
        ScrollRegion::new(0.0, 2000.0),
        total_frames,
        800.0,
        1280.0,
    ));

    let mut stage = RecordingStage::default();

    // Simulate the page: half a second of idle fade-in, then the click,
    // then six seconds of playback at 60 fps.
    let dt = 1.0 / 60.0;
    for _ in 0..30 {
        session.update(dt, &mut stage);
    }
    session.start(&mut stage);
    for _ in 0..360 {
        session.update(dt, &mut stage);
    }

    println!(
        "After 6s: state {:?}, frame {:.1}, {} decorative image(s) visible, {} stage op(s)",
        session.player_state(),
        session.clock().current_frame,
        session.visible_image_count(),
        stage.ops.len()
    );

    if let Some(update) = session.on_scroll(1000.0) {
        println!(
            "Scroll midway: progress {:.2}, frame {:.1}, width {:.0}px",
            update.progress, update.frame, update.dimension
        );
    }

    Ok(())
}
