//! # Hero Motion
//!
//! `hero-motion` drives a decorative page header: it gates a vector
//! animation behind the first user click, plays the intro once and then
//! loops only the tail segment marked `loop`, blinks randomly-positioned
//! decorative images in and out under a combined visibility cap, and maps
//! scroll position onto animation progress.
//!
//! ## Core Pieces
//!
//! *   **Loop-Segment Player**: a marker-gated state machine speaking the
//!     playback engine's event/command vocabulary.
//! *   **Decorative Image Scheduler**: two image pools toggled by
//!     independent timers, never more than two visible at once.
//! *   **Scroll Mapper**: clamped scroll progress to frame seeks and a
//!     layout dimension.
//! *   **Session**: the per-page controller owning all of the above.
//!
//! Rendering and real scroll binding stay on the host's side of the
//! [`stage::Stage`] seam; the whole engine runs headless, which is how its
//! tests drive it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hero_motion::{DefaultAssetLoader, AssetLoader, HeroSession, SessionConfig};
//! use hero_motion::stage::RecordingStage;
//!
//! let loader = DefaultAssetLoader;
//! let model = loader.load_animation("headeranimation.json").unwrap();
//! let mut session = HeroSession::new(model, SessionConfig::default());
//!
//! let mut stage = RecordingStage::default();
//! session.start(&mut stage);
//! session.update(1.0 / 60.0, &mut stage);
//! ```

/// Keyframe easing and time-driven animated values.
pub mod animation;

/// The marker-gated loop player state machine.
pub mod player;

/// The decorative image scheduler.
pub mod scheduler;

/// Scroll-to-progress mapping.
pub mod scroll;

/// The per-page session controller.
pub mod session;

/// The host seam: stage operations and the `Stage` trait.
pub mod stage;

/// Shared data types.
pub mod types;

pub mod errors;

pub use errors::HeroError;
pub use player::{LoopSegmentPlayer, PlayerState};
pub use scheduler::{ImageScheduler, MAX_VISIBLE_IMAGES};
pub use scroll::{ScrollMapper, ScrollRegion, ScrollUpdate};
pub use session::{HeroSession, SessionConfig};

use hero_lottie::LottieJson;
use tracing::instrument;

/// A trait for abstracting asset access.
///
/// Lets the engine load its animation document and image files in hosts
/// where direct file system access is restricted or virtualized (bundlers,
/// archives, network resolution).
pub trait AssetLoader: Send + Sync {
    /// Loads the raw bytes of an asset from the given path.
    fn load_bytes(&self, path: &str) -> Result<Vec<u8>, HeroError>;

    /// Loads and parses an animation document.
    fn load_animation(&self, path: &str) -> Result<LottieJson, HeroError> {
        let bytes = self.load_bytes(path)?;
        Ok(hero_lottie::parse(&bytes)?)
    }
}

/// The default implementation of `AssetLoader` using the standard `std::fs`
/// filesystem, with an `assets/` fallback directory.
pub struct DefaultAssetLoader;

impl AssetLoader for DefaultAssetLoader {
    #[instrument(level = "debug", skip(self), fields(path = path))]
    fn load_bytes(&self, path: &str) -> Result<Vec<u8>, HeroError> {
        if let Ok(bytes) = std::fs::read(path) {
            return Ok(bytes);
        }
        let alt = format!("assets/{}", path);
        std::fs::read(&alt).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                HeroError::AssetNotFound(format!(
                    "{} (checked '{}' and '{}')",
                    path, path, alt
                ))
            } else {
                HeroError::from(e)
            }
        })
    }
}
