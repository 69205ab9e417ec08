//! # hero-lottie
//!
//! The data layer for `hero-motion`: a serde model of the slice of the
//! Lottie format that playback control needs (frame range, frame rate,
//! markers), plus a headless [`player::PlaybackClock`] that speaks the same
//! event/command vocabulary as the real in-browser engine.
//!
//! Nothing in this crate rasterizes. Layers, shapes and embedded assets are
//! deliberately out of its model; the host's rendering engine owns those.

pub mod model;
pub mod player;

pub use model::{LottieJson, Marker, MarkerPayload};
pub use player::{PlaybackClock, PlaybackCommand, PlaybackEvent};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LottieError {
    #[error("Invalid animation document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
    #[error("Animation has an empty frame range")]
    EmptyFrameRange,
}

/// Parses a Lottie document from raw JSON bytes.
pub fn parse(data: &[u8]) -> Result<LottieJson, LottieError> {
    let model: LottieJson = serde_json::from_slice(data)?;
    if model.op <= model.ip {
        return Err(LottieError::EmptyFrameRange);
    }
    Ok(model)
}
