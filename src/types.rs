//! # Types Module
//!
//! Shared data types used across the engine.
//!
//! ## Key Types
//! - `StageId`: handle for an element living on the host stage.
//! - `Bounds` / `Point`: the spawn area and positions inside it.
//! - `ImageKind` / `MotionStyle`: the two decorative image pools and the
//!   idle motion applied to special images.

use serde::{Deserialize, Serialize};

/// A unique identifier for an element on the host stage.
///
/// The host decides what it maps to (a DOM node, a scene-graph index); the
/// engine only hands them back in [`crate::stage::StageOp`]s.
pub type StageId = usize;

/// A position inside the stage bounds, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// The rectangular area decorative images may occupy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The two decorative image pools, with different footprints and cadences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageKind {
    /// Photographic cutouts. Square footprint of 50px.
    Primary,
    /// Styled accent graphics. Square footprint of 80px.
    Special,
}

impl ImageKind {
    /// Square footprint, in pixels, kept inside the bounds when positioning.
    pub fn footprint(&self) -> f32 {
        match self {
            ImageKind::Primary => 50.0,
            ImageKind::Special => 80.0,
        }
    }

    /// Toggle cadence for this pool, in seconds.
    pub fn interval(&self) -> f64 {
        match self {
            ImageKind::Primary => 0.5,
            ImageKind::Special => 0.9,
        }
    }
}

/// Idle motion treatment a special image carries while visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionStyle {
    Swing,
    Pulse,
    Spin,
}
