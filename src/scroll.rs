//! The scroll-bound progress mapper.
//!
//! Maps scroll position over a trigger region onto two outputs: a direct
//! frame seek into the animation and a linearly interpolated layout
//! dimension. It runs from startup and is independent of the click gate;
//! smoothing (scrub inertia) is the binding engine's business, not ours.

use crate::animation::lerp;

/// The scroll range, in pixels, over which progress runs 0 to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRegion {
    pub start: f32,
    pub end: f32,
}

impl ScrollRegion {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Fraction of the region scrolled, clamped to [0, 1].
    pub fn progress(&self, scroll_y: f32) -> f32 {
        let span = self.end - self.start;
        if span <= 0.0 {
            return if scroll_y >= self.end { 1.0 } else { 0.0 };
        }
        ((scroll_y - self.start) / span).clamp(0.0, 1.0)
    }
}

/// Both outputs for one scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollUpdate {
    pub progress: f32,
    /// Frame to seek to: `progress * (total_frames - 1)`.
    pub frame: f32,
    /// Interpolated layout dimension (e.g. a container width).
    pub dimension: f32,
}

/// Binds a scroll region to a frame range and a layout dimension.
#[derive(Debug, Clone, Copy)]
pub struct ScrollMapper {
    region: ScrollRegion,
    total_frames: f32,
    dimension_from: f32,
    dimension_to: f32,
}

impl ScrollMapper {
    pub fn new(
        region: ScrollRegion,
        total_frames: f32,
        dimension_from: f32,
        dimension_to: f32,
    ) -> Self {
        Self {
            region,
            total_frames,
            dimension_from,
            dimension_to,
        }
    }

    /// Computes both outputs for the given scroll position.
    pub fn update(&self, scroll_y: f32) -> ScrollUpdate {
        let progress = self.region.progress(scroll_y);
        ScrollUpdate {
            progress,
            frame: progress * (self.total_frames - 1.0).max(0.0),
            dimension: lerp(self.dimension_from, self.dimension_to, progress),
        }
    }
}
