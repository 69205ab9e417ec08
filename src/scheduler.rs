//! The decorative image scheduler.
//!
//! Two fixed pools of overlay images (5 primary photos, 4 styled accents)
//! blink in and out of the header at random positions. At most two images
//! are visible at once across both pools combined.
//!
//! The scheduler is pure over its own `{id, visible, position}` records; DOM
//! application happens behind the [`Stage`](crate::stage::Stage) seam. Ticks
//! arrive from the session's per-pool timers and are never interleaved, so
//! the visible cap is checked and enforced tick-by-tick without locking.

use crate::stage::StageOp;
use crate::types::{Bounds, ImageKind, MotionStyle, Point, StageId};
use rand::Rng;

/// Combined cap on visible decorative images, across both pools.
pub const MAX_VISIBLE_IMAGES: usize = 2;

/// Number of images in the primary pool.
pub const PRIMARY_POOL: usize = 5;

/// Motion treatments of the special pool, in spawn order.
pub const SPECIAL_STYLES: [MotionStyle; 4] = [
    MotionStyle::Swing,
    MotionStyle::Pulse,
    MotionStyle::Spin,
    MotionStyle::Spin,
];

/// One decorative overlay image and its current presentation state.
#[derive(Debug, Clone, PartialEq)]
pub struct DecorativeImage {
    pub id: StageId,
    pub kind: ImageKind,
    /// Idle motion, for special images only.
    pub style: Option<MotionStyle>,
    pub visible: bool,
    pub position: Point,
}

/// Owns both image pools and decides which image toggles on each tick.
#[derive(Debug, Clone)]
pub struct ImageScheduler {
    images: Vec<DecorativeImage>,
    cap: usize,
}

impl ImageScheduler {
    /// Spawns the two pools, assigning stage ids from `first_id` upward.
    /// Every image starts hidden.
    pub fn new(first_id: StageId) -> Self {
        Self::with_cap(first_id, MAX_VISIBLE_IMAGES)
    }

    pub fn with_cap(first_id: StageId, cap: usize) -> Self {
        let mut images = Vec::with_capacity(PRIMARY_POOL + SPECIAL_STYLES.len());
        let mut next_id = first_id;

        for _ in 0..PRIMARY_POOL {
            images.push(DecorativeImage {
                id: next_id,
                kind: ImageKind::Primary,
                style: None,
                visible: false,
                position: Point::default(),
            });
            next_id += 1;
        }
        for style in SPECIAL_STYLES {
            images.push(DecorativeImage {
                id: next_id,
                kind: ImageKind::Special,
                style: Some(style),
                visible: false,
                position: Point::default(),
            });
            next_id += 1;
        }

        Self { images, cap }
    }

    pub fn images(&self) -> &[DecorativeImage] {
        &self.images
    }

    /// Count of visible images across both pools.
    pub fn visible_count(&self) -> usize {
        self.images.iter().filter(|img| img.visible).count()
    }

    /// Runs one timer tick for the given pool.
    ///
    /// Picks one image from the pool uniformly at random. Visible images are
    /// hidden. Hidden images are revealed at a random in-bounds position,
    /// after first hiding one random visible image (from the combined pool)
    /// if the cap would otherwise be exceeded.
    pub fn tick<R: Rng>(&mut self, kind: ImageKind, bounds: Bounds, rng: &mut R) -> Vec<StageOp> {
        let pool: Vec<usize> = self
            .images
            .iter()
            .enumerate()
            .filter(|(_, img)| img.kind == kind)
            .map(|(i, _)| i)
            .collect();
        if pool.is_empty() {
            return Vec::new();
        }

        let mut ops = Vec::new();
        let chosen = pool[rng.gen_range(0..pool.len())];

        if self.images[chosen].visible {
            self.images[chosen].visible = false;
            ops.push(StageOp::Conceal {
                id: self.images[chosen].id,
            });
            return ops;
        }

        if self.visible_count() >= self.cap {
            if let Some(op) = self.conceal_random_visible(rng) {
                ops.push(op);
            }
        }

        let position = random_position(bounds, kind.footprint(), rng);
        let img = &mut self.images[chosen];
        img.visible = true;
        img.position = position;
        ops.push(StageOp::Reveal {
            id: img.id,
            position,
        });
        ops
    }

    /// Hides one uniformly-random visible image from the combined pool.
    fn conceal_random_visible<R: Rng>(&mut self, rng: &mut R) -> Option<StageOp> {
        let visible: Vec<usize> = self
            .images
            .iter()
            .enumerate()
            .filter(|(_, img)| img.visible)
            .map(|(i, _)| i)
            .collect();
        if visible.is_empty() {
            return None;
        }
        let idx = visible[rng.gen_range(0..visible.len())];
        self.images[idx].visible = false;
        Some(StageOp::Conceal {
            id: self.images[idx].id,
        })
    }
}

/// Uniform random position keeping a square footprint inside the bounds.
///
/// Extents clamp at zero so undersized bounds pin images to the origin
/// instead of flinging them off-stage.
pub fn random_position<R: Rng>(bounds: Bounds, footprint: f32, rng: &mut R) -> Point {
    let max_x = (bounds.width - footprint).max(0.0);
    let max_y = (bounds.height - footprint).max(0.0);
    Point {
        x: rng.gen_range(0.0..=max_x),
        y: rng.gen_range(0.0..=max_y),
    }
}
