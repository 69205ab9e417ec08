//! The seam between the engine and whatever actually displays things.
//!
//! The engine never touches a DOM or a canvas. Pure logic (the scheduler,
//! the session) emits [`StageOp`]s, and a host-side [`Stage`] implementation
//! applies them to real elements. Tests implement `Stage` with a plain
//! in-memory recorder.

use crate::types::{Point, StageId};

/// A single mutation of a stage element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StageOp {
    /// Make the element visible at the given position.
    Reveal { id: StageId, position: Point },
    /// Make the element invisible. Position is left as-is.
    Conceal { id: StageId },
    /// Set the element's opacity (0.0 to 1.0).
    SetOpacity { id: StageId, opacity: f32 },
    /// Remove the element from the stage permanently.
    Retire { id: StageId },
}

/// Host-side application of engine decisions.
///
/// Every method has a default no-op body: a host that has no element for a
/// given concern simply doesn't override it, which is also how absent
/// elements degrade (silently) instead of erroring.
pub trait Stage {
    /// Applies one mutation to the element it addresses.
    fn apply(&mut self, op: StageOp);

    /// Called exactly once, when the user first starts playback. Hosts use
    /// this to swap presentation state tied to the "not yet started" look
    /// (placeholder styling, desaturation of the heading).
    fn mark_started(&mut self) {}
}

/// A stage that records what was asked of it. Useful for tests and for the
/// headless demo binary.
#[derive(Debug, Default)]
pub struct RecordingStage {
    pub ops: Vec<StageOp>,
    pub started: bool,
}

impl Stage for RecordingStage {
    fn apply(&mut self, op: StageOp) {
        self.ops.push(op);
    }

    fn mark_started(&mut self) {
        self.started = true;
    }
}
