//! The marker-gated loop player.
//!
//! Plays the full intro animation once, then keeps replaying only the tail
//! segment that starts at the marker named `loop`. This avoids repeating the
//! whole intro on every cycle while the header keeps "breathing".
//!
//! The machine is deliberately detached from any real engine: it consumes
//! [`PlaybackEvent`]s and answers with [`PlaybackCommand`]s, so it can be
//! driven by the headless clock in tests or by a real renderer in a host.

use hero_lottie::{LottieJson, PlaybackCommand, PlaybackEvent};
use tracing::debug;

/// Where the player currently is in its one-shot-then-loop life cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// Loaded, waiting for the start signal.
    Idle,
    /// Started; the playhead has not yet reached the loop marker.
    FirstPass,
    /// The marker was reached once. Every completion now replays only the
    /// tail segment.
    TailLoop,
    /// No `loop` marker exists. The whole animation loops (or plays once
    /// under reduced motion) and the machine stays here.
    WholeLoop,
}

/// State machine controlling marker-gated segment playback.
#[derive(Debug, Clone)]
pub struct LoopSegmentPlayer {
    state: PlayerState,
    /// Start frame of the tail segment, when a `loop` marker exists.
    loop_start: Option<f32>,
    /// Last addressable frame; the tail segment's closed upper bound.
    last_frame: f32,
    reduced_motion: bool,
    /// Start guard for the no-marker path, where the state alone can't
    /// distinguish "waiting" from "playing".
    started: bool,
}

impl LoopSegmentPlayer {
    /// Builds the player from a loaded document.
    ///
    /// Returns the player together with the commands that configure the
    /// engine's loop flag up front: with no `loop` marker the whole-animation
    /// loop flag becomes the negation of the reduced-motion preference.
    pub fn new(model: &LottieJson, reduced_motion: bool) -> (Self, Vec<PlaybackCommand>) {
        let loop_start = model.find_marker("loop").map(|m| m.tm);
        let last_frame = model.last_frame();

        let (state, commands) = match loop_start {
            Some(start) => {
                debug!(loop_start = start, "loop marker found");
                (PlayerState::Idle, Vec::new())
            }
            None => {
                debug!(reduced_motion, "no loop marker, whole-animation loop");
                (
                    PlayerState::WholeLoop,
                    vec![PlaybackCommand::SetLoop(!reduced_motion)],
                )
            }
        };

        (
            Self {
                state,
                loop_start,
                last_frame,
                reduced_motion,
                started: false,
            },
            commands,
        )
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Handles the external start signal.
    ///
    /// Only the first call produces a `Play`; the machine itself guards
    /// against repeated starts, independent of the session's click gate.
    pub fn start(&mut self) -> Vec<PlaybackCommand> {
        match self.state {
            PlayerState::Idle => {
                self.state = PlayerState::FirstPass;
                self.started = true;
                vec![PlaybackCommand::Play]
            }
            PlayerState::WholeLoop if !self.started => {
                self.started = true;
                vec![PlaybackCommand::Play]
            }
            _ => Vec::new(),
        }
    }

    /// Feeds one engine notification through the machine.
    pub fn on_event(&mut self, event: PlaybackEvent) -> Vec<PlaybackCommand> {
        match (self.state, event) {
            (PlayerState::FirstPass, PlaybackEvent::FrameAdvanced(frame)) => {
                let start = self.loop_start.unwrap_or(0.0);
                if frame >= start {
                    debug!(frame, start, "entering tail loop");
                    self.state = PlayerState::TailLoop;
                    vec![PlaybackCommand::SetLoop(false)]
                } else {
                    Vec::new()
                }
            }
            (PlayerState::TailLoop, PlaybackEvent::Completed) => {
                // Reduced motion also suppresses the tail replay: one full
                // pass is all the animation gets.
                if self.reduced_motion {
                    return Vec::new();
                }
                let start = self.loop_start.unwrap_or(0.0);
                vec![PlaybackCommand::PlaySegments {
                    from: start,
                    to: self.last_frame,
                    force_loop: true,
                }]
            }
            _ => Vec::new(),
        }
    }
}
