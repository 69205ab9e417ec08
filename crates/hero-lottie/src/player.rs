use crate::model::LottieJson;

/// Notifications a playback engine emits while advancing.
///
/// These mirror the event channel of the in-browser engine (`enterFrame`,
/// `complete`) so control logic written against them runs unchanged on
/// either side of the host boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackEvent {
    /// The playhead advanced. Carries the current frame.
    FrameAdvanced(f32),
    /// The active segment reached its end. Fires at the end of every pass,
    /// looping or not.
    Completed,
}

/// Instructions control logic hands back to a playback engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackCommand {
    /// Begin playback from the current playhead position.
    Play,
    /// Set the whole-animation loop flag.
    SetLoop(bool),
    /// Play the closed frame range `[from, to]`, looping it when
    /// `force_loop` is set.
    PlaySegments { from: f32, to: f32, force_loop: bool },
    /// Move the playhead without starting playback (`goToAndStop`).
    SeekTo(f32),
}

/// A wall-clock-free playback engine over a [`LottieJson`] document.
///
/// Renders nothing. It keeps the playhead, loop flags and active segment,
/// and converts elapsed time into the same event stream the real engine
/// produces, which is what makes the session testable headless.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    model: LottieJson,
    /// Current playhead position, in frames, relative to `ip`.
    pub current_frame: f32,
    pub playing: bool,
    /// Whole-animation loop flag.
    pub loop_enabled: bool,
    /// Active segment `[from, to]`, in frames. Defaults to the full range.
    segment: (f32, f32),
    /// Loop flag scoped to the active segment (`playSegments(.., true)`).
    segment_loop: bool,
}

impl PlaybackClock {
    pub fn new(model: LottieJson) -> Self {
        let segment = (0.0, model.last_frame());
        Self {
            model,
            current_frame: 0.0,
            playing: false,
            loop_enabled: false,
            segment,
            segment_loop: false,
        }
    }

    pub fn model(&self) -> &LottieJson {
        &self.model
    }

    pub fn total_frames(&self) -> f32 {
        self.model.total_frames()
    }

    /// Applies a control command, returning any event it triggers directly.
    pub fn apply(&mut self, command: PlaybackCommand) -> Vec<PlaybackEvent> {
        match command {
            PlaybackCommand::Play => {
                self.playing = true;
                Vec::new()
            }
            PlaybackCommand::SetLoop(enabled) => {
                self.loop_enabled = enabled;
                Vec::new()
            }
            PlaybackCommand::PlaySegments {
                from,
                to,
                force_loop,
            } => {
                self.segment = (from, to.max(from));
                self.segment_loop = force_loop;
                self.current_frame = from;
                self.playing = true;
                vec![PlaybackEvent::FrameAdvanced(self.current_frame)]
            }
            PlaybackCommand::SeekTo(frame) => {
                self.current_frame = frame.clamp(0.0, self.model.last_frame());
                self.playing = false;
                Vec::new()
            }
        }
    }

    /// Advances the playhead by `dt` seconds and reports what happened.
    ///
    /// At the segment end a `Completed` event fires; when a loop flag is
    /// active the playhead wraps to the segment start and playback continues,
    /// otherwise it clamps and stops.
    pub fn advance(&mut self, dt: f64) -> Vec<PlaybackEvent> {
        if !self.playing || self.model.total_frames() <= 0.0 {
            return Vec::new();
        }

        let mut events = Vec::new();
        let (start, end) = self.segment;
        self.current_frame += dt as f32 * self.model.fr;
        if self.current_frame >= end {
            events.push(PlaybackEvent::FrameAdvanced(end));
            events.push(PlaybackEvent::Completed);
            if self.loop_enabled || self.segment_loop {
                let span = (end - start).max(1.0);
                self.current_frame = start + (self.current_frame - end) % span;
            } else {
                self.current_frame = end;
                self.playing = false;
            }
        } else {
            events.push(PlaybackEvent::FrameAdvanced(self.current_frame));
        }
        events
    }
}
