//! The session controller.
//!
//! One `HeroSession` is constructed at startup and owns everything the
//! header needs for the page's lifetime: the playback clock, the loop
//! player, both decorative image pools, the fade-in and the one-time start
//! gate. Hosts feed it wall-clock ticks, the start click and scroll
//! positions; it answers through the [`Stage`] seam.

use std::collections::VecDeque;

use hero_lottie::{LottieJson, PlaybackClock, PlaybackCommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::animation::{Animated, EasingType};
use crate::player::{LoopSegmentPlayer, PlayerState};
use crate::scheduler::{DecorativeImage, ImageScheduler};
use crate::scroll::{ScrollMapper, ScrollUpdate};
use crate::stage::{Stage, StageOp};
use crate::types::{Bounds, ImageKind, StageId};

/// Startup configuration, read once when the session is constructed.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The accessibility signal requesting minimized non-essential motion.
    pub reduced_motion: bool,
    /// Area the decorative images may occupy.
    pub bounds: Bounds,
    /// Stage id of the animation container (fade-in target).
    pub container_id: StageId,
    /// Placeholder corner images retired on first start.
    pub placeholder_ids: Vec<StageId>,
    /// Container fade-in duration, seconds.
    pub fade_in: f64,
    /// Placeholder fade-out duration, seconds.
    pub placeholder_fade: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            bounds: Bounds::new(1280.0, 720.0),
            container_id: 0,
            placeholder_ids: Vec::new(),
            fade_in: 0.5,
            placeholder_fade: 0.5,
        }
    }
}

/// The per-page controller tying player, scheduler and scroll mapping
/// together.
pub struct HeroSession {
    config: SessionConfig,
    clock: PlaybackClock,
    player: LoopSegmentPlayer,
    /// Created on first start, never destroyed.
    scheduler: Option<ImageScheduler>,
    mapper: Option<ScrollMapper>,
    rng: StdRng,

    has_started: bool,
    elapsed: f64,
    fade_in: Animated<f32>,
    fade_in_done: bool,
    /// Absolute time at which faded placeholders get retired.
    placeholder_retire_at: Option<f64>,
    placeholder_opacity: Animated<f32>,

    primary_acc: f64,
    special_acc: f64,
}

impl HeroSession {
    /// Builds the session around a loaded animation document.
    pub fn new(model: LottieJson, config: SessionConfig) -> Self {
        let (player, setup) = LoopSegmentPlayer::new(&model, config.reduced_motion);
        let mut clock = PlaybackClock::new(model);
        for command in &setup {
            clock.apply(*command);
        }

        let mut fade_in = Animated::new(0.0f32);
        fade_in.add_keyframe(1.0, config.fade_in, EasingType::EaseOut);

        let mut placeholder_opacity = Animated::new(1.0f32);
        placeholder_opacity.add_keyframe(0.0, config.placeholder_fade, EasingType::EaseOut);

        Self {
            config,
            clock,
            player,
            scheduler: None,
            mapper: None,
            rng: StdRng::from_entropy(),
            has_started: false,
            elapsed: 0.0,
            fade_in,
            fade_in_done: false,
            placeholder_retire_at: None,
            placeholder_opacity,
            primary_acc: 0.0,
            special_acc: 0.0,
        }
    }

    /// Replaces the RNG with a seeded one. For deterministic tests.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Binds scroll scrubbing. Active from the moment it is set, independent
    /// of the start gate.
    pub fn bind_scroll(&mut self, mapper: ScrollMapper) {
        self.mapper = Some(mapper);
    }

    pub fn has_started(&self) -> bool {
        self.has_started
    }

    pub fn player_state(&self) -> PlayerState {
        self.player.state()
    }

    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    /// The decorative images, once spawned. Hosts read this right after the
    /// first start to create the backing elements.
    pub fn images(&self) -> &[DecorativeImage] {
        self.scheduler.as_ref().map(|s| s.images()).unwrap_or(&[])
    }

    pub fn visible_image_count(&self) -> usize {
        self.scheduler
            .as_ref()
            .map(|s| s.visible_count())
            .unwrap_or(0)
    }

    /// Handles the start click. Idempotent: only the first call starts
    /// playback, spawns the image pools and retires the placeholders; later
    /// calls are no-ops.
    pub fn start<S: Stage>(&mut self, stage: &mut S) -> bool {
        if self.has_started {
            return false;
        }
        self.has_started = true;
        info!("header session started");

        stage.mark_started();

        if !self.config.placeholder_ids.is_empty() {
            if self.config.reduced_motion {
                for &id in &self.config.placeholder_ids {
                    stage.apply(StageOp::Retire { id });
                }
            } else {
                self.placeholder_retire_at = Some(self.elapsed + self.config.placeholder_fade);
            }
        }

        // Image pools come to life only now; ids follow the fixed elements.
        let first_image_id = self
            .config
            .placeholder_ids
            .iter()
            .copied()
            .chain(std::iter::once(self.config.container_id))
            .max()
            .unwrap_or(0)
            + 1;
        self.scheduler = Some(ImageScheduler::new(first_image_id));

        let commands = self.player.start();
        self.run_commands(commands);
        true
    }

    /// Advances the session by `dt` seconds of wall-clock time.
    pub fn update<S: Stage>(&mut self, dt: f64, stage: &mut S) {
        self.elapsed += dt;

        if !self.fade_in_done {
            self.fade_in.update(self.elapsed);
            stage.apply(StageOp::SetOpacity {
                id: self.config.container_id,
                opacity: self.fade_in.current_value,
            });
            self.fade_in_done = self.fade_in.finished(self.elapsed);
        }

        self.update_placeholders(stage);

        if !self.has_started {
            return;
        }

        let events = self.clock.advance(dt);
        let mut commands = Vec::new();
        for event in events {
            commands.extend(self.player.on_event(event));
        }
        self.run_commands(commands);

        self.primary_acc += dt;
        self.special_acc += dt;
        self.run_ticks(ImageKind::Primary, stage);
        self.run_ticks(ImageKind::Special, stage);
    }

    /// Feeds a scroll position through the bound mapper, if any.
    ///
    /// The frame output is applied as a direct seek, but only while the
    /// clock is not playing: click-gated playback owns the playhead once it
    /// runs. The dimension output is returned for the host to apply.
    pub fn on_scroll(&mut self, scroll_y: f32) -> Option<ScrollUpdate> {
        let mapper = self.mapper.as_ref()?;
        let update = mapper.update(scroll_y);
        if !self.clock.playing {
            self.clock.apply(PlaybackCommand::SeekTo(update.frame));
        }
        Some(update)
    }

    /// Fades, then retires, the placeholder corner images.
    fn update_placeholders<S: Stage>(&mut self, stage: &mut S) {
        let Some(retire_at) = self.placeholder_retire_at else {
            return;
        };
        let local = (self.elapsed - (retire_at - self.config.placeholder_fade)).max(0.0);
        self.placeholder_opacity.update(local);
        if self.elapsed >= retire_at {
            for &id in &self.config.placeholder_ids {
                stage.apply(StageOp::Retire { id });
            }
            self.placeholder_retire_at = None;
        } else {
            for &id in &self.config.placeholder_ids {
                stage.apply(StageOp::SetOpacity {
                    id,
                    opacity: self.placeholder_opacity.current_value,
                });
            }
        }
    }

    /// Drains due timer ticks for one pool.
    fn run_ticks<S: Stage>(&mut self, kind: ImageKind, stage: &mut S) {
        let interval = kind.interval();
        loop {
            let acc = match kind {
                ImageKind::Primary => &mut self.primary_acc,
                ImageKind::Special => &mut self.special_acc,
            };
            if *acc < interval {
                break;
            }
            *acc -= interval;

            let Some(scheduler) = self.scheduler.as_mut() else {
                break;
            };
            for op in scheduler.tick(kind, self.config.bounds, &mut self.rng) {
                stage.apply(op);
            }
        }
    }

    /// Runs commands against the clock, looping any immediately triggered
    /// events back through the player.
    fn run_commands(&mut self, commands: Vec<PlaybackCommand>) {
        let mut queue: VecDeque<PlaybackCommand> = commands.into();
        while let Some(command) = queue.pop_front() {
            debug!(?command, "playback command");
            for event in self.clock.apply(command) {
                queue.extend(self.player.on_event(event));
            }
        }
    }
}
