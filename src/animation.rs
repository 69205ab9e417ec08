use keyframe::{AnimationSequence, CanTween, EasingFunction, Keyframe};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported easing functions for animations.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl EasingFunction for EasingType {
    fn y(&self, x: f64) -> f64 {
        match self {
            EasingType::Linear => keyframe::functions::Linear.y(x),
            EasingType::EaseIn => keyframe::functions::EaseIn.y(x),
            EasingType::EaseOut => keyframe::functions::EaseOut.y(x),
            EasingType::EaseInOut => keyframe::functions::EaseInOut.y(x),
        }
    }
}

/// A generic animated value that tracks keyframes and current state.
///
/// Drives the container fade-in and the placeholder fade-out: anything the
/// session animates against elapsed time rather than scroll position.
#[derive(Clone)]
pub struct Animated<T>
where
    T: Clone + CanTween + Default,
{
    /// Raw storage of keyframes (value, absolute_time, easing).
    pub raw_keyframes: Vec<(T, f64, EasingType)>,
    /// The underlying keyframe sequence used for interpolation.
    pub sequence: AnimationSequence<T>,
    /// The current calculated value for the last updated time.
    pub current_value: T,
}

impl<T> Animated<T>
where
    T: Clone + CanTween + Default,
{
    /// Creates a new animated value with an initial state and no motion.
    pub fn new(initial: T) -> Self {
        let raw = vec![(initial.clone(), 0.0, EasingType::Linear)];
        let kf = Keyframe::new(initial.clone(), 0.0, EasingType::Linear);

        Self {
            sequence: AnimationSequence::from(vec![kf]),
            raw_keyframes: raw,
            current_value: initial,
        }
    }

    /// Appends a new keyframe to the end of the current sequence.
    ///
    /// # Arguments
    /// * `target` - The value to reach.
    /// * `duration` - Time in seconds to reach the target from the previous keyframe.
    /// * `easing` - The easing curve to use.
    pub fn add_keyframe(&mut self, target: T, duration: f64, easing: EasingType) {
        let current_end_time = self.sequence.duration();
        let new_time = current_end_time + duration;

        self.raw_keyframes.push((target.clone(), new_time, easing));

        // Rebuild sequence
        let frames: Vec<Keyframe<T>> = self
            .raw_keyframes
            .iter()
            .map(|(val, time, ease_type)| Keyframe::new(val.clone(), *time, *ease_type))
            .collect();

        self.sequence = AnimationSequence::from(frames);
    }

    /// Returns the total duration of the animation sequence in seconds.
    pub fn duration(&self) -> f64 {
        self.sequence.duration()
    }

    /// Whether the sequence has run past its final keyframe at `time`.
    pub fn finished(&self, time: f64) -> bool {
        time >= self.sequence.duration()
    }

    /// Updates `current_value` based on the provided absolute time.
    pub fn update(&mut self, time: f64) {
        self.sequence.advance_to(time);
        self.current_value = self.sequence.now();
    }
}

impl<T> fmt::Debug for Animated<T>
where
    T: Clone + CanTween + Default + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animated")
            .field("current_value", &self.current_value)
            .finish()
    }
}

/// Linear interpolation between two endpoints, used by the scroll mapper.
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
