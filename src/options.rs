//! Animation options for individual cards and for the card stack.
//!
//! Every setter clamps its input to the legal range instead of rejecting it,
//! so options can be built from untrusted configuration without validation.

use std::f32::consts::{FRAC_PI_2, PI};
use std::time::Duration;

/// Timing and rotation settings for a single card's swipe, reverse swipe and
/// reset animations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardAnimationOptions {
    maximum_rotation_angle: f32,
    total_swipe_duration: Duration,
    total_reverse_swipe_duration: Duration,
    total_reset_duration: Duration,
    relative_swipe_overlay_fade_duration: f32,
    relative_reverse_swipe_overlay_fade_duration: f32,
    reset_spring_damping: f32,
}

impl CardAnimationOptions {
    pub const DEFAULT: Self = Self {
        maximum_rotation_angle: PI / 10.0,
        total_swipe_duration: Duration::from_millis(700),
        total_reverse_swipe_duration: Duration::from_millis(250),
        total_reset_duration: Duration::from_millis(600),
        relative_swipe_overlay_fade_duration: 0.15,
        relative_reverse_swipe_overlay_fade_duration: 0.15,
        reset_spring_damping: 0.5,
    };

    pub fn new() -> Self {
        Self::DEFAULT
    }

    /// The maximum rotation of a dragged card, clamped to [-π/2, π/2].
    pub fn with_maximum_rotation_angle(mut self, radians: f32) -> Self {
        self.maximum_rotation_angle = radians.clamp(-FRAC_PI_2, FRAC_PI_2);
        self
    }

    pub fn with_total_swipe_duration(mut self, duration: Duration) -> Self {
        self.total_swipe_duration = duration;
        self
    }

    pub fn with_total_reverse_swipe_duration(mut self, duration: Duration) -> Self {
        self.total_reverse_swipe_duration = duration;
        self
    }

    pub fn with_total_reset_duration(mut self, duration: Duration) -> Self {
        self.total_reset_duration = duration;
        self
    }

    /// Share of the swipe animation spent fading the overlay in, clamped to [0, 1].
    pub fn with_relative_swipe_overlay_fade_duration(mut self, fraction: f32) -> Self {
        self.relative_swipe_overlay_fade_duration = clamp_unit(fraction);
        self
    }

    /// Share of the reverse swipe animation spent fading the overlay out, clamped to [0, 1].
    pub fn with_relative_reverse_swipe_overlay_fade_duration(mut self, fraction: f32) -> Self {
        self.relative_reverse_swipe_overlay_fade_duration = clamp_unit(fraction);
        self
    }

    pub fn with_reset_spring_damping(mut self, damping: f32) -> Self {
        self.reset_spring_damping = clamp_unit(damping);
        self
    }

    pub fn maximum_rotation_angle(&self) -> f32 {
        self.maximum_rotation_angle
    }

    pub fn total_swipe_duration(&self) -> Duration {
        self.total_swipe_duration
    }

    pub fn total_reverse_swipe_duration(&self) -> Duration {
        self.total_reverse_swipe_duration
    }

    pub fn total_reset_duration(&self) -> Duration {
        self.total_reset_duration
    }

    pub fn relative_swipe_overlay_fade_duration(&self) -> f32 {
        self.relative_swipe_overlay_fade_duration
    }

    pub fn relative_reverse_swipe_overlay_fade_duration(&self) -> f32 {
        self.relative_reverse_swipe_overlay_fade_duration
    }

    pub fn reset_spring_damping(&self) -> f32 {
        self.reset_spring_damping
    }
}

impl Default for CardAnimationOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Durations for the background-card animations run by the stack.
///
/// Absent durations are derived from the top card's options when the
/// animation starts (half of the matching card-level duration).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardStackAnimationOptions {
    shift_duration: Duration,
    swipe_duration: Option<Duration>,
    undo_duration: Option<Duration>,
    reset_duration: Option<Duration>,
}

impl CardStackAnimationOptions {
    pub const DEFAULT: Self = Self {
        shift_duration: Duration::from_millis(100),
        swipe_duration: None,
        undo_duration: None,
        reset_duration: None,
    };

    pub fn new() -> Self {
        Self::DEFAULT
    }

    /// A zero shift duration is replaced by the default.
    pub fn with_shift_duration(mut self, duration: Duration) -> Self {
        self.shift_duration = if duration.is_zero() {
            Self::DEFAULT.shift_duration
        } else {
            duration
        };
        self
    }

    pub fn with_swipe_duration(mut self, duration: Option<Duration>) -> Self {
        self.swipe_duration = duration;
        self
    }

    pub fn with_undo_duration(mut self, duration: Option<Duration>) -> Self {
        self.undo_duration = duration;
        self
    }

    pub fn with_reset_duration(mut self, duration: Option<Duration>) -> Self {
        self.reset_duration = duration;
        self
    }

    pub fn shift_duration(&self) -> Duration {
        self.shift_duration
    }

    pub fn swipe_duration(&self) -> Option<Duration> {
        self.swipe_duration
    }

    pub fn undo_duration(&self) -> Option<Duration> {
        self.undo_duration
    }

    pub fn reset_duration(&self) -> Option<Duration> {
        self.reset_duration
    }
}

impl Default for CardStackAnimationOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_angle_is_clamped() {
        let options = CardAnimationOptions::new().with_maximum_rotation_angle(PI);
        assert_eq!(options.maximum_rotation_angle(), FRAC_PI_2);

        let options = CardAnimationOptions::new().with_maximum_rotation_angle(-PI);
        assert_eq!(options.maximum_rotation_angle(), -FRAC_PI_2);
    }

    #[test]
    fn test_fractions_are_clamped() {
        let options = CardAnimationOptions::new()
            .with_relative_swipe_overlay_fade_duration(1.5)
            .with_relative_reverse_swipe_overlay_fade_duration(-0.2)
            .with_reset_spring_damping(2.0);
        assert_eq!(options.relative_swipe_overlay_fade_duration(), 1.0);
        assert_eq!(options.relative_reverse_swipe_overlay_fade_duration(), 0.0);
        assert_eq!(options.reset_spring_damping(), 1.0);
    }

    #[test]
    fn test_stack_defaults() {
        let options = CardStackAnimationOptions::default();
        assert_eq!(options.shift_duration(), Duration::from_millis(100));
        assert_eq!(options.swipe_duration(), None);
        assert_eq!(options.undo_duration(), None);
        assert_eq!(options.reset_duration(), None);

        let options = options.with_shift_duration(Duration::ZERO);
        assert_eq!(options.shift_duration(), Duration::from_millis(100));
    }
}
