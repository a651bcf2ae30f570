//! Easing curves for keyframed card animations.
//!
//! Card swipes run with [`TimingFunction::Linear`] so that consecutive
//! keyframes join without a visible pause. Background cards settle with
//! [`TimingFunction::EaseOut`]; card resets use a spring instead (see
//! [`Curve::Spring`](super::Curve::Spring)).

/// Timing function that controls the animation curve
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum TimingFunction {
    /// Linear interpolation (constant speed)
    #[default]
    Linear,
    /// Starts fast, ends slow
    EaseOut,
}

impl TimingFunction {
    /// Evaluate the timing function at time t (0.0 to 1.0), clamping t first.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseOut => ease_out(t),
        }
    }
}

fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}
