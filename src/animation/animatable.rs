use crate::geometry::Vec2;

/// Values a [`Timeline`](super::Timeline) can interpolate.
pub trait Animatable: Clone + PartialEq + 'static {
    /// Linear interpolation between two values
    /// t = 0.0 returns `from`, t = 1.0 returns `to`
    /// t can exceed [0, 1] range for spring overshoot
    fn lerp(from: &Self, to: &Self, t: f32) -> Self;
}

impl Animatable for f32 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Animatable for Vec2 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Vec2::new(f32::lerp(&from.x, &to.x, t), f32::lerp(&from.y, &to.y, t))
    }
}
