use crate::animation::Animatable;
use crate::geometry::{Point, Size, Vec2};

/// 2D transformation applied to a card or overlay during paint only.
///
/// Components are applied in a fixed order around `origin`: scale, then
/// rotation, then translation. A swipe pose therefore rotates the card in
/// place before moving it off screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Translation in x and y
    pub translate: Vec2,
    /// Scale in x and y (1.0 = no scale)
    pub scale: (f32, f32),
    /// Rotation in radians (clockwise)
    pub rotate: f32,
    /// Transform origin as fraction of size (0.5, 0.5 = center)
    pub origin: (f32, f32),
}

impl Transform {
    /// Identity transform (no transformation)
    pub const IDENTITY: Self = Self {
        translate: Vec2::ZERO,
        scale: (1.0, 1.0),
        rotate: 0.0,
        origin: (0.5, 0.5),
    };

    pub fn translate(translation: Vec2) -> Self {
        Self {
            translate: translation,
            ..Self::IDENTITY
        }
    }

    pub fn scale(x: f32, y: f32) -> Self {
        Self {
            scale: (x, y),
            ..Self::IDENTITY
        }
    }

    pub fn scale_uniform(scale: f32) -> Self {
        Self::scale(scale, scale)
    }

    /// Create a rotation transform (in radians)
    pub fn rotate(radians: f32) -> Self {
        Self {
            rotate: radians,
            ..Self::IDENTITY
        }
    }

    /// Rotate first, then translate.
    pub fn rotate_then_translate(radians: f32, translation: Vec2) -> Self {
        Self {
            translate: translation,
            rotate: radians,
            ..Self::IDENTITY
        }
    }

    pub fn with_origin(mut self, x: f32, y: f32) -> Self {
        self.origin = (x, y);
        self
    }

    pub fn is_identity(&self) -> bool {
        self.translate == Vec2::ZERO && self.scale == (1.0, 1.0) && self.rotate == 0.0
    }

    /// Apply this transform to a point of a box with the given size.
    pub fn apply_to_point(&self, point: Point, size: Size) -> Point {
        let origin_x = size.width * self.origin.0;
        let origin_y = size.height * self.origin.1;

        let mut tx = (point.x - origin_x) * self.scale.0;
        let mut ty = (point.y - origin_y) * self.scale.1;

        if self.rotate.abs() > 1e-6 {
            let cos = self.rotate.cos();
            let sin = self.rotate.sin();
            let rx = tx * cos - ty * sin;
            let ry = tx * sin + ty * cos;
            tx = rx;
            ty = ry;
        }

        Point::new(
            tx + origin_x + self.translate.x,
            ty + origin_y + self.translate.y,
        )
    }
}

impl Animatable for Transform {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            translate: Vec2::new(
                f32::lerp(&from.translate.x, &to.translate.x, t),
                f32::lerp(&from.translate.y, &to.translate.y, t),
            ),
            scale: (
                f32::lerp(&from.scale.0, &to.scale.0, t),
                f32::lerp(&from.scale.1, &to.scale.1, t),
            ),
            rotate: f32::lerp(&from.rotate, &to.rotate, t),
            // Origin doesn't animate
            origin: from.origin,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_identity_transform() {
        let t = Transform::IDENTITY;
        let p = t.apply_to_point(Point::new(10.0, 20.0), Size::new(100.0, 100.0));
        assert_eq!(p, Point::new(10.0, 20.0));
        assert!(t.is_identity());
    }

    #[test]
    fn test_translate() {
        let t = Transform::translate(Vec2::new(5.0, 10.0));
        let p = t.apply_to_point(Point::new(10.0, 20.0), Size::new(100.0, 100.0));
        assert_eq!(p, Point::new(15.0, 30.0));
    }

    #[test]
    fn test_scale_around_center() {
        let t = Transform::scale_uniform(2.0);
        let p = t.apply_to_point(Point::new(10.0, 10.0), Size::new(100.0, 100.0));
        // (10, 10) is (-40, -40) from the center, scaled to (-80, -80)
        assert!(approx_eq(p.x, -30.0));
        assert!(approx_eq(p.y, -30.0));
    }

    #[test]
    fn test_rotation_applied_before_translation() {
        let t = Transform::rotate_then_translate(std::f32::consts::FRAC_PI_2, Vec2::new(100.0, 0.0));
        // Right edge midpoint rotates onto the bottom edge midpoint, then moves right
        let p = t.apply_to_point(Point::new(100.0, 50.0), Size::new(100.0, 100.0));
        assert!(approx_eq(p.x, 150.0));
        assert!(approx_eq(p.y, 100.0));
    }

    #[test]
    fn test_transform_lerp() {
        let t1 = Transform::IDENTITY;
        let t2 = Transform::rotate_then_translate(1.0, Vec2::new(10.0, 20.0));
        let mid = Transform::lerp(&t1, &t2, 0.5);
        assert_eq!(mid.translate, Vec2::new(5.0, 10.0));
        assert_eq!(mid.rotate, 0.5);
        assert_eq!(mid.scale, (1.0, 1.0));
    }
}
