use std::time::Duration;

use super::Card;
use crate::animation::{AnimationExecutor, AnimationRequest, Completion, Curve, Keyframe, Track};
use crate::direction::SwipeDirection;
use crate::geometry::Vec2;
use crate::transform::Transform;

/// Animation strategy for a single card.
///
/// Each method leaves the card's model values (transform and overlay alpha) at
/// the animation's final state and submits keyframes that start from the
/// previous model values.
pub trait CardAnimatable {
    /// Animate the card off screen. Submits a request completing with
    /// [`Completion::CardSwipe`].
    fn animate_swipe(
        &self,
        card: &mut Card,
        direction: SwipeDirection,
        forced: bool,
        executor: &mut dyn AnimationExecutor,
    );

    /// Animate the card back from its swiped-away pose. Submits a request
    /// completing with [`Completion::CardReverseSwipe`].
    fn animate_reverse_swipe(
        &self,
        card: &mut Card,
        direction: SwipeDirection,
        executor: &mut dyn AnimationExecutor,
    );

    /// Spring the card back to rest after a cancelled drag.
    fn animate_reset(&self, card: &mut Card, executor: &mut dyn AnimationExecutor);

    fn remove_all_animations(&self, card: &mut Card, executor: &mut dyn AnimationExecutor) {
        executor.cancel(card.id());
    }
}

/// The default card animator.
#[derive(Clone, Copy, Debug, Default)]
pub struct CardAnimator;

impl CardAnimator {
    /// Duration of the swipe-off animation.
    ///
    /// Programmatic swipes and slow flings take the full configured duration.
    /// A fling faster than the minimum swipe speed finishes sooner, in
    /// proportion to how much faster it was.
    pub fn swipe_duration(card: &Card, direction: SwipeDirection, forced: bool) -> Duration {
        let total = card.options().total_swipe_duration();
        if forced {
            return total;
        }
        let minimum_speed = card.minimum_swipe_speed(direction);
        if minimum_speed <= 0.0 {
            return total;
        }
        let velocity_factor = card.drag_speed(direction) / minimum_speed;
        if velocity_factor < 1.0 {
            return total;
        }
        Duration::from_secs_f32(1.0 / velocity_factor)
    }

    /// Fraction of the swipe spent fading the overlay in. Zero unless the
    /// swipe is programmatic and the card has an overlay for `direction`.
    pub fn relative_swipe_overlay_fade_duration(
        card: &Card,
        direction: SwipeDirection,
        forced: bool,
    ) -> f32 {
        if forced && card.overlay_for(direction).is_some() {
            card.options().relative_swipe_overlay_fade_duration()
        } else {
            0.0
        }
    }

    /// Final rotation of a swiped card.
    pub fn swipe_rotation_angle(card: &Card, direction: SwipeDirection, forced: bool) -> f32 {
        if direction.is_vertical() {
            return 0.0;
        }
        let sign = if direction == SwipeDirection::Left {
            -1.0
        } else {
            1.0
        };
        let maximum = card.options().maximum_rotation_angle();

        let touch = match card.touch_location() {
            Some(touch) if !forced => touch,
            _ => return 2.0 * sign * maximum,
        };

        let upper_half = touch.y < card.bounds().height / 2.0;
        let flipped = (direction == SwipeDirection::Left && upper_half)
            || (direction == SwipeDirection::Right && !upper_half);
        if flipped {
            -2.0 * maximum
        } else {
            2.0 * maximum
        }
    }

    /// Pose of the card once it is fully off screen.
    pub fn swipe_transform(card: &Card, direction: SwipeDirection, forced: bool) -> Transform {
        let drag_direction = card.tracker().translation().normalized();
        let heading = if forced || drag_direction == Vec2::ZERO {
            direction.vector()
        } else {
            drag_direction
        };
        let magnitude = card.tracker().viewport().max_side() + card.bounds().size().diagonal();
        Transform::rotate_then_translate(
            Self::swipe_rotation_angle(card, direction, forced),
            heading * magnitude,
        )
    }

    fn swipe_keyframes(
        card: &Card,
        direction: SwipeDirection,
        forced: bool,
        overlay_fade: f32,
    ) -> Vec<Keyframe> {
        let mut keyframes = Vec::with_capacity(2);
        if let Some(overlay) = card.overlay_for(direction) {
            keyframes.push(Keyframe::new(
                card.id(),
                Track::OverlayAlpha {
                    direction,
                    from: overlay.alpha,
                    to: 1.0,
                },
                0.0,
                overlay_fade,
            ));
        }
        keyframes.push(Keyframe::new(
            card.id(),
            Track::Transform {
                from: card.transform(),
                to: Self::swipe_transform(card, direction, forced),
            },
            overlay_fade,
            1.0 - overlay_fade,
        ));
        keyframes
    }
}

impl CardAnimatable for CardAnimator {
    fn animate_swipe(
        &self,
        card: &mut Card,
        direction: SwipeDirection,
        forced: bool,
        executor: &mut dyn AnimationExecutor,
    ) {
        self.remove_all_animations(card, executor);

        let duration = Self::swipe_duration(card, direction, forced);
        let overlay_fade = Self::relative_swipe_overlay_fade_duration(card, direction, forced);
        let keyframes = Self::swipe_keyframes(card, direction, forced, overlay_fade);
        log::trace!(
            "card {} swipe {:?} over {:?} (forced: {})",
            card.id().raw(),
            direction,
            duration,
            forced
        );

        card.set_transform(Self::swipe_transform(card, direction, forced));
        card.set_overlay_alpha(direction, 1.0);
        executor.submit(
            AnimationRequest::new(duration)
                .keyframes(keyframes)
                .on_complete(Completion::CardSwipe(card.id())),
        );
    }

    fn animate_reverse_swipe(
        &self,
        card: &mut Card,
        direction: SwipeDirection,
        executor: &mut dyn AnimationExecutor,
    ) {
        self.remove_all_animations(card, executor);

        // Jump to the swiped-away pose first
        let swiped = Self::swipe_transform(card, direction, true);
        let overlay_fade = Self::relative_swipe_overlay_fade_duration(card, direction, true);
        executor.submit(
            AnimationRequest::new(Duration::ZERO).keyframes(Self::swipe_keyframes(
                card,
                direction,
                true,
                overlay_fade,
            )),
        );

        let fade = card.options().relative_reverse_swipe_overlay_fade_duration();
        let mut request = AnimationRequest::new(card.options().total_reverse_swipe_duration())
            .keyframe(Keyframe::new(
                card.id(),
                Track::Transform {
                    from: swiped,
                    to: Transform::IDENTITY,
                },
                0.0,
                1.0 - fade,
            ))
            .on_complete(Completion::CardReverseSwipe(card.id()));
        if card.overlay_for(direction).is_some() {
            request = request.keyframe(Keyframe::new(
                card.id(),
                Track::OverlayAlpha {
                    direction,
                    from: 1.0,
                    to: 0.0,
                },
                1.0 - fade,
                fade,
            ));
        }
        log::trace!(
            "card {} reverse swipe {:?} over {:?}",
            card.id().raw(),
            direction,
            request.duration
        );

        card.set_transform(Transform::IDENTITY);
        card.set_overlay_alpha(direction, 0.0);
        executor.submit(request);
    }

    fn animate_reset(&self, card: &mut Card, executor: &mut dyn AnimationExecutor) {
        self.remove_all_animations(card, executor);

        let options = *card.options();
        let mut request = AnimationRequest::new(options.total_reset_duration())
            .curve(Curve::Spring {
                damping: options.reset_spring_damping(),
            })
            .keyframe(Keyframe::full(
                card.id(),
                Track::Transform {
                    from: card.transform(),
                    to: Transform::IDENTITY,
                },
            ));
        if let Some(direction) = card.active_direction() {
            if let Some(overlay) = card.overlay_for(direction) {
                request = request.keyframe(Keyframe::full(
                    card.id(),
                    Track::OverlayAlpha {
                        direction,
                        from: overlay.alpha,
                        to: 0.0,
                    },
                ));
            }
            card.set_overlay_alpha(direction, 0.0);
        }

        card.set_transform(Transform::IDENTITY);
        executor.submit(request);
    }
}
