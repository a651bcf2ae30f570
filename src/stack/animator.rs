//! Background card choreography.
//!
//! Every method runs after the state manager and the visible window have
//! already been updated for the transition it animates. Cards are laid out by
//! position: position 0 is the top card, higher positions sit behind it.

use std::time::Duration;

use crate::animation::{
    AnimationExecutor, AnimationRequest, Completion, Curve, Keyframe, TimingFunction, Track,
};
use crate::card::Card;
use crate::direction::SwipeDirection;
use crate::options::CardStackAnimationOptions;
use crate::transform::Transform;

/// Scale of every card behind the top one.
pub const BACKGROUND_CARD_SCALE: f32 = 0.95;

/// Everything a stack animation needs from its stack.
pub struct StackAnimationContext<'a> {
    /// The visible window, top card first.
    pub visible_cards: &'a mut [Card],
    pub options: CardStackAnimationOptions,
    pub executor: &'a mut dyn AnimationExecutor,
    /// Token attached to the request, if one is submitted.
    pub completion: Completion,
}

impl StackAnimationContext<'_> {
    fn background_cards(&mut self) -> impl Iterator<Item = (usize, &mut Card)> {
        self.visible_cards.iter_mut().enumerate().skip(1)
    }

    fn cancel_background_animations(&mut self) {
        for card in self.visible_cards.iter().skip(1) {
            self.executor.cancel(card.id());
        }
    }

    fn cancel_all_animations(&mut self) {
        for card in self.visible_cards.iter() {
            self.executor.cancel(card.id());
        }
    }
}

/// Animation strategy for the cards of a stack.
///
/// The `animate_*` methods return `true` when they submitted a request that
/// will complete with the context's token, so the stack knows to wait for it.
pub trait CardStackAnimatable {
    /// Resting transform of a card at `position`.
    fn transform_for_position(&self, position: usize) -> Transform {
        let scale = scale_factor(position);
        Transform::scale_uniform(scale)
    }

    /// Transform of a background card while the top card is dragged
    /// `percentage` of the way towards leaving.
    fn background_card_drag_transform(&self, position: usize, percentage: f32) -> Transform {
        let current = scale_factor(position);
        let next = scale_factor(position.saturating_sub(1));
        let percentage = percentage.clamp(0.0, 1.0);
        Transform::scale_uniform((1.0 - percentage) * current + percentage * next)
    }

    /// Move background cards back to rest after a cancelled drag. The stack
    /// stays enabled while this runs.
    fn animate_reset(&self, cx: StackAnimationContext<'_>) -> bool;

    /// Slide every visible card from where it sat before a shift by `distance`.
    fn animate_shift(&self, cx: StackAnimationContext<'_>, distance: isize, animated: bool)
        -> bool;

    /// Move the remaining cards up after `top` was swiped away.
    fn animate_swipe(
        &self,
        cx: StackAnimationContext<'_>,
        top: &Card,
        direction: SwipeDirection,
        forced: bool,
        animated: bool,
    ) -> bool;

    /// Push background cards back one position as an undone card returns on top.
    fn animate_undo(&self, cx: StackAnimationContext<'_>, animated: bool) -> bool;

    fn remove_background_card_animations(
        &self,
        cards: &[Card],
        executor: &mut dyn AnimationExecutor,
    ) {
        for card in cards.iter().skip(1) {
            executor.cancel(card.id());
        }
    }
}

/// 1.0 for the top card, [`BACKGROUND_CARD_SCALE`] for every other position.
pub fn scale_factor(position: usize) -> f32 {
    if position == 0 {
        1.0
    } else {
        BACKGROUND_CARD_SCALE
    }
}

/// The default stack animator.
#[derive(Clone, Copy, Debug, Default)]
pub struct CardStackAnimator;

impl CardStackAnimator {
    /// Delay before background cards follow a swipe. Programmatic swipes wait
    /// for the overlay fade window of the top card's swipe.
    pub fn swipe_delay(top: &Card, forced: bool) -> Duration {
        if !forced {
            return Duration::ZERO;
        }
        let options = top.options();
        options
            .total_swipe_duration()
            .mul_f32(options.relative_swipe_overlay_fade_duration())
    }

    pub fn swipe_duration(
        options: &CardStackAnimationOptions,
        top: &Card,
        direction: SwipeDirection,
        forced: bool,
    ) -> Duration {
        if let Some(duration) = options.swipe_duration() {
            return duration;
        }
        let total = top.options().total_swipe_duration();
        if forced {
            return total / 2;
        }
        let minimum_speed = top.minimum_swipe_speed(direction);
        if minimum_speed <= 0.0 {
            return total / 2;
        }
        let velocity_factor = top.drag_speed(direction) / minimum_speed;
        if velocity_factor < 1.0 {
            return total / 2;
        }
        Duration::from_secs_f32(1.0 / (2.0 * velocity_factor))
    }

    pub fn reset_duration(options: &CardStackAnimationOptions, top: &Card) -> Duration {
        options
            .reset_duration()
            .unwrap_or_else(|| top.options().total_reset_duration() / 2)
    }

    pub fn undo_duration(options: &CardStackAnimationOptions, top: &Card) -> Duration {
        options
            .undo_duration()
            .unwrap_or_else(|| top.options().total_reverse_swipe_duration() / 2)
    }

    /// Keyframes moving each card from its current model transform to the
    /// resting transform of its position, and the matching model update.
    fn settle<'c>(&self, cards: impl Iterator<Item = (usize, &'c mut Card)>) -> Vec<Keyframe> {
        let mut keyframes = Vec::new();
        for (position, card) in cards {
            let to = self.transform_for_position(position);
            keyframes.push(Keyframe::full(
                card.id(),
                Track::Transform {
                    from: card.transform(),
                    to,
                },
            ));
            card.set_transform(to);
        }
        keyframes
    }

    fn submit(
        executor: &mut dyn AnimationExecutor,
        request: AnimationRequest,
        completion: Completion,
    ) -> bool {
        log::trace!(
            "stack animation {:?}: duration {:?}, delay {:?}",
            completion,
            request.duration,
            request.delay
        );
        executor.submit(
            request
                .curve(Curve::Timing(TimingFunction::EaseOut))
                .on_complete(completion),
        );
        true
    }
}

impl CardStackAnimatable for CardStackAnimator {
    fn animate_reset(&self, mut cx: StackAnimationContext<'_>) -> bool {
        cx.cancel_background_animations();
        let Some(top) = cx.visible_cards.first() else {
            return false;
        };
        let duration = Self::reset_duration(&cx.options, top);

        let keyframes = self.settle(cx.background_cards());
        Self::submit(
            cx.executor,
            AnimationRequest::new(duration).keyframes(keyframes),
            cx.completion,
        )
    }

    fn animate_shift(
        &self,
        mut cx: StackAnimationContext<'_>,
        distance: isize,
        animated: bool,
    ) -> bool {
        cx.cancel_all_animations();
        if !animated {
            for (position, card) in cx.visible_cards.iter_mut().enumerate() {
                card.set_transform(self.transform_for_position(position));
            }
            return false;
        }

        // Start from the arrangement before the shift. Cards that wrapped
        // around came from behind the top card.
        for (position, card) in cx.visible_cards.iter_mut().enumerate() {
            let previous = usize::try_from(position as isize + distance).unwrap_or(1);
            card.set_transform(self.transform_for_position(previous));
        }
        let keyframes = self.settle(cx.visible_cards.iter_mut().enumerate());
        Self::submit(
            cx.executor,
            AnimationRequest::new(cx.options.shift_duration()).keyframes(keyframes),
            cx.completion,
        )
    }

    fn animate_swipe(
        &self,
        mut cx: StackAnimationContext<'_>,
        top: &Card,
        direction: SwipeDirection,
        forced: bool,
        animated: bool,
    ) -> bool {
        cx.cancel_all_animations();
        if !animated {
            for (position, card) in cx.visible_cards.iter_mut().enumerate() {
                card.set_transform(self.transform_for_position(position));
            }
            return false;
        }

        let delay = Self::swipe_delay(top, forced);
        let duration = Self::swipe_duration(&cx.options, top, direction, forced);

        // Nothing left to move; still complete on time
        if cx.visible_cards.is_empty() {
            return Self::submit(
                cx.executor,
                AnimationRequest::new(duration).delay(delay),
                cx.completion,
            );
        }

        let keyframes = self.settle(cx.visible_cards.iter_mut().enumerate());
        Self::submit(
            cx.executor,
            AnimationRequest::new(duration)
                .delay(delay)
                .keyframes(keyframes),
            cx.completion,
        )
    }

    fn animate_undo(&self, mut cx: StackAnimationContext<'_>, animated: bool) -> bool {
        cx.cancel_background_animations();
        if !animated {
            for (position, card) in cx.background_cards() {
                let to = self.transform_for_position(position);
                card.set_transform(to);
            }
            return false;
        }
        let Some(top) = cx.visible_cards.first() else {
            return false;
        };
        let duration = Self::undo_duration(&cx.options, top);

        // Background cards start one position further forward
        for (position, card) in cx.background_cards() {
            let from = self.transform_for_position(position - 1);
            card.set_transform(from);
        }
        let keyframes = self.settle(cx.background_cards());
        Self::submit(
            cx.executor,
            AnimationRequest::new(duration).keyframes(keyframes),
            cx.completion,
        )
    }
}
