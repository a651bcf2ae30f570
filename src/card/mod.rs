//! A single swipeable card.
//!
//! A [`Card`] composes a [`DragTracker`] with a [`CardAnimatable`] strategy and
//! a [`CardLayout`] strategy. It owns decorative per-direction overlays and
//! the model values (transform, overlay alpha) that its animations end on.
//!
//! Cards do not hold a reference to their owner. Every interaction pushes a
//! [`CardEvent`] onto the card's outbox; the owner drains it with
//! [`Card::drain_events`] and forwards the events to a [`CardDelegate`].

mod animator;
mod layout;

use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

pub use animator::{CardAnimatable, CardAnimator};
pub use layout::{CardLayout, DefaultCardLayout};

use crate::animation::AnimationExecutor;
use crate::direction::{SwipeDirection, SwipeDirections};
use crate::drag::{DragOutcome, DragPhase, DragSession, DragTracker};
use crate::geometry::{Point, Rect, Size};
use crate::options::CardAnimationOptions;
use crate::transform::Transform;

/// Default height reserved for a card's footer.
pub const DEFAULT_FOOTER_HEIGHT: f32 = 100.0;

/// Unique identifier for a card instance
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CardId(u64);

static NEXT_CARD_ID: AtomicU64 = AtomicU64::new(1);

impl CardId {
    /// Generate a new unique card ID
    pub fn next() -> Self {
        CardId(NEXT_CARD_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value (for debugging/logging).
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Host-side handle of a view placed in one of a card's slots.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ViewId(pub u64);

/// A decorative view bound to one swipe direction. Never hit-testable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Overlay {
    pub view: ViewId,
    pub alpha: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardState {
    Idle,
    Dragging,
    Swiping,
    Reversing,
}

/// Something a card reports to its owner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardEvent {
    Tapped { location: Point },
    BeganSwipe,
    ContinuedSwipe,
    CancelledSwipe,
    Swiped {
        direction: SwipeDirection,
        forced: bool,
        animated: bool,
    },
    ReverseSwiped {
        direction: SwipeDirection,
        animated: bool,
    },
    /// The swipe-off animation ended (or was skipped).
    SwipeFinished,
    /// The reverse swipe animation ended (or was skipped).
    ReverseSwipeFinished,
}

impl CardEvent {
    pub fn dispatch(self, card: CardId, delegate: &mut dyn CardDelegate) {
        match self {
            CardEvent::Tapped { location } => delegate.card_did_tap(card, location),
            CardEvent::BeganSwipe => delegate.card_did_begin_swipe(card),
            CardEvent::ContinuedSwipe => delegate.card_did_continue_swipe(card),
            CardEvent::CancelledSwipe => delegate.card_did_cancel_swipe(card),
            CardEvent::Swiped {
                direction, forced, ..
            } => delegate.card_did_swipe(card, direction, forced),
            CardEvent::ReverseSwiped { direction, .. } => {
                delegate.card_did_reverse_swipe(card, direction)
            }
            CardEvent::SwipeFinished => delegate.card_did_finish_swipe(card),
            CardEvent::ReverseSwipeFinished => delegate.card_did_finish_reverse_swipe(card),
        }
    }
}

/// Receiver of [`CardEvent`]s. Every hook defaults to a no-op.
pub trait CardDelegate {
    fn card_did_tap(&mut self, card: CardId, location: Point) {
        let _ = (card, location);
    }

    fn card_did_begin_swipe(&mut self, card: CardId) {
        let _ = card;
    }

    fn card_did_continue_swipe(&mut self, card: CardId) {
        let _ = card;
    }

    fn card_did_cancel_swipe(&mut self, card: CardId) {
        let _ = card;
    }

    fn card_did_swipe(&mut self, card: CardId, direction: SwipeDirection, forced: bool) {
        let _ = (card, direction, forced);
    }

    fn card_did_reverse_swipe(&mut self, card: CardId, direction: SwipeDirection) {
        let _ = (card, direction);
    }

    fn card_did_finish_swipe(&mut self, card: CardId) {
        let _ = card;
    }

    fn card_did_finish_reverse_swipe(&mut self, card: CardId) {
        let _ = card;
    }
}

pub struct Card {
    id: CardId,
    tracker: DragTracker,
    animator: Rc<dyn CardAnimatable>,
    layout: Rc<dyn CardLayout>,
    animation_options: CardAnimationOptions,
    content: Option<ViewId>,
    footer: Option<ViewId>,
    footer_height: f32,
    footer_is_transparent: bool,
    overlays: [Option<Overlay>; 4],
    touch_location: Option<Point>,
    frame: Rect,
    transform: Transform,
    user_interaction_enabled: bool,
    state: CardState,
    events: Vec<CardEvent>,
}

impl Card {
    pub fn new() -> Self {
        Self {
            id: CardId::next(),
            tracker: DragTracker::new(Size::ZERO),
            animator: Rc::new(CardAnimator),
            layout: Rc::new(DefaultCardLayout),
            animation_options: CardAnimationOptions::DEFAULT,
            content: None,
            footer: None,
            footer_height: DEFAULT_FOOTER_HEIGHT,
            footer_is_transparent: false,
            overlays: [None; 4],
            touch_location: None,
            frame: Rect::ZERO,
            transform: Transform::IDENTITY,
            user_interaction_enabled: true,
            state: CardState::Idle,
            events: Vec::new(),
        }
    }

    // Builder-style configuration

    pub fn content(mut self, view: ViewId) -> Self {
        self.content = Some(view);
        self
    }

    pub fn footer(mut self, view: ViewId, height: f32) -> Self {
        self.footer = Some(view);
        self.footer_height = height.max(0.0);
        self
    }

    pub fn overlay(mut self, direction: SwipeDirection, view: ViewId) -> Self {
        self.set_overlay(direction, Some(view));
        self
    }

    pub fn animation_options(mut self, options: CardAnimationOptions) -> Self {
        self.animation_options = options;
        self
    }

    pub fn swipe_directions(mut self, directions: SwipeDirections) -> Self {
        self.tracker.set_swipe_directions(directions);
        self
    }

    pub fn animator(mut self, animator: Rc<dyn CardAnimatable>) -> Self {
        self.animator = animator;
        self
    }

    pub fn layout(mut self, layout: Rc<dyn CardLayout>) -> Self {
        self.layout = layout;
        self
    }

    pub fn frame(mut self, frame: Rect) -> Self {
        self.frame = frame;
        self
    }

    pub fn viewport(mut self, viewport: Size) -> Self {
        self.tracker.set_viewport(viewport);
        self
    }

    // Accessors

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    pub fn tracker(&self) -> &DragTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut DragTracker {
        &mut self.tracker
    }

    pub fn options(&self) -> &CardAnimationOptions {
        &self.animation_options
    }

    pub fn set_animation_options(&mut self, options: CardAnimationOptions) {
        self.animation_options = options;
    }

    pub fn content_view(&self) -> Option<ViewId> {
        self.content
    }

    pub fn set_content(&mut self, view: Option<ViewId>) {
        self.content = view;
    }

    pub fn footer_view(&self) -> Option<ViewId> {
        self.footer
    }

    pub fn set_footer(&mut self, view: Option<ViewId>) {
        self.footer = view;
    }

    pub fn footer_height(&self) -> f32 {
        self.footer_height
    }

    pub fn set_footer_height(&mut self, height: f32) {
        self.footer_height = height.max(0.0);
    }

    pub fn footer_is_transparent(&self) -> bool {
        self.footer_is_transparent
    }

    pub fn set_footer_transparent(&mut self, transparent: bool) {
        self.footer_is_transparent = transparent;
    }

    /// Replace the overlay for `direction`. A new overlay starts fully transparent.
    pub fn set_overlay(&mut self, direction: SwipeDirection, view: Option<ViewId>) {
        self.overlays[direction.index()] = view.map(|view| Overlay { view, alpha: 0.0 });
    }

    pub fn overlay_for(&self, direction: SwipeDirection) -> Option<&Overlay> {
        self.overlays[direction.index()].as_ref()
    }

    /// Model alpha of the overlay for `direction`, if one is registered.
    pub fn overlay_alpha(&self, direction: SwipeDirection) -> Option<f32> {
        self.overlay_for(direction).map(|overlay| overlay.alpha)
    }

    pub fn set_overlay_alpha(&mut self, direction: SwipeDirection, alpha: f32) {
        if let Some(overlay) = self.overlays[direction.index()].as_mut() {
            overlay.alpha = alpha.clamp(0.0, 1.0);
        }
    }

    pub fn touch_location(&self) -> Option<Point> {
        self.touch_location
    }

    pub fn frame_rect(&self) -> Rect {
        self.frame
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    /// The card's own coordinate space.
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.frame.size())
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.tracker.set_viewport(viewport);
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    pub fn is_user_interaction_enabled(&self) -> bool {
        self.user_interaction_enabled
    }

    pub fn set_user_interaction_enabled(&mut self, enabled: bool) {
        self.user_interaction_enabled = enabled;
    }

    pub fn content_frame(&self) -> Rect {
        self.layout.content_frame(self)
    }

    pub fn footer_frame(&self) -> Rect {
        self.layout.footer_frame(self)
    }

    pub fn overlay_container_frame(&self) -> Rect {
        self.layout.overlay_container_frame(self)
    }

    /// Take every event reported since the last drain.
    pub fn drain_events(&mut self) -> Vec<CardEvent> {
        std::mem::take(&mut self.events)
    }

    // Drag projections, forwarded from the tracker

    pub fn drag_percentage(&self, direction: SwipeDirection) -> f32 {
        self.tracker.drag_percentage(direction)
    }

    pub fn drag_speed(&self, direction: SwipeDirection) -> f32 {
        self.tracker.drag_speed(direction)
    }

    pub fn minimum_swipe_speed(&self, direction: SwipeDirection) -> f32 {
        self.tracker.minimum_swipe_speed(direction)
    }

    pub fn active_direction(&self) -> Option<SwipeDirection> {
        self.tracker.active_direction()
    }

    /// Opacity of the overlay for `direction` during a drag.
    ///
    /// Only the active direction shows its overlay, and only to the extent its
    /// drag percentage outweighs all the other directions combined.
    pub fn overlay_percentage(&self, direction: SwipeDirection) -> f32 {
        if self.active_direction() != Some(direction) {
            return 0.0;
        }
        let total: f32 = self
            .tracker
            .swipe_directions()
            .directions()
            .map(|d| self.drag_percentage(d))
            .sum();
        (2.0 * self.drag_percentage(direction) - total).clamp(0.0, 1.0)
    }

    /// Rotation while following the pointer. Cards grabbed in their lower half
    /// tilt the opposite way.
    pub fn drag_rotation_angle(&self) -> f32 {
        let viewport_width = self.tracker.viewport().width;
        if viewport_width <= 0.0 {
            return 0.0;
        }
        let touch = self.touch_location.unwrap_or(Point::ORIGIN);
        let rotation_direction_y = if touch.y >= self.bounds().height / 2.0 {
            -1.0
        } else {
            1.0
        };
        let strength = (self.tracker.translation().x / viewport_width).clamp(-1.0, 1.0);
        rotation_direction_y * strength * self.animation_options.maximum_rotation_angle().abs()
    }

    pub fn drag_transform(&self) -> Transform {
        Transform::rotate_then_translate(self.drag_rotation_angle(), self.tracker.translation())
    }

    // Interaction

    pub fn handle_tap(&mut self, location: Point) {
        if !self.user_interaction_enabled {
            return;
        }
        self.touch_location = Some(location);
        self.events.push(CardEvent::Tapped { location });
    }

    pub fn handle_drag(
        &mut self,
        phase: DragPhase,
        session: &dyn DragSession,
        executor: &mut dyn AnimationExecutor,
    ) {
        if !self.user_interaction_enabled {
            return;
        }
        let Some(outcome) = self.tracker.handle(phase, session) else {
            return;
        };

        match outcome {
            DragOutcome::BeganSwiping => {
                self.touch_location = Some(session.current_location());
                self.state = CardState::Dragging;
                self.events.push(CardEvent::BeganSwipe);
                self.remove_all_animations(executor);
            }
            DragOutcome::ContinuedSwiping => {
                self.events.push(CardEvent::ContinuedSwipe);
                self.transform = self.drag_transform();
                for direction in SwipeDirection::ALL {
                    let alpha = self.overlay_percentage(direction);
                    self.set_overlay_alpha(direction, alpha);
                }
            }
            DragOutcome::Swiped(direction) => {
                self.swipe_action(direction, false, true, executor);
            }
            DragOutcome::Cancelled => {
                self.state = CardState::Idle;
                self.events.push(CardEvent::CancelledSwipe);
                let animator = Rc::clone(&self.animator);
                animator.animate_reset(self, executor);
            }
        }
    }

    /// Swipe the card off programmatically.
    pub fn swipe(
        &mut self,
        direction: SwipeDirection,
        animated: bool,
        executor: &mut dyn AnimationExecutor,
    ) {
        self.swipe_action(direction, true, animated, executor);
    }

    fn swipe_action(
        &mut self,
        direction: SwipeDirection,
        forced: bool,
        animated: bool,
        executor: &mut dyn AnimationExecutor,
    ) {
        self.user_interaction_enabled = false;
        self.state = CardState::Swiping;
        self.events.push(CardEvent::Swiped {
            direction,
            forced,
            animated,
        });
        if animated {
            let animator = Rc::clone(&self.animator);
            animator.animate_swipe(self, direction, forced, executor);
        } else {
            self.swipe_did_finish();
        }
    }

    /// Bring the card back from its swiped-away pose in `direction`.
    pub fn reverse_swipe(
        &mut self,
        direction: SwipeDirection,
        animated: bool,
        executor: &mut dyn AnimationExecutor,
    ) {
        self.user_interaction_enabled = false;
        self.state = CardState::Reversing;
        self.events.push(CardEvent::ReverseSwiped { direction, animated });
        if animated {
            let animator = Rc::clone(&self.animator);
            animator.animate_reverse_swipe(self, direction, executor);
        } else {
            self.transform = Transform::IDENTITY;
            self.set_overlay_alpha(direction, 0.0);
            self.reverse_swipe_did_finish();
        }
    }

    /// Called when the swipe-off animation completes.
    pub fn swipe_did_finish(&mut self) {
        self.events.push(CardEvent::SwipeFinished);
    }

    /// Called when the reverse swipe animation completes.
    pub fn reverse_swipe_did_finish(&mut self) {
        self.user_interaction_enabled = true;
        self.state = CardState::Idle;
        self.events.push(CardEvent::ReverseSwipeFinished);
    }

    pub fn remove_all_animations(&mut self, executor: &mut dyn AnimationExecutor) {
        let animator = Rc::clone(&self.animator);
        animator.remove_all_animations(self, executor);
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Card")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("frame", &self.frame)
            .field("transform", &self.transform)
            .field("user_interaction_enabled", &self.user_interaction_enabled)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{AnimationRequest, Completion, Track};
    use crate::drag::DragSample;
    use crate::geometry::Vec2;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn card() -> Card {
        let mut card = Card::new()
            .frame(Rect::new(0.0, 0.0, 300.0, 400.0))
            .viewport(Size::new(400.0, 800.0))
            .overlay(SwipeDirection::Left, ViewId(1))
            .overlay(SwipeDirection::Right, ViewId(2));
        for direction in SwipeDirection::ALL {
            card.tracker_mut().set_minimum_swipe_distance(direction, 100.0);
        }
        card
    }

    fn sample(translation: Vec2, velocity: Vec2) -> DragSample {
        DragSample::new(translation, velocity, Point::new(150.0, 50.0))
    }

    #[test]
    fn test_new_overlay_starts_transparent() {
        let mut card = card();
        assert_eq!(card.overlay_alpha(SwipeDirection::Left), Some(0.0));
        assert_eq!(card.overlay_alpha(SwipeDirection::Up), None);

        card.set_overlay(SwipeDirection::Up, Some(ViewId(9)));
        assert_eq!(card.overlay_for(SwipeDirection::Up).unwrap().view, ViewId(9));
        assert_eq!(card.overlay_alpha(SwipeDirection::Up), Some(0.0));

        card.set_overlay(SwipeDirection::Up, None);
        assert!(card.overlay_for(SwipeDirection::Up).is_none());
    }

    #[test]
    fn test_tap_records_location() {
        let mut card = card();
        card.handle_tap(Point::new(10.0, 20.0));
        assert_eq!(card.touch_location(), Some(Point::new(10.0, 20.0)));
        assert_eq!(
            card.drain_events(),
            vec![CardEvent::Tapped {
                location: Point::new(10.0, 20.0)
            }]
        );
        assert!(card.drain_events().is_empty());
    }

    #[test]
    fn test_drag_updates_transform_and_overlays() {
        let mut card = card();
        let mut executor: Vec<AnimationRequest> = Vec::new();

        card.handle_drag(DragPhase::Began, &sample(Vec2::ZERO, Vec2::ZERO), &mut executor);
        assert_eq!(card.state(), CardState::Dragging);

        card.handle_drag(
            DragPhase::Changed,
            &sample(Vec2::new(-60.0, 10.0), Vec2::ZERO),
            &mut executor,
        );
        assert_eq!(card.transform().translate, Vec2::new(-60.0, 10.0));
        // left 0.6, down 0.1: 2 * 0.6 - 0.7
        assert!(approx_eq(card.overlay_alpha(SwipeDirection::Left).unwrap(), 0.5));
        assert_eq!(card.overlay_alpha(SwipeDirection::Right), Some(0.0));

        assert_eq!(
            card.drain_events(),
            vec![CardEvent::BeganSwipe, CardEvent::ContinuedSwipe]
        );
    }

    #[test]
    fn test_drag_rotation_follows_touch_half() {
        let mut card = card();
        let mut executor: Vec<AnimationRequest> = Vec::new();
        let max = card.options().maximum_rotation_angle();

        // Upper half, dragging right by the full viewport width
        card.handle_drag(DragPhase::Began, &sample(Vec2::ZERO, Vec2::ZERO), &mut executor);
        card.handle_drag(
            DragPhase::Changed,
            &sample(Vec2::new(800.0, 0.0), Vec2::ZERO),
            &mut executor,
        );
        assert!(approx_eq(card.drag_rotation_angle(), max));

        let lower = DragSample::new(Vec2::ZERO, Vec2::ZERO, Point::new(150.0, 300.0));
        card.handle_drag(DragPhase::Began, &lower, &mut executor);
        card.handle_drag(
            DragPhase::Changed,
            &DragSample::new(Vec2::new(200.0, 0.0), Vec2::ZERO, Point::new(150.0, 300.0)),
            &mut executor,
        );
        assert!(approx_eq(card.drag_rotation_angle(), -0.5 * max));
    }

    #[test]
    fn test_drag_rotation_is_capped_both_ways() {
        let mut card = card();
        let mut executor: Vec<AnimationRequest> = Vec::new();
        let max = card.options().maximum_rotation_angle();

        card.handle_drag(DragPhase::Began, &sample(Vec2::ZERO, Vec2::ZERO), &mut executor);
        card.handle_drag(
            DragPhase::Changed,
            &sample(Vec2::new(-1200.0, 0.0), Vec2::ZERO),
            &mut executor,
        );
        assert!(approx_eq(card.drag_rotation_angle(), -max));

        card.handle_drag(
            DragPhase::Changed,
            &sample(Vec2::new(1200.0, 0.0), Vec2::ZERO),
            &mut executor,
        );
        assert!(approx_eq(card.drag_rotation_angle(), max));
    }

    #[test]
    fn test_drag_end_swipes() {
        let mut card = card();
        let mut executor: Vec<AnimationRequest> = Vec::new();
        card.handle_drag(DragPhase::Began, &sample(Vec2::ZERO, Vec2::ZERO), &mut executor);
        card.handle_drag(
            DragPhase::Ended,
            &sample(Vec2::new(120.0, 0.0), Vec2::ZERO),
            &mut executor,
        );

        assert_eq!(card.state(), CardState::Swiping);
        assert!(!card.is_user_interaction_enabled());
        let events = card.drain_events();
        assert_eq!(
            events.last(),
            Some(&CardEvent::Swiped {
                direction: SwipeDirection::Right,
                forced: false,
                animated: true
            })
        );
        let request = executor.last().unwrap();
        assert_eq!(request.completion, Some(Completion::CardSwipe(card.id())));
    }

    #[test]
    fn test_drag_end_cancels_with_spring_reset() {
        let mut card = card();
        let mut executor: Vec<AnimationRequest> = Vec::new();
        card.handle_drag(DragPhase::Began, &sample(Vec2::ZERO, Vec2::ZERO), &mut executor);
        card.handle_drag(
            DragPhase::Changed,
            &sample(Vec2::new(-40.0, 0.0), Vec2::ZERO),
            &mut executor,
        );
        card.handle_drag(
            DragPhase::Ended,
            &sample(Vec2::new(-40.0, 0.0), Vec2::ZERO),
            &mut executor,
        );

        assert_eq!(card.state(), CardState::Idle);
        assert!(card.is_user_interaction_enabled());
        assert_eq!(card.transform(), Transform::IDENTITY);
        assert_eq!(card.overlay_alpha(SwipeDirection::Left), Some(0.0));
        assert_eq!(card.drain_events().last(), Some(&CardEvent::CancelledSwipe));

        let reset = executor.last().unwrap();
        assert!(reset.completion.is_none());
        assert!(reset.keyframes.iter().any(|k| matches!(
            k.track,
            Track::OverlayAlpha {
                direction: SwipeDirection::Left,
                to,
                ..
            } if to == 0.0
        )));
    }

    #[test]
    fn test_disabled_card_ignores_input() {
        let mut card = card();
        let mut executor: Vec<AnimationRequest> = Vec::new();
        card.set_user_interaction_enabled(false);
        card.handle_tap(Point::new(1.0, 1.0));
        card.handle_drag(DragPhase::Began, &sample(Vec2::ZERO, Vec2::ZERO), &mut executor);
        assert!(card.drain_events().is_empty());
        assert!(executor.is_empty());
    }

    #[test]
    fn test_unanimated_swipe_finishes_synchronously() {
        let mut card = card();
        let mut executor: Vec<AnimationRequest> = Vec::new();
        card.swipe(SwipeDirection::Up, false, &mut executor);

        assert!(executor.is_empty());
        assert_eq!(
            card.drain_events(),
            vec![
                CardEvent::Swiped {
                    direction: SwipeDirection::Up,
                    forced: true,
                    animated: false
                },
                CardEvent::SwipeFinished
            ]
        );
    }

    #[test]
    fn test_reverse_swipe_reenables_interaction() {
        let mut card = card();
        let mut executor: Vec<AnimationRequest> = Vec::new();
        card.reverse_swipe(SwipeDirection::Left, true, &mut executor);
        assert!(!card.is_user_interaction_enabled());
        assert_eq!(card.state(), CardState::Reversing);
        assert_eq!(
            executor.last().unwrap().completion,
            Some(Completion::CardReverseSwipe(card.id()))
        );

        card.reverse_swipe_did_finish();
        assert!(card.is_user_interaction_enabled());
        assert_eq!(card.state(), CardState::Idle);

        card.reverse_swipe(SwipeDirection::Left, false, &mut executor);
        assert!(card.is_user_interaction_enabled());
        assert_eq!(card.transform(), Transform::IDENTITY);
    }

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl CardDelegate for Recorder {
        fn card_did_swipe(&mut self, _card: CardId, direction: SwipeDirection, forced: bool) {
            self.0.push(format!("swipe {:?} {}", direction, forced));
        }

        fn card_did_finish_swipe(&mut self, _card: CardId) {
            self.0.push("finished".into());
        }
    }

    #[test]
    fn test_events_dispatch_to_delegate() {
        let mut card = card();
        let mut executor: Vec<AnimationRequest> = Vec::new();
        let mut recorder = Recorder::default();
        card.swipe(SwipeDirection::Right, false, &mut executor);
        for event in card.drain_events() {
            event.dispatch(card.id(), &mut recorder);
        }
        assert_eq!(recorder.0, vec!["swipe Right true", "finished"]);
    }
}
