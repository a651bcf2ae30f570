//! The card stack coordinator.
//!
//! A [`CardStack`] owns the visible window of cards: the first
//! `number_of_visible_cards` remaining indices, materialized through a
//! [`CardStackDataSource`]. Position 0 is the interactive top card; every other
//! visible card is a scaled-down background card.
//!
//! Animations are fire-and-forget. The state manager is updated first, the
//! animators describe the visual consequence, and the host reports the
//! completions back through [`CardStack::animation_did_finish`] (or
//! [`CardStack::advance`] when the stack drives its own [`Timeline`]).

mod animator;
mod layout;
mod state;

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

pub use animator::{
    scale_factor, CardStackAnimatable, CardStackAnimator, StackAnimationContext,
    BACKGROUND_CARD_SCALE,
};
pub use layout::{CardStackLayout, DefaultCardStackLayout};
pub use state::{CardStackStateManager, Swipe};

use crate::animation::{AnimationExecutor, Completion, Presentation, Timeline};
use crate::card::{Card, CardEvent, CardId};
use crate::direction::SwipeDirection;
use crate::drag::{DragPhase, DragSession};
use crate::geometry::{Padding, Point, Rect, Size};
use crate::options::CardStackAnimationOptions;

/// Provides the cards of a stack.
pub trait CardStackDataSource {
    fn number_of_cards(&self) -> usize;

    /// Build the card for data-source `index`.
    fn card_at(&mut self, index: usize) -> Card;
}

/// Receives stack-level events. Every hook defaults to a no-op.
pub trait CardStackDelegate {
    fn card_selected(&mut self, index: usize) {
        let _ = index;
    }

    fn card_swiped(&mut self, index: usize, direction: SwipeDirection) {
        let _ = (index, direction);
    }

    fn card_undone(&mut self, index: usize, direction: SwipeDirection) {
        let _ = (index, direction);
    }

    fn all_cards_swiped(&mut self) {}
}

/// Configuration for a card stack
#[derive(Clone, Debug, PartialEq)]
pub struct CardStackConfig {
    /// Maximum number of cards materialized at once (at least 1)
    pub number_of_visible_cards: usize,
    /// Space between the stack bounds and its cards
    pub insets: Padding,
    /// Size of the visible screen area; cards swipe off past it
    pub viewport: Size,
    pub animation_options: CardStackAnimationOptions,
}

impl Default for CardStackConfig {
    fn default() -> Self {
        Self {
            number_of_visible_cards: 2,
            insets: Padding::all(10.0),
            viewport: Size::new(375.0, 667.0),
            animation_options: CardStackAnimationOptions::DEFAULT,
        }
    }
}

/// A batch update left the data source with an unexpected number of cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidUpdate {
    pub new_count: usize,
    pub old_count: usize,
    pub inserted: usize,
    pub deleted: usize,
}

impl fmt::Display for InvalidUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid update: invalid number of cards. The number of cards contained in the \
             card stack after the update ({}) must be equal to the number of cards contained \
             in the card stack before the update ({}), plus or minus the number of cards \
             inserted or deleted ({} inserted, {} deleted)",
            self.new_count, self.old_count, self.inserted, self.deleted
        )
    }
}

impl std::error::Error for InvalidUpdate {}

pub struct CardStack<E: AnimationExecutor = Timeline> {
    config: CardStackConfig,
    bounds: Rect,
    layout: Rc<dyn CardStackLayout>,
    animator: Rc<dyn CardStackAnimatable>,
    data_source: Option<Box<dyn CardStackDataSource>>,
    delegate: Option<Box<dyn CardStackDelegate>>,
    state: CardStackStateManager,
    visible_cards: Vec<Card>,
    departing_cards: Vec<Card>,
    executor: E,
    is_animating: bool,
    animation_generation: u64,
}

impl CardStack<Timeline> {
    pub fn new() -> Self {
        Self::with_config(CardStackConfig::default())
    }

    pub fn with_config(config: CardStackConfig) -> Self {
        Self::with_executor(config, Timeline::new())
    }

    /// Advance the stack's timeline and apply every completion it produced.
    pub fn advance(&mut self, dt: Duration) {
        for (completion, finished) in self.executor.advance(dt) {
            self.animation_did_finish(completion, finished);
        }
    }

    /// On-screen values of an animating card.
    pub fn presentation(&self, card: CardId) -> Option<&Presentation> {
        self.executor.presentation(card)
    }
}

impl Default for CardStack<Timeline> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: AnimationExecutor> CardStack<E> {
    pub fn with_executor(mut config: CardStackConfig, executor: E) -> Self {
        config.number_of_visible_cards = config.number_of_visible_cards.max(1);
        let viewport = config.viewport;
        Self {
            config,
            bounds: Rect::from_size(viewport),
            layout: Rc::new(DefaultCardStackLayout),
            animator: Rc::new(CardStackAnimator),
            data_source: None,
            delegate: None,
            state: CardStackStateManager::new(),
            visible_cards: Vec::new(),
            departing_cards: Vec::new(),
            executor,
            is_animating: false,
            animation_generation: 0,
        }
    }

    // Builder-style configuration

    pub fn number_of_visible_cards(mut self, count: usize) -> Self {
        self.set_number_of_visible_cards(count);
        self
    }

    pub fn insets(mut self, insets: impl Into<Padding>) -> Self {
        self.config.insets = insets.into();
        self.set_bounds(self.bounds);
        self
    }

    pub fn viewport(mut self, viewport: Size) -> Self {
        self.set_viewport(viewport);
        self
    }

    pub fn animation_options(mut self, options: CardStackAnimationOptions) -> Self {
        self.config.animation_options = options;
        self
    }

    pub fn bounds(mut self, bounds: Rect) -> Self {
        self.set_bounds(bounds);
        self
    }

    pub fn layout(mut self, layout: Rc<dyn CardStackLayout>) -> Self {
        self.layout = layout;
        self
    }

    pub fn animator(mut self, animator: Rc<dyn CardStackAnimatable>) -> Self {
        self.animator = animator;
        self
    }

    pub fn delegate(mut self, delegate: impl CardStackDelegate + 'static) -> Self {
        self.delegate = Some(Box::new(delegate));
        self
    }

    /// Attach the data source and load its cards.
    pub fn data_source(mut self, data_source: impl CardStackDataSource + 'static) -> Self {
        self.set_data_source(Box::new(data_source));
        self
    }

    // Runtime configuration

    pub fn config(&self) -> &CardStackConfig {
        &self.config
    }

    pub fn set_data_source(&mut self, data_source: Box<dyn CardStackDataSource>) {
        self.data_source = Some(data_source);
        self.reload_data();
    }

    pub fn set_delegate(&mut self, delegate: Option<Box<dyn CardStackDelegate>>) {
        self.delegate = delegate;
    }

    pub fn set_number_of_visible_cards(&mut self, count: usize) {
        self.config.number_of_visible_cards = count.max(1);
        self.reload_visible_cards();
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.config.viewport = viewport;
        for card in self.visible_cards.iter_mut() {
            card.set_viewport(viewport);
        }
    }

    pub fn set_animation_options(&mut self, options: CardStackAnimationOptions) {
        self.config.animation_options = options;
    }

    /// Resize the stack and lay its cards out again.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        let frame = self.card_frame();
        for card in self.visible_cards.iter_mut() {
            card.set_frame(frame);
        }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn executor_mut(&mut self) -> &mut E {
        &mut self.executor
    }

    // Queries

    pub fn state(&self) -> &CardStackStateManager {
        &self.state
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    /// Whether the stack accepts swipes, undos and shifts right now.
    pub fn is_enabled(&self) -> bool {
        !self.is_animating
            && self
                .top_card()
                .map_or(true, |card| card.is_user_interaction_enabled())
    }

    pub fn card_container_frame(&self) -> Rect {
        self.layout.card_container_frame(self.bounds, &self.config)
    }

    pub fn card_frame(&self) -> Rect {
        self.layout.card_frame(self.card_container_frame())
    }

    pub fn visible_cards(&self) -> &[Card] {
        &self.visible_cards
    }

    pub fn background_cards(&self) -> &[Card] {
        self.visible_cards.get(1..).unwrap_or(&[])
    }

    /// Cards swiped away whose off-screen animation is still running.
    pub fn departing_cards(&self) -> &[Card] {
        &self.departing_cards
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.visible_cards.first()
    }

    pub fn top_card_index(&self) -> Option<usize> {
        self.top_card()?;
        self.state.remaining_indices().first().copied()
    }

    /// The visible card showing data-source `index`, if any.
    pub fn card_for_index(&self, index: usize) -> Option<&Card> {
        let position = self.position_for_card(index)?;
        self.visible_cards.get(position)
    }

    /// Position of data-source `index` among the remaining cards.
    pub fn position_for_card(&self, index: usize) -> Option<usize> {
        self.state.remaining_indices().iter().position(|&i| i == index)
    }

    pub fn number_of_remaining_cards(&self) -> usize {
        self.state.remaining_indices().len()
    }

    /// Swiped indices, oldest first.
    pub fn swiped_cards(&self) -> Vec<usize> {
        self.state.swipes().iter().map(|swipe| swipe.index).collect()
    }

    // Main operations

    /// Swipe the top card off programmatically.
    pub fn swipe(&mut self, direction: SwipeDirection, animated: bool) {
        if !self.is_enabled() {
            return;
        }
        let Some(top) = self.visible_cards.first_mut() else {
            return;
        };
        top.swipe(direction, animated, &mut self.executor);
        let id = top.id();
        self.process_card_events(id);
    }

    /// Bring back the most recently swiped card.
    pub fn undo_last_swipe(&mut self, animated: bool) {
        if !self.is_enabled() {
            return;
        }
        let Some(swipe) = self.state.undo_swipe() else {
            return;
        };
        log::debug!("undo swipe of card {} ({:?})", swipe.index, swipe.direction);

        self.reload_visible_cards();
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.card_undone(swipe.index, swipe.direction);
        }

        let Some(top) = self.visible_cards.first_mut() else {
            return;
        };
        top.reverse_swipe(swipe.direction, animated, &mut self.executor);
        let id = top.id();
        self.process_card_events(id);
    }

    /// Rotate the remaining cards by `distance` positions.
    pub fn shift(&mut self, distance: isize, animated: bool) {
        if !self.is_enabled() || distance == 0 || self.visible_cards.len() < 2 {
            return;
        }
        if distance.unsigned_abs() > self.number_of_remaining_cards() {
            return;
        }
        log::debug!("shift by {}", distance);

        self.state.shift(distance);
        self.reload_visible_cards();
        let completion = self.next_stack_completion();
        let cx = StackAnimationContext {
            visible_cards: &mut self.visible_cards,
            options: self.config.animation_options,
            executor: &mut self.executor,
            completion,
        };
        self.is_animating = self.animator.animate_shift(cx, distance, animated);
    }

    /// Reload every card from the data source and clear the swipe history.
    pub fn reload_data(&mut self) {
        let Some(data_source) = self.data_source.as_ref() else {
            return;
        };
        let count = data_source.number_of_cards();
        log::debug!("reloading card stack with {} cards", count);

        for card in self.departing_cards.drain(..) {
            self.executor.cancel(card.id());
        }
        self.state.reset(count);
        self.reload_visible_cards();
        self.is_animating = false;
    }

    /// Insert a card for data-source `index` at `position` of the remaining cards.
    ///
    /// # Panics
    ///
    /// Panics with [`InvalidUpdate`] if the data source does not report exactly
    /// one more card than before.
    pub fn insert_card(&mut self, index: usize, position: usize) {
        let Some(new_count) = self.reported_number_of_cards() else {
            return;
        };
        let old_count = self.state.total_index_count();
        validate_update(new_count, old_count, 1, 0);

        log::debug!("insert card {} at position {}", index, position);
        self.state.insert(index, position);
        self.reload_visible_cards();
    }

    /// Append cards for data-source `indices` below the remaining cards.
    ///
    /// # Panics
    ///
    /// Panics with [`InvalidUpdate`] on a card count mismatch.
    pub fn append_cards(&mut self, indices: &[usize]) {
        let Some(new_count) = self.reported_number_of_cards() else {
            return;
        };
        let old_count = self.state.total_index_count();
        validate_update(new_count, old_count, indices.len(), 0);

        log::debug!("append {} cards", indices.len());
        for &index in indices {
            let position = self.state.remaining_indices().len();
            self.state.insert(index, position);
        }
        self.reload_visible_cards();
    }

    /// Delete the cards for data-source `indices`, swiped or not.
    ///
    /// # Panics
    ///
    /// Panics with [`InvalidUpdate`] on a card count mismatch.
    pub fn delete_cards(&mut self, indices: &[usize]) {
        let Some(new_count) = self.reported_number_of_cards() else {
            return;
        };
        let old_count = self.state.total_index_count();
        validate_update(new_count, old_count, 0, indices.len());

        log::debug!("delete cards {:?}", indices);
        self.state.delete_indices(indices);
        self.reload_visible_cards();
    }

    /// Delete the remaining cards at `positions`.
    ///
    /// # Panics
    ///
    /// Panics with [`InvalidUpdate`] on a card count mismatch.
    pub fn delete_cards_at_positions(&mut self, positions: &[usize]) {
        let Some(new_count) = self.reported_number_of_cards() else {
            return;
        };
        let old_count = self.state.total_index_count();
        validate_update(new_count, old_count, 0, positions.len());

        let deleted = self.state.delete_at_positions(positions);
        log::debug!("delete cards at positions {:?} ({:?})", positions, deleted);
        self.reload_visible_cards();
    }

    // Input routing

    /// Route a drag to the top card.
    pub fn handle_drag(&mut self, phase: DragPhase, session: &dyn DragSession) {
        let enabled = self.is_enabled();
        let Some(top) = self.visible_cards.first_mut() else {
            return;
        };
        if !enabled && !top.tracker().is_dragging() {
            return;
        }
        log::trace!("drag {:?} on card {}", phase, top.id().raw());
        top.handle_drag(phase, session, &mut self.executor);
        let id = top.id();
        self.process_card_events(id);
    }

    /// Route a tap to the top card.
    pub fn handle_tap(&mut self, location: Point) {
        let Some(top) = self.visible_cards.first_mut() else {
            return;
        };
        top.handle_tap(location);
        let id = top.id();
        self.process_card_events(id);
    }

    /// Apply a completion reported by the animation executor.
    pub fn animation_did_finish(&mut self, completion: Completion, finished: bool) {
        log::trace!("animation {:?} completed (finished: {})", completion, finished);
        match completion {
            Completion::CardSwipe(id) => {
                let Some(card) = self.departing_cards.iter_mut().find(|c| c.id() == id) else {
                    log::warn!("swipe completion for unknown card {}", id.raw());
                    return;
                };
                card.swipe_did_finish();
                self.process_card_events(id);
            }
            Completion::CardReverseSwipe(id) => {
                let Some(card) = self.visible_cards.iter_mut().find(|c| c.id() == id) else {
                    log::warn!("reverse swipe completion for unknown card {}", id.raw());
                    return;
                };
                card.reverse_swipe_did_finish();
                self.process_card_events(id);
            }
            Completion::Stack(generation) => {
                if generation == self.animation_generation {
                    self.is_animating = false;
                }
            }
        }
    }

    // Internals

    fn reported_number_of_cards(&self) -> Option<usize> {
        self.data_source
            .as_ref()
            .map(|data_source| data_source.number_of_cards())
    }

    fn next_stack_completion(&mut self) -> Completion {
        self.animation_generation += 1;
        Completion::Stack(self.animation_generation)
    }

    fn load_card(&mut self, index: usize, position: usize) -> Option<Card> {
        let data_source = self.data_source.as_mut()?;
        let mut card = data_source.card_at(index);
        card.set_viewport(self.config.viewport);
        card.set_frame(self.card_frame());
        card.set_transform(self.animator.transform_for_position(position));
        card.set_user_interaction_enabled(position == 0);
        Some(card)
    }

    /// Rebuild the visible window from the head of the remaining indices.
    fn reload_visible_cards(&mut self) {
        for card in self.visible_cards.drain(..) {
            self.executor.cancel(card.id());
        }

        let count = self
            .config
            .number_of_visible_cards
            .min(self.state.remaining_indices().len());
        for position in 0..count {
            let index = self.state.remaining_indices()[position];
            if let Some(card) = self.load_card(index, position) {
                self.visible_cards.push(card);
            }
        }
    }

    fn process_card_events(&mut self, id: CardId) {
        let events = match self
            .visible_cards
            .iter_mut()
            .chain(self.departing_cards.iter_mut())
            .find(|card| card.id() == id)
        {
            Some(card) => card.drain_events(),
            None => return,
        };
        for event in events {
            self.handle_card_event(id, event);
        }
    }

    fn handle_card_event(&mut self, id: CardId, event: CardEvent) {
        match event {
            CardEvent::Tapped { .. } => {
                let index = self.top_card_index();
                if let (Some(index), Some(delegate)) = (index, self.delegate.as_mut()) {
                    delegate.card_selected(index);
                }
            }
            CardEvent::BeganSwipe => {
                self.animator
                    .remove_background_card_animations(&self.visible_cards, &mut self.executor);
            }
            CardEvent::ContinuedSwipe => self.follow_drag(),
            CardEvent::CancelledSwipe => {
                // Spring-back leaves the stack enabled
                let cx = StackAnimationContext {
                    visible_cards: &mut self.visible_cards,
                    options: self.config.animation_options,
                    executor: &mut self.executor,
                    completion: Completion::Stack(self.animation_generation),
                };
                self.animator.animate_reset(cx);
            }
            CardEvent::Swiped {
                direction,
                forced,
                animated,
            } => self.swipe_action(id, direction, forced, animated),
            CardEvent::ReverseSwiped { animated, .. } => {
                let completion = self.next_stack_completion();
                let cx = StackAnimationContext {
                    visible_cards: &mut self.visible_cards,
                    options: self.config.animation_options,
                    executor: &mut self.executor,
                    completion,
                };
                self.is_animating = self.animator.animate_undo(cx, animated);
            }
            CardEvent::SwipeFinished => {
                self.departing_cards.retain(|card| card.id() != id);
            }
            CardEvent::ReverseSwipeFinished => {}
        }
    }

    /// Scale background cards towards their next position as the top card
    /// is dragged away.
    fn follow_drag(&mut self) {
        let Some(top) = self.visible_cards.first() else {
            return;
        };
        let translation = top.tracker().translation();
        let minimum_side = self.bounds.size().min_side();
        let percentage = if minimum_side > 0.0 {
            (translation.x.abs().max(translation.y.abs()) / minimum_side).min(1.0)
        } else {
            0.0
        };
        for (position, card) in self.visible_cards.iter_mut().enumerate().skip(1) {
            card.set_transform(
                self.animator
                    .background_card_drag_transform(position, percentage),
            );
        }
    }

    fn swipe_action(
        &mut self,
        id: CardId,
        direction: SwipeDirection,
        forced: bool,
        animated: bool,
    ) {
        let Some(position) = self.visible_cards.iter().position(|card| card.id() == id) else {
            return;
        };
        let Some(swiped_index) = self.state.remaining_indices().get(position).copied() else {
            return;
        };
        log::debug!(
            "card {} swiped {:?} (forced: {})",
            swiped_index,
            direction,
            forced
        );

        self.state.swipe(direction);
        let swiped = self.visible_cards.remove(position);
        self.departing_cards.push(swiped);

        // Fill the bottom of the window
        let target = self
            .config
            .number_of_visible_cards
            .min(self.state.remaining_indices().len());
        if self.visible_cards.len() < target {
            let position = self.visible_cards.len();
            let index = self.state.remaining_indices()[position];
            if let Some(card) = self.load_card(index, position) {
                self.visible_cards.push(card);
            }
        }
        if let Some(top) = self.visible_cards.first_mut() {
            top.set_user_interaction_enabled(true);
        }

        if let Some(delegate) = self.delegate.as_mut() {
            delegate.card_swiped(swiped_index, direction);
        }

        if self.state.remaining_indices().is_empty() {
            log::debug!("all cards swiped");
            if let Some(delegate) = self.delegate.as_mut() {
                delegate.all_cards_swiped();
            }
            return;
        }

        let completion = self.next_stack_completion();
        let Some(top) = self.departing_cards.last() else {
            return;
        };
        let cx = StackAnimationContext {
            visible_cards: &mut self.visible_cards,
            options: self.config.animation_options,
            executor: &mut self.executor,
            completion,
        };
        self.is_animating = self
            .animator
            .animate_swipe(cx, top, direction, forced, animated);
    }
}

fn validate_update(new_count: usize, old_count: usize, inserted: usize, deleted: usize) {
    let expected = (old_count + inserted).checked_sub(deleted);
    if expected != Some(new_count) {
        panic!(
            "{}",
            InvalidUpdate {
                new_count,
                old_count,
                inserted,
                deleted,
            }
        );
    }
}
