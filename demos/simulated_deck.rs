//! Drives a ten-card deck through a scripted session: a drag that is let go
//! too early, a drag that swipes, a programmatic swipe, an undo and a shift.
//!
//! Run with `RUST_LOG=debug cargo run --example simulated_deck`.

use std::time::Duration;

use swipe_deck::prelude::*;

const FRAME: Duration = Duration::from_millis(16);

struct Deck {
    names: Vec<&'static str>,
}

impl CardStackDataSource for Deck {
    fn number_of_cards(&self) -> usize {
        self.names.len()
    }

    fn card_at(&mut self, index: usize) -> Card {
        Card::new()
            .content(ViewId(index as u64))
            .footer(ViewId(100 + index as u64), 80.0)
            .overlay(SwipeDirection::Left, ViewId(1000))
            .overlay(SwipeDirection::Right, ViewId(1001))
            .swipe_directions(SwipeDirections::HORIZONTAL | SwipeDirections::UP)
    }
}

struct Printer {
    names: Vec<&'static str>,
}

impl CardStackDelegate for Printer {
    fn card_selected(&mut self, index: usize) {
        log::info!("selected {}", self.names[index]);
    }

    fn card_swiped(&mut self, index: usize, direction: SwipeDirection) {
        log::info!("swiped {} {:?}", self.names[index], direction);
    }

    fn card_undone(&mut self, index: usize, direction: SwipeDirection) {
        log::info!("brought back {} from {:?}", self.names[index], direction);
    }

    fn all_cards_swiped(&mut self) {
        log::info!("deck is empty");
    }
}

fn settle(stack: &mut CardStack) {
    let mut frames = 0;
    while !stack.is_enabled() || !stack.departing_cards().is_empty() {
        stack.advance(FRAME);
        frames += 1;
    }
    log::info!(
        "settled after {} frames, top card: {:?}",
        frames,
        stack.top_card_index()
    );
}

fn drag(stack: &mut CardStack, to: Vec2, velocity: Vec2) {
    let location = Point::new(120.0, 80.0);
    stack.handle_drag(
        DragPhase::Began,
        &DragSample::new(Vec2::ZERO, Vec2::ZERO, location),
    );
    for step in 1..=10 {
        let translation = to * (step as f32 / 10.0);
        stack.handle_drag(
            DragPhase::Changed,
            &DragSample::new(translation, velocity, location),
        );
        stack.advance(FRAME);
    }
    stack.handle_drag(DragPhase::Ended, &DragSample::new(to, velocity, location));
}

fn main() {
    env_logger::init();

    let names = vec![
        "Ada", "Brian", "Chen", "Dana", "Emeka", "Farah", "Goran", "Hana", "Ivo", "Jun",
    ];
    let mut stack = CardStack::new()
        .number_of_visible_cards(3)
        .delegate(Printer {
            names: names.clone(),
        })
        .data_source(Deck { names });

    stack.handle_tap(Point::new(50.0, 50.0));

    // Too short and too slow: springs back
    drag(&mut stack, Vec2::new(-40.0, 5.0), Vec2::new(-200.0, 0.0));
    settle(&mut stack);

    drag(&mut stack, Vec2::new(180.0, -20.0), Vec2::new(900.0, 0.0));
    settle(&mut stack);

    stack.swipe(SwipeDirection::Left, true);
    settle(&mut stack);

    stack.undo_last_swipe(true);
    settle(&mut stack);

    stack.shift(2, true);
    settle(&mut stack);

    while stack.top_card().is_some() {
        stack.swipe(SwipeDirection::Up, false);
    }
    log::info!("swiped: {:?}", stack.swiped_cards());
}
