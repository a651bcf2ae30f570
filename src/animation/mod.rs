//! Declarative animation requests.
//!
//! The card and stack animators never touch rendering. They describe what
//! should change on which card, over what time and with which curve, and hand
//! that [`AnimationRequest`] to an [`AnimationExecutor`] supplied by the host.
//! When the request finishes, the executor hands its [`Completion`] back to the
//! host, which routes it to
//! [`CardStack::animation_did_finish`](crate::stack::CardStack::animation_did_finish).

mod animatable;
mod spring;
mod timeline;
mod timing;

use std::time::Duration;

pub use animatable::Animatable;
pub use spring::{SpringConfig, SpringState};
pub use timeline::{Presentation, Timeline};
pub use timing::TimingFunction;

use crate::card::CardId;
use crate::direction::SwipeDirection;
use crate::transform::Transform;

/// The property a keyframe changes, with its start and end values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Track {
    Transform { from: Transform, to: Transform },
    OverlayAlpha {
        direction: SwipeDirection,
        from: f32,
        to: f32,
    },
}

/// One property change on one card, placed inside its request's duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub card: CardId,
    pub track: Track,
    /// Start as a fraction of the request duration
    pub relative_start: f32,
    /// Length as a fraction of the request duration
    pub relative_duration: f32,
}

impl Keyframe {
    /// A keyframe spanning the whole request.
    pub fn full(card: CardId, track: Track) -> Self {
        Self::new(card, track, 0.0, 1.0)
    }

    pub fn new(card: CardId, track: Track, relative_start: f32, relative_duration: f32) -> Self {
        Self {
            card,
            track,
            relative_start: relative_start.clamp(0.0, 1.0),
            relative_duration: relative_duration.clamp(0.0, 1.0),
        }
    }
}

/// How progress through a request maps onto interpolation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Curve {
    Timing(TimingFunction),
    /// Damped spring; `damping` is a ratio in [0, 1].
    Spring { damping: f32 },
}

impl Default for Curve {
    fn default() -> Self {
        Curve::Timing(TimingFunction::Linear)
    }
}

/// Identifies what finished, so the owner of the animation can react to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Completion {
    /// A card finished animating off screen.
    CardSwipe(CardId),
    /// A card finished animating back into place after an undo.
    CardReverseSwipe(CardId),
    /// A stack-level background animation; carries the stack's animation generation.
    Stack(u64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationRequest {
    pub duration: Duration,
    pub delay: Duration,
    pub curve: Curve,
    pub keyframes: Vec<Keyframe>,
    pub completion: Option<Completion>,
}

impl AnimationRequest {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            curve: Curve::default(),
            keyframes: Vec::new(),
            completion: None,
        }
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    pub fn keyframe(mut self, keyframe: Keyframe) -> Self {
        self.keyframes.push(keyframe);
        self
    }

    pub fn keyframes(mut self, keyframes: impl IntoIterator<Item = Keyframe>) -> Self {
        self.keyframes.extend(keyframes);
        self
    }

    pub fn on_complete(mut self, completion: Completion) -> Self {
        self.completion = Some(completion);
        self
    }

    /// Time from submission until the request completes.
    pub fn total_time(&self) -> Duration {
        self.delay + self.duration
    }

    pub fn targets(&self, card: CardId) -> bool {
        self.keyframes.iter().any(|keyframe| keyframe.card == card)
    }
}

/// Runs animation requests on behalf of the card and stack animators.
///
/// Executors are single-threaded and driven by the host's frame loop. A new
/// request never waits for older ones; callers cancel a card's in-flight
/// animations first when the newest request must win.
pub trait AnimationExecutor {
    fn submit(&mut self, request: AnimationRequest);

    /// Stop every in-flight keyframe that targets `card`.
    fn cancel(&mut self, card: CardId);
}

impl AnimationExecutor for Vec<AnimationRequest> {
    fn submit(&mut self, request: AnimationRequest) {
        self.push(request);
    }

    fn cancel(&mut self, card: CardId) {
        for request in self.iter_mut() {
            request.keyframes.retain(|keyframe| keyframe.card != card);
        }
    }
}
