//! Interaction and animation core for swipeable card stacks.
//!
//! The crate never renders anything. A host view layer feeds pointer input
//! into a [`CardStack`](stack::CardStack), renders each card from its model
//! values (or a [`Presentation`](animation::Presentation) while animating)
//! and runs the [`AnimationRequest`](animation::AnimationRequest)s the stack
//! submits to its [`AnimationExecutor`](animation::AnimationExecutor).
//!
//! ```ignore
//! let mut stack = CardStack::new()
//!     .number_of_visible_cards(3)
//!     .delegate(events)
//!     .data_source(deck);
//!
//! stack.swipe(SwipeDirection::Left, true);
//! loop {
//!     stack.advance(frame_time);
//!     // draw stack.visible_cards() and stack.departing_cards()
//! }
//! ```

pub mod animation;
pub mod card;
pub mod direction;
pub mod drag;
pub mod geometry;
pub mod options;
pub mod stack;
pub mod transform;

pub mod prelude {
    pub use crate::animation::{
        AnimationExecutor, AnimationRequest, Completion, Curve, Keyframe, Presentation, Timeline,
        TimingFunction, Track,
    };
    pub use crate::card::{
        Card, CardAnimatable, CardAnimator, CardDelegate, CardEvent, CardId, CardLayout,
        CardState, DefaultCardLayout, Overlay, ViewId,
    };
    pub use crate::direction::{SwipeDirection, SwipeDirections};
    pub use crate::drag::{DragOutcome, DragPhase, DragSample, DragSession, DragTracker};
    pub use crate::geometry::{Padding, Point, Rect, Size, Vec2};
    pub use crate::options::{CardAnimationOptions, CardStackAnimationOptions};
    pub use crate::stack::{
        CardStack, CardStackAnimatable, CardStackAnimator, CardStackConfig, CardStackDataSource,
        CardStackDelegate, CardStackLayout, CardStackStateManager, DefaultCardStackLayout,
        InvalidUpdate, Swipe,
    };
    pub use crate::transform::Transform;
}
