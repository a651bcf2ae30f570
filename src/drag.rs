//! Drag tracking for a single swipeable surface.
//!
//! The platform adapter translates native pointer events into a
//! [`DragSession`] plus a [`DragPhase`] and feeds them to
//! [`DragTracker::handle`]. The tracker keeps the latest sample, projects it
//! onto each [`SwipeDirection`] and decides whether a finished drag is a swipe
//! or a cancel.
//!
//! ```ignore
//! let mut tracker = DragTracker::new(Size::new(400.0, 800.0));
//! tracker.handle(DragPhase::Began, &session);
//! tracker.handle(DragPhase::Changed, &session);
//! match tracker.handle(DragPhase::Ended, &session) {
//!     Some(DragOutcome::Swiped(direction)) => { /* animate off screen */ }
//!     Some(DragOutcome::Cancelled) => { /* spring back */ }
//!     _ => {}
//! }
//! ```

use crate::direction::{SwipeDirection, SwipeDirections};
use crate::geometry::{Point, Size, Vec2};

/// Default speed, in points per second, above which a drag counts as a swipe.
pub const DEFAULT_MINIMUM_SWIPE_SPEED: f32 = 1100.0;

/// Source of the live values of an in-progress drag.
pub trait DragSession {
    /// Translation since the drag began, relative to the reference surface.
    fn current_translation(&self) -> Vec2;
    /// Velocity in points per second.
    fn current_velocity(&self) -> Vec2;
    /// Pointer location in the dragged surface's own coordinates.
    fn current_location(&self) -> Point;
}

/// Platform-independent gesture phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Possible,
    Began,
    Changed,
    Ended,
    Cancelled,
    /// Recognition failed; no hook fires.
    Failed,
}

/// A plain snapshot of a drag, also usable directly as a [`DragSession`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DragSample {
    pub translation: Vec2,
    pub velocity: Vec2,
    pub location: Point,
}

impl DragSample {
    pub fn new(translation: Vec2, velocity: Vec2, location: Point) -> Self {
        Self {
            translation,
            velocity,
            location,
        }
    }

    pub fn capture(session: &dyn DragSession) -> Self {
        Self {
            translation: session.current_translation(),
            velocity: session.current_velocity(),
            location: session.current_location(),
        }
    }
}

impl DragSession for DragSample {
    fn current_translation(&self) -> Vec2 {
        self.translation
    }

    fn current_velocity(&self) -> Vec2 {
        self.velocity
    }

    fn current_location(&self) -> Point {
        self.location
    }
}

/// Which hook a phase resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    BeganSwiping,
    ContinuedSwiping,
    Swiped(SwipeDirection),
    Cancelled,
}

/// Per-direction threshold override.
type Thresholds = [Option<f32>; 4];

/// Tracks one drag at a time and classifies it.
#[derive(Clone, Debug)]
pub struct DragTracker {
    swipe_directions: SwipeDirections,
    viewport: Size,
    minimum_swipe_speed: Thresholds,
    minimum_swipe_distance: Thresholds,
    sample: DragSample,
    dragging: bool,
}

impl DragTracker {
    /// Create a tracker. `viewport` is the visible screen area used to derive
    /// the default swipe distance.
    pub fn new(viewport: Size) -> Self {
        Self {
            swipe_directions: SwipeDirections::all(),
            viewport,
            minimum_swipe_speed: [None; 4],
            minimum_swipe_distance: [None; 4],
            sample: DragSample::default(),
            dragging: false,
        }
    }

    pub fn swipe_directions(&self) -> SwipeDirections {
        self.swipe_directions
    }

    pub fn set_swipe_directions(&mut self, directions: SwipeDirections) {
        self.swipe_directions = directions;
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    pub fn set_minimum_swipe_speed(&mut self, direction: SwipeDirection, speed: f32) {
        self.minimum_swipe_speed[direction.index()] = Some(speed.max(0.0));
    }

    pub fn set_minimum_swipe_distance(&mut self, direction: SwipeDirection, distance: f32) {
        self.minimum_swipe_distance[direction.index()] = Some(distance.max(0.0));
    }

    /// Speed at which a drag in `direction` becomes a swipe regardless of distance.
    pub fn minimum_swipe_speed(&self, direction: SwipeDirection) -> f32 {
        self.minimum_swipe_speed[direction.index()].unwrap_or(DEFAULT_MINIMUM_SWIPE_SPEED)
    }

    /// Distance at which a drag in `direction` becomes a swipe regardless of speed.
    /// Defaults to a quarter of the viewport's shorter side.
    pub fn minimum_swipe_distance(&self, direction: SwipeDirection) -> f32 {
        self.minimum_swipe_distance[direction.index()].unwrap_or(self.viewport.min_side() / 4.0)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The most recent drag snapshot.
    pub fn sample(&self) -> &DragSample {
        &self.sample
    }

    pub fn translation(&self) -> Vec2 {
        self.sample.translation
    }

    pub fn velocity(&self) -> Vec2 {
        self.sample.velocity
    }

    /// Progress towards the swipe distance in `direction`. Never negative, may exceed 1.
    pub fn drag_percentage(&self, direction: SwipeDirection) -> f32 {
        let distance = self.minimum_swipe_distance(direction);
        if distance <= 0.0 {
            return 0.0;
        }
        let projected = self.sample.translation.dot(direction.vector());
        (projected / distance).max(0.0)
    }

    /// Magnitude of the velocity projected onto `direction`.
    pub fn drag_speed(&self, direction: SwipeDirection) -> f32 {
        self.sample.velocity.dot(direction.vector()).abs()
    }

    /// The enabled direction with the strictly highest drag percentage.
    ///
    /// Returns `None` when nothing has been dragged or when the maximum is tied.
    pub fn active_direction(&self) -> Option<SwipeDirection> {
        let mut best: Option<(SwipeDirection, f32)> = None;
        let mut tied = false;

        for direction in self.swipe_directions.directions() {
            let percentage = self.drag_percentage(direction);
            match best {
                Some((_, max)) if percentage > max => {
                    best = Some((direction, percentage));
                    tied = false;
                }
                Some((_, max)) if percentage == max => tied = true,
                Some(_) => {}
                None => best = Some((direction, percentage)),
            }
        }

        match best {
            Some((direction, percentage)) if percentage > 0.0 && !tied => Some(direction),
            _ => None,
        }
    }

    /// Feed a gesture phase and its session. Returns the hook the phase triggered.
    pub fn handle(&mut self, phase: DragPhase, session: &dyn DragSession) -> Option<DragOutcome> {
        match phase {
            DragPhase::Possible | DragPhase::Began => {
                self.sample = DragSample::capture(session);
                self.dragging = true;
                log::trace!("drag began at {:?}", self.sample.location);
                Some(DragOutcome::BeganSwiping)
            }
            DragPhase::Changed => {
                self.sample = DragSample::capture(session);
                Some(DragOutcome::ContinuedSwiping)
            }
            DragPhase::Ended | DragPhase::Cancelled => {
                self.sample = DragSample::capture(session);
                self.dragging = false;
                let outcome = self.end_swiping();
                log::trace!("drag ended: {:?}", outcome);
                Some(outcome)
            }
            DragPhase::Failed => None,
        }
    }

    /// Decide between swipe and cancel for the current sample.
    pub fn end_swiping(&self) -> DragOutcome {
        if let Some(direction) = self.active_direction() {
            if self.drag_speed(direction) >= self.minimum_swipe_speed(direction)
                || self.drag_percentage(direction) >= 1.0
            {
                return DragOutcome::Swiped(direction);
            }
        }
        DragOutcome::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> DragTracker {
        let mut tracker = DragTracker::new(Size::new(400.0, 800.0));
        for direction in SwipeDirection::ALL {
            tracker.set_minimum_swipe_distance(direction, 100.0);
        }
        tracker
    }

    fn drag(translation: Vec2, velocity: Vec2) -> DragSample {
        DragSample::new(translation, velocity, Point::new(50.0, 50.0))
    }

    #[test]
    fn test_default_thresholds() {
        let tracker = DragTracker::new(Size::new(400.0, 800.0));
        assert_eq!(tracker.minimum_swipe_distance(SwipeDirection::Left), 100.0);
        assert_eq!(tracker.minimum_swipe_speed(SwipeDirection::Up), 1100.0);
    }

    #[test]
    fn test_drag_percentage_can_exceed_one() {
        let mut tracker = tracker();
        for (distance, expected) in [(50.0, 0.5), (100.0, 1.0), (150.0, 1.5)] {
            tracker.handle(DragPhase::Changed, &drag(Vec2::new(-distance, 0.0), Vec2::ZERO));
            assert_eq!(tracker.drag_percentage(SwipeDirection::Left), expected);
            assert_eq!(tracker.drag_percentage(SwipeDirection::Right), 0.0);
        }
    }

    #[test]
    fn test_drag_speed_is_direction_agnostic() {
        let mut tracker = tracker();
        tracker.handle(DragPhase::Changed, &drag(Vec2::ZERO, Vec2::new(-300.0, 40.0)));
        assert_eq!(tracker.drag_speed(SwipeDirection::Left), 300.0);
        assert_eq!(tracker.drag_speed(SwipeDirection::Right), 300.0);
        assert_eq!(tracker.drag_speed(SwipeDirection::Down), 40.0);
    }

    #[test]
    fn test_active_direction() {
        let mut tracker = tracker();
        assert_eq!(tracker.active_direction(), None);

        tracker.handle(DragPhase::Changed, &drag(Vec2::new(30.0, -10.0), Vec2::ZERO));
        assert_eq!(tracker.active_direction(), Some(SwipeDirection::Right));

        // Exact diagonal ties between right and up
        tracker.handle(DragPhase::Changed, &drag(Vec2::new(30.0, -30.0), Vec2::ZERO));
        assert_eq!(tracker.active_direction(), None);
    }

    #[test]
    fn test_active_direction_respects_enabled_directions() {
        let mut tracker = tracker();
        tracker.set_swipe_directions(SwipeDirections::VERTICAL);
        tracker.handle(DragPhase::Changed, &drag(Vec2::new(80.0, 10.0), Vec2::ZERO));
        assert_eq!(tracker.active_direction(), Some(SwipeDirection::Down));
    }

    #[test]
    fn test_swipe_decision_speed_boundary() {
        let mut tracker = tracker();
        tracker.set_minimum_swipe_speed(SwipeDirection::Left, 500.0);
        tracker.set_minimum_swipe_distance(SwipeDirection::Left, 200.0);

        tracker.handle(DragPhase::Began, &drag(Vec2::ZERO, Vec2::ZERO));
        let outcome = tracker.handle(
            DragPhase::Ended,
            &drag(Vec2::new(-100.0, 0.0), Vec2::new(-499.0, 0.0)),
        );
        assert_eq!(outcome, Some(DragOutcome::Cancelled));

        let outcome = tracker.handle(
            DragPhase::Ended,
            &drag(Vec2::new(-100.0, 0.0), Vec2::new(-500.0, 0.0)),
        );
        assert_eq!(outcome, Some(DragOutcome::Swiped(SwipeDirection::Left)));
    }

    #[test]
    fn test_swipe_decision_distance_boundary() {
        let mut tracker = tracker();
        let outcome = tracker.handle(DragPhase::Ended, &drag(Vec2::new(0.0, 99.0), Vec2::ZERO));
        assert_eq!(outcome, Some(DragOutcome::Cancelled));

        let outcome = tracker.handle(DragPhase::Ended, &drag(Vec2::new(0.0, 100.0), Vec2::ZERO));
        assert_eq!(outcome, Some(DragOutcome::Swiped(SwipeDirection::Down)));
    }

    #[test]
    fn test_phase_hooks() {
        let mut tracker = tracker();
        let sample = drag(Vec2::ZERO, Vec2::ZERO);
        assert_eq!(
            tracker.handle(DragPhase::Possible, &sample),
            Some(DragOutcome::BeganSwiping)
        );
        assert!(tracker.is_dragging());
        assert_eq!(
            tracker.handle(DragPhase::Changed, &sample),
            Some(DragOutcome::ContinuedSwiping)
        );
        assert_eq!(tracker.handle(DragPhase::Failed, &sample), None);
        assert_eq!(
            tracker.handle(DragPhase::Cancelled, &sample),
            Some(DragOutcome::Cancelled)
        );
        assert!(!tracker.is_dragging());
    }
}
