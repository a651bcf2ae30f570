use bitflags::bitflags;

use crate::geometry::Vec2;

/// One of the four directions a card can be swiped off the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Up,
    Right,
    Down,
}

impl SwipeDirection {
    /// All directions, in the order used when resolving a drag.
    pub const ALL: [SwipeDirection; 4] = [
        SwipeDirection::Left,
        SwipeDirection::Up,
        SwipeDirection::Right,
        SwipeDirection::Down,
    ];

    /// Unit vector pointing in this direction (screen coordinates, y grows downward).
    pub fn vector(self) -> Vec2 {
        match self {
            SwipeDirection::Left => Vec2::new(-1.0, 0.0),
            SwipeDirection::Up => Vec2::new(0.0, -1.0),
            SwipeDirection::Right => Vec2::new(1.0, 0.0),
            SwipeDirection::Down => Vec2::new(0.0, 1.0),
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, SwipeDirection::Left | SwipeDirection::Right)
    }

    pub fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }

    /// Stable slot for per-direction storage.
    pub(crate) fn index(self) -> usize {
        match self {
            SwipeDirection::Left => 0,
            SwipeDirection::Up => 1,
            SwipeDirection::Right => 2,
            SwipeDirection::Down => 3,
        }
    }
}

bitflags! {
    /// The set of directions a card reacts to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SwipeDirections: u8 {
        const LEFT  = 0b0001;
        const UP    = 0b0010;
        const RIGHT = 0b0100;
        const DOWN  = 0b1000;
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
        const VERTICAL = Self::UP.bits() | Self::DOWN.bits();
    }
}

impl SwipeDirections {
    pub fn has(self, direction: SwipeDirection) -> bool {
        self.contains(direction.into())
    }

    /// Iterate the contained directions in [`SwipeDirection::ALL`] order.
    pub fn directions(self) -> impl Iterator<Item = SwipeDirection> {
        SwipeDirection::ALL
            .into_iter()
            .filter(move |direction| self.has(*direction))
    }
}

impl Default for SwipeDirections {
    fn default() -> Self {
        Self::all()
    }
}

impl From<SwipeDirection> for SwipeDirections {
    fn from(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Left => SwipeDirections::LEFT,
            SwipeDirection::Up => SwipeDirections::UP,
            SwipeDirection::Right => SwipeDirections::RIGHT,
            SwipeDirection::Down => SwipeDirections::DOWN,
        }
    }
}
