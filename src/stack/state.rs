//! Ordering and swipe history of a card stack.
//!
//! Indices are data-source indices. Every index below
//! [`total_index_count`](CardStackStateManager::total_index_count) is held by
//! exactly one of `remaining_indices` (top card first) or `swipes` (oldest
//! first).

use crate::direction::SwipeDirection;

/// A recorded swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swipe {
    pub index: usize,
    pub direction: SwipeDirection,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardStackStateManager {
    remaining_indices: Vec<usize>,
    swipes: Vec<Swipe>,
}

impl CardStackStateManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remaining_indices(&self) -> &[usize] {
        &self.remaining_indices
    }

    pub fn swipes(&self) -> &[Swipe] {
        &self.swipes
    }

    pub fn total_index_count(&self) -> usize {
        self.remaining_indices.len() + self.swipes.len()
    }

    /// Insert a new `index` at `position` of the remaining indices. Stored
    /// indices at or above `index` move up by one first.
    ///
    /// # Panics
    ///
    /// Panics if `index > total_index_count()` or
    /// `position > remaining_indices().len()`.
    pub fn insert(&mut self, index: usize, position: usize) {
        assert!(
            index <= self.total_index_count(),
            "Attempting to insert card at an out-of-bounds index ({} > {})",
            index,
            self.total_index_count()
        );
        assert!(
            position <= self.remaining_indices.len(),
            "Attempting to insert card at an out-of-bounds position ({} > {})",
            position,
            self.remaining_indices.len()
        );

        for stored in self.remaining_indices.iter_mut() {
            if *stored >= index {
                *stored += 1;
            }
        }
        for swipe in self.swipes.iter_mut() {
            if swipe.index >= index {
                swipe.index += 1;
            }
        }
        self.remaining_indices.insert(position, index);
    }

    /// Remove `index` from wherever it is held. Stored indices above it move
    /// down by one.
    ///
    /// # Panics
    ///
    /// Panics if `index >= total_index_count()`.
    pub fn delete(&mut self, index: usize) {
        assert!(
            index < self.total_index_count(),
            "Attempting to delete card at an out-of-bounds index ({} >= {})",
            index,
            self.total_index_count()
        );

        if let Some(position) = self.swipes.iter().position(|swipe| swipe.index == index) {
            self.swipes.remove(position);
        } else if let Some(position) = self.remaining_indices.iter().position(|&i| i == index) {
            self.remaining_indices.remove(position);
        }

        for stored in self.remaining_indices.iter_mut() {
            if *stored > index {
                *stored -= 1;
            }
        }
        for swipe in self.swipes.iter_mut() {
            if swipe.index > index {
                swipe.index -= 1;
            }
        }
    }

    /// Delete several indices, all given in the numbering before the call.
    pub fn delete_indices(&mut self, indices: &[usize]) {
        let mut indices = indices.to_vec();
        for i in 0..indices.len() {
            let removed = indices[i];
            self.delete(removed);
            for later in indices.iter_mut().skip(i + 1) {
                if *later > removed {
                    *later -= 1;
                }
            }
        }
    }

    /// Delete the index at `position` of the remaining indices and return it.
    ///
    /// # Panics
    ///
    /// Panics if `position >= remaining_indices().len()`.
    pub fn delete_at_position(&mut self, position: usize) -> usize {
        assert!(
            position < self.remaining_indices.len(),
            "Attempting to delete card at an out-of-bounds position ({} >= {})",
            position,
            self.remaining_indices.len()
        );
        let index = self.remaining_indices[position];
        self.delete(index);
        index
    }

    /// Delete several positions, all given in the ordering before the call.
    /// Returns the deleted indices, each in the numbering at its removal.
    pub fn delete_at_positions(&mut self, positions: &[usize]) -> Vec<usize> {
        let mut positions = positions.to_vec();
        let mut deleted = Vec::with_capacity(positions.len());
        for i in 0..positions.len() {
            let removed = positions[i];
            deleted.push(self.delete_at_position(removed));
            for later in positions.iter_mut().skip(i + 1) {
                if *later > removed {
                    *later -= 1;
                }
            }
        }
        deleted
    }

    /// Move the top index into the swipe history. No-op when nothing remains.
    pub fn swipe(&mut self, direction: SwipeDirection) {
        if self.remaining_indices.is_empty() {
            return;
        }
        let index = self.remaining_indices.remove(0);
        self.swipes.push(Swipe { index, direction });
    }

    /// Put the most recent swipe back on top and return it.
    pub fn undo_swipe(&mut self) -> Option<Swipe> {
        let swipe = self.swipes.pop()?;
        self.remaining_indices.insert(0, swipe.index);
        Some(swipe)
    }

    /// Rotate the remaining indices left by `distance` (right when negative).
    /// Distances longer than the remaining list leave it unchanged.
    pub fn shift(&mut self, distance: isize) {
        let len = self.remaining_indices.len();
        let magnitude = distance.unsigned_abs();
        if magnitude > len {
            return;
        }
        if distance >= 0 {
            self.remaining_indices.rotate_left(magnitude);
        } else {
            self.remaining_indices.rotate_right(magnitude);
        }
    }

    pub fn reset(&mut self, number_of_cards: usize) {
        self.remaining_indices = (0..number_of_cards).collect();
        self.swipes.clear();
    }
}
