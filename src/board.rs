use std::collections::HashSet;

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::snake::Position;

/// Fixed-size square play field.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Board {
    size: u16,
}

impl Board {
    #[must_use]
    pub fn new(size: u16) -> Self {
        debug_assert!(size > 0);
        Self { size }
    }

    /// Cells per side.
    #[must_use]
    pub fn size(self) -> u16 {
        self.size
    }

    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.size) * usize::from(self.size)
    }

    /// Centre cell, rounding towards the origin on even sizes.
    #[must_use]
    pub fn centre(self) -> Position {
        let mid = i32::from(self.size / 2);
        Position::new(mid, mid)
    }

    #[must_use]
    pub fn is_in_bounds(self, position: Position) -> bool {
        position.is_within_bounds(self.size)
    }

    /// Wraps `position` onto the opposite edge when it has left the board.
    #[must_use]
    pub fn wrap(self, position: Position) -> Position {
        position.wrapped(self.size)
    }

    /// Iterates every cell in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        let size = i32::from(self.size);
        (0..size).flat_map(move |x| (0..size).map(move |y| Position::new(x, y)))
    }

    /// Iterates the cells not present in `exclude`.
    pub fn free_cells<'a>(
        self,
        exclude: &'a HashSet<Position>,
    ) -> impl Iterator<Item = Position> + 'a {
        self.cells().filter(move |cell| !exclude.contains(cell))
    }

    /// Picks a uniformly random free cell, or `None` when every cell is excluded.
    pub fn random_free_cell<R: Rng + ?Sized>(
        self,
        rng: &mut R,
        exclude: &HashSet<Position>,
    ) -> Option<Position> {
        self.free_cells(exclude).choose(rng)
    }
}
