use std::collections::VecDeque;

use serde::Serialize;

use crate::direction::{direction_change_is_valid, Direction};

/// Grid cell in logical coordinates: `x` is the row, `y` the column.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns true when the position lies inside a square grid of `size` cells per side.
    #[must_use]
    pub fn is_within_bounds(self, size: u16) -> bool {
        let size = i32::from(size);
        self.x >= 0 && self.y >= 0 && self.x < size && self.y < size
    }

    /// Returns this position wrapped into a square grid on both axes.
    #[must_use]
    pub fn wrapped(self, size: u16) -> Self {
        let size = i32::from(size);
        Self {
            x: self.x.rem_euclid(size),
            y: self.y.rem_euclid(size),
        }
    }
}

/// Snake body and steering.
///
/// The body never checks collisions itself; the game inspects it after each advance.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Direction,
}

impl Snake {
    /// Creates the starting snake: head at `head`, remaining segments trailing
    /// behind it opposite to `direction`.
    #[must_use]
    pub fn starting(head: Position, length: usize, direction: Direction) -> Self {
        let behind = direction.opposite();
        let mut body = VecDeque::with_capacity(length);
        let mut cursor = head;
        for _ in 0..length.max(1) {
            body.push_back(cursor);
            cursor = cursor.offset(behind);
        }

        Self {
            body,
            direction,
            pending_direction: direction,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        debug_assert!(!segments.is_empty());
        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: direction,
        }
    }

    /// Requests a turn, applied on the next advance.
    ///
    /// Returns `false` (and changes nothing) when `direction` lies on the axis
    /// the snake is currently travelling along.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.direction, direction) {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    /// Applies one movement step. The tail is kept when `grew` is set.
    pub fn advance(&mut self, grew: bool) {
        self.direction = self.pending_direction;
        let next_head = self.head().offset(self.direction);

        if !grew {
            let _ = self.body.pop_back();
        }
        self.body.push_front(next_head);
    }

    /// Returns the head position for the next advance, before any wrapping.
    #[must_use]
    pub fn next_head(&self) -> Position {
        self.head().offset(self.pending_direction)
    }

    /// Moves an out-of-bounds head to the opposite edge.
    pub fn wrap_head(&mut self, size: u16) {
        if let Some(head) = self.body.front_mut() {
            *head = head.wrapped(size);
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the direction of travel used by the last advance.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the direction the next advance will use.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
