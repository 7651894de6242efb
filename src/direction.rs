use serde::Serialize;

/// Canonical movement directions for the snake.
///
/// Offsets follow the board convention: `x` is the row, `y` is the column,
/// so `Up` decreases `x`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Axis a direction travels along.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::Up | Self::Down => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// Returns true when both directions travel along the same axis.
    #[must_use]
    pub fn shares_axis(self, other: Self) -> bool {
        self.axis() == other.axis()
    }

    /// Unit step as `(dx, dy)` in row/column space.
    #[must_use]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// Returns whether a direction change is legal.
///
/// Turns along the axis already being travelled are rejected: the reverse would
/// fold the head onto the neck and the same direction is a no-op anyway.
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    !current.shares_axis(next)
}
