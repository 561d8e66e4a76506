use std::{fmt, slice::Iter};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Stay,
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub fn iter() -> Iter<'static, Direction> {
        static DIRECTIONS: [Direction; 9] = [
            Direction::Stay,
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
            Direction::UpLeft,
            Direction::UpRight,
            Direction::DownLeft,
            Direction::DownRight,
        ];
        DIRECTIONS.iter()
    }

    /// Unit offset as `(di, dj)`. Rows grow downward, so `Up` is `(-1, 0)`.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Stay => (0, 0),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }

    #[must_use]
    pub const fn di(self) -> isize {
        self.offset().0
    }

    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        let (di, dj) = self.offset();
        di != 0 && dj != 0
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::Stay => "Stay",
                Direction::Up => "Up",
                Direction::Down => "Down",
                Direction::Left => "Left",
                Direction::Right => "Right",
                Direction::UpLeft => "UpLeft",
                Direction::UpRight => "UpRight",
                Direction::DownLeft => "DownLeft",
                Direction::DownRight => "DownRight",
            }
        )
    }
}

/// A grid cell: `i` is the row (growing downward), `j` the column.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Position {
    pub i: usize,
    pub j: usize,
}

impl Position {
    /// Never equal to a cell of any board this crate builds; used as "no
    /// previous turn yet" and as the answer of an exhausted spy.
    pub const INVALID: Position = Position {
        i: usize::MAX,
        j: usize::MAX,
    };

    #[must_use]
    pub const fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }

    /// The neighbouring cell in `direction`, or `None` when it would leave
    /// the unsigned coordinate space.
    pub fn neighbour(&self, direction: Direction) -> Option<Position> {
        let (di, dj) = direction.offset();
        Some(Position {
            i: self.i.checked_add_signed(di)?,
            j: self.j.checked_add_signed(dj)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_valid() {
            write!(f, "({}, {})", self.i, self.j)
        } else {
            write!(f, "(invalid)")
        }
    }
}
