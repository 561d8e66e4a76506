use crate::pursuit::types::Direction;

/// An ordered list of directions to try after a blocked move.
pub struct Fallbacks(&'static [Direction]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retry {
    Try(Direction),
    Exhausted,
}

impl Retry {
    /// An exhausted sequence leaves the piece where it is.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Retry::Try(direction) => direction,
            Retry::Exhausted => Direction::Stay,
        }
    }
}

impl Fallbacks {
    #[must_use]
    pub const fn new(sequence: &'static [Direction]) -> Self {
        Self(sequence)
    }

    #[must_use]
    pub fn get(&self, attempt: usize) -> Retry {
        self.0.get(attempt).copied().map_or(Retry::Exhausted, Retry::Try)
    }
}
