use std::collections::HashSet;

use rand::{seq::IteratorRandom, Rng};

use crate::pursuit::types::{Direction, Position};

#[derive(Clone, Debug)]
pub struct Board {
    pub height:    usize,
    pub width:     usize,
    pub obstacles: HashSet<Position>,
}

impl Board {
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            obstacles: HashSet::new(),
        }
    }

    /// A board with `obstacle_count` obstacles scattered over cells not in
    /// `reserved`. Asks for no more obstacles than there are spare cells.
    pub fn generate<R: Rng + ?Sized>(
        height: usize,
        width: usize,
        obstacle_count: usize,
        reserved: &[Position],
        rng: &mut R,
    ) -> Self {
        let mut board = Self::new(height, width);
        let obstacles = board
            .cells()
            .filter(|cell| !reserved.contains(cell))
            .choose_multiple(rng, obstacle_count);
        board.obstacles.extend(obstacles);
        board
    }

    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |i| {
            (0..self.width).map(move |j| Position::new(i, j))
        })
    }

    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.i < self.height && position.j < self.width
    }

    #[must_use]
    pub fn is_free(&self, position: Position) -> bool {
        self.contains(position) && !self.obstacles.contains(&position)
    }

    /// The cell one step away in `direction`, if it's on the board.
    #[must_use]
    pub fn step(
        &self,
        position: Position,
        direction: Direction,
    ) -> Option<Position> {
        position
            .neighbour(direction)
            .filter(|next| self.contains(*next))
    }

    /// The goal column for the attacker.
    #[must_use]
    pub const fn last_column(&self) -> usize {
        self.width - 1
    }
}
