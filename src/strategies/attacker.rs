use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{fallback::Fallbacks, Strategy};
use crate::pursuit::{
    spy::Spy,
    types::{Direction, Position},
};

/// Straight moves tried once both right-facing diagonals are blocked.
const STRAIGHT: Fallbacks = Fallbacks::new(&[
    Direction::Right,
    Direction::Down,
    Direction::Up,
    Direction::Left,
]);

/// Heads for the right edge along a diagonal and works through simpler moves
/// whenever it gets stuck. Never consults the spy.
pub struct AttackerStrategy<R = StdRng> {
    rng:               R,
    turn:              u64,
    fails:             usize,
    previous_position: Position,
    next_move:         Direction,
}

impl AttackerStrategy<StdRng> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for AttackerStrategy<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> AttackerStrategy<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            turn: 0,
            fails: 0,
            previous_position: Position::INVALID,
            next_move: Direction::Stay,
        }
    }

    pub fn decide(&mut self, position: Position) -> Direction {
        if self.turn == 0 {
            self.next_move = self.initial_diagonal();
        }

        if position == self.previous_position {
            self.next_move = if self.fails == 0 {
                invert_diagonal(self.next_move)
            } else {
                straight(self.fails)
            };
            self.fails = self.fails.saturating_add(1);
            debug!(
                "attacker stuck at {position} ({} fails), trying {}",
                self.fails, self.next_move
            );
        } else {
            self.fails = 0;
        }

        self.turn += 1;
        self.previous_position = position;

        self.next_move
    }

    fn initial_diagonal(&mut self) -> Direction {
        if self.rng.gen_bool(0.5) {
            Direction::UpRight
        } else {
            Direction::DownRight
        }
    }
}

const fn invert_diagonal(direction: Direction) -> Direction {
    if direction.di() > 0 {
        Direction::UpRight
    } else {
        Direction::DownRight
    }
}

/// `fails` counts from 1 here; the first failure already took the other
/// diagonal.
fn straight(fails: usize) -> Direction {
    STRAIGHT.get(fails - 1).direction()
}

impl<R: Rng> Strategy for AttackerStrategy<R> {
    fn name(&self) -> &str {
        "attacker"
    }

    fn get_movement(
        &mut self,
        position: Position,
        _spy: &mut dyn Spy,
    ) -> Direction {
        self.decide(position)
    }
}
