pub mod bias;

use log::debug;

use self::bias::bias_direction;
use super::{
    fallback::{Fallbacks, Retry},
    Strategy,
};
use crate::pursuit::{
    spy::Spy,
    types::{Direction, Position},
};

const RETRIES: Fallbacks = Fallbacks::new(&[
    Direction::UpLeft,
    Direction::DownLeft,
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
]);

/// Spends its spy on the attacker's position once, then heads that way and
/// falls back to a fixed list of moves when blocked.
pub struct DefenderStrategy {
    turn:              u64,
    fails:             usize,
    attacker_position: Position,
    bias:              Direction,
    previous_position: Position,
    previous_move:     Direction,
    next_move:         Direction,
}

impl Default for DefenderStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl DefenderStrategy {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            turn:              0,
            fails:             0,
            attacker_position: Position::INVALID,
            bias:              Direction::Stay,
            previous_position: Position::INVALID,
            previous_move:     Direction::Stay,
            next_move:         Direction::Stay,
        }
    }

    /// Where the spy last saw the attacker, if it has been used.
    #[must_use]
    pub fn attacker_position(&self) -> Option<Position> {
        Some(self.attacker_position).filter(Position::is_valid)
    }

    #[must_use]
    pub const fn bias(&self) -> Direction {
        self.bias
    }

    pub fn decide<S: Spy + ?Sized>(
        &mut self,
        position: Position,
        attacker_spy: &mut S,
    ) -> Direction {
        if attacker_spy.uses_count() < 1 {
            self.spot(position, attacker_spy);
        }

        if self.turn == 0 {
            self.next_move = self.bias;
        }

        if position == self.previous_position {
            self.next_move = self.retry();
            debug!(
                "defender stuck at {position} ({} fails), trying {}",
                self.fails, self.next_move
            );
        } else {
            self.fails = 0;
        }

        self.turn += 1;
        self.previous_move = self.next_move;
        self.previous_position = position;

        self.next_move
    }

    /// Caches the sighting and its bias. An `INVALID` sighting (an exhausted
    /// spy) is ignored, keeping whatever was cached before.
    fn spot<S: Spy + ?Sized>(&mut self, position: Position, spy: &mut S) {
        let sighting = spy.position();
        if !sighting.is_valid() {
            return;
        }
        self.attacker_position = sighting;
        self.bias = bias_direction(position, sighting);
        debug!(
            "defender at {position} spotted the attacker at {sighting}, \
             biased {}",
            self.bias
        );
    }

    /// Next fallback that differs from the move that just failed. Every
    /// iteration consumes one entry of a finite list, so the loop ends.
    fn retry(&mut self) -> Direction {
        loop {
            match RETRIES.get(self.fails) {
                Retry::Try(candidate) => {
                    self.fails += 1;
                    if candidate != self.previous_move {
                        return candidate;
                    }
                }
                exhausted @ Retry::Exhausted => return exhausted.direction(),
            }
        }
    }
}

impl Strategy for DefenderStrategy {
    fn name(&self) -> &str {
        "defender"
    }

    fn get_movement(
        &mut self,
        position: Position,
        spy: &mut dyn Spy,
    ) -> Direction {
        self.decide(position, spy)
    }
}
