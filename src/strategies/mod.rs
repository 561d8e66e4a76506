pub mod attacker;
pub mod defender;
mod fallback;

pub use attacker::AttackerStrategy;
pub use defender::DefenderStrategy;

use crate::pursuit::{
    spy::Spy,
    types::{Direction, Position},
};

pub trait Strategy {
    fn name(&self) -> &str;

    /// Chooses the direction for this turn. Called once per turn, in turn
    /// order, with `spy` watching the opposing piece.
    fn get_movement(&mut self, position: Position, spy: &mut dyn Spy)
        -> Direction;
}
