use std::fmt;

use color_eyre::{eyre::ensure, Result};
use serde::Serialize;

use super::board::Board;
use crate::pursuit::{
    spy::{Sighting, Spyglass},
    types::{Direction, Position},
    utils::chebyshev_distance,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Attacker,
    Defender,
}

impl Piece {
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Piece::Attacker => Piece::Defender,
            Piece::Defender => Piece::Attacker,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Piece::Attacker => write!(f, "attacker"),
            Piece::Defender => write!(f, "defender"),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum Outcome {
    AttackerEscaped { turns: u64 },
    DefenderCaught { turns: u64 },
    OutOfTurns { turns: u64 },
}

impl Outcome {
    #[must_use]
    pub const fn turns(&self) -> u64 {
        match self {
            Outcome::AttackerEscaped { turns }
            | Outcome::DefenderCaught { turns }
            | Outcome::OutOfTurns { turns } => *turns,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Outcome::AttackerEscaped { .. } => "attacker escaped",
            Outcome::DefenderCaught { .. } => "defender caught",
            Outcome::OutOfTurns { .. } => "out of turns",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} after {} turns", self.label(), self.turns())
    }
}

#[derive(Clone, Debug)]
pub struct Game {
    pub board:       Board,
    attacker:        Position,
    defender:        Position,
    spy_on_attacker: Spyglass,
    spy_on_defender: Spyglass,
    turn:            u64,
}

impl Game {
    /// # Errors
    ///
    /// Fails if either piece starts off the board, on an obstacle, or on the
    /// other piece.
    pub fn new(
        board: Board,
        attacker: Position,
        defender: Position,
        spy_uses: u32,
    ) -> Result<Self> {
        ensure!(board.is_free(attacker), "attacker can't start at {attacker}");
        ensure!(board.is_free(defender), "defender can't start at {defender}");
        ensure!(attacker != defender, "pieces can't share {attacker}");

        Ok(Self {
            board,
            attacker,
            defender,
            spy_on_attacker: Spyglass::new(spy_uses),
            spy_on_defender: Spyglass::new(spy_uses),
            turn: 0,
        })
    }

    #[must_use]
    pub const fn turn(&self) -> u64 {
        self.turn
    }

    pub fn advance(&mut self) {
        self.turn += 1;
    }

    #[must_use]
    pub const fn position(&self, piece: Piece) -> Position {
        match piece {
            Piece::Attacker => self.attacker,
            Piece::Defender => self.defender,
        }
    }

    /// The spy watching `target`, aimed at where it stands now.
    pub fn spy_on(&mut self, target: Piece) -> Sighting<'_> {
        match target {
            Piece::Attacker => self.spy_on_attacker.aim(self.attacker),
            Piece::Defender => self.spy_on_defender.aim(self.defender),
        }
    }

    #[must_use]
    pub const fn spy_uses(&self, target: Piece) -> u32 {
        match target {
            Piece::Attacker => self.spy_on_attacker.uses(),
            Piece::Defender => self.spy_on_defender.uses(),
        }
    }

    /// Moves `piece` one step if the destination is free and not occupied by
    /// the other piece. A blocked piece stays put. Returns whether it moved.
    pub fn apply(&mut self, piece: Piece, direction: Direction) -> bool {
        let from = self.position(piece);
        let occupied = self.position(piece.opponent());
        let Some(to) = self
            .board
            .step(from, direction)
            .filter(|to| self.board.is_free(*to) && *to != occupied)
        else {
            return false;
        };

        match piece {
            Piece::Attacker => self.attacker = to,
            Piece::Defender => self.defender = to,
        }
        to != from
    }

    /// Reaching the last column beats being caught on the same move.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        let turns = self.turn;
        if self.attacker.j == self.board.last_column() {
            Some(Outcome::AttackerEscaped { turns })
        } else if chebyshev_distance(self.attacker, self.defender) <= 1 {
            Some(Outcome::DefenderCaught { turns })
        } else {
            None
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.board.height {
            for j in 0..self.board.width {
                let cell = Position::new(i, j);
                let glyph = if cell == self.attacker {
                    'A'
                } else if cell == self.defender {
                    'D'
                } else if self.board.obstacles.contains(&cell) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pursuit::spy::Spy;

    fn open_game() -> Game {
        Game::new(Board::new(5, 8), Position::new(2, 0), Position::new(2, 4), 1)
            .unwrap()
    }

    #[test]
    fn pieces_move_into_free_cells() {
        let mut game = open_game();
        assert!(game.apply(Piece::Attacker, Direction::UpRight));
        assert_eq!(game.position(Piece::Attacker), Position::new(1, 1));
    }

    #[test]
    fn edges_obstacles_and_pieces_block() {
        let mut game = open_game();
        assert!(!game.apply(Piece::Attacker, Direction::Left));
        assert!(!game.apply(Piece::Attacker, Direction::Stay));

        game.board.obstacles.insert(Position::new(2, 1));
        assert!(!game.apply(Piece::Attacker, Direction::Right));

        game.defender = Position::new(3, 1);
        assert!(!game.apply(Piece::Attacker, Direction::DownRight));
        assert_eq!(game.position(Piece::Attacker), Position::new(2, 0));
    }

    #[test]
    fn reaching_the_last_column_wins() {
        let mut game = open_game();
        game.attacker = Position::new(0, 7);
        assert!(matches!(
            game.outcome(),
            Some(Outcome::AttackerEscaped { .. })
        ));
    }

    #[test]
    fn adjacent_defender_catches() {
        let mut game = open_game();
        assert_eq!(game.outcome(), None);
        game.defender = Position::new(3, 1);
        assert!(matches!(game.outcome(), Some(Outcome::DefenderCaught { .. })));
    }

    #[test]
    fn each_side_has_its_own_spy() {
        let mut game = open_game();
        assert_eq!(
            game.spy_on(Piece::Attacker).position(),
            Position::new(2, 0)
        );
        assert_eq!(game.spy_uses(Piece::Attacker), 1);
        assert_eq!(game.spy_uses(Piece::Defender), 0);
        assert_eq!(game.spy_on(Piece::Attacker).position(), Position::INVALID);
    }

    #[test]
    fn bad_starts_are_rejected() {
        let board = Board::new(3, 3);
        let start = Position::new(1, 1);
        assert!(Game::new(board.clone(), start, start, 1).is_err());
        assert!(Game::new(board, Position::new(3, 0), start, 1).is_err());
    }

    #[test]
    fn renders_the_grid() {
        let mut game = Game::new(
            Board::new(2, 3),
            Position::new(0, 0),
            Position::new(1, 2),
            1,
        )
        .unwrap();
        game.board.obstacles.insert(Position::new(0, 1));
        assert_eq!(game.to_string(), "A#.\n..D\n");
    }
}
