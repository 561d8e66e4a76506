mod board;
mod game;

pub use board::Board;
use color_eyre::Result;
pub use game::{Game, Outcome, Piece};
use log::{info, trace};
use rand::Rng;

use crate::{
    pursuit::{models::MatchSettings, types::Position},
    strategies::Strategy,
};

pub struct Match {
    game:      Game,
    attacker:  Box<dyn Strategy>,
    defender:  Box<dyn Strategy>,
    max_turns: u64,
}

impl Match {
    /// Sets up a random board: the attacker starts in the first column, the
    /// defender in the middle one.
    ///
    /// # Errors
    ///
    /// Fails if the settings don't describe a playable board.
    pub fn new<R: Rng + ?Sized>(
        settings: &MatchSettings,
        rng: &mut R,
        attacker: Box<dyn Strategy>,
        defender: Box<dyn Strategy>,
    ) -> Result<Self> {
        settings.validate()?;

        let attacker_start = Position::new(rng.gen_range(0..settings.height), 0);
        let defender_start = Position::new(
            rng.gen_range(0..settings.height),
            settings.width / 2,
        );
        let board = Board::generate(
            settings.height,
            settings.width,
            settings.obstacles,
            &[attacker_start, defender_start],
            rng,
        );
        let game =
            Game::new(board, attacker_start, defender_start, settings.spy_uses)?;

        Ok(Self::from_game(game, attacker, defender, settings.max_turns))
    }

    #[must_use]
    pub fn from_game(
        game: Game,
        attacker: Box<dyn Strategy>,
        defender: Box<dyn Strategy>,
        max_turns: u64,
    ) -> Self {
        Self {
            game,
            attacker,
            defender,
            max_turns,
        }
    }

    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    pub fn play(&mut self) -> Outcome {
        self.play_with(|_| {})
    }

    /// Plays to the end, handing the game to `on_turn` after every turn.
    pub fn play_with(&mut self, mut on_turn: impl FnMut(&Game)) -> Outcome {
        let outcome = loop {
            if self.game.turn() >= self.max_turns {
                break Outcome::OutOfTurns {
                    turns: self.game.turn(),
                };
            }
            let outcome = self.play_turn();
            on_turn(&self.game);
            if let Some(outcome) = outcome {
                break outcome;
            }
        };
        info!(
            "{} vs {}: {outcome}",
            self.attacker.name(),
            self.defender.name()
        );
        outcome
    }

    /// Attacker moves first; the match can end before the defender moves.
    pub fn play_turn(&mut self) -> Option<Outcome> {
        self.game.advance();
        self.move_piece(Piece::Attacker)
            .or_else(|| self.move_piece(Piece::Defender))
    }

    fn move_piece(&mut self, piece: Piece) -> Option<Outcome> {
        let position = self.game.position(piece);
        let strategy = match piece {
            Piece::Attacker => &mut self.attacker,
            Piece::Defender => &mut self.defender,
        };
        let mut spy = self.game.spy_on(piece.opponent());
        let direction = strategy.get_movement(position, &mut spy);

        let moved = self.game.apply(piece, direction);
        trace!(
            "turn {}: {piece} at {position} goes {direction}{}",
            self.game.turn(),
            if moved { "" } else { " (blocked)" }
        );
        self.game.outcome()
    }
}
