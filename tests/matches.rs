use rand::{rngs::StdRng, SeedableRng};
use spy_pursuit::{
    arena::{Board, Game, Match, Outcome, Piece},
    pursuit::{models::MatchSettings, types::Position},
    strategies::{AttackerStrategy, DefenderStrategy},
};

fn strategies(seed: u64) -> (Box<AttackerStrategy>, Box<DefenderStrategy>) {
    (
        Box::new(AttackerStrategy::seeded(seed)),
        Box::new(DefenderStrategy::new()),
    )
}

#[test]
fn boxed_in_defender_cannot_stop_the_attacker() {
    // whichever diagonal it opens with, the attacker bounces off an edge once
    // and reaches the last column on turn 10
    let mut board = Board::new(9, 10);
    board.obstacles.extend([
        Position::new(7, 0),
        Position::new(7, 1),
        Position::new(8, 1),
    ]);
    let game = Game::new(board, Position::new(4, 0), Position::new(8, 0), 1)
        .unwrap();

    for seed in 0..8 {
        let (attacker, defender) = strategies(seed);
        let mut game_match =
            Match::from_game(game.clone(), attacker, defender, 100);
        assert_eq!(game_match.play(), Outcome::AttackerEscaped { turns: 10 });
        assert_eq!(
            game_match.game().position(Piece::Defender),
            Position::new(8, 0)
        );
    }
}

#[test]
fn defender_in_the_way_catches_a_diagonal_runner() {
    // a single row: the attacker's diagonals are blocked, it falls back to
    // moving right straight into the waiting defender
    let game = Game::new(
        Board::new(1, 8),
        Position::new(0, 0),
        Position::new(0, 4),
        1,
    )
    .unwrap();
    let (attacker, defender) = strategies(1);
    let mut game_match = Match::from_game(game, attacker, defender, 100);

    let outcome = game_match.play();
    assert!(
        matches!(outcome, Outcome::DefenderCaught { .. }),
        "got {outcome}"
    );
    assert_eq!(game_match.game().spy_uses(Piece::Attacker), 1);
    assert_eq!(game_match.game().spy_uses(Piece::Defender), 0);
}

#[test]
fn every_seeded_match_ends() {
    let settings = MatchSettings {
        max_turns: 60,
        ..MatchSettings::default()
    };
    let mut rng = StdRng::seed_from_u64(77);
    for seed in 0..50 {
        let (attacker, defender) = strategies(seed);
        let outcome = Match::new(&settings, &mut rng, attacker, defender)
            .unwrap()
            .play();
        assert!(outcome.turns() <= settings.max_turns);
    }
}

#[test]
fn unplayable_settings_are_reported() {
    let settings = MatchSettings {
        width: 1,
        ..MatchSettings::default()
    };
    let mut rng = StdRng::seed_from_u64(0);
    let (attacker, defender) = strategies(0);
    assert!(Match::new(&settings, &mut rng, attacker, defender).is_err());
}
