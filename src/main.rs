use color_eyre::Result;
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
use spy_pursuit::{
    arena::Match,
    pursuit::models::MatchSettings,
    strategies::{AttackerStrategy, DefenderStrategy},
};

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    info!("{NAME} v{VERSION}");

    let settings = match std::env::args().nth(1) {
        Some(path) => MatchSettings::load(path)?,
        None => MatchSettings::default(),
    };

    let seed = settings.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("playing seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);
    let attacker = AttackerStrategy::seeded(rng.gen());

    let mut game_match = Match::new(
        &settings,
        &mut rng,
        Box::new(attacker),
        Box::new(DefenderStrategy::new()),
    )?;

    println!("{}", game_match.game());
    let outcome = game_match.play_with(|game| {
        println!("turn {}\n{game}", game.turn());
    });

    println!("{outcome}");
    println!("{}", serde_json::to_string(&outcome)?);

    Ok(())
}
