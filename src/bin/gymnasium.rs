use color_eyre::Result;
use itertools::Itertools;
use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};
use spy_pursuit::{
    arena::{Match, Outcome},
    pursuit::models::MatchSettings,
    strategies::{AttackerStrategy, DefenderStrategy},
};

fn play_all(settings: &MatchSettings, seed: u64) -> Result<Vec<Outcome>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..settings.matches)
        .map(|round| -> Result<Outcome> {
            let attacker = AttackerStrategy::seeded(rng.gen());
            let outcome = Match::new(
                settings,
                &mut rng,
                Box::new(attacker),
                Box::new(DefenderStrategy::new()),
            )?
            .play();
            debug!("match {round}: {outcome}");
            Ok(outcome)
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => MatchSettings::load(path)?,
        None => MatchSettings::default(),
    };
    let seed = settings.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!(
        "playing {} matches on a {}x{} board, seed {seed}",
        settings.matches, settings.height, settings.width
    );

    let outcomes = play_all(&settings, seed)?;

    for (label, count) in outcomes
        .iter()
        .map(Outcome::label)
        .counts()
        .into_iter()
        .sorted()
    {
        println!("{label:>16}: {count}");
    }

    if !outcomes.is_empty() {
        let mean = outcomes.iter().map(Outcome::turns).sum::<u64>() as f64
            / outcomes.len() as f64;
        println!("{:>16}: {mean:.1}", "mean turns");
    }

    Ok(())
}
