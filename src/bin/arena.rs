//! Arena Binary
//!
//! Plays a batch of games between one agent and random opponents and
//! reports the agent's win rate with a 95% confidence interval.
//!
//! Options: --games, --players, --hero, --seed, --threads, --config, --map

use clap::Parser;
use riskbot::arena::Arena;
use riskbot::arena::Lineup;
use riskbot::map::Map;
use riskbot::players::Settings;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Games to play
    #[arg(long, default_value_t = 100)]
    games: usize,
    /// Fixed player count; random in 3..=6 when omitted
    #[arg(long)]
    players: Option<usize>,
    /// Agent measured against the field
    #[arg(long, value_enum, default_value_t = Lineup::Heuristic)]
    hero: Lineup,
    /// Seed for the whole batch; drawn from the OS when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Worker threads; every core when omitted
    #[arg(long)]
    threads: Option<usize>,
    /// JSON file of search budgets
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON board description; the classic board when omitted
    #[arg(long)]
    map: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    riskbot::log()?;
    let args = Args::parse();
    let settings = match args.config {
        Some(ref path) => Settings::from_json(&std::fs::read_to_string(path)?)?,
        None => Settings::default(),
    };
    let map = match args.map {
        Some(ref path) => std::sync::Arc::new(Map::from_json(&std::fs::read_to_string(path)?)?),
        None => Map::classic(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    let threads = args.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()?;
    log::info!("seed {} across {} threads", seed, threads);
    let start = std::time::Instant::now();
    let record = Arena::new(map, args.hero, settings)
        .games(args.games)
        .players(args.players)
        .seed(seed)
        .run()?;
    log::info!("took {:.2}s", start.elapsed().as_secs_f64());
    println!("Score is {}", record);
    Ok(())
}
