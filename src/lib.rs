//! Risk rules engine with search-based agents.
//!
//! The engine is a turn-based state machine over the classic rules (claiming,
//! reinforcement, dice combat, occupation, card trading, fortification,
//! elimination). Its cloning contract supports simulation-based search over
//! hidden information, which the agents in [`players`] build on.
//!
//! ## Modules
//!
//! - [`map`] — Static board topology: territories, adjacency, continents
//! - [`cards`] — Territory cards, hands, tradeable sets, the trade schedule
//! - [`gameplay`] — The [`gameplay::Game`] state machine and its [`gameplay::Action`]s
//! - [`players`] — Random, heuristic, MCTS, and planning agents
//! - [`arena`] — Driver that plays complete games and gathers win rates
#![allow(dead_code)]

pub mod arena;
pub mod cards;
pub mod gameplay;
pub mod map;
pub mod players;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Army counts on territories and in reserve.
pub type Armies = u32;
/// Player index around the board.
pub type Position = usize;
/// Rewards, heuristic scores, and search values.
pub type Utility = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Fewest players supported at the board.
pub const MIN_PLAYERS: usize = 3;
/// Most players supported at the board.
pub const MAX_PLAYERS: usize = 6;
/// Setup armies per player, indexed by player count.
pub const STARTING_ARMIES: [Armies; MAX_PLAYERS + 1] = [0, 0, 0, 35, 30, 25, 20];

// ============================================================================
// REINFORCEMENT AND CARDS
// ============================================================================
/// Reinforcement floor regardless of territory count.
pub const MIN_INCOME: Armies = 3;
/// Territories per reinforcement army.
pub const TERRITORIES_PER_ARMY: Armies = 3;
/// Hand size at which a trade becomes mandatory.
pub const MANDATORY_HAND: usize = 5;
/// Hand size after absorbing an eliminated player that forces an immediate trade.
pub const ELIMINATION_HAND: usize = 6;
/// Armies placed directly on each traded card's territory when owned.
pub const TERRITORY_CARD_BONUS: Armies = 2;
/// Armies awarded for the first sets traded game-wide.
pub const TRADE_SCHEDULE: [Armies; 6] = [4, 6, 8, 10, 12, 15];
/// Increment per set once the schedule table is exhausted.
pub const TRADE_INCREMENT: Armies = 5;
/// Wild cards shuffled into the deck.
pub const WILD_CARDS: usize = 2;

// ============================================================================
// COMBAT
// ============================================================================
/// Most dice an attacker may roll.
pub const MAX_ATTACK_DICE: Armies = 3;
/// Most dice a defender rolls.
pub const MAX_DEFEND_DICE: Armies = 2;
/// Faces on each die.
pub const DIE_FACES: u8 = 6;

// ============================================================================
// MCTS DEFAULTS
// Budgets are fixed up front; there is no wall-clock cancellation.
// ============================================================================
/// Simulations per candidate tree.
pub const MCTS_SIMULATIONS: usize = 50;
/// Rollout plies before falling back to the army projection.
pub const MCTS_ROLLOUT_STEPS: usize = 120;
/// Turns of income projected forward when scoring a cut-off rollout.
pub const MCTS_PROJECTED_TURNS: usize = 3;
/// UCT exploration constant (1/√2).
pub const MCTS_EXPLORATION: Utility = std::f32::consts::FRAC_1_SQRT_2;

// ============================================================================
// PLANNER DEFAULTS
// ============================================================================
/// Whole-turn plans sampled per replan.
pub const PLAN_SAMPLES: usize = 200;
/// Rollouts averaged to score each plan.
pub const PLAN_ROLLOUTS: usize = 3;
/// Ply cap shared by plan construction and scoring rollouts.
pub const PLAN_STEPS: usize = 240;
/// Score of a decided game in the planner's terminal-aware heuristic.
pub const PLAN_DECIDED: Utility = 100.0;

// ============================================================================
// HEURISTIC POLICY
// ============================================================================
/// Upper bound of the uniform tie-break jitter added to every score.
pub const HEURISTIC_JITTER: Utility = 0.01;
/// Penalty per hostile neighbor when placing armies.
pub const HEURISTIC_HOSTILITY: Utility = 0.1;
/// Penalty per defending army when choosing an attack.
pub const HEURISTIC_RESISTANCE: Utility = 0.1;

// ============================================================================
// ARENA
// ============================================================================
/// Hard ceiling on actions in a single game before the driver gives up.
pub const MAX_GAME_ACTIONS: usize = 250_000;
/// z-score of the reported win-rate confidence interval.
pub const CONFIDENCE_Z: f64 = 1.96;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
