use crate::players::Agent;
use crate::players::Fish;
use crate::players::Heuristic;
use crate::players::Mcts;
use crate::players::Planner;
use crate::players::Settings;
use crate::players::Strategist;

/// Which agent to seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(clap::ValueEnum))]
pub enum Lineup {
    Fish,
    Heuristic,
    Mcts,
    Planner,
    Strategist,
}

impl Lineup {
    /// Builds a fresh, seeded agent with budgets from `settings`.
    pub fn build(&self, settings: &Settings, seed: u64) -> anyhow::Result<Box<dyn Agent>> {
        Ok(match self {
            Lineup::Fish => Box::new(Fish::seeded(seed)),
            Lineup::Heuristic => Box::new(Heuristic::seeded(seed)),
            Lineup::Mcts => Box::new(Mcts::seeded(settings.mcts, seed)?),
            Lineup::Planner => Box::new(Planner::seeded(settings.plan, seed)?),
            Lineup::Strategist => Box::new(Strategist::seeded(settings.plan, seed)?),
        })
    }
}

impl std::fmt::Display for Lineup {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Lineup::Fish => write!(f, "fish"),
            Lineup::Heuristic => write!(f, "heuristic"),
            Lineup::Mcts => write!(f, "mcts"),
            Lineup::Planner => write!(f, "planner"),
            Lineup::Strategist => write!(f, "strategist"),
        }
    }
}
