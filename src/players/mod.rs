//! Decision makers that drive a [`crate::gameplay::Game`].
//!
//! Every agent implements [`Agent`]. [`Fish`] and [`Heuristic`] are cheap
//! policies used as opponents and as rollout policies inside the search
//! agents [`Mcts`], [`Planner`], and [`Strategist`].
pub mod agent;
pub use agent::*;

pub mod config;
pub use config::*;

pub mod fish;
pub use fish::*;

pub mod goal;
pub use goal::*;

pub mod heuristic;
pub use heuristic::*;

pub mod mcts;
pub use mcts::*;

pub mod objective;
pub use objective::*;

pub mod planner;
pub use planner::*;

pub mod strategist;
pub use strategist::*;

pub mod tree;
pub use tree::*;
