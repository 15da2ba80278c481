//! The turn-based rules engine.
//!
//! [`Game`] owns all dynamic state and exposes pure queries alongside a
//! single mutating entry point, [`Game::apply`]. Search code works on
//! clones: [`Game::child`] for faithful continuations, [`Game::determinize`]
//! for independent samples of the hidden information.
pub mod action;
pub use action::*;

pub mod battle;
pub use battle::*;

pub mod choices;
pub use choices::*;

pub mod conquest;
pub use conquest::*;

pub mod game;
pub use game::*;

pub mod garrison;
pub use garrison::*;

pub mod phase;
pub use phase::*;

pub mod seat;
pub use seat::*;

pub mod turn;
pub use turn::*;
