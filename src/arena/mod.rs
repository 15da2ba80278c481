//! Plays complete games and measures how often an agent wins.
pub mod arena;
pub use arena::*;

pub mod lineup;
pub use lineup::*;

pub mod record;
pub use record::*;
