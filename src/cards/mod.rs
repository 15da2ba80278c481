//! Territory cards and the trade-in economy.
pub mod card;
pub use card::*;

pub mod deck;
pub use deck::*;

pub mod hand;
pub use hand::*;

pub mod schedule;
pub use schedule::*;

pub mod set;
pub use set::*;

pub mod symbol;
pub use symbol::*;
