//! Static board topology.
//!
//! A [`Map`] is loaded once and shared read-only by every [`crate::gameplay::Game`]
//! cloned from it. The classic 42-territory board ships as static
//! configuration; other boards load from JSON through [`Blueprint`].
pub mod blueprint;
pub use blueprint::*;

pub mod classic;
pub use classic::*;

pub mod continent;
pub use continent::*;

pub mod map;
pub use map::*;

pub mod territory;
pub use territory::*;
