use crate::Armies;
use crate::Position;

/// Dynamic state of one territory: who holds it and with how many armies.
///
/// The owner is `None` only before the territory is claimed in setup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Garrison {
    owner: Option<Position>,
    armies: Armies,
}

impl Garrison {
    pub fn owner(&self) -> Option<Position> {
        self.owner
    }
    pub fn armies(&self) -> Armies {
        self.armies
    }
    pub fn is_owned_by(&self, player: Position) -> bool {
        self.owner == Some(player)
    }
    pub fn is_claimed(&self) -> bool {
        self.owner.is_some()
    }
    pub fn claim(&mut self, player: Position) {
        self.owner = Some(player);
    }
    pub fn reinforce(&mut self, armies: Armies) {
        self.armies += armies;
    }
    pub fn withdraw(&mut self, armies: Armies) {
        debug_assert!(self.armies >= armies);
        self.armies -= armies;
    }
    pub fn reset(&mut self, armies: Armies) {
        self.armies = armies;
    }
}
