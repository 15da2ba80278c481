use crate::Armies;
use crate::cards::Hand;

/// Per-player state that is not on the board.
///
/// `reserve` holds setup armies not yet placed. `deploy` holds the armies
/// still to place during this reinforcement. `bonus` accrues trade awards
/// until the next reinforcement begins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Seat {
    alive: bool,
    hand: Hand,
    reserve: Armies,
    deploy: Armies,
    bonus: Armies,
    conquered: bool,
}

impl From<Armies> for Seat {
    fn from(reserve: Armies) -> Self {
        Self {
            alive: true,
            reserve,
            ..Self::default()
        }
    }
}

impl Seat {
    pub fn is_alive(&self) -> bool {
        self.alive
    }
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
    pub fn reserve(&self) -> Armies {
        self.reserve
    }
    pub fn deploy(&self) -> Armies {
        self.deploy
    }
    pub fn has_conquered(&self) -> bool {
        self.conquered
    }
    /// Armies owned but not yet on the board.
    pub fn pending(&self) -> Armies {
        self.reserve + self.deploy + self.bonus
    }

    pub fn place_reserve(&mut self) {
        debug_assert!(self.reserve > 0);
        self.reserve -= 1;
    }
    pub fn place_deploy(&mut self) {
        debug_assert!(self.deploy > 0);
        self.deploy -= 1;
    }
    pub fn award(&mut self, armies: Armies) {
        self.bonus += armies;
    }
    /// Folds income and any trade bonus into this turn's deployment.
    pub fn muster(&mut self, income: Armies) {
        self.deploy += income + self.bonus;
        self.bonus = 0;
    }
    /// Drops any armies still waiting to be deployed, returning how many.
    pub fn disband(&mut self) -> Armies {
        std::mem::take(&mut self.deploy)
    }
    pub fn set_conquered(&mut self, conquered: bool) {
        self.conquered = conquered;
    }
    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }
    pub fn set_hand(&mut self, hand: Hand) {
        self.hand = hand;
    }
    /// Marks the player eliminated and surrenders their hand.
    pub fn eliminate(&mut self) -> Hand {
        self.alive = false;
        self.conquered = false;
        std::mem::take(&mut self.hand)
    }
}
