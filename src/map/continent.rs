use super::territory::Territory;
use crate::Armies;

/// A named group of territories granting a bonus to whoever holds all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Continent {
    name: String,
    bonus: Armies,
    territories: Vec<Territory>,
}

impl Continent {
    pub fn new(name: String, bonus: Armies, territories: Vec<Territory>) -> Self {
        Self {
            name,
            bonus,
            territories,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn bonus(&self) -> Armies {
        self.bonus
    }
    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }
    pub fn contains(&self, territory: &Territory) -> bool {
        self.territories.contains(territory)
    }
}

impl std::fmt::Display for Continent {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} (+{})", self.name, self.bonus)
    }
}
