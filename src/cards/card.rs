use super::symbol::Symbol;
use crate::map::Territory;

/// A risk card: a territory (or none, for wilds) and a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Card {
    territory: Option<Territory>,
    symbol: Symbol,
}

impl Card {
    pub fn new(territory: Option<Territory>, symbol: Symbol) -> Self {
        Self { territory, symbol }
    }
    pub fn wild() -> Self {
        Self::new(None, Symbol::Wild)
    }
    pub fn territory(&self) -> Option<Territory> {
        self.territory
    }
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }
    pub fn is_wild(&self) -> bool {
        self.symbol.is_wild()
    }
}

impl From<Territory> for Card {
    fn from(territory: Territory) -> Self {
        Self::new(Some(territory), Symbol::from(territory))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.territory {
            Some(t) => write!(f, "{}{}", self.symbol, t),
            None => write!(f, "{}", self.symbol),
        }
    }
}
