use crate::map::Territory;

/// The picture on a card. Wilds complete any set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Symbol {
    Infantry,
    Cavalry,
    Artillery,
    Wild,
}

impl Symbol {
    pub const PICTURES: [Symbol; 3] = [Symbol::Infantry, Symbol::Cavalry, Symbol::Artillery];
    pub fn is_wild(&self) -> bool {
        matches!(self, Symbol::Wild)
    }
}

/// territory cards cycle through the three pictures by index
impl From<Territory> for Symbol {
    fn from(territory: Territory) -> Self {
        Self::PICTURES[territory.index() % Self::PICTURES.len()]
    }
}

impl crate::Arbitrary for Symbol {
    fn random() -> Self {
        Self::PICTURES[rand::random_range(0..Self::PICTURES.len())]
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Symbol::Infantry => write!(f, "I"),
            Symbol::Cavalry => write!(f, "C"),
            Symbol::Artillery => write!(f, "A"),
            Symbol::Wild => write!(f, "*"),
        }
    }
}
