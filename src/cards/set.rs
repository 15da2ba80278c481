use super::card::Card;
use super::symbol::Symbol;

/// Three cards that may be traded in together.
///
/// Valid sets are three of a kind, one of each picture, or any two cards
/// plus a wild. Cards are kept sorted so equal sets compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Set([Card; 3]);

impl Set {
    pub fn cards(&self) -> &[Card; 3] {
        &self.0
    }
    pub fn is_valid(cards: &[Card; 3]) -> bool {
        let symbols = cards.map(|c| c.symbol());
        if symbols.iter().any(Symbol::is_wild) {
            true
        } else if symbols[0] == symbols[1] && symbols[1] == symbols[2] {
            true
        } else {
            symbols[0] != symbols[1] && symbols[1] != symbols[2] && symbols[0] != symbols[2]
        }
    }
}

impl TryFrom<[Card; 3]> for Set {
    type Error = anyhow::Error;
    fn try_from(mut cards: [Card; 3]) -> Result<Self, Self::Error> {
        anyhow::ensure!(
            Self::is_valid(&cards),
            "{} {} {} is not a tradeable set",
            cards[0],
            cards[1],
            cards[2]
        );
        cards.sort();
        Ok(Self(cards))
    }
}

impl std::fmt::Display for Set {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} {}", self.0[0], self.0[1], self.0[2])
    }
}
