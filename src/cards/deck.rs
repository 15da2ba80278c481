use super::card::Card;
use super::hand::Hand;
use crate::map::Map;
use crate::WILD_CARDS;
use rand::Rng;

/// The draw pile: every card not currently held by a player.
///
/// Traded cards return to the pile, so the deck is always the complement
/// of the hands in play and never needs to be stored on the game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// One card per territory plus the wilds.
    pub fn full(map: &Map) -> Self {
        Self(
            map.territories()
                .map(Card::from)
                .chain(std::iter::repeat_n(Card::wild(), WILD_CARDS))
                .collect(),
        )
    }
    /// The full deck minus every card held in `hands`.
    pub fn without<'a>(map: &Map, hands: impl IntoIterator<Item = &'a Hand>) -> Self {
        let mut deck = Self::full(map);
        for hand in hands {
            for card in hand.cards() {
                if let Some(i) = deck.0.iter().position(|c| c == card) {
                    deck.0.swap_remove(i);
                }
            }
        }
        deck
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Draws and removes a uniformly random card.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Card> {
        if self.0.is_empty() {
            None
        } else {
            let i = rng.random_range(0..self.0.len());
            Some(self.0.swap_remove(i))
        }
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
