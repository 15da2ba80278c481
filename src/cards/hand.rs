use super::card::Card;
use super::set::Set;

/// The cards a player holds. Order is irrelevant except for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand(Vec<Card>);

impl Hand {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    pub fn add(&mut self, card: Card) {
        self.0.push(card);
    }
    /// moves every card out of `other` into this hand
    pub fn absorb(&mut self, other: &mut Hand) {
        self.0.append(&mut other.0);
    }
    /// Every distinct tradeable set among the held cards.
    pub fn sets(&self) -> Vec<Set> {
        let n = self.len();
        let mut sets = Vec::new();
        for i in 0..n {
            for j in i + 1..n {
                for k in j + 1..n {
                    if let Ok(set) = Set::try_from([self.0[i], self.0[j], self.0[k]]) {
                        sets.push(set);
                    }
                }
            }
        }
        sets.sort();
        sets.dedup();
        sets
    }
    pub fn has_set(&self) -> bool {
        !self.sets().is_empty()
    }
    /// Removes the three cards of `set`, failing if any is missing.
    pub fn remove(&mut self, set: &Set) -> anyhow::Result<()> {
        let mut remaining = self.0.clone();
        for card in set.cards() {
            let index = remaining
                .iter()
                .position(|c| c == card)
                .ok_or_else(|| anyhow::anyhow!("card {} not in hand", card))?;
            remaining.swap_remove(index);
        }
        self.0 = remaining;
        Ok(())
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", card)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Symbol;
    use crate::map::Territory;

    fn card(index: usize, symbol: Symbol) -> Card {
        Card::new(Some(Territory::from(index)), symbol)
    }

    #[test]
    fn no_set_in_mixed_pair() {
        let hand = Hand::from(vec![
            card(0, Symbol::Cavalry),
            card(1, Symbol::Cavalry),
            card(2, Symbol::Infantry),
        ]);
        assert!(hand.sets().is_empty());
        assert!(!hand.has_set());
    }

    #[test]
    fn finds_every_set() {
        let hand = Hand::from(vec![
            card(0, Symbol::Cavalry),
            card(1, Symbol::Cavalry),
            card(2, Symbol::Infantry),
            card(3, Symbol::Infantry),
            card(4, Symbol::Cavalry),
            card(5, Symbol::Infantry),
        ]);
        assert!(hand.sets().len() == 2);
    }

    #[test]
    fn five_cards_always_hold_a_set() {
        for mask in 0..3usize.pow(5) {
            let hand = Hand::from(
                (0..5)
                    .map(|i| (i, Symbol::PICTURES[(mask / 3usize.pow(i as u32)) % 3]))
                    .map(|(i, s)| card(i, s))
                    .collect::<Vec<_>>(),
            );
            assert!(hand.has_set());
        }
    }

    #[test]
    fn remove_takes_exactly_the_set() {
        let a = card(0, Symbol::Infantry);
        let b = card(1, Symbol::Cavalry);
        let c = card(2, Symbol::Artillery);
        let d = card(3, Symbol::Artillery);
        let mut hand = Hand::from(vec![a, d, b, c]);
        let set = Set::try_from([a, b, c]).unwrap();
        hand.remove(&set).unwrap();
        assert!(hand.cards() == &[d]);
        assert!(hand.remove(&set).is_err());
    }

    #[test]
    fn absorb_empties_other() {
        let mut mine = Hand::from(vec![card(0, Symbol::Infantry)]);
        let mut theirs = Hand::from(vec![card(1, Symbol::Cavalry), Card::wild()]);
        mine.absorb(&mut theirs);
        assert!(mine.len() == 3);
        assert!(theirs.is_empty());
    }
}
