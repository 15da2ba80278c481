use crate::Armies;
use crate::DIE_FACES;
use rand::Rng;

/// One round of dice between an attacker and a defender.
///
/// Both sides roll, dice are sorted descending and compared pairwise. Each
/// comparison costs the loser one army and ties go to the defender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Battle {
    attack: Armies,
    defend: Armies,
}

/// Armies lost by each side in a [`Battle`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Losses {
    pub attacker: Armies,
    pub defender: Armies,
}

impl Losses {
    pub fn total(&self) -> Armies {
        self.attacker + self.defender
    }
}

impl Battle {
    pub fn new(attack: Armies, defend: Armies) -> Self {
        debug_assert!(attack > 0);
        debug_assert!(defend > 0);
        Self { attack, defend }
    }
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> Losses {
        let attack = Self::dice(self.attack, rng);
        let defend = Self::dice(self.defend, rng);
        Self::resolve(&attack, &defend)
    }
    /// Compares already-sorted dice. Exposed for deterministic testing.
    pub fn resolve(attack: &[u8], defend: &[u8]) -> Losses {
        attack
            .iter()
            .zip(defend.iter())
            .fold(Losses::default(), |mut losses, (a, d)| {
                if a > d {
                    losses.defender += 1;
                } else {
                    losses.attacker += 1;
                }
                losses
            })
    }
    fn dice<R: Rng + ?Sized>(n: Armies, rng: &mut R) -> Vec<u8> {
        let mut dice = (0..n)
            .map(|_| rng.random_range(1..=DIE_FACES))
            .collect::<Vec<u8>>();
        dice.sort_unstable_by(|a, b| b.cmp(a));
        dice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn ties_favor_defender() {
        let losses = Battle::resolve(&[6, 3], &[6, 2]);
        assert!(losses.attacker == 1);
        assert!(losses.defender == 1);
    }

    #[test]
    fn comparisons_bounded_by_fewer_dice() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..1000 {
            let losses = Battle::new(3, 1).roll(rng);
            assert!(losses.total() == 1);
            let losses = Battle::new(3, 2).roll(rng);
            assert!(losses.total() == 2);
        }
    }

    #[test]
    fn three_against_one_wins_two_thirds() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let n = 100_000;
        let wins = (0..n)
            .map(|_| Battle::new(3, 1).roll(rng))
            .filter(|l| l.defender == 1)
            .count();
        let p = wins as f32 / n as f32;
        assert!(p > 0.64 && p < 0.68, "{}", p);
    }
}
