use super::agent::Agent;
use crate::gameplay::Action;
use crate::gameplay::Game;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

/// Plays uniformly at random among the search choices.
pub struct Fish {
    rng: SmallRng,
}

impl Fish {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for Fish {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for Fish {
    fn decide(&mut self, game: &Game) -> anyhow::Result<Action> {
        game.choices()
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("fish asked to move during {}", game.phase()))
    }
    fn name(&self) -> &'static str {
        "fish"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fish_plays_legal_moves() {
        let mut fish = Fish::seeded(0);
        let mut game = Game::arranged(3, 0).unwrap();
        for _ in 0..1_000 {
            if game.is_terminal() {
                break;
            }
            let action = fish.decide(&game).unwrap();
            assert!(game.is_legal(&action));
            game.apply(action).unwrap();
        }
    }

    #[test]
    fn fish_refuses_finished_games() {
        let mut game = Game::arranged(3, 1).unwrap();
        let mut fish = Fish::seeded(1);
        let mut hero = crate::players::Heuristic::seeded(1);
        while !game.is_terminal() {
            let action = hero.decide(&game).unwrap();
            game.apply(action).unwrap();
        }
        assert!(fish.decide(&game).is_err());
    }
}
