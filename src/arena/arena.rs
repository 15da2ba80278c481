use super::lineup::Lineup;
use super::record::Record;
use crate::gameplay::Game;
use crate::map::Map;
use crate::players::Agent;
use crate::players::Fish;
use crate::players::Settings;
use crate::Position;
use crate::MAX_GAME_ACTIONS;
use crate::MAX_PLAYERS;
use crate::MIN_PLAYERS;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;
use std::sync::Arc;

/// A batch of games pitting one hero against [`Fish`] opponents.
///
/// Each game draws its player count (unless fixed), the hero's seat, and
/// every agent's seed from a stream derived from the arena seed and the
/// game's index, so results do not depend on scheduling.
#[derive(Debug, Clone)]
pub struct Arena {
    map: Arc<Map>,
    hero: Lineup,
    settings: Settings,
    games: usize,
    players: Option<usize>,
    seed: u64,
}

impl Arena {
    pub fn new(map: Arc<Map>, hero: Lineup, settings: Settings) -> Self {
        Self {
            map,
            hero,
            settings,
            games: 100,
            players: None,
            seed: 0,
        }
    }
    pub fn games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }
    pub fn players(mut self, players: Option<usize>) -> Self {
        self.players = players;
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Plays every game and tallies the hero's wins.
    pub fn run(&self) -> anyhow::Result<Record> {
        self.settings.mcts.validate()?;
        self.settings.plan.validate()?;
        log::info!(
            "playing {} games of {} against fish on {} territories",
            self.games,
            self.hero,
            self.map.n()
        );
        let record = self.results()?.into_iter().collect::<Record>();
        log::info!("{} scores {}", self.hero, record);
        Ok(record)
    }
    /// Plays game number `index`, returning whether the hero won.
    pub fn play(&self, index: usize) -> anyhow::Result<bool> {
        let ref mut rng = SmallRng::seed_from_u64(self.seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
        let n = self
            .players
            .unwrap_or_else(|| rng.random_range(MIN_PLAYERS..=MAX_PLAYERS));
        let seat = rng.random_range(0..n);
        let game = Game::seeded(n, self.map.clone(), rng.random())?;
        let ref mut hero = self.hero.build(&self.settings, rng.random())?;
        let ref mut fish = Fish::seeded(rng.random());
        let game = Self::duel(game, seat, hero.as_mut(), fish)?;
        let won = game.winner() == Some(seat);
        log::debug!(
            "game {:>4} {} players, hero at P{} {} in round {}",
            index,
            n,
            seat,
            if won { "won" } else { "lost" },
            game.round()
        );
        Ok(won)
    }
    /// Plays `game` to completion, the hero acting for `seat` and the
    /// opponent for everyone else.
    pub fn duel(
        mut game: Game,
        seat: Position,
        hero: &mut dyn Agent,
        opponent: &mut dyn Agent,
    ) -> anyhow::Result<Game> {
        hero.reset();
        opponent.reset();
        let mut actions = 0;
        while !game.is_terminal() {
            anyhow::ensure!(
                actions < MAX_GAME_ACTIONS,
                "game still running after {} actions",
                MAX_GAME_ACTIONS
            );
            let action = if game.actor() == seat {
                hero.decide(&game)?
            } else {
                opponent.decide(&game)?
            };
            game.apply(action)?;
            actions += 1;
        }
        Ok(game)
    }

    #[cfg(feature = "server")]
    fn results(&self) -> anyhow::Result<Vec<bool>> {
        use rayon::prelude::*;
        (0..self.games)
            .into_par_iter()
            .map(|i| self.play(i))
            .collect()
    }
    #[cfg(not(feature = "server"))]
    fn results(&self) -> anyhow::Result<Vec<bool>> {
        (0..self.games).map(|i| self.play(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_beats_fish_usually() {
        let record = Arena::new(Map::classic(), Lineup::Heuristic, Settings::default())
            .games(24)
            .players(Some(3))
            .seed(1)
            .run()
            .unwrap();
        assert!(record.games() == 24);
        assert!(record.wins() > 8);
    }

    #[test]
    fn runs_are_reproducible() {
        let arena = Arena::new(Map::classic(), Lineup::Heuristic, Settings::default())
            .games(6)
            .seed(7);
        let a = (0..6).map(|i| arena.play(i).unwrap()).collect::<Vec<_>>();
        let b = (0..6).map(|i| arena.play(i).unwrap()).collect::<Vec<_>>();
        assert!(a == b);
    }

    #[test]
    fn rejects_bad_player_count() {
        let arena = Arena::new(Map::classic(), Lineup::Fish, Settings::default())
            .games(1)
            .players(Some(2));
        assert!(arena.run().is_err());
    }

    #[test]
    fn duel_ends_with_a_winner() {
        let game = Game::seeded(4, Map::classic(), 3).unwrap();
        let ref mut hero = crate::players::Heuristic::seeded(3);
        let ref mut fish = Fish::seeded(3);
        let game = Arena::duel(game, 2, hero, fish).unwrap();
        assert!(game.is_terminal());
        assert!(game.winner().is_some_and(|w| w < 4));
    }
}
