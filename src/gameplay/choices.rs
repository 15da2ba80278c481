use super::action::Action;
use super::game::Game;
use super::phase::Phase;
use crate::map::Territory;

/// Action abstraction for search.
///
/// The full legal set is far too wide to search (every dice count, every
/// fortify size), so agents branch over a canonical subset instead. Every
/// choice is legal, and the subset is non-empty whenever the game is not
/// over.
impl Game {
    pub fn choices(&self) -> Vec<Action> {
        match self.phase() {
            Phase::GameEnd => Vec::new(),
            Phase::Setup | Phase::Trading => self.legal(),
            Phase::SetupDeployment | Phase::Reinforcement => self.placements(),
            Phase::Attack => self.assaults(),
            Phase::Occupation => self.occupations(),
            Phase::Fortify => self.fortifications(),
        }
    }
    /// Applies a choice the way search plays it: an attack repeats until it
    /// stops being legal, by conquest or by running short of armies.
    /// Returns how many times `action` was applied.
    pub fn resolve(&mut self, action: Action) -> anyhow::Result<usize> {
        self.apply(action)?;
        let mut rounds = 1;
        while action.is_attack() && self.is_legal(&action) {
            self.apply(action)?;
            rounds += 1;
        }
        Ok(rounds)
    }
    /// Place only on borders, unless nothing borders an enemy.
    fn placements(&self) -> Vec<Action> {
        let me = self.actor();
        let borders = self
            .territories_of(me)
            .filter(|t| self.is_border(*t))
            .map(Action::Deploy)
            .collect::<Vec<Action>>();
        if borders.is_empty() {
            self.legal()
        } else {
            borders
        }
    }
    /// One attack per (source, target) pair with the most dice available.
    fn assaults(&self) -> Vec<Action> {
        let me = self.actor();
        let mut options = Vec::new();
        for source in self.territories_of(me).filter(|t| self.armies(*t) > 1) {
            let dice = self.armies(source).saturating_sub(1).min(crate::MAX_ATTACK_DICE);
            for target in self.hostile_neighbors(source) {
                options.push(Action::Attack(source, target, dice));
            }
        }
        options.push(Action::Pass);
        options
    }
    /// Move the minimum or everything.
    fn occupations(&self) -> Vec<Action> {
        match self.conquest() {
            None => Vec::new(),
            Some(c) => {
                let least = c.dice;
                let most = self.armies(c.source).saturating_sub(1);
                if least == most {
                    vec![Action::Occupy(least)]
                } else {
                    vec![Action::Occupy(least), Action::Occupy(most)]
                }
            }
        }
    }
    /// Move everything from interior territories to reachable borders.
    fn fortifications(&self) -> Vec<Action> {
        let me = self.actor();
        let mut options = Vec::new();
        for source in self
            .territories_of(me)
            .filter(|t| self.armies(*t) > 1)
            .filter(|t| !self.is_border(*t))
        {
            let n = self.armies(source) - 1;
            for target in self
                .reach(source)
                .into_iter()
                .filter(|t: &Territory| self.is_border(*t))
            {
                options.push(Action::Fortify(source, target, n));
            }
        }
        options.push(Action::Pass);
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::seq::IndexedRandom;
    use rand::SeedableRng;

    #[test]
    fn choices_are_legal_and_nonempty() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let mut game = Game::arranged(4, 7).unwrap();
        for _ in 0..5_000 {
            if game.is_terminal() {
                break;
            }
            let choices = game.choices();
            assert!(!choices.is_empty(), "no choices during {}", game.phase());
            assert!(choices.iter().all(|a| game.is_legal(a)));
            let action = *choices.choose(rng).unwrap();
            game.apply(action).unwrap();
        }
    }

    #[test]
    fn attacks_use_most_dice() {
        let mut game = Game::arranged(3, 11).unwrap();
        while game.phase() != Phase::Attack {
            let action = game.choices()[0];
            game.apply(action).unwrap();
        }
        for action in game.choices() {
            if let Action::Attack(source, _, dice) = action {
                assert!(dice == (game.armies(source) - 1).min(3));
            }
        }
    }

    #[test]
    fn resolved_attacks_run_to_the_end() {
        let mut game = Game::arranged(3, 9).unwrap();
        while game.phase() != Phase::Attack {
            let action = game.choices()[0];
            game.apply(action).unwrap();
        }
        let me = game.actor();
        let (source, target) = game
            .territories_of(me)
            .find_map(|s| game.hostile_neighbors(s).next().map(|t| (s, t)))
            .unwrap();
        game.set_armies(source, 6);
        game.set_armies(target, 6);
        let attack = Action::Attack(source, target, 3);
        let rounds = game.resolve(attack).unwrap();
        assert!(rounds >= 1);
        assert!(!game.is_legal(&attack));
        assert!(game.owns(me, target) || game.armies(source) < 4);
        assert!(game.is_balanced());
    }

    #[test]
    fn resolving_other_choices_applies_once() {
        let mut game = Game::arranged(3, 4).unwrap();
        let action = game.choices()[0];
        let before = game.deployable();
        assert!(game.resolve(action).unwrap() == 1);
        assert!(game.deployable() + 1 == before || game.phase() != Phase::Reinforcement);
    }

    #[test]
    fn occupation_offers_extremes() {
        let mut game = Game::arranged(3, 5).unwrap();
        while game.phase() != Phase::Attack {
            let action = game.choices()[0];
            game.apply(action).unwrap();
        }
        let me = game.actor();
        let (source, target) = game
            .territories_of(me)
            .find_map(|s| game.hostile_neighbors(s).next().map(|t| (s, t)))
            .unwrap();
        game.set_armies(source, 30);
        game.set_armies(target, 1);
        while !game.owns(me, target) {
            game.apply(Action::Attack(source, target, 3)).unwrap();
        }
        let most = game.armies(source) - 1;
        assert!(game.choices() == vec![Action::Occupy(3), Action::Occupy(most)]);
    }
}
