use super::agent::Agent;
use super::config::PlanConfig;
use super::heuristic::Heuristic;
use super::objective::ArmyShare;
use super::objective::Objective;
use crate::gameplay::Action;
use crate::gameplay::Game;
use crate::gameplay::Phase;
use crate::Position;
use crate::Utility;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::Rng;
use rand::SeedableRng;
use std::collections::VecDeque;

/// Monte Carlo planning over whole turns.
///
/// When it has no usable plan, the planner samples many action sequences
/// that run until the turn passes (random placements, heuristic choices
/// elsewhere, attacks fought to the end), scores each by averaging
/// heuristic rollouts under its [`Objective`], and commits to the best.
/// It then plays the plan out one action per decision, replanning once the
/// plan runs dry, reaches a pass, or stops being legal.
pub struct Planner<O = ArmyShare> {
    config: PlanConfig,
    objective: O,
    plan: VecDeque<Action>,
    rng: SmallRng,
}

impl Planner<ArmyShare> {
    pub fn new(config: PlanConfig) -> anyhow::Result<Self> {
        Self::with(config, ArmyShare, SmallRng::from_os_rng())
    }
    pub fn seeded(config: PlanConfig, seed: u64) -> anyhow::Result<Self> {
        Self::with(config, ArmyShare, SmallRng::seed_from_u64(seed))
    }
}

impl<O> Planner<O>
where
    O: Objective + Sync,
{
    pub fn with(config: PlanConfig, objective: O, rng: SmallRng) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            objective,
            plan: VecDeque::new(),
            rng,
        })
    }
    pub fn config(&self) -> &PlanConfig {
        &self.config
    }
    pub fn objective(&self) -> &O {
        &self.objective
    }
    pub fn objective_mut(&mut self) -> &mut O {
        &mut self.objective
    }
    /// Actions still queued from the current plan.
    pub fn plan(&self) -> &VecDeque<Action> {
        &self.plan
    }
    /// Pops the next planned action.
    pub fn advance(&mut self) -> anyhow::Result<Action> {
        self.plan
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("replanning produced an empty plan"))
    }
    pub fn should_replan(&self, game: &Game) -> bool {
        match self.plan.front() {
            None => true,
            Some(action) => action.is_pass() || !game.is_legal(action),
        }
    }
    /// Samples the configured number of plans and keeps the best scoring.
    /// Ties keep the earliest sample.
    pub fn replan(&mut self, game: &Game) -> anyhow::Result<()> {
        let seeds = (0..self.config.plans)
            .map(|_| self.rng.random::<u64>())
            .collect::<Vec<u64>>();
        let samples = self.samples(game, &seeds)?;
        let mut best = None::<(Utility, VecDeque<Action>)>;
        for (score, plan) in samples {
            if best.as_ref().is_none_or(|(top, _)| score > *top) {
                best = Some((score, plan));
            }
        }
        let (score, plan) = best.ok_or_else(|| anyhow::anyhow!("no plans sampled"))?;
        log::trace!("P{} planned {} actions scoring {:.3}", game.actor(), plan.len(), score);
        self.plan = plan;
        Ok(())
    }
    /// One random plan for the mover and its summed rollout score.
    pub fn sample(&self, game: &Game, seed: u64) -> anyhow::Result<(Utility, VecDeque<Action>)> {
        let hero = game.actor();
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let mut sketch = game.determinize(rng);
        let mut plan = VecDeque::new();
        let mut step = 0;
        while !sketch.is_terminal() && sketch.actor() == hero && step < self.config.steps {
            let action = Self::draft(&sketch, rng)?;
            let rounds = sketch.resolve(action)?;
            plan.extend(std::iter::repeat_n(action, rounds));
            step += 1;
        }
        let mut score = 0.;
        for _ in 0..self.config.rollouts {
            let outcome = self.rollout(sketch.determinize(rng), step, rng)?;
            score += self.objective.value(&outcome, hero);
        }
        Ok((score, plan))
    }
    /// Next planned action: a random placement candidate, otherwise the
    /// heuristic's pick.
    fn draft<R: Rng>(game: &Game, rng: &mut R) -> anyhow::Result<Action> {
        let candidates = Self::candidates(game);
        if game.phase().is_placement() {
            candidates
                .choose(rng)
                .copied()
                .ok_or_else(|| anyhow::anyhow!("no placements during {}", game.phase()))
        } else {
            Heuristic::pick_from(game, candidates, rng)
        }
    }
    /// Search choices, except that claims narrow to the one with the best
    /// continent prospect, and placements prefer territories already
    /// holding more than two armies.
    pub fn candidates(game: &Game) -> Vec<Action> {
        let choices = game.choices();
        match game.phase() {
            Phase::Setup => Self::greediest(game, choices),
            phase if phase.is_placement() => {
                let stacked = choices
                    .iter()
                    .copied()
                    .filter(|a| a.target().is_some_and(|t| game.armies(t) > 2))
                    .collect::<Vec<Action>>();
                if stacked.is_empty() { choices } else { stacked }
            }
            _ => choices,
        }
    }
    /// The claim leaving the mover with the best [`Self::prospect`]. Ties
    /// keep the earliest.
    fn greediest(game: &Game, choices: Vec<Action>) -> Vec<Action> {
        let me = game.actor();
        let mut best = None::<(Utility, Action)>;
        for action in choices.iter().copied() {
            let Ok(claimed) = game.child(action) else {
                continue;
            };
            let score = Self::prospect(&claimed, me);
            if best.is_none_or(|(top, _)| score > top) {
                best = Some((score, action));
            }
        }
        match best {
            Some((_, action)) => vec![action],
            None => choices,
        }
    }
    /// Continent bonuses weighted by the squared fraction of each continent
    /// `player` holds, so partial holdings pull claims together.
    pub fn prospect(game: &Game, player: Position) -> Utility {
        game.map()
            .continents()
            .iter()
            .map(|c| {
                let held = c.territories().iter().filter(|t| game.owns(player, **t)).count();
                let share = held as Utility / c.territories().len().max(1) as Utility;
                c.bonus() as Utility * share * share
            })
            .sum()
    }
    /// Plays the heuristic from `step` up to the shared step cap.
    fn rollout<R: Rng>(&self, mut game: Game, mut step: usize, rng: &mut R) -> anyhow::Result<Game> {
        while !game.is_terminal() && step < self.config.steps {
            let action = Heuristic::pick_from(&game, Self::candidates(&game), rng)?;
            game.resolve(action)?;
            step += 1;
        }
        Ok(game)
    }

    #[cfg(feature = "server")]
    fn samples(&self, game: &Game, seeds: &[u64]) -> anyhow::Result<Vec<(Utility, VecDeque<Action>)>> {
        use rayon::prelude::*;
        seeds.par_iter().map(|seed| self.sample(game, *seed)).collect()
    }
    #[cfg(not(feature = "server"))]
    fn samples(&self, game: &Game, seeds: &[u64]) -> anyhow::Result<Vec<(Utility, VecDeque<Action>)>> {
        seeds.iter().map(|seed| self.sample(game, *seed)).collect()
    }
}

impl<O> Agent for Planner<O>
where
    O: Objective + Sync,
{
    fn decide(&mut self, game: &Game) -> anyhow::Result<Action> {
        anyhow::ensure!(game.phase() != Phase::GameEnd, "planner asked to move after the game ended");
        if self.should_replan(game) {
            self.replan(game)?;
        }
        self.advance()
    }
    fn reset(&mut self) {
        self.plan.clear();
    }
    fn name(&self) -> &'static str {
        "planner"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Map;
    use crate::map::Territory;

    fn small() -> PlanConfig {
        PlanConfig {
            plans: 6,
            rollouts: 2,
            steps: 60,
        }
    }

    #[test]
    fn plans_cover_one_turn() {
        let game = Game::arranged(3, 0).unwrap();
        let planner = Planner::seeded(small(), 0).unwrap();
        let (score, plan) = planner.sample(&game, 7).unwrap();
        assert!(!plan.is_empty());
        assert!(game.is_legal(&plan[0]));
        assert!(score.abs() <= 2. * crate::PLAN_DECIDED);
        let deploys = plan.iter().filter(|a| matches!(a, Action::Deploy(_))).count();
        assert!(deploys as crate::Armies == game.deployable());
    }

    #[test]
    fn replans_when_empty_or_passing() {
        let game = Game::arranged(3, 1).unwrap();
        let mut planner = Planner::seeded(small(), 1).unwrap();
        assert!(planner.should_replan(&game));
        planner.replan(&game).unwrap();
        assert!(!planner.plan().is_empty());
        planner.plan.clear();
        planner.plan.push_back(Action::Pass);
        assert!(planner.should_replan(&game));
        planner.plan.clear();
        planner.plan.push_back(Action::Occupy(3));
        assert!(planner.should_replan(&game));
    }

    #[test]
    fn decides_legal_actions() {
        let mut game = Game::arranged(3, 2).unwrap();
        let mut planner = Planner::seeded(small(), 2).unwrap();
        for _ in 0..40 {
            if game.is_terminal() {
                break;
            }
            let action = planner.decide(&game).unwrap();
            assert!(game.is_legal(&action));
            game.apply(action).unwrap();
        }
    }

    #[test]
    fn placements_prefer_stacks() {
        let mut game = Game::arranged(3, 3).unwrap();
        let me = game.actor();
        let border = game.territories_of(me).find(|t| game.is_border(*t)).unwrap();
        let ref mine = game.territories_of(me).collect::<Vec<_>>();
        for &t in mine {
            game.set_armies(t, 1);
        }
        game.set_armies(border, 5);
        assert!(Planner::<ArmyShare>::candidates(&game) == vec![Action::Deploy(border)]);
    }

    fn continent(game: &Game, name: &str) -> Vec<Territory> {
        game.map()
            .continents()
            .iter()
            .find(|c| c.name() == name)
            .unwrap()
            .territories()
            .to_vec()
    }

    fn claimed(game: &Game) -> Territory {
        match Planner::<ArmyShare>::candidates(game).as_slice() {
            [Action::Claim(t)] => *t,
            other => panic!("expected one claim, got {:?}", other),
        }
    }

    #[test]
    fn claims_chase_continents() {
        let mut game = Game::seeded(3, Map::classic(), 4).unwrap();
        let ref cheapest = [continent(&game, "south_america"), continent(&game, "australia")].concat();
        assert!(cheapest.contains(&claimed(&game)));
        let me = game.actor();
        let ref australia = continent(&game, "australia");
        let ref north = continent(&game, "north_america");
        for round in 0..2 {
            game.apply(Action::Claim(australia[round])).unwrap();
            game.apply(Action::Claim(north[2 * round])).unwrap();
            game.apply(Action::Claim(north[2 * round + 1])).unwrap();
        }
        assert!(game.actor() == me);
        assert!(australia[2..].contains(&claimed(&game)));
    }

    #[test]
    fn plans_repeat_attacks_until_resolved() {
        let mut game = Game::arranged(3, 5).unwrap();
        while game.phase() != Phase::Attack {
            let action = game.choices()[0];
            game.apply(action).unwrap();
        }
        let ref territories = game.map().territories().collect::<Vec<Territory>>();
        for &t in territories {
            game.set_armies(t, 30);
        }
        let config = PlanConfig {
            plans: 1,
            rollouts: 1,
            steps: 1,
        };
        let planner = Planner::seeded(config, 5).unwrap();
        let (_, plan) = planner.sample(&game, 11).unwrap();
        assert!(plan.len() > 1);
        assert!(plan[0].is_attack());
        assert!(plan.iter().all(|a| *a == plan[0]));
    }

    #[test]
    fn rejects_bad_config() {
        let config = PlanConfig {
            plans: 0,
            ..PlanConfig::default()
        };
        assert!(Planner::new(config).is_err());
    }
}
