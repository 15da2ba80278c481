use super::agent::Agent;
use crate::gameplay::Action;
use crate::gameplay::Game;
use crate::Utility;
use crate::HEURISTIC_HOSTILITY;
use crate::HEURISTIC_JITTER;
use crate::HEURISTIC_RESISTANCE;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

/// Greedy one-ply policy over the search choices.
///
/// Passing is dropped whenever anything else is available, so it attacks
/// and fortifies whenever it can. Remaining choices are scored and the best
/// is played, with a small uniform jitter to break ties.
///
/// - placements favor stacked territories with few hostile neighbors
/// - attacks favor strong sources against weak targets
/// - occupations and fortifications favor moving more armies
///
/// Also serves as the rollout policy of every search agent.
pub struct Heuristic {
    rng: SmallRng,
}

impl Heuristic {
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
    /// Deterministic part of an action's score.
    pub fn score(game: &Game, action: &Action) -> Utility {
        match *action {
            Action::Deploy(t) => {
                game.armies(t) as Utility
                    - HEURISTIC_HOSTILITY * game.hostile_neighbors(t).count() as Utility
            }
            Action::Attack(source, target, _) => {
                game.armies(source) as Utility - HEURISTIC_RESISTANCE * game.armies(target) as Utility
            }
            Action::Occupy(n) | Action::Fortify(_, _, n) => n as Utility,
            _ => 0.,
        }
    }
    /// Drops `Pass` unless it is the only choice.
    pub fn eliminate_pass(choices: Vec<Action>) -> Vec<Action> {
        if choices.iter().all(Action::is_pass) {
            choices
        } else {
            choices.into_iter().filter(|a| !a.is_pass()).collect()
        }
    }
    /// Best choice in `game`, drawing tie-break jitter from `rng`.
    pub fn pick<R: Rng>(game: &Game, rng: &mut R) -> anyhow::Result<Action> {
        Self::pick_from(game, game.choices(), rng)
    }
    /// Best of an already-narrowed candidate list.
    pub fn pick_from<R: Rng>(game: &Game, candidates: Vec<Action>, rng: &mut R) -> anyhow::Result<Action> {
        Self::eliminate_pass(candidates)
            .into_iter()
            .map(|a| (a, Self::score(game, &a) + HEURISTIC_JITTER * rng.random::<Utility>()))
            .max_by(|(_, x), (_, y)| x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(a, _)| a)
            .ok_or_else(|| anyhow::anyhow!("heuristic asked to move during {}", game.phase()))
    }
}

impl Default for Heuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for Heuristic {
    fn decide(&mut self, game: &Game) -> anyhow::Result<Action> {
        Self::pick(game, &mut self.rng)
    }
    fn name(&self) -> &'static str {
        "heuristic"
    }
}
