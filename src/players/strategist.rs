use super::agent::Agent;
use super::config::PlanConfig;
use super::goal::Goal;
use super::planner::Planner;
use crate::gameplay::Action;
use crate::gameplay::Game;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Goal-directed planning.
///
/// Picks a [`Goal`] before every decision and plans toward it with a
/// [`Planner`] scored by that goal. Goal selection currently always pins
/// [`Goal::AcquireContinent`], and it always replans.
pub struct Strategist {
    planner: Planner<Goal>,
}

impl Strategist {
    pub fn new(config: PlanConfig) -> anyhow::Result<Self> {
        Ok(Self {
            planner: Planner::with(config, Goal::AcquireContinent, SmallRng::from_os_rng())?,
        })
    }
    pub fn seeded(config: PlanConfig, seed: u64) -> anyhow::Result<Self> {
        Ok(Self {
            planner: Planner::with(config, Goal::AcquireContinent, SmallRng::seed_from_u64(seed))?,
        })
    }
    pub fn goal(&self) -> Goal {
        *self.planner.objective()
    }
    pub fn should_change_goal(&self, _: &Game) -> bool {
        true
    }
    pub fn select_goal(&self, _: &Game) -> Goal {
        Goal::AcquireContinent
    }
}

impl Agent for Strategist {
    fn decide(&mut self, game: &Game) -> anyhow::Result<Action> {
        if self.should_change_goal(game) {
            *self.planner.objective_mut() = self.select_goal(game);
        }
        anyhow::ensure!(!game.is_terminal(), "strategist asked to move after the game ended");
        self.planner.replan(game)?;
        self.planner.advance()
    }
    fn reset(&mut self) {
        self.planner.reset();
    }
    fn name(&self) -> &'static str {
        "strategist"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pins_continent_goal_and_plays_legally() {
        let config = PlanConfig {
            plans: 4,
            rollouts: 1,
            steps: 40,
        };
        let mut game = Game::arranged(3, 5).unwrap();
        let mut agent = Strategist::seeded(config, 5).unwrap();
        for _ in 0..10 {
            if game.is_terminal() {
                break;
            }
            let action = agent.decide(&game).unwrap();
            assert!(agent.goal() == Goal::AcquireContinent);
            assert!(game.is_legal(&action));
            game.apply(action).unwrap();
        }
    }
}
