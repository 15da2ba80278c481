use crate::Utility;
use crate::MCTS_EXPLORATION;
use crate::MCTS_PROJECTED_TURNS;
use crate::MCTS_ROLLOUT_STEPS;
use crate::MCTS_SIMULATIONS;
use crate::PLAN_ROLLOUTS;
use crate::PLAN_SAMPLES;
use crate::PLAN_STEPS;

/// Search budget for [`super::Mcts`]. Missing fields take the defaults.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MctsConfig {
    /// Simulations per candidate tree.
    pub simulations: usize,
    /// Rollout plies before scoring by projected armies.
    pub steps: usize,
    /// Turns of income added to board armies in that projection.
    pub horizon: usize,
    /// UCT exploration constant.
    pub exploration: Utility,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            simulations: MCTS_SIMULATIONS,
            steps: MCTS_ROLLOUT_STEPS,
            horizon: MCTS_PROJECTED_TURNS,
            exploration: MCTS_EXPLORATION,
        }
    }
}

impl MctsConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.simulations > 0, "mcts needs at least one simulation");
        anyhow::ensure!(
            self.exploration.is_finite() && self.exploration >= 0.,
            "exploration constant {} must be finite and non-negative",
            self.exploration
        );
        Ok(())
    }
}

/// Search budget for [`super::Planner`]. Missing fields take the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    /// Whole-turn plans sampled per replan.
    pub plans: usize,
    /// Rollouts averaged per plan.
    pub rollouts: usize,
    /// Ply cap for both plan construction and rollouts.
    pub steps: usize,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            plans: PLAN_SAMPLES,
            rollouts: PLAN_ROLLOUTS,
            steps: PLAN_STEPS,
        }
    }
}

impl PlanConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.plans > 0, "planner needs at least one plan");
        anyhow::ensure!(self.rollouts > 0, "planner needs at least one rollout");
        anyhow::ensure!(self.steps > 0, "planner needs a positive step cap");
        Ok(())
    }
}

/// Budgets for every search agent, as read from a JSON settings file.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mcts: MctsConfig,
    pub plan: PlanConfig,
}

impl Settings {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let settings = serde_json::from_str::<Self>(json)?;
        settings.mcts.validate()?;
        settings.plan.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let mcts = MctsConfig::default();
        assert!(mcts.simulations == 50);
        assert!(mcts.steps == 120);
        assert!(mcts.horizon == 3);
        assert!((mcts.exploration - 0.70710677).abs() < 1e-6);
        let plan = PlanConfig::default();
        assert!(plan.plans == 200);
        assert!(plan.rollouts == 3);
        assert!(plan.steps == 240);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "mcts": { "simulations": 8 } }"#).unwrap();
        assert!(settings.mcts.simulations == 8);
        assert!(settings.mcts.steps == MCTS_ROLLOUT_STEPS);
        assert!(settings.plan == PlanConfig::default());
    }

    #[test]
    fn rejects_empty_budgets() {
        assert!(Settings::from_json(r#"{ "mcts": { "simulations": 0 } }"#).is_err());
        assert!(Settings::from_json(r#"{ "plan": { "rollouts": 0 } }"#).is_err());
        assert!(Settings::from_json(r#"{ "mcts": { "exploration": -1.0 } }"#).is_err());
        assert!(Settings::from_json("not json").is_err());
    }
}
