use super::objective::ArmyShare;
use super::objective::Objective;
use crate::gameplay::Game;
use crate::Position;
use crate::Utility;

/// Strategic aims a [`super::Strategist`] can plan toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Goal {
    AcquireContinent,
    MaximizeArmyRatio,
    MaintainContinent,
    AcquireTerritory,
    MaintainTerritory,
}

impl Goal {
    pub const ALL: [Goal; 5] = [
        Goal::AcquireContinent,
        Goal::MaximizeArmyRatio,
        Goal::MaintainContinent,
        Goal::AcquireTerritory,
        Goal::MaintainTerritory,
    ];
    /// Fraction of the best continent `hero` controls, by territory count.
    fn foothold(game: &Game, hero: Position) -> Utility {
        game.map()
            .continents()
            .iter()
            .map(|c| {
                let held = c.territories().iter().filter(|t| game.owns(hero, **t)).count();
                held as Utility / c.territories().len().max(1) as Utility
            })
            .fold(0., Utility::max)
    }
}

/// Only continent acquisition adds its own term; the other goals score by
/// army share alone.
impl Objective for Goal {
    fn value(&self, game: &Game, hero: Position) -> Utility {
        let share = ArmyShare.value(game, hero);
        match self {
            _ if game.is_terminal() => share,
            Goal::AcquireContinent => share + Self::foothold(game, hero),
            _ => share,
        }
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Goal::AcquireContinent => write!(f, "acquire_continent"),
            Goal::MaximizeArmyRatio => write!(f, "maximize_army_ratio"),
            Goal::MaintainContinent => write!(f, "maintain_continent"),
            Goal::AcquireTerritory => write!(f, "acquire_territory"),
            Goal::MaintainTerritory => write!(f, "maintain_territory"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continent_goal_rewards_footholds() {
        let mut game = Game::arranged(3, 0).unwrap();
        let australia = game
            .map()
            .continents()
            .iter()
            .find(|c| c.name() == "australia")
            .unwrap()
            .territories()
            .to_vec();
        for &t in australia.iter() {
            game.set_owner(t, 0);
        }
        let share = ArmyShare.value(&game, 0);
        assert!((Goal::AcquireContinent.value(&game, 0) - share - 1.).abs() < 1e-4);
        assert!(Goal::MaximizeArmyRatio.value(&game, 0) == share);
    }
}
