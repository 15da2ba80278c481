use crate::gameplay::Game;
use crate::Position;
use crate::Utility;
use crate::PLAN_DECIDED;

/// Scores a game state for one player. Higher is better.
pub trait Objective {
    fn value(&self, game: &Game, hero: Position) -> Utility;
}

/// ±[`PLAN_DECIDED`] once the game is decided, otherwise the share of all
/// armies on the board that belong to `hero`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArmyShare;

impl Objective for ArmyShare {
    fn value(&self, game: &Game, hero: Position) -> Utility {
        match game.winner() {
            Some(w) if w == hero => PLAN_DECIDED,
            Some(_) => -PLAN_DECIDED,
            None => game.armies_of(hero) as Utility / game.on_board().max(1) as Utility,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shares_sum_to_one() {
        let game = Game::arranged(4, 0).unwrap();
        let total = (0..4).map(|p| ArmyShare.value(&game, p)).sum::<Utility>();
        assert!((total - 1.).abs() < 1e-4);
    }
}
