use crate::gameplay::Action;
use crate::gameplay::Game;

/// Anything that can pick the next action for the player to move.
///
/// Agents only ever see a shared reference to the live game. Search agents
/// work on their own clones, so the caller's game never advances except
/// through the action the agent returns.
pub trait Agent {
    /// Returns a legal action for `game.actor()`. Fails only when asked to
    /// move in a finished game or when the agent's search breaks down.
    fn decide(&mut self, game: &Game) -> anyhow::Result<Action>;
    /// Clears any state carried between decisions, before a new game.
    fn reset(&mut self) {}
    fn name(&self) -> &'static str;
}
