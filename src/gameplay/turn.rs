use crate::Position;

/// Whose turn it is to act.
///
/// Dice and card draws resolve inside the engine, so there are no chance
/// nodes: a state is either a player's decision or terminal.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Turn {
    Terminal,
    Choice(Position),
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Choice(c) => write!(f, "P{}", c),
            Self::Terminal => write!(f, "-"),
        }
    }
}
