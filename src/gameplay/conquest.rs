use crate::Armies;
use crate::map::Territory;

/// Context of the conquest awaiting an occupation decision.
///
/// `dice` is the number of dice rolled in the conquering round, which is
/// also the fewest armies that may move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conquest {
    pub source: Territory,
    pub target: Territory,
    pub dice: Armies,
}
