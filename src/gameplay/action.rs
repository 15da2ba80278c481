use crate::Armies;
use crate::cards::Set;
use crate::map::Territory;

/// A player decision, shaped by the phase it belongs to.
///
/// - `Claim` — take an unclaimed territory during setup
/// - `Deploy` — place one army during setup deployment or reinforcement
/// - `Attack` — roll `dice` from source against an adjacent enemy target
/// - `Occupy` — move armies into a freshly conquered territory
/// - `Fortify` — move armies between connected owned territories
/// - `Pass` — end the attack or fortify phase
/// - `Trade` — turn in a set of cards for armies
/// - `Keep` — decline an optional trade
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum Action {
    Claim(Territory),
    Deploy(Territory),
    Attack(Territory, Territory, Armies),
    Occupy(Armies),
    Fortify(Territory, Territory, Armies),
    Pass,
    Trade(Set),
    Keep,
}

impl Action {
    /// True for the attack/fortify pass sentinel.
    pub fn is_pass(&self) -> bool {
        matches!(self, Action::Pass)
    }
    pub fn is_attack(&self) -> bool {
        matches!(self, Action::Attack(..))
    }
    /// Territory the action lands on, if it names one.
    pub fn target(&self) -> Option<Territory> {
        match *self {
            Action::Claim(t) | Action::Deploy(t) => Some(t),
            Action::Attack(_, dst, _) | Action::Fortify(_, dst, _) => Some(dst),
            _ => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Claim(t) => write!(f, "CLAIM   {}", t),
            Action::Deploy(t) => write!(f, "DEPLOY  {}", t),
            Action::Attack(s, d, n) => write!(f, "ATTACK  {} -> {} x{}", s, d, n),
            Action::Occupy(n) => write!(f, "OCCUPY  {}", n),
            Action::Fortify(s, d, n) => write!(f, "FORTIFY {} -> {} x{}", s, d, n),
            Action::Pass => write!(f, "PASS"),
            Action::Trade(set) => write!(f, "TRADE   {}", set),
            Action::Keep => write!(f, "KEEP"),
        }
    }
}
