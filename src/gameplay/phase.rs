/// Stage of the turn-based state machine.
///
/// `Setup` and `SetupDeployment` happen once; play then cycles through
/// `Trading` (when the mover holds a set), `Reinforcement`, `Attack` with
/// `Occupation` after each conquest, and `Fortify`, until `GameEnd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Setup,
    SetupDeployment,
    Reinforcement,
    Attack,
    Occupation,
    Fortify,
    Trading,
    GameEnd,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::GameEnd)
    }
    /// Phases whose actions place a single army on an owned territory.
    pub fn is_placement(&self) -> bool {
        matches!(self, Phase::SetupDeployment | Phase::Reinforcement)
    }
    pub fn is_setup(&self) -> bool {
        matches!(self, Phase::Setup | Phase::SetupDeployment)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Phase::Setup => write!(f, "setup"),
            Phase::SetupDeployment => write!(f, "setup_deployment"),
            Phase::Reinforcement => write!(f, "reinforcement"),
            Phase::Attack => write!(f, "attack"),
            Phase::Occupation => write!(f, "occupation"),
            Phase::Fortify => write!(f, "fortify"),
            Phase::Trading => write!(f, "trading"),
            Phase::GameEnd => write!(f, "game_end"),
        }
    }
}
