#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatcherState {
    #[default]
    Unevaluated,
    Evaluated { passed: bool },
    NegatedUnsupported,
}

impl std::fmt::Display for MatcherState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatcherState::Unevaluated => write!(f, "unevaluated"),
            MatcherState::Evaluated { passed: true } => write!(f, "passed"),
            MatcherState::Evaluated { passed: false } => write!(f, "failed"),
            MatcherState::NegatedUnsupported => write!(f, "negation unsupported"),
        }
    }
}
