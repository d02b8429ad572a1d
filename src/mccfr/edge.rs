/// An action in the betting grammar.
///
/// `Pass` folds or checks, `Bet` bets or calls, `Raise` raises over a
/// pending bet. Which meaning applies is determined by the history, not
/// the token, exactly as in the reported infoset keys (`p`/`b`/`r`).
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Edge {
    #[default]
    Pass,
    Bet,
    Raise,
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Edge::Pass => write!(f, "p"),
            Edge::Bet => write!(f, "b"),
            Edge::Raise => write!(f, "r"),
        }
    }
}
