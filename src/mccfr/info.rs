use super::edge::Edge;
use super::path::Path;
use crate::cards::Rank;

/// What the seat to act knows: their private card plus the public betting
/// line. The opponent's card is hidden and deliberately absent.
///
/// Every deal that reaches the same (rank, line) pair shares one strategy
/// node under this key, which is what collapses the exponential game tree
/// into a polynomial number of decision points.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Info {
    rank: Rank,
    path: Path,
}

impl Info {
    /// Legal actions at this decision point.
    pub fn choices(&self) -> Vec<Edge> {
        self.path.choices()
    }
}

impl From<(Rank, Path)> for Info {
    fn from((rank, path): (Rank, Path)) -> Self {
        Self { rank, path }
    }
}

impl std::fmt::Display for Info {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.path)
    }
}
