/// A card as a bare integer rank.
///
/// The deck carries no suits; only relative order matters at showdown.
/// Ranks run `2..=2+N-1` for a deck of `N` cards, so the default 13-rank
/// deck spans 2 through 14.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rank(u8);

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Self {
        Self(n)
    }
}
impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let rank = Rank::from(7);
        assert!(rank == Rank::from(u8::from(rank)));
    }

    #[test]
    fn ordered_by_value() {
        assert!(Rank::from(2) < Rank::from(14));
        assert!(Rank::from(9) > Rank::from(8));
    }
}
