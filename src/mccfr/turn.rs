/// The seat to act.
///
/// `P0` is out of position and acts first every round; `P1` is in position
/// and acts second. The seat to act is always `history length mod 2`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Turn {
    P0,
    P1,
}

impl Turn {
    pub const fn opponent(&self) -> Self {
        match self {
            Turn::P0 => Turn::P1,
            Turn::P1 => Turn::P0,
        }
    }
}

impl From<usize> for Turn {
    fn from(seat: usize) -> Self {
        match seat {
            0 => Turn::P0,
            1 => Turn::P1,
            _ => unreachable!("two-player game"),
        }
    }
}
impl From<Turn> for usize {
    fn from(turn: Turn) -> Self {
        match turn {
            Turn::P0 => 0,
            Turn::P1 => 1,
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
