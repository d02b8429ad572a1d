use super::edge::Edge;

/// An ordered betting history with inline storage.
///
/// The grammar terminates every line within four tokens (a raise cannot be
/// re-raised), so histories fit in a fixed `[Edge; 4]` and never allocate
/// on the hot recursive path. `push` derives a new, longer path by value;
/// a parent's history is never mutated by its children.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Path {
    depth: u8,
    edges: [Edge; Self::CAPACITY],
}

impl Path {
    /// Longest reachable line: pass, bet, raise, pass/bet.
    pub const CAPACITY: usize = 4;

    pub fn len(&self) -> usize {
        self.depth as usize
    }
    pub fn is_empty(&self) -> bool {
        self.depth == 0
    }
    /// Derives the history extended by one action.
    pub fn push(mut self, edge: Edge) -> Self {
        debug_assert!(self.len() < Self::CAPACITY);
        self.edges[self.len()] = edge;
        self.depth += 1;
        self
    }
    pub fn last(&self) -> Option<Edge> {
        self.len().checked_sub(1).map(|i| self.edges[i])
    }
    pub fn edges(&self) -> &[Edge] {
        &self.edges[..self.len()]
    }
    /// Legal continuations at this point in the line.
    ///
    /// Facing a bet opens the raise as a third option; facing a raise does
    /// not, which is what caps each line at a single raise.
    pub fn choices(&self) -> Vec<Edge> {
        match self.last() {
            Some(Edge::Bet) => vec![Edge::Pass, Edge::Bet, Edge::Raise],
            _ => vec![Edge::Pass, Edge::Bet],
        }
    }
    /// Whether the betting line has ended: both players have acted and the
    /// last action either closed the round (a pass) or called a wager.
    pub fn over(&self) -> bool {
        match self.edges() {
            [_, .., Edge::Pass] => true,
            [.., Edge::Bet, Edge::Bet] => true,
            [.., Edge::Raise, Edge::Bet] => true,
            _ => false,
        }
    }
}

impl From<Vec<Edge>> for Path {
    fn from(edges: Vec<Edge>) -> Self {
        edges.into_iter().fold(Self::default(), Self::push)
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for edge in self.edges() {
            write!(f, "{}", edge)?;
        }
        Ok(())
    }
}
