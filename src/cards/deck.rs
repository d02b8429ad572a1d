use super::rank::Rank;
use rand::Rng;

/// A mutable deck of distinct ranks supporting in-place shuffles.
///
/// Holds every rank in `2..=2+N-1` exactly once. A training epoch shuffles
/// the whole deck and reads the top two positions as the players' private
/// cards, which is equivalent to drawing two cards without replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Rank>);

impl Deck {
    /// Creates a deck of `n` distinct ranks starting at 2.
    pub fn new(n: usize) -> Self {
        Self((0..n).map(|i| Rank::from(i as u8 + 2)).collect())
    }
    /// Uniformly permutes the deck in place via Fisher–Yates: walk `i`
    /// from the last index down to 1, draw `j` in `[0, i]`, swap.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        for i in (1..self.0.len()).rev() {
            let j = rng.random_range(0..=i);
            self.0.swap(i, j);
        }
    }
    /// The two private cards for the next hand, one per seat.
    pub fn deal(&self) -> [Rank; 2] {
        [self.0[0], self.0[1]]
    }
    /// Number of ranks in the deck.
    pub fn size(&self) -> usize {
        self.0.len()
    }
}
