use super::edge::Edge;
use crate::Probability;
use crate::Utility;
use std::collections::BTreeMap;

/// Probability vector over the simplex of edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Policy(BTreeMap<Edge, Probability>);

impl Policy {
    pub fn inner(&self) -> &BTreeMap<Edge, Probability> {
        &self.0
    }
    /// Weight assigned to an edge, zero if outside the support.
    pub fn density(&self, edge: &Edge) -> Probability {
        self.0.get(edge).copied().unwrap_or(0.)
    }
    /// Edges in the support, in canonical order.
    pub fn support(&self) -> impl Iterator<Item = &Edge> {
        self.0.keys()
    }
}

impl FromIterator<(Edge, Probability)> for Policy {
    fn from_iter<I: IntoIterator<Item = (Edge, Probability)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Counterfactual regret vector over edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Regret(BTreeMap<Edge, Utility>);

impl Regret {
    pub fn inner(&self) -> &BTreeMap<Edge, Utility> {
        &self.0
    }
}

impl FromIterator<(Edge, Utility)> for Regret {
    fn from_iter<I: IntoIterator<Item = (Edge, Utility)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
