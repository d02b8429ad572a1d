use super::edge::Edge;
use super::info::Info;
use super::memory::Memory;
use super::policy::Policy;
use super::policy::Regret;
use crate::POLICY_MIN;
use crate::Probability;
use crate::Utility;
use std::collections::BTreeMap;

/// The strategy profile accumulated over one training run: every
/// information set encountered so far, each mapping its legal edges to
/// cumulative regret and policy mass.
///
/// Created once per run and owned by the [`Solver`](super::solver::Solver);
/// nodes are created lazily on first visit and never removed. All updates
/// are additive.
#[derive(Debug, Default)]
pub struct Profile {
    encounters: BTreeMap<Info, BTreeMap<Edge, Memory>>,
}

impl Profile {
    /// Lazily creates the node for an information set. The legal-edge set
    /// is fixed at creation from the betting grammar: three edges when the
    /// player faces a bet, two otherwise.
    pub fn witness(&mut self, info: Info) {
        self.encounters.entry(info).or_insert_with(|| {
            info.choices()
                .into_iter()
                .map(|edge| (edge, Memory::default()))
                .collect()
        });
    }
    /// Current-iteration strategy via regret matching: each edge is
    /// weighted by its positive cumulative regret. When no edge holds
    /// positive regret, every weight collapses to `POLICY_MIN` and the
    /// distribution degenerates to uniform.
    pub fn policy_vector(&self, info: &Info) -> Policy {
        let memories = self.memories(info);
        let denom = memories
            .values()
            .map(|m| m.regret().max(POLICY_MIN))
            .sum::<Utility>();
        memories
            .iter()
            .map(|(e, m)| (*e, m.regret().max(POLICY_MIN)))
            .map(|(e, r)| (e, r / denom))
            .collect()
    }
    /// Time-averaged strategy: cumulative reach-weighted policy mass,
    /// normalized. This, not the instantaneous policy, is what converges
    /// toward equilibrium and what the final report prints.
    pub fn advice_vector(&self, info: &Info) -> Policy {
        let memories = self.memories(info);
        let denom = memories
            .values()
            .map(|m| m.policy().max(POLICY_MIN))
            .sum::<Probability>();
        memories
            .iter()
            .map(|(e, m)| (*e, m.policy().max(POLICY_MIN)))
            .map(|(e, p)| (e, p / denom))
            .collect()
    }
    /// Accumulates the strategy actually played this visit, weighted by
    /// the acting player's own reach probability.
    pub fn add_policy(&mut self, info: &Info, policy: &Policy, reach: Probability) {
        let memories = self.memories_mut(info);
        for (edge, weight) in policy.inner() {
            memories
                .get_mut(edge)
                .expect("policy support within legal edges")
                .add_policy(weight * reach);
        }
    }
    /// Accumulates counterfactual regrets. The only mutation path for
    /// regret state.
    pub fn add_regret(&mut self, info: &Info, regret: &Regret) {
        let memories = self.memories_mut(info);
        for (edge, value) in regret.inner() {
            memories
                .get_mut(edge)
                .expect("regret support within legal edges")
                .add_regret(*value);
        }
    }
    /// All information sets encountered so far, in key order.
    pub fn infosets(&self) -> impl Iterator<Item = &Info> {
        self.encounters.keys()
    }
    /// Number of information sets encountered so far.
    pub fn size(&self) -> usize {
        self.encounters.len()
    }

    fn memories(&self, info: &Info) -> &BTreeMap<Edge, Memory> {
        self.encounters.get(info).expect("witnessed infoset")
    }
    fn memories_mut(&mut self, info: &Info) -> &mut BTreeMap<Edge, Memory> {
        self.encounters.get_mut(info).expect("witnessed infoset")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use crate::mccfr::path::Path;

    fn info(line: Vec<Edge>) -> Info {
        Info::from((Rank::from(7), Path::from(line)))
    }

    fn valid(policy: &Policy, arity: usize) {
        assert!(policy.inner().len() == arity);
        assert!(policy.inner().values().all(|p| *p >= 0.));
        let total = policy.inner().values().sum::<Probability>();
        assert!((total - 1.).abs() < 1e-9);
    }

    #[test]
    fn node_arity_follows_grammar() {
        let mut profile = Profile::default();
        for (line, arity) in [
            (vec![], 2),
            (vec![Edge::Pass], 2),
            (vec![Edge::Bet], 3),
            (vec![Edge::Pass, Edge::Bet], 3),
            (vec![Edge::Bet, Edge::Raise], 2),
            (vec![Edge::Pass, Edge::Bet, Edge::Raise], 2),
        ] {
            let info = info(line);
            profile.witness(info);
            assert!(profile.memories(&info).len() == arity);
        }
    }

    #[test]
    fn untrained_policy_is_uniform() {
        let mut profile = Profile::default();
        let ref root = info(vec![]);
        let ref bet = info(vec![Edge::Bet]);
        profile.witness(*root);
        profile.witness(*bet);
        for (info, arity) in [(root, 2), (bet, 3)] {
            let policy = profile.policy_vector(info);
            valid(&policy, arity);
            let uniform = 1. / arity as Probability;
            assert!(policy.inner().values().all(|p| (p - uniform).abs() < 1e-9));
        }
    }

    #[test]
    fn policy_matches_positive_regret() {
        let mut profile = Profile::default();
        let ref info = info(vec![Edge::Bet]);
        profile.witness(*info);
        let regret = [(Edge::Pass, 3.0), (Edge::Bet, -2.0), (Edge::Raise, 1.0)]
            .into_iter()
            .collect::<Regret>();
        profile.add_regret(info, &regret);
        let policy = profile.policy_vector(info);
        valid(&policy, 3);
        assert!((policy.density(&Edge::Pass) - 0.75).abs() < 1e-9);
        assert!(policy.density(&Edge::Bet) < 1e-9);
        assert!((policy.density(&Edge::Raise) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn lookup_is_idempotent() {
        let mut profile = Profile::default();
        let ref info = info(vec![Edge::Pass, Edge::Bet]);
        profile.witness(*info);
        profile.add_regret(
            info,
            &[(Edge::Pass, 1.0), (Edge::Bet, 2.0), (Edge::Raise, 0.5)]
                .into_iter()
                .collect(),
        );
        assert!(profile.policy_vector(info) == profile.policy_vector(info));
    }

    #[test]
    fn advice_averages_accumulated_mass() {
        let mut profile = Profile::default();
        let ref info = info(vec![]);
        profile.witness(*info);
        let played = [(Edge::Pass, 1.0), (Edge::Bet, 0.0)]
            .into_iter()
            .collect::<Policy>();
        profile.add_policy(info, &played, 0.5);
        let played = [(Edge::Pass, 0.0), (Edge::Bet, 1.0)]
            .into_iter()
            .collect::<Policy>();
        profile.add_policy(info, &played, 1.5);
        let advice = profile.advice_vector(info);
        valid(&advice, 2);
        assert!((advice.density(&Edge::Pass) - 0.25).abs() < 1e-9);
        assert!((advice.density(&Edge::Bet) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn untrained_advice_is_uniform() {
        let mut profile = Profile::default();
        let ref info = info(vec![Edge::Bet]);
        profile.witness(*info);
        let advice = profile.advice_vector(info);
        valid(&advice, 3);
        let uniform = 1. / 3.;
        assert!(advice.inner().values().all(|p| (p - uniform).abs() < 1e-9));
    }
}
