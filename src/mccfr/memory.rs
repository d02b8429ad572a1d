use crate::Probability;
use crate::Utility;

/// Cumulative learning state for one (info, edge) pair.
///
/// Both fields only ever accumulate over a training run: regret via the
/// counterfactual update, policy mass via reach-weighted averaging of the
/// strategies actually played.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Memory {
    regret: Utility,
    policy: Probability,
}

impl Memory {
    pub fn regret(&self) -> Utility {
        self.regret
    }
    pub fn policy(&self) -> Probability {
        self.policy
    }
    pub fn add_regret(&mut self, value: Utility) {
        self.regret += value;
    }
    pub fn add_policy(&mut self, value: Probability) {
        self.policy += value;
    }
}

impl From<(Utility, Probability)> for Memory {
    fn from((regret, policy): (Utility, Probability)) -> Self {
        Self { regret, policy }
    }
}
