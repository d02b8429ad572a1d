use super::edge::Edge;
use super::game::Game;
use super::policy::Regret;
use super::profile::Profile;
use super::turn::Turn;
use crate::POLICY_CUTOFF;
use crate::Probability;
use crate::TRAINING_LOG_INTERVAL;
use crate::Utility;
use crate::cards::Deck;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::BTreeMap;

/// Self-play CFR trainer for the extended Kuhn game.
///
/// Each epoch shuffles the deck, deals one hand, and walks the full game
/// tree depth-first, updating regrets and policy mass at every decision
/// point visited. The accumulated utility over epochs estimates the game
/// value for the out-of-position player; the profile's average strategy
/// approaches equilibrium as epochs grow.
pub struct Solver {
    profile: Profile,
    deck: Deck,
    rng: SmallRng,
    epochs: usize,
    utility: Utility,
}

impl Solver {
    /// A trainer over `ranks` distinct cards, seeded from OS entropy.
    pub fn new(ranks: usize) -> Self {
        Self::from((Deck::new(ranks), SmallRng::from_os_rng()))
    }
    /// A trainer with a fixed seed, for reproducible runs.
    pub fn seeded(ranks: usize, seed: u64) -> Self {
        Self::from((Deck::new(ranks), SmallRng::seed_from_u64(seed)))
    }

    /// Runs `epochs` self-play hands and returns the trained solver.
    pub fn solve(mut self, epochs: usize) -> Self {
        for _ in 0..epochs {
            self.deck.shuffle(&mut self.rng);
            let root = Game::deal(self.deck.deal());
            self.utility += self.descend(root, 1., 1.);
            self.epochs += 1;
            if self.epochs % TRAINING_LOG_INTERVAL == 0 {
                log::info!(
                    "{:<24}{:<16}{:<24}",
                    format!("epoch {}", self.epochs),
                    format!("infos {}", self.profile.size()),
                    format!("value {:+.6}", self.game_value()),
                );
            }
        }
        self
    }

    /// Mean accumulated utility per hand for the out-of-position player.
    pub fn game_value(&self) -> Utility {
        self.utility / self.epochs.max(1) as Utility
    }
    /// Read-only view of the trained profile.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }
    /// Number of epochs trained so far.
    pub fn epochs(&self) -> usize {
        self.epochs
    }

    /// One depth-first CFR traversal. Returns the expected utility of the
    /// node from the perspective of the seat to act there.
    ///
    /// `p0` and `p1` are each seat's own contribution to the probability
    /// of reaching this node under the current profile. The acting seat's
    /// reach weights policy-mass accumulation; the opponent's weights the
    /// regret update (the counterfactual part of CFR).
    fn descend(&mut self, game: Game, p0: Probability, p1: Probability) -> Utility {
        if game.over() {
            return game.payoff(game.turn());
        }
        let info = game.info();
        self.profile.witness(info);
        let policy = self.profile.policy_vector(&info);
        let (reach, external) = match game.turn() {
            Turn::P0 => (p0, p1),
            Turn::P1 => (p1, p0),
        };
        self.profile.add_policy(&info, &policy, reach);
        let mut expected = 0.;
        let mut utilities = BTreeMap::<Edge, Utility>::new();
        for (&edge, &weight) in policy.inner() {
            // skip lines the current strategy near-never reaches; their
            // utility stays at zero for this iteration
            if weight < POLICY_CUTOFF {
                continue;
            }
            // child value is from the opponent's perspective
            let value = match game.turn() {
                Turn::P0 => -self.descend(game.apply(edge), p0 * weight, p1),
                Turn::P1 => -self.descend(game.apply(edge), p0, p1 * weight),
            };
            utilities.insert(edge, value);
            expected += weight * value;
        }
        let regret = policy
            .support()
            .map(|&edge| (edge, utilities.get(&edge).copied().unwrap_or(0.)))
            .map(|(edge, value)| (edge, (value - expected) * external))
            .collect::<Regret>();
        self.profile.add_regret(&info, &regret);
        expected
    }
}

impl From<(Deck, SmallRng)> for Solver {
    fn from((deck, rng): (Deck, SmallRng)) -> Self {
        Self {
            profile: Profile::default(),
            deck,
            rng,
            epochs: 0,
            utility: 0.,
        }
    }
}

/// The final report: one line per information set ordered by the rendered
/// key string (rank digits then betting line), then the estimated game
/// value for the out-of-position player.
impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut lines = self
            .profile
            .infosets()
            .map(|info| (info.to_string(), info))
            .map(|(key, info)| (key, info, self.profile.advice_vector(info)))
            .map(|(key, info, advice)| {
                let mut line = format!(
                    "{}: pass:[{:.6}], bet:[{:.6}]",
                    key,
                    advice.density(&Edge::Pass),
                    advice.density(&Edge::Bet),
                );
                if info.choices().len() == 3 {
                    line += &format!(", raise:[{:.6}]", advice.density(&Edge::Raise));
                }
                (key, line)
            })
            .collect::<Vec<_>>();
        lines.sort();
        for (_, line) in lines {
            writeln!(f, "{}", line)?;
        }
        write!(
            f,
            "Game value for player 0 (out of position): {}",
            self.game_value()
        )
    }
}
