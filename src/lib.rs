//! CFR self-play solution of an extended Kuhn poker.
//!
//! The game is heads-up Kuhn poker over `N` distinct ranks with one extra
//! wrinkle: a player facing a bet may raise, once. Training runs vanilla
//! counterfactual regret minimization over dealt hands; the time-averaged
//! strategy at every information set converges to an approximate Nash
//! equilibrium.
//!
//! - [`cards`] — Rank and Deck primitives
//! - [`mccfr`] — Betting grammar, information sets, regret storage, and the
//!   recursive CFR solver

pub mod cards;
pub mod mccfr;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Antes, bets, and raise amounts in chips.
pub type Chips = i16;
/// Expected values, regrets, and payoffs.
pub type Utility = f64;
/// Strategy weights and reach probabilities.
pub type Probability = f64;

// ============================================================================
// GAME TREE PARAMETERS
// ============================================================================
/// Chips each player antes before acting.
pub const ANTE: Chips = 1;
/// Chips wagered by a bet (and matched by a call).
pub const BET: Chips = 2;
/// Chips wagered by a raise (and matched by a call).
pub const RAISE: Chips = 6;
/// Number of distinct ranks in the default deck.
pub const DECK_SIZE: usize = 13;

// ============================================================================
// REGRET MATCHING
// Convert cumulative regrets to current iteration strategy via normalization.
// ============================================================================
/// Minimum policy weight to prevent division by zero in normalization.
/// Normalizing `max(regret, POLICY_MIN)` collapses to the uniform mixture
/// whenever no action holds positive regret.
pub const POLICY_MIN: Probability = Probability::MIN_POSITIVE;

// ============================================================================
// PROBABILITY PRUNING
// Skip descending into actions the current strategy near-never plays.
// Trades a small regret bias at low epoch counts for traversal speed.
// ============================================================================
/// Actions with current strategy weight below this are not explored;
/// their utility is taken as zero for the iteration.
pub const POLICY_CUTOFF: Probability = 0.01;

// ============================================================================
// TRAINING
// ============================================================================
/// Default number of self-play hands per training run.
pub const CFR_TREE_COUNT: usize = 125_000_000;
/// Epochs between progress log lines.
pub const TRAINING_LOG_INTERVAL: usize = 1 << 22;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at INFO level.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
