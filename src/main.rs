use clap::Parser;
use kuhnpoker::CFR_TREE_COUNT;
use kuhnpoker::DECK_SIZE;
use kuhnpoker::mccfr::Solver;

/// Train an extended Kuhn poker strategy by CFR self-play and print the
/// converged average strategy for every information set.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of distinct card ranks in the deck.
    #[arg(long, default_value_t = DECK_SIZE)]
    ranks: usize,
    /// Number of self-play hands to train on.
    #[arg(long, default_value_t = CFR_TREE_COUNT)]
    iterations: usize,
    /// RNG seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    anyhow::ensure!(args.ranks >= 2, "deck must hold at least two ranks");
    anyhow::ensure!(args.ranks <= 250, "ranks are represented in a single byte");
    anyhow::ensure!(args.iterations > 0, "training requires at least one hand");
    kuhnpoker::log();
    log::info!(
        "training {} hands over a {}-rank deck",
        args.iterations,
        args.ranks
    );
    let solver = match args.seed {
        Some(seed) => Solver::seeded(args.ranks, seed),
        None => Solver::new(args.ranks),
    };
    println!("{}", solver.solve(args.iterations));
    Ok(())
}
