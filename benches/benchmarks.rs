use kuhnpoker::mccfr::Solver;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        solving_cfr_kuhn3,
        solving_cfr_kuhn13,
}

fn solving_cfr_kuhn3(c: &mut criterion::Criterion) {
    c.bench_function("train 1k hands of 3-rank Kuhn", |b| {
        b.iter(|| Solver::seeded(3, 0).solve(1_000))
    });
}

fn solving_cfr_kuhn13(c: &mut criterion::Criterion) {
    c.bench_function("train 1k hands of 13-rank Kuhn", |b| {
        b.iter(|| Solver::seeded(13, 0).solve(1_000))
    });
}
