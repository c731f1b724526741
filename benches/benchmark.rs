use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use matchup_sim::config::SimConfig;
use matchup_sim::game::Matchup;
use matchup_sim::report::SummaryStats;
use matchup_sim::simulation::{run, run_parallel};
use matchup_sim::win_prob::analytic_win_prob;

fn create_matchup() -> Matchup {
    let config = SimConfig::default();
    Matchup::new(config.team_a, config.team_b).expect("default matchup is valid")
}

fn bench_analytic_win_prob(c: &mut Criterion) {
    let matchup = create_matchup();

    c.bench_function("analytic_win_prob", |b| {
        b.iter(|| analytic_win_prob(black_box(matchup.team_a()), black_box(matchup.team_b())))
    });
}

fn bench_single_game(c: &mut Criterion) {
    let matchup = create_matchup();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("simulate_game", |b| {
        b.iter(|| black_box(&matchup).simulate_game(&mut rng))
    });
}

fn bench_monte_carlo(c: &mut Criterion) {
    let matchup = create_matchup();

    c.bench_function("run_10000_serial", |b| {
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            run(black_box(&matchup), 10_000, &mut rng)
        })
    });

    c.bench_function("run_10000_8_shards", |b| {
        b.iter(|| run_parallel(black_box(&matchup), 10_000, 8, Some(42)))
    });
}

fn bench_summary(c: &mut Criterion) {
    let config = SimConfig::default();
    let matchup = create_matchup();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let result = run(&matchup, 100_000, &mut rng).expect("non-empty run");

    c.bench_function("summary_stats_100000", |b| {
        b.iter(|| SummaryStats::from_result(black_box(&result), config.actual.as_ref()))
    });
}

criterion_group!(
    benches,
    bench_analytic_win_prob,
    bench_single_game,
    bench_monte_carlo,
    bench_summary,
);
criterion_main!(benches);
