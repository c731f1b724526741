use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::SimulationError;
use crate::game::{GameOutcome, Matchup};
use crate::team::TeamSide;

/// Aggregated outcomes of a batch of simulated games.
///
/// Score and margin sequences stay in trial order, so the i-th entries of
/// `scores_a`, `scores_b` and `margins` all describe the same game.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimulationResult {
    pub wins_a: usize,
    pub wins_b: usize,
    pub ties_broken: usize,
    pub scores_a: Vec<f64>,
    pub scores_b: Vec<f64>,
    pub margins: Vec<f64>,
}

impl SimulationResult {
    pub fn with_capacity(trials: usize) -> Self {
        SimulationResult {
            scores_a: Vec::with_capacity(trials),
            scores_b: Vec::with_capacity(trials),
            margins: Vec::with_capacity(trials),
            ..Default::default()
        }
    }

    /// Record one game.
    pub fn record(&mut self, outcome: &GameOutcome) {
        self.scores_a.push(outcome.score_a);
        self.scores_b.push(outcome.score_b);
        self.margins.push(outcome.margin());

        match outcome.winner() {
            TeamSide::A => self.wins_a += 1,
            TeamSide::B => self.wins_b += 1,
        }
        if outcome.tie_break.is_some() {
            self.ties_broken += 1;
        }
    }

    /// Append another batch after this one.
    pub fn merge(&mut self, other: SimulationResult) {
        self.wins_a += other.wins_a;
        self.wins_b += other.wins_b;
        self.ties_broken += other.ties_broken;
        self.scores_a.extend(other.scores_a);
        self.scores_b.extend(other.scores_b);
        self.margins.extend(other.margins);
    }

    pub fn trials(&self) -> usize {
        self.margins.len()
    }

    pub fn wins(&self, side: TeamSide) -> usize {
        match side {
            TeamSide::A => self.wins_a,
            TeamSide::B => self.wins_b,
        }
    }

    /// Win percentage (0-100) for one side.
    ///
    /// Returns 0.0 for an empty result.
    pub fn win_pct(&self, side: TeamSide) -> f64 {
        let trials = self.trials();
        if trials == 0 {
            return 0.0;
        }
        self.wins(side) as f64 / trials as f64 * 100.0
    }
}

/// Generator seeded from `seed`, or from entropy when `None`.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Run `num_simulations` games serially from a single random stream.
///
/// A seeded generator makes the whole run reproducible.
pub fn run<R: Rng + ?Sized>(
    matchup: &Matchup,
    num_simulations: usize,
    rng: &mut R,
) -> Result<SimulationResult, SimulationError> {
    if num_simulations == 0 {
        return Err(SimulationError::NoSimulations);
    }

    info!(
        num_simulations,
        team_a = %matchup.team_a().name,
        team_b = %matchup.team_b().name,
        "Starting simulation run"
    );

    let result = simulate_batch(matchup, num_simulations, rng);

    info!(
        wins_a = result.wins_a,
        wins_b = result.wins_b,
        ties_broken = result.ties_broken,
        "Simulation run complete"
    );
    Ok(result)
}

/// Run `num_simulations` games split across `shards` rayon tasks.
///
/// Each shard draws from its own generator, seeded from a master generator
/// built from `seed` (or from entropy). Shards are merged in order, so a
/// fixed (seed, shards) pair reproduces the same result. The stream differs
/// from [`run`] with the same seed.
pub fn run_parallel(
    matchup: &Matchup,
    num_simulations: usize,
    shards: usize,
    seed: Option<u64>,
) -> Result<SimulationResult, SimulationError> {
    if num_simulations == 0 {
        return Err(SimulationError::NoSimulations);
    }
    if shards == 0 {
        return Err(SimulationError::NoShards);
    }

    let shards = shards.min(num_simulations);
    let mut master = seeded_rng(seed);

    let plan: Vec<(u64, usize)> = shard_sizes(num_simulations, shards)
        .into_iter()
        .map(|size| (master.gen::<u64>(), size))
        .collect();

    info!(num_simulations, shards, "Starting sharded simulation run");

    let batches: Vec<SimulationResult> = plan
        .par_iter()
        .enumerate()
        .map(|(index, &(shard_seed, size))| {
            debug!(shard = index, shard_seed, size, "Running shard");
            let mut rng = ChaCha8Rng::seed_from_u64(shard_seed);
            simulate_batch(matchup, size, &mut rng)
        })
        .collect();

    let mut result = SimulationResult::with_capacity(num_simulations);
    for batch in batches {
        result.merge(batch);
    }

    info!(
        wins_a = result.wins_a,
        wins_b = result.wins_b,
        ties_broken = result.ties_broken,
        "Sharded simulation run complete"
    );
    Ok(result)
}

fn simulate_batch<R: Rng + ?Sized>(matchup: &Matchup, trials: usize, rng: &mut R) -> SimulationResult {
    let mut result = SimulationResult::with_capacity(trials);
    for _ in 0..trials {
        let outcome = matchup.simulate_game(rng);
        result.record(&outcome);
    }
    debug!(trials, ties_broken = result.ties_broken, "Batch finished");
    result
}

/// Split `total` trials into `shards` near-equal contiguous sizes.
fn shard_sizes(total: usize, shards: usize) -> Vec<usize> {
    let base = total / shards;
    let extra = total % shards;
    (0..shards)
        .map(|i| if i < extra { base + 1 } else { base })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::TeamProfile;
    use crate::win_prob::analytic_win_prob;
    use proptest::prelude::*;

    fn make_matchup() -> Matchup {
        Matchup::new(
            TeamProfile::new("Seattle Seahawks", "SEA", 36.0, 16.5, 9.0, "#002244"),
            TeamProfile::new("New England Patriots", "NE", 18.0, 8.7, 7.5, "#C60C30"),
        )
        .unwrap()
    }

    #[test]
    fn test_zero_simulations_rejected() {
        let matchup = make_matchup();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        assert_eq!(run(&matchup, 0, &mut rng), Err(SimulationError::NoSimulations));
        assert_eq!(
            run_parallel(&matchup, 0, 4, Some(1)),
            Err(SimulationError::NoSimulations)
        );
        assert_eq!(
            run_parallel(&matchup, 10, 0, Some(1)),
            Err(SimulationError::NoShards)
        );
    }

    #[test]
    fn test_counts_consistent() {
        let matchup = make_matchup();
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let result = run(&matchup, 5_000, &mut rng).unwrap();

        assert_eq!(result.trials(), 5_000);
        assert_eq!(result.scores_a.len(), 5_000);
        assert_eq!(result.scores_b.len(), 5_000);
        assert_eq!(result.wins_a + result.wins_b, 5_000);
        assert!(result.ties_broken <= 5_000);

        for ((a, b), m) in result.scores_a.iter().zip(&result.scores_b).zip(&result.margins) {
            assert!((a - b - m).abs() < 1e-12);
        }
    }

    #[test]
    fn test_win_pct_bounds() {
        let matchup = make_matchup();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let result = run(&matchup, 2_000, &mut rng).unwrap();

        let pct_a = result.win_pct(TeamSide::A);
        let pct_b = result.win_pct(TeamSide::B);
        assert!((0.0..=100.0).contains(&pct_a));
        assert!((0.0..=100.0).contains(&pct_b));
        assert!((pct_a + pct_b - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_result_pct_is_zero() {
        let result = SimulationResult::default();
        assert_eq!(result.win_pct(TeamSide::A), 0.0);
    }

    #[test]
    fn test_seeded_runs_reproducible() {
        let matchup = make_matchup();

        let first = run(&matchup, 1_000, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        let second = run(&matchup, 1_000, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);

        let par1 = run_parallel(&matchup, 1_000, 4, Some(42)).unwrap();
        let par2 = run_parallel(&matchup, 1_000, 4, Some(42)).unwrap();
        assert_eq!(par1, par2);
    }

    #[test]
    fn test_converges_to_analytic_win_prob() {
        let matchup = make_matchup();
        let expected = analytic_win_prob(matchup.team_a(), matchup.team_b()) * 100.0;

        for seed in [1u64, 2, 3] {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let result = run(&matchup, 50_000, &mut rng).unwrap();
            let pct_a = result.win_pct(TeamSide::A);
            assert!(
                (pct_a - expected).abs() < 2.0,
                "seed {seed}: simulated {pct_a:.2}% vs analytic {expected:.2}%"
            );
        }
    }

    #[test]
    fn test_parallel_converges_too() {
        let matchup = make_matchup();
        let expected = analytic_win_prob(matchup.team_a(), matchup.team_b()) * 100.0;

        let result = run_parallel(&matchup, 50_000, 8, Some(11)).unwrap();
        assert_eq!(result.trials(), 50_000);
        assert!((result.win_pct(TeamSide::A) - expected).abs() < 2.0);
    }

    #[test]
    fn test_more_shards_than_trials() {
        let matchup = make_matchup();
        let result = run_parallel(&matchup, 3, 16, Some(5)).unwrap();
        assert_eq!(result.trials(), 3);
        assert_eq!(result.wins_a + result.wins_b, 3);
    }

    #[test]
    fn test_merge_preserves_order() {
        let matchup = make_matchup();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let first = run(&matchup, 10, &mut rng).unwrap();
        let second = run(&matchup, 5, &mut rng).unwrap();

        let mut merged = first.clone();
        merged.merge(second.clone());
        assert_eq!(merged.trials(), 15);
        assert_eq!(merged.wins_a, first.wins_a + second.wins_a);
        assert_eq!(&merged.margins[..10], &first.margins[..]);
        assert_eq!(&merged.margins[10..], &second.margins[..]);
    }

    proptest! {
        #[test]
        fn prop_shard_sizes_cover_total(total in 1usize..10_000, shards in 1usize..64) {
            let shards = shards.min(total);
            let sizes = shard_sizes(total, shards);
            prop_assert_eq!(sizes.len(), shards);
            prop_assert_eq!(sizes.iter().sum::<usize>(), total);
            let max = *sizes.iter().max().unwrap();
            let min = *sizes.iter().min().unwrap();
            prop_assert!(max - min <= 1);
        }

        #[test]
        fn prop_every_trial_has_one_winner(trials in 1usize..500, seed in any::<u64>()) {
            let matchup = make_matchup();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let result = run(&matchup, trials, &mut rng).unwrap();
            prop_assert_eq!(result.wins_a + result.wins_b, trials);
            prop_assert_eq!(result.margins.len(), trials);
        }
    }
}
