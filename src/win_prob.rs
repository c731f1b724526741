use statrs::function::erf::erfc;

use crate::team::TeamProfile;

/// Calculate expected scores for a matchup.
///
/// Each side's expectation averages its own scoring rate with the
/// opponent's points allowed.
///
/// Returns (team_a_expected_score, team_b_expected_score)
pub fn calculate_expected_scores(team_a: &TeamProfile, team_b: &TeamProfile) -> (f64, f64) {
    let expected_a = (team_a.avg_points_scored + team_b.avg_points_allowed) / 2.0;
    let expected_b = (team_b.avg_points_scored + team_a.avg_points_allowed) / 2.0;
    (expected_a, expected_b)
}

/// Calculate the probability of team_a outscoring team_b.
///
/// Closed-form normal approximation of the simulated model: the score
/// difference is Normal(expected_a - expected_b, sqrt(sd_a^2 + sd_b^2)).
/// Clamping at zero and the tie-break field goal are ignored.
///
/// # Returns
/// Probability of team_a winning (0.0-1.0)
pub fn analytic_win_prob(team_a: &TeamProfile, team_b: &TeamProfile) -> f64 {
    let (expected_a, expected_b) = calculate_expected_scores(team_a, team_b);
    let point_diff = expected_a - expected_b;
    let stddev = team_a.std_dev.hypot(team_b.std_dev);
    standard_normal_cdf(point_diff / stddev)
}

fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / std::f64::consts::SQRT_2)
}
