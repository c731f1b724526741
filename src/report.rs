//! Summary statistics over a finished run and the plain-text report.

use std::fmt;

use crate::config::{ActualResult, SimConfig};
use crate::constants::{BLOWOUT_MARGIN, CLOSE_GAME_MARGIN};
use crate::simulation::SimulationResult;
use crate::team::{TeamProfile, TeamSide};

const BANNER_WIDTH: usize = 45;

/// Descriptive statistics of a simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryStats {
    pub trials: usize,
    pub win_pct_a: f64,
    pub win_pct_b: f64,
    pub mean_score_a: f64,
    pub mean_score_b: f64,
    pub mean_margin: f64,
    pub min_margin: f64,
    pub max_margin: f64,

    /// Share of games with |margin| below the close-game threshold
    pub pct_close: f64,

    /// Share of games team A won by more than the blowout threshold
    pub pct_blowout: f64,

    /// Percentile rank of the actual margin, when an actual result is known
    pub actual_percentile: Option<f64>,
}

impl SummaryStats {
    /// Summarize a run.
    ///
    /// An empty result yields zeroed statistics rather than NaN.
    pub fn from_result(result: &SimulationResult, actual: Option<&ActualResult>) -> Self {
        let margins = &result.margins;
        let (min_margin, max_margin) = if margins.is_empty() {
            (0.0, 0.0)
        } else {
            margins
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &m| {
                    (lo.min(m), hi.max(m))
                })
        };

        SummaryStats {
            trials: result.trials(),
            win_pct_a: result.win_pct(TeamSide::A),
            win_pct_b: result.win_pct(TeamSide::B),
            mean_score_a: mean(&result.scores_a),
            mean_score_b: mean(&result.scores_b),
            mean_margin: mean(margins),
            min_margin,
            max_margin,
            pct_close: pct_where(margins, |m| m.abs() < CLOSE_GAME_MARGIN),
            pct_blowout: pct_where(margins, |m| m > BLOWOUT_MARGIN),
            actual_percentile: actual.map(|a| percentile_rank(margins, a.margin())),
        }
    }
}

/// Percentage (0-100) of `values` strictly less than `value`.
pub fn percentile_rank(values: &[f64], value: f64) -> f64 {
    pct_where(values, |v| v < value)
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn pct_where(values: &[f64], pred: impl Fn(f64) -> bool) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let hits = values.iter().filter(|&&v| pred(v)).count();
    hits as f64 / values.len() as f64 * 100.0
}

/// Format a count with thousands separators, e.g. `100,000`.
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Printable report for one run.
pub struct Report<'a> {
    pub title: &'a str,
    pub team_a: &'a TeamProfile,
    pub team_b: &'a TeamProfile,
    pub actual: Option<&'a ActualResult>,
    pub stats: &'a SummaryStats,

    /// Closed-form win probability of team A (0.0-1.0)
    pub analytic_win_prob: f64,
}

impl<'a> Report<'a> {
    pub fn new(config: &'a SimConfig, stats: &'a SummaryStats, analytic_win_prob: f64) -> Self {
        Report {
            title: &config.title,
            team_a: &config.team_a,
            team_b: &config.team_b,
            actual: config.actual.as_ref(),
            stats,
            analytic_win_prob,
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(BANNER_WIDTH);
        let (a, b) = (self.team_a, self.team_b);
        let (abbr_a, abbr_b) = (&a.abbreviation, &b.abbreviation);
        let s = self.stats;
        let width = a.name.len().max(b.name.len()) + 2;

        writeln!(f, "{rule}")?;
        writeln!(f, "  {} SIMULATION RESULTS", self.title.to_uppercase())?;
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "  {:<width$}{:.1}% win probability",
            format!("{}:", a.name),
            s.win_pct_a
        )?;
        writeln!(
            f,
            "  {:<width$}{:.1}% win probability",
            format!("{}:", b.name),
            s.win_pct_b
        )?;
        writeln!(
            f,
            "  Normal approximation: {abbr_a} {:.1}%",
            self.analytic_win_prob * 100.0
        )?;
        writeln!(f)?;
        writeln!(f, "  Avg simulated score:")?;
        writeln!(
            f,
            "  {abbr_a} {:.1}  -  {abbr_b} {:.1}",
            s.mean_score_a, s.mean_score_b
        )?;
        if let Some(actual) = self.actual {
            writeln!(f)?;
            writeln!(
                f,
                "  Actual result: {abbr_a} {}  -  {abbr_b} {}",
                actual.score_a, actual.score_b
            )?;
        }
        writeln!(f, "{rule}")?;
        writeln!(f)?;
        writeln!(
            f,
            "Extra Stats from {} simulations:",
            format_count(s.trials)
        )?;
        writeln!(
            f,
            "  Closest simulated game:  {abbr_a} margin of {:.1} pts",
            s.min_margin
        )?;
        writeln!(f, "  Biggest {abbr_a} blowout:     {:+.1} pts", s.max_margin)?;
        writeln!(
            f,
            "  Games within {} pts:      {:.1}%",
            CLOSE_GAME_MARGIN, s.pct_close
        )?;
        writeln!(
            f,
            "  {abbr_a} wins by {}+:         {:.1}%",
            BLOWOUT_MARGIN, s.pct_blowout
        )?;
        if let (Some(actual), Some(pct)) = (self.actual, s.actual_percentile) {
            writeln!(
                f,
                "  Actual result ({abbr_a} {:+}) was in the {:.1}th percentile",
                actual.margin(),
                pct
            )?;
        }
        Ok(())
    }
}
