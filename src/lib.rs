//! Matchup Sim - Monte Carlo win probability for a two-team matchup.
//!
//! Each simulated game draws both scores from normal distributions centered
//! on the average of a team's scoring rate and its opponent's points allowed,
//! breaking rounded ties with a field goal. Runs aggregate wins, scores and
//! margins for the text report and the summary figure.

pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod histogram;
pub mod plot;
pub mod report;
pub mod simulation;
pub mod team;
pub mod win_prob;

pub use config::{ActualResult, SimConfig};
pub use constants::{DEFAULT_NUM_SIMULATIONS, TIE_BREAK_POINTS};
pub use error::SimulationError;
pub use game::{simulate_game, GameOutcome, Matchup};
pub use histogram::DensityHistogram;
pub use report::{percentile_rank, Report, SummaryStats};
pub use simulation::{run, run_parallel, seeded_rng, SimulationResult};
pub use team::{TeamProfile, TeamSide};
pub use win_prob::{analytic_win_prob, calculate_expected_scores};
