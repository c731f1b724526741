use rand::distributions::Distribution;
use rand::Rng;
use statrs::distribution::Normal;
use tracing::debug;

use crate::constants::{TIE_BREAK_POINTS, TIE_BREAK_THRESHOLD};
use crate::error::SimulationError;
use crate::team::{TeamProfile, TeamSide};
use crate::win_prob::calculate_expected_scores;

/// Final score of one simulated game.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameOutcome {
    pub score_a: f64,
    pub score_b: f64,

    /// Side that received the tie-breaking field goal, if any
    pub tie_break: Option<TeamSide>,
}

impl GameOutcome {
    pub fn margin(&self) -> f64 {
        self.score_a - self.score_b
    }

    pub fn winner(&self) -> TeamSide {
        if self.score_a > self.score_b {
            TeamSide::A
        } else {
            TeamSide::B
        }
    }
}

/// A validated pairing of two teams with their score distributions built.
#[derive(Clone, Debug)]
pub struct Matchup {
    team_a: TeamProfile,
    team_b: TeamProfile,
    score_a: Normal,
    score_b: Normal,
}

impl Matchup {
    pub fn new(team_a: TeamProfile, team_b: TeamProfile) -> Result<Self, SimulationError> {
        team_a.validate()?;
        team_b.validate()?;

        let (expected_a, expected_b) = calculate_expected_scores(&team_a, &team_b);
        let score_a = score_distribution(&team_a, expected_a)?;
        let score_b = score_distribution(&team_b, expected_b)?;
        debug!(%team_a, %team_b, expected_a, expected_b, "Built matchup");

        Ok(Matchup {
            team_a,
            team_b,
            score_a,
            score_b,
        })
    }

    pub fn team_a(&self) -> &TeamProfile {
        &self.team_a
    }

    pub fn team_b(&self) -> &TeamProfile {
        &self.team_b
    }

    /// Draw one game.
    ///
    /// Scores are clamped at zero. When both round to the same integer,
    /// a coin flip awards a field goal to one side. Draw order is score A,
    /// score B, then the coin only when a tie needs breaking.
    pub fn simulate_game<R: Rng + ?Sized>(&self, rng: &mut R) -> GameOutcome {
        let score_a = self.score_a.sample(rng).max(0.0);
        let score_b = self.score_b.sample(rng).max(0.0);
        resolve_tie(score_a, score_b, rng)
    }
}

/// Simulate a single game between two teams.
///
/// Convenience wrapper that validates the profiles on every call; loops
/// should build a [`Matchup`] once instead.
pub fn simulate_game<R: Rng + ?Sized>(
    team_a: &TeamProfile,
    team_b: &TeamProfile,
    rng: &mut R,
) -> Result<GameOutcome, SimulationError> {
    let matchup = Matchup::new(team_a.clone(), team_b.clone())?;
    Ok(matchup.simulate_game(rng))
}

/// Break a tie in rounded scores by adding a field goal to a random side.
///
/// Rounding is half-to-even. The continuous scores are adjusted in place,
/// never redrawn.
pub fn resolve_tie<R: Rng + ?Sized>(score_a: f64, score_b: f64, rng: &mut R) -> GameOutcome {
    if score_a.round_ties_even() != score_b.round_ties_even() {
        return GameOutcome {
            score_a,
            score_b,
            tie_break: None,
        };
    }

    if rng.gen::<f64>() > TIE_BREAK_THRESHOLD {
        GameOutcome {
            score_a: score_a + TIE_BREAK_POINTS,
            score_b,
            tie_break: Some(TeamSide::A),
        }
    } else {
        GameOutcome {
            score_a,
            score_b: score_b + TIE_BREAK_POINTS,
            tie_break: Some(TeamSide::B),
        }
    }
}

fn score_distribution(team: &TeamProfile, expected: f64) -> Result<Normal, SimulationError> {
    Normal::new(expected, team.std_dev).map_err(|e| SimulationError::InvalidTeam {
        team: team.name.clone(),
        reason: e.to_string(),
    })
}
