use crate::constants::{
    DEFAULT_NUM_SIMULATIONS, PATRIOTS_STATS, SEAHAWKS_STATS, SUPER_BOWL_LX_FINAL,
    SUPER_BOWL_LX_TITLE,
};
use crate::error::SimulationError;
use crate::game::Matchup;
use crate::team::TeamProfile;

/// Real final score the simulation is compared against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActualResult {
    pub score_a: f64,
    pub score_b: f64,
}

impl ActualResult {
    pub fn margin(&self) -> f64 {
        self.score_a - self.score_b
    }
}

/// Everything a simulation run needs.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub title: String,
    pub team_a: TeamProfile,
    pub team_b: TeamProfile,
    pub num_simulations: usize,

    /// Seed for the random source; `None` draws from entropy
    pub seed: Option<u64>,

    pub actual: Option<ActualResult>,
}

impl Default for SimConfig {
    /// Super Bowl LX: Seattle Seahawks vs New England Patriots.
    fn default() -> Self {
        let (sea_scored, sea_allowed, sea_sd) = SEAHAWKS_STATS;
        let (ne_scored, ne_allowed, ne_sd) = PATRIOTS_STATS;
        let (sea_final, ne_final) = SUPER_BOWL_LX_FINAL;

        SimConfig {
            title: SUPER_BOWL_LX_TITLE.to_string(),
            team_a: TeamProfile::new(
                "Seattle Seahawks",
                "SEA",
                sea_scored,
                sea_allowed,
                sea_sd,
                "#002244",
            ),
            team_b: TeamProfile::new(
                "New England Patriots",
                "NE",
                ne_scored,
                ne_allowed,
                ne_sd,
                "#C60C30",
            ),
            num_simulations: DEFAULT_NUM_SIMULATIONS,
            seed: None,
            actual: Some(ActualResult {
                score_a: sea_final,
                score_b: ne_final,
            }),
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.num_simulations == 0 {
            return Err(SimulationError::NoSimulations);
        }
        self.team_a.validate()?;
        self.team_b.validate()
    }

    /// Validate and build the matchup for this configuration.
    pub fn matchup(&self) -> Result<Matchup, SimulationError> {
        self.validate()?;
        Matchup::new(self.team_a.clone(), self.team_b.clone())
    }
}
