use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("Number of simulations must be at least 1")]
    NoSimulations,

    #[error("Number of shards must be at least 1")]
    NoShards,

    #[error("Invalid profile for {team}: {reason}")]
    InvalidTeam { team: String, reason: String },

    #[error("Invalid display color {color:?} for {team}, expected #RRGGBB")]
    InvalidColor { team: String, color: String },

    #[error("Failed to render figure: {0}")]
    Plot(String),
}
