/// Default number of simulated games per run
pub const DEFAULT_NUM_SIMULATIONS: usize = 100_000;

/// Points awarded to break a tie (a field goal)
pub const TIE_BREAK_POINTS: f64 = 3.0;

/// A coin draw strictly above this awards the tie-break to team A
pub const TIE_BREAK_THRESHOLD: f64 = 0.5;

/// Games decided by less than this many points count as close
pub const CLOSE_GAME_MARGIN: f64 = 7.0;

/// Team A wins by more than this many points count as blowouts
pub const BLOWOUT_MARGIN: f64 = 10.0;

/// Histogram bins for the score distribution panel
pub const SCORE_HISTOGRAM_BINS: usize = 50;

/// Histogram bins for the margin panel
pub const MARGIN_HISTOGRAM_BINS: usize = 60;

/// Super Bowl LX title used by the default matchup
pub const SUPER_BOWL_LX_TITLE: &str = "Super Bowl LX";

/// Seattle Seahawks season profile: (scored, allowed, std dev)
pub const SEAHAWKS_STATS: (f64, f64, f64) = (36.0, 16.5, 9.0);

/// New England Patriots season profile: (scored, allowed, std dev)
pub const PATRIOTS_STATS: (f64, f64, f64) = (18.0, 8.7, 7.5);

/// Final score of Super Bowl LX: (Seattle, New England)
pub const SUPER_BOWL_LX_FINAL: (f64, f64) = (29.0, 13.0);
