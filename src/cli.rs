use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use matchup_sim::config::SimConfig;
use matchup_sim::constants::DEFAULT_NUM_SIMULATIONS;

#[derive(Parser, Debug)]
#[command(
    name = "matchup_sim",
    about = "Monte Carlo win probability for the Super Bowl LX matchup",
    long_about = "Simulate the Seattle Seahawks vs New England Patriots matchup many times,\n\
                  print win probabilities and margin statistics, and save a summary figure."
)]
pub struct Args {
    #[command(flatten)]
    pub tracing: TracingArgs,

    /// Number of games to simulate
    #[arg(short = 'n', long = "simulations", default_value_t = DEFAULT_NUM_SIMULATIONS)]
    pub simulations: usize,

    /// Seed for reproducible runs (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Split the run across this many parallel shards
    #[arg(long)]
    pub shards: Option<usize>,

    /// Where to write the summary figure
    #[arg(short = 'o', long, default_value = "matchup_simulation.png")]
    pub output: PathBuf,

    /// Skip rendering the figure
    #[arg(long)]
    pub no_plot: bool,
}

impl Args {
    /// Overlay command line overrides onto a base configuration.
    pub fn apply(&self, base: SimConfig) -> SimConfig {
        SimConfig {
            num_simulations: self.simulations,
            seed: self.seed.or(base.seed),
            ..base
        }
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct TracingArgs {
    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Only log warnings and errors
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

impl TracingArgs {
    /// Install the global subscriber. `RUST_LOG` takes priority over the flags.
    pub fn init_tracing(&self) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            let level = if self.quiet {
                "warn"
            } else {
                match self.verbosity {
                    0 => "info",
                    1 => "debug",
                    _ => "trace",
                }
            };
            EnvFilter::new(format!("{level},matchup_sim={level}"))
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}
