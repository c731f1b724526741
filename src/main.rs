mod cli;

use anyhow::{Context, Result};
use clap::Parser;

use matchup_sim::config::SimConfig;
use matchup_sim::plot::render_figure;
use matchup_sim::report::{format_count, Report, SummaryStats};
use matchup_sim::simulation::{run, run_parallel, seeded_rng};
use matchup_sim::win_prob::analytic_win_prob;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    args.tracing.init_tracing();

    let config = args.apply(SimConfig::default());
    let matchup = config
        .matchup()
        .context("Invalid matchup configuration")?;

    println!(
        "Running {} simulated games of {}...",
        format_count(config.num_simulations),
        config.title
    );

    let result = match args.shards {
        Some(shards) => run_parallel(&matchup, config.num_simulations, shards, config.seed)?,
        None => {
            let mut rng = seeded_rng(config.seed);
            run(&matchup, config.num_simulations, &mut rng)?
        }
    };

    let stats = SummaryStats::from_result(&result, config.actual.as_ref());
    let analytic = analytic_win_prob(matchup.team_a(), matchup.team_b());
    println!();
    print!("{}", Report::new(&config, &stats, analytic));

    if !args.no_plot {
        render_figure(&args.output, &config, &result, &stats)
            .with_context(|| format!("Failed to write figure to {}", args.output.display()))?;
        println!();
        println!("Figure saved to {}", args.output.display());
    }

    Ok(())
}
