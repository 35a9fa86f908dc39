#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter for the farm economy simulator.
//!
//! Parses the run configuration, selects the upgrade policy once at startup,
//! drives the engine, and prints the final report. All diagnostics go to
//! stderr so stdout carries nothing but the report.

use anyhow::Context;
use clap::Parser;
use farm_defence_core::{SimConfig, Strategy, StrategyKind};
use farm_defence_engine::run;
use farm_defence_system_level_distributed::LevelDistributed;
use farm_defence_system_level_each::LevelEach;
use farm_defence_system_report::build_report;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Simulates farm economics under an upgrade policy and reports the totals.
#[derive(Debug, Parser)]
#[command(name = "farm-defence", version, about)]
struct Args {
    /// Upgrade policy to simulate: level-each or level-distributed.
    #[arg(long)]
    strategy: StrategyKind,

    /// Farms the level-distributed policy attempts to add each wave (1 or 2).
    #[arg(long, default_value_t = 2)]
    farms_per_wave: u32,

    /// Highest level a farm may reach before capping (0 through 5).
    #[arg(long, default_value_t = 5)]
    max_farm_level: u8,

    /// Maximum number of farms that may ever exist (1 through 8).
    #[arg(long, default_value_t = 8)]
    max_farms: u32,

    /// Number of waves to simulate.
    #[arg(long, default_value_t = 41)]
    waves: u32,

    /// Emit the report as JSON instead of the rendered table.
    #[arg(long)]
    json: bool,
}

fn select_strategy(kind: StrategyKind) -> Box<dyn Strategy> {
    match kind {
        StrategyKind::LevelDistributed => Box::new(LevelDistributed::new()),
        StrategyKind::LevelEach => Box::new(LevelEach::new()),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Entry point for the farm-defence command-line interface.
fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = SimConfig::new(
        args.waves,
        args.max_farm_level,
        args.max_farms,
        args.farms_per_wave,
    )
    .context("rejected command-line configuration")?;
    let strategy = select_strategy(args.strategy);

    info!(
        strategy = %args.strategy,
        waves = config.waves(),
        max_level = config.max_level(),
        max_farms = config.max_farms(),
        "starting simulation"
    );

    let view = run(strategy.as_ref(), &config).context("simulation aborted")?;
    let report = build_report(&view, config.max_farms());

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("report serialization failed")?
        );
    } else {
        println!("{}", report.table);
        println!();
        println!("TOTAL INCOME: {}", report.total_income);
        println!("TOTAL COST: {}", report.total_cost);
        println!("NET INCOME: {}", report.net);
    }

    Ok(())
}
