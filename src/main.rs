//! introots CLI entry point

use anyhow::{Context, Result};
use introots::config::cli::Cli;
use introots::config::validator::resolve_search;
use introots::config::{load_config, Config};
use introots::output::json::{write_json_report, SearchReport};
use introots::output::text;
use introots::runner;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    println!("introots v{}", env!("CARGO_PKG_VERSION"));
    println!("Concurrent integer root search");
    println!();

    let cli = Cli::parse_args();
    cli.validate()?;

    let config = load_config(&cli)?;
    init_logging(&config);

    let search = resolve_search(&config).context("Configuration validation failed")?;
    text::print_header(&search);

    if config.runtime.dry_run {
        print!("{}", config);
        println!();
        for &workers in &search.worker_counts {
            text::print_partition(workers);
        }
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    println!("Starting search...");
    println!();

    let outcomes = runner::run_all(&search)?;
    for outcome in &outcomes {
        text::print_outcome(outcome);
    }
    text::print_sweep_summary(&outcomes);

    if let Some(ref path) = config.output.json_output {
        let reports: Vec<SearchReport> = outcomes
            .iter()
            .map(|outcome| SearchReport::from_outcome(&search.label, &search.polynomial, outcome))
            .collect();
        write_json_report(path, &reports, config.output.json_pretty)?;
        println!();
        println!("JSON report written to {}", path.display());
    }

    Ok(())
}

/// Install the stderr log subscriber; `RUST_LOG` overrides the default level
fn init_logging(config: &Config) {
    let default_level = if config.runtime.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
