//! Generates the standard roster and writes it to `danhsach_quannhan.txt`.
//!
//! Run with:
//! ```
//! cargo run -p roster-data --bin roster
//! ```

use anyhow::Context;
use roster_data::builders::RosterBuilder;
use roster_data::config::RosterConfig;
use roster_data::export::export_roster;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the completion message.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RosterConfig::default();
    let mut rng = rand::thread_rng();

    let roster = RosterBuilder::from_config(&config)
        .build(&mut rng)
        .context("failed to generate roster")?;

    export_roster(&roster, &config.output_path)?;

    println!(
        "Wrote {} records to {}",
        roster.len(),
        config.output_path.display()
    );

    Ok(())
}
