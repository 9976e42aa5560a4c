//! Spades simulator CLI: deal, bid, auto-play, and score hands from a seed.
//!
//! The same seed always produces the same session, so output can be diffed
//! across runs.

mod config;
mod error;
mod output;
mod simulator;
mod telemetry;

use std::process::ExitCode;

use clap::Parser;
use config::{Args, SimConfig};
use error::SimError;
use output::OutputWriter;
use simulator::Simulator;
use tracing::{error, info};

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "simulation failed");
            eprintln!("spades-sim: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), SimError> {
    let config = SimConfig::from_args(args)?;
    telemetry::init_tracing(config.log_filter, config.log_format);

    let mut output = OutputWriter::stdout(config.format);
    let mut simulator = Simulator::new(config);
    let records = simulator.run()?;
    for record in &records {
        output.write_hand(record)?;
    }
    output.finish()?;

    let scores = simulator.scores();
    info!(
        hands = records.len(),
        ns = scores.ns,
        ew = scores.ew,
        "session complete"
    );
    Ok(())
}
