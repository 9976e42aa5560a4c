//! Simulator configuration: command-line flags with environment fallbacks.

use std::env;

use clap::{Parser, ValueEnum};
use spades_engine::domain::rules::PLAYERS;
use spades_engine::Seat;

use crate::error::SimError;

/// Seed used when neither `--seed` nor `SPADES_SEED` is given.
pub const DEFAULT_SEED: &str = "demo-seed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary per hand
    Text,
    /// One JSON object per hand
    Jsonl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "spades-sim")]
#[command(about = "Deal, auto-play, and score Spades hands deterministically")]
pub struct Args {
    /// Base seed for the session (falls back to SPADES_SEED, then "demo-seed")
    #[arg(long)]
    pub seed: Option<String>,

    /// Number of hands to play
    #[arg(long, default_value = "1")]
    pub hands: u32,

    /// Seat leading the first trick of the first hand (N, E, S, W)
    #[arg(long, default_value = "N")]
    pub leader: Seat,

    /// Bids for N, E, S, W; a 0 declares nil for that seat's team
    #[arg(long, value_delimiter = ',', default_values_t = [3, 3, 3, 3])]
    pub bids: Vec<i32>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Log format (falls back to SPADES_LOG_FORMAT)
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resolved settings for one simulator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub seed: String,
    pub hands: u32,
    pub leader: Seat,
    pub bids: [i32; PLAYERS],
    pub format: OutputFormat,
    pub log_format: LogFormat,
    pub log_filter: &'static str,
}

impl SimConfig {
    pub fn from_args(args: Args) -> Result<Self, SimError> {
        let seed = match args.seed {
            Some(seed) => seed,
            None => env::var("SPADES_SEED").unwrap_or_else(|_| DEFAULT_SEED.to_string()),
        };

        if args.hands == 0 {
            return Err(SimError::config("--hands must be at least 1"));
        }

        let bids: [i32; PLAYERS] = args.bids.as_slice().try_into().map_err(|_| {
            SimError::config(format!(
                "--bids needs exactly {PLAYERS} values (N,E,S,W), got {}",
                args.bids.len()
            ))
        })?;

        let log_format = match args.log_format {
            Some(format) => format,
            None => log_format_from_env()?,
        };

        Ok(Self {
            seed,
            hands: args.hands,
            leader: args.leader,
            bids,
            format: args.format,
            log_format,
            log_filter: if args.verbose { "debug" } else { "info" },
        })
    }
}

fn log_format_from_env() -> Result<LogFormat, SimError> {
    match env::var("SPADES_LOG_FORMAT") {
        Err(_) => Ok(LogFormat::Text),
        Ok(raw) => match raw.to_ascii_lowercase().as_str() {
            "text" | "" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(SimError::config(format!(
                "SPADES_LOG_FORMAT must be 'text' or 'json', got '{other}'"
            ))),
        },
    }
}
