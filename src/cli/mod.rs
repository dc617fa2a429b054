//! Command-line front end for the agent marketplace.
//!
//! Argument parsing lives here; [`commands`] executes a parsed command
//! against a marketplace, writing through caller-supplied streams so the same
//! catalog can serve several invocations in one process.

pub mod commands;
pub mod listing_file;

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use std::net::IpAddr;

use crate::telemetry::{LogFormat, LogLevel};

pub use commands::{CommandOutcome, execute};
pub use listing_file::{ListingFileError, parse_listing_draft, read_listing_draft};

/// Discover and publish pre-built agents.
#[derive(Debug, Parser)]
#[command(name = "agentmarket", version, about, long_about = None)]
pub struct Cli {
    /// Minimum severity of log events written to stderr.
    #[arg(
        long,
        value_enum,
        global = true,
        default_value_t = LogLevel::Warn,
        env = "AGENTMARKET_LOG_LEVEL"
    )]
    pub log_level: LogLevel,

    /// Format of log events.
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Marketplace commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search the agent marketplace.
    Search(SearchArgs),

    /// Publish an agent from a JSON listing file.
    Publish {
        /// Path to a JSON file holding a single listing object.
        #[arg(long = "config")]
        config: Utf8PathBuf,
    },

    /// Start the marketplace HTTP API.
    Serve {
        /// Bind address.
        #[arg(long, default_value = "0.0.0.0", env = "AGENTMARKET_HOST")]
        host: IpAddr,

        /// HTTP port to listen on.
        #[arg(long, default_value_t = 8000, env = "AGENTMARKET_PORT")]
        port: u16,
    },

    /// Show the highest-rated agents.
    TopRated(LimitArgs),

    /// Show the most-downloaded agents.
    Trending(LimitArgs),

    /// Show full details for an agent.
    Get {
        /// Agent identifier.
        agent_id: String,
    },

    /// Show the reviews submitted for an agent.
    Reviews {
        /// Agent identifier.
        agent_id: String,
    },
}

/// Search criteria; every flag is optional and flags combine with AND.
#[derive(Debug, Default, Args)]
pub struct SearchArgs {
    /// Text matched against agent name and description.
    #[arg(long)]
    pub query: Option<String>,

    /// Minimum star rating.
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Required capability (repeatable).
    #[arg(long = "capability")]
    pub capabilities: Vec<String>,

    /// Required tag (repeatable).
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

/// Leaderboard size.
#[derive(Debug, Args)]
pub struct LimitArgs {
    /// Number of results; zero or negative shows none.
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    pub limit: i64,
}
