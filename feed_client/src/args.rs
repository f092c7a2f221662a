//! Command-line arguments for the quote client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use feed_common::net::DEFAULT_SERVER_URL;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the quote feed.
    #[clap(long, default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    /// Tickers to poll.
    pub tickers: Vec<String>,

    /// Path to a text file with more tickers.
    /// Tickers may be separated by commas, spaces, or new lines.
    #[clap(long)]
    pub path: Option<String>,

    /// Delay between polling rounds, in milliseconds.
    #[clap(long, default_value_t = 1000)]
    pub interval_ms: u64,

    /// Samples kept per ticker for the session range.
    #[clap(long, default_value_t = 60)]
    pub history: usize,

    /// Poll once and exit.
    #[clap(long)]
    pub once: bool,
}
