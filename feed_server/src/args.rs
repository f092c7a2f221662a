//! Command-line arguments for the mock feed server.
use clap::Parser;
use feed_common::net::{DEFAULT_HOST, HTTP_PORT};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Mock quote-summary feed driven by per-ticker random walks", long_about = None)]
pub struct Args {
    /// Interface to bind.
    #[clap(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// TCP port to listen on.
    #[clap(long, default_value_t = HTTP_PORT)]
    pub port: u16,

    /// Seed for the price generator; the same seed and request order replay the same prices.
    #[clap(long)]
    pub seed: Option<u64>,
}
