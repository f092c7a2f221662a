//! Quote Client — polls the mock quote feed for a set of tickers and logs one row per
//! ticker per round: price, percent and currency change, direction, and the price
//! range seen this session.
//!
//! Usage example (CLI):
//! ```bash
//! feed_client --server http://127.0.0.1:8080 GOOG AAPL --path ./tickers.txt
//! ```
//!
//! A failed fetch is logged and the ticker is retried next round. Ctrl+C stops the loop.
#![warn(missing_docs)]
mod args;

use crate::args::Args;
use clap::Parser;
use feed_client::{PriceHistory, Quote, QuoteFetcher};
use feed_common::tickers::{TickerParser, validate};
use feed_common::{FeedError, Result};
use log::{info, warn};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::thread;
use std::time::Duration;

/// Per-request timeout against the feed.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

fn main() -> Result<(), FeedError> {
    init_logger();
    let args = Args::parse();

    let tickers = collect_tickers(&args)?;
    if tickers.is_empty() {
        warn!("No tickers given; pass them as arguments or with --path");
        return Ok(());
    }
    info!("Tickers: {:?}", tickers);

    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = shutdown.clone();
        ctrlc::set_handler(move || {
            info!("Ctrl+C received. Shutting down client...");
            shutdown.store(true, Ordering::SeqCst);
        })
        .map_err(|e| FeedError::Format(format!("Error setting Ctrl+C handler: {}", e)))?;
    }

    let fetcher = QuoteFetcher::new(&args.server, REQUEST_TIMEOUT)?;
    let mut history = PriceHistory::new(args.history);
    let interval = Duration::from_millis(args.interval_ms);
    info!("Polling {} every {:?}", fetcher.base_url(), interval);
    let [ticker, price, percent, amount] = Quote::table_headers();
    info!("{:<10} {:>14} {:>9} {:>14}", ticker, price, percent, amount);

    while !shutdown.load(Ordering::Relaxed) {
        poll_round(&fetcher, &tickers, &mut history);
        if args.once {
            break;
        }
        thread::sleep(interval);
    }
    info!("Client stopped");
    Ok(())
}

fn poll_round(fetcher: &QuoteFetcher, tickers: &[String], history: &mut PriceHistory) {
    for (ticker, outcome) in fetcher.fetch_all(tickers) {
        match outcome {
            Ok(quote) => {
                history.insert(ticker, quote.to_chartable());
                let [symbol, price, percent, amount] = quote.as_row();
                info!(
                    "{:<10} {:>14} {:>9} {:>14} {:<8} range {:.2}..{:.2}",
                    symbol,
                    price,
                    percent,
                    amount,
                    quote.state(),
                    history.min(ticker).unwrap_or(quote.price_raw),
                    history.max(ticker).unwrap_or(quote.price_raw),
                );
            }
            Err(e) => warn!("{}: {}", ticker, e),
        }
    }
}

fn collect_tickers(args: &Args) -> Result<Vec<String>> {
    let mut tickers = args
        .tickers
        .iter()
        .map(|raw| validate(raw))
        .collect::<Result<Vec<_>>>()?;

    if let Some(raw_path) = &args.path {
        let file_path = normalize_path(raw_path);
        if !is_file_exist(&file_path) {
            return Err(FeedError::ParseTickersFile(format!(
                "{} is not a file",
                file_path.display()
            )));
        }
        let file = File::open(&file_path)?;
        tickers.extend(String::parse_from_file(BufReader::new(file))?);
    }

    let mut seen = HashSet::new();
    tickers.retain(|t| seen.insert(t.clone()));
    Ok(tickers)
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

/// Returns `true` if the provided path exists and is a regular file.
fn is_file_exist(path: &PathBuf) -> bool {
    path.exists() && path.is_file()
}
