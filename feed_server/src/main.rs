//! Mock quote feed server.
//!
//! Listens for plain HTTP and answers every request with a quote-summary document
//! for the ticker named by the request path. Prices follow a per-ticker random walk
//! held in memory (see `feed_server::store`); a restart forgets all of them.
//!
//! Startup: parse CLI, init logging, bind, serve. Failing to bind is fatal.
#![warn(missing_docs)]
mod args;

use std::sync::Arc;

use clap::Parser;
use feed_common::net::addr;
use feed_common::{FeedError, Result};
use feed_server::{TickerStore, serve};
use log::{error, info};
use tokio::net::TcpListener;

use crate::args::Args;

#[tokio::main]
async fn main() -> Result<(), FeedError> {
    init_logger();
    let args = Args::parse();

    let store = match args.seed {
        Some(seed) => {
            info!("Price generator seeded with {}", seed);
            TickerStore::seeded(seed)
        }
        None => TickerStore::new(),
    };

    let bind_address = addr(&args.host, args.port);
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", bind_address, e);
            return Err(e.into());
        }
    };
    info!("Mock quote feed listening on http://{}", listener.local_addr()?);

    serve(listener, Arc::new(store)).await
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
