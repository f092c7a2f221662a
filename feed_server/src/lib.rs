//! Mock market-data feed.
//!
//! Serves a vendor-style quote-summary document for any requested ticker. Each
//! ticker's price is a random walk that persists for the life of the process:
//!
//! - `store` — `TickerStore`, the per-symbol price state and walk policy.
//! - `render` — turns a ticker's live numbers into the quote-summary JSON.
//! - `server` — axum router mapping request paths to tickers.
#![warn(missing_docs)]
pub mod render;
pub mod server;
pub mod store;

pub use server::{SharedStore, router, serve};
pub use store::{Resolution, TickerState, TickerStore};
