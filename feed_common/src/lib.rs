//!
//! Common types and utilities shared by the mock feed server and its client.
//!
//! This crate aggregates:
//! - `error` — unified error type `FeedError` used across the workspace.
//! - `result` — handy `Result<T, FeedError>` alias.
//! - `summary` — typed quote-summary document served by the mock and decoded by the client.
//! - `tickers` — ticker list parsing used by the client.
//! - `net` — networking constants and small helpers.
#![warn(missing_docs)]
pub mod error;
pub mod net;
pub mod result;
pub mod summary;
pub mod tickers;

pub use error::FeedError;
pub use result::Result;
pub use summary::QuoteSummaryResponse;
