//! Client for the mock quote feed.
//!
//! - `fetcher` — blocking HTTP fetch of one ticker's quote-summary document.
//! - `model` — the reduced `Quote` view and the rolling per-ticker price history.
#![warn(missing_docs)]
pub mod fetcher;
pub mod model;

pub use fetcher::QuoteFetcher;
pub use model::history::PriceHistory;
pub use model::quote::{Quote, QuoteState};
