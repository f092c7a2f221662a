//! Data model types built from the feed's responses.
//!
//! - `quote` — the handful of fields the client displays, extracted from a summary document.
//! - `history` — bounded per-ticker series of `(time, price)` samples.
pub mod history;
pub mod quote;
