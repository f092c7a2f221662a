//! Ticker list parsing shared by the client and its tests.
//!
//! The mock feed accepts any path as a symbol, so tickers are plain strings here.
//! Lists are read from text where symbols are separated by commas, whitespace or
//! new lines.

use std::io::BufRead;

use crate::error::FeedError;

/// Characters that would change the meaning of a quote URL if placed in a ticker.
const RESERVED: &[char] = &['/', '?', '#'];

/// Trait providing list parsing for tickers.
pub trait TickerParser: Sized {
    /// Parses tickers from a buffered reader.
    ///
    /// Blank entries are skipped. Returns an error if a symbol contains a reserved URL
    /// character or the reader fails.
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Self>, FeedError>;
}

impl TickerParser for String {
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Self>, FeedError> {
        let mut tickers = Vec::new();

        for line_result in reader.lines() {
            let line = line_result.map_err(FeedError::Io)?;
            for raw in line.split(|c: char| c == ',' || c.is_whitespace()) {
                if raw.is_empty() {
                    continue;
                }
                tickers.push(validate(raw)?);
            }
        }
        Ok(tickers)
    }
}

/// Check a single symbol and return it in owned form.
pub fn validate(raw: &str) -> Result<String, FeedError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FeedError::ParseTickersFile("empty ticker".to_string()));
    }
    if let Some(c) = trimmed.chars().find(|c| RESERVED.contains(c)) {
        return Err(FeedError::ParseTickersFile(format!(
            "ticker `{}` contains reserved character `{}`",
            trimmed, c
        )));
    }
    Ok(trimmed.to_string())
}
