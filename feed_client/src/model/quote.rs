//! The client's view of a quote.
//!
//! Only the live part of the summary document is kept: symbol, price, and the
//! regular-market change in percent and in currency.
use chrono::{DateTime, Utc};
use feed_common::{FeedError, QuoteSummaryResponse, Result};
use strum_macros::Display;

/// Sign of the feed's `regularMarketChange`. For the mock feed that is the drift
/// from the ticker's base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum QuoteState {
    /// Reported change is above zero.
    Positive,
    /// Reported change is below zero.
    Negative,
    /// Reported change is exactly zero.
    Neutral,
}

/// A single observed quote.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// When the client received the quote.
    pub timestamp: DateTime<Utc>,
    /// Symbol as echoed by the feed.
    pub ticker: String,
    /// Price display string.
    pub price: String,
    /// Price value.
    pub price_raw: f64,
    /// Percent change display string.
    pub percent_change: String,
    /// Currency change display string.
    pub amount_change: String,
    /// Currency change value.
    pub amount_change_raw: f64,
}

impl Quote {
    /// Extract the quote from a decoded summary document received at `timestamp`.
    pub fn from_summary(summary: &QuoteSummaryResponse, timestamp: DateTime<Utc>) -> Result<Quote> {
        let price = &summary
            .first()
            .ok_or(FeedError::MissingField("quoteSummary.result[0]"))?
            .price;

        Ok(Quote {
            timestamp,
            ticker: price.symbol.clone(),
            price: price.regular_market_price.fmt.clone(),
            price_raw: price.regular_market_price.raw,
            percent_change: price.regular_market_change_percent.fmt.clone(),
            amount_change: price.regular_market_change.fmt.clone(),
            amount_change_raw: price.regular_market_change.raw,
        })
    }

    /// Sign of the currency change.
    pub fn state(&self) -> QuoteState {
        if self.amount_change_raw > 0.0 {
            QuoteState::Positive
        } else if self.amount_change_raw < 0.0 {
            QuoteState::Negative
        } else {
            QuoteState::Neutral
        }
    }

    /// Column titles matching [`Quote::as_row`].
    pub fn table_headers() -> [&'static str; 4] {
        ["Ticker", "Price", "% Change", "$ Change"]
    }

    /// Display cells in [`Quote::table_headers`] order.
    pub fn as_row(&self) -> [String; 4] {
        [
            self.ticker.clone(),
            self.price.clone(),
            self.percent_change.clone(),
            self.amount_change.clone(),
        ]
    }

    /// `(unix seconds, price)` sample for charting and history.
    pub fn to_chartable(&self) -> (f64, f64) {
        (self.timestamp.timestamp() as f64, self.price_raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feed_server::render::document;

    #[test]
    fn extracts_live_fields() {
        let at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let quote = Quote::from_summary(&document("GOOG", -1.5, 1498.5), at).unwrap();

        assert_eq!(quote.ticker, "GOOG");
        assert_eq!(quote.price, "1498.500000");
        assert_eq!(quote.price_raw, 1498.5);
        assert_eq!(quote.percent_change, "-0.64%");
        assert_eq!(quote.amount_change, "-1.500000");
        assert_eq!(quote.amount_change_raw, -1.5);
        assert_eq!(quote.state(), QuoteState::Negative);
        assert_eq!(quote.to_chartable(), (1_700_000_000.0, 1498.5));
        assert_eq!(
            quote.as_row(),
            ["GOOG", "1498.500000", "-0.64%", "-1.500000"].map(String::from)
        );
    }

    #[test]
    fn state_follows_sign_of_change() {
        let at = Utc::now();
        let up = Quote::from_summary(&document("A", 0.25, 10.0), at).unwrap();
        let flat = Quote::from_summary(&document("A", 0.0, 10.0), at).unwrap();
        assert_eq!(up.state(), QuoteState::Positive);
        assert_eq!(flat.state(), QuoteState::Neutral);
        assert_eq!(up.state().to_string(), "Positive");
    }

    #[test]
    fn empty_result_is_a_missing_field() {
        let mut summary = document("A", 0.0, 10.0);
        summary.quote_summary.result.clear();
        let err = Quote::from_summary(&summary, Utc::now()).unwrap_err();
        assert!(matches!(err, FeedError::MissingField(_)));
    }

    #[test]
    fn headers_line_up_with_row() {
        assert_eq!(Quote::table_headers()[0], "Ticker");
        assert_eq!(Quote::table_headers()[3], "$ Change");
    }
}
