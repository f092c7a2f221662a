//! Typed model of the vendor quote-summary document.
//!
//! The mock server builds a `QuoteSummaryResponse` and serializes it; the client
//! decodes the same types from the wire. The layout follows the vendor schema:
//!
//! ```text
//! { "quoteSummary": { "result": [ { "summaryDetail": {..}, "price": {..} } ], "error": null } }
//! ```
//!
//! Numeric metrics are carried as a [`Field`]: a `raw` value plus a display string
//! (`fmt`) and, for counts, a long display string (`longFmt`). Metrics the vendor
//! leaves blank are empty objects ([`Empty`]); blank strings are `null`.
use serde::{Deserialize, Serialize};

/// Top-level response document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryResponse {
    /// The single `quoteSummary` envelope.
    pub quote_summary: QuoteSummary,
}

/// Envelope holding the results and the (always null on success) error slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSummary {
    /// One entry per requested symbol; the mock always answers with exactly one.
    pub result: Vec<QuoteResult>,
    /// Vendor error object, `null` on success.
    pub error: Option<serde_json::Value>,
}

/// The two modules requested from the vendor: summary detail and price detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    /// Day/year ranges, volumes, valuation ratios.
    pub summary_detail: SummaryDetail,
    /// Live price block, including the symbol and the regular market change.
    pub price: PriceDetail,
}

impl QuoteSummaryResponse {
    /// Wrap a single result into the vendor envelope.
    pub fn single(result: QuoteResult) -> Self {
        Self {
            quote_summary: QuoteSummary {
                result: vec![result],
                error: None,
            },
        }
    }

    /// The first (and for the mock, only) result.
    pub fn first(&self) -> Option<&QuoteResult> {
        self.quote_summary.result.first()
    }
}

/// A metric with its raw value and its pre-formatted display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field<T = f64> {
    /// Machine value.
    pub raw: T,
    /// Short display form, e.g. `1,482.76` or `1.8M`.
    pub fmt: String,
    /// Long display form, only present for counts, e.g. `1,798,566`.
    #[serde(rename = "longFmt", default, skip_serializing_if = "Option::is_none")]
    pub long_fmt: Option<String>,
}

impl<T> Field<T> {
    /// Field with a short display form only.
    pub fn new(raw: T, fmt: impl Into<String>) -> Self {
        Self {
            raw,
            fmt: fmt.into(),
            long_fmt: None,
        }
    }

    /// Field carrying both display forms.
    pub fn with_long(raw: T, fmt: impl Into<String>, long_fmt: impl Into<String>) -> Self {
        Self {
            raw,
            fmt: fmt.into(),
            long_fmt: Some(long_fmt.into()),
        }
    }
}

/// A metric the vendor reports as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Empty {}

/// `summaryDetail` module.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDetail {
    pub max_age: i64,
    pub price_hint: Field<i64>,
    pub previous_close: Field,
    pub open: Field,
    pub day_low: Field,
    pub day_high: Field,
    pub regular_market_previous_close: Field,
    pub regular_market_open: Field,
    pub regular_market_day_low: Field,
    pub regular_market_day_high: Field,
    pub dividend_rate: Empty,
    pub dividend_yield: Empty,
    pub ex_dividend_date: Empty,
    pub payout_ratio: Field,
    pub five_year_avg_dividend_yield: Empty,
    pub beta: Field,
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Field,
    #[serde(rename = "forwardPE")]
    pub forward_pe: Field,
    pub volume: Field<i64>,
    pub regular_market_volume: Field<i64>,
    pub average_volume: Field<i64>,
    pub average_volume10days: Field<i64>,
    pub average_daily_volume10_day: Field<i64>,
    pub bid: Field,
    pub ask: Field,
    pub bid_size: Field<i64>,
    pub ask_size: Field<i64>,
    pub market_cap: Field<i64>,
    #[serde(rename = "yield")]
    pub yield_: Empty,
    pub ytd_return: Empty,
    pub total_assets: Empty,
    pub expire_date: Empty,
    pub strike_price: Empty,
    pub open_interest: Empty,
    pub fifty_two_week_low: Field,
    pub fifty_two_week_high: Field,
    pub price_to_sales_trailing12_months: Field,
    pub fifty_day_average: Field,
    pub two_hundred_day_average: Field,
    pub trailing_annual_dividend_rate: Empty,
    pub trailing_annual_dividend_yield: Empty,
    pub nav_price: Empty,
    pub currency: String,
    pub from_currency: Option<String>,
    pub to_currency: Option<String>,
    pub last_market: Option<String>,
    pub volume24_hr: Empty,
    pub volume_all_currencies: Empty,
    pub circulating_supply: Empty,
    pub algorithm: Option<String>,
    pub max_supply: Empty,
    pub start_date: Empty,
    pub tradeable: bool,
}

/// `price` module.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDetail {
    pub max_age: i64,
    pub pre_market_change_percent: Field,
    pub pre_market_change: Field,
    pub pre_market_time: i64,
    pub pre_market_price: Field,
    pub pre_market_source: String,
    pub post_market_change_percent: Field,
    pub post_market_change: Field,
    pub post_market_time: i64,
    pub post_market_price: Field,
    pub post_market_source: String,
    pub regular_market_change_percent: Field,
    pub regular_market_change: Field,
    pub regular_market_time: i64,
    pub price_hint: Field<i64>,
    pub regular_market_price: Field,
    pub regular_market_day_high: Field,
    pub regular_market_day_low: Field,
    pub regular_market_volume: Field<i64>,
    pub average_daily_volume10_day: Field<i64>,
    pub average_daily_volume3_month: Field<i64>,
    pub regular_market_previous_close: Field,
    pub regular_market_source: String,
    pub regular_market_open: Field,
    pub strike_price: Empty,
    pub open_interest: Empty,
    pub exchange: String,
    pub exchange_name: String,
    pub exchange_data_delayed_by: i64,
    pub market_state: String,
    pub quote_type: String,
    pub symbol: String,
    pub underlying_symbol: Option<String>,
    pub short_name: String,
    pub long_name: String,
    pub currency: String,
    pub quote_source_name: String,
    pub currency_symbol: String,
    pub from_currency: Option<String>,
    pub to_currency: Option<String>,
    pub last_market: Option<String>,
    pub volume24_hr: Empty,
    pub volume_all_currencies: Empty,
    pub circulating_supply: Empty,
    pub market_cap: Field<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_omits_long_fmt_when_absent() {
        let short = serde_json::to_value(Field::new(1482.76, "1,482.76")).unwrap();
        assert_eq!(short, json!({"raw": 1482.76, "fmt": "1,482.76"}));

        let long = serde_json::to_value(Field::with_long(1100_i64, "1.1k", "1,100")).unwrap();
        assert_eq!(long, json!({"raw": 1100, "fmt": "1.1k", "longFmt": "1,100"}));
    }

    #[test]
    fn empty_metric_is_an_empty_object() {
        assert_eq!(serde_json::to_string(&Empty::default()).unwrap(), "{}");
    }

    #[test]
    fn field_reads_vendor_shape_without_long_fmt() {
        let field: Field = serde_json::from_str(r#"{"raw": -0.0063799676, "fmt": "-0.64%"}"#).unwrap();
        assert_eq!(field.raw, -0.0063799676);
        assert_eq!(field.fmt, "-0.64%");
        assert!(field.long_fmt.is_none());
    }
}
