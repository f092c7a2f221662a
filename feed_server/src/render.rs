//! Quote Renderer: ticker state to vendor quote-summary JSON.
//!
//! Only three inputs are live: the symbol, the drift (served as
//! `regularMarketChange`) and the current price (`regularMarketPrice`). Each of the
//! two numbers is rounded to six decimals once and served twice, as `raw` and as
//! its `fmt` string, so both copies carry the same value. Every
//! other metric is a fixed literal taken from a real Alphabet Inc. quote and is not
//! meant to agree with the simulated price.

use feed_common::FeedError;
use feed_common::summary::{
    Empty, Field, PriceDetail, QuoteResult, QuoteSummaryResponse, SummaryDetail,
};

/// Display form used for the live fields.
pub fn fmt_live(value: f64) -> String {
    format!("{:.6}", value)
}

/// Live metric: `raw` and `fmt` both hold `value` at six decimals.
pub fn live_field(value: f64) -> Field {
    let shown = fmt_live(value);
    let raw = shown.parse().unwrap_or(value);
    Field::new(raw, shown)
}

/// Build the response document for one ticker.
pub fn document(symbol: &str, drift: f64, price: f64) -> QuoteSummaryResponse {
    QuoteSummaryResponse::single(QuoteResult {
        summary_detail: summary_detail(),
        price: price_detail(symbol, drift, price),
    })
}

/// Serialize the response document for one ticker.
pub fn render(symbol: &str, drift: f64, price: f64) -> Result<Vec<u8>, FeedError> {
    let json = serde_json::to_vec(&document(symbol, drift, price))?;
    Ok(json)
}

fn price_hint() -> Field<i64> {
    Field::with_long(2, "2", "2")
}

fn summary_detail() -> SummaryDetail {
    SummaryDetail {
        max_age: 1,
        price_hint: price_hint(),
        previous_close: Field::new(1482.76, "1,482.76"),
        open: Field::new(1486.71, "1,486.71"),
        day_low: Field::new(1464.03, "1,464.03"),
        day_high: Field::new(1492.352, "1,492.35"),
        regular_market_previous_close: Field::new(1482.76, "1,482.76"),
        regular_market_open: Field::new(1486.71, "1,486.71"),
        regular_market_day_low: Field::new(1464.03, "1,464.03"),
        regular_market_day_high: Field::new(1492.352, "1,492.35"),
        dividend_rate: Empty::default(),
        dividend_yield: Empty::default(),
        ex_dividend_date: Empty::default(),
        payout_ratio: Field::new(0.0, "0.00%"),
        five_year_avg_dividend_yield: Empty::default(),
        beta: Field::new(1.064985, "1.06"),
        trailing_pe: Field::new(32.385914, "32.39"),
        forward_pe: Field::new(26.201317, "26.20"),
        volume: Field::with_long(1798566, "1.8M", "1,798,566"),
        regular_market_volume: Field::with_long(1798566, "1.8M", "1,798,566"),
        average_volume: Field::with_long(1842932, "1.84M", "1,842,932"),
        average_volume10days: Field::with_long(2114683, "2.11M", "2,114,683"),
        average_daily_volume10_day: Field::with_long(2114683, "2.11M", "2,114,683"),
        bid: Field::new(1470.05, "1,470.05"),
        ask: Field::new(1472.0, "1,472.00"),
        bid_size: Field::with_long(1100, "1.1k", "1,100"),
        ask_size: Field::with_long(1000, "1k", "1,000"),
        market_cap: Field::with_long(999330611200, "999.33B", "999,330,611,200"),
        yield_: Empty::default(),
        ytd_return: Empty::default(),
        total_assets: Empty::default(),
        expire_date: Empty::default(),
        strike_price: Empty::default(),
        open_interest: Empty::default(),
        fifty_two_week_low: Field::new(1008.87, "1,008.87"),
        fifty_two_week_high: Field::new(1587.05, "1,587.05"),
        price_to_sales_trailing12_months: Field::new(6.018976, "6.02"),
        fifty_day_average: Field::new(1484.6989, "1,484.70"),
        two_hundred_day_average: Field::new(1374.1932, "1,374.19"),
        trailing_annual_dividend_rate: Empty::default(),
        trailing_annual_dividend_yield: Empty::default(),
        nav_price: Empty::default(),
        currency: "USD".to_string(),
        from_currency: None,
        to_currency: None,
        last_market: None,
        volume24_hr: Empty::default(),
        volume_all_currencies: Empty::default(),
        circulating_supply: Empty::default(),
        algorithm: None,
        max_supply: Empty::default(),
        start_date: Empty::default(),
        tradeable: false,
    }
}

fn price_detail(symbol: &str, drift: f64, price: f64) -> PriceDetail {
    PriceDetail {
        max_age: 1,
        pre_market_change_percent: Field::new(9.50952E-4, "0.10%"),
        pre_market_change: Field::new(1.41003, "1.41"),
        pre_market_time: 1596547799,
        pre_market_price: Field::new(1484.17, "1,484.17"),
        pre_market_source: "FREE_REALTIME".to_string(),
        post_market_change_percent: Field::new(-0.002572483, "-0.26%"),
        post_market_change: Field::new(-3.790039, "-3.79"),
        post_market_time: 1596572662,
        post_market_price: Field::new(1469.51, "1,469.51"),
        post_market_source: "DELAYED".to_string(),
        regular_market_change_percent: Field::new(-0.0063799676, "-0.64%"),
        regular_market_change: live_field(drift),
        regular_market_time: 1596571201,
        price_hint: price_hint(),
        regular_market_price: live_field(price),
        regular_market_day_high: Field::new(1492.352, "1,492.35"),
        regular_market_day_low: Field::new(1464.03, "1,464.03"),
        regular_market_volume: Field::with_long(1798566, "1.80M", "1,798,566.00"),
        average_daily_volume10_day: Field::with_long(2114683, "2.11M", "2,114,683"),
        average_daily_volume3_month: Field::with_long(1842932, "1.84M", "1,842,932"),
        regular_market_previous_close: Field::new(1482.76, "1,482.76"),
        regular_market_source: "FREE_REALTIME".to_string(),
        regular_market_open: Field::new(1486.71, "1,486.71"),
        strike_price: Empty::default(),
        open_interest: Empty::default(),
        exchange: "NMS".to_string(),
        exchange_name: "NasdaqGS".to_string(),
        exchange_data_delayed_by: 0,
        market_state: "POST".to_string(),
        quote_type: "EQUITY".to_string(),
        symbol: symbol.to_string(),
        underlying_symbol: None,
        short_name: "Alphabet Inc.".to_string(),
        long_name: "Alphabet Inc.".to_string(),
        currency: "USD".to_string(),
        quote_source_name: "Delayed Quote".to_string(),
        currency_symbol: "$".to_string(),
        from_currency: None,
        to_currency: None,
        last_market: None,
        volume24_hr: Empty::default(),
        volume_all_currencies: Empty::default(),
        circulating_supply: Empty::default(),
        market_cap: Field::with_long(999330611200, "999.33B", "999,330,611,200.00"),
    }
}
