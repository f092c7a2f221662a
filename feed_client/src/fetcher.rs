//! Fetching quotes from the feed over HTTP.
//!
//! One blocking GET per ticker against `{server}/{ticker}?modules=summaryDetail,price`.
//! Anything but a 2xx answer becomes `FeedError::Http` carrying the status and body;
//! failures before a response exists become `FeedError::Transport`.
use std::time::Duration;

use chrono::Utc;
use feed_common::net::quote_url;
use feed_common::{FeedError, QuoteSummaryResponse, Result};
use log::debug;
use reqwest::blocking::Client;

use crate::model::quote::Quote;

/// Blocking quote fetcher bound to one feed.
pub struct QuoteFetcher {
    http: Client,
    base_url: String,
}

impl QuoteFetcher {
    /// Create a fetcher for the feed at `base_url`, giving up on a request after `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FeedError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.to_string(),
        })
    }

    /// Base URL this fetcher talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch and decode the current quote for `ticker`.
    pub fn fetch_quote(&self, ticker: &str) -> Result<Quote> {
        let url = quote_url(&self.base_url, ticker);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|e| FeedError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|e| FeedError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(FeedError::Http {
                status: status.as_u16(),
                message: body,
            });
        }

        let summary: QuoteSummaryResponse = serde_json::from_str(&body)?;
        Quote::from_summary(&summary, Utc::now())
    }

    /// Fetch every ticker in order, keeping each outcome next to its ticker.
    pub fn fetch_all<'a>(&self, tickers: &'a [String]) -> Vec<(&'a str, Result<Quote>)> {
        tickers
            .iter()
            .map(|ticker| (ticker.as_str(), self.fetch_quote(ticker)))
            .collect()
    }
}
