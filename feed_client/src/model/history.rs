//! Rolling price history per ticker.
//!
//! Each ticker keeps at most `capacity` `(unix seconds, price)` samples; pushing past
//! that evicts the oldest one. Tickers iterate in symbol order.
use std::collections::{BTreeMap, VecDeque};

use chrono::{DateTime, Local};

/// Bounded per-ticker series of `(time, price)` samples.
#[derive(Debug, Clone)]
pub struct PriceHistory {
    series: BTreeMap<String, VecDeque<(f64, f64)>>,
    capacity: usize,
}

impl PriceHistory {
    /// History keeping at most `capacity` samples per ticker (at least one).
    pub fn new(capacity: usize) -> Self {
        Self {
            series: BTreeMap::new(),
            capacity: capacity.max(1),
        }
    }

    /// Append a sample for `ticker`, evicting the oldest beyond capacity.
    pub fn insert(&mut self, ticker: &str, sample: (f64, f64)) {
        let samples = self.series.entry(ticker.to_string()).or_default();
        samples.push_back(sample);
        while samples.len() > self.capacity {
            samples.pop_front();
        }
    }

    /// Samples for `ticker`, oldest first.
    pub fn samples(&self, ticker: &str) -> Option<&VecDeque<(f64, f64)>> {
        self.series.get(ticker)
    }

    /// Tickers with at least one sample, in symbol order.
    pub fn tickers(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    /// Lowest recorded price.
    pub fn min(&self, ticker: &str) -> Option<f64> {
        self.fold(ticker, |&(_, price)| price, f64::min)
    }

    /// Highest recorded price.
    pub fn max(&self, ticker: &str) -> Option<f64> {
        self.fold(ticker, |&(_, price)| price, f64::max)
    }

    /// Time of the oldest retained sample.
    pub fn min_time(&self, ticker: &str) -> Option<DateTime<Local>> {
        self.fold(ticker, |&(time, _)| time, f64::min)
            .and_then(to_local)
    }

    /// Time of the newest retained sample.
    pub fn max_time(&self, ticker: &str) -> Option<DateTime<Local>> {
        self.fold(ticker, |&(time, _)| time, f64::max)
            .and_then(to_local)
    }

    fn fold(
        &self,
        ticker: &str,
        pick: impl Fn(&(f64, f64)) -> f64,
        combine: impl Fn(f64, f64) -> f64,
    ) -> Option<f64> {
        self.series
            .get(ticker)?
            .iter()
            .map(pick)
            .reduce(combine)
    }
}

fn to_local(unix_seconds: f64) -> Option<DateTime<Local>> {
    DateTime::from_timestamp(unix_seconds as i64, 0).map(|utc| utc.with_timezone(&Local))
}
