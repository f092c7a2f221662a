//! Per-ticker price state and the random walk that moves it.
//!
//! The `TickerStore` owns one `TickerState` per symbol ever requested. The first
//! request for a symbol draws its base price and an initial nudge; every later
//! request adds one random step to the accumulated drift. Entries are never removed
//! and nothing survives a restart.
//!
//! Walk shape:
//! - base price: uniform integer in `[300, 1900)`, fixed for the life of the entry;
//! - initial drift: uniform in `[-0.5, 0.5)`;
//! - step: a magnitude `k` uniform in `{1, 2, 3}`, then a unit draw in `[-0.5, 0.5)`
//!   scaled by `k`. Varying `k` per tick gives bursty movement.
//!
//! Concurrency: one mutex guards both the map and the generator, so the
//! read-modify-write on a symbol is atomic and no step is ever lost. Draw order is
//! fixed, which makes a seeded store fully reproducible.

use std::collections::HashMap;
use std::ops::{Range, RangeInclusive};
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Integer range the base price is drawn from.
pub const BASE_PRICE_RANGE: Range<i64> = 300..1900;
/// Range of the initial drift and of the unscaled walk step.
pub const UNIT_STEP_RANGE: Range<f64> = -0.5..0.5;
/// Multipliers applied to the unit step.
pub const STEP_SCALE_RANGE: RangeInclusive<u32> = 1..=3;

/// Price state of a single ticker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickerState {
    /// Price drawn when the ticker was first seen. Never changes afterwards.
    pub base_price: f64,
    /// Sum of every random delta applied since creation, initial nudge included.
    pub drift: f64,
    /// Walk steps applied after creation.
    pub ticks: u64,
}

impl TickerState {
    fn open<R: Rng>(rng: &mut R) -> Self {
        let base_price = rng.random_range(BASE_PRICE_RANGE) as f64;
        let drift = rng.random_range(UNIT_STEP_RANGE);
        Self {
            base_price,
            drift,
            ticks: 0,
        }
    }

    fn step<R: Rng>(&mut self, rng: &mut R) -> f64 {
        let scale = rng.random_range(STEP_SCALE_RANGE) as f64;
        let delta = rng.random_range(UNIT_STEP_RANGE) * scale;
        self.drift += delta;
        self.ticks += 1;
        delta
    }

    /// Current price: base plus accumulated drift.
    pub fn price(&self) -> f64 {
        self.base_price + self.drift
    }
}

/// Outcome of a single `resolve` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Price after this request's update.
    pub price: f64,
    /// Accumulated drift after this request's update.
    pub drift: f64,
    /// `true` when this request created the ticker.
    pub is_new: bool,
}

struct Inner<R> {
    tickers: HashMap<String, TickerState>,
    rng: R,
}

/// Thread-safe map from symbol to `TickerState`.
pub struct TickerStore<R = StdRng> {
    inner: Mutex<Inner<R>>,
}

impl TickerStore<StdRng> {
    /// Store backed by an OS-seeded generator.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Store whose whole price history is reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for TickerStore<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> TickerStore<R> {
    /// Store drawing from the given generator.
    pub fn with_rng(rng: R) -> Self {
        Self {
            inner: Mutex::new(Inner {
                tickers: HashMap::new(),
                rng,
            }),
        }
    }

    /// Look up `symbol`, creating it on first sight or advancing its walk otherwise.
    pub fn resolve(&self, symbol: &str) -> Resolution {
        let mut guard = self.lock();
        let Inner { tickers, rng } = &mut *guard;

        if let Some(state) = tickers.get_mut(symbol) {
            let delta = state.step(rng);
            debug!(
                "{}: step {:+.6} -> price {:.6} (tick {})",
                symbol,
                delta,
                state.price(),
                state.ticks
            );
            return Resolution {
                price: state.price(),
                drift: state.drift,
                is_new: false,
            };
        }

        let state = TickerState::open(rng);
        info!("initial price for {:?} is {:.6}", symbol, state.base_price);
        tickers.insert(symbol.to_string(), state);
        Resolution {
            price: state.price(),
            drift: state.drift,
            is_new: true,
        }
    }

    /// Copy of the state for `symbol`, if it has been seen.
    pub fn snapshot(&self, symbol: &str) -> Option<TickerState> {
        self.lock().tickers.get(symbol).copied()
    }

    /// Number of distinct symbols seen so far.
    pub fn len(&self) -> usize {
        self.lock().tickers.len()
    }

    /// `true` until the first symbol is requested.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // State is only written after every draw succeeded, so a poisoned guard still
    // holds a consistent map.
    fn lock(&self) -> MutexGuard<'_, Inner<R>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
