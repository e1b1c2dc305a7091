//! Canonical in-memory representation of a historical price bar (OHLCV).
//!
//! This struct is used as the standard output for all [`DataProvider`](crate::providers::DataProvider)
//! implementations, regardless of which vendor the data came from.

use chrono::{DateTime, Utc};

/// A single price bar (OHLCV) for a given timestamp.
///
/// This struct is vendor-agnostic and is used throughout the crate.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// The timestamp for this bar (UTC).
    pub timestamp: DateTime<Utc>,

    /// Opening price.
    pub open: f64,

    /// Highest price during the bar interval.
    pub high: f64,

    /// Lowest price during the bar interval.
    pub low: f64,

    /// Closing price.
    pub close: f64,

    /// Shares traded during the bar interval.
    pub volume: u64,

    /// Split- and dividend-adjusted closing price. Not every response carries it.
    pub adj_close: Option<f64>,
}
