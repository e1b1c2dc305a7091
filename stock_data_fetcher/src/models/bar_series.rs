//! A collection of price bars for a specific symbol and history window.

use crate::models::{bar::Bar, period::Period};

/// Represents a complete historical price series for a single symbol.
///
/// This struct groups a vector of [`Bar`]s with their corresponding symbol
/// and requested [`Period`], making the data set self-describing.
///
/// An empty `bars` vector is a valid result: it means the provider had no
/// data for the requested symbol/period combination.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    /// The symbol this data represents (e.g., "AAPL").
    pub symbol: String,
    /// The history window the series was requested over.
    pub period: Period,
    /// The collection of OHLCV bars, oldest first.
    pub bars: Vec<Bar>,
}
