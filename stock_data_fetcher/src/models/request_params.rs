use serde::{Deserialize, Serialize};

use crate::models::{interval::Interval, period::Period};

/// Universal parameters for requesting a historical price series from a
/// market data provider.
///
/// This struct is designed to be vendor-agnostic and is the standard input
/// for all [`DataProvider`](crate::providers::DataProvider) implementations.
/// **Whether a symbol is recognized is decided by the provider, not locally.**
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryRequest {
    /// Ticker symbol to request (e.g. `"AAPL"`).
    pub symbol: String,

    /// How far back the series reaches. Defaults to one month.
    #[serde(default)]
    pub period: Period,

    /// Bar spacing within the window. Defaults to daily bars.
    #[serde(default)]
    pub interval: Interval,
}

impl HistoryRequest {
    /// A request for `symbol` over the provider defaults: one month of
    /// daily bars.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            period: Period::default(),
            interval: Interval::default(),
        }
    }
}
