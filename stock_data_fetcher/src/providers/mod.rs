//! Provider abstraction for market data sources.
//!
//! This module defines the [`DataProvider`] trait, which serves as a unified
//! interface for fetching historical price data from a market data vendor.
//!
//! Each concrete provider implementation should implement [`DataProvider`] to
//! handle vendor-specific API logic. The trait is designed for async usage
//! and supports dynamic dispatch (`dyn DataProvider`).
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use stock_data_fetcher::models::{bar_series::BarSeries, request_params::HistoryRequest};
//! use stock_data_fetcher::providers::{DataProvider, ProviderError};
//!
//! struct MyProvider;
//!
//! #[async_trait]
//! impl DataProvider for MyProvider {
//!     async fn fetch_history(
//!         &self,
//!         request: &HistoryRequest,
//!     ) -> Result<BarSeries, ProviderError> {
//!         Ok(BarSeries {
//!             symbol: request.symbol.clone(),
//!             period: request.period,
//!             bars: vec![],
//!         })
//!     }
//! }
//! ```

pub mod yahoo_chart;

use async_trait::async_trait;
use snafu::{Backtrace, Snafu};

use crate::models::{bar_series::BarSeries, request_params::HistoryRequest};

/// Trait for fetching a historical price series from a market data provider.
///
/// Implement this trait for each concrete data vendor.
#[async_trait]
pub trait DataProvider {
    /// Fetches the price series described by `request`.
    ///
    /// # Returns
    ///
    /// * `Ok(BarSeries)` - The series, possibly empty when the provider has
    ///   no data for the symbol/period combination.
    /// * `Err(ProviderError)` - If the request fails.
    async fn fetch_history(&self, request: &HistoryRequest) -> Result<BarSeries, ProviderError>;
}

/// Errors that can occur during the creation of a provider instance.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// failed to init reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },
}

/// Errors that can occur within a `DataProvider` implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure, timeout).
    #[snafu(display("API request failed: {source}"))]
    Reqwest {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The provider's API returned a specific error message (e.g., an
    /// unrecognized symbol).
    #[snafu(display("API error: {message}"))]
    Api {
        message: String,
        backtrace: Backtrace,
    },

    /// An internal error occurred while processing data within the provider.
    #[snafu(display("Internal provider error: {message}"))]
    Internal {
        message: String,
        backtrace: Backtrace,
    },

    /// An error during provider configuration or initialization.
    #[snafu(display("Provider initialization error: {source}"))]
    Init {
        #[snafu(backtrace)]
        source: ProviderInitError,
    },
}
