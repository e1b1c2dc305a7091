use thiserror::Error;

use crate::providers::ProviderError;

/// The unified error type for the `stock_data_fetcher` crate.
#[derive(Debug, Error)]
pub enum Error {
    /// An error originating from the market data provider.
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// An error from the Polars library.
    #[error("Polars operation failed")]
    Polars(#[from] polars::prelude::PolarsError),
}
