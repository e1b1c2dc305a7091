//! Historical stock data collection from Yahoo Finance.
//!
//! The crate wraps the unauthenticated chart endpoint behind the
//! [`DataProvider`](providers::DataProvider) seam and returns price history
//! as a [`BarSeries`](models::bar_series::BarSeries). The [`io`] module
//! turns a series into a Polars `DataFrame` for tabular inspection.

pub mod errors;
pub mod io;
pub mod models;
pub mod providers;

use snafu::ResultExt;

pub use errors::Error;
use models::{bar_series::BarSeries, period::Period, request_params::HistoryRequest};
use providers::{DataProvider, InitSnafu, yahoo_chart::provider::YahooChartProvider};

/// Fetches historical price data for `symbol` over `period`, with daily bars.
///
/// Opens a fresh provider client, performs one network request and returns
/// the series exactly as the provider reported it. Progress is reported on
/// stdout: one line before the request and one line with the record count
/// after it.
///
/// Any provider failure propagates unchanged; an unrecognized period cannot
/// occur because [`Period`] is already validated at parse time.
pub async fn fetch_stock_data(symbol: &str, period: Period) -> Result<BarSeries, Error> {
    println!("Fetching data for {symbol}...");

    let provider = YahooChartProvider::new().context(InitSnafu)?;
    let request = HistoryRequest {
        period,
        ..HistoryRequest::new(symbol)
    };

    let series = provider.fetch_history(&request).await?;

    println!("Retrieved {} days of data", series.bars.len());
    Ok(series)
}
