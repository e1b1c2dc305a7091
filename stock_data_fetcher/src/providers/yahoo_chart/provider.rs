use async_trait::async_trait;
use chrono::DateTime;
use reqwest::{Client, header};
use snafu::{OptionExt, ResultExt};
use tracing::{debug, warn};

use crate::models::{bar::Bar, bar_series::BarSeries, period::Period, request_params::HistoryRequest};
use crate::providers::{
    ApiSnafu, ClientBuildSnafu, DataProvider, InternalSnafu, ProviderError, ProviderInitError,
    ReqwestSnafu,
};
use crate::providers::yahoo_chart::{params::construct_params, response::ChartResponse};

const BASE_URL: &str = "https://query1.finance.yahoo.com";

// The endpoint rejects clients without a browser-style user agent.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

pub struct YahooChartProvider {
    client: Client,
    base_url: String,
}

impl YahooChartProvider {
    /// Creates a new chart provider.
    ///
    /// The endpoint is unauthenticated; no credentials are read.
    pub fn new() -> Result<Self, ProviderInitError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::USER_AGENT, header::HeaderValue::from_static(USER_AGENT));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context(ClientBuildSnafu)?;

        Ok(Self {
            client,
            base_url: BASE_URL.to_string(),
        })
    }
}

#[async_trait]
impl DataProvider for YahooChartProvider {
    async fn fetch_history(&self, request: &HistoryRequest) -> Result<BarSeries, ProviderError> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, request.symbol);
        let query = construct_params(request);

        debug!(
            symbol = %request.symbol,
            period = %request.period,
            interval = %request.interval,
            "requesting chart history"
        );

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .context(ReqwestSnafu)?;

        if !response.status().is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return ApiSnafu { message }.fail();
        }

        let payload = response.json::<ChartResponse>().await.context(ReqwestSnafu)?;

        let series = series_from_response(&request.symbol, request.period, payload)?;
        debug!(symbol = %series.symbol, bars = series.bars.len(), "decoded chart history");
        Ok(series)
    }
}

/// Converts a decoded chart payload into the canonical [`BarSeries`].
///
/// Rows where any OHLC value is `null` are dropped, and the remaining bars
/// are sorted oldest-first. An empty payload for a recognized symbol yields
/// an empty series, not an error.
fn series_from_response(
    symbol: &str,
    period: Period,
    payload: ChartResponse,
) -> Result<BarSeries, ProviderError> {
    if let Some(error) = payload.chart.error {
        return ApiSnafu {
            message: format!("{}: {}", error.code, error.description),
        }
        .fail();
    }

    let result = payload
        .chart
        .result
        .and_then(|mut results| (!results.is_empty()).then(|| results.remove(0)))
        .context(InternalSnafu {
            message: "chart response carried neither result nor error",
        })?;

    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();
    let adjclose = result
        .indicators
        .adjclose
        .and_then(|mut blocks| blocks.pop())
        .map(|block| block.adjclose)
        .unwrap_or_default();

    let mut bars = Vec::with_capacity(result.timestamp.len());
    let mut skipped = 0usize;

    for (index, &ts) in result.timestamp.iter().enumerate() {
        let (Some(open), Some(high), Some(low), Some(close)) = (
            value_at(&quote.open, index),
            value_at(&quote.high, index),
            value_at(&quote.low, index),
            value_at(&quote.close, index),
        ) else {
            skipped += 1;
            continue;
        };

        let timestamp = DateTime::from_timestamp(ts, 0).with_context(|| InternalSnafu {
            message: format!("out-of-range timestamp {ts} in chart response"),
        })?;

        bars.push(Bar {
            timestamp,
            open,
            high,
            low,
            close,
            volume: value_at(&quote.volume, index).unwrap_or(0),
            adj_close: value_at(&adjclose, index),
        });
    }

    if skipped > 0 {
        warn!(symbol = %symbol, skipped, "dropped rows with null quote values");
    }

    // The endpoint normally answers oldest-first, but the series contract is
    // chronological order, so enforce it here.
    bars.sort_by_key(|bar| bar.timestamp);

    Ok(BarSeries {
        symbol: symbol.to_string(),
        period,
        bars,
    })
}

fn value_at<T: Copy>(values: &[Option<T>], index: usize) -> Option<T> {
    values.get(index).copied().flatten()
}
