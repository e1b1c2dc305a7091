use crate::models::request_params::HistoryRequest;

/// Builds the query string pairs for a chart request.
///
/// `includeAdjustedClose` is always requested so the adjusted close series
/// is present whenever the provider can supply it.
pub fn construct_params(request: &HistoryRequest) -> Vec<(String, String)> {
    vec![
        ("range".to_string(), request.period.as_str().to_string()),
        ("interval".to_string(), request.interval.as_str().to_string()),
        ("includeAdjustedClose".to_string(), "true".to_string()),
    ]
}
