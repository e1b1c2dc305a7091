use std::fmt::Write as _;

use polars::prelude::*;

use crate::errors::Error;
use crate::models::bar_series::BarSeries;

/// Converts a [`BarSeries`] into a Polars `DataFrame`.
///
/// Columns: `date` (millisecond datetime), `open`, `high`, `low`, `close`,
/// `volume`, `adj_close`. Row order follows the series, oldest first.
pub fn bars_to_dataframe(series: &BarSeries) -> Result<DataFrame, Error> {
    let bars = &series.bars;

    let date = Column::new(
        "date".into(),
        bars.iter()
            .map(|bar| bar.timestamp.timestamp_millis())
            .collect::<Vec<i64>>(),
    )
    .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;

    let columns = vec![
        date,
        Column::new(
            "open".into(),
            bars.iter().map(|bar| bar.open).collect::<Vec<f64>>(),
        ),
        Column::new(
            "high".into(),
            bars.iter().map(|bar| bar.high).collect::<Vec<f64>>(),
        ),
        Column::new(
            "low".into(),
            bars.iter().map(|bar| bar.low).collect::<Vec<f64>>(),
        ),
        Column::new(
            "close".into(),
            bars.iter().map(|bar| bar.close).collect::<Vec<f64>>(),
        ),
        Column::new(
            "volume".into(),
            bars.iter().map(|bar| bar.volume).collect::<Vec<u64>>(),
        ),
        Column::new(
            "adj_close".into(),
            bars.iter()
                .map(|bar| bar.adj_close)
                .collect::<Vec<Option<f64>>>(),
        ),
    ];

    Ok(DataFrame::new(columns)?)
}

/// A structural summary of a frame: per column, its name, non-null count and
/// dtype. The counterpart of the row data printed by the demo binary.
pub fn frame_info(df: &DataFrame) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} rows, {} columns", df.height(), df.width());
    for column in df.get_columns() {
        let non_null = df.height() - column.null_count();
        let _ = writeln!(
            out,
            "{:<10} {:>6} non-null  {}",
            column.name().as_str(),
            non_null,
            column.dtype()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{bar::Bar, period::Period};
    use chrono::DateTime;

    fn sample_series() -> BarSeries {
        let bar = |ts: i64, close: f64, adj: Option<f64>| Bar {
            timestamp: DateTime::from_timestamp(ts, 0).unwrap(),
            open: close - 1.0,
            high: close + 1.0,
            low: close - 2.0,
            close,
            volume: 1_000,
            adj_close: adj,
        };

        BarSeries {
            symbol: "AAPL".to_string(),
            period: Period::OneMonth,
            bars: vec![
                bar(1704205800, 185.64, Some(184.92)),
                bar(1704292200, 184.25, Some(183.54)),
                bar(1704378600, 181.91, None),
            ],
        }
    }

    #[test]
    fn test_dataframe_shape_and_columns() {
        let df = bars_to_dataframe(&sample_series()).unwrap();

        assert_eq!(df.shape(), (3, 7));
        let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(
            names,
            vec!["date", "open", "high", "low", "close", "volume", "adj_close"]
        );
    }

    #[test]
    fn test_date_column_is_datetime() {
        let df = bars_to_dataframe(&sample_series()).unwrap();

        assert_eq!(
            df.column("date").unwrap().dtype(),
            &DataType::Datetime(TimeUnit::Milliseconds, None)
        );
    }

    #[test]
    fn test_missing_adjusted_close_becomes_null() {
        let df = bars_to_dataframe(&sample_series()).unwrap();

        assert_eq!(df.column("adj_close").unwrap().null_count(), 1);
        assert_eq!(df.column("close").unwrap().null_count(), 0);
    }

    #[test]
    fn test_empty_series_converts_to_empty_frame() {
        let empty = BarSeries {
            symbol: "AAPL".to_string(),
            period: Period::OneMonth,
            bars: vec![],
        };

        let df = bars_to_dataframe(&empty).unwrap();

        assert_eq!(df.shape(), (0, 7));
    }

    #[test]
    fn test_frame_info_lists_every_column() {
        let df = bars_to_dataframe(&sample_series()).unwrap();

        let info = frame_info(&df);

        assert!(info.starts_with("3 rows, 7 columns"));
        for name in ["date", "open", "high", "low", "close", "volume", "adj_close"] {
            assert!(info.contains(name), "missing column {name} in:\n{info}");
        }
        assert!(info.contains("2 non-null"), "adj_close count missing:\n{info}");
    }
}
