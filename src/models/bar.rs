//! # models::bar
//!
//! Defines [`Bar`], one OHLCV(+VWAP) record of the static market data feed,
//! and [`ChartPoint`], the flattened shape the chart renderer consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single historical price bar.
///
/// Bars are immutable once loaded.  The feed spells the timestamp field
/// `time` (Alpaca export format), so it is renamed on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// The ticker symbol, e.g. `"NVDA"`.
    pub symbol: String,

    /// Start of the bar interval (UTC).
    #[serde(rename = "time")]
    pub timestamp: DateTime<Utc>,

    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,

    /// Volume-weighted average price over the interval.
    pub vwap: f64,
}

// ─── ChartPoint ───────────────────────────────────────────────────────────────

/// One point of the price / volume chart for the selected symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// X-axis label, `MM/DD/YYYY`.
    pub date: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub vwap: f64,
}

impl From<&Bar> for ChartPoint {
    fn from(bar: &Bar) -> Self {
        Self {
            date: bar.timestamp.format("%m/%d/%Y").to_string(),
            timestamp: bar.timestamp.timestamp_millis(),
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
            vwap: bar.vwap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_reads_time_field() {
        let json = r#"{
            "symbol": "NVDA", "time": "2024-10-01T04:00:00Z",
            "open": 121.7, "high": 122.4, "low": 115.8, "close": 117.0,
            "volume": 302094485, "vwap": 118.3
        }"#;
        let bar: Bar = serde_json::from_str(json).unwrap();
        assert_eq!(bar.symbol, "NVDA");
        assert_eq!(bar.timestamp.to_rfc3339(), "2024-10-01T04:00:00+00:00");
        assert_eq!(bar.volume, 302094485.0);
    }

    #[test]
    fn test_chart_point_label() {
        let bar = Bar {
            symbol: "HOG".into(),
            timestamp: "2024-03-07T05:00:00Z".parse().unwrap(),
            open: 1.0, high: 2.0, low: 0.5, close: 1.5, volume: 10.0, vwap: 1.2,
        };
        let point = ChartPoint::from(&bar);
        assert_eq!(point.date, "03/07/2024");
        assert_eq!(point.timestamp, bar.timestamp.timestamp_millis());
        assert_eq!(point.close, 1.5);
    }
}
