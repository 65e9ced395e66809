//! # engine::market_data
//!
//! **Market Data Loader** — groups the flat bar feed by symbol and orders each
//! series oldest → newest.  Runs once at startup; the result is read-only for
//! the rest of the session.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::DashboardError;
use crate::models::{Bar, ChartPoint};

/// Symbol → bars in ascending timestamp order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketData {
    series: BTreeMap<String, Vec<Bar>>,
}

/// First-vs-last close summary shown above the price chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockPerformance {
    pub first_price: f64,
    pub last_price: f64,
    pub change: f64,
    pub change_percent: f64,
}

impl MarketData {
    /// Group and sort.  Never fails; empty input gives an empty mapping.
    ///
    /// The sort is stable, so bars sharing a timestamp keep feed order.
    pub fn from_bars(bars: impl IntoIterator<Item = Bar>) -> Self {
        let mut series: BTreeMap<String, Vec<Bar>> = BTreeMap::new();
        for bar in bars {
            series.entry(bar.symbol.clone()).or_default().push(bar);
        }
        for bars in series.values_mut() {
            bars.sort_by_key(|b| b.timestamp);
        }

        info!(
            symbols = series.len(),
            bars = series.values().map(Vec::len).sum::<usize>(),
            "📊 Market data loaded"
        );
        Self { series }
    }

    /// Parse a JSON array of bar records, then group them.
    pub fn from_json(text: &str) -> Result<Self, DashboardError> {
        let bars: Vec<Bar> = serde_json::from_str(text)?;
        debug!(records = bars.len(), "Parsed market data document");
        Ok(Self::from_bars(bars))
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn bar_count(&self) -> usize {
        self.series.values().map(Vec::len).sum()
    }

    /// All symbols, ascending.
    pub fn symbols(&self) -> Vec<String> {
        self.series.keys().cloned().collect()
    }

    /// Ordered bars for `symbol`; empty when the symbol is unknown.
    pub fn series(&self, symbol: &str) -> &[Bar] {
        self.series.get(symbol).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Close of the latest bar.
    pub fn latest_close(&self, symbol: &str) -> Option<f64> {
        self.series(symbol).last().map(|b| b.close)
    }

    pub fn chart_series(&self, symbol: &str) -> Vec<ChartPoint> {
        self.series(symbol).iter().map(ChartPoint::from).collect()
    }

    pub fn performance(&self, symbol: &str) -> Option<StockPerformance> {
        let bars = self.series(symbol);
        let first_price = bars.first()?.close;
        let last_price = bars.last()?.close;
        let change = last_price - first_price;
        let change_percent = if first_price != 0.0 {
            change / first_price * 100.0
        } else {
            0.0
        };

        Some(StockPerformance { first_price, last_price, change, change_percent })
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
