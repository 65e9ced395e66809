//! # engine
//!
//! The pure computations behind the dashboard: grouping market data,
//! valuing the portfolio, and raising threshold alerts.

pub mod alerts;
pub mod market_data;
pub mod metrics;

pub use alerts::{evaluate_alerts, AlertThresholds};
pub use market_data::{MarketData, StockPerformance};
pub use metrics::{compute_metrics, AllocationSlice, PortfolioMetrics, PositionMetrics};
