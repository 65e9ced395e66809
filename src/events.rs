//! # events
//!
//! [`Intent`] — what the rendering layer asks the core to do, and
//! [`DashboardEvent`] — what the core broadcasts back.
//!
//! Events go out over `tokio::sync::broadcast::Sender<String>` already
//! serialized to JSON, so renderers never need the Rust types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::alerts::AlertThresholds;
use crate::engine::market_data::StockPerformance;
use crate::engine::metrics::{AllocationSlice, PortfolioMetrics};
use crate::models::{ChartPoint, Notification, Position, PositionInput};

// ─── Intents (renderer → core) ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    SelectSymbol { symbol: String },
    SetDailyBudget { value: f64 },
    SetGainAlert { value: f64 },
    SetLossAlert { value: f64 },
    AddPosition { input: PositionInput },
    RemovePosition { index: usize },
    DismissNotification { id: Uuid },
}

// ─── Events (core → renderer) ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DashboardEvent {
    /// Market data finished loading — the dashboard can render.
    Ready {
        symbols: Vec<String>,
        bar_count: usize,
    },

    /// Positions or market data changed.
    MetricsUpdated {
        metrics: Box<PortfolioMetrics>,
        allocation: Vec<AllocationSlice>,
    },

    /// The toast list changed (new alerts, info, or a dismissal).
    NotificationsChanged {
        notifications: Vec<Notification>,
    },

    /// Chart data for the newly selected symbol.
    SymbolSelected {
        symbol: String,
        chart: Vec<ChartPoint>,
        performance: Option<StockPerformance>,
    },

    ThresholdsChanged {
        thresholds: AlertThresholds,
    },

    PositionAdded {
        position: Position,
    },

    PositionRemoved {
        index: usize,
        position: Position,
    },

    /// The add-position form was refused; `reason` is shown to the user.
    PositionRejected {
        reason: String,
    },
}

impl DashboardEvent {
    /// Serialize for the broadcast channel.
    #[inline]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"event":"SERIALIZATION_ERROR"}"#.to_string())
    }
}
