//! # state
//!
//! [`AppState`] — everything the dashboard shows, in one struct owned by the
//! controller.  Derived fields (`metrics`) are replaced wholesale on every
//! recompute, never patched in place.

use serde::Serialize;

use crate::config::DashboardConfig;
use crate::engine::alerts::AlertThresholds;
use crate::engine::market_data::MarketData;
use crate::engine::metrics::PortfolioMetrics;
use crate::notifications::NotificationFeed;
use crate::portfolio::Portfolio;

// ─── LoadState ────────────────────────────────────────────────────────────────

/// `Loading` → `Ready`; `Ready` lasts for the rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoadState {
    Loading,
    Ready,
}

// ─── AppState ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct AppState {
    pub load_state: LoadState,

    // ── Inputs ────────────────────────────────────────────────────────────────
    pub market_data: MarketData,
    pub portfolio: Portfolio,
    pub thresholds: AlertThresholds,
    pub selected_symbol: String,

    // ── Derived ───────────────────────────────────────────────────────────────
    /// `None` until market data is loaded.
    pub metrics: Option<PortfolioMetrics>,

    // ── Output ────────────────────────────────────────────────────────────────
    pub notifications: NotificationFeed,
}

impl AppState {
    pub fn new(config: &DashboardConfig, portfolio: Portfolio) -> Self {
        Self {
            load_state: LoadState::Loading,
            market_data: MarketData::default(),
            portfolio,
            thresholds: config.thresholds,
            selected_symbol: config.default_symbol.clone(),
            metrics: None,
            notifications: NotificationFeed::new(),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.load_state == LoadState::Ready
    }
}
