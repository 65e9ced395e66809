//! # controller
//!
//! [`Dashboard`] owns the [`AppState`] and is the only thing that mutates it.
//! Each [`Intent`] is applied in full before the next one is read, then the
//! derived views are recomputed:
//!
//! ```text
//! load / add / remove      → metrics → alerts → notifications
//! gain / loss threshold    →           alerts → notifications
//! daily budget, select     → (no recompute)
//! ```
//!
//! [`run_event_loop`] drives a `Dashboard` from an `mpsc` intent channel on a
//! single task; renderers follow along on the broadcast channel.

use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::DashboardConfig;
use crate::engine::alerts::evaluate_alerts;
use crate::engine::market_data::MarketData;
use crate::engine::metrics::compute_metrics;
use crate::error::DashboardError;
use crate::events::{DashboardEvent, Intent};
use crate::models::{Notification, PositionInput};
use crate::portfolio::Portfolio;
use crate::state::{AppState, LoadState};

/// Buffered events per renderer before it starts lagging.
const BROADCAST_CAPACITY: usize = 256;

#[derive(Clone, Copy)]
enum Threshold {
    DailyBudget,
    Gain,
    Loss,
}

impl Threshold {
    fn name(self) -> &'static str {
        match self {
            Threshold::DailyBudget => "daily budget",
            Threshold::Gain => "gain alert",
            Threshold::Loss => "loss alert",
        }
    }
}

// ─── Dashboard ────────────────────────────────────────────────────────────────

pub struct Dashboard {
    state: AppState,
    broadcast_tx: broadcast::Sender<String>,
}

impl Dashboard {
    pub fn new(config: &DashboardConfig, portfolio: Portfolio) -> Self {
        let (broadcast_tx, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self {
            state: AppState::new(config, portfolio),
            broadcast_tx,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.broadcast_tx.subscribe()
    }

    /// Install the market data and leave the loading phase.  Only the first
    /// call has any effect.
    pub fn load(&mut self, market_data: MarketData) {
        if self.state.is_ready() {
            warn!("Market data already loaded — ignoring reload");
            return;
        }

        self.state.market_data = market_data;
        self.state.load_state = LoadState::Ready;
        info!(symbols = self.state.market_data.symbols().len(), "✅ Dashboard ready");

        self.broadcast(&DashboardEvent::Ready {
            symbols: self.state.market_data.symbols(),
            bar_count: self.state.market_data.bar_count(),
        });
        self.broadcast_selection();
        if self.refresh_metrics() {
            self.broadcast_notifications();
        }
    }

    /// Apply one user intent.
    pub fn handle(&mut self, intent: Intent) -> Result<(), DashboardError> {
        if !self.state.is_ready() {
            return Err(DashboardError::NotReady);
        }

        match intent {
            Intent::SelectSymbol { symbol } => {
                self.select_symbol(&symbol);
                Ok(())
            }
            Intent::SetDailyBudget { value } => self.set_threshold(Threshold::DailyBudget, value),
            Intent::SetGainAlert { value } => self.set_threshold(Threshold::Gain, value),
            Intent::SetLossAlert { value } => self.set_threshold(Threshold::Loss, value),
            Intent::AddPosition { input } => self.add_position(&input),
            Intent::RemovePosition { index } => self.remove_position(index),
            Intent::DismissNotification { id } => self.dismiss_notification(id),
        }
    }

    // ─── Intent Handlers ──────────────────────────────────────────────────────

    fn select_symbol(&mut self, symbol: &str) {
        self.state.selected_symbol = symbol.trim().to_uppercase();
        debug!(symbol = %self.state.selected_symbol, "Symbol selected");
        self.broadcast_selection();
    }

    fn set_threshold(&mut self, which: Threshold, value: f64) -> Result<(), DashboardError> {
        if !value.is_finite() {
            return Err(DashboardError::InvalidThreshold { name: which.name(), value });
        }

        let thresholds = &mut self.state.thresholds;
        let slot = match which {
            Threshold::DailyBudget => &mut thresholds.daily_budget,
            Threshold::Gain => &mut thresholds.gain_alert_percent,
            Threshold::Loss => &mut thresholds.loss_alert_percent,
        };
        if *slot == value {
            return Ok(());
        }
        *slot = value;
        info!(threshold = which.name(), value, "⚙️ Threshold changed");

        self.broadcast(&DashboardEvent::ThresholdsChanged {
            thresholds: self.state.thresholds,
        });
        if !matches!(which, Threshold::DailyBudget) && self.refresh_alerts() {
            self.broadcast_notifications();
        }
        Ok(())
    }

    fn add_position(&mut self, input: &PositionInput) -> Result<(), DashboardError> {
        let budget = self.state.thresholds.daily_budget;
        let position = match self.state.portfolio.add_position(input, budget) {
            Ok(position) => position.clone(),
            Err(err) => {
                self.broadcast(&DashboardEvent::PositionRejected { reason: err.to_string() });
                return Err(err);
            }
        };

        self.state.notifications.push(Notification::info(format!(
            "Added {} shares of {}",
            input.shares.trim(),
            position.symbol
        )));
        self.broadcast(&DashboardEvent::PositionAdded { position });
        self.refresh_metrics();
        self.broadcast_notifications();
        Ok(())
    }

    fn remove_position(&mut self, index: usize) -> Result<(), DashboardError> {
        let position = self.state.portfolio.remove_position(index)?;

        self.state.notifications.push(Notification::info(format!(
            "Removed {} from portfolio",
            position.symbol
        )));
        self.broadcast(&DashboardEvent::PositionRemoved { index, position });
        self.refresh_metrics();
        self.broadcast_notifications();
        Ok(())
    }

    fn dismiss_notification(&mut self, id: Uuid) -> Result<(), DashboardError> {
        self.state.notifications.dismiss(id)?;
        self.broadcast_notifications();
        Ok(())
    }

    // ─── Recompute ────────────────────────────────────────────────────────────

    /// Recompute metrics, then alerts.  Returns `true` if alerts were added.
    fn refresh_metrics(&mut self) -> bool {
        let metrics = compute_metrics(self.state.portfolio.positions(), &self.state.market_data);
        self.broadcast(&DashboardEvent::MetricsUpdated {
            allocation: metrics.allocation(),
            metrics: Box::new(metrics.clone()),
        });
        self.state.metrics = Some(metrics);
        self.refresh_alerts()
    }

    /// Re-run the alert evaluator over the current metrics.  Returns `true`
    /// if alerts were added.
    fn refresh_alerts(&mut self) -> bool {
        let Some(metrics) = &self.state.metrics else {
            return false;
        };
        let thresholds = self.state.thresholds;
        let batch = evaluate_alerts(
            metrics,
            thresholds.gain_alert_percent,
            thresholds.loss_alert_percent,
        );
        if batch.is_empty() {
            return false;
        }

        info!(count = batch.len(), "🔔 Alerts raised");
        self.state.notifications.prepend_all(batch);
        true
    }

    // ─── Broadcast ────────────────────────────────────────────────────────────

    /// Send to every renderer.  No receivers is not an error (headless mode).
    fn broadcast(&self, event: &DashboardEvent) {
        let _ = self.broadcast_tx.send(event.to_json());
    }

    fn broadcast_notifications(&self) {
        self.broadcast(&DashboardEvent::NotificationsChanged {
            notifications: self.state.notifications.snapshot(),
        });
    }

    fn broadcast_selection(&self) {
        let symbol = &self.state.selected_symbol;
        self.broadcast(&DashboardEvent::SymbolSelected {
            symbol: symbol.clone(),
            chart: self.state.market_data.chart_series(symbol),
            performance: self.state.market_data.performance(symbol),
        });
    }
}

// ─── Event Loop ───────────────────────────────────────────────────────────────

/// Apply intents one at a time until every sender is dropped, then hand the
/// dashboard back.
pub async fn run_event_loop(mut dashboard: Dashboard, mut intents: mpsc::Receiver<Intent>) -> Dashboard {
    info!("🎛️ Dashboard event loop started");

    while let Some(intent) = intents.recv().await {
        debug!(?intent, "Intent received");
        if let Err(err) = dashboard.handle(intent) {
            if err.is_rejection() {
                info!(error = %err, "Intent rejected");
            } else {
                warn!(error = %err, "Intent failed");
            }
        }
    }

    info!("Intent channel closed — event loop stopped");
    dashboard
}

// ─── Tests ────────────────────────────────────────────────────────────────────
