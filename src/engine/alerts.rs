//! # engine::alerts
//!
//! **Alert Evaluator** — compares each position's return against the gain /
//! loss thresholds.
//!
//! ```text
//! gain_loss_percent ≥ gain threshold  →  GAIN notification
//! gain_loss_percent ≤ loss threshold  →  LOSS notification
//! ```
//!
//! The two checks are independent: with a loss threshold above the gain
//! threshold a single position can fire both.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::metrics::PortfolioMetrics;
use crate::models::Notification;

// ─── Thresholds ───────────────────────────────────────────────────────────────

/// User-configurable alert & budget settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertThresholds {
    /// Maximum cost of a single new purchase.
    pub daily_budget: f64,
    /// Alert when a position is up at least this many percent.
    pub gain_alert_percent: f64,
    /// Alert when a position is at or below this percent (usually negative).
    pub loss_alert_percent: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            daily_budget: 1000.0,
            gain_alert_percent: 10.0,
            loss_alert_percent: -5.0,
        }
    }
}

// ─── Evaluation ───────────────────────────────────────────────────────────────

/// Build the alert batch for `metrics`, in position order (gain before loss
/// for the same position).  Pure apart from fresh ids and timestamps.
pub fn evaluate_alerts(
    metrics: &PortfolioMetrics,
    gain_threshold: f64,
    loss_threshold: f64,
) -> Vec<Notification> {
    let mut alerts = Vec::new();

    for pos in &metrics.positions {
        if pos.gain_loss_percent >= gain_threshold {
            debug!(symbol = %pos.symbol, pct = pos.gain_loss_percent, gain_threshold, "📈 Gain alert");
            alerts.push(Notification::gain(&pos.symbol, pos.gain_loss_percent));
        }
        if pos.gain_loss_percent <= loss_threshold {
            debug!(symbol = %pos.symbol, pct = pos.gain_loss_percent, loss_threshold, "📉 Loss alert");
            alerts.push(Notification::loss(&pos.symbol, pos.gain_loss_percent));
        }
    }

    alerts
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::metrics::PositionMetrics;
    use crate::models::NotificationKind;

    fn metrics_with(pcts: &[(&str, f64)]) -> PortfolioMetrics {
        PortfolioMetrics {
            positions: pcts
                .iter()
                .map(|&(symbol, pct)| PositionMetrics {
                    symbol: symbol.to_string(),
                    shares: 1.0,
                    purchase_price: 100.0,
                    current_price: 100.0 + pct,
                    value: 100.0 + pct,
                    cost: 100.0,
                    gain_loss: pct,
                    gain_loss_percent: pct,
                })
                .collect(),
            ..PortfolioMetrics::default()
        }
    }

    #[test]
    fn test_single_gain_alert() {
        let alerts = evaluate_alerts(&metrics_with(&[("NVDA", 24.48)]), 10.0, -5.0);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, NotificationKind::Gain);
        assert_eq!(alerts[0].symbol.as_deref(), Some("NVDA"));
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        let alerts = evaluate_alerts(&metrics_with(&[("A", 10.0), ("B", -5.0)]), 10.0, -5.0);
        let kinds: Vec<_> = alerts.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec![NotificationKind::Gain, NotificationKind::Loss]);
    }

    #[test]
    fn test_quiet_band() {
        let alerts = evaluate_alerts(&metrics_with(&[("A", 9.99), ("B", -4.99), ("C", 0.0)]), 10.0, -5.0);
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_overlapping_thresholds_fire_both() {
        // loss threshold above gain threshold
        let alerts = evaluate_alerts(&metrics_with(&[("HOG", 3.0)]), 2.0, 5.0);
        let kinds: Vec<_> = alerts.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec![NotificationKind::Gain, NotificationKind::Loss]);
    }

    #[test]
    fn test_loss_message_uses_magnitude() {
        let alerts = evaluate_alerts(&metrics_with(&[("SHOP", -12.5)]), 10.0, -5.0);
        assert_eq!(alerts[0].message, "SHOP is down 12.50%! 📉");
        assert_eq!(alerts[0].percent, Some(-12.5));
    }
}
