//! # config — Dashboard settings from environment variables
//!
//! `.env` is loaded by `main` via `dotenvy` before this runs.  Every key is
//! optional; unset or unparsable values fall back to the defaults.

use std::path::PathBuf;

use crate::engine::alerts::AlertThresholds;

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Initial budget / alert thresholds (the user can change them later).
    pub thresholds: AlertThresholds,
    /// Symbol charted when the dashboard opens.
    pub default_symbol: String,
    /// JSON bar file; `None` = embedded sample data.
    pub market_data_path: Option<PathBuf>,
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        let defaults = AlertThresholds::default();
        Self {
            thresholds: AlertThresholds {
                daily_budget:       env_f64("DASHBOARD_DAILY_BUDGET", defaults.daily_budget),
                gain_alert_percent: env_f64("DASHBOARD_GAIN_ALERT_PCT", defaults.gain_alert_percent),
                loss_alert_percent: env_f64("DASHBOARD_LOSS_ALERT_PCT", defaults.loss_alert_percent),
            },
            default_symbol: std::env::var("DASHBOARD_DEFAULT_SYMBOL")
                .map(|s| s.trim().to_uppercase())
                .unwrap_or_else(|_| "NVDA".to_string()),
            market_data_path: std::env::var("MARKET_DATA_PATH").ok().map(PathBuf::from),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            thresholds: AlertThresholds::default(),
            default_symbol: "NVDA".to_string(),
            market_data_path: None,
        }
    }
}

fn env_f64(key: &str, default: f64) -> f64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}
