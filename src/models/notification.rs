//! # models::notification
//!
//! Defines [`Notification`] — a toast shown on the dashboard.  Alert
//! notifications come from the alert evaluator; info notifications come from
//! position add/remove.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Gain,
    Loss,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    /// Set on gain/loss alerts only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// The gain/loss percent that tripped the alert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn gain(symbol: &str, percent: f64) -> Self {
        Self::alert(
            NotificationKind::Gain,
            symbol,
            percent,
            format!("{symbol} is up {percent:.2}%! 📈"),
        )
    }

    pub fn loss(symbol: &str, percent: f64) -> Self {
        Self::alert(
            NotificationKind::Loss,
            symbol,
            percent,
            format!("{symbol} is down {:.2}%! 📉", percent.abs()),
        )
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: NotificationKind::Info,
            message: message.into(),
            symbol: None,
            percent: None,
            created_at: Utc::now(),
        }
    }

    fn alert(kind: NotificationKind, symbol: &str, percent: f64, message: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message,
            symbol: Some(symbol.to_string()),
            percent: Some(percent),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_messages() {
        assert_eq!(Notification::gain("NVDA", 24.4813).message, "NVDA is up 24.48%! 📈");
        assert_eq!(Notification::loss("HOG", -7.126).message, "HOG is down 7.13%! 📉");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Notification::info("one");
        let b = Notification::info("one");
        assert_ne!(a.id, b.id);
        assert_eq!(a.kind, NotificationKind::Info);
        assert!(a.symbol.is_none());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_value(Notification::gain("SHOP", 12.0)).unwrap();
        assert_eq!(json["kind"], "gain");
        assert_eq!(json["symbol"], "SHOP");
    }
}
