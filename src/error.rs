//! # error
//!
//! Centralised dashboard error type.
//!
//! Every intent handler returns `Result<_, DashboardError>`.  Two families
//! live here: **rejections** (bad form input, budget overage) that the
//! renderer shows to the user verbatim, and lookups that found nothing.
//! Missing market data is *not* an error — metrics degrade to zero instead.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// A required form field was left empty.
    #[error("Please fill in the {0} field")]
    MissingField(&'static str),

    /// A numeric form field did not hold a finite, non-negative number.
    #[error("'{value}' is not a valid {field}")]
    InvalidNumber { field: &'static str, value: String },

    /// The purchase would cost more than the configured daily budget.
    #[error("This purchase (${cost:.2}) exceeds your daily budget (${budget:.2})")]
    OverBudget { cost: f64, budget: f64 },

    /// A threshold setting was NaN or infinite.
    #[error("Invalid {name} threshold: {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    /// `remove_position` was given an index outside the list.
    #[error("No position at index {index} (portfolio holds {len})")]
    PositionNotFound { index: usize, len: usize },

    /// `dismiss` was given an id that is not in the feed.
    #[error("Notification not found: {0}")]
    NotificationNotFound(Uuid),

    /// An intent arrived before market data finished loading.
    #[error("Market data is still loading")]
    NotReady,

    /// The market data document could not be parsed.
    #[error("Invalid market data: {0}")]
    MarketData(#[from] serde_json::Error),
}

impl DashboardError {
    /// `true` for validation rejections: the caller's input was refused and
    /// nothing was mutated.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            DashboardError::MissingField(_)
                | DashboardError::InvalidNumber { .. }
                | DashboardError::OverBudget { .. }
                | DashboardError::InvalidThreshold { .. }
        )
    }
}
