//! # budget — Daily Budget Guard
//!
//! Last gate before a new position lands in the portfolio.  The daily budget
//! caps the cost of each individual purchase; it is checked at creation time
//! only and never re-applied to positions already held.

use tracing::{info, warn};

use crate::error::DashboardError;

// ─── Decision ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetDecision {
    Approved { cost: f64, remaining: f64 },
    Blocked { cost: f64, budget: f64 },
}

impl BudgetDecision {
    /// Turn a block into the user-facing rejection.
    pub fn into_result(self) -> Result<f64, DashboardError> {
        match self {
            BudgetDecision::Approved { cost, .. } => Ok(cost),
            BudgetDecision::Blocked { cost, budget } => {
                Err(DashboardError::OverBudget { cost, budget })
            }
        }
    }
}

// ─── Pre-Purchase Check ───────────────────────────────────────────────────────

/// Approve `shares × price` against `daily_budget`.  A cost equal to the
/// budget is approved.
pub fn check_purchase(shares: f64, price: f64, daily_budget: f64) -> BudgetDecision {
    let cost = shares * price;

    if cost > daily_budget {
        warn!(cost, daily_budget, "⛔ Purchase blocked: over daily budget");
        return BudgetDecision::Blocked { cost, budget: daily_budget };
    }

    info!(cost, daily_budget, "✅ Purchase within budget");
    BudgetDecision::Approved { cost, remaining: daily_budget - cost }
}
