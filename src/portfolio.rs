//! # portfolio — Position Management
//!
//! The ordered list of user positions.  New entries pass the form checks and
//! the daily budget guard before they are appended; removal is bounds-checked.
//! A rejected add or a missing index leaves the list untouched.

use tracing::{info, warn};

use crate::budget::check_purchase;
use crate::error::DashboardError;
use crate::models::{Position, PositionInput};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Portfolio {
    positions: Vec<Position>,
}

impl Portfolio {
    pub fn with_positions(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    /// The positions the dashboard opens with.
    pub fn starter() -> Self {
        Self::with_positions(vec![
            Position::new("NVDA", 10.0, 120.50),
            Position::new("HOG", 50.0, 32.00),
            Position::new("SHOP", 20.0, 85.00),
        ])
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Validate `input`, check it against `daily_budget`, then append.
    pub fn add_position(
        &mut self,
        input: &PositionInput,
        daily_budget: f64,
    ) -> Result<&Position, DashboardError> {
        let position = input.parse().inspect_err(|e| {
            warn!(error = %e, "Position input rejected");
        })?;

        check_purchase(position.shares, position.purchase_price, daily_budget).into_result()?;

        info!(
            symbol = %position.symbol,
            shares = position.shares,
            price  = position.purchase_price,
            "➕ Position added"
        );
        self.positions.push(position);
        let idx = self.positions.len() - 1;
        Ok(&self.positions[idx])
    }

    /// Remove and return the position at `index`.
    pub fn remove_position(&mut self, index: usize) -> Result<Position, DashboardError> {
        if index >= self.positions.len() {
            return Err(DashboardError::PositionNotFound {
                index,
                len: self.positions.len(),
            });
        }

        let removed = self.positions.remove(index);
        info!(symbol = %removed.symbol, index, "➖ Position removed");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_within_budget() {
        let mut portfolio = Portfolio::default();
        let added = portfolio
            .add_position(&PositionInput::new("hog", "5", "30"), 1000.0)
            .unwrap()
            .clone();

        assert_eq!(added, Position::new("HOG", 5.0, 30.0));
        assert_eq!(portfolio.positions(), &[added]);
    }

    #[test]
    fn test_over_budget_leaves_list_unchanged() {
        let mut portfolio = Portfolio::starter();
        let before = portfolio.clone();

        let err = portfolio
            .add_position(&PositionInput::new("AAPL", "10", "150"), 1000.0)
            .unwrap_err();

        assert!(matches!(err, DashboardError::OverBudget { cost, budget } if cost == 1500.0 && budget == 1000.0));
        assert_eq!(portfolio, before);
    }

    #[test]
    fn test_invalid_input_leaves_list_unchanged() {
        let mut portfolio = Portfolio::starter();
        let before = portfolio.clone();

        assert!(portfolio.add_position(&PositionInput::new("AAPL", "", "1"), 1000.0).is_err());
        assert!(portfolio.add_position(&PositionInput::new("AAPL", "x", "1"), 1000.0).is_err());
        assert_eq!(portfolio, before);
    }

    #[test]
    fn test_remove_in_range() {
        let mut portfolio = Portfolio::starter();
        let removed = portfolio.remove_position(1).unwrap();

        assert_eq!(removed.symbol, "HOG");
        let symbols: Vec<&str> = portfolio.positions().iter().map(|p| p.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["NVDA", "SHOP"]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut portfolio = Portfolio::starter();
        let err = portfolio.remove_position(3).unwrap_err();

        assert!(matches!(err, DashboardError::PositionNotFound { index: 3, len: 3 }));
        assert_eq!(portfolio.len(), 3);
    }
}
