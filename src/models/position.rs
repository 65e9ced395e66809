//! # models::position
//!
//! Defines [`Position`] — a quantity of a symbol held at a recorded purchase
//! price — and [`PositionInput`], the raw add-position form as typed.
//!
//! ## Why separate the two?
//! `PositionInput` = what the user typed (strings, possibly empty or junk)
//! `Position`      = a checked entry that lives in the portfolio list

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

// ─── Position ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Upper-cased ticker symbol.
    pub symbol: String,
    /// Number of shares held (≥ 0, fractional allowed).
    pub shares: f64,
    /// Price paid per share (≥ 0).
    pub purchase_price: f64,
}

impl Position {
    pub fn new(symbol: &str, shares: f64, purchase_price: f64) -> Self {
        Self {
            symbol: symbol.trim().to_uppercase(),
            shares,
            purchase_price,
        }
    }

    /// Amount paid for the whole position.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.shares * self.purchase_price
    }
}

// ─── PositionInput ────────────────────────────────────────────────────────────

/// The add-position form exactly as the renderer collected it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionInput {
    pub symbol: String,
    pub shares: String,
    pub purchase_price: String,
}

impl PositionInput {
    pub fn new(symbol: &str, shares: &str, purchase_price: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            shares: shares.to_string(),
            purchase_price: purchase_price.to_string(),
        }
    }

    /// Presence and number checks only — the budget is checked separately.
    pub fn parse(&self) -> Result<Position, DashboardError> {
        let symbol = self.symbol.trim();
        if symbol.is_empty() {
            return Err(DashboardError::MissingField("symbol"));
        }
        let shares = parse_amount("shares", &self.shares)?;
        let purchase_price = parse_amount("purchase price", &self.purchase_price)?;

        Ok(Position::new(symbol, shares, purchase_price))
    }
}

fn parse_amount(field: &'static str, raw: &str) -> Result<f64, DashboardError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DashboardError::MissingField(field));
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(DashboardError::InvalidNumber {
            field,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_upper_cases_symbol() {
        let pos = PositionInput::new(" aapl ", "10", "150.25").parse().unwrap();
        assert_eq!(pos, Position { symbol: "AAPL".into(), shares: 10.0, purchase_price: 150.25 });
        assert_eq!(pos.cost(), 1502.5);
    }

    #[test]
    fn test_parse_missing_fields() {
        assert!(matches!(
            PositionInput::new("", "10", "1").parse(),
            Err(DashboardError::MissingField("symbol"))
        ));
        assert!(matches!(
            PositionInput::new("AAPL", "  ", "1").parse(),
            Err(DashboardError::MissingField("shares"))
        ));
        assert!(matches!(
            PositionInput::new("AAPL", "1", "").parse(),
            Err(DashboardError::MissingField("purchase price"))
        ));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        for bad in ["ten", "NaN", "inf", "-3"] {
            let err = PositionInput::new("AAPL", bad, "1").parse().unwrap_err();
            assert!(matches!(err, DashboardError::InvalidNumber { field: "shares", .. }), "{bad}");
        }
    }

    #[test]
    fn test_zero_shares_is_a_number() {
        let pos = PositionInput::new("SHOP", "0", "85").parse().unwrap();
        assert_eq!(pos.shares, 0.0);
    }
}
