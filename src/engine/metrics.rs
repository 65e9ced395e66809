//! # engine::metrics
//!
//! **Portfolio Metrics Engine** — valuation, cost basis and return per
//! position and in aggregate.
//!
//! ```text
//! value            = shares × latest close
//! cost             = shares × purchase price
//! gain_loss        = value − cost
//! gain_loss_pct    = (latest close − purchase price) / purchase price × 100
//! total_return_pct = (total value − total cost) / total cost × 100
//! ```
//!
//! A symbol with no bars degrades every derived field of that position to
//! zero instead of failing; the zeros show up in the positions table.

use serde::Serialize;
use tracing::debug;

use crate::engine::market_data::MarketData;
use crate::models::Position;

// ─── Output Types ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionMetrics {
    pub symbol: String,
    pub shares: f64,
    pub purchase_price: f64,
    pub current_price: f64,
    pub value: f64,
    pub cost: f64,
    pub gain_loss: f64,
    pub gain_loss_percent: f64,
}

impl PositionMetrics {
    fn zeroed(position: &Position) -> Self {
        Self {
            symbol: position.symbol.clone(),
            shares: position.shares,
            purchase_price: position.purchase_price,
            current_price: 0.0,
            value: 0.0,
            cost: 0.0,
            gain_loss: 0.0,
            gain_loss_percent: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMetrics {
    pub positions: Vec<PositionMetrics>,
    pub total_value: f64,
    pub total_cost: f64,
    pub total_gain_loss: f64,
    pub total_gain_loss_percent: f64,
}

/// One wedge of the allocation pie.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    pub symbol: String,
    pub value: f64,
    pub weight_percent: f64,
}

// ─── Computation ──────────────────────────────────────────────────────────────

/// Value a single position against the latest close of its symbol.
pub fn position_metrics(position: &Position, market: &MarketData) -> PositionMetrics {
    let Some(current_price) = market.latest_close(&position.symbol) else {
        debug!(symbol = %position.symbol, "No market data — position zeroed");
        return PositionMetrics::zeroed(position);
    };

    let value = position.shares * current_price;
    let cost = position.cost();
    let gain_loss_percent = if position.purchase_price != 0.0 {
        (current_price - position.purchase_price) / position.purchase_price * 100.0
    } else {
        0.0
    };

    PositionMetrics {
        symbol: position.symbol.clone(),
        shares: position.shares,
        purchase_price: position.purchase_price,
        current_price,
        value,
        cost,
        gain_loss: value - cost,
        gain_loss_percent,
    }
}

/// Recompute the whole portfolio.  Pure: same inputs, same output.
pub fn compute_metrics(positions: &[Position], market: &MarketData) -> PortfolioMetrics {
    let positions: Vec<PositionMetrics> = positions
        .iter()
        .map(|p| position_metrics(p, market))
        .collect();

    let total_value: f64 = positions.iter().map(|p| p.value).sum();
    let total_cost: f64 = positions.iter().map(|p| p.cost).sum();
    let total_gain_loss: f64 = positions.iter().map(|p| p.gain_loss).sum();
    let total_gain_loss_percent = if total_cost > 0.0 {
        (total_value - total_cost) / total_cost * 100.0
    } else {
        0.0
    };

    debug!(
        positions = positions.len(),
        total_value, total_cost, total_gain_loss_percent,
        "Portfolio metrics recomputed"
    );

    PortfolioMetrics {
        positions,
        total_value,
        total_cost,
        total_gain_loss,
        total_gain_loss_percent,
    }
}

impl PortfolioMetrics {
    /// Share of total value held in each position, in position order.
    pub fn allocation(&self) -> Vec<AllocationSlice> {
        self.positions
            .iter()
            .map(|p| AllocationSlice {
                symbol: p.symbol.clone(),
                value: p.value,
                weight_percent: if self.total_value > 0.0 {
                    p.value / self.total_value * 100.0
                } else {
                    0.0
                },
            })
            .collect()
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::market_data::tests::bar;

    const EPS: f64 = 1e-9;

    fn market() -> MarketData {
        MarketData::from_bars(vec![
            bar("NVDA", 0, 118.0),
            bar("NVDA", 3, 150.0),
            bar("HOG", 3, 28.0),
            bar("SHOP", 3, 85.0),
        ])
    }

    #[test]
    fn test_nvda_example() {
        let metrics = compute_metrics(&[Position::new("NVDA", 10.0, 120.50)], &market());
        let nvda = &metrics.positions[0];

        assert_eq!(nvda.current_price, 150.0);
        assert_eq!(nvda.value, 1500.0);
        assert_eq!(nvda.cost, 1205.0);
        assert_eq!(nvda.gain_loss, 295.0);
        assert!((nvda.gain_loss_percent - 24.48).abs() < 0.01);
    }

    #[test]
    fn test_missing_symbol_is_zeroed() {
        let metrics = compute_metrics(&[Position::new("TSLA", 5.0, 200.0)], &market());
        let tsla = &metrics.positions[0];

        assert_eq!(tsla.symbol, "TSLA");
        assert_eq!(tsla.current_price, 0.0);
        assert_eq!(tsla.value, 0.0);
        assert_eq!(tsla.gain_loss, 0.0);
        assert_eq!(tsla.gain_loss_percent, 0.0);
        assert_eq!(metrics.total_gain_loss_percent, 0.0);
    }

    #[test]
    fn test_totals_are_sums() {
        let positions = vec![
            Position::new("NVDA", 10.0, 120.50),
            Position::new("HOG", 50.0, 32.0),
            Position::new("SHOP", 20.0, 85.0),
            Position::new("TSLA", 1.0, 10.0),
        ];
        let metrics = compute_metrics(&positions, &market());

        let value: f64 = metrics.positions.iter().map(|p| p.value).sum();
        let cost: f64 = metrics.positions.iter().map(|p| p.cost).sum();
        assert!((metrics.total_value - value).abs() < EPS);
        assert!((metrics.total_cost - cost).abs() < EPS);
        assert!((metrics.total_value - (1500.0 + 1400.0 + 1700.0)).abs() < EPS);
        assert!((metrics.total_cost - (1205.0 + 1600.0 + 1700.0)).abs() < EPS);
        assert!((metrics.total_gain_loss - (metrics.total_value - metrics.total_cost)).abs() < EPS);

        for p in metrics.positions.iter().filter(|p| p.current_price > 0.0) {
            assert_eq!(p.value, p.shares * p.current_price);
        }
    }

    #[test]
    fn test_zero_total_cost_gives_zero_percent() {
        let metrics = compute_metrics(&[Position::new("NVDA", 10.0, 0.0)], &market());
        assert_eq!(metrics.total_value, 1500.0);
        assert_eq!(metrics.total_cost, 0.0);
        assert_eq!(metrics.total_gain_loss_percent, 0.0);
        assert_eq!(metrics.positions[0].gain_loss_percent, 0.0);
    }

    #[test]
    fn test_empty_portfolio() {
        let metrics = compute_metrics(&[], &market());
        assert!(metrics.positions.is_empty());
        assert_eq!(metrics, PortfolioMetrics::default());
    }

    #[test]
    fn test_allocation_weights() {
        let positions = vec![Position::new("NVDA", 10.0, 100.0), Position::new("SHOP", 20.0, 80.0)];
        let slices = compute_metrics(&positions, &market()).allocation();

        assert_eq!(slices.len(), 2);
        assert!((slices[0].weight_percent - 1500.0 / 3200.0 * 100.0).abs() < EPS);
        let total: f64 = slices.iter().map(|s| s.weight_percent).sum();
        assert!((total - 100.0).abs() < EPS);

        let empty = compute_metrics(&[Position::new("TSLA", 1.0, 1.0)], &market()).allocation();
        assert_eq!(empty[0].weight_percent, 0.0);
    }
}
