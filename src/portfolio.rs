//! Portfolio valuation for market-priced holdings
//!
//! Prices come from the live market-data collaborator; valuation here is
//! plain arithmetic over the concrete numbers it hands over.

use serde::{Deserialize, Serialize};

/// One holding with its current market price
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: String,
    pub quantity: f64,
    /// Current price per unit, local currency
    pub price: f64,
}

impl Holding {
    /// Market value of the position
    pub fn value(&self) -> f64 {
        self.quantity * self.price
    }
}

/// A valued position within a portfolio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub symbol: String,
    pub quantity: f64,
    pub price: f64,
    pub value: f64,
    /// Share of the portfolio's total value, percent (0 when the portfolio
    /// is worthless, never NaN)
    pub weight_pct: f64,
}

/// Valuation of a whole portfolio at current prices
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioValuation {
    pub total_value: f64,
    pub positions: Vec<Position>,
}

/// Value every holding at its current price
pub fn value_portfolio(holdings: &[Holding]) -> PortfolioValuation {
    let total_value: f64 = holdings.iter().map(Holding::value).sum();

    let positions = holdings
        .iter()
        .map(|h| {
            let value = h.value();
            Position {
                symbol: h.symbol.clone(),
                quantity: h.quantity,
                price: h.price,
                value,
                weight_pct: if total_value > 0.0 {
                    value / total_value * 100.0
                } else {
                    0.0
                },
            }
        })
        .collect();

    PortfolioValuation {
        total_value,
        positions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn holdings() -> Vec<Holding> {
        vec![
            Holding { symbol: "BTC".into(), quantity: 0.5, price: 60_000.0 },
            Holding { symbol: "ETH".into(), quantity: 4.0, price: 2_500.0 },
        ]
    }

    #[test]
    fn test_total_is_quantity_times_price_summed() {
        let valuation = value_portfolio(&holdings());
        assert_relative_eq!(valuation.total_value, 40_000.0, epsilon = 1e-9);
        assert_relative_eq!(valuation.positions[0].value, 30_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_weights_sum_to_hundred() {
        let valuation = value_portfolio(&holdings());
        let weight_sum: f64 = valuation.positions.iter().map(|p| p.weight_pct).sum();
        assert_relative_eq!(weight_sum, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_portfolio_has_zero_weights_not_nan() {
        let valuation = value_portfolio(&[Holding {
            symbol: "DOGE".into(),
            quantity: 100.0,
            price: 0.0,
        }]);

        assert_eq!(valuation.total_value, 0.0);
        assert_eq!(valuation.positions[0].weight_pct, 0.0);
    }
}
