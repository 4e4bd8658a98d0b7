//! Monthly breakdown rows and aggregate results for the calculators

use serde::{Deserialize, Serialize};

/// One month of the two-tier currency strategy simulation
///
/// Foreign amounts are in foreign-currency units; `foreign_value_local`
/// re-expresses the accumulated foreign position in local currency at the
/// rate in effect that month (the base rate; this calculator applies
/// appreciation only at the end of the horizon).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwoTierMonthRow {
    pub month: u32,
    pub local_balance: f64,
    pub local_interest: f64,
    /// Foreign units bought with this month's local interest
    pub converted_amount: f64,
    /// Cumulative converted principal, foreign units
    pub foreign_principal: f64,
    /// Interest earned on the foreign principal this month, foreign units
    pub foreign_interest: f64,
    pub exchange_rate: f64,
    pub foreign_value_local: f64,
    /// Local + foreign interest to date, valued in local currency
    pub total_earnings: f64,
}

/// Aggregate result of the two-tier currency strategy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwoTierResult {
    /// Baseline: same principal/rate/contribution fully compounded locally
    pub compound_earnings: f64,

    /// Total earnings of the two-tier strategy in local currency
    pub two_tier_earnings: f64,

    pub final_exchange_rate: f64,

    /// Local-platform interest kept over the horizon
    pub total_local_interest: f64,

    /// Foreign-platform interest over the horizon, foreign units
    pub total_foreign_interest: f64,

    /// Converted principal at the end of the horizon, foreign units
    pub total_foreign_principal: f64,

    /// Foreign position (principal + interest) at the final exchange rate
    pub foreign_value_local: f64,

    /// Portion of earnings attributable purely to exchange-rate movement
    pub currency_gain: f64,

    pub monthly: Vec<TwoTierMonthRow>,
}

impl TwoTierResult {
    /// Earnings advantage of the two-tier strategy over local compounding
    pub fn advantage(&self) -> f64 {
        self.two_tier_earnings - self.compound_earnings
    }
}

/// One month of the standalone asset-cycle simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetMonthRow {
    pub month: u32,
    /// Contribution added this month
    pub savings_added: f64,
    /// Purchase outlay this month (0 on non-cycle months)
    pub invested: f64,
    /// Cohort payouts received this month
    pub returns: f64,
    /// Savings balance at the end of the month
    pub balance: f64,
}

/// Aggregate result of the standalone asset-cycle simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetAnalysis {
    pub total_savings_contributed: f64,
    pub total_invested: f64,
    pub total_returns: f64,
    pub lots_purchased: u32,
    pub monthly: Vec<AssetMonthRow>,
}

impl AssetAnalysis {
    /// Final savings balance, if any months were simulated
    pub fn final_balance(&self) -> f64 {
        self.monthly.last().map(|r| r.balance).unwrap_or(0.0)
    }
}

/// Contribution/return totals for one tier of the composite strategy
///
/// `roi_pct` is `returns / investment * 100` and degenerates to NaN or
/// infinity when the denominator is zero; callers handle that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierResult {
    pub total_investment: f64,
    pub total_returns: f64,
    pub roi_pct: f64,
}

impl TierResult {
    pub fn new(total_investment: f64, total_returns: f64) -> Self {
        Self {
            total_investment,
            total_returns,
            roi_pct: total_returns / total_investment * 100.0,
        }
    }
}

/// One month of the three-tier composite simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreeTierMonthRow {
    pub month: u32,
    /// Savings-tier balance at the end of the month, local currency
    pub savings_balance: f64,
    /// Savings-tier interest earned this month (before the split)
    pub savings_interest: f64,
    /// Local amount swept to the investment tier this month
    pub reinvested_local: f64,
    /// Exchange rate in effect this month (appreciated)
    pub exchange_rate: f64,
    /// Investment-tier balance at the end of the month, foreign units
    pub investment_balance: f64,
    /// Investment-tier interest this month, foreign units
    pub investment_interest: f64,
    /// Asset purchase outlay this month
    pub asset_outlay: f64,
    /// Cohort payouts credited back to the savings tier this month
    pub asset_returns: f64,
    /// Cohorts still paying out at the end of the month
    pub active_cohorts: u32,
    /// Savings + investment tier value in local currency at this month's rate
    pub total_value_local: f64,
}

/// Aggregate result of the three-tier composite simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreeTierResult {
    pub total_investment: f64,
    pub total_returns: f64,
    pub total_roi_pct: f64,
    pub savings_tier: TierResult,
    pub investment_tier: TierResult,
    pub asset_tier: TierResult,
    pub monthly: Vec<ThreeTierMonthRow>,
}

impl ThreeTierResult {
    /// Summary of final balances for console/CSV output
    pub fn summary(&self) -> ThreeTierSummary {
        let last = self.monthly.last();
        ThreeTierSummary {
            total_months: self.monthly.len() as u32,
            final_savings_balance: last.map(|r| r.savings_balance).unwrap_or(0.0),
            final_investment_balance: last.map(|r| r.investment_balance).unwrap_or(0.0),
            final_exchange_rate: last.map(|r| r.exchange_rate).unwrap_or(0.0),
            final_total_value_local: last.map(|r| r.total_value_local).unwrap_or(0.0),
            total_roi_pct: self.total_roi_pct,
        }
    }
}

/// Final-balance summary of a three-tier run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreeTierSummary {
    pub total_months: u32,
    pub final_savings_balance: f64,
    pub final_investment_balance: f64,
    pub final_exchange_rate: f64,
    pub final_total_value_local: f64,
    pub total_roi_pct: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_roi() {
        let tier = TierResult::new(1000.0, 250.0);
        assert_eq!(tier.roi_pct, 25.0);
    }

    #[test]
    fn test_tier_roi_zero_denominator_is_degenerate_not_panicking() {
        let tier = TierResult::new(0.0, 0.0);
        assert!(tier.roi_pct.is_nan());

        let tier = TierResult::new(0.0, 100.0);
        assert!(tier.roi_pct.is_infinite());
    }

    #[test]
    fn test_empty_result_summary() {
        let result = ThreeTierResult {
            total_investment: 0.0,
            total_returns: 0.0,
            total_roi_pct: f64::NAN,
            savings_tier: TierResult::new(0.0, 0.0),
            investment_tier: TierResult::new(0.0, 0.0),
            asset_tier: TierResult::new(0.0, 0.0),
            monthly: Vec::new(),
        };

        let summary = result.summary();
        assert_eq!(summary.total_months, 0);
        assert_eq!(summary.final_total_value_local, 0.0);
    }
}
