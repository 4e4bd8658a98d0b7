//! Cyclical asset investment simulator
//!
//! Models a "buy a lot whenever enough cash is saved" strategy: on each
//! cycle-eligible month every affordable lot is bought, and each purchased
//! lot pays back a fixed monthly amount over its payout period. Lots bought
//! in different months overlap and mature independently.

use serde::{Deserialize, Serialize};

use crate::scenario::AssetCycleScenario;
use super::breakdown::{AssetAnalysis, AssetMonthRow};

/// One batch of lots bought in a single eligible month, tracked until it
/// fully pays out or its payout window closes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentCohort {
    /// Month the purchase happened (payouts start the following month)
    pub start_month: u32,
    /// Payment received per month while the cohort is paying
    pub monthly_return: f64,
    /// Paid out so far
    pub total_returned: f64,
    /// Total the cohort will pay over its life
    pub total_expected: f64,
}

impl InvestmentCohort {
    pub fn new(start_month: u32, total_expected: f64, investment_period: u32) -> Self {
        Self {
            start_month,
            monthly_return: total_expected / investment_period as f64,
            total_returned: 0.0,
            total_expected,
        }
    }

    /// Whether the cohort pays out in the given month: inside its payout
    /// window (starting the month after purchase) and not yet fully paid
    pub fn is_paying(&self, month: u32, investment_period: u32) -> bool {
        let age = month.saturating_sub(self.start_month);
        age > 0 && age <= investment_period && self.total_returned < self.total_expected
    }

    /// Take this month's payment. The final payment is clamped so the cohort
    /// never returns more than `total_expected`.
    pub fn pay_out(&mut self) -> f64 {
        let payment = self
            .monthly_return
            .min(self.total_expected - self.total_returned)
            .max(0.0);
        self.total_returned += payment;
        payment
    }

    /// Whether the cohort is done: window closed or fully paid
    pub fn is_complete(&self, month: u32, investment_period: u32) -> bool {
        month.saturating_sub(self.start_month) >= investment_period
            || self.total_returned >= self.total_expected
    }
}

/// Run the asset-cycle simulation.
///
/// Per month: the contribution lands; on cycle months every affordable lot
/// is bought (cost deducted up front); active cohorts pay out into the
/// savings balance. Completed cohorts are dropped by predicate, so cohorts
/// finishing out of creation order cannot evict the wrong batch.
pub fn analyze_asset_cycle(scenario: &AssetCycleScenario) -> AssetAnalysis {
    let cost = scenario.asset.investment_cost;
    let period = scenario.asset.investment_period;

    let mut savings = scenario.initial_savings;
    let mut active: Vec<InvestmentCohort> = Vec::new();

    let mut total_contributed = scenario.initial_savings;
    let mut total_invested = 0.0;
    let mut total_returns = 0.0;
    let mut lots_purchased = 0u32;

    let mut monthly = Vec::with_capacity(scenario.analysis_months as usize);

    for month in 1..=scenario.analysis_months {
        savings += scenario.monthly_savings;
        total_contributed += scenario.monthly_savings;

        // Purchase window: every cycle_period months, if at least one lot
        // is affordable. Unspent savings rolls into the next window.
        let mut invested = 0.0;
        if scenario.asset.cycle_period > 0
            && month % scenario.asset.cycle_period == 0
            && cost > 0.0
            && savings >= cost
        {
            let lots = (savings / cost).floor() as u32;
            invested = lots as f64 * cost;
            savings -= invested;
            total_invested += invested;
            lots_purchased += lots;

            for _ in 0..lots {
                active.push(InvestmentCohort::new(month, scenario.asset.return_amount, period));
            }
        }

        let mut returns = 0.0;
        for cohort in active.iter_mut() {
            if cohort.is_paying(month, period) {
                returns += cohort.pay_out();
            }
        }
        savings += returns;
        total_returns += returns;

        active.retain(|c| !c.is_complete(month, period));

        monthly.push(AssetMonthRow {
            month,
            savings_added: scenario.monthly_savings,
            invested,
            returns,
            balance: savings,
        });
    }

    AssetAnalysis {
        total_savings_contributed: total_contributed,
        total_invested,
        total_returns,
        lots_purchased,
        monthly,
    }
}
