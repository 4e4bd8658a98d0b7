//! Three-tier composite strategy simulator
//!
//! One integrated monthly loop over three balances: a local savings tier, a
//! foreign-currency investment tier fed by a share of the savings interest,
//! and a cyclical asset tier whose payouts flow back into savings. Unlike
//! the two-tier quick estimate, the exchange rate, asset cost, and asset
//! return here all compound month by month at their monthly-equivalent
//! rates. The simpler calculators' mechanics are intentionally re-run inside
//! this loop rather than delegated: the split and same-month conversion
//! need per-month control the standalone calculators do not expose.

use crate::scenario::{monthly_equivalent, monthly_simple, ThreeTierScenario};
use super::asset_cycle::InvestmentCohort;
use super::breakdown::{ThreeTierMonthRow, ThreeTierResult, TierResult};

/// Running balances and totals carried across the monthly loop
#[derive(Debug, Clone)]
struct ThreeTierState {
    /// Savings-tier balance, local currency
    savings_balance: f64,

    /// Investment-tier balance, foreign units
    investment_balance: f64,

    /// Asset cohorts still paying out
    active_cohorts: Vec<InvestmentCohort>,

    /// Principal plus contributions to date
    total_contributed: f64,

    /// Savings interest kept in the savings tier
    total_retained_interest: f64,

    /// Local amounts swept into the investment tier
    total_swept_local: f64,

    /// Asset purchase outlays to date
    total_asset_outlay: f64,

    /// Asset payouts received to date
    total_asset_returns: f64,
}

impl ThreeTierState {
    fn new(scenario: &ThreeTierScenario) -> Self {
        Self {
            savings_balance: scenario.savings_principal,
            investment_balance: 0.0,
            active_cohorts: Vec::new(),
            total_contributed: scenario.savings_principal,
            total_retained_interest: 0.0,
            total_swept_local: 0.0,
            total_asset_outlay: 0.0,
            total_asset_returns: 0.0,
        }
    }
}

/// Run the composite simulation.
///
/// Month ordering: contribution, savings interest and split (the reinvested
/// share converts at the current appreciated rate and earns foreign interest
/// the same month it arrives), foreign interest, asset purchase on cycle
/// months, cohort payouts into the savings balance, row recording. Payouts
/// therefore earn savings interest from the following month and can fund the
/// next purchase window.
pub fn project_three_tier(scenario: &ThreeTierScenario) -> ThreeTierResult {
    let savings_monthly = monthly_simple(scenario.savings_annual_rate);
    let investment_monthly = monthly_simple(scenario.investment_annual_rate);
    let cost_monthly = monthly_equivalent(scenario.asset.cost_appreciation);
    let return_monthly = monthly_equivalent(scenario.asset.return_appreciation);
    let period = scenario.asset.investment_period;

    let mut state = ThreeTierState::new(scenario);
    let mut monthly = Vec::with_capacity(scenario.analysis_months as usize);

    for month in 1..=scenario.analysis_months {
        state.savings_balance += scenario.monthly_savings;
        state.total_contributed += scenario.monthly_savings;

        // Savings interest, split between the two tiers
        let savings_interest = state.savings_balance * savings_monthly;
        let reinvested = savings_interest * scenario.interest_reinvest_share;
        let retained = savings_interest - reinvested;
        state.savings_balance += retained;
        state.total_retained_interest += retained;

        // The swept share converts at this month's appreciated rate and is
        // on the foreign balance before interest is computed, so it
        // compounds in the month it arrives
        let exchange_rate = scenario.exchange_rate_at(month);
        state.investment_balance += reinvested / exchange_rate;
        state.total_swept_local += reinvested;

        let investment_interest = state.investment_balance * investment_monthly;
        state.investment_balance += investment_interest;

        // Asset purchases at the month's appreciated cost, capped at
        // vehicles_per_cycle lots per window
        let mut asset_outlay = 0.0;
        if scenario.asset.cycle_period > 0 && month % scenario.asset.cycle_period == 0 {
            let cost = scenario.asset.investment_cost * (1.0 + cost_monthly).powi(month as i32);
            let affordable = if cost > 0.0 {
                (state.savings_balance / cost).floor() as u32
            } else {
                0
            };
            let lots = affordable.min(scenario.vehicles_per_cycle);

            if lots > 0 {
                asset_outlay = lots as f64 * cost;
                state.savings_balance -= asset_outlay;
                state.total_asset_outlay += asset_outlay;

                let expected =
                    scenario.asset.return_amount * (1.0 + return_monthly).powi(month as i32);
                for _ in 0..lots {
                    state.active_cohorts.push(InvestmentCohort::new(month, expected, period));
                }
            }
        }

        // Cohort payouts go back into the savings tier
        let mut asset_returns = 0.0;
        for cohort in state.active_cohorts.iter_mut() {
            if cohort.is_paying(month, period) {
                asset_returns += cohort.pay_out();
            }
        }
        state.savings_balance += asset_returns;
        state.total_asset_returns += asset_returns;

        state.active_cohorts.retain(|c| !c.is_complete(month, period));

        monthly.push(ThreeTierMonthRow {
            month,
            savings_balance: state.savings_balance,
            savings_interest,
            reinvested_local: reinvested,
            exchange_rate,
            investment_balance: state.investment_balance,
            investment_interest,
            asset_outlay,
            asset_returns,
            active_cohorts: state.active_cohorts.len() as u32,
            total_value_local: state.savings_balance + state.investment_balance * exchange_rate,
        });
    }

    let final_rate = scenario.exchange_rate_at(scenario.analysis_months);
    let savings_tier = TierResult::new(state.total_contributed, state.total_retained_interest);
    let investment_tier = TierResult::new(
        state.total_swept_local,
        state.investment_balance * final_rate - state.total_swept_local,
    );
    let asset_tier = TierResult::new(state.total_asset_outlay, state.total_asset_returns);

    let total_investment = savings_tier.total_investment
        + investment_tier.total_investment
        + asset_tier.total_investment;
    let total_returns =
        savings_tier.total_returns + investment_tier.total_returns + asset_tier.total_returns;

    ThreeTierResult {
        total_investment,
        total_returns,
        total_roi_pct: total_returns / total_investment * 100.0,
        savings_tier,
        investment_tier,
        asset_tier,
        monthly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::AssetCycleConfig;
    use approx::assert_relative_eq;

    fn base_scenario() -> ThreeTierScenario {
        ThreeTierScenario {
            analysis_months: 24,
            savings_principal: 10_000_000.0,
            monthly_savings: 1_000_000.0,
            savings_annual_rate: 0.18,
            investment_annual_rate: 0.08,
            base_exchange_rate: 1650.0,
            fx_annual_appreciation: 0.10,
            interest_reinvest_share: 0.5,
            asset: AssetCycleConfig {
                investment_cost: 3_300_000.0,
                return_amount: 5_600_000.0,
                investment_period: 12,
                cycle_period: 3,
                cost_appreciation: 0.05,
                return_appreciation: 0.05,
            },
            vehicles_per_cycle: 1,
        }
    }

    #[test]
    fn test_savings_balance_monotone_up_to_outlays() {
        let result = project_three_tier(&base_scenario());
        for pair in result.monthly.windows(2) {
            assert!(
                pair[1].savings_balance + pair[1].asset_outlay >= pair[0].savings_balance - 1e-6,
                "balance dropped beyond the outlay at month {}",
                pair[1].month
            );
        }
    }

    #[test]
    fn test_exchange_rate_appreciates_every_month() {
        let result = project_three_tier(&base_scenario());
        for pair in result.monthly.windows(2) {
            assert!(pair[1].exchange_rate > pair[0].exchange_rate);
        }
        // Twelve months of compounding reproduce the annual figure
        assert_relative_eq!(result.monthly[11].exchange_rate, 1650.0 * 1.10, epsilon = 1e-6);
    }

    #[test]
    fn test_reinvested_share_earns_interest_same_month() {
        let result = project_three_tier(&base_scenario());
        let first = &result.monthly[0];
        assert!(first.reinvested_local > 0.0);
        // Foreign interest is non-zero in the very month the sweep arrives
        assert!(first.investment_interest > 0.0);
        assert_relative_eq!(
            first.investment_interest,
            (first.reinvested_local / first.exchange_rate) * 0.08 / 12.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_zero_reinvest_share_leaves_investment_tier_empty() {
        let mut scenario = base_scenario();
        scenario.interest_reinvest_share = 0.0;
        let result = project_three_tier(&scenario);

        assert_eq!(result.investment_tier.total_investment, 0.0);
        for row in &result.monthly {
            assert_eq!(row.investment_balance, 0.0);
        }
    }

    #[test]
    fn test_full_reinvest_share_keeps_no_interest_locally() {
        let mut scenario = base_scenario();
        scenario.interest_reinvest_share = 1.0;
        let result = project_three_tier(&scenario);

        assert_eq!(result.savings_tier.total_returns, 0.0);
        assert!(result.investment_tier.total_investment > 0.0);
    }

    #[test]
    fn test_purchases_capped_at_vehicles_per_cycle() {
        let mut scenario = base_scenario();
        scenario.savings_principal = 50_000_000.0;
        scenario.vehicles_per_cycle = 2;
        let result = project_three_tier(&scenario);

        let month3 = &result.monthly[2];
        let appreciated_cost =
            3_300_000.0 * (1.0 + monthly_equivalent(0.05)).powi(3);
        // Plenty affordable, but only two lots go through
        assert_relative_eq!(month3.asset_outlay, 2.0 * appreciated_cost, epsilon = 1e-3);
    }

    #[test]
    fn test_asset_cost_appreciates_monthly() {
        let result = project_three_tier(&base_scenario());
        let month3 = &result.monthly[2];
        assert!(month3.asset_outlay > 3_300_000.0);
        assert_relative_eq!(
            month3.asset_outlay,
            3_300_000.0 * (1.0 + monthly_equivalent(0.05)).powi(3),
            epsilon = 1e-3
        );
    }

    #[test]
    fn test_asset_payouts_credited_to_savings() {
        let result = project_three_tier(&base_scenario());
        // First purchase at month 3 starts paying at month 4
        assert_eq!(result.monthly[2].asset_returns, 0.0);
        assert!(result.monthly[3].asset_returns > 0.0);
        assert!(result.asset_tier.total_returns > 0.0);
    }

    #[test]
    fn test_off_cycle_months_have_no_outlay() {
        let result = project_three_tier(&base_scenario());
        for row in &result.monthly {
            if row.month % 3 != 0 {
                assert_eq!(row.asset_outlay, 0.0);
            }
        }
    }

    #[test]
    fn test_overall_totals_are_tier_sums() {
        let result = project_three_tier(&base_scenario());
        let investment_sum = result.savings_tier.total_investment
            + result.investment_tier.total_investment
            + result.asset_tier.total_investment;
        let returns_sum = result.savings_tier.total_returns
            + result.investment_tier.total_returns
            + result.asset_tier.total_returns;

        assert_relative_eq!(result.total_investment, investment_sum, epsilon = 1e-6);
        assert_relative_eq!(result.total_returns, returns_sum, epsilon = 1e-6);
        assert!(result.total_roi_pct.is_finite());
    }

    #[test]
    fn test_zero_months_degenerates_without_panicking() {
        let mut scenario = base_scenario();
        scenario.analysis_months = 0;
        let result = project_three_tier(&scenario);

        assert!(result.monthly.is_empty());
        // Principal contributed, nothing returned; ROI is 0 not a panic
        assert_eq!(result.total_returns, 0.0);
        assert_eq!(result.summary().total_months, 0);
    }
}
