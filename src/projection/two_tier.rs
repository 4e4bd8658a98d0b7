//! Two-tier currency strategy calculator
//!
//! Simulates sweeping each month's local-platform interest into a
//! foreign-currency position that earns its own interest and benefits from
//! currency appreciation. Appreciation is applied once at the end of the
//! horizon. This is the quick-estimate tool; the three-tier simulator is
//! the one that compounds the rate month by month.

use crate::scenario::{monthly_simple, TwoTierScenario};
use super::breakdown::{TwoTierMonthRow, TwoTierResult};
use super::compound::compound_earnings;

/// Run the two-tier simulation and compare it against full local compounding.
///
/// Month by month: the contribution lands (from month 2; the principal
/// already carries the period-1 value), local interest accrues on the local
/// balance and is converted to foreign currency at the base rate, then
/// foreign interest accrues on the converted principal. Foreign interest is
/// simple: it accumulates alongside the principal rather than into it, which
/// is what makes `currency_gain` a pure exchange-rate term.
pub fn project_two_tier(scenario: &TwoTierScenario) -> TwoTierResult {
    let local_monthly = monthly_simple(scenario.local_annual_rate);
    let foreign_monthly = monthly_simple(scenario.foreign_annual_rate);
    let base_rate = scenario.base_exchange_rate;

    let mut local_balance = scenario.principal;
    let mut foreign_principal = 0.0;
    let mut total_local_interest = 0.0;
    let mut total_foreign_interest = 0.0;

    let months = scenario.months();
    let mut monthly = Vec::with_capacity(months as usize);

    for month in 1..=months {
        if month > 1 {
            local_balance += scenario.monthly_savings;
        }

        let local_interest = local_balance * local_monthly;
        total_local_interest += local_interest;

        // The whole of this month's interest converts at the base rate
        let converted = local_interest / base_rate;
        foreign_principal += converted;

        let foreign_interest = foreign_principal * foreign_monthly;
        total_foreign_interest += foreign_interest;

        monthly.push(TwoTierMonthRow {
            month,
            local_balance,
            local_interest,
            converted_amount: converted,
            foreign_principal,
            foreign_interest,
            exchange_rate: base_rate,
            foreign_value_local: (foreign_principal + total_foreign_interest) * base_rate,
            total_earnings: total_local_interest + total_foreign_interest * base_rate,
        });
    }

    let final_rate = scenario.final_exchange_rate();
    let currency_gain = foreign_principal * (final_rate - base_rate);
    let two_tier_earnings =
        total_local_interest + total_foreign_interest * final_rate + currency_gain;

    TwoTierResult {
        compound_earnings: compound_earnings(
            scenario.years,
            scenario.principal,
            scenario.local_annual_rate,
            scenario.monthly_savings,
        ),
        two_tier_earnings,
        final_exchange_rate: final_rate,
        total_local_interest,
        total_foreign_interest,
        total_foreign_principal: foreign_principal,
        foreign_value_local: (foreign_principal + total_foreign_interest) * final_rate,
        currency_gain,
        monthly,
    }
}

/// Closed-form appreciation percentage at which the two-tier strategy
/// matches full local compounding.
///
/// Solves `compound = local_interest + foreign_interest_local +
/// principal_local * appreciation` for the appreciation, returning the total
/// required appreciation over the horizon as a whole-number percent (equal
/// to the annual figure on a one-year horizon). The caller guards
/// `total_foreign_principal = 0`, where the division degenerates.
pub fn breakeven_appreciation(
    compound_earnings: f64,
    local_only_interest: f64,
    base_foreign_interest_local: f64,
    total_foreign_principal: f64,
    base_exchange_rate: f64,
) -> f64 {
    (compound_earnings - local_only_interest - base_foreign_interest_local)
        / (total_foreign_principal * base_exchange_rate)
        * 100.0
}

impl TwoTierResult {
    /// Breakeven appreciation computed from this run's own components
    pub fn required_breakeven_appreciation(&self, base_exchange_rate: f64) -> f64 {
        breakeven_appreciation(
            self.compound_earnings,
            self.total_local_interest,
            self.total_foreign_interest * base_exchange_rate,
            self.total_foreign_principal,
            base_exchange_rate,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn base_scenario() -> TwoTierScenario {
        TwoTierScenario {
            years: 1,
            principal: 10_000_000.0,
            monthly_savings: 1_000_000.0,
            local_annual_rate: 0.18,
            foreign_annual_rate: 0.08,
            base_exchange_rate: 1650.0,
            annual_appreciation: 0.0,
        }
    }

    #[test]
    fn test_zero_appreciation_has_no_currency_gain() {
        let result = project_two_tier(&base_scenario());

        assert_eq!(result.currency_gain, 0.0);
        assert!(result.compound_earnings > 0.0);

        // Without a currency-gain term the strategies differ only by the
        // 18% vs 8% platform gap on the swept interest, so the two-tier
        // result trails local compounding by a modest margin
        assert!(result.two_tier_earnings < result.compound_earnings);
        let relative_gap =
            (result.two_tier_earnings - result.compound_earnings).abs() / result.compound_earnings;
        assert!(relative_gap < 0.15, "gap was {relative_gap}");
    }

    #[test]
    fn test_monthly_rows_cover_horizon() {
        let result = project_two_tier(&base_scenario());
        assert_eq!(result.monthly.len(), 12);
        assert_eq!(result.monthly[0].month, 1);
        assert_eq!(result.monthly[11].month, 12);
    }

    #[test]
    fn test_month_one_contribution_skipped() {
        let result = project_two_tier(&base_scenario());
        // Month 1 interest accrues on the raw principal
        assert_relative_eq!(
            result.monthly[0].local_interest,
            10_000_000.0 * 0.18 / 12.0,
            epsilon = 1e-6
        );
        // Month 2 balance picks up exactly one contribution
        assert_relative_eq!(result.monthly[1].local_balance, 11_000_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_local_balance_monotone() {
        let result = project_two_tier(&base_scenario());
        for pair in result.monthly.windows(2) {
            assert!(pair[1].local_balance >= pair[0].local_balance);
        }
    }

    #[test]
    fn test_appreciation_only_applied_terminally() {
        let mut scenario = base_scenario();
        scenario.annual_appreciation = 0.10;
        let result = project_two_tier(&scenario);

        // Every in-horizon conversion happened at the base rate
        for row in &result.monthly {
            assert_eq!(row.exchange_rate, 1650.0);
        }
        assert_relative_eq!(result.final_exchange_rate, 1650.0 * 1.10, epsilon = 1e-9);
        assert!(result.currency_gain > 0.0);
    }

    #[test]
    fn test_breakeven_identity_exact_without_foreign_interest() {
        // With no foreign-platform interest the solver is exact on a
        // one-year horizon: feeding the breakeven appreciation back in makes
        // the two strategies earn the same
        let mut scenario = base_scenario();
        scenario.foreign_annual_rate = 0.0;

        let base = project_two_tier(&scenario);
        let required_pct = base.required_breakeven_appreciation(scenario.base_exchange_rate);

        scenario.annual_appreciation = required_pct / 100.0;
        let rerun = project_two_tier(&scenario);

        assert_relative_eq!(
            rerun.two_tier_earnings,
            rerun.compound_earnings,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_breakeven_identity_close_with_foreign_interest() {
        // With foreign interest the solver ignores the revaluation of that
        // interest, so the identity holds to within that small term
        let base = project_two_tier(&base_scenario());
        let required_pct = base.required_breakeven_appreciation(1650.0);

        let mut scenario = base_scenario();
        scenario.annual_appreciation = required_pct / 100.0;
        let rerun = project_two_tier(&scenario);

        assert_relative_eq!(
            rerun.two_tier_earnings,
            rerun.compound_earnings,
            max_relative = 1e-2
        );
    }
}
