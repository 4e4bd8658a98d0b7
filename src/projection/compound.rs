//! Compound-interest baseline calculator
//!
//! The comparison yardstick for the currency strategies: everything stays on
//! the local platform and interest is fully reinvested.

use crate::scenario::monthly_simple;

/// Cumulative interest earned over `years` of monthly compounding with a
/// fixed monthly contribution.
///
/// Each month the contribution is added first, then interest accrues at
/// `annual_rate / 12` on the updated balance and is reinvested. Returns only
/// the interest total; the final balance is
/// `principal + contributions + interest`, reconstructed by the caller when
/// needed.
///
/// Total function: `years = 0` yields 0, a negative rate yields negative
/// interest. Input validation is the scenario provider's job.
pub fn compound_earnings(years: u32, principal: f64, annual_rate: f64, monthly_contribution: f64) -> f64 {
    let monthly_rate = monthly_simple(annual_rate);
    let mut balance = principal;
    let mut total_interest = 0.0;

    for _month in 1..=years * 12 {
        balance += monthly_contribution;
        let interest = balance * monthly_rate;
        total_interest += interest;
        balance += interest;
    }

    total_interest
}
