//! Scenario configuration for the projection calculators
//!
//! All rates are stored as annual fractions (0.18 = 18% per year). Inputs
//! that arrive as whole-number percentages (reinvest share, quoted
//! appreciation) are converted at the boundary by the constructors below.

mod rates;
pub mod loader;

pub use rates::{fraction_to_pct, monthly_equivalent, monthly_simple, pct_to_fraction};
pub use loader::ScenarioLoadError;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Configuration for the cyclical asset investment (one "lot" = one vehicle
/// or similar income-producing asset bought outright and paid back over a
/// fixed number of months).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetCycleConfig {
    /// Purchase cost of one lot, local currency
    pub investment_cost: f64,

    /// Total expected payback of one lot over its payout period, local currency
    pub return_amount: f64,

    /// Months over which a purchased lot pays out
    pub investment_period: u32,

    /// Months between purchase opportunities
    pub cycle_period: u32,

    /// Annual appreciation of the purchase cost (fraction, 0 = flat).
    /// Only the three-tier simulator applies appreciation; the standalone
    /// asset analyzer treats cost and return as flat.
    #[serde(default)]
    pub cost_appreciation: f64,

    /// Annual appreciation of the expected return (fraction, 0 = flat)
    #[serde(default)]
    pub return_appreciation: f64,
}

impl AssetCycleConfig {
    /// Flat-cost configuration (no appreciation on cost or return)
    pub fn flat(investment_cost: f64, return_amount: f64, investment_period: u32, cycle_period: u32) -> Self {
        Self {
            investment_cost,
            return_amount,
            investment_period,
            cycle_period,
            cost_appreciation: 0.0,
            return_appreciation: 0.0,
        }
    }

    /// Expected monthly payout of one lot
    pub fn monthly_return(&self) -> f64 {
        self.return_amount / self.investment_period as f64
    }
}

/// Scenario for the two-tier currency strategy calculator
///
/// Local-currency interest is swept into a foreign-currency balance each
/// month; the foreign currency appreciates against the local one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwoTierScenario {
    /// Number of years to simulate (12 months each)
    pub years: u32,

    /// Starting local-currency balance
    pub principal: f64,

    /// Contribution added each month (skipped in month 1; the principal
    /// already carries the period-1 value)
    pub monthly_savings: f64,

    /// Annual rate on the local savings platform (fraction)
    pub local_annual_rate: f64,

    /// Annual rate on the foreign investment platform (fraction)
    pub foreign_annual_rate: f64,

    /// Local-currency units per foreign-currency unit at the start
    pub base_exchange_rate: f64,

    /// Annual appreciation of the foreign currency (fraction);
    /// applied once at the end of the horizon, not month by month
    pub annual_appreciation: f64,
}

impl TwoTierScenario {
    /// Months simulated by this scenario
    pub fn months(&self) -> u32 {
        self.years * 12
    }

    /// Exchange rate at the end of the horizon
    pub fn final_exchange_rate(&self) -> f64 {
        self.base_exchange_rate * (1.0 + self.annual_appreciation).powi(self.years as i32)
    }

    /// Substitute a live quote for the configured rate and appreciation
    pub fn with_quote(mut self, quote: &FxQuote) -> Self {
        self.base_exchange_rate = quote.rate;
        self.annual_appreciation = quote.appreciation_fraction();
        self
    }
}

/// Scenario for the standalone cyclical asset simulator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetCycleScenario {
    /// Months to simulate
    pub analysis_months: u32,

    /// Savings balance at month 0
    pub initial_savings: f64,

    /// Contribution added every month
    pub monthly_savings: f64,

    /// Asset lot configuration
    pub asset: AssetCycleConfig,
}

/// Scenario for the three-tier composite simulator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreeTierScenario {
    /// Months to simulate
    pub analysis_months: u32,

    /// Starting savings-tier balance, local currency
    pub savings_principal: f64,

    /// Contribution added to the savings tier every month
    pub monthly_savings: f64,

    /// Annual rate on the savings tier (fraction)
    pub savings_annual_rate: f64,

    /// Annual rate on the foreign-currency investment tier (fraction)
    pub investment_annual_rate: f64,

    /// Local-currency units per foreign-currency unit at month 0
    pub base_exchange_rate: f64,

    /// Annual appreciation of the foreign currency (fraction);
    /// compounded month by month in this simulator
    pub fx_annual_appreciation: f64,

    /// Share of each month's savings interest swept into the investment
    /// tier (fraction 0..1; the rest stays in the savings balance)
    pub interest_reinvest_share: f64,

    /// Asset lot configuration
    pub asset: AssetCycleConfig,

    /// Maximum lots bought per eligible cycle month
    pub vehicles_per_cycle: u32,
}

impl ThreeTierScenario {
    /// Set the reinvest share from a whole-number percentage (0-100)
    pub fn with_reinvest_pct(mut self, pct: f64) -> Self {
        self.interest_reinvest_share = pct_to_fraction(pct);
        self
    }

    /// Substitute a live quote for the configured rate and appreciation
    pub fn with_quote(mut self, quote: &FxQuote) -> Self {
        self.base_exchange_rate = quote.rate;
        self.fx_annual_appreciation = quote.appreciation_fraction();
        self
    }

    /// Exchange rate in effect during the given month (1-indexed),
    /// compounded at the monthly-equivalent appreciation rate
    pub fn exchange_rate_at(&self, month: u32) -> f64 {
        let monthly = monthly_equivalent(self.fx_annual_appreciation);
        self.base_exchange_rate * (1.0 + monthly).powi(month as i32)
    }
}

/// Exchange-rate quote handed over by the live-rate provider
///
/// The provider fetches the rate; the engine only ever sees the concrete
/// numbers. `annual_appreciation_pct` is a whole-number percentage as quoted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FxQuote {
    /// Local-currency units per foreign-currency unit
    pub rate: f64,

    /// Estimated annual appreciation, whole-number percent (e.g. 8.0 = 8%)
    pub annual_appreciation_pct: f64,

    /// When the quote was taken
    pub quoted_at: DateTime<Utc>,
}

impl FxQuote {
    /// Quoted appreciation as an annual fraction
    pub fn appreciation_fraction(&self) -> f64 {
        pct_to_fraction(self.annual_appreciation_pct)
    }
}
