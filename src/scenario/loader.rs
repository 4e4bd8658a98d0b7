//! Scenario file loaders
//!
//! Single scenarios and FX quotes are JSON files; batches of three-tier
//! scenarios come in as CSV with one scenario per row. Loading only checks
//! parseability; degenerate numeric values flow through to the calculators,
//! which are total functions.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::{pct_to_fraction, AssetCycleConfig, FxQuote, ThreeTierScenario, TwoTierScenario};

/// Errors produced while loading scenario files
#[derive(Debug, Error)]
pub enum ScenarioLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

fn open(path: &Path) -> Result<File, ScenarioLoadError> {
    File::open(path).map_err(|source| ScenarioLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a single two-tier scenario from a JSON file
pub fn load_two_tier_json(path: &Path) -> Result<TwoTierScenario, ScenarioLoadError> {
    let file = open(path)?;
    serde_json::from_reader(file).map_err(|source| ScenarioLoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a single three-tier scenario from a JSON file
pub fn load_three_tier_json(path: &Path) -> Result<ThreeTierScenario, ScenarioLoadError> {
    let file = open(path)?;
    serde_json::from_reader(file).map_err(|source| ScenarioLoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load an exchange-rate quote written by the live-rate fetcher
pub fn load_fx_quote_json(path: &Path) -> Result<FxQuote, ScenarioLoadError> {
    let file = open(path)?;
    serde_json::from_reader(file).map_err(|source| ScenarioLoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// One row of a three-tier scenario batch CSV
///
/// `interest_reinvest_pct` is a whole-number percentage in the file and is
/// converted to a fraction here, at the input boundary.
#[derive(Debug, Deserialize)]
struct ScenarioCsvRow {
    analysis_months: u32,
    savings_principal: f64,
    monthly_savings: f64,
    savings_annual_rate: f64,
    investment_annual_rate: f64,
    base_exchange_rate: f64,
    fx_annual_appreciation: f64,
    interest_reinvest_pct: f64,
    investment_cost: f64,
    return_amount: f64,
    investment_period: u32,
    cycle_period: u32,
    #[serde(default)]
    cost_appreciation: f64,
    #[serde(default)]
    return_appreciation: f64,
    vehicles_per_cycle: u32,
}

impl From<ScenarioCsvRow> for ThreeTierScenario {
    fn from(row: ScenarioCsvRow) -> Self {
        ThreeTierScenario {
            analysis_months: row.analysis_months,
            savings_principal: row.savings_principal,
            monthly_savings: row.monthly_savings,
            savings_annual_rate: row.savings_annual_rate,
            investment_annual_rate: row.investment_annual_rate,
            base_exchange_rate: row.base_exchange_rate,
            fx_annual_appreciation: row.fx_annual_appreciation,
            interest_reinvest_share: pct_to_fraction(row.interest_reinvest_pct),
            asset: AssetCycleConfig {
                investment_cost: row.investment_cost,
                return_amount: row.return_amount,
                investment_period: row.investment_period,
                cycle_period: row.cycle_period,
                cost_appreciation: row.cost_appreciation,
                return_appreciation: row.return_appreciation,
            },
            vehicles_per_cycle: row.vehicles_per_cycle,
        }
    }
}

/// Load a batch of three-tier scenarios from CSV, one per row
pub fn load_scenarios_csv(path: &Path) -> Result<Vec<ThreeTierScenario>, ScenarioLoadError> {
    let file = open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut scenarios = Vec::new();
    for result in reader.deserialize::<ScenarioCsvRow>() {
        let row = result.map_err(|source| ScenarioLoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        scenarios.push(row.into());
    }

    Ok(scenarios)
}
