//! Strategy runner for efficient batch projections
//!
//! Holds a base three-tier scenario once, then runs many variations
//! (different reinvest shares, appreciation assumptions, or whole scenario
//! batches) without rebuilding the configuration each time.

use std::path::Path;

use crate::projection::{project_three_tier, ThreeTierResult};
use crate::scenario::{loader, ScenarioLoadError, ThreeTierScenario};

/// Pre-loaded runner for batch three-tier projections
///
/// # Example
/// ```ignore
/// let runner = StrategyRunner::from_json(Path::new("scenario.json"))?;
///
/// // Run the same strategy at several reinvest shares
/// let results = runner.sweep_reinvest_share(&[0.25, 0.5, 0.75]);
/// ```
#[derive(Debug, Clone)]
pub struct StrategyRunner {
    /// Base scenario all variations start from
    base: ThreeTierScenario,
}

impl StrategyRunner {
    /// Create a runner with a pre-built base scenario
    pub fn new(base: ThreeTierScenario) -> Self {
        Self { base }
    }

    /// Create a runner by loading the base scenario from a JSON file
    pub fn from_json(path: &Path) -> Result<Self, ScenarioLoadError> {
        Ok(Self {
            base: loader::load_three_tier_json(path)?,
        })
    }

    /// Run the base scenario as-is
    pub fn run(&self) -> ThreeTierResult {
        project_three_tier(&self.base)
    }

    /// Run a batch of independent scenarios with no variation applied
    pub fn run_batch(scenarios: &[ThreeTierScenario]) -> Vec<ThreeTierResult> {
        scenarios.iter().map(project_three_tier).collect()
    }

    /// Run the base scenario once per reinvest share (fractions 0..1)
    pub fn sweep_reinvest_share(&self, shares: &[f64]) -> Vec<(f64, ThreeTierResult)> {
        shares
            .iter()
            .map(|&share| {
                let mut scenario = self.base.clone();
                scenario.interest_reinvest_share = share;
                (share, project_three_tier(&scenario))
            })
            .collect()
    }

    /// Run the base scenario once per annual FX appreciation assumption
    pub fn sweep_fx_appreciation(&self, rates: &[f64]) -> Vec<(f64, ThreeTierResult)> {
        rates
            .iter()
            .map(|&rate| {
                let mut scenario = self.base.clone();
                scenario.fx_annual_appreciation = rate;
                (rate, project_three_tier(&scenario))
            })
            .collect()
    }

    /// Get reference to the base scenario for inspection/modification
    pub fn base(&self) -> &ThreeTierScenario {
        &self.base
    }

    /// Get mutable reference to the base scenario for customization
    pub fn base_mut(&mut self) -> &mut ThreeTierScenario {
        &mut self.base
    }
}
