//! Wealth Engine - Month-by-month projection engine for multi-tier savings
//! and investment strategies
//!
//! This library provides:
//! - Compound-interest baseline projections with monthly contributions
//! - Two-tier currency strategy simulation with a breakeven-appreciation solver
//! - Cyclical asset investment simulation with overlapping payout cohorts
//! - Three-tier composite simulation (savings, foreign investment, assets)
//! - Portfolio valuation and budget allocation helpers
//! - Batch/sweep runner for comparing many scenarios

pub mod scenario;
pub mod projection;
pub mod portfolio;
pub mod budget;
pub mod runner;

// Re-export commonly used types
pub use scenario::{AssetCycleConfig, AssetCycleScenario, FxQuote, ThreeTierScenario, TwoTierScenario};
pub use projection::{
    analyze_asset_cycle, compound_earnings, project_three_tier, project_two_tier,
    AssetAnalysis, ThreeTierResult, TwoTierResult,
};
pub use runner::StrategyRunner;
