//! The four projection calculators and their output types

mod breakdown;
mod compound;
mod two_tier;
mod asset_cycle;
mod three_tier;

pub use breakdown::{
    AssetAnalysis, AssetMonthRow, ThreeTierMonthRow, ThreeTierResult, ThreeTierSummary,
    TierResult, TwoTierMonthRow, TwoTierResult,
};
pub use compound::compound_earnings;
pub use two_tier::{breakeven_appreciation, project_two_tier};
pub use asset_cycle::{analyze_asset_cycle, InvestmentCohort};
pub use three_tier::project_three_tier;
