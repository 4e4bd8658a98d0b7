//! Run a batch of three-tier scenarios from a CSV file
//!
//! Outputs one summary row per scenario for side-by-side comparison

use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use wealth_engine::projection::{project_three_tier, ThreeTierResult};
use wealth_engine::scenario::loader::load_scenarios_csv;

#[derive(Debug, Parser)]
#[command(name = "run_strategies", about = "Batch-run three-tier strategy scenarios")]
struct Args {
    /// CSV file with one scenario per row
    #[arg(long, default_value = "data/scenarios.csv")]
    scenarios: PathBuf,

    /// Output CSV with one summary row per scenario
    #[arg(long, default_value = "strategy_summary.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    log::info!("loading scenarios from {}", args.scenarios.display());

    let scenarios = load_scenarios_csv(&args.scenarios)
        .with_context(|| format!("loading {}", args.scenarios.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    println!("Running projections...");
    let proj_start = Instant::now();

    // Scenarios are independent, run them in parallel
    let results: Vec<ThreeTierResult> = scenarios
        .par_iter()
        .map(project_three_tier)
        .collect();

    println!("Projections complete in {:?}", proj_start.elapsed());

    let mut file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    writeln!(file, "Scenario,Months,TotalInvestment,TotalReturns,TotalROI,SavingsROI,InvestmentROI,AssetROI,FinalSavings,FinalInvestmentFC,FinalExchangeRate,FinalTotalLocal")?;

    for (idx, result) in results.iter().enumerate() {
        let summary = result.summary();
        writeln!(
            file,
            "{},{},{:.2},{:.2},{:.4},{:.4},{:.4},{:.4},{:.2},{:.6},{:.4},{:.2}",
            idx + 1,
            summary.total_months,
            result.total_investment,
            result.total_returns,
            result.total_roi_pct,
            result.savings_tier.roi_pct,
            result.investment_tier.roi_pct,
            result.asset_tier.roi_pct,
            summary.final_savings_balance,
            summary.final_investment_balance,
            summary.final_exchange_rate,
            summary.final_total_value_local,
        )?;
    }

    println!("Output written to {}", args.output.display());

    // Console digest of the best and worst performers
    if let Some((best_idx, best)) = results
        .iter()
        .enumerate()
        .filter(|(_, r)| r.total_roi_pct.is_finite())
        .max_by(|(_, a), (_, b)| a.total_roi_pct.total_cmp(&b.total_roi_pct))
    {
        println!("\nBest overall ROI: scenario {} at {:.2}%", best_idx + 1, best.total_roi_pct);
    }

    println!("Total time: {:?}", start.elapsed());
    Ok(())
}
