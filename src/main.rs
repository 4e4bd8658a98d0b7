//! Wealth Engine CLI
//!
//! Runs a representative three-tier strategy and dumps the monthly breakdown

use wealth_engine::{
    project_three_tier, AssetCycleConfig, ThreeTierScenario,
};
use std::fs::File;
use std::io::Write;

fn main() {
    env_logger::init();

    println!("Wealth Engine v0.1.0");
    println!("====================\n");

    // Representative scenario: 18% local savings platform, 8% USD platform,
    // half of each month's interest swept into USD, one vehicle bought per
    // eligible quarter
    let scenario = ThreeTierScenario {
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
    };

    println!("Scenario:");
    println!("  Months: {}", scenario.analysis_months);
    println!("  Principal: {:.2}", scenario.savings_principal);
    println!("  Monthly savings: {:.2}", scenario.monthly_savings);
    println!("  Savings rate: {:.1}%", scenario.savings_annual_rate * 100.0);
    println!("  Investment rate: {:.1}%", scenario.investment_annual_rate * 100.0);
    println!("  Base exchange rate: {:.2}", scenario.base_exchange_rate);
    println!("  Reinvest share: {:.0}%", scenario.interest_reinvest_share * 100.0);
    println!();

    let result = project_three_tier(&scenario);

    // Print header
    println!("Projection Results ({} months):", result.monthly.len());
    println!("{:>5} {:>16} {:>12} {:>12} {:>10} {:>14} {:>12} {:>12} {:>16}",
        "Month", "Savings", "Interest", "Swept", "FX Rate", "Invest (FC)", "Outlay", "Payouts", "Total (Local)");
    println!("{}", "-".repeat(118));

    // Print first 24 months to console
    for row in result.monthly.iter().take(24) {
        println!("{:>5} {:>16.2} {:>12.2} {:>12.2} {:>10.2} {:>14.6} {:>12.2} {:>12.2} {:>16.2}",
            row.month,
            row.savings_balance,
            row.savings_interest,
            row.reinvested_local,
            row.exchange_rate,
            row.investment_balance,
            row.asset_outlay,
            row.asset_returns,
            row.total_value_local,
        );
    }

    if result.monthly.len() > 24 {
        println!("... ({} more months)", result.monthly.len() - 24);
    }

    // Write full results to CSV
    let csv_path = "three_tier_output.csv";
    let mut file = File::create(csv_path).expect("Unable to create CSV file");

    writeln!(file, "Month,SavingsBalance,SavingsInterest,ReinvestedLocal,ExchangeRate,InvestmentBalance,InvestmentInterest,AssetOutlay,AssetReturns,ActiveCohorts,TotalValueLocal").unwrap();

    for row in &result.monthly {
        writeln!(file, "{},{:.8},{:.8},{:.8},{:.8},{:.10},{:.10},{:.8},{:.8},{},{:.8}",
            row.month,
            row.savings_balance,
            row.savings_interest,
            row.reinvested_local,
            row.exchange_rate,
            row.investment_balance,
            row.investment_interest,
            row.asset_outlay,
            row.asset_returns,
            row.active_cohorts,
            row.total_value_local,
        ).unwrap();
    }

    println!("\nFull results written to: {}", csv_path);

    // Print summary
    let summary = result.summary();
    println!("\nSummary:");
    println!("  Total Months: {}", summary.total_months);
    println!("  Final Savings Balance: {:.2}", summary.final_savings_balance);
    println!("  Final Investment Balance (FC): {:.6}", summary.final_investment_balance);
    println!("  Final Exchange Rate: {:.2}", summary.final_exchange_rate);
    println!("  Final Total Value (Local): {:.2}", summary.final_total_value_local);
    println!("  Overall ROI: {:.2}%", summary.total_roi_pct);

    println!("\nPer-Tier Results:");
    println!("  Savings:    invested={:.2} returns={:.2} roi={:.2}%",
        result.savings_tier.total_investment,
        result.savings_tier.total_returns,
        result.savings_tier.roi_pct);
    println!("  Investment: invested={:.2} returns={:.2} roi={:.2}%",
        result.investment_tier.total_investment,
        result.investment_tier.total_returns,
        result.investment_tier.roi_pct);
    println!("  Assets:     invested={:.2} returns={:.2} roi={:.2}%",
        result.asset_tier.total_investment,
        result.asset_tier.total_returns,
        result.asset_tier.roi_pct);
}
