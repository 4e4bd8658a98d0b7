//! Breakeven appreciation sweep for the two-tier currency strategy
//!
//! For each foreign-platform rate, prints the currency appreciation at which
//! the two-tier strategy matches staying fully on the local platform

use wealth_engine::{project_two_tier, TwoTierScenario};

fn main() {
    env_logger::init();

    let base = TwoTierScenario {
        years: 1,
        principal: 10_000_000.0,
        monthly_savings: 1_000_000.0,
        local_annual_rate: 0.18,
        foreign_annual_rate: 0.08,
        base_exchange_rate: 1650.0,
        annual_appreciation: 0.0,
    };

    println!("Breakeven Appreciation Sweep");
    println!("============================\n");
    println!("Principal {:.0}, monthly savings {:.0}, local rate {:.1}%, base rate {:.0}\n",
        base.principal,
        base.monthly_savings,
        base.local_annual_rate * 100.0,
        base.base_exchange_rate);

    println!("{:>12} {:>16} {:>16} {:>14}",
        "FC Rate %", "Compound", "Two-Tier @0%", "Breakeven %");
    println!("{}", "-".repeat(62));

    for foreign_rate in [0.0, 0.02, 0.04, 0.06, 0.08, 0.10, 0.12] {
        let mut scenario = base.clone();
        scenario.foreign_annual_rate = foreign_rate;

        let result = project_two_tier(&scenario);
        let breakeven = if result.total_foreign_principal > 0.0 {
            result.required_breakeven_appreciation(scenario.base_exchange_rate)
        } else {
            f64::NAN
        };

        println!("{:>12.1} {:>16.2} {:>16.2} {:>14.4}",
            foreign_rate * 100.0,
            result.compound_earnings,
            result.two_tier_earnings,
            breakeven);
    }

    println!("\nBreakeven % is the total appreciation over the horizon at which");
    println!("both strategies earn the same; a higher foreign-platform rate");
    println!("needs less currency movement to break even.");
}
