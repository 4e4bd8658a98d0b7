//! Budget allocation across spending categories
//!
//! Splits a monthly income across categories by percentage share. Shares are
//! whatever the caller configured; over-allocation shows up as a negative
//! remainder rather than an error.

use serde::{Deserialize, Serialize};

use crate::scenario::pct_to_fraction;

/// One budget category with its share of income
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub name: String,
    /// Share of monthly income, whole-number percent
    pub share_pct: f64,
}

/// A budget plan: income plus category shares
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetPlan {
    pub monthly_income: f64,
    pub categories: Vec<BudgetCategory>,
}

/// Allocated amount for one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryAllocation {
    pub name: String,
    pub share_pct: f64,
    pub amount: f64,
}

/// Result of allocating a budget plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetAllocation {
    pub monthly_income: f64,
    pub allocations: Vec<CategoryAllocation>,
    /// Income left after all categories; negative when shares exceed 100%
    pub unallocated: f64,
}

impl BudgetPlan {
    /// Split the income across the configured categories
    pub fn allocate(&self) -> BudgetAllocation {
        let allocations: Vec<CategoryAllocation> = self
            .categories
            .iter()
            .map(|c| CategoryAllocation {
                name: c.name.clone(),
                share_pct: c.share_pct,
                amount: self.monthly_income * pct_to_fraction(c.share_pct),
            })
            .collect();

        let allocated: f64 = allocations.iter().map(|a| a.amount).sum();

        BudgetAllocation {
            monthly_income: self.monthly_income,
            allocations,
            unallocated: self.monthly_income - allocated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn plan() -> BudgetPlan {
        BudgetPlan {
            monthly_income: 1_000_000.0,
            categories: vec![
                BudgetCategory { name: "Rent".into(), share_pct: 30.0 },
                BudgetCategory { name: "Food".into(), share_pct: 20.0 },
                BudgetCategory { name: "Savings".into(), share_pct: 40.0 },
            ],
        }
    }

    #[test]
    fn test_amounts_follow_shares() {
        let allocation = plan().allocate();
        assert_relative_eq!(allocation.allocations[0].amount, 300_000.0, epsilon = 1e-9);
        assert_relative_eq!(allocation.allocations[2].amount, 400_000.0, epsilon = 1e-9);
        assert_relative_eq!(allocation.unallocated, 100_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_over_allocation_goes_negative() {
        let mut plan = plan();
        plan.categories.push(BudgetCategory { name: "Car".into(), share_pct: 50.0 });

        let allocation = plan.allocate();
        assert!(allocation.unallocated < 0.0);
    }

    #[test]
    fn test_empty_plan_keeps_everything_unallocated() {
        let plan = BudgetPlan { monthly_income: 500_000.0, categories: Vec::new() };
        let allocation = plan.allocate();
        assert!(allocation.allocations.is_empty());
        assert_relative_eq!(allocation.unallocated, 500_000.0, epsilon = 1e-9);
    }
}
