//! Budget variance calculations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ratio::percent_of;

/// Type of variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarianceType {
    /// Better than planned: under budget for spending, over target for income.
    Favorable,
    /// Worse than planned.
    Unfavorable,
    /// No variance.
    None,
}

/// Planned vs actual variance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetVariance {
    /// Planned amount.
    pub budgeted: Decimal,
    /// Actual amount.
    pub actual: Decimal,
    /// Variance amount.
    pub variance: Decimal,
    /// Variance as a percentage of the planned amount.
    pub variance_percentage: Decimal,
    /// Type of variance.
    pub variance_type: VarianceType,
}

impl BudgetVariance {
    /// Calculates variance for spending against an allocation.
    ///
    /// variance = budgeted - actual; under budget is favorable.
    #[must_use]
    pub fn for_expense(budgeted: Decimal, actual: Decimal) -> Self {
        Self::from_variance(budgeted, actual, budgeted - actual)
    }

    /// Calculates variance for income against a target.
    ///
    /// variance = actual - budgeted; over target is favorable.
    #[must_use]
    pub fn for_revenue(budgeted: Decimal, actual: Decimal) -> Self {
        Self::from_variance(budgeted, actual, actual - budgeted)
    }

    fn from_variance(budgeted: Decimal, actual: Decimal, variance: Decimal) -> Self {
        let variance_type = match variance.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => VarianceType::Favorable,
            std::cmp::Ordering::Less => VarianceType::Unfavorable,
            std::cmp::Ordering::Equal => VarianceType::None,
        };

        Self {
            budgeted,
            actual,
            variance,
            variance_percentage: percent_of(variance, budgeted),
            variance_type,
        }
    }
}
