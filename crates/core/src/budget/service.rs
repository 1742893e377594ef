//! Budget service for default allocation and utilization.

use chrono::{DateTime, Utc};
use jamii_shared::FinancePolicy;
use jamii_shared::types::{BudgetCategoryId, BudgetId, EventId};
use rust_decimal::Decimal;

use super::types::{Budget, BudgetCategory, BudgetStatus, Contingency};
use crate::ratio::{percent_of, share_of};

/// Budget service for business logic.
pub struct BudgetService;

impl BudgetService {
    /// Splits `total` across the policy's default categories.
    ///
    /// Every event gets the same split regardless of its kind. With a policy
    /// whose shares add up to 100 the allocations add up to exactly `total`.
    #[must_use]
    pub fn default_categories(total: Decimal, policy: &FinancePolicy) -> Vec<BudgetCategory> {
        policy
            .category_split
            .iter()
            .map(|share| BudgetCategory {
                id: BudgetCategoryId::new(),
                name: share.name.clone(),
                allocated_amount: share_of(total, share.percent),
                priority: share.priority,
                items: Vec::new(),
            })
            .collect()
    }

    /// Builds a draft budget with default categories and a contingency reserve.
    #[must_use]
    pub fn create(
        event_id: EventId,
        total_amount: Decimal,
        currency: impl Into<String>,
        policy: &FinancePolicy,
        now: DateTime<Utc>,
    ) -> Budget {
        Budget {
            id: BudgetId::new(),
            event_id,
            total_amount,
            currency: currency.into(),
            categories: Self::default_categories(total_amount, policy),
            contingency: Contingency {
                amount: share_of(total_amount, policy.contingency_percent),
                percentage: policy.contingency_percent,
            },
            status: BudgetStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    /// Utilization of an allocation, in percent; 0 for an empty allocation.
    #[must_use]
    pub fn utilization(allocated: Decimal, spent: Decimal) -> Decimal {
        percent_of(spent, allocated)
    }
}
