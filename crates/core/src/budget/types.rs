//! Budget data types.

use chrono::{DateTime, Utc};
use jamii_shared::CategoryPriority;
use jamii_shared::types::{BudgetCategoryId, BudgetId, EventId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Budget approval status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Newly created, still editable.
    Draft,
    /// Approved by the committee.
    Approved,
    /// Event finished, no further spending.
    Closed,
}

/// One spending category of an event budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCategory {
    /// Category ID.
    pub id: BudgetCategoryId,
    /// Display name.
    pub name: String,
    /// Amount allocated to the category.
    pub allocated_amount: Decimal,
    /// Priority tag.
    pub priority: CategoryPriority,
    /// Free-form planned items.
    pub items: Vec<String>,
}

/// Reserve held back from the category allocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contingency {
    /// Reserved amount.
    pub amount: Decimal,
    /// Reserve as a percentage of the total budget.
    pub percentage: Decimal,
}

/// The planned-spend record for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// Budget ID.
    pub id: BudgetId,
    /// Owning event.
    pub event_id: EventId,
    /// Total budget.
    pub total_amount: Decimal,
    /// Currency code.
    pub currency: String,
    /// Category allocations, fixed at creation.
    pub categories: Vec<BudgetCategory>,
    /// Contingency reserve.
    pub contingency: Contingency,
    /// Budget status.
    pub status: BudgetStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Sum of all category allocations.
    #[must_use]
    pub fn total_allocated(&self) -> Decimal {
        self.categories.iter().map(|c| c.allocated_amount).sum()
    }
}
