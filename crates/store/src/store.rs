//! In-memory storage for event finance records.

use dashmap::DashMap;
use jamii_core::budget::Budget;
use jamii_core::expenditure::Expenditure;
use jamii_core::fundraising::Fundraising;
use jamii_shared::types::EventId;

/// Process-local store owning the three finance collections.
///
/// Each map entry is guarded by its shard lock, so every mutation of one
/// event's record is serialized against other writers of the same event.
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct FinanceStore {
    pub(crate) fundraising: DashMap<EventId, Fundraising>,
    pub(crate) budgets: DashMap<EventId, Budget>,
    pub(crate) expenditures: DashMap<EventId, Vec<Expenditure>>,
}

impl FinanceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events with a fundraising campaign.
    #[must_use]
    pub fn campaign_count(&self) -> usize {
        self.fundraising.len()
    }

    /// Number of events with a budget.
    #[must_use]
    pub fn budget_count(&self) -> usize {
        self.budgets.len()
    }
}
