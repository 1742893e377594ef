//! The slice of an event the finance service reads.

use jamii_shared::types::EventId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::Budget;
use crate::expenditure::Expenditure;
use crate::fundraising::Fundraising;
use crate::reports::FinancialSummary;

/// Finance-relevant fields of a CBO event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFinanceProfile {
    /// Event ID.
    pub id: EventId,
    /// Event title, used in logs.
    #[serde(default)]
    pub title: String,
    /// Whether the event opted into financial tracking.
    pub uses_financial_tracking: bool,
    /// Configured fundraising goal.
    #[serde(default)]
    pub fundraising_goal: Option<Decimal>,
    /// Estimated cost of running the event.
    #[serde(default)]
    pub estimated_cost: Option<Decimal>,
    /// Event currency.
    #[serde(default)]
    pub currency: Option<String>,
}

impl EventFinanceProfile {
    /// Fundraising target: explicit override, else the event goal, else 0.
    #[must_use]
    pub fn fundraising_target(&self, explicit: Option<Decimal>) -> Decimal {
        explicit.or(self.fundraising_goal).unwrap_or(Decimal::ZERO)
    }

    /// Budget total: explicit override, else the estimated cost, else 0.
    #[must_use]
    pub fn budget_total(&self, explicit: Option<Decimal>) -> Decimal {
        explicit.or(self.estimated_cost).unwrap_or(Decimal::ZERO)
    }
}

/// Records created when an event's finances are initialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFinances {
    /// The new fundraising campaign.
    pub fundraising: Fundraising,
    /// The new budget.
    pub budget: Budget,
}

/// Raw records for an event plus the derived summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFinancialData {
    /// Fundraising campaign, if created.
    pub fundraising: Option<Fundraising>,
    /// Budget, if created.
    pub budget: Option<Budget>,
    /// Expenditures in recording order.
    pub expenditures: Vec<Expenditure>,
    /// Summary, present only when both campaign and budget exist.
    pub summary: Option<FinancialSummary>,
}
