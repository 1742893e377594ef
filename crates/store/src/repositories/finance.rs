//! Event finance repository.

use std::sync::Arc;

use chrono::Utc;
use jamii_core::FinanceError;
use jamii_core::amount::check_amount;
use jamii_core::budget::{Budget, BudgetService};
use jamii_core::event::{EventFinanceProfile, EventFinancialData, EventFinances};
use jamii_core::expenditure::{Expenditure, NewExpenditure};
use jamii_core::fundraising::{DonationInput, Fundraising, FundraisingService};
use jamii_core::reports::{
    FinancialReport, FinancialSummary, ReportService, ReportType, SummaryService,
};
use jamii_shared::FinancePolicy;
use jamii_shared::types::EventId;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::store::FinanceStore;

/// Repository running finance operations against a shared store.
#[derive(Debug, Clone)]
pub struct FinanceRepository {
    store: Arc<FinanceStore>,
    policy: Arc<FinancePolicy>,
}

impl FinanceRepository {
    /// Creates a new finance repository.
    #[must_use]
    pub fn new(store: Arc<FinanceStore>, policy: FinancePolicy) -> Self {
        Self {
            store,
            policy: Arc::new(policy),
        }
    }

    /// The policy this repository applies.
    #[must_use]
    pub fn policy(&self) -> &FinancePolicy {
        &self.policy
    }

    /// Creates the campaign, budget, and empty expenditure list for an event.
    ///
    /// Existing records for the event are replaced, not merged.
    ///
    /// # Errors
    ///
    /// Returns `FinanceError::TrackingDisabled` if the event has not opted
    /// into financial tracking, or `FinanceError::AmountOutOfRange` if the
    /// target or budget total is negative or above
    /// [`MAX_AMOUNT`](jamii_core::amount::MAX_AMOUNT). Nothing is created in
    /// either case.
    pub fn initialize_event_finances(
        &self,
        event: &EventFinanceProfile,
        initial_budget: Option<Decimal>,
        fundraising_target: Option<Decimal>,
    ) -> Result<EventFinances, FinanceError> {
        if !event.uses_financial_tracking {
            debug!(event_id = %event.id, "Financial tracking disabled, skipping initialization");
            return Err(FinanceError::TrackingDisabled(event.id.clone()));
        }

        let target = check_amount(event.fundraising_target(fundraising_target))?;
        let total = check_amount(event.budget_total(initial_budget))?;

        let currency = event.currency.clone();
        let fundraising = self.create_fundraising(&event.id, target, currency.clone())?;
        let budget = self.create_budget(&event.id, total, currency)?;
        self.store.expenditures.insert(event.id.clone(), Vec::new());

        info!(
            event_id = %event.id,
            title = %event.title,
            target = %fundraising.target_amount,
            budget = %budget.total_amount,
            "Event finances initialized"
        );

        Ok(EventFinances {
            fundraising,
            budget,
        })
    }

    /// Creates a fundraising campaign, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns `FinanceError::AmountOutOfRange` for a negative target or one
    /// above `MAX_AMOUNT`.
    pub fn create_fundraising(
        &self,
        event_id: &EventId,
        target_amount: Decimal,
        currency: Option<String>,
    ) -> Result<Fundraising, FinanceError> {
        let campaign = FundraisingService::create(
            event_id.clone(),
            check_amount(target_amount)?,
            self.currency_or_default(currency),
            &self.policy,
            Utc::now(),
        );

        if self
            .store
            .fundraising
            .insert(event_id.clone(), campaign.clone())
            .is_some()
        {
            warn!(event_id = %event_id, "Replaced existing fundraising campaign");
        }
        info!(event_id = %event_id, campaign_id = %campaign.id, "Fundraising campaign created");

        Ok(campaign)
    }

    /// Creates a budget with the default category split, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns `FinanceError::AmountOutOfRange` for a negative total or one
    /// above `MAX_AMOUNT`.
    pub fn create_budget(
        &self,
        event_id: &EventId,
        total_budget: Decimal,
        currency: Option<String>,
    ) -> Result<Budget, FinanceError> {
        let budget = BudgetService::create(
            event_id.clone(),
            check_amount(total_budget)?,
            self.currency_or_default(currency),
            &self.policy,
            Utc::now(),
        );

        if self
            .store
            .budgets
            .insert(event_id.clone(), budget.clone())
            .is_some()
        {
            warn!(event_id = %event_id, "Replaced existing budget");
        }
        info!(event_id = %event_id, budget_id = %budget.id, "Budget created");

        Ok(budget)
    }

    /// Records a donation and returns the updated campaign.
    ///
    /// # Errors
    ///
    /// Returns `FinanceError::FundraisingNotFound` if the event has no
    /// campaign, `FinanceError::NonPositiveDonation` for a zero or
    /// negative amount, or `FinanceError::AmountOutOfRange` when the amount
    /// or the new running total passes `MAX_AMOUNT`.
    pub fn add_donation(
        &self,
        event_id: &EventId,
        input: DonationInput,
    ) -> Result<Fundraising, FinanceError> {
        let mut campaign = self
            .store
            .fundraising
            .get_mut(event_id)
            .ok_or_else(|| FinanceError::FundraisingNotFound(event_id.clone()))?;

        let applied = FundraisingService::apply_donation(&mut campaign, input, Utc::now())?;

        if applied.method.is_none() {
            warn!(
                event_id = %event_id,
                method = %applied.donation.method,
                amount = %applied.donation.amount,
                "Donation method has no bucket, amount left unattributed"
            );
        }
        if applied.completed_campaign {
            info!(event_id = %event_id, "Fundraising target reached");
        }
        debug!(
            event_id = %event_id,
            donation_id = %applied.donation.id,
            amount = %applied.donation.amount,
            "Donation recorded"
        );

        Ok(campaign.value().clone())
    }

    /// Stores an expenditure under a fresh ID.
    ///
    /// The category reference is not checked against the event's budget.
    ///
    /// # Errors
    ///
    /// Returns `FinanceError::NegativeExpenditure` for a negative amount or
    /// `FinanceError::AmountOutOfRange` for one above `MAX_AMOUNT`.
    pub fn add_expenditure(&self, expenditure: NewExpenditure) -> Result<Expenditure, FinanceError> {
        let stored = expenditure.into_expenditure(Utc::now())?;

        self.store
            .expenditures
            .entry(stored.event_id.clone())
            .or_default()
            .push(stored.clone());

        info!(
            event_id = %stored.event_id,
            expenditure_id = %stored.id,
            amount = %stored.amount,
            "Expenditure recorded"
        );

        Ok(stored)
    }

    /// Computes the financial summary for an event.
    ///
    /// # Errors
    ///
    /// Returns `FinanceError::FundraisingNotFound` or
    /// `FinanceError::BudgetNotFound` if either record is missing.
    pub fn generate_financial_summary(
        &self,
        event_id: &EventId,
    ) -> Result<FinancialSummary, FinanceError> {
        let fundraising = self
            .store
            .fundraising
            .get(event_id)
            .ok_or_else(|| FinanceError::FundraisingNotFound(event_id.clone()))?;
        let budget = self
            .store
            .budgets
            .get(event_id)
            .ok_or_else(|| FinanceError::BudgetNotFound(event_id.clone()))?;
        let expenditures = self.store.expenditures.get(event_id);
        let expenditures = expenditures.as_deref().map_or(&[][..], Vec::as_slice);

        Ok(SummaryService::compute(
            &fundraising,
            &budget,
            expenditures,
            &self.policy,
        ))
    }

    /// Builds an insight-annotated report for an event.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::generate_financial_summary`].
    pub fn generate_report(
        &self,
        event_id: &EventId,
        report_type: ReportType,
        generated_by: &str,
    ) -> Result<FinancialReport, FinanceError> {
        let summary = self.generate_financial_summary(event_id)?;
        let report = ReportService::build(
            summary,
            report_type,
            generated_by,
            &self.policy,
            Utc::now(),
        );

        info!(
            event_id = %event_id,
            report_id = %report.id,
            report_type = %report_type,
            insights = report.insights.len(),
            "Financial report generated"
        );

        Ok(report)
    }

    /// Returns the raw records and, when available, the summary.
    #[must_use]
    pub fn get_event_financial_data(&self, event_id: &EventId) -> EventFinancialData {
        let fundraising = self.store.fundraising.get(event_id).map(|r| r.value().clone());
        let budget = self.store.budgets.get(event_id).map(|r| r.value().clone());
        let expenditures = self
            .store
            .expenditures
            .get(event_id)
            .map(|r| r.value().clone())
            .unwrap_or_default();

        let summary = match (&fundraising, &budget) {
            (Some(f), Some(b)) => Some(SummaryService::compute(f, b, &expenditures, &self.policy)),
            _ => None,
        };

        EventFinancialData {
            fundraising,
            budget,
            expenditures,
            summary,
        }
    }

    /// Number of events with a fundraising campaign.
    #[must_use]
    pub fn campaign_count(&self) -> usize {
        self.store.campaign_count()
    }

    fn currency_or_default(&self, currency: Option<String>) -> String {
        currency
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| self.policy.default_currency.clone())
    }
}

#[cfg(test)]
#[path = "finance_tests.rs"]
mod tests;
