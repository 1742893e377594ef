//! Summary and report generation.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use jamii_shared::FinancePolicy;
use jamii_shared::types::ReportId;
use rust_decimal::Decimal;

use super::insights::InsightService;
use super::types::{
    BudgetSummary, CategorySummary, CategoryVariance, DateRange, DonationMethodSummary,
    ExpenditureSummary, FinancialRatios, FinancialReport, FinancialSummary, FundraisingSummary,
    MonthlySpending, ProfitLoss, ReportType, VendorSpending,
};
use crate::budget::{Budget, BudgetService, BudgetVariance};
use crate::expenditure::Expenditure;
use crate::fundraising::{Fundraising, FundraisingService};
use crate::ratio::percent_of;

/// Service for computing financial summaries.
///
/// Every function is pure: the same inputs always produce the same summary.
pub struct SummaryService;

impl SummaryService {
    /// Computes the full summary for one event.
    #[must_use]
    pub fn compute(
        fundraising: &Fundraising,
        budget: &Budget,
        expenditures: &[Expenditure],
        policy: &FinancePolicy,
    ) -> FinancialSummary {
        let fundraising_summary = Self::fundraising_summary(fundraising, policy);
        let expenditure_summary = Self::expenditure_summary(expenditures, policy);
        let budget_summary = Self::budget_summary(budget, expenditures);

        let budget_vs_actual = budget_summary
            .categories
            .iter()
            .map(|c| CategoryVariance {
                category_id: c.category_id,
                category: c.name.clone(),
                variance: BudgetVariance::for_expense(c.allocated_amount, c.spent),
            })
            .collect();

        let profit_loss = Self::profit_loss(
            fundraising.current_amount,
            expenditure_summary.total_spent,
        );
        let ratios = Self::ratios(&profit_loss, policy);

        FinancialSummary {
            event_id: fundraising.event_id.clone(),
            currency: fundraising.currency.clone(),
            fundraising: fundraising_summary,
            budget: budget_summary,
            expenditures: expenditure_summary,
            profit_loss,
            budget_vs_actual,
            ratios,
        }
    }

    /// Fundraising progress and the highest-earning donation methods.
    #[must_use]
    pub fn fundraising_summary(
        fundraising: &Fundraising,
        policy: &FinancePolicy,
    ) -> FundraisingSummary {
        let mut methods: Vec<_> = fundraising
            .donation_methods
            .iter()
            .filter(|m| m.amount > Decimal::ZERO)
            .collect();
        // Stable sort keeps seeding order among equal amounts.
        methods.sort_by(|a, b| b.amount.cmp(&a.amount));

        let top_donation_methods = methods
            .into_iter()
            .take(policy.top_method_limit)
            .map(|m| DonationMethodSummary {
                method: m.method,
                amount: m.amount,
                percentage: m.percentage,
                donation_count: fundraising
                    .donations
                    .iter()
                    .filter(|d| d.method == m.method.as_str())
                    .count(),
            })
            .collect();

        FundraisingSummary {
            target_amount: fundraising.target_amount,
            current_amount: fundraising.current_amount,
            completion_percentage: FundraisingService::completion_percentage(fundraising),
            donation_count: fundraising.donations.len(),
            unattributed_amount: fundraising.unattributed_amount,
            target_variance: BudgetVariance::for_revenue(
                fundraising.target_amount,
                fundraising.current_amount,
            ),
            top_donation_methods,
        }
    }

    /// Per-category spending. Expenditures booked against unknown categories
    /// are never matched.
    #[must_use]
    pub fn budget_summary(budget: &Budget, expenditures: &[Expenditure]) -> BudgetSummary {
        let categories = budget
            .categories
            .iter()
            .map(|category| {
                let spent: Decimal = expenditures
                    .iter()
                    .filter(|e| e.is_paid() && e.category_id == Some(category.id))
                    .map(|e| e.amount)
                    .sum();

                CategorySummary {
                    category_id: category.id,
                    name: category.name.clone(),
                    priority: category.priority,
                    allocated_amount: category.allocated_amount,
                    spent,
                    remaining: category.allocated_amount - spent,
                    utilization_percentage: BudgetService::utilization(
                        category.allocated_amount,
                        spent,
                    ),
                }
            })
            .collect();

        BudgetSummary {
            total_budget: budget.total_amount,
            total_allocated: budget.total_allocated(),
            contingency_amount: budget.contingency.amount,
            categories,
        }
    }

    /// Spending totals, top vendors, and monthly spending.
    #[must_use]
    pub fn expenditure_summary(
        expenditures: &[Expenditure],
        policy: &FinancePolicy,
    ) -> ExpenditureSummary {
        let paid: Vec<&Expenditure> = expenditures.iter().filter(|e| e.is_paid()).collect();

        let total_spent: Decimal = paid.iter().map(|e| e.amount).sum();
        let pending_payments: Decimal = expenditures
            .iter()
            .filter(|e| e.is_pending_payment())
            .map(|e| e.amount)
            .sum();

        let mut vendors: BTreeMap<&str, (Decimal, usize)> = BTreeMap::new();
        for e in &paid {
            if let Some(vendor) = e.vendor_name() {
                let entry = vendors.entry(vendor).or_insert((Decimal::ZERO, 0));
                entry.0 += e.amount;
                entry.1 += 1;
            }
        }
        let mut top_vendors: Vec<VendorSpending> = vendors
            .into_iter()
            .map(|(vendor, (amount, transaction_count))| VendorSpending {
                vendor: vendor.to_string(),
                amount,
                transaction_count,
            })
            .collect();
        top_vendors.sort_by(|a, b| b.amount.cmp(&a.amount));
        top_vendors.truncate(policy.top_vendor_limit);

        let mut months: BTreeMap<String, Decimal> = BTreeMap::new();
        for e in &paid {
            *months
                .entry(e.date.format("%Y-%m").to_string())
                .or_insert(Decimal::ZERO) += e.amount;
        }
        let monthly_spending = months
            .into_iter()
            .map(|(month, amount)| MonthlySpending { month, amount })
            .collect();

        ExpenditureSummary {
            total_spent,
            pending_payments,
            expenditure_count: expenditures.len(),
            top_vendors,
            monthly_spending,
        }
    }

    /// Net profit and margin; margin is 0 without revenue.
    #[must_use]
    pub fn profit_loss(revenue: Decimal, expenses: Decimal) -> ProfitLoss {
        let net_profit = revenue - expenses;
        ProfitLoss {
            revenue,
            expenses,
            net_profit,
            profit_margin: percent_of(net_profit, revenue),
        }
    }

    /// Cost per attendee and ROI; ROI is 0 without expenses.
    #[must_use]
    pub fn ratios(profit_loss: &ProfitLoss, policy: &FinancePolicy) -> FinancialRatios {
        // TODO: divide by registered attendance once event registrations feed this service.
        let divisor = policy.attendee_divisor();

        FinancialRatios {
            cost_per_attendee: (profit_loss.expenses / divisor).round_dp(2),
            attendee_count: policy.assumed_attendees.max(1),
            roi: percent_of(profit_loss.net_profit, profit_loss.expenses),
        }
    }
}

/// Service for wrapping summaries into reports.
pub struct ReportService;

impl ReportService {
    /// Builds a report over the trailing window ending at `now`.
    ///
    /// The window is a label; it is not derived from transaction dates.
    #[must_use]
    pub fn build(
        summary: FinancialSummary,
        report_type: ReportType,
        generated_by: impl Into<String>,
        policy: &FinancePolicy,
        now: DateTime<Utc>,
    ) -> FinancialReport {
        let insights = InsightService::generate(&summary, policy);

        FinancialReport {
            id: ReportId::new(),
            event_id: summary.event_id.clone(),
            report_type,
            generated_date: now,
            generated_by: generated_by.into(),
            date_range: DateRange {
                start: now - Duration::days(policy.report_window_days),
                end: now,
            },
            summary,
            insights,
        }
    }
}
