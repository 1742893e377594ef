//! Financial summary and report types.

use chrono::{DateTime, Utc};
use jamii_shared::CategoryPriority;
use jamii_shared::types::{BudgetCategoryId, EventId, ReportId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::BudgetVariance;
use crate::error::FinanceError;
use crate::fundraising::DonationMethod;

/// A donation method ranked by amount raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationMethodSummary {
    /// Donation method.
    pub method: DonationMethod,
    /// Amount raised through the method.
    pub amount: Decimal,
    /// Share of the current amount, in percent.
    pub percentage: Decimal,
    /// Number of donations recorded against the method.
    pub donation_count: usize,
}

/// Fundraising section of a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundraisingSummary {
    /// Campaign target.
    pub target_amount: Decimal,
    /// Amount raised so far.
    pub current_amount: Decimal,
    /// Raised amount as a percentage of the target.
    pub completion_percentage: Decimal,
    /// Number of donations.
    pub donation_count: usize,
    /// Money received through methods with no bucket.
    pub unattributed_amount: Decimal,
    /// Target vs raised, favorable when over target.
    pub target_variance: BudgetVariance,
    /// Highest-earning methods.
    pub top_donation_methods: Vec<DonationMethodSummary>,
}

/// Spending against one budget category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    /// Category ID.
    pub category_id: BudgetCategoryId,
    /// Category name.
    pub name: String,
    /// Priority tag.
    pub priority: CategoryPriority,
    /// Amount allocated.
    pub allocated_amount: Decimal,
    /// Amount paid out.
    pub spent: Decimal,
    /// Allocation minus spent; negative when overspent.
    pub remaining: Decimal,
    /// Spent as a percentage of the allocation.
    pub utilization_percentage: Decimal,
}

/// Budget section of a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    /// Total budget.
    pub total_budget: Decimal,
    /// Sum of category allocations.
    pub total_allocated: Decimal,
    /// Contingency reserve.
    pub contingency_amount: Decimal,
    /// Per-category spending.
    pub categories: Vec<CategorySummary>,
}

/// Spending with one vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorSpending {
    /// Vendor name.
    pub vendor: String,
    /// Total paid to the vendor.
    pub amount: Decimal,
    /// Number of paid expenditures.
    pub transaction_count: usize,
}

/// Spending in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySpending {
    /// Month key, `YYYY-MM`.
    pub month: String,
    /// Total paid in the month.
    pub amount: Decimal,
}

/// Expenditure section of a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenditureSummary {
    /// Sum of paid expenditures.
    pub total_spent: Decimal,
    /// Sum of approved, unpaid expenditures.
    pub pending_payments: Decimal,
    /// Number of recorded expenditures, any status.
    pub expenditure_count: usize,
    /// Vendors by amount paid, descending.
    pub top_vendors: Vec<VendorSpending>,
    /// Paid amounts per month, ascending by month.
    pub monthly_spending: Vec<MonthlySpending>,
}

/// Revenue against expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitLoss {
    /// Amount raised.
    pub revenue: Decimal,
    /// Amount paid out.
    pub expenses: Decimal,
    /// Revenue minus expenses.
    pub net_profit: Decimal,
    /// Net profit as a percentage of revenue.
    pub profit_margin: Decimal,
}

/// Allocation vs actual for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryVariance {
    /// Category ID.
    pub category_id: BudgetCategoryId,
    /// Category name.
    pub category: String,
    /// Variance figures.
    #[serde(flatten)]
    pub variance: BudgetVariance,
}

/// Derived efficiency ratios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRatios {
    /// Total spent divided by the attendee count.
    pub cost_per_attendee: Decimal,
    /// Attendee count the cost was divided by.
    pub attendee_count: u32,
    /// Return on investment, in percent.
    pub roi: Decimal,
}

/// Derived financial view of one event. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    /// Event the summary describes.
    pub event_id: EventId,
    /// Currency of the fundraising campaign.
    pub currency: String,
    /// Fundraising section.
    pub fundraising: FundraisingSummary,
    /// Budget section.
    pub budget: BudgetSummary,
    /// Expenditure section.
    pub expenditures: ExpenditureSummary,
    /// Profit and loss.
    pub profit_loss: ProfitLoss,
    /// Per-category variance.
    pub budget_vs_actual: Vec<CategoryVariance>,
    /// Derived ratios.
    pub ratios: FinancialRatios,
}

/// Qualitative direction of an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightTrend {
    /// Good news.
    Positive,
    /// Needs attention.
    Negative,
}

/// Area an insight is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    /// Fundraising progress.
    Fundraising,
    /// Budget utilization.
    Budget,
    /// Profitability.
    Profitability,
}

/// A rule-triggered observation attached to a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    /// Area the insight is about.
    pub category: InsightCategory,
    /// Short title.
    pub title: String,
    /// Human-readable explanation.
    pub description: String,
    /// The figure that triggered the rule.
    pub value: Decimal,
    /// Direction.
    pub trend: InsightTrend,
}

/// Kind of report requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    /// Overall summary.
    Summary,
    /// Full detail.
    Detailed,
    /// Fundraising focus.
    Fundraising,
    /// Budget focus.
    Budget,
    /// Expenditure focus.
    Expenditure,
}

impl ReportType {
    /// Returns the wire name of the report type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Detailed => "detailed",
            Self::Fundraising => "fundraising",
            Self::Budget => "budget",
            Self::Expenditure => "expenditure",
        }
    }
}

impl std::str::FromStr for ReportType {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" => Ok(Self::Summary),
            "detailed" => Ok(Self::Detailed),
            "fundraising" => Ok(Self::Fundraising),
            "budget" => Ok(Self::Budget),
            "expenditure" => Ok(Self::Expenditure),
            _ => Err(FinanceError::UnknownReportType(s.to_string())),
        }
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Covered period of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    /// Start of the window.
    pub start: DateTime<Utc>,
    /// End of the window.
    pub end: DateTime<Utc>,
}

/// A summary wrapped with report metadata and insights. Never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialReport {
    /// Report ID.
    pub id: ReportId,
    /// Event the report describes.
    pub event_id: EventId,
    /// Kind of report.
    pub report_type: ReportType,
    /// Generation time.
    pub generated_date: DateTime<Utc>,
    /// Who asked for the report.
    pub generated_by: String,
    /// Trailing window the report is labelled with.
    pub date_range: DateRange,
    /// The summary.
    pub summary: FinancialSummary,
    /// Rule-based observations.
    pub insights: Vec<Insight>,
}
