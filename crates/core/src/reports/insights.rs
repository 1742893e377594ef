//! Rule-based insights over a financial summary.

use std::cmp::Ordering;

use jamii_shared::FinancePolicy;
use rust_decimal::Decimal;

use super::types::{FinancialSummary, Insight, InsightCategory, InsightTrend};
use crate::ratio::cmp_percent;

/// Evaluates fixed threshold rules against a summary.
pub struct InsightService;

impl InsightService {
    /// Produces insights in a fixed order: fundraising, budget, profit.
    ///
    /// Rules compare the exact amounts; the rounded percentages in the
    /// summary are only used for display.
    #[must_use]
    pub fn generate(summary: &FinancialSummary, policy: &FinancePolicy) -> Vec<Insight> {
        let mut insights = Vec::new();

        let fundraising = &summary.fundraising;
        let completion = fundraising.completion_percentage;
        let low_progress = cmp_percent(
            fundraising.current_amount,
            fundraising.target_amount,
            policy.low_fundraising_percent,
        )
        .map_or(completion < policy.low_fundraising_percent, Ordering::is_lt);
        if low_progress {
            insights.push(Insight {
                category: InsightCategory::Fundraising,
                title: "Low Fundraising Progress".to_string(),
                description: format!(
                    "Only {}% of the fundraising target has been raised.",
                    completion.normalize()
                ),
                value: completion,
                trend: InsightTrend::Negative,
            });
        }

        let overrun = summary
            .budget
            .categories
            .iter()
            .filter(|c| c.allocated_amount > Decimal::ZERO && c.spent > c.allocated_amount)
            .count();
        if overrun > 0 {
            let noun = if overrun == 1 { "category" } else { "categories" };
            insights.push(Insight {
                category: InsightCategory::Budget,
                title: "Budget Overrun".to_string(),
                description: format!("{overrun} budget {noun} exceeded their allocation."),
                value: Decimal::from(overrun),
                trend: InsightTrend::Negative,
            });
        }

        let profit_loss = &summary.profit_loss;
        let margin = profit_loss.profit_margin;
        let exact_margin =
            |threshold| cmp_percent(profit_loss.net_profit, profit_loss.revenue, threshold);
        if exact_margin(Decimal::ZERO).is_some_and(Ordering::is_lt) {
            insights.push(Insight {
                category: InsightCategory::Profitability,
                title: "Negative Profit Margin".to_string(),
                description: format!(
                    "Expenses exceed revenue; profit margin is {}%.",
                    margin.normalize()
                ),
                value: margin,
                trend: InsightTrend::Negative,
            });
        } else if exact_margin(policy.healthy_margin_percent).is_some_and(Ordering::is_gt) {
            insights.push(Insight {
                category: InsightCategory::Profitability,
                title: "Healthy Profit Margin".to_string(),
                description: format!(
                    "The event is running a {}% profit margin.",
                    margin.normalize()
                ),
                value: margin,
                trend: InsightTrend::Positive,
            });
        }

        insights
    }
}
