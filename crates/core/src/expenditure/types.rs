//! Expenditure data types.

use chrono::{DateTime, Utc};
use jamii_shared::types::{BudgetCategoryId, EventId, ExpenditureId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amount::check_amount;
use crate::error::FinanceError;

/// Payment status of an expenditure.
///
/// Unknown wire values deserialize as `Other` and count toward neither spent
/// nor pending totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenditureStatus {
    /// Requested, awaiting approval.
    Pending,
    /// Approved but not yet paid.
    Approved,
    /// Paid out.
    Paid,
    /// Rejected by an approver.
    Rejected,
    /// Any status this service does not interpret.
    #[serde(other)]
    Other,
}

/// A single spend against an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expenditure {
    /// Expenditure ID.
    pub id: ExpenditureId,
    /// Owning event.
    pub event_id: EventId,
    /// Budget category the spend is booked against, if any.
    pub category_id: Option<BudgetCategoryId>,
    /// What was bought.
    pub description: String,
    /// Amount spent.
    pub amount: Decimal,
    /// Vendor name.
    pub vendor: Option<String>,
    /// Date of the spend.
    pub date: DateTime<Utc>,
    /// Payment status.
    pub status: ExpenditureStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Expenditure {
    /// Paid expenditures count toward the amount spent.
    #[must_use]
    pub fn is_paid(&self) -> bool {
        self.status == ExpenditureStatus::Paid
    }

    /// Approved, unpaid expenditures count toward pending payments.
    #[must_use]
    pub fn is_pending_payment(&self) -> bool {
        self.status == ExpenditureStatus::Approved
    }

    /// Vendor name if present and not blank.
    #[must_use]
    pub fn vendor_name(&self) -> Option<&str> {
        self.vendor
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}

/// An expenditure before it has been assigned an ID.
#[derive(Debug, Clone)]
pub struct NewExpenditure {
    /// Owning event.
    pub event_id: EventId,
    /// Budget category, if any. Not checked against the budget.
    pub category_id: Option<BudgetCategoryId>,
    /// What was bought.
    pub description: String,
    /// Amount spent.
    pub amount: Decimal,
    /// Vendor name.
    pub vendor: Option<String>,
    /// Date of the spend; defaults to the recording time.
    pub date: Option<DateTime<Utc>>,
    /// Payment status.
    pub status: ExpenditureStatus,
}

impl NewExpenditure {
    /// Assigns a fresh ID and timestamps.
    ///
    /// # Errors
    ///
    /// Returns `FinanceError::NegativeExpenditure` if the amount is negative,
    /// or `FinanceError::AmountOutOfRange` if it exceeds the accepted maximum.
    pub fn into_expenditure(self, now: DateTime<Utc>) -> Result<Expenditure, FinanceError> {
        if self.amount < Decimal::ZERO {
            return Err(FinanceError::NegativeExpenditure(self.amount));
        }
        check_amount(self.amount)?;

        Ok(Expenditure {
            id: ExpenditureId::new(),
            event_id: self.event_id,
            category_id: self.category_id,
            description: self.description,
            amount: self.amount,
            vendor: self.vendor,
            date: self.date.unwrap_or(now),
            status: self.status,
            created_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn new_expenditure(amount: Decimal) -> NewExpenditure {
        NewExpenditure {
            event_id: EventId::from("e1"),
            category_id: None,
            description: "Chairs".to_string(),
            amount,
            vendor: Some("  ".to_string()),
            date: None,
            status: ExpenditureStatus::Paid,
        }
    }

    #[test]
    fn test_into_expenditure_assigns_id_and_date() {
        let now = Utc::now();
        let first = new_expenditure(dec!(10)).into_expenditure(now).unwrap();
        let second = new_expenditure(dec!(10)).into_expenditure(now).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.date, now);
        assert_eq!(first.created_at, now);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = new_expenditure(dec!(-1)).into_expenditure(Utc::now()).unwrap_err();
        assert!(matches!(err, FinanceError::NegativeExpenditure(_)));
    }

    #[test]
    fn test_amount_above_limit_rejected() {
        let err = new_expenditure(dec!(100000000000000000000))
            .into_expenditure(Utc::now())
            .unwrap_err();
        assert!(matches!(err, FinanceError::AmountOutOfRange(_)));
    }

    #[test]
    fn test_blank_vendor_is_ignored() {
        let e = new_expenditure(dec!(5)).into_expenditure(Utc::now()).unwrap();
        assert_eq!(e.vendor_name(), None);
    }

    #[test]
    fn test_unknown_status_deserializes_as_other() {
        let status: ExpenditureStatus = serde_json::from_str("\"refunded\"").unwrap();
        assert_eq!(status, ExpenditureStatus::Other);

        let status: ExpenditureStatus = serde_json::from_str("\"paid\"").unwrap();
        assert_eq!(status, ExpenditureStatus::Paid);
    }
}
