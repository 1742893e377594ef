//! Finance error types.

use jamii_shared::{AppError, types::EventId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by event finance operations.
#[derive(Debug, Error)]
pub enum FinanceError {
    /// No fundraising campaign exists for the event.
    #[error("Fundraising campaign not found for event {0}")]
    FundraisingNotFound(EventId),

    /// No budget exists for the event.
    #[error("Budget not found for event {0}")]
    BudgetNotFound(EventId),

    /// The event does not use financial tracking.
    #[error("Financial tracking is disabled for event {0}")]
    TrackingDisabled(EventId),

    /// Donations must carry a positive amount.
    #[error("Donation amount must be positive, got {0}")]
    NonPositiveDonation(Decimal),

    /// Expenditures cannot be negative.
    #[error("Expenditure amount cannot be negative, got {0}")]
    NegativeExpenditure(Decimal),

    /// Amount is negative or above the accepted maximum.
    #[error("Amount {0} is outside the accepted range")]
    AmountOutOfRange(Decimal),

    /// Report type is not recognised.
    #[error("Unknown report type: {0}")]
    UnknownReportType(String),
}

impl FinanceError {
    /// Returns true if the error means a required record is missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::FundraisingNotFound(_) | Self::BudgetNotFound(_))
    }
}

impl From<FinanceError> for AppError {
    fn from(err: FinanceError) -> Self {
        match err {
            FinanceError::FundraisingNotFound(_) | FinanceError::BudgetNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            FinanceError::TrackingDisabled(_) => Self::BusinessRule(err.to_string()),
            FinanceError::NonPositiveDonation(_)
            | FinanceError::NegativeExpenditure(_)
            | FinanceError::AmountOutOfRange(_)
            | FinanceError::UnknownReportType(_) => Self::Validation(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_not_found_maps_to_404() {
        let err: AppError = FinanceError::BudgetNotFound(EventId::from("e1")).into();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.to_string(), "Not found: Budget not found for event e1");
    }

    #[test]
    fn test_validation_errors_map_to_400() {
        let err: AppError = FinanceError::NonPositiveDonation(dec!(-5)).into();
        assert_eq!(err.status_code(), 400);

        let err: AppError = FinanceError::AmountOutOfRange(dec!(100000000000000000000)).into();
        assert_eq!(err.status_code(), 400);

        let err: AppError = FinanceError::UnknownReportType("weekly".into()).into();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_tracking_disabled_is_business_rule() {
        let err = FinanceError::TrackingDisabled(EventId::from("e2"));
        assert!(!err.is_not_found());

        let app: AppError = err.into();
        assert_eq!(app.status_code(), 422);
    }
}
