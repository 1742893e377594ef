//! Bounds on money amounts accepted from callers.

use rust_decimal::Decimal;

use crate::FinanceError;

/// Largest single amount accepted: 10^15 in the event currency.
///
/// Keeps every running total and percentage far inside `Decimal` range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Checks that an amount lies in `0..=MAX_AMOUNT`.
///
/// # Errors
///
/// Returns `FinanceError::AmountOutOfRange` otherwise.
pub fn check_amount(amount: Decimal) -> Result<Decimal, FinanceError> {
    if amount < Decimal::ZERO || amount > MAX_AMOUNT {
        return Err(FinanceError::AmountOutOfRange(amount));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_max_amount_is_ten_to_the_fifteenth() {
        assert_eq!(MAX_AMOUNT, dec!(1_000_000_000_000_000));
    }

    #[test]
    fn test_check_amount_bounds() {
        assert_eq!(check_amount(Decimal::ZERO).unwrap(), Decimal::ZERO);
        assert_eq!(check_amount(MAX_AMOUNT).unwrap(), MAX_AMOUNT);
        assert!(matches!(
            check_amount(MAX_AMOUNT + dec!(0.01)),
            Err(FinanceError::AmountOutOfRange(_))
        ));
        assert!(matches!(
            check_amount(dec!(-1)),
            Err(FinanceError::AmountOutOfRange(_))
        ));
    }
}
