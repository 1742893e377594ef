//! Percentage helpers shared by the finance calculations.
//!
//! Display values are rounded to two places; threshold rules go through
//! [`cmp_percent`], which never rounds.

use std::cmp::Ordering;

use rust_decimal::Decimal;

/// `part / whole * 100` rounded to two places, 0 when `whole` is 0.
///
/// Ratios beyond the representable range saturate at `Decimal::MAX` or
/// `Decimal::MIN`.
#[must_use]
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }

    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map_or_else(|| saturated(part, whole), |pct| pct.round_dp(2))
}

/// Compares the exact value of `part / whole * 100` with `percent`.
///
/// Returns `None` when `whole` is 0.
#[must_use]
pub fn cmp_percent(part: Decimal, whole: Decimal, percent: Decimal) -> Option<Ordering> {
    if whole.is_zero() {
        return None;
    }

    // part / whole vs percent / 100, cross-multiplied
    if let (Some(lhs), Some(rhs)) = (
        part.checked_mul(Decimal::ONE_HUNDRED),
        whole.checked_mul(percent),
    ) {
        return Some(if whole.is_sign_positive() {
            lhs.cmp(&rhs)
        } else {
            rhs.cmp(&lhs)
        });
    }

    let ratio = part
        .checked_div(whole)
        .unwrap_or_else(|| saturated(part, whole));
    Some(ratio.cmp(&(percent / Decimal::ONE_HUNDRED)))
}

/// `total * percent / 100`, exact for any policy share in `0..=100`.
#[must_use]
pub fn share_of(total: Decimal, percent: Decimal) -> Decimal {
    total
        .checked_mul(percent)
        .map(|scaled| scaled / Decimal::ONE_HUNDRED)
        .or_else(|| (total / Decimal::ONE_HUNDRED).checked_mul(percent))
        .unwrap_or_else(|| saturated(total, percent))
}

fn saturated(a: Decimal, b: Decimal) -> Decimal {
    if a.is_sign_negative() == b.is_sign_negative() {
        Decimal::MAX
    } else {
        Decimal::MIN
    }
}
