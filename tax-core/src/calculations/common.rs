//! Shared helpers for tax calculations.

use rust_decimal::Decimal;

/// Clamps a computed amount to zero. Negative tax or negative credits mean
/// "nothing owed", not an error.
pub fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Divides `numerator` by `denominator`, substituting zero when the
/// denominator is zero or negative. Used for effective-rate and
/// savings-per-dollar figures, which must never propagate non-finite or
/// nonsensical values.
pub fn ratio_or_zero(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator > Decimal::ZERO {
        numerator / denominator
    } else {
        Decimal::ZERO
    }
}
