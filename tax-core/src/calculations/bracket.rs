//! Progressive bracket taxation and marginal-rate lookup.
//!
//! The bracket walk is the foundation shared by the federal and provincial
//! calculators: income is taxed slice by slice, each slice at the rate of
//! the bracket it falls in. Schedules are ascending, gap-free and end in an
//! unbounded bracket (`max: None`), so the walk terminates for arbitrarily
//! large incomes.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::TaxBracket;
//! use tax_core::calculations::{bracket_tax, marginal_rate};
//!
//! let brackets = vec![
//!     TaxBracket::new(dec!(0), Some(dec!(50000)), dec!(0.15)),
//!     TaxBracket::new(dec!(50000), None, dec!(0.26)),
//! ];
//!
//! // 50000 * 0.15 + 10000 * 0.26 = 7500 + 2600
//! assert_eq!(bracket_tax(dec!(60000), &brackets), dec!(10100.00));
//! assert_eq!(marginal_rate(dec!(60000), &brackets), dec!(0.26));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::non_negative;
use crate::models::TaxBracket;

/// Applies a marginal-bracket schedule to an income figure.
///
/// Walks the brackets in ascending order, taxing the portion of income that
/// falls in each one. `previous_max` advances to the bracket's upper bound
/// whether or not the bracket contributed, which keeps the walk correct
/// across zero-width brackets. The result is never negative.
pub fn bracket_tax(income: Decimal, brackets: &[TaxBracket]) -> Decimal {
    if income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let mut tax = Decimal::ZERO;
    let mut previous_max = Decimal::ZERO;

    for bracket in brackets {
        if income <= previous_max {
            break;
        }

        let ceiling = bracket.max.map_or(income, |max| max.min(income));
        let taxable_in_bracket = ceiling - previous_max;
        if taxable_in_bracket > Decimal::ZERO {
            tax += taxable_in_bracket * bracket.rate;
        }
        previous_max = bracket.max.unwrap_or(income);
    }

    non_negative(tax)
}

/// Returns the rate applying to the next dollar of income.
///
/// Scans ascending brackets and returns the rate of the first bracket whose
/// upper bound is at or above `income`. An income at an exact bracket
/// boundary belongs to the lower bracket. Falls back to the last bracket's
/// rate, which only matters for schedules missing an unbounded top bracket.
pub fn marginal_rate(income: Decimal, brackets: &[TaxBracket]) -> Decimal {
    for bracket in brackets {
        match bracket.max {
            Some(max) if income > max => continue,
            _ => return bracket.rate,
        }
    }

    brackets.last().map_or(Decimal::ZERO, |bracket| bracket.rate)
}

/// Combined federal + provincial marginal rate at one income level.
pub fn combined_marginal_rate(
    income: Decimal,
    federal_brackets: &[TaxBracket],
    provincial_brackets: &[TaxBracket],
) -> Decimal {
    marginal_rate(income, federal_brackets) + marginal_rate(income, provincial_brackets)
}
