use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TaxBracket;

/// A two-stage provincial surtax schedule.
///
/// A surtax is a secondary progressive levy applied to the computed
/// provincial tax amount itself, not to income. `threshold1 < threshold2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surtax {
    pub threshold1: Decimal,
    pub rate1: Decimal,
    pub threshold2: Decimal,
    pub rate2: Decimal,
}

impl Surtax {
    /// Returns the surtax owed on a pre-surtax provincial tax amount.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tax_core::Surtax;
    ///
    /// let surtax = Surtax {
    ///     threshold1: dec!(5000),
    ///     rate1: dec!(0.20),
    ///     threshold2: dec!(7000),
    ///     rate2: dec!(0.36),
    /// };
    ///
    /// assert_eq!(surtax.additional_tax(dec!(4000)), dec!(0));
    /// assert_eq!(surtax.additional_tax(dec!(6000)), dec!(200.00));
    /// assert_eq!(surtax.additional_tax(dec!(8000)), dec!(760.00));
    /// ```
    pub fn additional_tax(&self, tax: Decimal) -> Decimal {
        if tax > self.threshold2 {
            (tax - self.threshold2) * self.rate2 + (self.threshold2 - self.threshold1) * self.rate1
        } else if tax > self.threshold1 {
            (tax - self.threshold1) * self.rate1
        } else {
            Decimal::ZERO
        }
    }
}

/// Provincial tax parameters for a single tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvincialTaxData {
    pub brackets: Vec<TaxBracket>,
    pub basic_personal_amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surtax: Option<Surtax>,
}
