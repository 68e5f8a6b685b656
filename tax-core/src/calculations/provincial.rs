//! Provincial tax with optional surtax layering.
//!
//! Provincial tax follows the same bracket-and-credit shape as federal tax,
//! with one addition: provinces with a surtax (Ontario) levy it on the
//! computed bracket tax itself, not on income. The surtax is applied before
//! the basic-personal-amount credit comes off.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::{ProvincialTaxData, Surtax, TaxBracket};
//! use tax_core::calculations::ProvincialCalculator;
//!
//! let data = ProvincialTaxData {
//!     brackets: vec![TaxBracket::new(dec!(0), None, dec!(0.10))],
//!     basic_personal_amount: dec!(12000),
//!     surtax: Some(Surtax {
//!         threshold1: dec!(5000),
//!         rate1: dec!(0.20),
//!         threshold2: dec!(7000),
//!         rate2: dec!(0.36),
//!     }),
//! };
//!
//! let calculator = ProvincialCalculator::new(&data);
//!
//! // Bracket tax 6000, plus (6000 - 5000) * 0.20 surtax
//! assert_eq!(calculator.gross_tax(dec!(60000)), dec!(6200.00));
//! ```

use rust_decimal::Decimal;

use crate::calculations::bracket::{bracket_tax, marginal_rate};
use crate::calculations::common::non_negative;
use crate::models::ProvincialTaxData;

/// Provincial tax calculator for one province's [`ProvincialTaxData`].
#[derive(Debug, Clone)]
pub struct ProvincialCalculator<'a> {
    data: &'a ProvincialTaxData,
}

impl<'a> ProvincialCalculator<'a> {
    pub fn new(data: &'a ProvincialTaxData) -> Self {
        Self { data }
    }

    /// Bracket tax on taxable income with any surtax layered on top,
    /// before credits. Never negative.
    pub fn gross_tax(&self, taxable_income: Decimal) -> Decimal {
        let mut tax = bracket_tax(taxable_income, &self.data.brackets);

        if let Some(surtax) = &self.data.surtax {
            tax += surtax.additional_tax(tax);
        }

        non_negative(tax)
    }

    /// The provincial basic personal amount converted to a credit at the
    /// lowest bracket's rate.
    pub fn basic_personal_credit(&self) -> Decimal {
        let lowest_rate = self
            .data
            .brackets
            .first()
            .map_or(Decimal::ZERO, |bracket| bracket.rate);
        self.data.basic_personal_amount * lowest_rate
    }

    /// Provincial tax payable after the basic personal credit and any
    /// additional non-refundable credits. Never negative.
    pub fn tax_payable(&self, taxable_income: Decimal, extra_credits: Decimal) -> Decimal {
        let credits = self.basic_personal_credit() + extra_credits;
        non_negative(self.gross_tax(taxable_income) - credits)
    }

    /// Provincial marginal rate at `taxable_income`.
    pub fn marginal_rate(&self, taxable_income: Decimal) -> Decimal {
        marginal_rate(taxable_income, &self.data.brackets)
    }
}
