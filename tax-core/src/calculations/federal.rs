//! Federal tax, basic-personal-amount credit, and CPP/EI payroll amounts.
//!
//! The basic personal amount is modeled the way the rest of the estimator
//! treats non-refundable credits: the dollar amount converts to a credit at
//! the lowest bracket's rate, and credits can reduce tax to zero but never
//! below it.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::{CppParams, EiParams, FederalTaxData, TaxBracket};
//! use tax_core::calculations::FederalCalculator;
//!
//! let data = FederalTaxData {
//!     brackets: vec![
//!         TaxBracket::new(dec!(0), Some(dec!(50000)), dec!(0.15)),
//!         TaxBracket::new(dec!(50000), None, dec!(0.26)),
//!     ],
//!     basic_personal_amount: dec!(10000),
//!     cpp: CppParams {
//!         max_pensionable_earnings: dec!(68500),
//!         rate: dec!(0.0595),
//!         exemption: dec!(3500),
//!         max_contribution: dec!(3867.50),
//!     },
//!     ei: EiParams {
//!         max_insurable_earnings: dec!(63200),
//!         rate: dec!(0.0166),
//!         max_premium: dec!(1049.12),
//!     },
//! };
//!
//! let calculator = FederalCalculator::new(&data);
//!
//! // 50000 * 0.15 + 10000 * 0.26 = 10100 gross, minus 10000 * 0.15 credit
//! assert_eq!(calculator.tax_payable(dec!(60000), dec!(0)), dec!(8600.00));
//! ```

use rust_decimal::Decimal;

use crate::calculations::bracket::{bracket_tax, marginal_rate};
use crate::calculations::common::non_negative;
use crate::models::FederalTaxData;

const SELF_EMPLOYED_FACTOR: Decimal = Decimal::TWO;

/// Federal tax calculator for one year's [`FederalTaxData`].
#[derive(Debug, Clone)]
pub struct FederalCalculator<'a> {
    data: &'a FederalTaxData,
}

impl<'a> FederalCalculator<'a> {
    pub fn new(data: &'a FederalTaxData) -> Self {
        Self { data }
    }

    /// Bracket tax on taxable income, before any credits.
    pub fn gross_tax(&self, taxable_income: Decimal) -> Decimal {
        bracket_tax(taxable_income, &self.data.brackets)
    }

    /// The basic personal amount converted to a non-refundable credit at
    /// the lowest bracket's rate.
    pub fn basic_personal_credit(&self) -> Decimal {
        let lowest_rate = self
            .data
            .brackets
            .first()
            .map_or(Decimal::ZERO, |bracket| bracket.rate);
        self.data.basic_personal_amount * lowest_rate
    }

    /// Federal tax payable after the basic personal credit and any
    /// additional non-refundable credits. Never negative.
    pub fn tax_payable(&self, taxable_income: Decimal, extra_credits: Decimal) -> Decimal {
        let credits = self.basic_personal_credit() + extra_credits;
        non_negative(self.gross_tax(taxable_income) - credits)
    }

    /// Federal marginal rate at `taxable_income`.
    pub fn marginal_rate(&self, taxable_income: Decimal) -> Decimal {
        marginal_rate(taxable_income, &self.data.brackets)
    }

    /// CPP contribution on pensionable earnings.
    ///
    /// Earnings cap at the year's maximum, the basic exemption comes off
    /// the top, and self-employed filers pay both the employee and employer
    /// shares (rate and cap doubled).
    pub fn cpp_contribution(
        &self,
        pensionable_earnings: Decimal,
        is_self_employed: bool,
    ) -> Decimal {
        let cpp = &self.data.cpp;
        let earnings = pensionable_earnings.min(cpp.max_pensionable_earnings);
        let contributory_earnings = non_negative(earnings - cpp.exemption);
        let (rate, max_contribution) = if is_self_employed {
            (
                cpp.rate * SELF_EMPLOYED_FACTOR,
                cpp.max_contribution * SELF_EMPLOYED_FACTOR,
            )
        } else {
            (cpp.rate, cpp.max_contribution)
        };

        (contributory_earnings * rate).min(max_contribution)
    }

    /// EI premium on insurable earnings. Self-employed filers pay none.
    pub fn ei_premium(&self, insurable_earnings: Decimal, is_self_employed: bool) -> Decimal {
        if is_self_employed {
            return Decimal::ZERO;
        }

        let ei = &self.data.ei;
        let earnings = insurable_earnings.min(ei.max_insurable_earnings);
        (earnings * ei.rate).min(ei.max_premium)
    }
}
