//! Whole-return estimate: taxes, payroll amounts and balance owing.
//!
//! Combines the federal and provincial calculators into the single summary
//! a dashboard renders: taxable income after deductions, payable tax on
//! both levels, CPP/EI amounts, the balance owing (or refund, when
//! negative) after withheld tax, and the filer's marginal and effective
//! rates. Purely derived from its inputs; nothing here formats currency or
//! percentages.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::bracket::combined_marginal_rate;
use crate::calculations::common::{non_negative, ratio_or_zero};
use crate::calculations::federal::FederalCalculator;
use crate::calculations::provincial::ProvincialCalculator;
use crate::models::{MissingProvinceError, Province, TaxData};

/// User-supplied figures for a return estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryInput {
    /// Gross income from all sources.
    pub total_income: Decimal,

    /// Deductible expenses and other deductions claimed against income.
    pub total_deductions: Decimal,

    /// Income tax already withheld at source.
    pub tax_withheld: Decimal,

    /// Self-employed filers pay doubled CPP and no EI.
    pub is_self_employed: bool,
}

/// The computed estimate for one return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSummary {
    pub total_income: Decimal,
    pub total_deductions: Decimal,
    pub taxable_income: Decimal,
    pub federal_tax: Decimal,
    pub provincial_tax: Decimal,
    pub total_tax: Decimal,
    pub cpp_contributions: Decimal,
    pub ei_premiums: Decimal,
    pub tax_withheld: Decimal,
    /// Negative when withholding exceeds the estimated tax (a refund).
    pub balance_owing: Decimal,
    pub marginal_rate: Decimal,
    pub effective_rate: Decimal,
}

/// Return-summary calculator over one year's [`TaxData`].
#[derive(Debug, Clone)]
pub struct SummaryCalculator<'a> {
    tax_data: &'a TaxData,
}

impl<'a> SummaryCalculator<'a> {
    pub fn new(tax_data: &'a TaxData) -> Self {
        Self { tax_data }
    }

    /// Computes the full return estimate for `province`.
    ///
    /// # Errors
    ///
    /// Returns [`MissingProvinceError`] when the dataset has no schedule for
    /// `province`.
    pub fn summarize(
        &self,
        input: &SummaryInput,
        province: Province,
    ) -> Result<TaxSummary, MissingProvinceError> {
        let provincial_data = self.tax_data.province(province)?;
        let federal = FederalCalculator::new(&self.tax_data.federal);
        let provincial = ProvincialCalculator::new(provincial_data);

        let taxable_income = non_negative(input.total_income - input.total_deductions);
        let federal_tax = federal.tax_payable(taxable_income, Decimal::ZERO);
        let provincial_tax = provincial.tax_payable(taxable_income, Decimal::ZERO);
        let total_tax = federal_tax + provincial_tax;

        Ok(TaxSummary {
            total_income: input.total_income,
            total_deductions: input.total_deductions,
            taxable_income,
            federal_tax,
            provincial_tax,
            total_tax,
            cpp_contributions: federal
                .cpp_contribution(input.total_income, input.is_self_employed),
            ei_premiums: federal.ei_premium(input.total_income, input.is_self_employed),
            tax_withheld: input.tax_withheld,
            balance_owing: total_tax - input.tax_withheld,
            marginal_rate: combined_marginal_rate(
                taxable_income,
                &self.tax_data.federal.brackets,
                &provincial_data.brackets,
            ),
            effective_rate: ratio_or_zero(total_tax, taxable_income),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{
        CppParams, EiParams, FederalTaxData, MileageRates, ProvincialTaxData, RrspLimits,
        TaxBracket,
    };

    fn tax_data() -> TaxData {
        let mut provinces = BTreeMap::new();
        provinces.insert(
            Province::Manitoba,
            ProvincialTaxData {
                brackets: vec![TaxBracket::new(dec!(0), None, dec!(0.10))],
                basic_personal_amount: dec!(10000),
                surtax: None,
            },
        );

        TaxData {
            year: 2024,
            federal: FederalTaxData {
                brackets: vec![
                    TaxBracket::new(dec!(0), Some(dec!(50000)), dec!(0.15)),
                    TaxBracket::new(dec!(50000), None, dec!(0.26)),
                ],
                basic_personal_amount: dec!(10000),
                cpp: CppParams {
                    max_pensionable_earnings: dec!(68500),
                    rate: dec!(0.0595),
                    exemption: dec!(3500),
                    max_contribution: dec!(3867.50),
                },
                ei: EiParams {
                    max_insurable_earnings: dec!(63200),
                    rate: dec!(0.0166),
                    max_premium: dec!(1049.12),
                },
            },
            provinces,
            rrsp: RrspLimits {
                max_contribution: dec!(31560),
                percentage_limit: dec!(0.18),
            },
            mileage_rates: MileageRates {
                first_5000_km: dec!(0.70),
                after_5000_km: dec!(0.64),
            },
            last_updated: chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            source: "test fixture".to_string(),
        }
    }

    fn base_input() -> SummaryInput {
        SummaryInput {
            total_income: dec!(80000),
            total_deductions: dec!(20000),
            tax_withheld: dec!(0),
            is_self_employed: false,
        }
    }

    #[test]
    fn summarize_computes_both_tax_levels() {
        let tax_data = tax_data();
        let calculator = SummaryCalculator::new(&tax_data);

        let summary = calculator
            .summarize(&base_input(), Province::Manitoba)
            .unwrap();

        // Taxable: 60000. Federal: 50000*0.15 + 10000*0.26 - 1500 = 8600.
        // Provincial: 6000 - 1000 = 5000.
        assert_eq!(summary.taxable_income, dec!(60000));
        assert_eq!(summary.federal_tax, dec!(8600.00));
        assert_eq!(summary.provincial_tax, dec!(5000.00));
        assert_eq!(summary.total_tax, dec!(13600.00));
        assert_eq!(summary.marginal_rate, dec!(0.36));
    }

    #[test]
    fn summarize_clamps_taxable_income_at_zero() {
        let tax_data = tax_data();
        let calculator = SummaryCalculator::new(&tax_data);
        let mut input = base_input();
        input.total_income = dec!(10000);
        input.total_deductions = dec!(15000);

        let summary = calculator.summarize(&input, Province::Manitoba).unwrap();

        assert_eq!(summary.taxable_income, dec!(0));
        assert_eq!(summary.total_tax, dec!(0));
        assert_eq!(summary.effective_rate, dec!(0));
    }

    #[test]
    fn summarize_balance_owing_goes_negative_on_refund() {
        let tax_data = tax_data();
        let calculator = SummaryCalculator::new(&tax_data);
        let mut input = base_input();
        input.tax_withheld = dec!(20000);

        let summary = calculator.summarize(&input, Province::Manitoba).unwrap();

        assert_eq!(summary.balance_owing, dec!(-6400.00));
    }

    #[test]
    fn summarize_payroll_amounts_respect_self_employment() {
        let tax_data = tax_data();
        let calculator = SummaryCalculator::new(&tax_data);
        let mut input = base_input();
        input.is_self_employed = true;

        let summary = calculator.summarize(&input, Province::Manitoba).unwrap();

        // Earnings above both caps: doubled CPP maximum, no EI.
        assert_eq!(summary.cpp_contributions, dec!(7735.00));
        assert_eq!(summary.ei_premiums, dec!(0));
    }

    #[test]
    fn summarize_fails_for_missing_province() {
        let tax_data = tax_data();
        let calculator = SummaryCalculator::new(&tax_data);

        let result = calculator.summarize(&base_input(), Province::Ontario);

        assert_eq!(result, Err(MissingProvinceError(Province::Ontario)));
    }
}
