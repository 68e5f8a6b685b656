//! RRSP contribution optimization.
//!
//! The planner sweeps candidate contributions between zero and the lesser of
//! the filer's contribution room and 90% of gross income, recomputing
//! federal and provincial payable tax at each point. The suggested
//! contribution is chosen by a diminishing-returns rule: walking the
//! scenarios from low to high, a scenario becomes the new candidate whenever
//! the savings earned per additional dollar still clear 90% of the filer's
//! starting marginal rate. The last scenario to clear that bar wins; the
//! walk never exits early, so a later scenario that clears the bar again
//! (possible around surtax edges) also wins.
//!
//! Every call recomputes the full sweep. Nothing is cached between calls.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::bracket::combined_marginal_rate;
use crate::calculations::common::ratio_or_zero;
use crate::calculations::federal::FederalCalculator;
use crate::calculations::provincial::ProvincialCalculator;
use crate::models::{MissingProvinceError, Province, ProvincialTaxData, TaxData};

/// Fraction of gross income a contribution may not exceed. Guards against
/// degenerate full-income contributions.
const MAX_INCOME_FRACTION: Decimal = Decimal::from_parts(9, 0, 0, false, 1);

/// A contribution qualifies while its marginal savings rate stays at or
/// above this fraction of the starting marginal rate.
const QUALIFYING_FRACTION: Decimal = Decimal::from_parts(9, 0, 0, false, 1);

/// One sampled point of the contribution sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RrspScenario {
    pub contribution: Decimal,
    pub adjusted_income: Decimal,
    pub federal_tax: Decimal,
    pub provincial_tax: Decimal,
    pub total_tax: Decimal,
    pub tax_savings: Decimal,
    pub marginal_rate: Decimal,
    pub effective_rate: Decimal,
}

/// The result of a full optimization sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RrspOptimization {
    pub current_tax: Decimal,
    pub current_marginal_rate: Decimal,
    pub scenarios: Vec<RrspScenario>,
    pub optimal_contribution: Decimal,
    pub optimal_savings: Decimal,
    pub recommendation: String,
}

/// RRSP contribution planner over one year's [`TaxData`].
#[derive(Debug, Clone)]
pub struct RrspPlanner<'a> {
    tax_data: &'a TaxData,
}

impl<'a> RrspPlanner<'a> {
    pub fn new(tax_data: &'a TaxData) -> Self {
        Self { tax_data }
    }

    /// Sweeps candidate contributions and selects the tax-minimizing one
    /// under the diminishing-returns stopping rule.
    ///
    /// # Errors
    ///
    /// Returns [`MissingProvinceError`] when the dataset has no schedule for
    /// `province`. No partial result is produced.
    pub fn optimize(
        &self,
        gross_income: Decimal,
        contribution_room: Decimal,
        province: Province,
    ) -> Result<RrspOptimization, MissingProvinceError> {
        let provincial_data = self.tax_data.province(province)?;
        let federal = FederalCalculator::new(&self.tax_data.federal);
        let provincial = ProvincialCalculator::new(provincial_data);

        let current_tax = federal.tax_payable(gross_income, Decimal::ZERO)
            + provincial.tax_payable(gross_income, Decimal::ZERO);
        let current_marginal_rate = combined_marginal_rate(
            gross_income,
            &self.tax_data.federal.brackets,
            &provincial_data.brackets,
        );

        let max_contribution = contribution_room.min(gross_income * MAX_INCOME_FRACTION);
        let step = (max_contribution / Decimal::from(20))
            .floor()
            .max(Decimal::ONE_THOUSAND);
        debug!(%gross_income, %max_contribution, %step, "starting contribution sweep");

        // The zero-contribution baseline is always present, even when the
        // cap itself degenerates to zero or below.
        let mut scenarios = vec![self.scenario(
            gross_income,
            Decimal::ZERO,
            current_tax,
            &federal,
            &provincial,
            provincial_data,
        )];
        let mut contribution = step;
        while contribution <= max_contribution {
            scenarios.push(self.scenario(
                gross_income,
                contribution,
                current_tax,
                &federal,
                &provincial,
                provincial_data,
            ));
            contribution += step;
        }

        // Regular stepping can overshoot the cap; make sure the true
        // maximum itself is always considered.
        if max_contribution > Decimal::ZERO
            && scenarios
                .last()
                .is_none_or(|scenario| scenario.contribution != max_contribution)
        {
            scenarios.push(self.scenario(
                gross_income,
                max_contribution,
                current_tax,
                &federal,
                &provincial,
                provincial_data,
            ));
        }

        let threshold = current_marginal_rate * QUALIFYING_FRACTION;
        let mut optimal = 0;
        for i in 1..scenarios.len() {
            let additional_contribution =
                scenarios[i].contribution - scenarios[i - 1].contribution;
            let additional_savings = scenarios[i].tax_savings - scenarios[i - 1].tax_savings;
            let savings_per_dollar = ratio_or_zero(additional_savings, additional_contribution);

            if savings_per_dollar >= threshold {
                optimal = i;
            }
        }

        let optimal_contribution = scenarios[optimal].contribution;
        let optimal_savings = scenarios[optimal].tax_savings;
        let recommendation =
            recommendation(&scenarios[optimal], current_marginal_rate, contribution_room);

        Ok(RrspOptimization {
            current_tax,
            current_marginal_rate,
            scenarios,
            optimal_contribution,
            optimal_savings,
            recommendation,
        })
    }

    /// Tax savings for one specific contribution, without the full sweep.
    /// Used for ad-hoc what-if queries.
    ///
    /// # Errors
    ///
    /// Returns [`MissingProvinceError`] when the dataset has no schedule for
    /// `province`.
    pub fn savings_for_contribution(
        &self,
        gross_income: Decimal,
        contribution: Decimal,
        province: Province,
    ) -> Result<Decimal, MissingProvinceError> {
        let provincial_data = self.tax_data.province(province)?;
        let federal = FederalCalculator::new(&self.tax_data.federal);
        let provincial = ProvincialCalculator::new(provincial_data);

        let current_tax = federal.tax_payable(gross_income, Decimal::ZERO)
            + provincial.tax_payable(gross_income, Decimal::ZERO);

        let adjusted_income = gross_income - contribution;
        let new_tax = federal.tax_payable(adjusted_income, Decimal::ZERO)
            + provincial.tax_payable(adjusted_income, Decimal::ZERO);

        Ok(current_tax - new_tax)
    }

    fn scenario(
        &self,
        gross_income: Decimal,
        contribution: Decimal,
        current_tax: Decimal,
        federal: &FederalCalculator<'_>,
        provincial: &ProvincialCalculator<'_>,
        provincial_data: &ProvincialTaxData,
    ) -> RrspScenario {
        let adjusted_income = gross_income - contribution;
        let federal_tax = federal.tax_payable(adjusted_income, Decimal::ZERO);
        let provincial_tax = provincial.tax_payable(adjusted_income, Decimal::ZERO);
        let total_tax = federal_tax + provincial_tax;
        let marginal_rate = combined_marginal_rate(
            adjusted_income,
            &self.tax_data.federal.brackets,
            &provincial_data.brackets,
        );

        RrspScenario {
            contribution,
            adjusted_income,
            federal_tax,
            provincial_tax,
            total_tax,
            tax_savings: current_tax - total_tax,
            marginal_rate,
            effective_rate: ratio_or_zero(total_tax, adjusted_income),
        }
    }
}

fn recommendation(
    optimal: &RrspScenario,
    current_rate: Decimal,
    contribution_room: Decimal,
) -> String {
    if optimal.contribution == Decimal::ZERO {
        return "Based on your income, RRSP contributions may not provide significant tax \
                benefits this year."
            .to_string();
    }

    let savings_percent =
        (ratio_or_zero(optimal.tax_savings, optimal.contribution) * Decimal::ONE_HUNDRED)
            .round_dp(1);

    if optimal.marginal_rate < current_rate {
        let rate_change = ((current_rate - optimal.marginal_rate) * Decimal::ONE_HUNDRED).round_dp(1);
        let remaining_room = contribution_room - optimal.contribution;
        format!(
            "Contribute ${} to reduce your marginal rate by {rate_change}%. Estimated tax \
             savings: ${} ({savings_percent}% return). Remaining room: ${remaining_room}.",
            optimal.contribution, optimal.tax_savings.round_dp(2),
        )
    } else {
        format!(
            "Consider contributing ${} for estimated tax savings of ${} ({savings_percent}% \
             return).",
            optimal.contribution,
            optimal.tax_savings.round_dp(2),
        )
    }
}
