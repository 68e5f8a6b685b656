//! End-to-end checks of the calculation engine against the built-in CRA
//! datasets.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use tax_core::calculations::{RrspPlanner, SummaryCalculator, SummaryInput};
use tax_core::{MissingProvinceError, Province};
use tax_data::builtin;

#[test]
fn rrsp_sweep_on_ontario_data_has_sound_shape() {
    let tax_data = builtin::tax_data_2024();
    let planner = RrspPlanner::new(&tax_data);

    let result = planner
        .optimize(dec!(90000), dec!(25000), Province::Ontario)
        .unwrap();

    // step = floor(25000 / 20) = 1250, so the stepping lands on the cap
    // exactly and the sweep holds 21 points.
    assert_eq!(result.scenarios.len(), 21);

    let first = &result.scenarios[0];
    assert_eq!(first.contribution, dec!(0));
    assert_eq!(first.tax_savings, dec!(0));

    let last = result.scenarios.last().unwrap();
    assert_eq!(last.contribution, dec!(25000));

    // Savings grow monotonically as income is deducted away.
    for pair in result.scenarios.windows(2) {
        assert!(pair[0].tax_savings <= pair[1].tax_savings);
        assert!(pair[0].contribution < pair[1].contribution);
    }

    assert!(result.optimal_contribution >= dec!(0));
    assert!(result.optimal_contribution <= dec!(25000));
    assert!(!result.recommendation.is_empty());
}

#[test]
fn rrsp_single_point_savings_agree_with_sweep() {
    let tax_data = builtin::tax_data_2024();
    let planner = RrspPlanner::new(&tax_data);

    let sweep = planner
        .optimize(dec!(90000), dec!(25000), Province::Ontario)
        .unwrap();

    for scenario in &sweep.scenarios {
        let single = planner
            .savings_for_contribution(dec!(90000), scenario.contribution, Province::Ontario)
            .unwrap();

        assert_eq!(single, scenario.tax_savings, "at {}", scenario.contribution);
    }
}

#[test]
fn rrsp_zero_room_yields_no_benefit_recommendation() {
    let tax_data = builtin::tax_data_2025();
    let planner = RrspPlanner::new(&tax_data);

    let result = planner
        .optimize(dec!(120000), dec!(0), Province::BritishColumbia)
        .unwrap();

    assert_eq!(result.optimal_contribution, dec!(0));
    assert_eq!(result.optimal_savings, dec!(0));
    assert!(result.recommendation.contains("may not provide"));
}

#[test]
fn rrsp_contribution_is_capped_by_ninety_percent_of_income() {
    let tax_data = builtin::tax_data_2024();
    let planner = RrspPlanner::new(&tax_data);

    let result = planner
        .optimize(dec!(20000), dec!(31560), Province::Alberta)
        .unwrap();

    assert_eq!(
        result.scenarios.last().unwrap().contribution,
        dec!(18000.0)
    );
}

#[test]
fn missing_province_is_reported_not_defaulted() {
    let mut tax_data = builtin::tax_data_2024();
    tax_data.provinces.remove(&Province::Quebec);
    let planner = RrspPlanner::new(&tax_data);

    let result = planner.optimize(dec!(90000), dec!(10000), Province::Quebec);

    assert_eq!(result, Err(MissingProvinceError(Province::Quebec)));
}

#[test]
fn summary_on_builtin_data_balances() {
    let tax_data = builtin::tax_data_2024();
    let calculator = SummaryCalculator::new(&tax_data);

    let input = SummaryInput {
        total_income: dec!(85000),
        total_deductions: dec!(5000),
        tax_withheld: dec!(12000),
        is_self_employed: false,
    };
    let summary = calculator.summarize(&input, Province::BritishColumbia).unwrap();

    assert_eq!(summary.taxable_income, dec!(80000));
    assert_eq!(summary.total_tax, summary.federal_tax + summary.provincial_tax);
    assert_eq!(summary.balance_owing, summary.total_tax - dec!(12000));
    assert!(summary.marginal_rate > dec!(0));
    assert!(summary.effective_rate > dec!(0));
    assert!(summary.effective_rate < summary.marginal_rate);
}

#[test]
fn federal_bracket_growth_between_years_lowers_tax() {
    // 2025 thresholds and BPA are indexed upward, so the same income owes
    // slightly less federal tax than in 2024.
    let planner_2024 = builtin::tax_data_2024();
    let planner_2025 = builtin::tax_data_2025();

    let summary = |data: &tax_core::TaxData| {
        let input = SummaryInput {
            total_income: dec!(100000),
            total_deductions: dec!(0),
            tax_withheld: dec!(0),
            is_self_employed: false,
        };
        SummaryCalculator::new(data)
            .summarize(&input, Province::Manitoba)
            .unwrap()
    };

    assert!(summary(&planner_2025).federal_tax < summary(&planner_2024).federal_tax);
}
