use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tax_core::calculations::RrspPlanner;
use tax_core::{Province, RrspAccount};

use super::{DataArgs, load_tax_data};

/// Arguments for the RRSP contribution sweep
#[derive(Args)]
pub struct RrspArgs {
    /// Gross income before any RRSP deduction
    #[arg(long)]
    pub income: Decimal,

    /// This year's RRSP contribution room
    #[arg(long)]
    pub room: Decimal,

    /// Unused room carried forward from last year
    #[arg(long, default_value = "0")]
    pub carried_forward: Decimal,

    /// Contributions already made this year
    #[arg(long, default_value = "0")]
    pub contributed: Decimal,

    /// Province or territory code (e.g. ON, BC)
    #[arg(long)]
    pub province: Province,

    #[command(flatten)]
    pub data: DataArgs,
}

/// Arguments for a single-contribution what-if
#[derive(Args)]
pub struct SavingsArgs {
    /// Gross income before any RRSP deduction
    #[arg(long)]
    pub income: Decimal,

    /// Contribution amount to evaluate
    #[arg(long)]
    pub contribution: Decimal,

    /// Province or territory code (e.g. ON, BC)
    #[arg(long)]
    pub province: Province,

    #[command(flatten)]
    pub data: DataArgs,
}

pub fn run_optimize(args: RrspArgs) -> Result<Value> {
    let tax_data = load_tax_data(&args.data)?;

    let account = RrspAccount {
        contribution_room: args.room,
        contributions_made: args.contributed,
        previous_year_unused: args.carried_forward,
    };
    let optimization = RrspPlanner::new(&tax_data).optimize(
        args.income,
        account.remaining_room(),
        args.province,
    )?;

    Ok(serde_json::to_value(optimization)?)
}

pub fn run_savings(args: SavingsArgs) -> Result<Value> {
    let tax_data = load_tax_data(&args.data)?;

    let tax_savings = RrspPlanner::new(&tax_data).savings_for_contribution(
        args.income,
        args.contribution,
        args.province,
    )?;

    Ok(json!({
        "gross_income": args.income,
        "contribution": args.contribution,
        "tax_savings": tax_savings,
    }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn optimize_emits_scenarios_and_recommendation() {
        let args = RrspArgs {
            income: dec!(90000),
            room: dec!(25000),
            carried_forward: dec!(0),
            contributed: dec!(0),
            province: Province::Ontario,
            data: DataArgs {
                year: 2024,
                data: None,
            },
        };

        let value = run_optimize(args).unwrap();

        assert!(value["scenarios"].as_array().is_some_and(|s| !s.is_empty()));
        assert!(
            value["recommendation"]
                .as_str()
                .is_some_and(|r| !r.is_empty())
        );
        assert!(value["optimal_contribution"].is_string());
    }

    #[test]
    fn optimize_nets_carryforward_and_prior_contributions_into_room() {
        let args = RrspArgs {
            income: dec!(90000),
            room: dec!(10000),
            carried_forward: dec!(5000),
            contributed: dec!(3000),
            province: Province::Ontario,
            data: DataArgs {
                year: 2024,
                data: None,
            },
        };

        let value = run_optimize(args).unwrap();

        // Effective room is 10000 + 5000 - 3000 = 12000.
        let last = value["scenarios"].as_array().unwrap().last().unwrap();
        assert_eq!(last["contribution"], Value::String("12000".into()));
    }

    #[test]
    fn savings_reports_the_evaluated_contribution() {
        let args = SavingsArgs {
            income: dec!(90000),
            contribution: dec!(5000),
            province: Province::Ontario,
            data: DataArgs {
                year: 2024,
                data: None,
            },
        };

        let value = run_savings(args).unwrap();

        assert_eq!(value["contribution"], Value::String("5000".into()));
        let savings: Decimal = value["tax_savings"].as_str().unwrap().parse().unwrap();
        assert!(savings > dec!(0));
    }
}
