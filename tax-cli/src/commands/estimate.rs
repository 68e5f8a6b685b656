use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;
use tax_core::Province;
use tax_core::calculations::{SummaryCalculator, SummaryInput};

use super::{DataArgs, load_tax_data};

/// Arguments for a full return estimate
#[derive(Args)]
pub struct EstimateArgs {
    /// Gross income from all sources
    #[arg(long)]
    pub income: Decimal,

    /// Province or territory code (e.g. ON, BC)
    #[arg(long)]
    pub province: Province,

    /// Deductions claimed against income
    #[arg(long, default_value = "0")]
    pub deductions: Decimal,

    /// Income tax already withheld at source
    #[arg(long, default_value = "0")]
    pub withheld: Decimal,

    /// Self-employed: doubled CPP, no EI
    #[arg(long)]
    pub self_employed: bool,

    #[command(flatten)]
    pub data: DataArgs,
}

pub fn run_estimate(args: EstimateArgs) -> Result<Value> {
    let tax_data = load_tax_data(&args.data)?;

    let input = SummaryInput {
        total_income: args.income,
        total_deductions: args.deductions,
        tax_withheld: args.withheld,
        is_self_employed: args.self_employed,
    };
    let summary = SummaryCalculator::new(&tax_data).summarize(&input, args.province)?;

    Ok(serde_json::to_value(summary)?)
}
