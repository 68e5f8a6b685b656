use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tax_core::calculations::FederalCalculator;

use super::{DataArgs, load_tax_data};

/// Arguments for payroll amount calculation
#[derive(Args)]
pub struct PayrollArgs {
    /// Employment or self-employment earnings
    #[arg(long)]
    pub earnings: Decimal,

    /// Self-employed: doubled CPP, no EI
    #[arg(long)]
    pub self_employed: bool,

    #[command(flatten)]
    pub data: DataArgs,
}

pub fn run_payroll(args: PayrollArgs) -> Result<Value> {
    let tax_data = load_tax_data(&args.data)?;
    let federal = FederalCalculator::new(&tax_data.federal);

    let cpp_contribution = federal.cpp_contribution(args.earnings, args.self_employed);
    let ei_premium = federal.ei_premium(args.earnings, args.self_employed);

    Ok(json!({
        "earnings": args.earnings,
        "self_employed": args.self_employed,
        "cpp_contribution": cpp_contribution,
        "ei_premium": ei_premium,
        "total": cpp_contribution + ei_premium,
    }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn args(earnings: Decimal, self_employed: bool) -> PayrollArgs {
        PayrollArgs {
            earnings,
            self_employed,
            data: DataArgs {
                year: 2024,
                data: None,
            },
        }
    }

    #[test]
    fn payroll_caps_at_2024_maximums() {
        let value = run_payroll(args(dec!(200000), false)).unwrap();

        assert_eq!(value["cpp_contribution"], Value::String("3867.50".into()));
        assert_eq!(value["ei_premium"], Value::String("1049.12".into()));
    }

    #[test]
    fn payroll_self_employed_doubles_cpp_and_drops_ei() {
        let value = run_payroll(args(dec!(200000), true)).unwrap();

        assert_eq!(value["cpp_contribution"], Value::String("7735.00".into()));
        assert_eq!(value["ei_premium"], Value::String("0".into()));
    }
}
