pub mod estimate;
pub mod payroll;
pub mod rrsp;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::{Value, json};
use tax_core::{Province, TaxData};
use tax_data::builtin;
use tracing::debug;

/// Dataset selection shared by every calculation subcommand.
#[derive(Args)]
pub struct DataArgs {
    /// Tax year to use from the built-in datasets
    #[arg(long, default_value_t = 2025)]
    pub year: i32,

    /// Load the dataset from a JSON file instead of the built-in tables
    #[arg(long)]
    pub data: Option<PathBuf>,
}

pub fn load_tax_data(args: &DataArgs) -> Result<TaxData> {
    match &args.data {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            let data = tax_data::from_json_reader(BufReader::new(file))
                .with_context(|| format!("loading {}", path.display()))?;
            Ok(data)
        }
        None => {
            debug!(year = args.year, "using built-in dataset");
            builtin::for_year(args.year).with_context(|| {
                format!(
                    "no built-in dataset for {} (available: {:?}); pass --data for other years",
                    args.year,
                    builtin::YEARS
                )
            })
        }
    }
}

pub fn run_provinces() -> Result<Value> {
    let provinces: Vec<Value> = Province::ALL
        .iter()
        .map(|province| json!({ "code": province.code(), "name": province.name() }))
        .collect();
    Ok(Value::Array(provinces))
}
