mod commands;
mod output;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use commands::estimate::EstimateArgs;
use commands::payroll::PayrollArgs;
use commands::rrsp::{RrspArgs, SavingsArgs};

/// Canadian personal income tax estimation
#[derive(Parser)]
#[command(
    name = "catax",
    version,
    about = "Canadian personal income tax estimation",
    long_about = "Estimates Canadian federal and provincial income tax with decimal \
                  precision: full return summaries, CPP/EI payroll amounts, and RRSP \
                  contribution optimization over built-in or external CRA datasets."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate a full return: taxes, payroll amounts and balance owing
    Estimate(EstimateArgs),
    /// Sweep RRSP contributions and suggest one
    Rrsp(RrspArgs),
    /// Tax savings for one specific RRSP contribution
    Savings(SavingsArgs),
    /// CPP contributions and EI premiums on earnings
    Payroll(PayrollArgs),
    /// List supported provinces and territories
    Provinces,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Estimate(args) => commands::estimate::run_estimate(args),
        Commands::Rrsp(args) => commands::rrsp::run_optimize(args),
        Commands::Savings(args) => commands::rrsp::run_savings(args),
        Commands::Payroll(args) => commands::payroll::run_payroll(args),
        Commands::Provinces => commands::run_provinces(),
    };

    match result {
        Ok(value) => output::format_output(&cli.output, &value),
        Err(e) => {
            eprintln!("{}: {e:#}", "error".red().bold());
            process::exit(1);
        }
    }
}

/// Logs go to stderr so piped stdout stays parseable.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
