//! Tax calculation modules for the Canadian income-tax estimator.
//!
//! Everything in here is a pure, bounded computation over caller-supplied
//! [`TaxData`](crate::TaxData): progressive-bracket taxation, federal and
//! provincial payable tax with basic-personal-amount credits, CPP/EI
//! payroll amounts, RRSP contribution optimization, and the combined
//! return summary.

pub mod bracket;
pub mod common;
pub mod federal;
pub mod provincial;
pub mod rrsp;
pub mod summary;

pub use bracket::{bracket_tax, combined_marginal_rate, marginal_rate};
pub use federal::FederalCalculator;
pub use provincial::ProvincialCalculator;
pub use rrsp::{RrspOptimization, RrspPlanner, RrspScenario};
pub use summary::{SummaryCalculator, SummaryInput, TaxSummary};
