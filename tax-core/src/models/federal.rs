use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TaxBracket;

/// Canada Pension Plan parameters for a tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CppParams {
    pub max_pensionable_earnings: Decimal,
    pub rate: Decimal,
    pub exemption: Decimal,
    pub max_contribution: Decimal,
}

/// Employment Insurance parameters for a tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EiParams {
    pub max_insurable_earnings: Decimal,
    pub rate: Decimal,
    pub max_premium: Decimal,
}

/// Federal tax parameters for a single tax year.
///
/// `basic_personal_amount` is converted to a non-refundable credit at the
/// lowest bracket's rate; it is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederalTaxData {
    pub brackets: Vec<TaxBracket>,
    pub basic_personal_amount: Decimal,
    pub cpp: CppParams,
    pub ei: EiParams,
}
