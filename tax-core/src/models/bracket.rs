use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single marginal tax bracket.
///
/// Brackets are supplied in ascending order and partition `[0, ∞)` with no
/// gaps or overlaps. The top bracket of a schedule has `max: None`, meaning
/// its upper bound is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min: Decimal,
    pub max: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    pub fn new(min: Decimal, max: Option<Decimal>, rate: Decimal) -> Self {
        Self { min, max, rate }
    }
}
