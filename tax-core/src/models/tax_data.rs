use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{FederalTaxData, Province, ProvincialTaxData};

/// RRSP contribution limits for a tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RrspLimits {
    pub max_contribution: Decimal,
    pub percentage_limit: Decimal,
}

impl RrspLimits {
    /// New deduction room generated by a year of earned income: the lesser
    /// of the dollar ceiling and the percentage of earned income, never
    /// negative.
    pub fn deduction_limit(&self, earned_income: Decimal) -> Decimal {
        (earned_income * self.percentage_limit)
            .min(self.max_contribution)
            .max(Decimal::ZERO)
    }
}

/// CRA per-kilometre vehicle allowance rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MileageRates {
    pub first_5000_km: Decimal,
    pub after_5000_km: Decimal,
}

impl MileageRates {
    /// Allowance for `kilometres` driven: the first 5,000 km at the higher
    /// rate, the remainder at the lower rate.
    pub fn allowance(&self, kilometres: Decimal) -> Decimal {
        let threshold = Decimal::from(5000);
        if kilometres <= Decimal::ZERO {
            Decimal::ZERO
        } else if kilometres <= threshold {
            kilometres * self.first_5000_km
        } else {
            threshold * self.first_5000_km + (kilometres - threshold) * self.after_5000_km
        }
    }
}

/// No provincial schedule exists for the requested province.
///
/// Silently substituting another province's rates would be materially
/// misleading, so lookups surface this instead of defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no tax data for province: {0}")]
pub struct MissingProvinceError(pub Province);

/// The complete tax dataset for one year.
///
/// Records are explicit and immutable: each year carries its full federal
/// and provincial schedules with no inheritance from earlier years. The
/// engine treats a `TaxData` as read-only reference data supplied per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxData {
    pub year: i32,
    pub federal: FederalTaxData,
    pub provinces: BTreeMap<Province, ProvincialTaxData>,
    pub rrsp: RrspLimits,
    pub mileage_rates: MileageRates,
    pub last_updated: NaiveDate,
    pub source: String,
}

impl TaxData {
    /// Looks up the provincial schedule for `province`.
    ///
    /// # Errors
    ///
    /// Returns [`MissingProvinceError`] when the dataset carries no schedule
    /// for the requested province.
    pub fn province(&self, province: Province) -> Result<&ProvincialTaxData, MissingProvinceError> {
        self.provinces
            .get(&province)
            .ok_or(MissingProvinceError(province))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn deduction_limit_uses_percentage_below_ceiling() {
        let limits = RrspLimits {
            max_contribution: dec!(31560),
            percentage_limit: dec!(0.18),
        };

        assert_eq!(limits.deduction_limit(dec!(100000)), dec!(18000.00));
    }

    #[test]
    fn deduction_limit_caps_at_dollar_ceiling() {
        let limits = RrspLimits {
            max_contribution: dec!(31560),
            percentage_limit: dec!(0.18),
        };

        assert_eq!(limits.deduction_limit(dec!(500000)), dec!(31560));
    }

    #[test]
    fn deduction_limit_clamps_negative_income_to_zero() {
        let limits = RrspLimits {
            max_contribution: dec!(31560),
            percentage_limit: dec!(0.18),
        };

        assert_eq!(limits.deduction_limit(dec!(-20000)), dec!(0));
    }

    #[test]
    fn allowance_uses_single_rate_under_threshold() {
        let rates = MileageRates {
            first_5000_km: dec!(0.70),
            after_5000_km: dec!(0.64),
        };

        assert_eq!(rates.allowance(dec!(3000)), dec!(2100.00));
    }

    #[test]
    fn allowance_splits_rates_over_threshold() {
        let rates = MileageRates {
            first_5000_km: dec!(0.70),
            after_5000_km: dec!(0.64),
        };

        // 5000 * 0.70 + 3000 * 0.64 = 3500 + 1920 = 5420
        assert_eq!(rates.allowance(dec!(8000)), dec!(5420.00));
    }
}
