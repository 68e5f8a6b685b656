use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A filer's RRSP position for the current year.
///
/// `previous_year_unused` is the single carried-forward figure the estimator
/// supports; there is no multi-year carryforward modeling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RrspAccount {
    pub contribution_room: Decimal,
    pub contributions_made: Decimal,
    pub previous_year_unused: Decimal,
}

impl RrspAccount {
    /// Room still available this year: current room plus unused room from
    /// the previous year, less contributions already made.
    pub fn remaining_room(&self) -> Decimal {
        self.contribution_room + self.previous_year_unused - self.contributions_made
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn remaining_room_combines_room_and_carryforward() {
        let account = RrspAccount {
            contribution_room: dec!(20000),
            contributions_made: dec!(4500),
            previous_year_unused: dec!(3000),
        };

        assert_eq!(account.remaining_room(), dec!(18500));
    }

    #[test]
    fn remaining_room_can_go_negative_when_overcontributed() {
        let account = RrspAccount {
            contribution_room: dec!(1000),
            contributions_made: dec!(2500),
            previous_year_unused: dec!(0),
        };

        assert_eq!(account.remaining_room(), dec!(-1500));
    }
}
