//! Built-in CRA tax datasets.
//!
//! Each year is a fully explicit record: every bracket, amount and limit is
//! restated per year rather than inherited from the year before, so a
//! record can be audited against the CRA's published figures on its own.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tax_core::{
    CppParams, EiParams, FederalTaxData, MileageRates, Province, ProvincialTaxData, RrspLimits,
    Surtax, TaxBracket, TaxData,
};

/// Years with a built-in dataset.
pub const YEARS: [i32; 2] = [2024, 2025];

/// Returns the built-in dataset for `year`, if one is compiled in.
pub fn for_year(year: i32) -> Option<TaxData> {
    match year {
        2024 => Some(tax_data_2024()),
        2025 => Some(tax_data_2025()),
        _ => None,
    }
}

/// The complete 2024 dataset.
pub fn tax_data_2024() -> TaxData {
    let mut provinces = BTreeMap::new();

    provinces.insert(
        Province::Alberta,
        ProvincialTaxData {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(148269)), dec!(0.10)),
                TaxBracket::new(dec!(148269), Some(dec!(177922)), dec!(0.12)),
                TaxBracket::new(dec!(177922), Some(dec!(237230)), dec!(0.13)),
                TaxBracket::new(dec!(237230), Some(dec!(355845)), dec!(0.14)),
                TaxBracket::new(dec!(355845), None, dec!(0.15)),
            ],
            basic_personal_amount: dec!(21003),
            surtax: None,
        },
    );
    provinces.insert(
        Province::BritishColumbia,
        ProvincialTaxData {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(47937)), dec!(0.0506)),
                TaxBracket::new(dec!(47937), Some(dec!(95875)), dec!(0.077)),
                TaxBracket::new(dec!(95875), Some(dec!(110076)), dec!(0.105)),
                TaxBracket::new(dec!(110076), Some(dec!(133664)), dec!(0.1229)),
                TaxBracket::new(dec!(133664), Some(dec!(181232)), dec!(0.147)),
                TaxBracket::new(dec!(181232), Some(dec!(252752)), dec!(0.168)),
                TaxBracket::new(dec!(252752), None, dec!(0.205)),
            ],
            basic_personal_amount: dec!(12580),
            surtax: None,
        },
    );
    provinces.insert(
        Province::Manitoba,
        ProvincialTaxData {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(47000)), dec!(0.108)),
                TaxBracket::new(dec!(47000), Some(dec!(100000)), dec!(0.1275)),
                TaxBracket::new(dec!(100000), None, dec!(0.174)),
            ],
            basic_personal_amount: dec!(15780),
            surtax: None,
        },
    );
    provinces.insert(
        Province::NewBrunswick,
        ProvincialTaxData {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(49958)), dec!(0.094)),
                TaxBracket::new(dec!(49958), Some(dec!(99916)), dec!(0.14)),
                TaxBracket::new(dec!(99916), Some(dec!(185064)), dec!(0.16)),
                TaxBracket::new(dec!(185064), None, dec!(0.195)),
            ],
            basic_personal_amount: dec!(13044),
            surtax: None,
        },
    );
    provinces.insert(
        Province::NewfoundlandAndLabrador,
        ProvincialTaxData {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(43198)), dec!(0.087)),
                TaxBracket::new(dec!(43198), Some(dec!(86395)), dec!(0.145)),
                TaxBracket::new(dec!(86395), Some(dec!(154244)), dec!(0.158)),
                TaxBracket::new(dec!(154244), Some(dec!(215943)), dec!(0.178)),
                TaxBracket::new(dec!(215943), Some(dec!(275870)), dec!(0.198)),
                TaxBracket::new(dec!(275870), Some(dec!(551739)), dec!(0.208)),
                TaxBracket::new(dec!(551739), Some(dec!(1103478)), dec!(0.213)),
                TaxBracket::new(dec!(1103478), None, dec!(0.218)),
            ],
            basic_personal_amount: dec!(10818),
            surtax: None,
        },
    );
    provinces.insert(
        Province::NovaScotia,
        ProvincialTaxData {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(29590)), dec!(0.0879)),
                TaxBracket::new(dec!(29590), Some(dec!(59180)), dec!(0.1495)),
                TaxBracket::new(dec!(59180), Some(dec!(93000)), dec!(0.1667)),
                TaxBracket::new(dec!(93000), Some(dec!(150000)), dec!(0.175)),
                TaxBracket::new(dec!(150000), None, dec!(0.21)),
            ],
            basic_personal_amount: dec!(8481),
            surtax: None,
        },
    );
    provinces.insert(
        Province::NorthwestTerritories,
        ProvincialTaxData {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(50597)), dec!(0.059)),
                TaxBracket::new(dec!(50597), Some(dec!(101198)), dec!(0.086)),
                TaxBracket::new(dec!(101198), Some(dec!(164525)), dec!(0.122)),
                TaxBracket::new(dec!(164525), None, dec!(0.1405)),
            ],
            basic_personal_amount: dec!(17373),
            surtax: None,
        },
    );
    provinces.insert(
        Province::Nunavut,
        ProvincialTaxData {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(53268)), dec!(0.04)),
                TaxBracket::new(dec!(53268), Some(dec!(106537)), dec!(0.07)),
                TaxBracket::new(dec!(106537), Some(dec!(173205)), dec!(0.09)),
                TaxBracket::new(dec!(173205), None, dec!(0.115)),
            ],
            basic_personal_amount: dec!(18767),
            surtax: None,
        },
    );
    provinces.insert(
        Province::Ontario,
        ProvincialTaxData {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(51446)), dec!(0.0505)),
                TaxBracket::new(dec!(51446), Some(dec!(102894)), dec!(0.0915)),
                TaxBracket::new(dec!(102894), Some(dec!(150000)), dec!(0.1116)),
                TaxBracket::new(dec!(150000), Some(dec!(220000)), dec!(0.1216)),
                TaxBracket::new(dec!(220000), None, dec!(0.1316)),
            ],
            basic_personal_amount: dec!(12399),
            surtax: Some(Surtax {
                threshold1: dec!(5554),
                rate1: dec!(0.20),
                threshold2: dec!(7108),
                rate2: dec!(0.36),
            }),
        },
    );
    provinces.insert(
        Province::PrinceEdwardIsland,
        ProvincialTaxData {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(32656)), dec!(0.0965)),
                TaxBracket::new(dec!(32656), Some(dec!(64313)), dec!(0.1363)),
                TaxBracket::new(dec!(64313), Some(dec!(105000)), dec!(0.1665)),
                TaxBracket::new(dec!(105000), Some(dec!(140000)), dec!(0.18)),
                TaxBracket::new(dec!(140000), None, dec!(0.1875)),
            ],
            basic_personal_amount: dec!(13500),
            surtax: None,
        },
    );
    provinces.insert(
        Province::Quebec,
        ProvincialTaxData {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(51780)), dec!(0.14)),
                TaxBracket::new(dec!(51780), Some(dec!(103545)), dec!(0.19)),
                TaxBracket::new(dec!(103545), Some(dec!(126000)), dec!(0.24)),
                TaxBracket::new(dec!(126000), None, dec!(0.2575)),
            ],
            basic_personal_amount: dec!(18056),
            surtax: None,
        },
    );
    provinces.insert(
        Province::Saskatchewan,
        ProvincialTaxData {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(52057)), dec!(0.105)),
                TaxBracket::new(dec!(52057), Some(dec!(148734)), dec!(0.125)),
                TaxBracket::new(dec!(148734), None, dec!(0.145)),
            ],
            basic_personal_amount: dec!(18491),
            surtax: None,
        },
    );
    provinces.insert(
        Province::Yukon,
        ProvincialTaxData {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(55867)), dec!(0.064)),
                TaxBracket::new(dec!(55867), Some(dec!(111733)), dec!(0.09)),
                TaxBracket::new(dec!(111733), Some(dec!(173205)), dec!(0.109)),
                TaxBracket::new(dec!(173205), Some(dec!(500000)), dec!(0.128)),
                TaxBracket::new(dec!(500000), None, dec!(0.15)),
            ],
            basic_personal_amount: dec!(15705),
            surtax: None,
        },
    );

    TaxData {
        year: 2024,
        federal: FederalTaxData {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(55867)), dec!(0.15)),
                TaxBracket::new(dec!(55867), Some(dec!(111733)), dec!(0.205)),
                TaxBracket::new(dec!(111733), Some(dec!(173205)), dec!(0.26)),
                TaxBracket::new(dec!(173205), Some(dec!(246752)), dec!(0.29)),
                TaxBracket::new(dec!(246752), None, dec!(0.33)),
            ],
            basic_personal_amount: dec!(15705),
            cpp: CppParams {
                max_pensionable_earnings: dec!(68500),
                rate: dec!(0.0595),
                exemption: dec!(3500),
                max_contribution: dec!(3867.50),
            },
            ei: EiParams {
                max_insurable_earnings: dec!(63200),
                rate: dec!(0.0166),
                max_premium: dec!(1049.12),
            },
        },
        provinces,
        rrsp: RrspLimits {
            max_contribution: dec!(31560),
            percentage_limit: dec!(0.18),
        },
        mileage_rates: MileageRates {
            first_5000_km: dec!(0.70),
            after_5000_km: dec!(0.64),
        },
        last_updated: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
        source: "CRA Official - Built-in Data".to_string(),
    }
}

/// The complete 2025 dataset.
///
/// Provincial schedules are restated at their 2024 figures pending the
/// provinces' indexation announcements; federal brackets, BPA, CPP/EI and
/// the RRSP dollar limit carry the published 2025 values.
pub fn tax_data_2025() -> TaxData {
    let mut provinces = BTreeMap::new();

    provinces.insert(
        Province::Alberta,
        ProvincialTaxData {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(148269)), dec!(0.10)),
                TaxBracket::new(dec!(148269), Some(dec!(177922)), dec!(0.12)),
                TaxBracket::new(dec!(177922), Some(dec!(237230)), dec!(0.13)),
                TaxBracket::new(dec!(237230), Some(dec!(355845)), dec!(0.14)),
                TaxBracket::new(dec!(355845), None, dec!(0.15)),
            ],
            basic_personal_amount: dec!(21003),
            surtax: None,
        },
    );
    provinces.insert(
        Province::BritishColumbia,
        ProvincialTaxData {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(47937)), dec!(0.0506)),
                TaxBracket::new(dec!(47937), Some(dec!(95875)), dec!(0.077)),
                TaxBracket::new(dec!(95875), Some(dec!(110076)), dec!(0.105)),
                TaxBracket::new(dec!(110076), Some(dec!(133664)), dec!(0.1229)),
                TaxBracket::new(dec!(133664), Some(dec!(181232)), dec!(0.147)),
                TaxBracket::new(dec!(181232), Some(dec!(252752)), dec!(0.168)),
                TaxBracket::new(dec!(252752), None, dec!(0.205)),
            ],
            basic_personal_amount: dec!(12580),
            surtax: None,
        },
    );
    provinces.insert(
        Province::Manitoba,
        ProvincialTaxData {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(47000)), dec!(0.108)),
                TaxBracket::new(dec!(47000), Some(dec!(100000)), dec!(0.1275)),
                TaxBracket::new(dec!(100000), None, dec!(0.174)),
            ],
            basic_personal_amount: dec!(15780),
            surtax: None,
        },
    );
    provinces.insert(
        Province::NewBrunswick,
        ProvincialTaxData {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(49958)), dec!(0.094)),
                TaxBracket::new(dec!(49958), Some(dec!(99916)), dec!(0.14)),
                TaxBracket::new(dec!(99916), Some(dec!(185064)), dec!(0.16)),
                TaxBracket::new(dec!(185064), None, dec!(0.195)),
            ],
            basic_personal_amount: dec!(13044),
            surtax: None,
        },
    );
    provinces.insert(
        Province::NewfoundlandAndLabrador,
        ProvincialTaxData {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(43198)), dec!(0.087)),
                TaxBracket::new(dec!(43198), Some(dec!(86395)), dec!(0.145)),
                TaxBracket::new(dec!(86395), Some(dec!(154244)), dec!(0.158)),
                TaxBracket::new(dec!(154244), Some(dec!(215943)), dec!(0.178)),
                TaxBracket::new(dec!(215943), Some(dec!(275870)), dec!(0.198)),
                TaxBracket::new(dec!(275870), Some(dec!(551739)), dec!(0.208)),
                TaxBracket::new(dec!(551739), Some(dec!(1103478)), dec!(0.213)),
                TaxBracket::new(dec!(1103478), None, dec!(0.218)),
            ],
            basic_personal_amount: dec!(10818),
            surtax: None,
        },
    );
    provinces.insert(
        Province::NovaScotia,
        ProvincialTaxData {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(29590)), dec!(0.0879)),
                TaxBracket::new(dec!(29590), Some(dec!(59180)), dec!(0.1495)),
                TaxBracket::new(dec!(59180), Some(dec!(93000)), dec!(0.1667)),
                TaxBracket::new(dec!(93000), Some(dec!(150000)), dec!(0.175)),
                TaxBracket::new(dec!(150000), None, dec!(0.21)),
            ],
            basic_personal_amount: dec!(8481),
            surtax: None,
        },
    );
    provinces.insert(
        Province::NorthwestTerritories,
        ProvincialTaxData {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(50597)), dec!(0.059)),
                TaxBracket::new(dec!(50597), Some(dec!(101198)), dec!(0.086)),
                TaxBracket::new(dec!(101198), Some(dec!(164525)), dec!(0.122)),
                TaxBracket::new(dec!(164525), None, dec!(0.1405)),
            ],
            basic_personal_amount: dec!(17373),
            surtax: None,
        },
    );
    provinces.insert(
        Province::Nunavut,
        ProvincialTaxData {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(53268)), dec!(0.04)),
                TaxBracket::new(dec!(53268), Some(dec!(106537)), dec!(0.07)),
                TaxBracket::new(dec!(106537), Some(dec!(173205)), dec!(0.09)),
                TaxBracket::new(dec!(173205), None, dec!(0.115)),
            ],
            basic_personal_amount: dec!(18767),
            surtax: None,
        },
    );
    provinces.insert(
        Province::Ontario,
        ProvincialTaxData {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(51446)), dec!(0.0505)),
                TaxBracket::new(dec!(51446), Some(dec!(102894)), dec!(0.0915)),
                TaxBracket::new(dec!(102894), Some(dec!(150000)), dec!(0.1116)),
                TaxBracket::new(dec!(150000), Some(dec!(220000)), dec!(0.1216)),
                TaxBracket::new(dec!(220000), None, dec!(0.1316)),
            ],
            basic_personal_amount: dec!(12399),
            surtax: Some(Surtax {
                threshold1: dec!(5554),
                rate1: dec!(0.20),
                threshold2: dec!(7108),
                rate2: dec!(0.36),
            }),
        },
    );
    provinces.insert(
        Province::PrinceEdwardIsland,
        ProvincialTaxData {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(32656)), dec!(0.0965)),
                TaxBracket::new(dec!(32656), Some(dec!(64313)), dec!(0.1363)),
                TaxBracket::new(dec!(64313), Some(dec!(105000)), dec!(0.1665)),
                TaxBracket::new(dec!(105000), Some(dec!(140000)), dec!(0.18)),
                TaxBracket::new(dec!(140000), None, dec!(0.1875)),
            ],
            basic_personal_amount: dec!(13500),
            surtax: None,
        },
    );
    provinces.insert(
        Province::Quebec,
        ProvincialTaxData {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(51780)), dec!(0.14)),
                TaxBracket::new(dec!(51780), Some(dec!(103545)), dec!(0.19)),
                TaxBracket::new(dec!(103545), Some(dec!(126000)), dec!(0.24)),
                TaxBracket::new(dec!(126000), None, dec!(0.2575)),
            ],
            basic_personal_amount: dec!(18056),
            surtax: None,
        },
    );
    provinces.insert(
        Province::Saskatchewan,
        ProvincialTaxData {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(52057)), dec!(0.105)),
                TaxBracket::new(dec!(52057), Some(dec!(148734)), dec!(0.125)),
                TaxBracket::new(dec!(148734), None, dec!(0.145)),
            ],
            basic_personal_amount: dec!(18491),
            surtax: None,
        },
    );
    provinces.insert(
        Province::Yukon,
        ProvincialTaxData {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(55867)), dec!(0.064)),
                TaxBracket::new(dec!(55867), Some(dec!(111733)), dec!(0.09)),
                TaxBracket::new(dec!(111733), Some(dec!(173205)), dec!(0.109)),
                TaxBracket::new(dec!(173205), Some(dec!(500000)), dec!(0.128)),
                TaxBracket::new(dec!(500000), None, dec!(0.15)),
            ],
            basic_personal_amount: dec!(15705),
            surtax: None,
        },
    );

    TaxData {
        year: 2025,
        federal: FederalTaxData {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(57375)), dec!(0.15)),
                TaxBracket::new(dec!(57375), Some(dec!(114750)), dec!(0.205)),
                TaxBracket::new(dec!(114750), Some(dec!(177882)), dec!(0.26)),
                TaxBracket::new(dec!(177882), Some(dec!(253414)), dec!(0.29)),
                TaxBracket::new(dec!(253414), None, dec!(0.33)),
            ],
            basic_personal_amount: dec!(16129),
            cpp: CppParams {
                max_pensionable_earnings: dec!(71300),
                rate: dec!(0.0595),
                exemption: dec!(3500),
                max_contribution: dec!(4034.10),
            },
            ei: EiParams {
                max_insurable_earnings: dec!(65700),
                rate: dec!(0.0164),
                max_premium: dec!(1077.48),
            },
        },
        provinces,
        rrsp: RrspLimits {
            max_contribution: dec!(32490),
            percentage_limit: dec!(0.18),
        },
        mileage_rates: MileageRates {
            first_5000_km: dec!(0.70),
            after_5000_km: dec!(0.64),
        },
        last_updated: NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date"),
        source: "CRA Official - Built-in Data".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn for_year_returns_matching_year() {
        assert_eq!(for_year(2024).unwrap().year, 2024);
        assert_eq!(for_year(2025).unwrap().year, 2025);
        assert_eq!(for_year(2023), None);
    }

    #[test]
    fn datasets_cover_all_provinces() {
        for year in YEARS {
            let data = for_year(year).unwrap();
            for province in Province::ALL {
                assert!(
                    data.province(province).is_ok(),
                    "{year} missing {province}"
                );
            }
        }
    }

    #[test]
    fn only_ontario_carries_a_surtax() {
        let data = tax_data_2024();
        for (province, provincial) in &data.provinces {
            assert_eq!(
                provincial.surtax.is_some(),
                *province == Province::Ontario,
                "unexpected surtax state for {province}"
            );
        }
    }
}
