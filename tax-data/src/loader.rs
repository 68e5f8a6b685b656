//! Loading and validating external tax datasets.
//!
//! External datasets are JSON documents in the same shape as the built-in
//! records (see [`crate::builtin`]). The calculation engine assumes its
//! input is well-formed, so every document passes structural validation
//! here before it is handed over: bracket schedules must start at zero,
//! ascend without gaps or overlaps, and end in an unbounded bracket; rates
//! live in `[0, 1]`; amounts are non-negative; surtax thresholds are
//! ordered.

use std::io::Read;

use rust_decimal::Decimal;
use tax_core::{Surtax, TaxBracket, TaxData};
use thiserror::Error;
use tracing::info;

/// Errors that can occur when loading or validating a tax dataset.
#[derive(Debug, Error)]
pub enum TaxDataError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{schedule}: bracket schedule is empty")]
    EmptySchedule { schedule: String },

    #[error("{schedule}: first bracket starts at {min}, expected 0")]
    ScheduleStartsAboveZero { schedule: String, min: Decimal },

    #[error("{schedule}: bracket {index} starts at {min} but the previous bracket ends at {previous_max}")]
    ScheduleHasGapOrOverlap {
        schedule: String,
        index: usize,
        min: Decimal,
        previous_max: Decimal,
    },

    #[error("{schedule}: bracket {index} has max {max} below min {min}")]
    BracketInverted {
        schedule: String,
        index: usize,
        min: Decimal,
        max: Decimal,
    },

    #[error("{schedule}: bracket {index} has an upper bound but is the final bracket; the schedule must end unbounded")]
    ScheduleNotUnbounded { schedule: String, index: usize },

    #[error("{schedule}: bracket {index} rate {rate} is outside [0, 1]")]
    RateOutOfRange {
        schedule: String,
        index: usize,
        rate: Decimal,
    },

    #[error("{schedule}: unbounded bracket {index} is not the final bracket")]
    UnboundedBracketNotLast { schedule: String, index: usize },

    #[error("{field} is negative: {value}")]
    NegativeAmount { field: String, value: Decimal },

    #[error("surtax for {schedule} has threshold1 {threshold1} >= threshold2 {threshold2}")]
    SurtaxThresholdsOutOfOrder {
        schedule: String,
        threshold1: Decimal,
        threshold2: Decimal,
    },
}

/// Parses and validates a dataset from a JSON string.
pub fn from_json_str(json: &str) -> Result<TaxData, TaxDataError> {
    let data: TaxData = serde_json::from_str(json)?;
    validate(&data)?;
    info!(year = data.year, source = %data.source, "loaded tax dataset");
    Ok(data)
}

/// Parses and validates a dataset from any reader.
pub fn from_json_reader<R: Read>(reader: R) -> Result<TaxData, TaxDataError> {
    let data: TaxData = serde_json::from_reader(reader)?;
    validate(&data)?;
    info!(year = data.year, source = %data.source, "loaded tax dataset");
    Ok(data)
}

/// Checks the structural invariants the calculation engine relies on.
pub fn validate(data: &TaxData) -> Result<(), TaxDataError> {
    validate_schedule("federal", &data.federal.brackets)?;
    non_negative(
        "federal.basic_personal_amount",
        data.federal.basic_personal_amount,
    )?;
    non_negative("federal.cpp.exemption", data.federal.cpp.exemption)?;
    non_negative(
        "federal.cpp.max_contribution",
        data.federal.cpp.max_contribution,
    )?;
    non_negative("federal.ei.max_premium", data.federal.ei.max_premium)?;
    non_negative("rrsp.max_contribution", data.rrsp.max_contribution)?;

    for (province, provincial) in &data.provinces {
        let schedule = province.code();
        validate_schedule(schedule, &provincial.brackets)?;
        non_negative(
            &format!("{schedule}.basic_personal_amount"),
            provincial.basic_personal_amount,
        )?;
        if let Some(surtax) = &provincial.surtax {
            validate_surtax(schedule, surtax)?;
        }
    }

    Ok(())
}

fn validate_schedule(schedule: &str, brackets: &[TaxBracket]) -> Result<(), TaxDataError> {
    if brackets.is_empty() {
        return Err(TaxDataError::EmptySchedule {
            schedule: schedule.to_string(),
        });
    }

    let first = &brackets[0];
    if first.min != Decimal::ZERO {
        return Err(TaxDataError::ScheduleStartsAboveZero {
            schedule: schedule.to_string(),
            min: first.min,
        });
    }

    let mut previous_max = Decimal::ZERO;
    let last_index = brackets.len() - 1;
    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
            return Err(TaxDataError::RateOutOfRange {
                schedule: schedule.to_string(),
                index,
                rate: bracket.rate,
            });
        }

        if index > 0 && bracket.min != previous_max {
            return Err(TaxDataError::ScheduleHasGapOrOverlap {
                schedule: schedule.to_string(),
                index,
                min: bracket.min,
                previous_max,
            });
        }

        match bracket.max {
            Some(max) => {
                if max < bracket.min {
                    return Err(TaxDataError::BracketInverted {
                        schedule: schedule.to_string(),
                        index,
                        min: bracket.min,
                        max,
                    });
                }
                if index == last_index {
                    return Err(TaxDataError::ScheduleNotUnbounded {
                        schedule: schedule.to_string(),
                        index,
                    });
                }
                previous_max = max;
            }
            None => {
                if index != last_index {
                    return Err(TaxDataError::UnboundedBracketNotLast {
                        schedule: schedule.to_string(),
                        index,
                    });
                }
            }
        }
    }

    Ok(())
}

fn validate_surtax(schedule: &str, surtax: &Surtax) -> Result<(), TaxDataError> {
    if surtax.threshold1 >= surtax.threshold2 {
        return Err(TaxDataError::SurtaxThresholdsOutOfOrder {
            schedule: schedule.to_string(),
            threshold1: surtax.threshold1,
            threshold2: surtax.threshold2,
        });
    }
    Ok(())
}

fn non_negative(field: &str, value: Decimal) -> Result<(), TaxDataError> {
    if value < Decimal::ZERO {
        return Err(TaxDataError::NegativeAmount {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}
