use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{
    HOURS_PER_DAY, MINUTES_PER_HOUR, MONTHS_PER_YEAR, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE,
    MS_PER_SECOND, MS_PER_WEEK, SECONDS_PER_MINUTE,
};
use crate::prelude::*;

/// Granularity of an arithmetic or difference operation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Unit {
    #[display(fmt = "second")]
    Second,
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "week")]
    Week,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

/// Error returned when a unit spelling is not part of the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitError {
    /// Neither the singular nor the plural spelling of a known unit.
    #[error("Unrecognized unit: {0:?}")]
    Unrecognized(String),
}

impl Unit {
    /// Every unit, smallest first.
    pub const ALL: [Self; 7] = [
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::Day,
        Self::Week,
        Self::Month,
        Self::Year,
    ];

    /// Canonical singular spelling
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Fixed size in milliseconds, or `None` for the calendar-dependent
    /// month and year.
    pub const fn millis(self) -> Option<i64> {
        match self {
            Self::Second => Some(MS_PER_SECOND),
            Self::Minute => Some(MS_PER_MINUTE),
            Self::Hour => Some(MS_PER_HOUR),
            Self::Day => Some(MS_PER_DAY),
            Self::Week => Some(MS_PER_WEEK),
            Self::Month | Self::Year => None,
        }
    }

    /// Carry modulus of the field and the unit it carries into.
    ///
    /// Day carries by month length and week is converted before cascading,
    /// so neither has a fixed modulus; year is the last unit.
    pub(crate) const fn carry(self) -> Option<(i64, Self)> {
        match self {
            Self::Second => Some((SECONDS_PER_MINUTE, Self::Minute)),
            Self::Minute => Some((MINUTES_PER_HOUR, Self::Hour)),
            Self::Hour => Some((HOURS_PER_DAY, Self::Day)),
            Self::Month => Some((MONTHS_PER_YEAR, Self::Year)),
            Self::Day | Self::Week | Self::Year => None,
        }
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "second" | "seconds" => Ok(Self::Second),
            "minute" | "minutes" => Ok(Self::Minute),
            "hour" | "hours" => Ok(Self::Hour),
            "day" | "days" => Ok(Self::Day),
            "week" | "weeks" => Ok(Self::Week),
            "month" | "months" => Ok(Self::Month),
            "year" | "years" => Ok(Self::Year),
            _ => Err(UnitError::Unrecognized(s.to_owned())),
        }
    }
}

impl TryFrom<String> for Unit {
    type Error = UnitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.as_str().to_owned()
    }
}
