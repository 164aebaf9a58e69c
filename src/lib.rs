//! A calendar date stored as six integer fields and written as a compact
//! `YYYYMMDDHHMMSS` token, with calendar-aware arithmetic performed directly
//! on the fields.
//!
//! ```
//! use numdate::{NumDate, Unit};
//!
//! let mut date: NumDate = "20240131".parse().unwrap();
//! date.add(1, Unit::Day);
//! assert_eq!(date.to_string(), "20240201000000");
//! assert_eq!(date.diff(&"20231201".parse().unwrap(), Unit::Month), 2);
//! ```

macro_rules! trace {
    ($($args:tt)+) => {
        #[cfg(feature = "log")]
        log::trace!($($args)+);
    };
}

mod arith;
mod calendar;
mod consts;
mod diff;
mod format;
mod prelude;
mod relative;
#[cfg(feature = "sys")]
mod sys;
mod unit;

pub use calendar::{days_in_month, is_leap_year};
pub use consts::*;
pub use format::{Formatted, Locale};
pub use unit::{Unit, UnitError};

use crate::prelude::*;
use std::cell::OnceCell;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A calendar date and time of day with second precision.
///
/// Months are 0-indexed. The value is mutable: [`NumDate::add`] and the
/// setters change it in place, and `clone` produces a fully independent copy.
/// The default value has every field at zero and is only a placeholder.
#[derive(Debug, Clone, Default)]
pub struct NumDate {
    year: i64,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    /// Milliseconds since the Unix epoch, filled on first read and cleared
    /// by every mutation.
    instant: OnceCell<i128>,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date token: {_0}")]
    InvalidFormat(String),
    #[display(
        fmt = "Invalid token length: {} (expected an even digit count from {} to {})",
        "_0",
        MIN_TOKEN_DIGITS,
        MAX_TOKEN_DIGITS
    )]
    InvalidLength(usize),
    #[display(fmt = "Expected 3 to 6 date fields, found {_0}")]
    InvalidFieldCount(usize),
    #[display(fmt = "Invalid month: {_0} (must be 1-12)")]
    InvalidMonth(i64),
    #[display(fmt = "Invalid month index: {_0} (must be 0-11)")]
    InvalidMonthIndex(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i64, month: i64, day: i64 },
    #[display(fmt = "Invalid hour: {_0} (must be 0-23)")]
    InvalidHour(i64),
    #[display(fmt = "Invalid minute: {_0} (must be 0-59)")]
    InvalidMinute(i64),
    #[display(fmt = "Invalid second: {_0} (must be 0-59)")]
    InvalidSecond(i64),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl NumDate {
    /// Creates a date from a 1-based month, validating every field.
    ///
    /// # Errors
    /// Returns the `ParseError` variant of the first out-of-range field; the
    /// day must exist in the given month.
    pub fn new(
        year: i64,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, ParseError> {
        Self::build(
            year,
            [month, day, hour, minute, second].map(i64::from),
            true,
        )
    }

    /// Creates a date from `[year, month(1-based), day, hour?, minute?, second?]`.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidFieldCount` for fewer than 3 or more than
    /// 6 values, otherwise validates like [`NumDate::new`].
    pub fn from_fields(fields: &[i64]) -> Result<Self, ParseError> {
        if !(3..=6).contains(&fields.len()) {
            return Err(ParseError::InvalidFieldCount(fields.len()));
        }
        let mut padded = [0_i64; 6];
        padded[..fields.len()].copy_from_slice(fields);
        let [year, month, day, hour, minute, second] = padded;
        Self::build(year, [month, day, hour, minute, second], true)
    }

    /// UTC civil fields of a Unix timestamp in milliseconds, truncated to
    /// the second.
    pub fn from_epoch_millis(millis: i64) -> Self {
        let (year, month, day) = calendar::civil_from_days(millis.div_euclid(MS_PER_DAY));
        let in_day = millis.rem_euclid(MS_PER_DAY);
        // all three are bounded by the divisions above
        Self {
            year,
            month,
            day,
            hour: (in_day / MS_PER_HOUR) as u8,
            minute: (in_day % MS_PER_HOUR / MS_PER_MINUTE) as u8,
            second: (in_day % MS_PER_MINUTE / MS_PER_SECOND) as u8,
            instant: OnceCell::new(),
        }
    }

    /// `fields` is `[month(1-based), day, hour, minute, second]`. With
    /// `strict_day` the day must exist in the month, otherwise any of 1-31
    /// is accepted so unclamped arithmetic results can be read back.
    fn build(year: i64, fields: [i64; 5], strict_day: bool) -> Result<Self, ParseError> {
        let [month, day, hour, minute, second] = fields;

        let month_index = u8::try_from(month)
            .ok()
            .filter(|m| (1..=12).contains(m))
            .ok_or(ParseError::InvalidMonth(month))?
            - 1;
        let max_day = if strict_day {
            days_in_month(year, month_index)
        } else {
            MAX_DAY
        };
        let day = u8::try_from(day)
            .ok()
            .filter(|d| (MIN_DAY..=max_day).contains(d))
            .ok_or(ParseError::InvalidDay { year, month, day })?;

        Ok(Self {
            year,
            month: month_index,
            day,
            hour: bounded(hour, HOURS_PER_DAY, ParseError::InvalidHour)?,
            minute: bounded(minute, MINUTES_PER_HOUR, ParseError::InvalidMinute)?,
            second: bounded(second, SECONDS_PER_MINUTE, ParseError::InvalidSecond)?,
            instant: OnceCell::new(),
        })
    }

    /// Helper to parse a token field with better error messages
    fn parse_field(s: &str) -> Result<i64, ParseError> {
        s.parse::<i64>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

fn bounded(value: i64, limit: i64, err: fn(i64) -> ParseError) -> Result<u8, ParseError> {
    u8::try_from(value)
        .ok()
        .filter(|v| i64::from(*v) < limit)
        .ok_or_else(|| err(value))
}

impl NumDate {
    pub const fn year(&self) -> i64 {
        self.year
    }

    /// Month index, 0 for January
    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Day of the week, 0 for Sunday. A day past the end of its month counts
    /// as the matching day of the following month.
    pub fn weekday(&self) -> u8 {
        calendar::weekday_from_epoch_days(calendar::epoch_days(
            self.year,
            self.month,
            i64::from(self.day),
        ))
    }

    /// Milliseconds since 1970-01-01T00:00:00 with the fields read as UTC.
    pub fn epoch_millis(&self) -> i128 {
        *self.instant.get_or_init(|| {
            let days = calendar::epoch_days(self.year, self.month, i64::from(self.day));
            days * i128::from(MS_PER_DAY)
                + i128::from(self.hour) * i128::from(MS_PER_HOUR)
                + i128::from(self.minute) * i128::from(MS_PER_MINUTE)
                + i128::from(self.second) * i128::from(MS_PER_SECOND)
        })
    }

    /// The token read as a decimal number, sign included.
    pub fn to_number(&self) -> i128 {
        let magnitude = i128::from(self.year.unsigned_abs()) * 10_000_000_000
            + i128::from(self.month + 1) * 100_000_000
            + i128::from(self.day) * 1_000_000
            + i128::from(self.hour) * 10_000
            + i128::from(self.minute) * 100
            + i128::from(self.second);
        if self.year < 0 { -magnitude } else { magnitude }
    }

    pub fn set_year(&mut self, year: i64) -> &mut Self {
        self.year = year;
        self.invalidate();
        self
    }

    /// Sets the 0-based month index.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonthIndex` above 11.
    pub fn set_month(&mut self, month: u8) -> Result<&mut Self, ParseError> {
        if month > DECEMBER {
            return Err(ParseError::InvalidMonthIndex(month));
        }
        self.month = month;
        self.invalidate();
        Ok(self)
    }

    /// Sets the day of month. Only 1-31 is checked, since the month may
    /// still be about to change.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` outside 1-31.
    pub fn set_day(&mut self, day: u8) -> Result<&mut Self, ParseError> {
        if !(MIN_DAY..=MAX_DAY).contains(&day) {
            return Err(ParseError::InvalidDay {
                year: self.year,
                month: i64::from(self.month) + 1,
                day: i64::from(day),
            });
        }
        self.day = day;
        self.invalidate();
        Ok(self)
    }

    /// # Errors
    /// Returns `ParseError::InvalidHour` above 23.
    pub fn set_hour(&mut self, hour: u8) -> Result<&mut Self, ParseError> {
        self.hour = bounded(i64::from(hour), HOURS_PER_DAY, ParseError::InvalidHour)?;
        self.invalidate();
        Ok(self)
    }

    /// # Errors
    /// Returns `ParseError::InvalidMinute` above 59.
    pub fn set_minute(&mut self, minute: u8) -> Result<&mut Self, ParseError> {
        self.minute = bounded(i64::from(minute), MINUTES_PER_HOUR, ParseError::InvalidMinute)?;
        self.invalidate();
        Ok(self)
    }

    /// # Errors
    /// Returns `ParseError::InvalidSecond` above 59.
    pub fn set_second(&mut self, second: u8) -> Result<&mut Self, ParseError> {
        self.second = bounded(i64::from(second), SECONDS_PER_MINUTE, ParseError::InvalidSecond)?;
        self.invalidate();
        Ok(self)
    }

    /// Resets the time of day to 00:00:00.
    pub fn clear_time(&mut self) -> &mut Self {
        self.hour = 0;
        self.minute = 0;
        self.second = 0;
        self.invalidate();
        self
    }

    /// Converts local fields to GMT given the host offset in minutes
    /// (positive west of Greenwich, e.g. 300 for UTC-5).
    pub fn shift_to_gmt(&mut self, offset_minutes: i64) -> &mut Self {
        self.add(offset_minutes, Unit::Minute)
    }

    /// Inverse of [`NumDate::shift_to_gmt`].
    pub fn shift_from_gmt(&mut self, offset_minutes: i64) -> &mut Self {
        self.subtract(offset_minutes, Unit::Minute)
    }

    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    pub fn is_same(&self, other: &Self) -> bool {
        self == other
    }

    fn invalidate(&mut self) {
        self.instant = OnceCell::new();
    }

    const fn key(&self) -> (i64, u8, u8, u8, u8, u8) {
        (
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }
}

impl FromStr for NumDate {
    type Err = ParseError;

    /// Parses `YYYY[MM[DD[HH[MM[SS]]]]]`; omitted fields default to the
    /// first month, first day and midnight.
    ///
    /// Years outside `0..=9999` are read from full tokens: an optional
    /// leading `-`, then every digit before the last ten is the year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let (signed, digits) = match token.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, token),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(token.to_owned()));
        }

        let len = digits.len();
        let year_digits = if signed || len > MAX_TOKEN_DIGITS {
            // month through second always take the last ten digits
            let time_digits = MAX_TOKEN_DIGITS - YEAR_DIGITS;
            if len <= time_digits {
                return Err(ParseError::InvalidLength(len));
            }
            len - time_digits
        } else {
            if len < MIN_TOKEN_DIGITS || (len - YEAR_DIGITS) % FIELD_DIGITS != 0 {
                return Err(ParseError::InvalidLength(len));
            }
            YEAR_DIGITS
        };

        let year_end = token.len() - len + year_digits;
        let year = Self::parse_field(&token[..year_end])?;
        let mut fields = [1, 1, 0, 0, 0];
        for (field, start) in fields
            .iter_mut()
            .zip((year_end..token.len()).step_by(FIELD_DIGITS))
        {
            *field = Self::parse_field(&token[start..start + FIELD_DIGITS])?;
        }

        Self::build(year, fields, false)
    }
}

impl TryFrom<&[i64]> for NumDate {
    type Error = ParseError;

    fn try_from(fields: &[i64]) -> Result<Self, Self::Error> {
        Self::from_fields(fields)
    }
}

impl fmt::Display for NumDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{:02}{:02}{:02}{:02}{:02}",
            self.year,
            self.month + 1,
            self.day,
            self.hour,
            self.minute,
            self.second
        )
    }
}

impl PartialEq for NumDate {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for NumDate {}

impl Hash for NumDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for NumDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NumDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl serde::Serialize for NumDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for NumDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_token() {
        let date = "20240229153045".parse::<NumDate>().unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 29);
        assert_eq!(date.hour(), 15);
        assert_eq!(date.minute(), 30);
        assert_eq!(date.second(), 45);
    }

    #[test]
    fn test_short_tokens_fill_defaults() {
        struct TestCase {
            token: &'static str,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                token: "20240229",
                expected: "20240229000000",
            },
            TestCase {
                token: "2024",
                expected: "20240101000000",
            },
            TestCase {
                token: "202407",
                expected: "20240701000000",
            },
            TestCase {
                token: "2024070118",
                expected: "20240701180000",
            },
            TestCase {
                token: "202407011805",
                expected: "20240701180500",
            },
            TestCase {
                token: " 20240701 ",
                expected: "20240701000000",
            },
        ];

        for case in &cases {
            let date = case.token.parse::<NumDate>().unwrap();
            assert_eq!(date.to_string(), case.expected, "{:?}", case.token);
        }
    }

    #[test]
    fn test_bad_tokens() {
        assert_eq!("".parse::<NumDate>(), Err(ParseError::EmptyInput));
        assert_eq!("   ".parse::<NumDate>(), Err(ParseError::EmptyInput));
        assert!(matches!(
            "2024-02-29".parse::<NumDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "-".parse::<NumDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "--20240229000000".parse::<NumDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert_eq!("-2024".parse::<NumDate>(), Err(ParseError::InvalidLength(4)));
        assert_eq!(
            "-0229000000".parse::<NumDate>(),
            Err(ParseError::InvalidLength(10))
        );
        assert_eq!("202".parse::<NumDate>(), Err(ParseError::InvalidLength(3)));
        assert_eq!("20240".parse::<NumDate>(), Err(ParseError::InvalidLength(5)));
        assert_eq!(
            "2024022".parse::<NumDate>(),
            Err(ParseError::InvalidLength(7))
        );
        // longer tokens carry a wide year, so the fields shift right
        assert_eq!(
            "2024022900000000".parse::<NumDate>(),
            Err(ParseError::InvalidMonth(29))
        );
        assert!(matches!(
            "999999999999999999990101000000".parse::<NumDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_token_field_ranges() {
        assert_eq!("202413".parse::<NumDate>(), Err(ParseError::InvalidMonth(13)));
        assert_eq!("202400".parse::<NumDate>(), Err(ParseError::InvalidMonth(0)));
        assert!(matches!(
            "20240132".parse::<NumDate>(),
            Err(ParseError::InvalidDay { day: 32, .. })
        ));
        assert_eq!(
            "2024010124".parse::<NumDate>(),
            Err(ParseError::InvalidHour(24))
        );
        assert_eq!(
            "202401010060".parse::<NumDate>(),
            Err(ParseError::InvalidMinute(60))
        );
        assert_eq!(
            "20240101000060".parse::<NumDate>(),
            Err(ParseError::InvalidSecond(60))
        );
    }

    #[test]
    fn test_token_accepts_unclamped_day() {
        // month arithmetic can leave February 31st behind; it must read back
        let date = "20240231".parse::<NumDate>().unwrap();
        assert_eq!(date.to_string(), "20240231000000");
    }

    #[test]
    fn test_new_is_strict() {
        assert!(NumDate::new(2024, 2, 29, 0, 0, 0).is_ok());
        assert_eq!(
            NumDate::new(2023, 2, 29, 0, 0, 0),
            Err(ParseError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            })
        );
        assert_eq!(
            NumDate::new(2024, 4, 31, 0, 0, 0),
            Err(ParseError::InvalidDay {
                year: 2024,
                month: 4,
                day: 31
            })
        );
        assert_eq!(
            NumDate::new(2024, 1, 1, 23, 59, 60),
            Err(ParseError::InvalidSecond(60))
        );
    }

    #[test]
    fn test_from_fields() {
        let date = NumDate::from_fields(&[2024, 2, 29]).unwrap();
        assert_eq!(date.month(), 1);
        assert_eq!(date.to_string(), "20240229000000");

        let date = NumDate::from_fields(&[2024, 12, 31, 23, 59, 58]).unwrap();
        assert_eq!(date.to_string(), "20241231235958");

        let date: NumDate = [1999_i64, 7, 4, 12].as_slice().try_into().unwrap();
        assert_eq!(date.to_string(), "19990704120000");

        assert_eq!(
            NumDate::from_fields(&[2024, 2]),
            Err(ParseError::InvalidFieldCount(2))
        );
        assert_eq!(
            NumDate::from_fields(&[2024, 2, 1, 0, 0, 0, 0]),
            Err(ParseError::InvalidFieldCount(7))
        );
        assert_eq!(
            NumDate::from_fields(&[2024, -1, 1]),
            Err(ParseError::InvalidMonth(-1))
        );
        assert!(matches!(
            NumDate::from_fields(&[2023, 2, 29]),
            Err(ParseError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_from_epoch_millis() {
        assert_eq!(NumDate::from_epoch_millis(0).to_string(), "19700101000000");
        assert_eq!(
            NumDate::from_epoch_millis(951_782_400_000).to_string(),
            "20000229000000"
        );
        assert_eq!(
            NumDate::from_epoch_millis(951_782_400_000 + 45_296_789).to_string(),
            "20000229123456"
        );
        assert_eq!(NumDate::from_epoch_millis(-1).to_string(), "19691231235959");
    }

    #[test]
    fn test_epoch_millis() {
        let date: NumDate = "20000229".parse().unwrap();
        assert_eq!(date.epoch_millis(), 951_782_400_000);

        let date: NumDate = "19700101000001".parse().unwrap();
        assert_eq!(date.epoch_millis(), 1_000);
    }

    #[test]
    fn test_cached_instant_follows_mutation() {
        let mut date: NumDate = "20240101".parse().unwrap();
        let before = date.epoch_millis();
        date.add(1, Unit::Day);
        assert_eq!(date.epoch_millis(), before + 86_400_000);

        date.set_hour(1).unwrap();
        assert_eq!(date.epoch_millis(), before + 90_000_000);

        date.set_year(2023);
        assert_eq!(date.to_string(), "20230102010000");
        let expected: NumDate = "20230102010000".parse().unwrap();
        assert_eq!(date.epoch_millis(), expected.epoch_millis());
    }

    #[test]
    fn test_clone_is_independent() {
        let original: NumDate = "20240115".parse().unwrap();
        let _ = original.epoch_millis();
        let mut copy = original.clone();
        copy.add(1, Unit::Month);
        assert_eq!(original.to_string(), "20240115000000");
        assert_eq!(copy.to_string(), "20240215000000");
        assert_ne!(original.epoch_millis(), copy.epoch_millis());
    }

    #[test]
    fn test_setters_validate() {
        let mut date: NumDate = "20240115".parse().unwrap();
        assert_eq!(date.set_month(12), Err(ParseError::InvalidMonthIndex(12)));
        assert!(matches!(date.set_day(0), Err(ParseError::InvalidDay { day: 0, .. })));
        assert!(matches!(date.set_day(32), Err(ParseError::InvalidDay { .. })));
        assert_eq!(date.set_hour(24), Err(ParseError::InvalidHour(24)));
        assert_eq!(date.set_minute(60), Err(ParseError::InvalidMinute(60)));
        assert_eq!(date.set_second(60), Err(ParseError::InvalidSecond(60)));
        assert_eq!(date.to_string(), "20240115000000");

        date.set_month(11).unwrap().set_day(31).unwrap();
        assert_eq!(date.to_string(), "20241231000000");
    }

    #[test]
    fn test_weekday() {
        let date: NumDate = "20240301".parse().unwrap();
        assert_eq!(date.weekday(), 5);
        let date: NumDate = "19700101".parse().unwrap();
        assert_eq!(date.weekday(), 4);
    }

    #[test]
    fn test_to_number() {
        let date: NumDate = "20240229153045".parse().unwrap();
        assert_eq!(date.to_number(), 20_240_229_153_045);

        let ancient = NumDate::from_fields(&[-976, 2, 29]).unwrap();
        assert_eq!(ancient.to_string(), "-9760229000000");
        assert_eq!(ancient.to_number(), -9_760_229_000_000);
        assert_eq!(
            ancient.to_number(),
            ancient.to_string().parse::<i128>().unwrap()
        );
    }

    #[test]
    fn test_ordering() {
        let a: NumDate = "20240229".parse().unwrap();
        let b: NumDate = "20240301".parse().unwrap();
        assert!(a < b);
        assert!(a.is_before(&b));
        assert!(b.is_after(&a));
        assert!(!a.is_same(&b));
        assert!(a.is_same(&"20240229000000".parse().unwrap()));

        let mut dates = vec![b.clone(), a.clone()];
        dates.sort();
        assert_eq!(dates, vec![a, b]);
    }

    #[test]
    fn test_gmt_shift() {
        let mut date: NumDate = "20240101200000".parse().unwrap();
        date.shift_to_gmt(300);
        assert_eq!(date.to_string(), "20240102010000");
        date.shift_from_gmt(300);
        assert_eq!(date.to_string(), "20240101200000");

        date.shift_to_gmt(-330);
        assert_eq!(date.to_string(), "20240101143000");
    }

    #[test]
    fn test_default_is_zero_placeholder() {
        let date = NumDate::default();
        assert_eq!(date.year(), 0);
        assert_eq!(date.day(), 0);
        assert_eq!(date.to_string(), "00000100000000");
    }

    #[test]
    fn test_clear_time() {
        let mut date: NumDate = "20240229235959".parse().unwrap();
        date.clear_time();
        assert_eq!(date.to_string(), "20240229000000");
    }

    #[test]
    fn test_serde_string_format() {
        let date: NumDate = "20240229153045".parse().unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""20240229153045""#);
        let parsed: NumDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);

        let parsed: NumDate = serde_json::from_str(r#""20240229""#).unwrap();
        assert_eq!(parsed.to_string(), "20240229000000");

        let result: Result<NumDate, _> = serde_json::from_str(r#""2024-02-29""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_years_beyond_four_digits_parse_back() {
        let start: NumDate = "20240229".parse().unwrap();
        let cases = [
            (start.clone().minus(3_000, Unit::Year), "-9760229000000"),
            (start.clone().plus(8_000, Unit::Year), "100240229000000"),
            (start.clone().minus(2_029, Unit::Year), "-0050229000000"),
            (start.minus(2_024, Unit::Year), "00000229000000"),
        ];

        for (date, token) in cases {
            assert_eq!(date.to_string(), token);

            let parsed: NumDate = token.parse().unwrap();
            assert_eq!(parsed, date, "{token}");
            assert_eq!(parsed.to_string(), token);

            let json = serde_json::to_string(&date).unwrap();
            assert_eq!(json, format!("\"{token}\""));
            let restored: NumDate = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, date, "{json}");
            assert_eq!(restored.epoch_millis(), date.epoch_millis());
        }

        let date: NumDate = "-12345671231235959".parse().unwrap();
        assert_eq!(date.year(), -1_234_567);
        assert_eq!((date.month(), date.day()), (11, 31));
        assert_eq!(date.to_string(), "-12345671231235959");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ParseError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            ParseError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            }
            .to_string(),
            "Invalid day 29 for month 2023-02"
        );
        assert_eq!(
            ParseError::InvalidLength(5).to_string(),
            "Invalid token length: 5 (expected an even digit count from 4 to 14)"
        );
    }
}
