/// Seconds per minute, the carry modulus of the second field
pub const SECONDS_PER_MINUTE: i64 = 60;
/// Minutes per hour, the carry modulus of the minute field
pub const MINUTES_PER_HOUR: i64 = 60;
/// Hours per day, the carry modulus of the hour field
pub const HOURS_PER_DAY: i64 = 24;
/// Months per year, the carry modulus of the month field
pub const MONTHS_PER_YEAR: i64 = 12;
/// Days per week; weeks are always converted to days before cascading
pub const DAYS_PER_WEEK: i64 = 7;

/// Month index for January (months are 0-indexed)
pub const JANUARY: u8 = 0;
/// Month index for December (months are 0-indexed)
pub const DECEMBER: u8 = 11;

/// First day of month
pub const MIN_DAY: u8 = 1;
/// Largest day number any month can hold
pub const MAX_DAY: u8 = 31;

/// Days in each month, indexed by `[is_leap_year as usize][month]`
pub const DAYS_IN_MONTH: [[u8; 12]; 2] = [
    // not a leap year
    [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
    // leap year
    [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;
/// Days in one full 400-year Gregorian cycle
pub(crate) const DAYS_PER_GREGORIAN_CYCLE: i64 = 146_097;
/// Days between 0000-03-01 and 1970-01-01
pub(crate) const EPOCH_SHIFT_DAYS: i64 = 719_468;
/// Weekday of 1970-01-01 (Thursday, with Sunday as 0)
pub(crate) const EPOCH_WEEKDAY: i64 = 4;

/// Milliseconds per second
pub const MS_PER_SECOND: i64 = 1_000;
/// Milliseconds per minute
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
/// Milliseconds per hour
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
/// Milliseconds per day
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
/// Milliseconds per week
pub const MS_PER_WEEK: i64 = DAYS_PER_WEEK * MS_PER_DAY;

/// Shortest accepted token (`YYYY`)
pub const MIN_TOKEN_DIGITS: usize = 4;
/// Longest accepted token (`YYYYMMDDHHMMSS`)
pub const MAX_TOKEN_DIGITS: usize = 14;
/// Digits of the year prefix in a token
pub(crate) const YEAR_DIGITS: usize = 4;
/// Digits of every field after the year in a token
pub(crate) const FIELD_DIGITS: usize = 2;
