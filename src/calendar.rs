//! Gregorian calendar rules shared by the arithmetic and difference engines.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_GREGORIAN_CYCLE, DAYS_PER_WEEK, DECEMBER,
    EPOCH_SHIFT_DAYS, EPOCH_WEEKDAY, GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE,
};

/// Returns whether `year` is a leap year in the proleptic Gregorian calendar.
pub const fn is_leap_year(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` (0-indexed) of `year`.
pub const fn days_in_month(year: i64, month: u8) -> u8 {
    debug_assert!(month <= DECEMBER);

    DAYS_IN_MONTH[is_leap_year(year) as usize][month as usize]
}

pub(crate) const fn next_month(year: i64, month: u8) -> (i64, u8) {
    if month == DECEMBER {
        (year.saturating_add(1), JANUARY)
    } else {
        (year, month + 1)
    }
}

pub(crate) const fn prev_month(year: i64, month: u8) -> (i64, u8) {
    if month == JANUARY {
        (year.saturating_sub(1), DECEMBER)
    } else {
        (year, month - 1)
    }
}

/// Days since 1970-01-01 for the given civil date.
///
/// `day` is not bounded by the month length: any excess rolls into the
/// following months, and values below 1 roll back into earlier ones.
pub(crate) fn epoch_days(year: i64, month: u8, day: i64) -> i128 {
    let cycle = i128::from(GREGORIAN_CYCLE);
    // Years start in March so the leap day is the last day of the year.
    let shifted_month = i128::from(month) + 1;
    let y = i128::from(year) - i128::from(shifted_month <= 2);
    let era = y.div_euclid(cycle);
    let year_of_era = y - era * cycle;
    let month_of_year = if shifted_month > 2 {
        shifted_month - 3
    } else {
        shifted_month + 9
    };
    let day_of_year = (153 * month_of_year + 2) / 5;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

    era * i128::from(DAYS_PER_GREGORIAN_CYCLE) + day_of_era - i128::from(EPOCH_SHIFT_DAYS)
        + i128::from(day)
        - 1
}

/// Inverse of [`epoch_days`]: returns `(year, month, day)` with a 0-indexed month.
pub(crate) const fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + EPOCH_SHIFT_DAYS;
    let era = z.div_euclid(DAYS_PER_GREGORIAN_CYCLE);
    let day_of_era = z - era * DAYS_PER_GREGORIAN_CYCLE;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_of_year = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * month_of_year + 2) / 5 + 1;
    let month = if month_of_year < 10 {
        month_of_year + 2
    } else {
        month_of_year - 10
    };
    let year = year_of_era + era * GREGORIAN_CYCLE + (month <= 1) as i64;

    (year, month as u8, day as u8)
}

/// Weekday of an epoch day, with Sunday as 0.
pub(crate) fn weekday_from_epoch_days(days: i128) -> u8 {
    // rem_euclid keeps the result in 0..7
    (days + i128::from(EPOCH_WEEKDAY)).rem_euclid(i128::from(DAYS_PER_WEEK)) as u8
}
