//! Calendar arithmetic on the six date fields.
//!
//! Amounts are applied as a signed delta starting at the requested unit.
//! Fixed-modulus fields (second, minute, hour, month) keep the euclidean
//! remainder and pass the quotient to the next larger unit; a step that
//! produces no carry ends the cascade. Days are carried by the length of
//! each month walked through, so the day field always ends valid for the
//! resulting month. Month and year changes never touch the day field.

use crate::calendar::{days_in_month, next_month, prev_month};
use crate::consts::{DAYS_PER_GREGORIAN_CYCLE, DAYS_PER_WEEK, GREGORIAN_CYCLE, MAX_DAY};
use crate::{NumDate, Unit};

impl NumDate {
    /// Adds `amount` of `unit` in place and returns `self` for chaining.
    ///
    /// A negative amount behaves exactly like [`NumDate::subtract`] with its
    /// magnitude.
    ///
    /// ```
    /// use numdate::{NumDate, Unit};
    ///
    /// let mut date: NumDate = "20240229".parse().unwrap();
    /// date.add(1, Unit::Day).add(90, Unit::Minute);
    /// assert_eq!(date.to_string(), "20240301013000");
    /// ```
    pub fn add(&mut self, amount: i64, unit: Unit) -> &mut Self {
        self.shift(i128::from(amount), unit);
        self
    }

    /// Subtracts `amount` of `unit` in place and returns `self` for chaining.
    ///
    /// A negative amount behaves exactly like [`NumDate::add`] with its
    /// magnitude.
    pub fn subtract(&mut self, amount: i64, unit: Unit) -> &mut Self {
        self.shift(-i128::from(amount), unit);
        self
    }

    /// Consuming form of [`NumDate::add`].
    #[must_use]
    pub fn plus(mut self, amount: i64, unit: Unit) -> Self {
        self.add(amount, unit);
        self
    }

    /// Consuming form of [`NumDate::subtract`].
    #[must_use]
    pub fn minus(mut self, amount: i64, unit: Unit) -> Self {
        self.subtract(amount, unit);
        self
    }

    fn shift(&mut self, delta: i128, unit: Unit) {
        trace!("shifting {self} by {delta} {unit}");

        let mut delta = delta;
        let mut unit = unit;
        loop {
            match unit {
                Unit::Week => {
                    delta *= i128::from(DAYS_PER_WEEK);
                    unit = Unit::Day;
                    continue;
                }
                Unit::Day => {
                    self.roll_days(delta);
                    break;
                }
                Unit::Year => {
                    self.year = clamp_year(i128::from(self.year) + delta);
                    break;
                }
                Unit::Second | Unit::Minute | Unit::Hour | Unit::Month => {}
            }

            let Some((modulus, larger)) = unit.carry() else {
                break;
            };
            let field = match unit {
                Unit::Second => &mut self.second,
                Unit::Minute => &mut self.minute,
                Unit::Hour => &mut self.hour,
                _ => &mut self.month,
            };
            delta = carry(field, delta, i128::from(modulus));
            if delta == 0 {
                break;
            }
            unit = larger;
        }

        self.invalidate();
        trace!("shifted to {self}");
    }

    /// Moves the day field by `delta`, walking month by month so each step
    /// uses that month's own length.
    fn roll_days(&mut self, delta: i128) {
        let cycle_days = i128::from(DAYS_PER_GREGORIAN_CYCLE);
        let max_day = i128::from(MAX_DAY);
        let mut day = i128::from(self.day) + delta;
        let mut year = i128::from(self.year);

        // Every run of 4800 consecutive months holds exactly one cycle of
        // days, so whole cycles can be skipped while the walk would cover
        // them completely.
        if day > cycle_days + max_day {
            let cycles = (day - max_day - 1) / cycle_days;
            day -= cycles * cycle_days;
            year += cycles * i128::from(GREGORIAN_CYCLE);
        } else if day <= -cycle_days {
            let cycles = -day / cycle_days;
            day += cycles * cycle_days;
            year -= cycles * i128::from(GREGORIAN_CYCLE);
        }

        let mut year = clamp_year(year);
        let mut month = self.month;
        while day > i128::from(days_in_month(year, month)) {
            day -= i128::from(days_in_month(year, month));
            (year, month) = next_month(year, month);
        }
        while day < 1 {
            (year, month) = prev_month(year, month);
            day += i128::from(days_in_month(year, month));
        }

        self.year = year;
        self.month = month;
        // bounded by days_in_month above
        self.day = day as u8;
    }
}

/// Applies `delta` to a fixed-modulus field and returns the signed carry.
fn carry(field: &mut u8, delta: i128, modulus: i128) -> i128 {
    let sum = i128::from(*field) + delta;
    // rem_euclid keeps the field in 0..modulus
    *field = sum.rem_euclid(modulus) as u8;
    sum.div_euclid(modulus)
}

fn clamp_year(year: i128) -> i64 {
    i64::try_from(year).unwrap_or(if year < 0 { i64::MIN } else { i64::MAX })
}
