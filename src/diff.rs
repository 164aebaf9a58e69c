use crate::consts::MONTHS_PER_YEAR;
use crate::{NumDate, Unit};

impl NumDate {
    /// How far `self` is past `other`, in whole `unit`s truncated toward zero.
    ///
    /// Positive when `self` is later than `other`. Fixed-size units divide the
    /// instant difference; months and years interpolate linearly across the
    /// actual length of the month the difference ends in.
    ///
    /// ```
    /// use numdate::{NumDate, Unit};
    ///
    /// let from: NumDate = "20200310".parse().unwrap();
    /// let to: NumDate = "20200120".parse().unwrap();
    /// assert_eq!(from.diff(&to, Unit::Month), 1);
    /// assert_eq!(to.diff(&from, Unit::Month), -1);
    /// ```
    pub fn diff(&self, other: &Self, unit: Unit) -> i64 {
        let result = match unit.millis() {
            Some(unit_ms) => {
                let delta = self.epoch_millis() - other.epoch_millis();
                // integer division truncates toward zero
                let whole = delta / i128::from(unit_ms);
                i64::try_from(whole).unwrap_or(if whole < 0 { i64::MIN } else { i64::MAX })
            }
            None => {
                let mut months = month_diff(self, other);
                if unit == Unit::Year {
                    months /= MONTHS_PER_YEAR as f64;
                }
                // saturating cast
                months.trunc() as i64
            }
        };
        trace!("{self} is {result} {unit}(s) past {other}");
        result
    }
}

/// Fractional months from `b` to `a`, interpolated against the whole-month
/// anchors around `b`.
pub(crate) fn month_diff(a: &NumDate, b: &NumDate) -> f64 {
    let whole = (i128::from(b.year) - i128::from(a.year)) * i128::from(MONTHS_PER_YEAR)
        + (i128::from(b.month) - i128::from(a.month));
    let whole = i64::try_from(whole).unwrap_or(if whole < 0 { i64::MIN } else { i64::MAX });

    let anchor = a.clone().plus(whole, Unit::Month).epoch_millis();
    let target = b.epoch_millis();
    let adjust = if target < anchor {
        let previous = a.clone().plus(whole.saturating_sub(1), Unit::Month).epoch_millis();
        (target - anchor) as f64 / (anchor - previous) as f64
    } else {
        let next = a.clone().plus(whole.saturating_add(1), Unit::Month).epoch_millis();
        (target - anchor) as f64 / (next - anchor) as f64
    };

    -(whole as f64 + adjust)
}
