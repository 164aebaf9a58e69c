use crate::{NumDate, Unit};

/// Minutes beyond which the exact count is spelled out
const FEW_MINUTES: i64 = 20;

impl NumDate {
    /// Describes how long before `now` this date is, e.g. `"3 days ago"`.
    ///
    /// Uses the largest unit with a non-zero difference. Returns `None`
    /// when the date lies after `now`.
    pub fn time_ago(&self, now: &Self) -> Option<String> {
        for (unit, singular) in [
            (Unit::Year, "1 year ago"),
            (Unit::Month, "1 month ago"),
            (Unit::Day, "1 day ago"),
            (Unit::Hour, "1 hour ago"),
        ] {
            match now.diff(self, unit) {
                0 => continue,
                1 => return Some(singular.to_owned()),
                n if n > 1 => return Some(format!("{n} {unit}s ago")),
                _ => return None,
            }
        }

        match now.diff(self, Unit::Minute) {
            n if n > FEW_MINUTES => Some(format!("{n} minutes ago")),
            n if n >= 1 => Some("a few minutes ago".to_owned()),
            0 if now.diff(self, Unit::Second) >= 0 => Some("a few seconds ago".to_owned()),
            _ => None,
        }
    }

    /// [`NumDate::time_ago`] measured against the system clock.
    #[cfg(feature = "sys")]
    pub fn time_ago_now(&self) -> Option<String> {
        self.time_ago(&Self::now())
    }
}
