//! Construction from the host clock.

use web_time::{SystemTime, UNIX_EPOCH};

use crate::NumDate;

impl NumDate {
    /// The current UTC date and time, to the second.
    pub fn now() -> Self {
        Self::from_system_time(SystemTime::now())
    }

    /// The current UTC date at 00:00:00.
    pub fn today() -> Self {
        let mut date = Self::now();
        date.clear_time();
        date
    }

    /// UTC civil fields of a [`SystemTime`], truncated to the second.
    pub fn from_system_time(time: SystemTime) -> Self {
        let millis = match time.duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX),
            Err(err) => i64::try_from(err.duration().as_millis()).map_or(i64::MIN, |ms| -ms),
        };
        Self::from_epoch_millis(millis)
    }
}
