use chrono::{Datelike, NaiveDateTime, Timelike};
use std::cmp::Ordering;
use std::fmt;

/// Bar timestamp with calendar fields and a unix ts for ordering
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub ts: i64, // Unix timestamp
}

impl Time {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        let mut time = Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            ts: 0,
        };
        time.set_timestamp();
        time
    }

    pub fn from_naive(datetime: NaiveDateTime) -> Self {
        Self {
            year: datetime.year(),
            month: datetime.month(),
            day: datetime.day(),
            hour: datetime.hour(),
            minute: datetime.minute(),
            second: datetime.second(),
            ts: datetime.and_utc().timestamp(),
        }
    }

    fn set_timestamp(&mut self) {
        let datetime = NaiveDateTime::new(
            chrono::NaiveDate::from_ymd_opt(self.year, self.month, self.day)
                .expect("invalid calendar date"),
            chrono::NaiveTime::from_hms_opt(self.hour, self.minute, self.second)
                .expect("invalid time of day"),
        );
        self.ts = datetime.and_utc().timestamp();
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hour == 0 && self.minute == 0 {
            write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
        } else {
            write!(
                f,
                "{:04}/{:02}/{:02} {:02}:{:02}",
                self.year, self.month, self.day, self.hour, self.minute
            )
        }
    }
}

impl PartialEq for Time {
    fn eq(&self, other: &Self) -> bool {
        self.ts == other.ts
    }
}

impl Eq for Time {}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Time {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ts.cmp(&other.ts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_by_timestamp() {
        let a = Time::new(2024, 1, 1, 9, 30, 0);
        let b = Time::new(2024, 1, 1, 9, 31, 0);
        assert!(a < b);
        assert_eq!(a, Time::new(2024, 1, 1, 9, 30, 0));
    }

    #[test]
    fn test_display_day_level() {
        let t = Time::new(2024, 3, 7, 0, 0, 0);
        assert_eq!(t.to_string(), "2024/03/07");
    }

    #[test]
    fn test_display_intraday() {
        let t = Time::new(2024, 3, 7, 14, 5, 0);
        assert_eq!(t.to_string(), "2024/03/07 14:05");
    }
}
