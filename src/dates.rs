//! Calendar arithmetic on `chrono` dates

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone, Weekday};

pub trait DateExt: Sized {
    /// Shifts by a signed number of days. `None` on calendar overflow.
    fn adding_days(&self, days: i64) -> Option<Self>;

    /// Whole days from `self` to `other`; negative if `other` is earlier.
    fn days_until(&self, other: &Self) -> i64;

    fn is_weekend(&self) -> bool;

    fn start_of_month(&self) -> Self;

    fn end_of_month(&self) -> Self;
}

impl DateExt for NaiveDate {
    fn adding_days(&self, days: i64) -> Option<Self> {
        let magnitude = Days::new(days.unsigned_abs());
        if days >= 0 {
            self.checked_add_days(magnitude)
        } else {
            self.checked_sub_days(magnitude)
        }
    }

    fn days_until(&self, other: &Self) -> i64 {
        other.signed_duration_since(*self).num_days()
    }

    fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    fn start_of_month(&self) -> Self {
        self.with_day(1).unwrap_or(*self)
    }

    fn end_of_month(&self) -> Self {
        let (year, month) = if self.month() == 12 {
            (self.year() + 1, 1)
        } else {
            (self.year(), self.month() + 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|first_of_next| first_of_next.pred_opt())
            .unwrap_or(*self)
    }
}

/// Midnight of the same calendar day in the value's own time zone.
///
/// Falls back to `at` itself if midnight does not exist locally (DST gaps).
pub fn start_of_day<Tz: TimeZone>(at: &DateTime<Tz>) -> DateTime<Tz> {
    at.date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| at.timezone().from_local_datetime(&midnight).earliest())
        .unwrap_or_else(|| at.clone())
}

/// True if both instants fall on the same calendar day in `a`'s time zone.
pub fn is_same_day<Tz: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz>) -> bool {
    a.date_naive() == b.with_timezone(&a.timezone()).date_naive()
}
