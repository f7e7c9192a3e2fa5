use chrono::{Duration, NaiveDate};
use serde::Serialize;

use super::recurringholiday::RecurringHoliday;

/// Western (Gregorian) Easter Sunday of `year`.
///
/// Uses the anonymous Gregorian algorithm (Meeus/Jones/Butcher), which holds
/// for every year of the proleptic Gregorian calendar. Returns `None` only when
/// the year lies outside the range `NaiveDate` can represent.
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;

    let month = (n / 31) as u32;
    let day = (n % 31 + 1) as u32;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Holiday at a fixed number of days from Easter Sunday.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct EasterRelatedHoliday {
    pub(crate) days_after_easter: i32
}

impl EasterRelatedHoliday {
    pub fn new(days_after_easter: i32) -> EasterRelatedHoliday {
        EasterRelatedHoliday { days_after_easter }
    }

    pub fn days_after_easter(&self) -> i32 {
        self.days_after_easter
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        easter_sunday(year)?
            .checked_add_signed(Duration::days(self.days_after_easter as i64))
    }
}
