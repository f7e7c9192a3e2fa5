use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use crate::time::utility::next_weekday_on_or_after;
use super::recurringholiday::RecurringHoliday;

/// Wraps an anchor rule and moves its date forward to the first
/// `target_weekday` on or after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct WeekdayAdjustedHoliday<R> {
    #[serde(flatten)]
    pub(crate) anchor: R,
    pub(crate) target_weekday: Weekday
}

impl<R> WeekdayAdjustedHoliday<R>
where
    R: RecurringHoliday {
    pub fn new(anchor: R, target_weekday: Weekday) -> WeekdayAdjustedHoliday<R> {
        WeekdayAdjustedHoliday { anchor, target_weekday }
    }

    pub fn anchor(&self) -> &R {
        &self.anchor
    }

    pub fn target_weekday(&self) -> Weekday {
        self.target_weekday
    }
}

impl<R> RecurringHoliday for WeekdayAdjustedHoliday<R>
where
    R: RecurringHoliday {
    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        let anchor_date = self.anchor.get_holiday(year)?;
        next_weekday_on_or_after(anchor_date, self.target_weekday)
    }
}
