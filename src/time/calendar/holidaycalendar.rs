use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::time::rangeofdates::RangeOfDates;
use crate::time::recurringholiday::holidayrule::ResolvedHoliday;

pub trait HolidayCalendar: Send + Sync {
    /// Every holiday the calendar produces for `year`.
    fn holidays_in_year(&self, year: i32) -> BTreeSet<ResolvedHoliday>;

    fn is_holiday(&self, d: NaiveDate) -> bool;

    /// Holidays in `[start, end]`, ascending by date. Swapped bounds are reordered.
    fn holidays_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<ResolvedHoliday> {
        let range = RangeOfDates::new(start, end);
        let mut holidays: Vec<ResolvedHoliday> = range
            .years()
            .flat_map(|year| self.holidays_in_year(year))
            .filter(|holiday| range.contain(holiday.date()))
            .collect();
        holidays.sort();
        holidays.dedup();
        holidays
    }
}
