use chrono::NaiveDate;
use serde::Serialize;

use crate::time::utility::max_days_of_month;
use super::recurringholiday::RecurringHoliday;

/// Holiday falling on the same month and day every year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FixedDateHoliday {
    pub(crate) month: u32,
    pub(crate) day: u32
}

impl FixedDateHoliday {
    pub fn new(month: u32, day: u32) -> Option<FixedDateHoliday> {
        if !(1..=12).contains(&month) || !(1..=max_days_of_month(month)).contains(&day) {
            None
        } else {
            Some(FixedDateHoliday { month, day })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    // Feb 29 simply has no occurrence in common years.
    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_impossible_dates() {
        assert!(FixedDateHoliday::new(0, 1).is_none());
        assert!(FixedDateHoliday::new(13, 1).is_none());
        assert!(FixedDateHoliday::new(4, 31).is_none());
        assert!(FixedDateHoliday::new(1, 0).is_none());
        assert!(FixedDateHoliday::new(2, 29).is_some());
    }

    #[test]
    fn occurs_every_year() {
        let unity_day = FixedDateHoliday::new(10, 3).unwrap();
        for year in [1990, 2015, 2017, 2100] {
            assert_eq!(unity_day.get_holiday(year), NaiveDate::from_ymd_opt(year, 10, 3));
        }
        assert!(unity_day.is_holiday(&NaiveDate::from_ymd_opt(2015, 10, 3).unwrap()));
        assert!(!unity_day.is_holiday(&NaiveDate::from_ymd_opt(2015, 10, 4).unwrap()));
    }

    #[test]
    fn leap_day_skips_common_years() {
        let leap_day = FixedDateHoliday::new(2, 29).unwrap();
        assert_eq!(leap_day.get_holiday(2015), None);
        assert_eq!(leap_day.get_holiday(2016), NaiveDate::from_ymd_opt(2016, 2, 29));
    }
}
