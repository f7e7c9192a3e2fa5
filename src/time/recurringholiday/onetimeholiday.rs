use chrono::NaiveDate;
use serde::Serialize;

use super::recurringholiday::RecurringHoliday;

/// Holiday that happens in exactly one year, e.g. an anniversary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct OneTimeHoliday {
    pub(crate) year: i32,
    pub(crate) month: u32,
    pub(crate) day: u32
}

impl OneTimeHoliday {
    pub fn new(year: i32, month: u32, day: u32) -> Option<OneTimeHoliday> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|_| OneTimeHoliday { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for OneTimeHoliday {
    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        if year != self.year {
            return None;
        }
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_in_its_own_year() {
        let anniversary = OneTimeHoliday::new(2017, 10, 31).unwrap();
        assert_eq!(anniversary.get_holiday(2017), NaiveDate::from_ymd_opt(2017, 10, 31));
        assert_eq!(anniversary.get_holiday(2016), None);
        assert_eq!(anniversary.get_holiday(2018), None);
        assert!(!anniversary.is_holiday(&NaiveDate::from_ymd_opt(2018, 10, 31).unwrap()));
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(OneTimeHoliday::new(2017, 2, 29).is_none());
        assert!(OneTimeHoliday::new(2016, 2, 29).is_some());
    }
}
