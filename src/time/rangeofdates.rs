use std::ops::RangeInclusive;

use chrono::{
    Datelike,
    NaiveDate
};

/// Inclusive range of dates. The bounds are ordered on construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeOfDates {
    start_date: NaiveDate,
    end_date: NaiveDate
}

impl RangeOfDates {
    pub fn new(d1: NaiveDate, d2: NaiveDate) -> RangeOfDates {
        if d1 > d2 {
            RangeOfDates {start_date: d2, end_date: d1}
        } else {
            RangeOfDates {start_date: d1, end_date: d2}
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn len(&self) -> usize {
        ((self.end_date - self.start_date).num_days() + 1) as usize
    }

    pub fn contain(&self, d: NaiveDate) -> bool {
        (d >= self.start_date) && (d <= self.end_date)
    }

    /// Every calendar year the range touches.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.start_date.year()..=self.end_date.year()
    }
}
