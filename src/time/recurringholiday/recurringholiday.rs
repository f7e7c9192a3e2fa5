use chrono::{Datelike, NaiveDate};


/// A holiday rule that yields at most one date per year.
pub trait RecurringHoliday: Send + Sync {

    /// Date of the holiday in `year`, or `None` if it does not occur that year.
    fn get_holiday(&self, year: i32) -> Option<NaiveDate>;

    fn is_holiday(&self, d: &NaiveDate) -> bool {
        self.get_holiday(d.year()) == Some(*d)
    }
}
