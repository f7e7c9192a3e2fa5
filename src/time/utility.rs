use chrono::{Datelike, Days, NaiveDate, Weekday};

#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100!= 0)) || (year % 400 == 0)
}


pub const fn days_of_month (year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

/// Largest day number `month` can have in any year (Feb 29 counts).
#[inline]
pub const fn max_days_of_month (month: u32) -> u32 {
    days_of_month(2000, month)
}

/// First date on or after `d` that falls on `weekday`.
pub fn next_weekday_on_or_after (d: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let days_ahead = (weekday.num_days_from_monday() + 7
                      - d.weekday().num_days_from_monday()) % 7;
    d.checked_add_days(Days::new(days_ahead as u64))
}
