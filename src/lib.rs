//! Public holidays of the sixteen German federal states.
//!
//! [`get_calendar`] returns the [`Calendar`] of a state; the
//! [`HolidayCalendar`] trait resolves it for a year or a range of dates.

pub mod configuration;
pub mod error;

pub mod germany {
    pub mod statecode;
    pub mod holidaycatalogue;
    pub mod exclusionmap;
    pub mod calendarresolver;
}

pub mod time {
    pub mod utility;
    pub mod rangeofdates;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod onetimeholiday;
        pub mod easterrelatedholiday;
        pub mod weekdayadjustedholiday;
        pub mod holidayrule;
    }

    pub mod calendar {
        pub mod holidaycalendar;
        pub mod calendar;
    }
}

pub use error::{ConfigurationError, HolidayError, LookupContext};
pub use germany::calendarresolver::{get_calendar, get_calendar_by_name_or_code, get_calendar_for_state};
pub use germany::statecode::StateCode;
pub use time::calendar::calendar::Calendar;
pub use time::calendar::holidaycalendar::HolidayCalendar;
pub use time::recurringholiday::holidayrule::{HolidayRule, ResolvedHoliday, RuleKind};
