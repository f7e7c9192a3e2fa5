//! Entry point: holiday calendars for German states.
//!
//! ```
//! use feiertage::germany::calendarresolver::get_calendar;
//! use feiertage::time::calendar::holidaycalendar::HolidayCalendar;
//!
//! let calendar = get_calendar("NW").unwrap();
//! for holiday in calendar.holidays_in_year(2015) {
//!     println!("{} {}", holiday.date(), holiday.name());
//! }
//! ```

use std::sync::LazyLock;

use tracing::debug;

use crate::error::HolidayError;
use crate::time::calendar::calendar::Calendar;
use super::exclusionmap::applicable_for_state;
use super::holidaycatalogue::all_rules;
use super::statecode::StateCode;

fn build_calendar(state: StateCode) -> Calendar {
    let applicable = applicable_for_state(state);
    let rules = all_rules()
        .iter()
        .filter(|rule| applicable.contains(rule.name()))
        .cloned()
        .collect::<Vec<_>>();
    debug!(state = %state, holidays = rules.len(), "resolved state holiday calendar");
    Calendar::for_state(state, rules)
}

static STATE_CALENDARS: LazyLock<[Calendar; 16]> = LazyLock::new(|| {
    StateCode::ALL.map(build_calendar)
});

pub fn get_calendar_for_state(state: StateCode) -> Calendar {
    STATE_CALENDARS[state.index()].clone()
}

/// Calendar for a two-letter state code such as `"NW"`.
pub fn get_calendar(state_code: &str) -> Result<Calendar, HolidayError> {
    let state = StateCode::from_code(state_code).inspect_err(|err| {
        debug!(error = %err, "rejected state code");
    })?;
    Ok(get_calendar_for_state(state))
}

/// Like [`get_calendar`] but also accepts full names like `"Nordrhein-Westfalen"`.
pub fn get_calendar_by_name_or_code(state: &str) -> Result<Calendar, HolidayError> {
    StateCode::normalize(state).map(get_calendar_for_state)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupContext;
    use crate::germany::exclusionmap::applicable_for;
    use crate::time::calendar::holidaycalendar::HolidayCalendar;

    #[test]
    fn calendar_holds_applicable_rules() {
        for state in StateCode::ALL {
            let calendar = get_calendar_for_state(state);
            assert_eq!(calendar.state(), Some(state));
            assert_eq!(calendar.holiday_names(), applicable_for(state.code()).unwrap());
        }
    }

    #[test]
    fn repeated_lookups_agree() {
        let first = get_calendar("HE").unwrap();
        let second = get_calendar("HE").unwrap();
        assert_eq!(first, second);
        assert_eq!(first.holidays_in_year(2021), second.holidays_in_year(2021));
    }

    #[test]
    fn invalid_code() {
        assert_eq!(get_calendar("XX"), Err(HolidayError::unknown_code("XX")));
    }

    #[test]
    fn full_names_resolve() {
        assert_eq!(
            get_calendar_by_name_or_code("Nordrhein-Westfalen").unwrap(),
            get_calendar("NW").unwrap()
        );
        assert_eq!(
            get_calendar_by_name_or_code("Atlantis"),
            Err(HolidayError::UnknownStateCode {
                input: "Atlantis".to_owned(),
                lookup: LookupContext::CodeOrName
            })
        );
    }
}
