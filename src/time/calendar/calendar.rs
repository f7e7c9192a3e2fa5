use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use chrono::NaiveDate;

use crate::error::ConfigurationError;
use crate::germany::statecode::StateCode;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::recurringholiday::holidayrule::{HolidayRule, ResolvedHoliday};
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

/// A fixed set of holiday rules, usually the ones observed in one state.
///
/// Cloning is cheap; the rules are shared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Calendar {
    state: Option<StateCode>,
    rules: Arc<[HolidayRule]>
}

impl Calendar {
    pub(crate) fn for_state(state: StateCode, rules: Vec<HolidayRule>) -> Calendar {
        Calendar { state: Some(state), rules: rules.into() }
    }

    /// Builds a calendar from arbitrary rules. Names must be non-empty and unique.
    pub fn from_rules(rules: Vec<HolidayRule>) -> Result<Calendar, ConfigurationError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(rules.len());
        for rule in rules.iter() {
            if rule.name().is_empty() {
                return Err(ConfigurationError::EmptyName);
            }
            if !seen.insert(rule.name()) {
                return Err(ConfigurationError::DuplicateName(rule.name().to_owned()));
            }
        }
        Ok(Calendar { state: None, rules: rules.into() })
    }

    /// The state this calendar was resolved for, if any.
    pub fn state(&self) -> Option<StateCode> {
        self.state
    }

    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }

    pub fn holiday_names(&self) -> BTreeSet<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Names of all holidays on `d`. Two rules can coincide, e.g. Ascension
    /// and Labour Day in 2008.
    pub fn holiday_names_on(&self, d: NaiveDate) -> Vec<&str> {
        self.rules
            .iter()
            .filter(|rule| rule.is_holiday(&d))
            .map(|rule| rule.name())
            .collect()
    }
}

impl HolidayCalendar for Calendar {
    fn holidays_in_year(&self, year: i32) -> BTreeSet<ResolvedHoliday> {
        self.rules
            .iter()
            .filter_map(|rule| rule.resolve(year))
            .collect()
    }

    fn is_holiday(&self, d: NaiveDate) -> bool {
        self.rules.iter().any(|rule| rule.is_holiday(&d))
    }
}
