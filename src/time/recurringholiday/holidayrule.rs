use chrono::NaiveDate;
use serde::Serialize;

use super::easterrelatedholiday::EasterRelatedHoliday;
use super::fixeddateholiday::FixedDateHoliday;
use super::onetimeholiday::OneTimeHoliday;
use super::recurringholiday::RecurringHoliday;
use super::weekdayadjustedholiday::WeekdayAdjustedHoliday;

/// How the date of a named holiday is derived.
///
/// Serialised with a `holiday_type` tag, the same shape the configuration
/// loader reads back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "holiday_type")]
pub enum RuleKind {
    FixedDate(FixedDateHoliday),
    FixedDateWithYear(OneTimeHoliday),
    EasterOffset(EasterRelatedHoliday),
    EasterOffsetThenWeekday(WeekdayAdjustedHoliday<EasterRelatedHoliday>),
    FixedDateThenWeekday(WeekdayAdjustedHoliday<FixedDateHoliday>)
}

impl RecurringHoliday for RuleKind {
    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        match self {
            RuleKind::FixedDate(rule) => rule.get_holiday(year),
            RuleKind::FixedDateWithYear(rule) => rule.get_holiday(year),
            RuleKind::EasterOffset(rule) => rule.get_holiday(year),
            RuleKind::EasterOffsetThenWeekday(rule) => rule.get_holiday(year),
            RuleKind::FixedDateThenWeekday(rule) => rule.get_holiday(year)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct HolidayRule {
    name: String,
    #[serde(flatten)]
    rule_kind: RuleKind
}

impl HolidayRule {
    pub fn new(name: impl Into<String>, rule_kind: RuleKind) -> HolidayRule {
        HolidayRule { name: name.into(), rule_kind }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rule_kind(&self) -> &RuleKind {
        &self.rule_kind
    }

    pub fn resolve(&self, year: i32) -> Option<ResolvedHoliday> {
        self.rule_kind
            .get_holiday(year)
            .map(|date| ResolvedHoliday::new(self.name.clone(), date))
    }
}

impl RecurringHoliday for HolidayRule {
    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        self.rule_kind.get_holiday(year)
    }
}

/// A named holiday pinned to a concrete date. Orders by date, then name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ResolvedHoliday {
    date: NaiveDate,
    name: String
}

impl ResolvedHoliday {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> ResolvedHoliday {
        ResolvedHoliday { date, name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}
