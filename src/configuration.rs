//! Reading holiday rules from JSON.
//!
//! Each rule is an object with a `name`, a `holiday_type` tag and the fields
//! of that type:
//!
//! ```json
//! [
//!     {"name": "Neujahrstag", "holiday_type": "FixedDate", "month": 1, "day": 1},
//!     {"name": "Ostermontag", "holiday_type": "EasterOffset", "days_after_easter": 1},
//!     {"name": "Buß- und Bettag", "holiday_type": "FixedDateThenWeekday",
//!      "month": 11, "day": 16, "target_weekday": "Wed"}
//! ]
//! ```

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::Weekday;
use serde::Deserialize;
use tracing::warn;

use crate::error::ConfigurationError;
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::holidayrule::{HolidayRule, RuleKind};
use crate::time::recurringholiday::onetimeholiday::OneTimeHoliday;
use crate::time::recurringholiday::weekdayadjustedholiday::WeekdayAdjustedHoliday;

fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, ConfigurationError>
where
    T: for<'a> Deserialize<'a> {
    Ok(serde_json::from_value(json_value)?)
}

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    month: u32,
    day: u32
}

fn fixed_date_from_json(name: &str, json: serde_json::Value) -> Result<FixedDateHoliday, ConfigurationError> {
    let json_prop: FixedDateHolidayJsonProp = parse_json_value(json)?;
    FixedDateHoliday::new(json_prop.month, json_prop.day).ok_or_else(|| {
        ConfigurationError::invalid_rule(
            name,
            format!("no such day {:02}-{:02}", json_prop.month, json_prop.day)
        )
    })
}

#[derive(Deserialize)]
struct OneTimeHolidayJsonProp {
    year: i32,
    month: u32,
    day: u32
}

fn one_time_from_json(name: &str, json: serde_json::Value) -> Result<OneTimeHoliday, ConfigurationError> {
    let json_prop: OneTimeHolidayJsonProp = parse_json_value(json)?;
    OneTimeHoliday::new(json_prop.year, json_prop.month, json_prop.day).ok_or_else(|| {
        ConfigurationError::invalid_rule(
            name,
            format!("no such date {}-{:02}-{:02}", json_prop.year, json_prop.month, json_prop.day)
        )
    })
}

#[derive(Deserialize)]
struct EasterRelatedHolidayJsonProp {
    days_after_easter: i32
}

fn easter_related_from_json(json: serde_json::Value) -> Result<EasterRelatedHoliday, ConfigurationError> {
    let json_prop: EasterRelatedHolidayJsonProp = parse_json_value(json)?;
    Ok(EasterRelatedHoliday::new(json_prop.days_after_easter))
}

#[derive(Deserialize)]
struct TargetWeekdayJsonProp {
    target_weekday: Weekday
}

fn target_weekday_from_json(json: &serde_json::Value) -> Result<Weekday, ConfigurationError> {
    let json_prop: TargetWeekdayJsonProp = parse_json_value(json.clone())?;
    Ok(json_prop.target_weekday)
}

#[derive(Deserialize)]
enum HolidayType {
    FixedDate,
    FixedDateWithYear,
    EasterOffset,
    EasterOffsetThenWeekday,
    FixedDateThenWeekday
}

#[derive(Deserialize)]
struct HolidayRuleTypedObject {
    name: String,
    holiday_type: HolidayType
}

pub fn holiday_rule_from_json(json: serde_json::Value) -> Result<HolidayRule, ConfigurationError> {
    let typed_obj: HolidayRuleTypedObject = parse_json_value(json.clone())?;
    let name = typed_obj.name;
    if name.is_empty() {
        return Err(ConfigurationError::EmptyName);
    }

    let rule_kind = match typed_obj.holiday_type {
        HolidayType::FixedDate => RuleKind::FixedDate(fixed_date_from_json(&name, json)?),
        HolidayType::FixedDateWithYear => RuleKind::FixedDateWithYear(one_time_from_json(&name, json)?),
        HolidayType::EasterOffset => RuleKind::EasterOffset(easter_related_from_json(json)?),
        HolidayType::EasterOffsetThenWeekday => {
            let target_weekday = target_weekday_from_json(&json)?;
            RuleKind::EasterOffsetThenWeekday(WeekdayAdjustedHoliday::new(
                easter_related_from_json(json)?,
                target_weekday
            ))
        },
        HolidayType::FixedDateThenWeekday => {
            let target_weekday = target_weekday_from_json(&json)?;
            RuleKind::FixedDateThenWeekday(WeekdayAdjustedHoliday::new(
                fixed_date_from_json(&name, json)?,
                target_weekday
            ))
        }
    };

    Ok(HolidayRule::new(name, rule_kind))
}

/// Accepts a single rule object or an array of them.
pub fn load_rules_from_json(json_value: serde_json::Value) -> Result<Vec<HolidayRule>, ConfigurationError> {
    let json_vec: Vec<serde_json::Value> = if json_value.is_array() {
        parse_json_value(json_value)?
    } else {
        vec![json_value]
    };

    let mut rules: Vec<HolidayRule> = Vec::with_capacity(json_vec.len());
    let mut seen: HashSet<String> = HashSet::with_capacity(json_vec.len());
    for j in json_vec {
        let rule = holiday_rule_from_json(j).inspect_err(|err| {
            warn!(error = %err, "rejected holiday rule");
        })?;
        if !seen.insert(rule.name().to_owned()) {
            warn!(name = rule.name(), "duplicate holiday rule");
            return Err(ConfigurationError::DuplicateName(rule.name().to_owned()));
        }
        rules.push(rule);
    }
    Ok(rules)
}

pub fn load_rules_from_reader<R: Read>(reader: R) -> Result<Vec<HolidayRule>, ConfigurationError> {
    let json_value: serde_json::Value = serde_json::from_reader(reader)?;
    load_rules_from_json(json_value)
}

pub fn load_rules_from_path(file_path: impl AsRef<Path>) -> Result<Vec<HolidayRule>, ConfigurationError> {
    let file = File::open(file_path)?;
    load_rules_from_reader(BufReader::new(file))
}

pub fn rules_to_json(rules: &[HolidayRule]) -> Result<serde_json::Value, ConfigurationError> {
    Ok(serde_json::to_value(rules)?)
}
