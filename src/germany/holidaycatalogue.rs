//! Every public holiday observed somewhere in Germany, independent of state.
//!
//! Easter Sunday and Whit Sunday always fall on a Sunday and are left out.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use chrono::Weekday;

use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::holidayrule::{HolidayRule, RuleKind};
use crate::time::recurringholiday::onetimeholiday::OneTimeHoliday;
use crate::time::recurringholiday::weekdayadjustedholiday::WeekdayAdjustedHoliday;

pub const KARFREITAG: &str = "Karfreitag";
pub const OSTERMONTAG: &str = "Ostermontag";
pub const CHRISTI_HIMMELFAHRT: &str = "Christi Himmelfahrt";
pub const PFINGSTMONTAG: &str = "Pfingstmontag";
pub const FRONLEICHNAM: &str = "Fronleichnam";
pub const NEUJAHRSTAG: &str = "Neujahrstag";
pub const TAG_DER_ARBEIT: &str = "Tag der Arbeit";
pub const ERSTER_WEIHNACHTSTAG: &str = "Erster Weihnachtstag";
pub const ZWEITER_WEIHNACHTSTAG: &str = "Zweiter Weihnachtstag";
pub const HEILIGE_DREI_KOENIGE: &str = "Heilige Drei Könige";
pub const MARIAE_HIMMELFAHRT: &str = "Mariä Himmelfahrt";
pub const TAG_DER_DEUTSCHEN_EINHEIT: &str = "Tag der Deutschen Einheit";
pub const REFORMATIONSTAG: &str = "Reformationstag";
pub const REFORMATIONSTAG_500: &str = "500. Reformationstag";
pub const ALLERHEILIGEN: &str = "Allerheiligen";
pub const BUSS_UND_BETTAG: &str = "Buß- und Bettag";

const fn easter(days_after_easter: i32) -> RuleKind {
    RuleKind::EasterOffset(EasterRelatedHoliday { days_after_easter })
}

const fn fixed(month: u32, day: u32) -> RuleKind {
    RuleKind::FixedDate(FixedDateHoliday { month, day })
}

static CATALOGUE: LazyLock<Vec<HolidayRule>> = LazyLock::new(|| {
    vec![
        HolidayRule::new(KARFREITAG, easter(-2)),
        HolidayRule::new(OSTERMONTAG, easter(1)),
        HolidayRule::new(CHRISTI_HIMMELFAHRT, easter(39)),
        HolidayRule::new(PFINGSTMONTAG, easter(50)),
        HolidayRule::new(FRONLEICHNAM, easter(60)),
        HolidayRule::new(NEUJAHRSTAG, fixed(1, 1)),
        HolidayRule::new(TAG_DER_ARBEIT, fixed(5, 1)),
        HolidayRule::new(ERSTER_WEIHNACHTSTAG, fixed(12, 25)),
        HolidayRule::new(ZWEITER_WEIHNACHTSTAG, fixed(12, 26)),
        HolidayRule::new(HEILIGE_DREI_KOENIGE, fixed(1, 6)),
        HolidayRule::new(MARIAE_HIMMELFAHRT, fixed(8, 15)),
        HolidayRule::new(TAG_DER_DEUTSCHEN_EINHEIT, fixed(10, 3)),
        HolidayRule::new(REFORMATIONSTAG, fixed(10, 31)),
        HolidayRule::new(
            REFORMATIONSTAG_500,
            RuleKind::FixedDateWithYear(OneTimeHoliday { year: 2017, month: 10, day: 31 })
        ),
        HolidayRule::new(ALLERHEILIGEN, fixed(11, 1)),
        // Wednesday before November 23, i.e. 11 days before the 4th Advent Sunday
        HolidayRule::new(
            BUSS_UND_BETTAG,
            RuleKind::FixedDateThenWeekday(WeekdayAdjustedHoliday {
                anchor: FixedDateHoliday { month: 11, day: 16 },
                target_weekday: Weekday::Wed
            })
        ),
    ]
});

static ALL_NAMES: LazyLock<BTreeSet<&'static str>> = LazyLock::new(|| {
    CATALOGUE.iter().map(|rule| rule.name()).collect()
});

/// All catalogue rules in declaration order.
pub fn all_rules() -> &'static [HolidayRule] {
    &CATALOGUE
}

pub fn all_names() -> &'static BTreeSet<&'static str> {
    &ALL_NAMES
}

pub fn rule_for(name: &str) -> Option<&'static HolidayRule> {
    CATALOGUE.iter().find(|rule| rule.name() == name)
}
