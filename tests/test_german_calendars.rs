//! Integration tests for the per-state holiday calendars.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use feiertage::germany::exclusionmap::{applicable_for, excluded_for};
use feiertage::germany::holidaycatalogue::{
    all_names,
    BUSS_UND_BETTAG,
    REFORMATIONSTAG,
    REFORMATIONSTAG_500
};
use feiertage::{
    get_calendar,
    get_calendar_by_name_or_code,
    HolidayCalendar,
    HolidayError,
    ResolvedHoliday,
    StateCode
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn names_in_year(state: &str, year: i32) -> BTreeSet<String> {
    get_calendar(state)
        .unwrap()
        .holidays_in_year(year)
        .into_iter()
        .map(|h| h.name().to_owned())
        .collect()
}

#[test]
fn north_rhine_westphalia_2015() {
    let holidays = get_calendar("NW").unwrap().holidays_in_year(2015);
    assert!(holidays.contains(&ResolvedHoliday::new("Ostermontag", date(2015, 4, 6))));
    assert!(holidays.contains(&ResolvedHoliday::new("Erster Weihnachtstag", date(2015, 12, 25))));
    assert!(holidays.iter().all(|h| h.name() != "Heilige Drei Könige"));
    assert!(holidays.iter().all(|h| h.name() != REFORMATIONSTAG));

    let expected = vec![
        ResolvedHoliday::new("Neujahrstag", date(2015, 1, 1)),
        ResolvedHoliday::new("Karfreitag", date(2015, 4, 3)),
        ResolvedHoliday::new("Ostermontag", date(2015, 4, 6)),
        ResolvedHoliday::new("Tag der Arbeit", date(2015, 5, 1)),
        ResolvedHoliday::new("Christi Himmelfahrt", date(2015, 5, 14)),
        ResolvedHoliday::new("Pfingstmontag", date(2015, 5, 25)),
        ResolvedHoliday::new("Fronleichnam", date(2015, 6, 4)),
        ResolvedHoliday::new("Tag der Deutschen Einheit", date(2015, 10, 3)),
        ResolvedHoliday::new("Allerheiligen", date(2015, 11, 1)),
        ResolvedHoliday::new("Erster Weihnachtstag", date(2015, 12, 25)),
        ResolvedHoliday::new("Zweiter Weihnachtstag", date(2015, 12, 26)),
    ];
    assert_eq!(holidays.into_iter().collect::<Vec<_>>(), expected);
}

#[test]
fn saxony_2017_has_a_single_reformation_day() {
    let holidays = get_calendar("SN").unwrap().holidays_in_year(2017);
    assert!(holidays.contains(&ResolvedHoliday::new(REFORMATIONSTAG, date(2017, 10, 31))));
    assert!(holidays.iter().all(|h| h.name() != REFORMATIONSTAG_500));
    assert!(holidays.contains(&ResolvedHoliday::new(BUSS_UND_BETTAG, date(2017, 11, 22))));
}

#[test]
fn bavaria_2017_gets_the_anniversary() {
    let holidays = get_calendar("BY").unwrap().holidays_in_year(2017);
    assert!(holidays.contains(&ResolvedHoliday::new(REFORMATIONSTAG_500, date(2017, 10, 31))));
    assert!(holidays.iter().all(|h| h.name() != REFORMATIONSTAG));
}

#[test]
fn anniversary_appears_nowhere_else() {
    for state in StateCode::ALL {
        for year in 1990..=2030 {
            let names = names_in_year(state.code(), year);
            if names.contains(REFORMATIONSTAG_500) {
                assert_eq!(year, 2017, "{state}");
            }
        }
    }
}

#[test]
fn every_state_observes_exactly_one_reformation_day_in_2017() {
    for state in StateCode::ALL {
        let names = names_in_year(state.code(), 2017);
        let count = [REFORMATIONSTAG, REFORMATIONSTAG_500]
            .iter()
            .filter(|name| names.contains(**name))
            .count();
        assert_eq!(count, 1, "{state}");
    }
}

#[test]
fn partition_for_every_code() {
    for state in StateCode::ALL {
        let applicable = applicable_for(state.code()).unwrap();
        let excluded = excluded_for(state.code()).unwrap();
        assert!(applicable.is_disjoint(excluded));
        let union: BTreeSet<&str> = applicable.union(excluded).copied().collect();
        assert_eq!(&union, all_names());
    }
}

#[test]
fn unknown_state_code() {
    let err = get_calendar("XX").unwrap_err();
    assert!(matches!(err, HolidayError::UnknownStateCode { ref input, .. } if input == "XX"));
}

#[test]
fn idempotent_lookup() {
    for state in StateCode::ALL {
        let first = get_calendar(state.code()).unwrap().holidays_in_year(2019);
        let second = get_calendar(state.code()).unwrap().holidays_in_year(2019);
        assert_eq!(first, second);
    }
}

#[test]
fn full_state_names_are_normalised() {
    let by_name = get_calendar_by_name_or_code("Nordrhein-Westfalen").unwrap();
    assert_eq!(by_name.state(), Some(StateCode::NW));
    assert_eq!(by_name.holidays_in_year(2015), get_calendar("NW").unwrap().holidays_in_year(2015));
}

#[test]
fn range_is_sorted_and_inclusive() {
    let calendar = get_calendar("BW").unwrap();
    let holidays = calendar.holidays_in_range(date(2015, 12, 26), date(2016, 1, 6));
    assert_eq!(holidays, vec![
        ResolvedHoliday::new("Zweiter Weihnachtstag", date(2015, 12, 26)),
        ResolvedHoliday::new("Neujahrstag", date(2016, 1, 1)),
        ResolvedHoliday::new("Heilige Drei Könige", date(2016, 1, 6)),
    ]);

    let inner = calendar.holidays_in_range(date(2015, 12, 27), date(2016, 1, 5));
    assert_eq!(inner, vec![ResolvedHoliday::new("Neujahrstag", date(2016, 1, 1))]);
}

#[test]
fn range_over_a_full_year_matches_year_query() {
    let calendar = get_calendar("TH").unwrap();
    let from_range = calendar.holidays_in_range(date(2020, 1, 1), date(2020, 12, 31));
    let from_year: Vec<ResolvedHoliday> = calendar.holidays_in_year(2020).into_iter().collect();
    assert_eq!(from_range, from_year);
}

#[test]
fn is_holiday_follows_state_rules() {
    let bavaria = get_calendar("BY").unwrap();
    let berlin = get_calendar("BE").unwrap();
    let assumption = date(2015, 8, 15);
    assert!(bavaria.is_holiday(assumption));
    assert!(!berlin.is_holiday(assumption));
    assert_eq!(bavaria.holiday_names_on(assumption), vec!["Mariä Himmelfahrt"]);
    assert!(!bavaria.is_holiday(date(2015, 8, 14)));
}
