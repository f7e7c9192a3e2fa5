//! Which catalogue holidays each state does not observe.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use tracing::trace;

use crate::error::HolidayError;
use super::holidaycatalogue::{
    all_names,
    ALLERHEILIGEN,
    BUSS_UND_BETTAG,
    FRONLEICHNAM,
    HEILIGE_DREI_KOENIGE,
    MARIAE_HIMMELFAHRT,
    REFORMATIONSTAG,
    REFORMATIONSTAG_500
};
use super::statecode::StateCode;

/// Exclusions as written in state law, before the anniversary rule is applied.
fn base_exclusions(state: StateCode) -> &'static [&'static str] {
    match state {
        StateCode::BW => &[MARIAE_HIMMELFAHRT, REFORMATIONSTAG, BUSS_UND_BETTAG],
        StateCode::BY => &[REFORMATIONSTAG, BUSS_UND_BETTAG],
        StateCode::BE => &[
            HEILIGE_DREI_KOENIGE, FRONLEICHNAM, MARIAE_HIMMELFAHRT,
            REFORMATIONSTAG, ALLERHEILIGEN, BUSS_UND_BETTAG
        ],
        StateCode::BB => &[
            HEILIGE_DREI_KOENIGE, FRONLEICHNAM, MARIAE_HIMMELFAHRT,
            ALLERHEILIGEN, BUSS_UND_BETTAG
        ],
        StateCode::HB => &[
            HEILIGE_DREI_KOENIGE, FRONLEICHNAM, MARIAE_HIMMELFAHRT,
            REFORMATIONSTAG, ALLERHEILIGEN, BUSS_UND_BETTAG
        ],
        StateCode::HH => &[
            HEILIGE_DREI_KOENIGE, FRONLEICHNAM, MARIAE_HIMMELFAHRT,
            REFORMATIONSTAG, ALLERHEILIGEN, BUSS_UND_BETTAG
        ],
        StateCode::HE => &[
            HEILIGE_DREI_KOENIGE, MARIAE_HIMMELFAHRT, REFORMATIONSTAG,
            ALLERHEILIGEN, BUSS_UND_BETTAG
        ],
        StateCode::MV => &[
            HEILIGE_DREI_KOENIGE, FRONLEICHNAM, MARIAE_HIMMELFAHRT,
            ALLERHEILIGEN, BUSS_UND_BETTAG
        ],
        StateCode::NI => &[
            HEILIGE_DREI_KOENIGE, FRONLEICHNAM, MARIAE_HIMMELFAHRT,
            REFORMATIONSTAG, ALLERHEILIGEN, BUSS_UND_BETTAG
        ],
        StateCode::NW => &[
            HEILIGE_DREI_KOENIGE, MARIAE_HIMMELFAHRT, REFORMATIONSTAG,
            BUSS_UND_BETTAG
        ],
        StateCode::RP => &[
            HEILIGE_DREI_KOENIGE, MARIAE_HIMMELFAHRT, REFORMATIONSTAG,
            BUSS_UND_BETTAG
        ],
        StateCode::SL => &[HEILIGE_DREI_KOENIGE, REFORMATIONSTAG, BUSS_UND_BETTAG],
        StateCode::SN => &[
            HEILIGE_DREI_KOENIGE, FRONLEICHNAM, MARIAE_HIMMELFAHRT,
            ALLERHEILIGEN
        ],
        StateCode::ST => &[
            FRONLEICHNAM, MARIAE_HIMMELFAHRT, ALLERHEILIGEN, BUSS_UND_BETTAG
        ],
        StateCode::SH => &[
            HEILIGE_DREI_KOENIGE, FRONLEICHNAM, MARIAE_HIMMELFAHRT,
            REFORMATIONSTAG, ALLERHEILIGEN, BUSS_UND_BETTAG
        ],
        StateCode::TH => &[
            HEILIGE_DREI_KOENIGE, FRONLEICHNAM, MARIAE_HIMMELFAHRT,
            ALLERHEILIGEN, BUSS_UND_BETTAG
        ]
    }
}

fn derive_exclusions(state: StateCode) -> BTreeSet<&'static str> {
    let mut excluded: BTreeSet<&'static str> = base_exclusions(state).iter().copied().collect();
    // States observing Reformationstag every year must not get the 2017 anniversary twice.
    if !excluded.contains(REFORMATIONSTAG) {
        excluded.insert(REFORMATIONSTAG_500);
    }
    trace!(state = %state, excluded = excluded.len(), "derived holiday exclusions");
    excluded
}

static EXCLUSION_MAP: LazyLock<[BTreeSet<&'static str>; 16]> = LazyLock::new(|| {
    StateCode::ALL.map(derive_exclusions)
});

pub fn excluded_for_state(state: StateCode) -> &'static BTreeSet<&'static str> {
    &EXCLUSION_MAP[state.index()]
}

pub fn applicable_for_state(state: StateCode) -> BTreeSet<&'static str> {
    all_names()
        .difference(excluded_for_state(state))
        .copied()
        .collect()
}

/// Fails with `UnknownStateCode` for anything but the sixteen codes.
pub fn excluded_for(state_code: &str) -> Result<&'static BTreeSet<&'static str>, HolidayError> {
    StateCode::from_code(state_code).map(excluded_for_state)
}

pub fn applicable_for(state_code: &str) -> Result<BTreeSet<&'static str>, HolidayError> {
    StateCode::from_code(state_code).map(applicable_for_state)
}
