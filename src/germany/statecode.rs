use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HolidayError, LookupContext};

/// The sixteen German federal states, keyed by their two-letter code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StateCode {
    BW,
    BY,
    BE,
    BB,
    HB,
    HH,
    HE,
    MV,
    NI,
    NW,
    RP,
    SL,
    SN,
    ST,
    SH,
    TH
}

impl StateCode {
    pub const ALL: [StateCode; 16] = [
        StateCode::BW, StateCode::BY, StateCode::BE, StateCode::BB,
        StateCode::HB, StateCode::HH, StateCode::HE, StateCode::MV,
        StateCode::NI, StateCode::NW, StateCode::RP, StateCode::SL,
        StateCode::SN, StateCode::ST, StateCode::SH, StateCode::TH
    ];

    pub const fn code(&self) -> &'static str {
        match self {
            StateCode::BW => "BW",
            StateCode::BY => "BY",
            StateCode::BE => "BE",
            StateCode::BB => "BB",
            StateCode::HB => "HB",
            StateCode::HH => "HH",
            StateCode::HE => "HE",
            StateCode::MV => "MV",
            StateCode::NI => "NI",
            StateCode::NW => "NW",
            StateCode::RP => "RP",
            StateCode::SL => "SL",
            StateCode::SN => "SN",
            StateCode::ST => "ST",
            StateCode::SH => "SH",
            StateCode::TH => "TH"
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            StateCode::BW => "Baden-Württemberg",
            StateCode::BY => "Bayern",
            StateCode::BE => "Berlin",
            StateCode::BB => "Brandenburg",
            StateCode::HB => "Bremen",
            StateCode::HH => "Hamburg",
            StateCode::HE => "Hessen",
            StateCode::MV => "Mecklenburg-Vorpommern",
            StateCode::NI => "Niedersachsen",
            StateCode::NW => "Nordrhein-Westfalen",
            StateCode::RP => "Rheinland-Pfalz",
            StateCode::SL => "Saarland",
            StateCode::SN => "Sachsen",
            StateCode::ST => "Sachsen-Anhalt",
            StateCode::SH => "Schleswig-Holstein",
            StateCode::TH => "Thüringen"
        }
    }

    /// Position in [`StateCode::ALL`].
    pub(crate) const fn index(&self) -> usize {
        *self as usize
    }

    /// Exact, case-sensitive match on the two-letter code.
    pub fn from_code(code: &str) -> Result<StateCode, HolidayError> {
        StateCode::ALL
            .into_iter()
            .find(|state| state.code() == code)
            .ok_or_else(|| HolidayError::unknown_code(code))
    }

    /// Exact match on the German state name, e.g. `"Nordrhein-Westfalen"`.
    pub fn from_name(name: &str) -> Result<StateCode, HolidayError> {
        StateCode::ALL
            .into_iter()
            .find(|state| state.name() == name)
            .ok_or_else(|| HolidayError::UnknownStateCode {
                input: name.to_owned(),
                lookup: LookupContext::Name
            })
    }

    /// Accepts either a state code or a full state name.
    pub fn normalize(input: &str) -> Result<StateCode, HolidayError> {
        StateCode::from_code(input)
            .or_else(|_| StateCode::from_name(input))
            .map_err(|_| HolidayError::UnknownStateCode {
                input: input.to_owned(),
                lookup: LookupContext::CodeOrName
            })
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for StateCode {
    type Err = HolidayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StateCode::from_code(s)
    }
}
