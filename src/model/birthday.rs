use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::{AbookError, AbookResult};

const FORMAT: &str = "%d.%m.%Y";

/// A contact's birthday, parsed from `DD.MM.YYYY` textual input.
///
/// Only real calendar dates are representable; `29.02.2021` and friends
/// are rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(raw: &str) -> AbookResult<Self> {
        NaiveDate::parse_from_str(raw.trim(), FORMAT)
            .map(Self)
            .map_err(|_| AbookError::InvalidBirthday {
                input: raw.trim().to_string(),
            })
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

// Round-trips as the DD.MM.YYYY string it was entered as.
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0.format(FORMAT))
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}
