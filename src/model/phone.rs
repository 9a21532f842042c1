use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::{AbookError, AbookResult};

/// Characters that may separate digit groups in raw input. They carry no
/// meaning and are stripped before validation.
const SEPARATORS: [char; 5] = [' ', '-', '.', '(', ')'];

/// A phone number in canonical form: `+` followed by 12 to 15 digits.
///
/// All equal-meaning raw inputs reduce to the same canonical value, so
/// two `Phone`s compare equal exactly when a human would consider the
/// numbers the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Normalizes a raw phone string into its canonical form.
    ///
    /// Accepted grammar, after trimming and stripping separators
    /// (spaces, hyphens, dots, parentheses):
    ///
    /// - `+` followed by 10 to 15 digits is kept as-is;
    /// - a bare 12-digit number starting with `380` gets a `+` prefixed;
    /// - a bare 10-digit local number is prefixed with `+38`, the default
    ///   country code.
    ///
    /// Anything else fails with `InvalidPhone`. Normalization is
    /// idempotent: a canonical value parses back to itself unchanged.
    pub fn parse(raw: &str) -> AbookResult<Self> {
        let invalid = || AbookError::InvalidPhone {
            input: raw.trim().to_string(),
        };

        let mut chars = raw.trim().chars().filter(|c| !SEPARATORS.contains(c));
        let mut digits = String::new();
        let mut has_plus = false;

        match chars.next() {
            Some('+') => has_plus = true,
            Some(c) if c.is_ascii_digit() => digits.push(c),
            _ => return Err(invalid()),
        }
        for c in chars {
            if !c.is_ascii_digit() {
                return Err(invalid());
            }
            digits.push(c);
        }

        let canonical = if has_plus {
            if !(10..=15).contains(&digits.len()) {
                return Err(invalid());
            }
            format!("+{digits}")
        } else if digits.len() == 12 && digits.starts_with("380") {
            format!("+{digits}")
        } else if digits.len() == 10 {
            format!("+38{digits}")
        } else {
            return Err(invalid());
        };

        Ok(Self(canonical))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Serialized as the canonical string.
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Deserialization re-validates, so malformed stored values are rejected
// instead of passed through.
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::parse(&s).map_err(serde::de::Error::custom)
    }
}
