use serde::{Deserialize, Serialize};

use super::{Birthday, Phone};
use crate::error::{AbookError, AbookResult};

/// A single contact: a name, its phone numbers in insertion order, and an
/// optional birthday.
///
/// The name is the record's identity and doubles as the address book's map
/// key, so it is not serialized inside the value; the book backfills it
/// when loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(skip)]
    pub name: String,
    #[serde(default)]
    pub phones: Vec<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

impl Record {
    pub fn create(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Normalizes and appends a phone number. A value already present on
    /// this record is rejected with `DuplicatePhone`.
    pub fn add_phone(&mut self, raw: &str) -> AbookResult<Phone> {
        let phone = Phone::parse(raw)?;
        if self.phones.contains(&phone) {
            return Err(AbookError::DuplicatePhone {
                phone: phone.into_inner(),
            });
        }
        self.phones.push(phone.clone());
        Ok(phone)
    }

    /// Replaces a stored phone in place, preserving its position.
    ///
    /// Fails with `PhoneNotFound` if the old value is absent, and with
    /// `DuplicatePhone` if the new value already exists elsewhere on the
    /// record. Replacing a phone with itself is a no-op.
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> AbookResult<Phone> {
        let old = Phone::parse(old_raw)?;
        let new = Phone::parse(new_raw)?;

        let pos = self
            .phones
            .iter()
            .position(|p| *p == old)
            .ok_or_else(|| AbookError::PhoneNotFound {
                phone: old.into_inner(),
            })?;

        if new != self.phones[pos] && self.phones.contains(&new) {
            return Err(AbookError::DuplicatePhone {
                phone: new.into_inner(),
            });
        }

        self.phones[pos] = new.clone();
        Ok(new)
    }

    /// Normalizes the raw value and looks it up. Absence is not an error;
    /// only an unparseable input is.
    pub fn find_phone(&self, raw: &str) -> AbookResult<Option<&Phone>> {
        let phone = Phone::parse(raw)?;
        Ok(self.phones.iter().find(|p| **p == phone))
    }

    /// Removes a stored phone. Fails with `PhoneNotFound` if absent.
    pub fn remove_phone(&mut self, raw: &str) -> AbookResult<Phone> {
        let phone = Phone::parse(raw)?;
        let pos = self
            .phones
            .iter()
            .position(|p| *p == phone)
            .ok_or_else(|| AbookError::PhoneNotFound {
                phone: phone.into_inner(),
            })?;
        Ok(self.phones.remove(pos))
    }

    /// Parses and stores the birthday, overwriting any previous one.
    pub fn set_birthday(&mut self, raw: &str) -> AbookResult<Birthday> {
        let birthday = Birthday::parse(raw)?;
        self.birthday = Some(birthday);
        Ok(birthday)
    }
}
