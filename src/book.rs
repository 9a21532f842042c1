use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::{AbookError, AbookResult};
use crate::model::Record;

/// The address book: every contact record, keyed by exact name.
///
/// The book is the sole owner of its records; callers mutate a record only
/// through the exclusive borrow handed out by `find_mut`, so name-key
/// uniqueness and the per-record phone invariants always hold.
///
/// Serializes to a JSON object keyed by contact name, each value carrying a
/// `phones` array of canonical strings and an optional `birthday` in
/// `DD.MM.YYYY`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new record. Fails with `DuplicateContact` if the name key
    /// is already taken.
    pub fn add_record(&mut self, record: Record) -> AbookResult<()> {
        if self.records.contains_key(&record.name) {
            return Err(AbookError::DuplicateContact {
                name: record.name.clone(),
            });
        }
        debug!(name = %record.name, "adding contact");
        self.records.insert(record.name.clone(), record);
        Ok(())
    }

    /// Exact-match lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Exact-match lookup yielding an exclusive borrow for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Removes a contact. Fails with `ContactNotFound` if the key is absent.
    pub fn delete_record(&mut self, name: &str) -> AbookResult<Record> {
        debug!(name, "deleting contact");
        self.records
            .remove(name)
            .ok_or_else(|| AbookError::ContactNotFound {
                name: name.to_string(),
            })
    }

    /// A cloned snapshot of every record, in name order. Later mutations of
    /// the book are not reflected in it.
    pub fn all_records(&self) -> Vec<Record> {
        self.records.values().cloned().collect()
    }

    /// Case-insensitive substring search over contact names and canonical
    /// phone values. No match yields an empty result, never an error.
    pub fn search(&self, pattern: &str) -> Vec<&Record> {
        let lower = pattern.to_lowercase();
        self.records
            .values()
            .filter(|r| {
                r.name.to_lowercase().contains(&lower)
                    || r.phones.iter().any(|p| p.as_str().contains(&lower))
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// Records carry their name as the map key on disk; backfill it after
// deserializing so every `Record` is self-describing in memory.
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut records = BTreeMap::<String, Record>::deserialize(deserializer)?;
        for (name, record) in records.iter_mut() {
            record.name = name.clone();
        }
        Ok(Self { records })
    }
}
