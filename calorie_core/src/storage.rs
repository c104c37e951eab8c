//! Typed persistence gateway over a [`KeyValueStore`].
//!
//! Ledger fields live under four independent keys:
//! - `calorieLimit`: integer as decimal text
//! - `totalCalories`: integer as decimal text
//! - `meals`, `workouts`: JSON arrays of `{id, name, calories}`
//!
//! Absent keys read as defaults. Present but unparseable values are an
//! error, never a silent default.

use crate::{Entry, EntryId, EntryKind, Error, KeyValueStore, Result};
use std::str::FromStr;

pub const LIMIT_KEY: &str = "calorieLimit";
pub const TOTAL_KEY: &str = "totalCalories";
pub const MEALS_KEY: &str = "meals";
pub const WORKOUTS_KEY: &str = "workouts";

fn list_key(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Meal => MEALS_KEY,
        EntryKind::Workout => WORKOUTS_KEY,
    }
}

/// Persistence gateway for ledger fields
#[derive(Debug)]
pub struct Storage<S> {
    store: S,
}

impl<S: KeyValueStore> Storage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    // ------------------------------------------------------------------
    // Scalars
    // ------------------------------------------------------------------

    pub fn get_limit(&self, default: u32) -> Result<u32> {
        self.get_number(LIMIT_KEY, default)
    }

    pub fn set_limit(&mut self, limit: u32) -> Result<()> {
        self.store.set(LIMIT_KEY, &limit.to_string())
    }

    pub fn get_total(&self, default: i64) -> Result<i64> {
        self.get_number(TOTAL_KEY, default)
    }

    pub fn set_total(&mut self, total: i64) -> Result<()> {
        self.store.set(TOTAL_KEY, &total.to_string())
    }

    fn get_number<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.store.get(key)? {
            None => Ok(default),
            Some(raw) => raw.trim().parse::<T>().map_err(|e| Error::CorruptValue {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    // ------------------------------------------------------------------
    // Entry lists
    // ------------------------------------------------------------------

    /// Persisted entries of one kind, empty if the key is absent
    pub fn entries(&self, kind: EntryKind) -> Result<Vec<Entry>> {
        let key = list_key(kind);
        match self.store.get(key)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|e| Error::CorruptValue {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Overwrite the persisted list of one kind
    pub fn set_entries(&mut self, kind: EntryKind, entries: &[Entry]) -> Result<()> {
        let json = serde_json::to_string(entries)?;
        self.store.set(list_key(kind), &json)
    }

    /// Append one entry to the persisted list
    pub fn save_entry(&mut self, kind: EntryKind, entry: &Entry) -> Result<()> {
        let mut entries = self.entries(kind)?;
        entries.push(entry.clone());
        self.set_entries(kind, &entries)
    }

    /// Drop every persisted entry with `id` and rewrite the list
    pub fn remove_entry(&mut self, kind: EntryKind, id: &EntryId) -> Result<()> {
        let mut entries = self.entries(kind)?;
        entries.retain(|e| &e.id != id);
        self.set_entries(kind, &entries)
    }

    pub fn meals(&self) -> Result<Vec<Entry>> {
        self.entries(EntryKind::Meal)
    }

    pub fn save_meal(&mut self, meal: &Entry) -> Result<()> {
        self.save_entry(EntryKind::Meal, meal)
    }

    pub fn remove_meal(&mut self, id: &EntryId) -> Result<()> {
        self.remove_entry(EntryKind::Meal, id)
    }

    pub fn workouts(&self) -> Result<Vec<Entry>> {
        self.entries(EntryKind::Workout)
    }

    pub fn save_workout(&mut self, workout: &Entry) -> Result<()> {
        self.save_entry(EntryKind::Workout, workout)
    }

    pub fn remove_workout(&mut self, id: &EntryId) -> Result<()> {
        self.remove_entry(EntryKind::Workout, id)
    }

    /// Remove the total and both lists. The limit key is kept.
    pub fn clear_all(&mut self) -> Result<()> {
        self.store.remove(TOTAL_KEY)?;
        self.store.remove(MEALS_KEY)?;
        self.store.remove(WORKOUTS_KEY)?;
        tracing::debug!("Cleared persisted total, meals and workouts");
        Ok(())
    }
}
