//! Core domain types for the calorie tracker.
//!
//! This module defines:
//! - Entries (meals and workouts) and their identifiers
//! - The derived calorie summary handed to presentation layers

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Daily limit used when nothing has been configured or persisted
pub const DEFAULT_CALORIE_LIMIT: u32 = 2000;

// ============================================================================
// Entry Types
// ============================================================================

/// Role of a logged entry
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Adds its calories to the running total
    Meal,
    /// Subtracts its calories from the running total
    Workout,
}

impl EntryKind {
    /// Signed contribution of `calories` to the running total
    pub fn signed(self, calories: u32) -> i64 {
        match self {
            EntryKind::Meal => i64::from(calories),
            EntryKind::Workout => -i64::from(calories),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Meal => "meal",
            EntryKind::Workout => "workout",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Opaque entry identifier
///
/// Freshly created ids are UUIDv4 in simple (hex) form. Any string read
/// back from storage is accepted as-is.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named, calorie-valued logged item
///
/// Entries are immutable once created; the kind is implied by which list
/// holds the entry.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    pub calories: u32,
}

impl Entry {
    /// Create an entry with a freshly generated id
    pub fn new(name: impl Into<String>, calories: u32) -> Self {
        Self {
            id: EntryId::generate(),
            name: name.into(),
            calories,
        }
    }
}

/// Validated user input, ready to become an [`Entry`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewEntry {
    pub name: String,
    pub calories: u32,
}

impl NewEntry {
    pub fn into_entry(self) -> Entry {
        Entry::new(self.name, self.calories)
    }
}

// ============================================================================
// Summary Type
// ============================================================================

/// Derived totals re-read by the presentation layer after each mutation
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct CalorieSummary {
    pub calorie_limit: u32,
    pub total_calories: i64,
    pub consumed_calories: i64,
    pub burned_calories: i64,
    pub remaining_calories: i64,
    /// `None` when the limit is zero
    pub progress_fraction: Option<f64>,
    pub over_limit: bool,
}
