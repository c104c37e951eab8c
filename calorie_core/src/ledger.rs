//! The calorie ledger aggregate.
//!
//! The ledger owns the daily limit, the running total and the meal and
//! workout lists. It is the only mutator of that state and writes every
//! change through to its [`Storage`] before committing it in memory, so a
//! failed write leaves the ledger exactly as it was.
//!
//! The running total is cached rather than recomputed. After every
//! operation `total == sum(meals) - sum(workouts)`.

use crate::{CalorieSummary, Entry, EntryId, EntryKind, KeyValueStore, Result, Storage};

/// Calorie-tracking aggregate backed by a persistence gateway
#[derive(Debug)]
pub struct Ledger<S> {
    storage: Storage<S>,
    calorie_limit: u32,
    total_calories: i64,
    meals: Vec<Entry>,
    workouts: Vec<Entry>,
}

fn net_total(meals: &[Entry], workouts: &[Entry]) -> i64 {
    sum_calories(meals) - sum_calories(workouts)
}

fn sum_calories(entries: &[Entry]) -> i64 {
    entries.iter().map(|e| i64::from(e.calories)).sum()
}

impl<S: KeyValueStore> Ledger<S> {
    /// Hydrate a ledger from storage
    ///
    /// Absent keys fall back to `default_limit`, a zero total and empty
    /// lists. Any read failure (store unavailable, corrupt value) is
    /// returned to the caller.
    pub fn open(storage: Storage<S>, default_limit: u32) -> Result<Self> {
        let calorie_limit = storage.get_limit(default_limit)?;
        let persisted_total = storage.get_total(0)?;
        let meals = storage.meals()?;
        let workouts = storage.workouts()?;

        let mut ledger = Self {
            storage,
            calorie_limit,
            total_calories: persisted_total,
            meals,
            workouts,
        };
        ledger.reconcile_total()?;

        tracing::info!(
            "Opened ledger: limit {}, total {}, {} meals, {} workouts",
            ledger.calorie_limit,
            ledger.total_calories,
            ledger.meals.len(),
            ledger.workouts.len()
        );
        Ok(ledger)
    }

    /// Hydrate a ledger, replacing every unreadable key with its default
    ///
    /// Each failure is logged as a warning. Nothing is written back until
    /// the next mutation, apart from a corrected total.
    pub fn open_or_default(storage: Storage<S>, default_limit: u32) -> Self {
        let calorie_limit = or_default(storage.get_limit(default_limit), default_limit, "limit");
        let persisted_total = or_default(storage.get_total(0), 0, "total");
        let meals = or_default(storage.meals(), Vec::new(), "meals");
        let workouts = or_default(storage.workouts(), Vec::new(), "workouts");

        let mut ledger = Self {
            storage,
            calorie_limit,
            total_calories: persisted_total,
            meals,
            workouts,
        };
        if let Err(e) = ledger.reconcile_total() {
            tracing::warn!("Unable to persist corrected total: {}", e);
        }
        ledger
    }

    /// Make the cached total agree with the lists, which are authoritative.
    ///
    /// The total and the lists live under separate keys, so an interrupted
    /// write can leave them out of step.
    fn reconcile_total(&mut self) -> Result<()> {
        let expected = net_total(&self.meals, &self.workouts);
        if self.total_calories != expected {
            tracing::warn!(
                "Persisted total {} disagrees with entries ({}), correcting",
                self.total_calories,
                expected
            );
            self.total_calories = expected;
            self.storage.set_total(expected)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Log a meal and add its calories to the total
    pub fn add_meal(&mut self, meal: Entry) -> Result<&Entry> {
        self.add(EntryKind::Meal, meal)
    }

    /// Log a workout and subtract its calories from the total
    pub fn add_workout(&mut self, workout: Entry) -> Result<&Entry> {
        self.add(EntryKind::Workout, workout)
    }

    /// Remove a meal by id
    ///
    /// Returns the removed entry, or `None` (with no effect at all) if no
    /// meal has that id.
    pub fn remove_meal(&mut self, id: &EntryId) -> Result<Option<Entry>> {
        self.remove(EntryKind::Meal, id)
    }

    /// Remove a workout by id, see [`Ledger::remove_meal`]
    pub fn remove_workout(&mut self, id: &EntryId) -> Result<Option<Entry>> {
        self.remove(EntryKind::Workout, id)
    }

    /// Append an entry of `kind` and adjust the total by its signed calories
    ///
    /// [`Ledger::add_meal`] and [`Ledger::add_workout`] are shorthands for
    /// this. On error nothing is committed in memory and the persisted
    /// list is put back as it was.
    pub fn add(&mut self, kind: EntryKind, entry: Entry) -> Result<&Entry> {
        let total = self.total_calories + kind.signed(entry.calories);
        let mut entries = self.entries(kind).to_vec();
        entries.push(entry);

        self.write_list_and_total(kind, &entries, total)?;

        tracing::debug!("Added {} {:?}, total now {}", kind, entries.last(), total);
        self.total_calories = total;
        let list = self.list_mut(kind);
        *list = entries;
        let index = list.len() - 1;
        Ok(&list[index])
    }

    /// Remove the entry of `kind` with `id`, undoing its effect on the total
    ///
    /// Returns `Ok(None)` with no effect if the id is unknown. Failure
    /// handling matches [`Ledger::add`].
    pub fn remove(&mut self, kind: EntryKind, id: &EntryId) -> Result<Option<Entry>> {
        let Some(index) = self.entries(kind).iter().position(|e| &e.id == id) else {
            tracing::debug!("No {} with id {}, nothing removed", kind, id);
            return Ok(None);
        };

        let mut entries = self.entries(kind).to_vec();
        let removed = entries.remove(index);
        let total = self.total_calories - kind.signed(removed.calories);

        self.write_list_and_total(kind, &entries, total)?;

        tracing::debug!("Removed {} {}, total now {}", kind, id, total);
        self.total_calories = total;
        *self.list_mut(kind) = entries;
        Ok(Some(removed))
    }

    /// Clear both lists and zero the total. The limit is untouched.
    pub fn reset(&mut self) -> Result<()> {
        if let Err(e) = self.storage.clear_all() {
            // Some keys may already be gone; write the current state back
            self.restore_persisted();
            return Err(e);
        }
        self.meals.clear();
        self.workouts.clear();
        self.total_calories = 0;
        tracing::info!("Ledger reset");
        Ok(())
    }

    /// Replace the daily limit. Entries and total are untouched.
    pub fn set_limit(&mut self, limit: u32) -> Result<()> {
        self.storage.set_limit(limit)?;
        self.calorie_limit = limit;
        tracing::debug!("Calorie limit set to {}", limit);
        Ok(())
    }

    /// Persist a new list and total, list first.
    ///
    /// If the total cannot be written the previous list is restored, so a
    /// failed mutation is not durable.
    fn write_list_and_total(
        &mut self,
        kind: EntryKind,
        entries: &[Entry],
        total: i64,
    ) -> Result<()> {
        self.storage.set_entries(kind, entries)?;
        if let Err(e) = self.storage.set_total(total) {
            tracing::warn!("Failed to write total, restoring previous {} list", kind);
            let previous = match kind {
                EntryKind::Meal => &self.meals,
                EntryKind::Workout => &self.workouts,
            };
            if let Err(restore) = self.storage.set_entries(kind, previous) {
                tracing::warn!("Unable to restore {} list: {}", kind, restore);
            }
            return Err(e);
        }
        Ok(())
    }

    /// Best-effort rewrite of every ledger key from memory
    fn restore_persisted(&mut self) {
        tracing::warn!("Restoring persisted state after a partial reset");
        let results = [
            self.storage.set_total(self.total_calories),
            self.storage.set_entries(EntryKind::Meal, &self.meals),
            self.storage.set_entries(EntryKind::Workout, &self.workouts),
        ];
        for e in results.into_iter().filter_map(|r| r.err()) {
            tracing::warn!("Restore write failed: {}", e);
        }
    }

    fn list_mut(&mut self, kind: EntryKind) -> &mut Vec<Entry> {
        match kind {
            EntryKind::Meal => &mut self.meals,
            EntryKind::Workout => &mut self.workouts,
        }
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn calorie_limit(&self) -> u32 {
        self.calorie_limit
    }

    pub fn total_calories(&self) -> i64 {
        self.total_calories
    }

    pub fn meals(&self) -> &[Entry] {
        &self.meals
    }

    pub fn workouts(&self) -> &[Entry] {
        &self.workouts
    }

    pub fn entries(&self, kind: EntryKind) -> &[Entry] {
        match kind {
            EntryKind::Meal => &self.meals,
            EntryKind::Workout => &self.workouts,
        }
    }

    pub fn storage(&self) -> &Storage<S> {
        &self.storage
    }

    pub fn consumed_calories(&self) -> i64 {
        sum_calories(&self.meals)
    }

    pub fn burned_calories(&self) -> i64 {
        sum_calories(&self.workouts)
    }

    pub fn remaining_calories(&self) -> i64 {
        i64::from(self.calorie_limit) - self.total_calories
    }

    /// Share of the limit used so far, clamped to `[0, 1]`
    ///
    /// `None` when the limit is zero.
    pub fn progress_fraction(&self) -> Option<f64> {
        if self.calorie_limit == 0 {
            return None;
        }
        let fraction = self.total_calories as f64 / f64::from(self.calorie_limit);
        Some(fraction.clamp(0.0, 1.0))
    }

    pub fn is_over_limit(&self) -> bool {
        self.remaining_calories() <= 0
    }

    pub fn summary(&self) -> CalorieSummary {
        CalorieSummary {
            calorie_limit: self.calorie_limit,
            total_calories: self.total_calories,
            consumed_calories: self.consumed_calories(),
            burned_calories: self.burned_calories(),
            remaining_calories: self.remaining_calories(),
            progress_fraction: self.progress_fraction(),
            over_limit: self.is_over_limit(),
        }
    }

    /// Entries of one kind whose name contains `query`, ignoring case
    pub fn find(&self, kind: EntryKind, query: &str) -> Vec<&Entry> {
        let needle = query.trim().to_lowercase();
        self.entries(kind)
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&needle))
            .collect()
    }
}

fn or_default<T>(result: Result<T>, default: T, what: &str) -> T {
    result.unwrap_or_else(|e| {
        tracing::warn!("Failed to load {}: {}. Using default.", what, e);
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MEALS_KEY, TOTAL_KEY, WORKOUTS_KEY};
    use crate::{Error, FileStore, MemoryStore, DEFAULT_CALORIE_LIMIT};

    fn new_ledger() -> Ledger<MemoryStore> {
        Ledger::open(Storage::new(MemoryStore::new()), DEFAULT_CALORIE_LIMIT).unwrap()
    }

    fn assert_consistent<S: KeyValueStore>(ledger: &Ledger<S>) {
        assert_eq!(
            ledger.total_calories(),
            ledger.consumed_calories() - ledger.burned_calories()
        );
        assert_eq!(
            ledger.remaining_calories(),
            i64::from(ledger.calorie_limit()) - ledger.total_calories()
        );
    }

    /// Store whose writes can be switched off
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        fail_writes: bool,
        /// Refuse writes and removals of this key only
        refused_key: Option<&'static str>,
    }

    impl FlakyStore {
        fn refuses(&self, key: &str) -> bool {
            self.fail_writes || self.refused_key == Some(key)
        }
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            if self.refuses(key) {
                return Err(Error::Storage(format!("write to {} refused", key)));
            }
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            if self.refuses(key) {
                return Err(Error::Storage(format!("remove of {} refused", key)));
            }
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_empty_store_hydrates_defaults() {
        let ledger = new_ledger();
        assert_eq!(ledger.calorie_limit(), 2000);
        assert_eq!(ledger.total_calories(), 0);
        assert!(ledger.meals().is_empty());
        assert!(ledger.workouts().is_empty());
    }

    #[test]
    fn test_breakfast_and_run_scenario() {
        crate::logging::init_test();
        let mut ledger = new_ledger();

        ledger.add_meal(Entry::new("Breakfast", 400)).unwrap();
        assert_eq!(ledger.total_calories(), 400);
        assert_eq!(ledger.consumed_calories(), 400);
        assert_eq!(ledger.burned_calories(), 0);
        assert_eq!(ledger.remaining_calories(), 1600);

        ledger.add_workout(Entry::new("Morning Run", 320)).unwrap();
        assert_eq!(ledger.total_calories(), 80);
        assert_eq!(ledger.remaining_calories(), 1920);

        ledger.reset().unwrap();
        assert_eq!(ledger.total_calories(), 0);
        assert!(ledger.meals().is_empty());
        assert!(ledger.workouts().is_empty());
        assert_eq!(ledger.calorie_limit(), 2000);
    }

    #[test]
    fn test_add_returns_stored_entry() {
        let mut ledger = new_ledger();
        let meal = Entry::new("Lunch", 650);
        let id = meal.id.clone();

        let stored = ledger.add_meal(meal).unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.name, "Lunch");
    }

    #[test]
    fn test_add_then_remove_round_trip() {
        let mut ledger = new_ledger();
        ledger.add_meal(Entry::new("Breakfast", 400)).unwrap();
        ledger.add_workout(Entry::new("Swim", 250)).unwrap();

        let total_before = ledger.total_calories();
        let meals_before = ledger.meals().to_vec();
        let workouts_before = ledger.workouts().to_vec();

        let id = ledger.add_meal(Entry::new("Snack", 180)).unwrap().id.clone();
        let removed = ledger.remove_meal(&id).unwrap().unwrap();

        assert_eq!(removed.calories, 180);
        assert_eq!(ledger.total_calories(), total_before);
        assert_eq!(ledger.meals(), meals_before.as_slice());
        assert_eq!(ledger.workouts(), workouts_before.as_slice());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut ledger = new_ledger();
        ledger.add_meal(Entry::new("Breakfast", 400)).unwrap();
        ledger.add_workout(Entry::new("Morning Run", 320)).unwrap();

        let missing = EntryId::from("does-not-exist");
        assert!(ledger.remove_meal(&missing).unwrap().is_none());
        assert!(ledger.remove_workout(&missing).unwrap().is_none());

        assert_eq!(ledger.total_calories(), 80);
        assert_eq!(ledger.meals().len(), 1);
        assert_eq!(ledger.workouts().len(), 1);
    }

    #[test]
    fn test_remove_meal_does_not_touch_workouts_with_same_id() {
        let mut ledger = new_ledger();
        let workout = Entry::new("Cycling", 500);
        let id = workout.id.clone();
        ledger.add_workout(workout).unwrap();

        assert!(ledger.remove_meal(&id).unwrap().is_none());
        assert_eq!(ledger.workouts().len(), 1);
        assert_eq!(ledger.total_calories(), -500);
    }

    #[test]
    fn test_total_invariant_over_mixed_sequence() {
        let mut ledger = new_ledger();
        let mut ids = Vec::new();

        for i in 0..12u32 {
            let calories = 50 + (i * 37) % 400;
            let id = if i % 3 == 0 {
                ledger.add_workout(Entry::new(format!("w{}", i), calories)).unwrap().id.clone()
            } else {
                ledger.add_meal(Entry::new(format!("m{}", i), calories)).unwrap().id.clone()
            };
            ids.push((i % 3 == 0, id));
            assert_consistent(&ledger);
        }

        for (is_workout, id) in ids.iter().step_by(2) {
            if *is_workout {
                ledger.remove_workout(id).unwrap();
            } else {
                ledger.remove_meal(id).unwrap();
            }
            assert_consistent(&ledger);
        }

        assert_eq!(ledger.meals().len() + ledger.workouts().len(), 6);
    }

    #[test]
    fn test_set_limit_leaves_entries_alone() {
        let mut ledger = new_ledger();
        ledger.add_meal(Entry::new("Dinner", 900)).unwrap();

        ledger.set_limit(1500).unwrap();
        assert_eq!(ledger.calorie_limit(), 1500);
        assert_eq!(ledger.total_calories(), 900);
        assert_eq!(ledger.remaining_calories(), 600);
        assert_eq!(ledger.meals().len(), 1);
    }

    #[test]
    fn test_progress_is_clamped() {
        let mut ledger = new_ledger();
        assert_eq!(ledger.progress_fraction(), Some(0.0));

        ledger.add_meal(Entry::new("Breakfast", 500)).unwrap();
        assert_eq!(ledger.progress_fraction(), Some(0.25));

        ledger.add_meal(Entry::new("Feast", 3000)).unwrap();
        assert_eq!(ledger.progress_fraction(), Some(1.0));
        assert!(ledger.is_over_limit());
        assert_eq!(ledger.remaining_calories(), -1500);

        ledger.add_workout(Entry::new("Marathon", 5000)).unwrap();
        assert_eq!(ledger.total_calories(), -1500);
        assert_eq!(ledger.progress_fraction(), Some(0.0));
        assert!(!ledger.is_over_limit());
    }

    #[test]
    fn test_zero_limit_has_no_progress() {
        let mut ledger = new_ledger();
        ledger.set_limit(0).unwrap();
        ledger.add_meal(Entry::new("Apple", 80)).unwrap();

        assert_eq!(ledger.progress_fraction(), None);
        assert_eq!(ledger.remaining_calories(), -80);
        assert!(ledger.summary().over_limit);
    }

    #[test]
    fn test_summary_matches_reads() {
        let mut ledger = new_ledger();
        ledger.add_meal(Entry::new("Breakfast", 400)).unwrap();
        ledger.add_workout(Entry::new("Morning Run", 320)).unwrap();

        let summary = ledger.summary();
        assert_eq!(summary.calorie_limit, 2000);
        assert_eq!(summary.total_calories, 80);
        assert_eq!(summary.consumed_calories, 400);
        assert_eq!(summary.burned_calories, 320);
        assert_eq!(summary.remaining_calories, 1920);
        assert_eq!(summary.progress_fraction, Some(0.04));
        assert!(!summary.over_limit);
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let mut ledger = new_ledger();
        ledger.add_meal(Entry::new("Chicken Salad", 450)).unwrap();
        ledger.add_meal(Entry::new("Egg salad sandwich", 380)).unwrap();
        ledger.add_meal(Entry::new("Pasta", 700)).unwrap();

        let found: Vec<_> = ledger
            .find(EntryKind::Meal, "SALAD")
            .into_iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(found, vec!["Chicken Salad", "Egg salad sandwich"]);
        assert_eq!(ledger.find(EntryKind::Meal, "").len(), 3);
        assert!(ledger.find(EntryKind::Workout, "salad").is_empty());
    }

    #[test]
    fn test_state_survives_reopen() {
        let temp_dir = tempfile::tempdir().unwrap();
        let open = || {
            Ledger::open(Storage::new(FileStore::new(temp_dir.path())), DEFAULT_CALORIE_LIMIT)
                .unwrap()
        };

        let meal_id = {
            let mut ledger = open();
            ledger.set_limit(1800).unwrap();
            let id = ledger.add_meal(Entry::new("Breakfast", 400)).unwrap().id.clone();
            ledger.add_meal(Entry::new("Lunch", 600)).unwrap();
            ledger.add_workout(Entry::new("Morning Run", 320)).unwrap();
            id
        };

        let mut ledger = open();
        assert_eq!(ledger.calorie_limit(), 1800);
        assert_eq!(ledger.total_calories(), 680);
        assert_eq!(ledger.meals().len(), 2);
        assert_eq!(ledger.meals()[0].name, "Breakfast");

        ledger.remove_meal(&meal_id).unwrap();
        ledger.reset().unwrap();

        let ledger = open();
        assert_eq!(ledger.calorie_limit(), 1800);
        assert_eq!(ledger.total_calories(), 0);
        assert!(ledger.meals().is_empty());
    }

    #[test]
    fn test_open_recomputes_stale_total() {
        let mut store = MemoryStore::new();
        store
            .set(MEALS_KEY, r#"[{"id":"a","name":"Oats","calories":300}]"#)
            .unwrap();
        store
            .set(WORKOUTS_KEY, r#"[{"id":"b","name":"Row","calories":100}]"#)
            .unwrap();
        store.set(TOTAL_KEY, "999").unwrap();

        let ledger = Ledger::open(Storage::new(store), DEFAULT_CALORIE_LIMIT).unwrap();
        assert_eq!(ledger.total_calories(), 200);
        assert_eq!(
            ledger.storage().store().get(TOTAL_KEY).unwrap(),
            Some("200".into())
        );
    }

    #[test]
    fn test_open_surfaces_corruption() {
        let mut store = MemoryStore::new();
        store.set(MEALS_KEY, "not json").unwrap();

        let result = Ledger::open(Storage::new(store), DEFAULT_CALORIE_LIMIT);
        assert!(matches!(result, Err(Error::CorruptValue { .. })));
    }

    #[test]
    fn test_open_or_default_recovers_and_heals() {
        let mut store = MemoryStore::new();
        store.set(MEALS_KEY, "not json").unwrap();
        store.set(TOTAL_KEY, "400").unwrap();
        store
            .set(WORKOUTS_KEY, r#"[{"id":"b","name":"Row","calories":100}]"#)
            .unwrap();

        let mut ledger = Ledger::open_or_default(Storage::new(store), DEFAULT_CALORIE_LIMIT);
        assert!(ledger.meals().is_empty());
        assert_eq!(ledger.workouts().len(), 1);
        assert_eq!(ledger.total_calories(), -100);

        // The next write replaces the corrupt list
        ledger.add_meal(Entry::new("Toast", 150)).unwrap();
        assert_eq!(ledger.storage().meals().unwrap().len(), 1);
        assert_eq!(ledger.total_calories(), 50);
    }

    #[test]
    fn test_failed_write_leaves_ledger_unchanged() {
        let storage = Storage::new(FlakyStore::default());
        let mut ledger = Ledger::open(storage, DEFAULT_CALORIE_LIMIT).unwrap();
        let id = ledger.add_meal(Entry::new("Breakfast", 400)).unwrap().id.clone();

        ledger.storage.store_mut().fail_writes = true;

        let err = ledger.add_meal(Entry::new("Lunch", 600)).unwrap_err();
        assert!(err.is_storage());
        assert!(ledger.remove_meal(&id).is_err());
        assert!(ledger.set_limit(1200).is_err());
        assert!(ledger.reset().is_err());

        assert_eq!(ledger.total_calories(), 400);
        assert_eq!(ledger.meals().len(), 1);
        assert_eq!(ledger.calorie_limit(), 2000);
        assert_consistent(&ledger);
    }

    #[test]
    fn test_failed_total_write_is_not_durable() {
        let storage = Storage::new(FlakyStore::default());
        let mut ledger = Ledger::open(storage, DEFAULT_CALORIE_LIMIT).unwrap();
        let breakfast = ledger.add_meal(Entry::new("Breakfast", 400)).unwrap().id.clone();

        ledger.storage.store_mut().refused_key = Some(TOTAL_KEY);

        assert!(ledger.add_meal(Entry::new("Lunch", 600)).is_err());
        assert!(ledger.remove_meal(&breakfast).unwrap_err().is_storage());

        // Memory and storage agree on the pre-failure state
        assert_eq!(ledger.meals().len(), 1);
        assert_eq!(ledger.storage().meals().unwrap(), ledger.meals().to_vec());
        assert_eq!(ledger.total_calories(), 400);

        // A fresh open does not resurrect the failed entry
        ledger.storage.store_mut().refused_key = None;
        let store = ledger.storage.into_inner();
        let reopened = Ledger::open(Storage::new(store), DEFAULT_CALORIE_LIMIT).unwrap();
        assert_eq!(reopened.meals().len(), 1);
        assert_eq!(reopened.meals()[0].name, "Breakfast");
        assert_eq!(reopened.total_calories(), 400);
    }

    #[test]
    fn test_partial_reset_restores_cleared_keys() {
        let storage = Storage::new(FlakyStore::default());
        let mut ledger = Ledger::open(storage, DEFAULT_CALORIE_LIMIT).unwrap();
        ledger.add_meal(Entry::new("Breakfast", 400)).unwrap();
        ledger.add_workout(Entry::new("Morning Run", 320)).unwrap();

        // Total and meals are removed before the workouts removal fails
        ledger.storage.store_mut().refused_key = Some(WORKOUTS_KEY);
        assert!(ledger.reset().is_err());

        assert_eq!(ledger.total_calories(), 80);
        assert_eq!(ledger.storage().get_total(0).unwrap(), 80);
        assert_eq!(ledger.storage().meals().unwrap(), ledger.meals().to_vec());
        assert_eq!(ledger.storage().workouts().unwrap(), ledger.workouts().to_vec());
    }
}
