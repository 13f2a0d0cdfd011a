//! The session's habit list and its persistence.
//!
//! `HabitStore` is the single owner of the records. Every mutation is applied
//! to memory first and then written through to the backend. A failed write is
//! reported in the returned [`Mutation`] but never undoes the in-memory change:
//! the in-memory list stays authoritative for the rest of the session.

use super::DataStore;
use crate::error::{HabitzError, Result};
use crate::model::{seed_habits, Habit};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Where the list came from when the store was loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    Persisted,
    Seeded(SeedReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedReason {
    Absent,
    Malformed(String),
    Unavailable(String),
}

/// Outcome of a store mutation.
///
/// `value` describes what changed in memory. `persist_error` is set when the
/// write-through failed; the change is kept regardless.
#[derive(Debug)]
pub struct Mutation<T> {
    pub value: T,
    pub persist_error: Option<HabitzError>,
}

impl<T> Mutation<T> {
    fn unchanged(value: T) -> Self {
        Self {
            value,
            persist_error: None,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.persist_error.is_none()
    }
}

pub struct HabitStore<S: DataStore> {
    backend: S,
    key: String,
    habits: Vec<Habit>,
    source: LoadSource,
}

impl<S: DataStore> HabitStore<S> {
    /// Load the list stored under `key`, falling back to the sample habits
    /// when the slot is empty, unreadable or holds anything but valid records.
    pub fn load(backend: S, key: impl Into<String>) -> Self {
        Self::load_at(backend, key, Utc::now())
    }

    pub fn load_at(backend: S, key: impl Into<String>, now: DateTime<Utc>) -> Self {
        let key = key.into();

        let loaded = match backend.read_slot(&key) {
            Ok(Some(raw)) => parse_persisted(&raw).map_err(SeedReason::Malformed),
            Ok(None) => Err(SeedReason::Absent),
            Err(e) => Err(SeedReason::Unavailable(e.to_string())),
        };

        let (habits, source) = match loaded {
            Ok(habits) => {
                debug!(key = %key, count = habits.len(), "loaded habits");
                (habits, LoadSource::Persisted)
            }
            Err(reason) => {
                match &reason {
                    SeedReason::Absent => debug!(key = %key, "no stored habits, using samples"),
                    SeedReason::Malformed(why) | SeedReason::Unavailable(why) => {
                        warn!(key = %key, reason = %why, "discarding stored habits, using samples")
                    }
                }
                (seed_habits(now), LoadSource::Seeded(reason))
            }
        };

        Self {
            backend,
            key,
            habits,
            source,
        }
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn get(&self, id: i64) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    pub fn source(&self) -> &LoadSource {
        &self.source
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    pub fn add(&mut self, name: &str) -> Result<Mutation<Habit>> {
        self.add_at(name, Utc::now())
    }

    /// Append a new pending habit. The name is trimmed; a blank name is
    /// rejected with [`HabitzError::EmptyName`] and nothing changes.
    pub fn add_at(&mut self, name: &str, now: DateTime<Utc>) -> Result<Mutation<Habit>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HabitzError::EmptyName);
        }

        let now_ms = now.timestamp_millis();
        let habit = Habit::new(self.next_id(now_ms), name, now_ms);
        debug!(id = habit.id, name = %habit.name, "adding habit");
        self.habits.push(habit.clone());

        Ok(self.write_through(habit))
    }

    /// Flip `completed` on the matching habit. Unknown ids are a no-op.
    pub fn toggle(&mut self, id: i64) -> Mutation<Option<Habit>> {
        let Some(habit) = self.habits.iter_mut().find(|h| h.id == id) else {
            debug!(id, "toggle ignored, no such habit");
            return Mutation::unchanged(None);
        };

        habit.completed = !habit.completed;
        let updated = habit.clone();
        debug!(id, completed = updated.completed, "toggled habit");
        self.write_through(Some(updated))
    }

    /// Delete the matching habit. Unknown ids are a no-op.
    pub fn remove(&mut self, id: i64) -> Mutation<Option<Habit>> {
        let Some(pos) = self.habits.iter().position(|h| h.id == id) else {
            debug!(id, "remove ignored, no such habit");
            return Mutation::unchanged(None);
        };

        let removed = self.habits.remove(pos);
        debug!(id, name = %removed.name, "removed habit");
        self.write_through(Some(removed))
    }

    /// Delete every completed habit, returning the removed records in stored order.
    pub fn clear_completed(&mut self) -> Mutation<Vec<Habit>> {
        let (removed, kept): (Vec<Habit>, Vec<Habit>) =
            std::mem::take(&mut self.habits)
                .into_iter()
                .partition(|h| h.completed);
        self.habits = kept;

        if removed.is_empty() {
            return Mutation::unchanged(removed);
        }
        debug!(count = removed.len(), "cleared completed habits");
        self.write_through(removed)
    }

    /// Serialize the full list into the backend slot.
    pub fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.habits)?;
        self.backend
            .write_slot(&self.key, &json)
            .map_err(|e| match e {
                HabitzError::StorageUnavailable(_) => e,
                other => HabitzError::StorageUnavailable(other.to_string()),
            })
    }

    fn write_through<T>(&mut self, value: T) -> Mutation<T> {
        let persist_error = self.persist().err();
        if let Some(e) = &persist_error {
            warn!(key = %self.key, error = %e, "failed to persist habits; keeping in-memory change");
        }
        Mutation {
            value,
            persist_error,
        }
    }

    // Creation time in ms, bumped past the current maximum so rapid adds stay unique.
    // A stored id of i64::MAX leaves no room above it; take the lowest free id instead.
    fn next_id(&self, now_ms: i64) -> i64 {
        match self.habits.iter().map(|h| h.id).max() {
            Some(max) if max >= now_ms => max
                .checked_add(1)
                .unwrap_or_else(|| self.lowest_unused_id(now_ms)),
            _ => now_ms,
        }
    }

    fn lowest_unused_id(&self, fallback: i64) -> i64 {
        let taken: HashSet<i64> = self.habits.iter().map(|h| h.id).collect();
        (1..).find(|id| !taken.contains(id)).unwrap_or(fallback)
    }
}

fn parse_persisted(raw: &str) -> std::result::Result<Vec<Habit>, String> {
    let habits: Vec<Habit> = serde_json::from_str(raw).map_err(|e| e.to_string())?;

    let mut seen = HashSet::with_capacity(habits.len());
    for habit in &habits {
        if !seen.insert(habit.id) {
            return Err(format!("duplicate habit id {}", habit.id));
        }
        if habit.name.trim().is_empty() {
            return Err(format!("habit {} has an empty name", habit.id));
        }
    }

    Ok(habits)
}
