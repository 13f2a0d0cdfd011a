use super::DataStore;
use crate::error::{HabitzError, Result};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    slots: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(mut self, key: &str, value: impl Into<String>) -> Self {
        self.slots.insert(key.to_string(), value.into());
        self
    }

    /// Make every subsequent read fail, as an unreachable backend would.
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn slot(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl DataStore for InMemoryStore {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(HabitzError::StorageUnavailable(format!(
                "cannot read slot '{}'",
                key
            )));
        }
        Ok(self.slots.get(key).cloned())
    }

    fn write_slot(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(HabitzError::StorageUnavailable(
                "storage quota exceeded".to_string(),
            ));
        }
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Habit;

    pub const KEY: &str = "habits";

    /// Builds a backend whose slot already holds the given records.
    pub struct StoreFixture {
        habits: Vec<Habit>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self { habits: Vec::new() }
        }

        pub fn with_pending(mut self, id: i64, name: &str, created_at: i64) -> Self {
            self.habits.push(Habit::new(id, name, created_at));
            self
        }

        pub fn with_completed(mut self, id: i64, name: &str, created_at: i64) -> Self {
            let mut habit = Habit::new(id, name, created_at);
            habit.completed = true;
            self.habits.push(habit);
            self
        }

        pub fn habits(&self) -> &[Habit] {
            &self.habits
        }

        pub fn build(self) -> InMemoryStore {
            let json = serde_json::to_string(&self.habits).unwrap();
            InMemoryStore::new().with_slot(KEY, json)
        }
    }
}
