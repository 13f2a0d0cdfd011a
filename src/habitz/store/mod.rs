//! # Storage Layer
//!
//! Habits persist in a single durable key-value slot holding a JSON array of
//! records. The [`DataStore`] trait is that slot: it knows nothing about habits,
//! only how to read and write a string under a key.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - One file per key: `{key}.json` inside the data directory
//!   - Writes go to a temporary file first and are renamed into place
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can be told to fail reads or writes
//!
//! [`habit_store::HabitStore`] sits on top of a backend and owns the habit
//! list for the session.
//!
//! ## Storage Format
//!
//! ```text
//! ~/.local/share/habitz/
//! ├── habits.json     # JSON array: [{id, name, completed, createdAt}, ...]
//! └── config.json     # HabitzConfig
//! ```

use crate::error::Result;

pub mod fs;
pub mod habit_store;
pub mod memory;

/// Abstract interface for one durable key-value slot.
///
/// `read_slot` returns `Ok(None)` when nothing has been written under `key`.
/// Errors mean the storage itself could not be reached.
pub trait DataStore {
    fn read_slot(&self, key: &str) -> Result<Option<String>>;

    fn write_slot(&mut self, key: &str, value: &str) -> Result<()>;
}
