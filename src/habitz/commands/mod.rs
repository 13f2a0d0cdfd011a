//! # Command Layer
//!
//! One module per user intent. Commands take typed arguments, act on the
//! [`HabitStore`](crate::store::habit_store::HabitStore) or on a snapshot of
//! its records, and describe what happened in a [`CmdResult`]. They never
//! print and never prompt; confirmation belongs to the client.

use crate::config::HabitzConfig;
use crate::error::HabitzError;
use crate::index::DisplayHabit;
use crate::model::Habit;
use crate::stats::HabitStats;
use crate::store::habit_store::Mutation;

pub mod add;
pub mod clear;
pub mod config;
pub mod list;
pub mod remove;
pub mod stats;
pub mod toggle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_habits: Vec<Habit>,
    pub listed_habits: Vec<DisplayHabit>,
    /// Stored habit count before search/filter; set by listing commands.
    pub total_habits: usize,
    pub stats: Option<HabitStats>,
    pub config: Option<HabitzConfig>,
    pub messages: Vec<CmdMessage>,
    /// A write that failed after the in-memory change was applied.
    pub storage_error: Option<HabitzError>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_habits(mut self, habits: Vec<Habit>) -> Self {
        self.affected_habits = habits;
        self
    }

    pub fn with_listed_habits(mut self, habits: Vec<DisplayHabit>, total: usize) -> Self {
        self.listed_habits = habits;
        self.total_habits = total;
        self
    }

    pub fn with_stats(mut self, stats: HabitStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: HabitzConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Move a failed write from `mutation` into the result as a warning.
    pub(crate) fn absorb_persist_error<T>(&mut self, mutation: &mut Mutation<T>) {
        if let Some(err) = mutation.persist_error.take() {
            self.add_message(CmdMessage::warning(format!(
                "Change kept for this session but not saved: {}",
                err
            )));
            // Keep the first failure; later ones repeat it.
            if self.storage_error.is_none() {
                self.storage_error = Some(err);
            }
        }
    }
}
