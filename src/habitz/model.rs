use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DAY_MS: i64 = 86_400_000;

/// A single tracked habit.
///
/// Timestamps are milliseconds since the Unix epoch, matching the persisted
/// JSON shape `{id, name, completed, createdAt}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: i64,
    pub name: String,
    pub completed: bool,
    // Older records were written without a creation time; they sort as oldest.
    #[serde(default)]
    pub created_at: i64,
}

impl Habit {
    pub fn new(id: i64, name: impl Into<String>, created_at: i64) -> Self {
        Self {
            id,
            name: name.into(),
            completed: false,
            created_at,
        }
    }

    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.created_at)
    }
}

/// The sample list a fresh session starts with.
pub fn seed_habits(now: DateTime<Utc>) -> Vec<Habit> {
    let now_ms = now.timestamp_millis();
    let seed = [
        (1, "Reading", false),
        (2, "Exercise", true),
        (3, "Meditation", false),
        (4, "Drink Water", false),
    ];

    seed.into_iter()
        .map(|(id, name, completed)| Habit {
            id,
            name: name.to_string(),
            completed,
            created_at: now_ms - id * DAY_MS,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [Self::All, Self::Completed, Self::Pending];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Pending => "pending",
        }
    }

    pub fn matches(&self, habit: &Habit) -> bool {
        match self {
            Self::All => true,
            Self::Completed => habit.completed,
            Self::Pending => !habit.completed,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("Unknown status filter: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    #[default]
    Newest,
    Oldest,
    Alphabetical,
    ReverseAlphabetical,
    CompletedFirst,
    PendingFirst,
}

impl SortMode {
    pub const ALL: [SortMode; 6] = [
        Self::Newest,
        Self::Oldest,
        Self::Alphabetical,
        Self::ReverseAlphabetical,
        Self::CompletedFirst,
        Self::PendingFirst,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Alphabetical => "alphabetical",
            Self::ReverseAlphabetical => "reverse-alphabetical",
            Self::CompletedFirst => "completed-first",
            Self::PendingFirst => "pending-first",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("Unknown sort mode: {}", s))
    }
}

/// Transient, per-session view settings. Never persisted with the habits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    pub status_filter: StatusFilter,
    pub sort_mode: SortMode,
}

impl ViewState {
    pub fn new(status_filter: StatusFilter, sort_mode: SortMode) -> Self {
        Self {
            search_term: String::new(),
            status_filter,
            sort_mode,
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }
}
