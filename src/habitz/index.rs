//! # Display Positions and Selectors
//!
//! Record ids are millisecond timestamps: stable, but not something anyone
//! wants to type. Listings therefore number habits `1, 2, 3...` in display
//! order, and commands accept a [`HabitSelector`]:
//!
//! - `3`: the habit listed at position 3
//! - `#1718000000000`: the habit with that exact id
//! - anything else: the habit whose name matches, ignoring case
//!
//! A position belongs to the habit, not to the row it is printed on: every
//! habit is numbered in the configured default sort order over the whole list,
//! and searching, filtering or re-sorting only changes which numbered rows are
//! shown and in what order. What `list` printed is what `toggle 3` acts on,
//! whatever flags `list` was given.

use crate::error::{HabitzError, Result};
use crate::model::{Habit, SortMode, StatusFilter};
use crate::query;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayHabit {
    pub position: usize,
    pub habit: Habit,
}

pub fn index_habits(habits: Vec<Habit>) -> Vec<DisplayHabit> {
    habits
        .into_iter()
        .enumerate()
        .map(|(i, habit)| DisplayHabit {
            position: i + 1,
            habit,
        })
        .collect()
}

/// Number every record in `sort` order, ignoring search and status filter.
pub fn positioned_habits(records: &[Habit], sort: SortMode) -> Vec<DisplayHabit> {
    index_habits(query::view_with(records, "", StatusFilter::All, sort).habits)
}

/// Attach each habit of a derived view to its stable position.
pub fn position_view(view: Vec<Habit>, positions: &[DisplayHabit]) -> Vec<DisplayHabit> {
    view.into_iter()
        .filter_map(|habit| {
            positions
                .iter()
                .find(|dp| dp.habit.id == habit.id)
                .map(|dp| DisplayHabit {
                    position: dp.position,
                    habit,
                })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HabitSelector {
    Position(usize),
    Id(i64),
    Name(String),
}

impl fmt::Display for HabitSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HabitSelector::Position(n) => write!(f, "{}", n),
            HabitSelector::Id(id) => write!(f, "#{}", id),
            HabitSelector::Name(name) => write!(f, "\"{}\"", name),
        }
    }
}

impl FromStr for HabitSelector {
    type Err = HabitzError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(HabitzError::Api("Empty habit selector".to_string()));
        }

        if let Some(rest) = s.strip_prefix('#') {
            return rest
                .parse()
                .map(HabitSelector::Id)
                .map_err(|_| HabitzError::Api(format!("Invalid habit id: {}", s)));
        }

        if s.chars().all(|c| c.is_ascii_digit()) {
            return match s.parse() {
                Ok(0) | Err(_) => Err(HabitzError::Api(format!("Invalid position: {}", s))),
                Ok(n) => Ok(HabitSelector::Position(n)),
            };
        }

        Ok(HabitSelector::Name(s.to_string()))
    }
}

/// Turn a selector into a record id.
///
/// `Id` selectors pass through untouched even when no such record exists:
/// acting on a stale id is a no-op further down, not an error.
pub fn resolve(selector: &HabitSelector, view: &[Habit], records: &[Habit]) -> Result<i64> {
    match selector {
        HabitSelector::Id(id) => Ok(*id),
        HabitSelector::Position(n) => view
            .get(n - 1)
            .map(|h| h.id)
            .ok_or_else(|| HabitzError::Api(format!("No habit at position {}", n))),
        HabitSelector::Name(name) => {
            let wanted = name.to_lowercase();
            let mut matches = records.iter().filter(|h| h.name.to_lowercase() == wanted);
            match (matches.next(), matches.next()) {
                (Some(h), None) => Ok(h.id),
                (Some(_), Some(_)) => Err(HabitzError::Api(format!(
                    "More than one habit is named {}; use its position or #id",
                    selector
                ))),
                (None, _) => Err(HabitzError::Api(format!("No habit named {}", selector))),
            }
        }
    }
}
