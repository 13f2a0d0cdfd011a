//! # Query Engine
//!
//! Derives the displayed list from the stored one. The pipeline always runs in
//! the same order:
//!
//! 1. **Search**: case-insensitive substring match on the trimmed term
//! 2. **Status filter**: all / completed / pending
//! 3. **Sort**: stable sort by the selected [`SortMode`]
//!
//! Input records are never modified; the stored order stays insertion order.
//! The result carries the pre-filter total so callers can tell "no habits at
//! all" apart from "nothing matches".

use crate::model::{Habit, SortMode, StatusFilter, ViewState};
use std::cmp::Ordering;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HabitView {
    pub habits: Vec<Habit>,
    /// Number of stored habits before search and filtering.
    pub total: usize,
}

impl HabitView {
    /// The store itself holds nothing.
    pub fn is_store_empty(&self) -> bool {
        self.total == 0
    }

    /// The store has habits but none survive the current search and filter.
    pub fn is_no_match(&self) -> bool {
        self.total > 0 && self.habits.is_empty()
    }
}

pub fn view(records: &[Habit], state: &ViewState) -> HabitView {
    view_with(
        records,
        &state.search_term,
        state.status_filter,
        state.sort_mode,
    )
}

pub fn view_with(
    records: &[Habit],
    search_term: &str,
    status_filter: StatusFilter,
    sort_mode: SortMode,
) -> HabitView {
    let term = search_term.trim().to_lowercase();

    let mut habits: Vec<Habit> = records
        .iter()
        .filter(|h| term.is_empty() || h.name.to_lowercase().contains(&term))
        .filter(|h| status_filter.matches(h))
        .cloned()
        .collect();

    sort_habits(&mut habits, sort_mode);

    HabitView {
        habits,
        total: records.len(),
    }
}

/// Stable in-place sort. Ties keep their incoming relative order.
pub fn sort_habits(habits: &mut [Habit], mode: SortMode) {
    match mode {
        SortMode::Newest => habits.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortMode::Oldest => habits.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortMode::Alphabetical => habits.sort_by(|a, b| collate(&a.name, &b.name)),
        SortMode::ReverseAlphabetical => habits.sort_by(|a, b| collate(&b.name, &a.name)),
        // Partition by status; `true` keys sort after `false`.
        SortMode::CompletedFirst => habits.sort_by_key(|h| !h.completed),
        SortMode::PendingFirst => habits.sort_by_key(|h| h.completed),
    }
}

/// Human-oriented name ordering: case-insensitive first, then lowercase
/// before uppercase for names that differ only in case.
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded.then_with(|| {
        a.chars()
            .zip(b.chars())
            .find(|(x, y)| x != y)
            .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => x.cmp(&y),
            })
            .unwrap_or(Ordering::Equal)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn habit(id: i64, name: &str, completed: bool, created_at: i64) -> Habit {
        Habit {
            id,
            name: name.to_string(),
            completed,
            created_at,
        }
    }

    fn sample() -> Vec<Habit> {
        vec![
            habit(1, "Reading", false, 100),
            habit(2, "Exercise", true, 200),
        ]
    }

    fn ids(view: &HabitView) -> Vec<i64> {
        view.habits.iter().map(|h| h.id).collect()
    }

    fn mixed() -> Vec<Habit> {
        vec![
            habit(1, "banana", true, 300),
            habit(2, "Apple", false, 100),
            habit(3, "cherry", true, 400),
            habit(4, "apple pie", false, 200),
        ]
    }

    #[test]
    fn default_view_is_newest_first() {
        let v = view(&sample(), &ViewState::default());
        assert_eq!(ids(&v), vec![2, 1]);
        assert_eq!(v.total, 2);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let v = view_with(&sample(), "read", StatusFilter::All, SortMode::Newest);
        assert_eq!(ids(&v), vec![1]);

        let v = view_with(&sample(), "  EXER ", StatusFilter::All, SortMode::Newest);
        assert_eq!(ids(&v), vec![2]);
    }

    #[test]
    fn no_matches_reports_total_alongside() {
        let v = view_with(&sample(), "zzz", StatusFilter::All, SortMode::Newest);
        assert!(v.habits.is_empty());
        assert_eq!(v.total, 2);
        assert!(v.is_no_match());
        assert!(!v.is_store_empty());
    }

    #[test]
    fn empty_store_is_distinct_from_no_match() {
        let v = view(&[], &ViewState::default());
        assert!(v.is_store_empty());
        assert!(!v.is_no_match());
    }

    #[test]
    fn status_filter_applies_after_search() {
        let records = mixed();
        let v = view_with(&records, "apple", StatusFilter::Pending, SortMode::Oldest);
        assert_eq!(ids(&v), vec![2, 4]);

        let v = view_with(&records, "apple", StatusFilter::Completed, SortMode::Oldest);
        assert!(v.habits.is_empty());

        let v = view_with(&records, "", StatusFilter::Completed, SortMode::Oldest);
        assert_eq!(ids(&v), vec![1, 3]);
    }

    #[test]
    fn sorts_by_creation_time() {
        let records = mixed();
        let newest = view_with(&records, "", StatusFilter::All, SortMode::Newest);
        assert_eq!(ids(&newest), vec![3, 1, 4, 2]);
        let oldest = view_with(&records, "", StatusFilter::All, SortMode::Oldest);
        assert_eq!(ids(&oldest), vec![2, 4, 1, 3]);
    }

    #[test]
    fn alphabetical_ignores_case() {
        let records = mixed();
        let asc = view_with(&records, "", StatusFilter::All, SortMode::Alphabetical);
        assert_eq!(ids(&asc), vec![2, 4, 1, 3]);
        let desc = view_with(
            &records,
            "",
            StatusFilter::All,
            SortMode::ReverseAlphabetical,
        );
        assert_eq!(ids(&desc), vec![3, 1, 4, 2]);
    }

    #[test]
    fn status_sorts_are_stable_partitions() {
        let records = mixed();
        let done_first = view_with(&records, "", StatusFilter::All, SortMode::CompletedFirst);
        assert_eq!(ids(&done_first), vec![1, 3, 2, 4]);
        let pending_first = view_with(&records, "", StatusFilter::All, SortMode::PendingFirst);
        assert_eq!(ids(&pending_first), vec![2, 4, 1, 3]);
    }

    #[test]
    fn legacy_records_without_timestamp_sort_oldest() {
        let records = vec![habit(1, "Legacy", false, 0), habit(2, "New", false, 50)];
        let v = view_with(&records, "", StatusFilter::All, SortMode::Newest);
        assert_eq!(ids(&v), vec![2, 1]);
    }

    #[test]
    fn never_mutates_input() {
        let records = mixed();
        let before = records.clone();
        for mode in SortMode::ALL {
            view_with(&records, "a", StatusFilter::All, mode);
        }
        assert_eq!(records, before);
    }

    #[test]
    fn collate_puts_lowercase_before_uppercase_on_ties() {
        assert_eq!(collate("apple", "Apple"), Ordering::Less);
        assert_eq!(collate("Apple", "banana"), Ordering::Less);
        assert_eq!(collate("Zebra", "apple"), Ordering::Greater);
        assert_eq!(collate("same", "same"), Ordering::Equal);
    }
}
