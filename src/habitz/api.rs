//! # API Facade
//!
//! `HabitzApi` is the single entry point for every client. It owns the
//! [`HabitStore`] and the transient [`ViewState`] (search term, status filter,
//! sort mode), and maps each user intent onto exactly one command or query:
//!
//! | intent                 | method                  |
//! |------------------------|-------------------------|
//! | add a habit            | [`HabitzApi::add`]      |
//! | flip completed         | [`HabitzApi::toggle`]   |
//! | delete one             | [`HabitzApi::remove`]   |
//! | delete all completed   | [`HabitzApi::clear_completed`] |
//! | change the view        | `set_search_term`, `set_status_filter`, `set_sort_mode` |
//! | read the view / stats  | [`HabitzApi::get_view`], [`HabitzApi::get_stats`] |
//!
//! Removal is two-phase for interactive clients: they confirm (and animate)
//! on their side, then call `remove`/`clear_completed`, which apply
//! immediately. The API has no notion of delay.
//!
//! ## Generic Over DataStore
//!
//! - Production: `HabitzApi<FileStore>`
//! - Testing: `HabitzApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::index::{positioned_habits, resolve, HabitSelector};
use crate::model::{Habit, SortMode, StatusFilter, ViewState};
use crate::query::{self, HabitView};
use crate::stats::{self, HabitStats};
use crate::store::habit_store::HabitStore;
use crate::store::DataStore;
use std::path::{Path, PathBuf};

pub struct HabitzApi<S: DataStore> {
    store: HabitStore<S>,
    state: ViewState,
    /// Configured view; its sort order numbers display positions.
    default_view: ViewState,
    config_dir: PathBuf,
}

impl<S: DataStore> HabitzApi<S> {
    pub fn new(store: HabitStore<S>, default_view: ViewState, config_dir: PathBuf) -> Self {
        Self {
            store,
            state: default_view.clone(),
            default_view,
            config_dir,
        }
    }

    pub fn add(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, name)
    }

    pub fn toggle(&mut self, id: i64) -> Result<commands::CmdResult> {
        commands::toggle::run(&mut self.store, &[id])
    }

    pub fn remove(&mut self, id: i64) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, &[id])
    }

    pub fn clear_completed(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store)
    }

    pub fn toggle_habits<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let ids = self.resolve_ids(selectors)?;
        commands::toggle::run(&mut self.store, &ids)
    }

    pub fn remove_habits(&mut self, ids: &[i64]) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, ids)
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.search_term = term.into();
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.state.status_filter = filter;
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.state.sort_mode = mode;
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    pub fn get_view(&self) -> HabitView {
        query::view(self.store.habits(), &self.state)
    }

    pub fn get_stats(&self) -> HabitStats {
        stats::stats(self.store.habits())
    }

    /// The current view with display positions, plus stats.
    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(self.store.habits(), &self.state, self.default_view.sort_mode)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(self.store.habits())
    }

    pub fn habit(&self, id: i64) -> Option<&Habit> {
        self.store.get(id)
    }

    pub fn completed_habits(&self) -> Vec<&Habit> {
        self.store.habits().iter().filter(|h| h.completed).collect()
    }

    /// Resolve positions, `#id`s and names to record ids.
    ///
    /// Positions count every habit in the configured sort order, the same
    /// numbering [`HabitzApi::list`] prints whatever search or filter is set.
    pub fn resolve_ids<I: AsRef<str>>(&self, inputs: &[I]) -> Result<Vec<i64>> {
        let records = self.store.habits();
        let numbered: Vec<Habit> = positioned_habits(records, self.default_view.sort_mode)
            .into_iter()
            .map(|dh| dh.habit)
            .collect();
        let selectors = parse_selectors(inputs)?;

        selectors
            .iter()
            .map(|sel| resolve(sel, &numbered, records))
            .collect()
    }

    pub fn config(&self, action: commands::config::ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn store(&self) -> &HabitStore<S> {
        &self.store
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<HabitSelector>> {
    let parsed: Result<Vec<HabitSelector>> = inputs.iter().map(|s| s.as_ref().parse()).collect();

    // Bare words that are not all positions/ids read as one multi-word name,
    // so `toggle Drink Water` works without quotes.
    match parsed {
        Ok(selectors)
            if selectors.len() > 1
                && selectors
                    .iter()
                    .any(|s| matches!(s, HabitSelector::Name(_))) =>
        {
            let name = inputs
                .iter()
                .map(|s| s.as_ref())
                .collect::<Vec<&str>>()
                .join(" ");
            Ok(vec![HabitSelector::Name(name)])
        }
        other => other,
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
