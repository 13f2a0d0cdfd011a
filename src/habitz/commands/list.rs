use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{position_view, positioned_habits};
use crate::model::{Habit, SortMode, ViewState};
use crate::query;
use crate::stats::stats;

/// Derive the current view plus the stats for the whole list.
///
/// Rows carry their position in `position_sort` order over all records, so a
/// searched or filtered listing prints the same numbers selectors resolve to.
pub fn run(records: &[Habit], state: &ViewState, position_sort: SortMode) -> Result<CmdResult> {
    let positions = positioned_habits(records, position_sort);
    let view = query::view(records, state);
    Ok(CmdResult::default()
        .with_listed_habits(position_view(view.habits, &positions), view.total)
        .with_stats(stats(records)))
}
