use crate::model::Habit;
use serde::Serialize;

/// Completion summary for a list of habits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HabitStats {
    pub total: usize,
    pub completed: usize,
    /// Whole-number completion rate, 0 for an empty list.
    pub percent: u8,
}

impl HabitStats {
    pub fn pending(&self) -> usize {
        self.total - self.completed
    }
}

/// Counts and completion rate. Rounds half away from zero (`f64::round`).
pub fn stats(records: &[Habit]) -> HabitStats {
    let total = records.len();
    let completed = records.iter().filter(|h| h.completed).count();
    let percent = if total == 0 {
        0
    } else {
        (completed as f64 / total as f64 * 100.0).round() as u8
    };

    HabitStats {
        total,
        completed,
        percent,
    }
}
