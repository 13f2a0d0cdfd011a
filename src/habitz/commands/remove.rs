use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::habit_store::HabitStore;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut HabitStore<S>, ids: &[i64]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        let mut mutation = store.remove(id);
        result.absorb_persist_error(&mut mutation);

        match mutation.value {
            Some(habit) => {
                result.add_message(CmdMessage::success(format!(
                    "Habit removed: {}",
                    habit.name
                )));
                result.affected_habits.push(habit);
            }
            None => result.add_message(CmdMessage::info(format!(
                "No habit with id #{}; nothing to remove.",
                id
            ))),
        }
    }

    Ok(result)
}
