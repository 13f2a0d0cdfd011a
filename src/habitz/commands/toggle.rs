use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::habit_store::HabitStore;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut HabitStore<S>, ids: &[i64]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        let mut mutation = store.toggle(id);
        result.absorb_persist_error(&mut mutation);

        match mutation.value {
            Some(habit) => {
                let verb = if habit.completed {
                    "completed"
                } else {
                    "marked pending"
                };
                result.add_message(CmdMessage::success(format!(
                    "Habit {}: {}",
                    verb, habit.name
                )));
                result.affected_habits.push(habit);
            }
            None => result.add_message(CmdMessage::info(format!(
                "No habit with id #{}; nothing to toggle.",
                id
            ))),
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{StoreFixture, KEY};

    #[test]
    fn toggles_each_id_once() {
        let backend = StoreFixture::new()
            .with_pending(1, "Reading", 1)
            .with_completed(2, "Exercise", 2)
            .build();
        let mut store = HabitStore::load(backend, KEY);

        let result = run(&mut store, &[1, 2]).unwrap();

        assert_eq!(result.affected_habits.len(), 2);
        assert!(store.get(1).unwrap().completed);
        assert!(!store.get(2).unwrap().completed);
    }

    #[test]
    fn unknown_id_is_reported_not_failed() {
        let backend = StoreFixture::new().with_pending(1, "Reading", 1).build();
        let mut store = HabitStore::load(backend, KEY);

        let result = run(&mut store, &[404]).unwrap();

        assert!(result.affected_habits.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert!(!store.get(1).unwrap().completed);
    }
}
