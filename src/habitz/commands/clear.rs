use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::habit_store::HabitStore;
use crate::store::DataStore;

/// Remove every completed habit.
pub fn run<S: DataStore>(store: &mut HabitStore<S>) -> Result<CmdResult> {
    let mut mutation = store.clear_completed();
    let mut result = CmdResult::default();

    if mutation.value.is_empty() {
        result.add_message(CmdMessage::info("No completed habits to clear."));
        return Ok(result);
    }

    result.absorb_persist_error(&mut mutation);
    let noun = if mutation.value.len() == 1 {
        "habit"
    } else {
        "habits"
    };
    result.add_message(CmdMessage::success(format!(
        "Cleared {} completed {}.",
        mutation.value.len(),
        noun
    )));
    Ok(result.with_affected_habits(mutation.value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{StoreFixture, KEY};

    #[test]
    fn clears_completed_only() {
        let backend = StoreFixture::new()
            .with_completed(1, "Reading", 1)
            .with_pending(2, "Exercise", 2)
            .build();
        let mut store = HabitStore::load(backend, KEY);

        let result = run(&mut store).unwrap();

        assert_eq!(result.affected_habits.len(), 1);
        assert_eq!(result.messages[0].content, "Cleared 1 completed habit.");
        assert_eq!(store.habits().len(), 1);
        assert!(!store.habits()[0].completed);
    }

    #[test]
    fn nothing_to_clear_is_informational() {
        let backend = StoreFixture::new().with_pending(1, "Reading", 1).build();
        let mut store = HabitStore::load(backend, KEY);

        let result = run(&mut store).unwrap();

        assert!(result.affected_habits.is_empty());
        assert_eq!(result.messages[0].content, "No completed habits to clear.");
    }
}
