use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::habit_store::HabitStore;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut HabitStore<S>, name: &str) -> Result<CmdResult> {
    let mut mutation = store.add(name)?;
    let mut result = CmdResult::default();

    result.add_message(CmdMessage::success(format!(
        "Habit added: {}",
        mutation.value.name
    )));
    result.absorb_persist_error(&mut mutation);
    Ok(result.with_affected_habits(vec![mutation.value]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HabitzError;
    use crate::store::memory::fixtures::KEY;
    use crate::store::memory::InMemoryStore;

    fn empty_store() -> HabitStore<InMemoryStore> {
        HabitStore::load(InMemoryStore::new().with_slot(KEY, "[]"), KEY)
    }

    #[test]
    fn adds_trimmed_habit() {
        let mut store = empty_store();
        let result = run(&mut store, "  Stretch ").unwrap();

        assert_eq!(result.affected_habits.len(), 1);
        assert_eq!(result.affected_habits[0].name, "Stretch");
        assert_eq!(store.habits().len(), 1);
        assert!(result.storage_error.is_none());
    }

    #[test]
    fn empty_name_is_an_error() {
        let mut store = empty_store();
        let err = run(&mut store, "   ").unwrap_err();
        assert!(matches!(err, HabitzError::EmptyName));
        assert!(store.habits().is_empty());
    }

    #[test]
    fn storage_failure_is_a_warning() {
        let mut store = empty_store();
        store.backend_mut().set_fail_writes(true);

        let result = run(&mut store, "Stretch").unwrap();

        assert!(result.storage_error.is_some());
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == crate::commands::MessageLevel::Warning));
        assert_eq!(store.habits().len(), 1);
    }
}
