use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Habit;

pub fn run(records: &[Habit]) -> Result<CmdResult> {
    Ok(CmdResult::default().with_stats(crate::stats::stats(records)))
}
