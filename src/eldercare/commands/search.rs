use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

pub fn run(store: &RecordStore, query: &str) -> Result<CmdResult> {
    let matches: Vec<_> = store
        .find_by_name(query)?
        .into_iter()
        .cloned()
        .collect();

    let result = CmdResult::default().with_listed_records(matches);
    if result.listed_records.is_empty() {
        return Ok(result.with_message(CmdMessage::info(format!(
            "No records match '{}'.",
            query.trim()
        ))));
    }
    Ok(result)
}
