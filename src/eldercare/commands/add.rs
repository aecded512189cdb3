use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewRecord;
use crate::store::RecordStore;
use log::debug;

pub fn run(store: &mut RecordStore, fields: NewRecord) -> Result<CmdResult> {
    fields.validate()?;
    let id = store.add(fields)?;
    debug!("added record {}", id);

    let mut result = CmdResult::default();
    if let Some(record) = store.find_by_id(id) {
        result.affected_records.push(record.clone());
    }
    result.add_message(CmdMessage::success(format!(
        "Record added with ID: {}",
        id
    )));
    Ok(result)
}
