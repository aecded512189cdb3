use crate::codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, Storage};
use log::debug;

pub struct LoadOutcome {
    pub result: CmdResult,
    /// False when nothing was saved yet and the store was left alone.
    pub replaced: bool,
}

/// Replaces the store with whatever `storage` holds.
///
/// When nothing has been saved yet the store is left as it is.
pub fn run<S: Storage>(store: &mut RecordStore, storage: &S) -> Result<LoadOutcome> {
    let Some(text) = storage.read()? else {
        let result = CmdResult::default().with_message(CmdMessage::info(format!(
            "No saved data file found ('{}'). Starting fresh.",
            storage.location()
        )));
        return Ok(LoadOutcome {
            result,
            replaced: false,
        });
    };

    let decoded = codec::decode(&text);
    store.replace_all(decoded.next_id, decoded.records);
    debug!(
        "loaded {} records from {} (next id {}, skipped {})",
        store.len(),
        storage.location(),
        store.next_id(),
        decoded.skipped
    );

    let mut result = CmdResult::default();
    if decoded.skipped > 0 {
        result.add_message(CmdMessage::warning(format!(
            "Skipped {} malformed line(s).",
            decoded.skipped
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Data loaded from '{}'.",
        storage.location()
    )));
    Ok(LoadOutcome {
        result,
        replaced: true,
    })
}
