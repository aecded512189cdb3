use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

pub fn run(store: &RecordStore) -> Result<CmdResult> {
    let result = CmdResult::default().with_listed_records(store.list().to_vec());
    if result.listed_records.is_empty() {
        return Ok(result.with_message(CmdMessage::info("No records found.")));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn empty_store_is_not_an_error() {
        let store = RecordStore::new();
        let result = run(&store).unwrap();
        assert!(result.listed_records.is_empty());
        assert_eq!(result.messages[0].content, "No records found.");
    }

    #[test]
    fn lists_in_insertion_order() {
        let fixture = StoreFixture::new().with_records(3);
        let result = run(&fixture.store).unwrap();
        let ids: Vec<u32> = result.listed_records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1000, 1001, 1002]);
        assert!(result.messages.is_empty());
    }
}
