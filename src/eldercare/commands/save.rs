use crate::codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, Storage};
use log::debug;

pub fn run<S: Storage>(store: &RecordStore, storage: &mut S) -> Result<CmdResult> {
    storage.write(&codec::encode(store))?;
    debug!(
        "saved {} records to {} (next id {})",
        store.len(),
        storage.location(),
        store.next_id()
    );

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Data saved to '{}'.",
        storage.location()
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStorage;

    #[test]
    fn writes_encoded_store() {
        let fixture = StoreFixture::new().with_record("Alice Smith", 80);
        let mut storage = InMemoryStorage::new();

        let result = run(&fixture.store, &mut storage).unwrap();
        assert_eq!(
            storage.contents(),
            Some("1001\n1000|Alice Smith|80|1 Main St|meals|555-0000\n")
        );
        assert_eq!(result.messages[0].content, "Data saved to '<memory>'.");
    }
}
