use crate::commands::CmdResult;
use crate::error::{CareError, Result};
use crate::store::RecordStore;

pub fn run(store: &RecordStore, id: u32) -> Result<CmdResult> {
    let record = store.find_by_id(id).ok_or(CareError::RecordNotFound(id))?;
    Ok(CmdResult::default().with_listed_records(vec![record.clone()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn finds_record_by_id() {
        let fixture = StoreFixture::new().with_records(2);
        let result = run(&fixture.store, 1001).unwrap();
        assert_eq!(result.listed_records[0].name, "Resident 2");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let fixture = StoreFixture::new().with_records(2);
        let err = run(&fixture.store, 999).unwrap_err();
        assert_eq!(err.to_string(), "No record with ID 999 found.");
    }
}
