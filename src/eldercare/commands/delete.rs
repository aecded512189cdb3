use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;
use log::debug;

pub fn run(store: &mut RecordStore, id: u32) -> Result<CmdResult> {
    let removed = store.delete(id)?;
    debug!("deleted record {}", id);

    Ok(CmdResult::default()
        .with_affected_records(vec![removed])
        .with_message(CmdMessage::success(format!(
            "Record with ID {} deleted.",
            id
        ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::error::CareError;
    use crate::model::NewRecord;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_record_and_keeps_counter() {
        let mut fixture = StoreFixture::new().with_records(2);
        run(&mut fixture.store, 1000).unwrap();

        assert_eq!(fixture.store.len(), 1);
        let added = add::run(&mut fixture.store, NewRecord::new("New", 70, "", "", "")).unwrap();
        assert_eq!(added.affected_records[0].id, 1002);
    }

    #[test]
    fn second_delete_is_not_found() {
        let mut fixture = StoreFixture::new().with_records(1);
        run(&mut fixture.store, 1000).unwrap();
        assert!(matches!(
            run(&mut fixture.store, 1000),
            Err(CareError::RecordNotFound(1000))
        ));
    }
}
