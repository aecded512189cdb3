use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecordPatch;
use crate::store::RecordStore;
use log::debug;

pub fn run(store: &mut RecordStore, id: u32, patch: &RecordPatch) -> Result<CmdResult> {
    patch.validate()?;
    let record = store.update(id, patch)?.clone();
    debug!("updated record {}", id);

    Ok(CmdResult::default()
        .with_affected_records(vec![record])
        .with_message(CmdMessage::success("Record updated.")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CareError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn changes_only_supplied_fields() {
        let mut fixture = StoreFixture::new().with_record("Alice Smith", 80);
        let patch = RecordPatch {
            age: Some(81),
            ..Default::default()
        };
        let result = run(&mut fixture.store, 1000, &patch).unwrap();

        let record = &result.affected_records[0];
        assert_eq!(record.age, 81);
        assert_eq!(record.name, "Alice Smith");
        assert_eq!(record.contact, "555-0000");
    }

    #[test]
    fn rejects_delimiter_before_touching_record() {
        let mut fixture = StoreFixture::new().with_record("Alice Smith", 80);
        let patch = RecordPatch {
            name: Some("Alice|Smith".into()),
            age: Some(99),
            ..Default::default()
        };
        assert!(matches!(
            run(&mut fixture.store, 1000, &patch),
            Err(CareError::Validation(_))
        ));
        assert_eq!(fixture.store.find_by_id(1000).unwrap().age, 80);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut fixture = StoreFixture::new();
        assert!(matches!(
            run(&mut fixture.store, 1000, &RecordPatch::default()),
            Err(CareError::RecordNotFound(1000))
        ));
    }
}
