//! # Storage Layer
//!
//! Two halves live here:
//!
//! - [`RecordStore`]: the in-memory, ordered record list and its issuance
//!   counter. Every CRUD operation works against it.
//! - [`Storage`]: where the encoded record set is kept between runs. The
//!   store never touches it directly; the `save`/`load` commands move text
//!   between the two through [`crate::codec`].
//!
//! ## Implementations
//!
//! - [`fs::FileStorage`]: a single pipe-delimited text file (production).
//! - [`memory::InMemoryStorage`]: a string slot, for tests.
//!
//! ## Ids
//!
//! Ids come from a monotonic counter that starts at [`ID_FLOOR`]. Deleting a
//! record never rewinds the counter, so an id is never handed out twice.

use crate::error::{CareError, Result};
use crate::model::{NewRecord, Record, RecordPatch};

pub mod fs;
pub mod memory;

/// First id issued by an empty store, and the lowest counter a load accepts.
pub const ID_FLOOR: u32 = 1000;

#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<Record>,
    next_id: u32,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: ID_FLOOR,
        }
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record under the next id and returns that id.
    ///
    /// Fails without touching the store once the counter cannot advance.
    pub fn add(&mut self, fields: NewRecord) -> Result<u32> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(CareError::IdsExhausted)?;
        self.records.push(Record::new(id, fields));
        Ok(id)
    }

    pub fn list(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Case-insensitive substring search on the name, in collection order.
    pub fn find_by_name(&self, query: &str) -> Result<Vec<&Record>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CareError::EmptyQuery);
        }
        let needle = query.to_lowercase();
        Ok(self
            .records
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .collect())
    }

    pub fn update(&mut self, id: u32, patch: &RecordPatch) -> Result<&Record> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(CareError::RecordNotFound(id))?;
        patch.apply(record);
        Ok(&*record)
    }

    pub fn delete(&mut self, id: u32) -> Result<Record> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(CareError::RecordNotFound(id))?;
        Ok(self.records.remove(pos))
    }

    /// Drops the current contents and installs a loaded record set.
    ///
    /// The counter becomes `max(ID_FLOOR, next_id, highest id + 1)`.
    pub fn replace_all(&mut self, next_id: u32, records: Vec<Record>) {
        let after_highest = records
            .iter()
            .map(|r| r.id.saturating_add(1))
            .max()
            .unwrap_or(ID_FLOOR);
        self.next_id = next_id.max(after_highest).max(ID_FLOOR);
        self.records = records;
    }
}

/// Persistent home for the encoded record set.
pub trait Storage {
    /// Returns the stored text, or `None` when nothing has been saved yet.
    fn read(&self) -> Result<Option<String>>;

    /// Replaces the stored text.
    fn write(&mut self, contents: &str) -> Result<()>;

    /// Human readable location, used in messages.
    fn location(&self) -> String;
}
