//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! record operation, whichever UI drives it (menu shell or one-shot commands).
//!
//! `CareApi` owns the in-memory [`RecordStore`] and a [`Storage`] backend, and
//! remembers whether the store has changed since it was last saved or loaded.
//! It returns structured [`CmdResult`]s and never prints.
//!
//! ## Generic Over Storage
//!
//! - Production: `CareApi<FileStorage>`
//! - Testing: `CareApi<InMemoryStorage>`

use crate::commands;
use crate::error::Result;
use crate::model::{NewRecord, RecordPatch};
use crate::store::{RecordStore, Storage};
use std::path::PathBuf;

pub struct CareApi<S: Storage> {
    store: RecordStore,
    storage: S,
    config_dir: PathBuf,
    dirty: bool,
}

impl<S: Storage> CareApi<S> {
    pub fn new(storage: S, config_dir: PathBuf) -> Self {
        Self {
            store: RecordStore::new(),
            storage,
            config_dir,
            dirty: false,
        }
    }

    pub fn add_record(&mut self, fields: NewRecord) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.store, fields)?;
        self.dirty = true;
        Ok(result)
    }

    pub fn list_records(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_record(&self, id: u32) -> Result<CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn search_records(&self, query: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, query)
    }

    pub fn update_record(&mut self, id: u32, patch: &RecordPatch) -> Result<CmdResult> {
        let result = commands::update::run(&mut self.store, id, patch)?;
        self.dirty = true;
        Ok(result)
    }

    pub fn delete_record(&mut self, id: u32) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.store, id)?;
        self.dirty = true;
        Ok(result)
    }

    pub fn save(&mut self) -> Result<CmdResult> {
        let result = commands::save::run(&self.store, &mut self.storage)?;
        self.dirty = false;
        Ok(result)
    }

    pub fn load(&mut self) -> Result<CmdResult> {
        let outcome = commands::load::run(&mut self.store, &self.storage)?;
        if outcome.replaced {
            self.dirty = false;
        }
        Ok(outcome.result)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
