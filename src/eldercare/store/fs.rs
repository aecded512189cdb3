use super::Storage;
use crate::error::{CareError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "elderly_data.txt";

/// Keeps the record set in one plain text file.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(CareError::Io)?;
            }
        }
        Ok(())
    }
}

impl Storage for FileStorage {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CareError::Io(e)),
        }
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        self.ensure_parent()?;
        fs::write(&self.path, contents).map_err(CareError::Io)?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
