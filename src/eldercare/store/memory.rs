use super::Storage;
use crate::error::Result;

/// In-memory storage for testing. Nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    contents: Option<String>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with previously "saved" text, as if a file already existed.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Storage for InMemoryStorage {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        self.contents = Some(contents.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::NewRecord;
    use crate::store::RecordStore;

    pub struct StoreFixture {
        pub store: RecordStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: RecordStore::new(),
            }
        }

        pub fn with_records(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store.add(NewRecord::new(
                    format!("Resident {}", i + 1),
                    65 + i as u32,
                    format!("{} Main St", i + 1),
                    "weekly check-in",
                    format!("555-01{:02}", i),
                ))
                .expect("fixture ids fit the counter");
            }
            self
        }

        pub fn with_record(mut self, name: &str, age: u32) -> Self {
            self.store
                .add(NewRecord::new(name, age, "1 Main St", "meals", "555-0000"))
                .expect("fixture ids fit the counter");
            self
        }
    }
}
