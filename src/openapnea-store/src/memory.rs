use std::cell::RefCell;

use openapnea_types::history::HistoryLedger;

use crate::{read_history, write_history, HistoryStorage, StorageError};

/// Keeps the encoded ledger in memory, using the same CSV encoding as
/// [`CsvHistoryFile`](crate::CsvHistoryFile).
#[derive(Debug, Default)]
pub struct MemoryHistory {
    contents: RefCell<Option<Vec<u8>>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: RefCell::new(Some(contents.into())),
        }
    }

    /// Encoded ledger as last persisted, `None` before the first write.
    pub fn contents(&self) -> Option<Vec<u8>> {
        self.contents.borrow().clone()
    }
}

impl HistoryStorage for MemoryHistory {
    fn load(&self) -> Result<HistoryLedger, StorageError> {
        match self.contents.borrow().as_deref() {
            Some(bytes) => read_history(bytes),
            None => Ok(HistoryLedger::new()),
        }
    }

    fn persist(&self, ledger: &HistoryLedger) -> Result<(), StorageError> {
        let mut bytes = Vec::new();
        write_history(ledger, &mut bytes)?;
        self.contents.replace(Some(bytes));
        Ok(())
    }
}
