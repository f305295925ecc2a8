use log::info;
use openapnea_types::{history::HistoryLedger, summary::SummaryRecord};

use crate::{HistoryStorage, StorageError};

/// Upsert-by-date access to a ledger behind a storage handle.
pub struct HistoryStore<S> {
    storage: S,
}

impl<S> HistoryStore<S>
where
    S: HistoryStorage,
{
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn load(&self) -> Result<HistoryLedger, StorageError> {
        self.storage.load()
    }

    pub fn persist(&self, ledger: &HistoryLedger) -> Result<(), StorageError> {
        self.storage.persist(ledger)
    }

    /// Loads the ledger, replaces the entry for `record.date` and writes the
    /// result back. Nothing is written when loading fails.
    pub fn upsert(&self, record: SummaryRecord) -> Result<HistoryLedger, StorageError> {
        let ledger = self.storage.load()?.upsert(record);
        self.storage.persist(&ledger)?;
        info!(
            "Stored summary for {}, history holds {} day(s)",
            record.date,
            ledger.len()
        );
        Ok(ledger)
    }
}
