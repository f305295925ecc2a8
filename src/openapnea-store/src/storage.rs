use std::io::{Read, Write};

use csv::{ReaderBuilder, Trim, WriterBuilder};
use openapnea_types::{
    history::HistoryLedger,
    summary::{SummaryRecord, SUMMARY_HEADERS},
};

use crate::StorageError;

/// Backing store for the history ledger. Reads and writes are wholesale.
pub trait HistoryStorage {
    /// Returns the stored ledger, or an empty one when nothing was stored yet.
    fn load(&self) -> Result<HistoryLedger, StorageError>;

    /// Replaces the stored ledger.
    fn persist(&self, ledger: &HistoryLedger) -> Result<(), StorageError>;
}

impl<T> HistoryStorage for Box<T>
where
    T: HistoryStorage + ?Sized,
{
    fn load(&self) -> Result<HistoryLedger, StorageError> {
        (**self).load()
    }

    fn persist(&self, ledger: &HistoryLedger) -> Result<(), StorageError> {
        (**self).persist(ledger)
    }
}

/// Header row plus one row per record. The header is written for an empty
/// ledger too.
pub fn write_history<W: Write>(ledger: &HistoryLedger, writer: W) -> Result<(), StorageError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(SUMMARY_HEADERS)?;
    for record in ledger {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Rows are matched to fields by header name. Duplicate dates resolve to
/// the last row.
pub fn read_history<R: Read>(reader: R) -> Result<HistoryLedger, StorageError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    // deserialize() swallows header read errors
    reader.headers()?;
    let records = reader
        .deserialize::<SummaryRecord>()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HistoryLedger::from_records(records))
}
