use chrono::NaiveDate;

use crate::summary::SummaryRecord;

/// Summaries across uploads, one per date, ascending by date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryLedger {
    records: Vec<SummaryRecord>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger by upserting `records` in order, so a later row wins
    /// over an earlier one with the same date.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = SummaryRecord>,
    {
        records
            .into_iter()
            .fold(Self::default(), |ledger, record| ledger.upsert(record))
    }

    /// Inserts `record`, replacing any record with the same date.
    pub fn upsert(mut self, record: SummaryRecord) -> Self {
        self.records.retain(|r| r.date != record.date);
        self.records.push(record);
        self.records.sort_by_key(|r| r.date);
        self
    }

    pub fn get(&self, date: NaiveDate) -> Option<&SummaryRecord> {
        self.records
            .binary_search_by_key(&date, |r| r.date)
            .ok()
            .map(|i| &self.records[i])
    }

    pub fn records(&self) -> &[SummaryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SummaryRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a HistoryLedger {
    type Item = &'a SummaryRecord;
    type IntoIter = std::slice::Iter<'a, SummaryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
