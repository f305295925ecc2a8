use std::borrow::Cow;

use csv::{ByteRecord, ReaderBuilder, Trim};
use log::debug;
use openapnea_types::readings::{Reading, ReadingSeries};

use crate::{timestamp::parse_timestamp, ColumnNames, ParseError};

/// Row accounting for one normalization run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    pub rows_read: usize,
    pub rows_kept: usize,
    /// Rows whose saturation cell was empty, non-numeric or non-finite.
    pub missing_spo2: usize,
    /// Rows whose timestamp cell could not be parsed.
    pub missing_time: usize,
    /// Kept rows without a usable pulse value.
    pub missing_pulse: usize,
}

impl NormalizeReport {
    pub fn rows_dropped(&self) -> usize {
        self.rows_read - self.rows_kept
    }
}

/// Parses raw CSV bytes into a cleaned, time ordered series.
pub fn normalize(bytes: &[u8], columns: &ColumnNames) -> Result<ReadingSeries, ParseError> {
    normalize_with_report(bytes, columns).map(|(series, _)| series)
}

pub fn normalize_with_report(
    bytes: &[u8],
    columns: &ColumnNames,
) -> Result<(ReadingSeries, NormalizeReport), ParseError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(bytes);

    let [time_idx, spo2_idx, pulse_idx] = column_indices(reader.byte_headers()?, columns)?;

    let mut report = NormalizeReport::default();
    let mut readings = Vec::new();

    for record in reader.byte_records() {
        let record = record?;
        report.rows_read += 1;

        let time = cell(&record, time_idx).and_then(|c| parse_timestamp(&c));
        let spo2 = cell(&record, spo2_idx).and_then(|c| parse_number(&c));
        let pulse = cell(&record, pulse_idx).and_then(|c| parse_number(&c));

        if spo2.is_none() {
            report.missing_spo2 += 1;
        }
        if time.is_none() {
            report.missing_time += 1;
        }

        let (Some(time), Some(spo2)) = (time, spo2) else {
            continue;
        };

        if pulse.is_none() {
            report.missing_pulse += 1;
        }

        readings.push(Reading { time, spo2, pulse });
    }

    report.rows_kept = readings.len();
    debug!(
        "Normalized {} rows: kept {}, missing spo2 {}, missing time {}, missing pulse {}",
        report.rows_read,
        report.rows_kept,
        report.missing_spo2,
        report.missing_time,
        report.missing_pulse
    );

    let series = ReadingSeries::new(readings).ok_or(ParseError::EmptySeries)?;
    Ok((series, report))
}

fn column_indices(headers: &ByteRecord, columns: &ColumnNames) -> Result<[usize; 3], ParseError> {
    let find = |name: &str| {
        headers
            .iter()
            .position(|header| String::from_utf8_lossy(header).trim() == name.trim())
    };

    let names = columns.as_array();
    let found = names.map(find);

    let missing: Vec<String> = names
        .iter()
        .zip(found.iter())
        .filter(|(_, index)| index.is_none())
        .map(|(name, _)| name.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(ParseError::Schema { missing });
    }

    Ok(found.map(|index| index.unwrap_or_default()))
}

fn cell(record: &ByteRecord, index: usize) -> Option<Cow<'_, str>> {
    record.get(index).map(String::from_utf8_lossy)
}

fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}
