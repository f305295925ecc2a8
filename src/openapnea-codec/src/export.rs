use std::io::Write;

use csv::WriterBuilder;
use openapnea_types::{readings::ReadingSeries, summary::SummaryRecord};

use crate::ColumnNames;

const SERIES_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes the cleaned series as CSV under the given column headers.
/// Missing pulse values become empty cells.
pub fn write_series<W: Write>(
    series: &ReadingSeries,
    columns: &ColumnNames,
    writer: W,
) -> Result<(), csv::Error> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(columns.as_array())?;

    for reading in series {
        writer.serialize((
            reading.time.format(SERIES_TIME_FORMAT).to_string(),
            reading.spo2,
            reading.pulse,
        ))?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes a single summary as a one-row CSV with a header.
pub fn write_summary<W: Write>(record: &SummaryRecord, writer: W) -> Result<(), csv::Error> {
    let mut writer = WriterBuilder::new().from_writer(writer);
    writer.serialize(record)?;
    writer.flush()?;
    Ok(())
}
