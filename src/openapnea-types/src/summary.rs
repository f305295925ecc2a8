use std::fmt::Display;

use chrono::NaiveDate;

/// Column headers of a summary row, in output order.
pub const SUMMARY_HEADERS: [&str; 7] = [
    "Date",
    "Monitoring Time (hrs)",
    "Mean SpO2",
    "Min SpO2",
    "Total Desaturations",
    "ODI (events/hr)",
    "Estimated AHI (events/hr)",
];

/// Per-upload summary. Field order matches [`SUMMARY_HEADERS`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Monitoring Time (hrs)")]
    pub monitoring_hours: f64,
    #[serde(rename = "Mean SpO2")]
    pub mean_spo2: f64,
    #[serde(rename = "Min SpO2")]
    pub min_spo2: f64,
    #[serde(rename = "Total Desaturations")]
    pub desaturation_count: u64,
    #[serde(rename = "ODI (events/hr)")]
    pub odi: f64,
    #[serde(rename = "Estimated AHI (events/hr)")]
    pub ahi: f64,
}

impl Display for SummaryRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values = [
            self.date.to_string(),
            self.monitoring_hours.to_string(),
            self.mean_spo2.to_string(),
            self.min_spo2.to_string(),
            self.desaturation_count.to_string(),
            self.odi.to_string(),
            self.ahi.to_string(),
        ];

        for (i, (header, value)) in SUMMARY_HEADERS.iter().zip(values).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{header}: {value}")?;
        }
        Ok(())
    }
}

/// Where ODI and AHI come from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum IndexSource {
    /// ODI from the desaturation count, AHI as a fixed fraction of ODI.
    #[default]
    Estimated,
    /// Values entered by the user, e.g. from a sleep lab report.
    Supplied { ahi: f64, odi: f64 },
}

impl IndexSource {
    pub fn ahi_label(&self) -> &'static str {
        match self {
            IndexSource::Estimated => "estimated",
            IndexSource::Supplied { .. } => "supplied",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_header_matches_column_order() {
        let record = SummaryRecord {
            date: NaiveDate::from_ymd_opt(2024, 4, 3).unwrap(),
            monitoring_hours: 7.5,
            mean_spo2: 95.2,
            min_spo2: 86.0,
            desaturation_count: 12,
            odi: 1.6,
            ahi: 1.2,
        };

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(record).unwrap();
        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let mut lines = text.lines();

        assert_eq!(lines.next().unwrap(), SUMMARY_HEADERS.join(","));
        assert_eq!(lines.next().unwrap(), "2024-04-03,7.5,95.2,86.0,12,1.6,1.2");
    }

    #[test]
    fn display_lists_fields_in_order() {
        let record = SummaryRecord {
            date: NaiveDate::from_ymd_opt(2024, 4, 3).unwrap(),
            monitoring_hours: 0.1,
            mean_spo2: 96.0,
            min_spo2: 96.0,
            desaturation_count: 0,
            odi: 0.0,
            ahi: 0.0,
        };

        let text = record.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Date: 2024-04-03");
        assert_eq!(lines[1], "Monitoring Time (hrs): 0.1");
        assert_eq!(lines[6], "Estimated AHI (events/hr): 0");
    }

    #[test]
    fn ahi_label_reflects_source() {
        assert_eq!(IndexSource::default().ahi_label(), "estimated");
        let supplied = IndexSource::Supplied { ahi: 4.0, odi: 5.0 };
        assert_eq!(supplied.ahi_label(), "supplied");
    }
}
