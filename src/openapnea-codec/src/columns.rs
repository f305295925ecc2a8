/// Header names of the three required input columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    pub time: String,
    pub spo2: String,
    pub pulse: String,
}

impl ColumnNames {
    pub const DEFAULT_TIME: &str = "Time";
    pub const DEFAULT_SPO2: &str = "Oxygen Level";
    pub const DEFAULT_PULSE: &str = "Pulse Rate";

    pub fn new(time: impl Into<String>, spo2: impl Into<String>, pulse: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            spo2: spo2.into(),
            pulse: pulse.into(),
        }
    }

    pub(crate) fn as_array(&self) -> [&str; 3] {
        [&self.time, &self.spo2, &self.pulse].map(String::as_str)
    }
}

/// O2Ring export headers.
impl Default for ColumnNames {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TIME, Self::DEFAULT_SPO2, Self::DEFAULT_PULSE)
    }
}
