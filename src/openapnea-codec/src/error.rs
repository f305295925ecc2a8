use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    /// The header row lacks one or more required columns.
    #[error("missing required column(s): {}", .missing.join(", "))]
    Schema { missing: Vec<String> },
    /// Every row was dropped while cleaning.
    #[error("no valid readings left after cleaning")]
    EmptySeries,
    #[error("unable to read CSV: {0}")]
    Csv(#[from] csv::Error),
}
