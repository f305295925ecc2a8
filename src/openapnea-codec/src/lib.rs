mod columns;
pub use columns::ColumnNames;

mod error;
pub use error::ParseError;

mod normalize;
pub use normalize::{normalize, normalize_with_report, NormalizeReport};

mod export;
pub use export::{write_series, write_summary};

pub mod timestamp;
