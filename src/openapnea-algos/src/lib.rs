pub(crate) mod desaturation;
pub use desaturation::DesaturationDetector;

pub(crate) mod summary;
pub use summary::{compute_summary, SummaryCalculator};

pub mod helpers;
