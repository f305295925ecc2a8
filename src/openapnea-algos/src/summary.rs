use openapnea_types::{
    readings::ReadingSeries,
    summary::{IndexSource, SummaryRecord},
};

use crate::{
    helpers::math::{mean, min, round_to},
    DesaturationDetector,
};

pub struct SummaryCalculator;

impl SummaryCalculator {
    /// Lower bound on monitoring time so ODI stays finite.
    pub const MIN_DURATION_HOURS: f64 = 0.1;
    /// Heuristic AHI/ODI ratio. Not a validated clinical constant.
    pub const AHI_PER_ODI: f64 = 0.75;

    pub fn calculate(series: &ReadingSeries, source: IndexSource) -> SummaryRecord {
        let spo2: Vec<f64> = series.iter().map(|r| r.spo2).collect();
        let desaturation_count = DesaturationDetector::count(series.readings());
        let hours = Self::duration_hours(series);

        let (odi, ahi) = match source {
            IndexSource::Estimated => {
                let odi = round_to(desaturation_count as f64 / hours, 2);
                (odi, round_to(odi * Self::AHI_PER_ODI, 2))
            }
            IndexSource::Supplied { ahi, odi } => (round_to(odi, 2), round_to(ahi, 2)),
        };

        SummaryRecord {
            date: series.date(),
            monitoring_hours: round_to(hours, 2),
            mean_spo2: round_to(mean(&spo2), 1),
            min_spo2: min(&spo2).unwrap_or(series.first().spo2),
            desaturation_count,
            odi,
            ahi,
        }
    }

    /// Span between first and last reading in hours, floored at
    /// [`MIN_DURATION_HOURS`](Self::MIN_DURATION_HOURS).
    pub fn duration_hours(series: &ReadingSeries) -> f64 {
        let seconds = series.duration().num_milliseconds() as f64 / 1000.0;
        (seconds / 3600.0).max(Self::MIN_DURATION_HOURS)
    }
}

pub fn compute_summary(series: &ReadingSeries, source: IndexSource) -> SummaryRecord {
    SummaryCalculator::calculate(series, source)
}
