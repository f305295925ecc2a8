use openapnea_types::readings::Reading;

/// Counts single-step saturation drops between consecutive readings.
///
/// A reading counts as a desaturation when it sits at least
/// [`DROP_THRESHOLD`](Self::DROP_THRESHOLD) points below the reading right
/// before it. There is no windowing and no recovery tracking, so a slow
/// slide of 1 point per sample never counts while a noisy signal may count
/// several times within one physiological event.
pub struct DesaturationDetector;

impl DesaturationDetector {
    pub const DROP_THRESHOLD: f64 = 3.0;

    /// `readings` must already be in time order.
    pub fn count(readings: &[Reading]) -> u64 {
        readings
            .windows(2)
            .filter(|w| w[1].spo2 - w[0].spo2 <= -Self::DROP_THRESHOLD)
            .count() as u64
    }
}
