use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// One oximeter sample after cleaning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub time: NaiveDateTime,
    /// Oxygen saturation in percent, always finite.
    pub spo2: f64,
    /// Pulse rate in bpm, `None` when the cell was empty or not a number.
    pub pulse: Option<f64>,
}

/// Non-empty, time ordered sequence of readings from a single upload.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingSeries {
    readings: Vec<Reading>,
}

impl ReadingSeries {
    /// Sorts `readings` by time, keeping input order for equal timestamps.
    /// Returns `None` for an empty input.
    pub fn new(mut readings: Vec<Reading>) -> Option<Self> {
        if readings.is_empty() {
            return None;
        }

        readings.sort_by_key(|r| r.time);
        Some(Self { readings })
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn first(&self) -> &Reading {
        &self.readings[0]
    }

    pub fn last(&self) -> &Reading {
        &self.readings[self.readings.len() - 1]
    }

    pub fn duration(&self) -> TimeDelta {
        self.last().time - self.first().time
    }

    /// Calendar date of the earliest reading.
    pub fn date(&self) -> NaiveDate {
        self.first().time.date()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reading> {
        self.readings.iter()
    }
}

impl<'a> IntoIterator for &'a ReadingSeries {
    type Item = &'a Reading;
    type IntoIter = std::slice::Iter<'a, Reading>;

    fn into_iter(self) -> Self::IntoIter {
        self.readings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, 3)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn reading(time: NaiveDateTime, spo2: f64) -> Reading {
        Reading {
            time,
            spo2,
            pulse: None,
        }
    }

    #[test]
    fn empty_series_is_rejected() {
        assert!(ReadingSeries::new(Vec::new()).is_none());
    }

    #[test]
    fn readings_are_sorted_by_time() {
        let series = ReadingSeries::new(vec![
            reading(at(23, 30), 94.0),
            reading(at(22, 0), 97.0),
            reading(at(23, 0), 95.0),
        ])
        .unwrap();

        let times: Vec<_> = series.iter().map(|r| r.time).collect();
        assert_eq!(times, vec![at(22, 0), at(23, 0), at(23, 30)]);
        assert_eq!(series.duration(), TimeDelta::minutes(90));
    }

    #[test]
    fn equal_timestamps_keep_input_order() {
        let series = ReadingSeries::new(vec![
            reading(at(22, 5), 90.0),
            reading(at(22, 0), 96.0),
            reading(at(22, 5), 91.0),
            reading(at(22, 5), 92.0),
        ])
        .unwrap();

        let spo2: Vec<_> = series.iter().map(|r| r.spo2).collect();
        assert_eq!(spo2, vec![96.0, 90.0, 91.0, 92.0]);
    }

    #[test]
    fn date_comes_from_earliest_reading() {
        let next_day = NaiveDate::from_ymd_opt(2024, 4, 4)
            .unwrap()
            .and_hms_opt(1, 0, 0)
            .unwrap();
        let series =
            ReadingSeries::new(vec![reading(next_day, 93.0), reading(at(23, 50), 95.0)]).unwrap();

        assert_eq!(series.date(), NaiveDate::from_ymd_opt(2024, 4, 3).unwrap());
        assert_eq!(series.len(), 2);
    }
}
