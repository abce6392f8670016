use chrono::{Datelike, Timelike};

use crate::models::mood::MoodSample;

/// A sample plus the features the classifier works on.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedSample<'a> {
    pub sample: &'a MoodSample,
    /// 0–23, wall clock of the sample's own offset.
    pub hour: u32,
    /// 0 = Monday … 6 = Sunday.
    pub day_of_week: u32,
    pub is_weekend: bool,
    /// |mood − previous mood| in input order. `None` for the first sample.
    pub mood_change: Option<f64>,
}

impl ProcessedSample<'_> {
    pub fn mood_value(&self) -> f64 {
        self.sample.mood_value
    }

    pub fn notes(&self) -> &str {
        &self.sample.notes
    }
}

/// Derives per-sample features. Order is preserved; no sorting by timestamp.
pub fn preprocess(samples: &[MoodSample]) -> Vec<ProcessedSample<'_>> {
    let mut previous: Option<f64> = None;

    samples
        .iter()
        .map(|sample| {
            let day_of_week = sample.timestamp.weekday().num_days_from_monday();
            let mood_change = previous.map(|prev| (sample.mood_value - prev).abs());
            previous = Some(sample.mood_value);

            ProcessedSample {
                sample,
                hour: sample.timestamp.hour(),
                day_of_week,
                is_weekend: day_of_week >= 5,
                mood_change,
            }
        })
        .collect()
}
