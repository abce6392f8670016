use serde::Serialize;

use crate::analysis::preprocess::ProcessedSample;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum WeekdayTrend {
    #[serde(rename = "significantly better on weekends")]
    SignificantlyBetterOnWeekends,
    #[serde(rename = "somewhat better on weekends")]
    SomewhatBetterOnWeekends,
    #[serde(rename = "significantly better on weekdays")]
    SignificantlyBetterOnWeekdays,
    #[serde(rename = "somewhat better on weekdays")]
    SomewhatBetterOnWeekdays,
    #[serde(rename = "consistent throughout the week")]
    Consistent,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum TimeOfDayTrend {
    #[serde(rename = "best in the morning")]
    Morning,
    #[serde(rename = "best in the afternoon")]
    Afternoon,
    #[serde(rename = "best in the evening")]
    Evening,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Volatility {
    #[serde(rename = "highly variable")]
    HighlyVariable,
    #[serde(rename = "moderately variable")]
    ModeratelyVariable,
    #[serde(rename = "relatively stable")]
    RelativelyStable,
}

/// The three labels produced per analysis.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatternResult {
    pub weekday_trend: WeekdayTrend,
    pub time_of_day_trend: TimeOfDayTrend,
    pub volatility: Volatility,
}

pub fn identify_patterns(samples: &[ProcessedSample<'_>]) -> PatternResult {
    PatternResult {
        weekday_trend: classify_weekday_trend(samples),
        time_of_day_trend: classify_time_of_day(samples),
        volatility: classify_volatility(samples),
    }
}

/// Mean of the iterator, `None` when it is empty.
fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}

fn mean_mood(
    samples: &[ProcessedSample<'_>],
    keep: impl Fn(&ProcessedSample<'_>) -> bool,
) -> Option<f64> {
    mean(samples.iter().filter(|&s| keep(s)).map(|s| s.mood_value()))
}

fn classify_weekday_trend(samples: &[ProcessedSample<'_>]) -> WeekdayTrend {
    let weekday_avg = mean_mood(samples, |s| !s.is_weekend);
    let weekend_avg = mean_mood(samples, |s| s.is_weekend);

    // An empty group leaves the comparison undefined.
    let (Some(weekday_avg), Some(weekend_avg)) = (weekday_avg, weekend_avg) else {
        return WeekdayTrend::Consistent;
    };

    match weekend_avg - weekday_avg {
        d if d > 2.0 => WeekdayTrend::SignificantlyBetterOnWeekends,
        d if d > 0.5 => WeekdayTrend::SomewhatBetterOnWeekends,
        d if d < -2.0 => WeekdayTrend::SignificantlyBetterOnWeekdays,
        d if d < -0.5 => WeekdayTrend::SomewhatBetterOnWeekdays,
        _ => WeekdayTrend::Consistent,
    }
}

/// Hours 0–5 fall into no bucket. Ties keep the earlier bucket.
fn classify_time_of_day(samples: &[ProcessedSample<'_>]) -> TimeOfDayTrend {
    let buckets = [
        (TimeOfDayTrend::Morning, mean_mood(samples, |s| (6..12).contains(&s.hour))),
        (TimeOfDayTrend::Afternoon, mean_mood(samples, |s| (12..18).contains(&s.hour))),
        (TimeOfDayTrend::Evening, mean_mood(samples, |s| s.hour >= 18)),
    ];

    let mut best: Option<(TimeOfDayTrend, f64)> = None;
    for (label, avg) in buckets {
        let Some(avg) = avg else { continue };
        match best {
            Some((_, best_avg)) if avg <= best_avg => {}
            _ => best = Some((label, avg)),
        }
    }

    best.map(|(label, _)| label).unwrap_or(TimeOfDayTrend::Morning)
}

fn classify_volatility(samples: &[ProcessedSample<'_>]) -> Volatility {
    match mean(samples.iter().filter_map(|s| s.mood_change)) {
        Some(avg) if avg > 4.0 => Volatility::HighlyVariable,
        Some(avg) if avg > 2.0 => Volatility::ModeratelyVariable,
        _ => Volatility::RelativelyStable,
    }
}
