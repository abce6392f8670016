// Mood pattern analysis: feature derivation, pattern labels, keyword factors.
// Pure and synchronous; loading samples is the store's job.

pub mod factors;
pub mod handlers;
pub mod patterns;
pub mod preprocess;
pub mod recommendations;

use crate::analysis::factors::{identify_factors, FactorLists, FactorRules};
use crate::analysis::patterns::{identify_patterns, PatternResult};
use crate::analysis::preprocess::preprocess;
use crate::models::mood::MoodSample;

#[derive(Debug, Clone, PartialEq)]
pub struct MoodAnalysis {
    pub patterns: PatternResult,
    pub factors: FactorLists,
}

/// Runs preprocessing, pattern classification and factor extraction over one
/// user's samples. Holds no per-call state.
#[derive(Debug, Clone, Default)]
pub struct MoodPatternAnalyzer {
    rules: FactorRules,
}

impl MoodPatternAnalyzer {
    #[cfg(test)]
    pub fn with_rules(rules: FactorRules) -> Self {
        Self { rules }
    }

    pub fn analyze(&self, samples: &[MoodSample]) -> MoodAnalysis {
        let processed = preprocess(samples);
        MoodAnalysis {
            patterns: identify_patterns(&processed),
            factors: identify_factors(&processed, &self.rules),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::patterns::{TimeOfDayTrend, Volatility, WeekdayTrend};
    use crate::models::mood::parse_timestamp;

    fn week_of_samples() -> Vec<MoodSample> {
        [
            ("2024-03-11T08:00:00", 2.0, "stress at work"),
            ("2024-03-12T19:30:00", -7.0, "Stressful meeting, so tired"),
            ("2024-03-13T13:00:00", 1.0, ""),
            ("2024-03-16T10:00:00", 8.0, "hiked outdoors with family"),
            ("2024-03-17T20:00:00", 9.0, "dinner with friends and family"),
        ]
        .into_iter()
        .map(|(ts, mood, notes)| MoodSample::new(parse_timestamp(ts).unwrap(), mood, notes))
        .collect()
    }

    #[test]
    fn test_full_analysis() {
        let analysis = MoodPatternAnalyzer::default().analyze(&week_of_samples());

        // weekdays avg -4/3, weekends avg 8.5
        assert_eq!(
            analysis.patterns.weekday_trend,
            WeekdayTrend::SignificantlyBetterOnWeekends
        );
        // morning (2+8)/2=5, afternoon 1, evening (-7+9)/2=1
        assert_eq!(analysis.patterns.time_of_day_trend, TimeOfDayTrend::Morning);
        // changes 9, 8, 7, 1 → 6.25
        assert_eq!(analysis.patterns.volatility, Volatility::HighlyVariable);
        assert_eq!(
            analysis.factors.happiness_factors,
            vec!["family", "outdoors", "friends"]
        );
        assert_eq!(analysis.factors.sadness_factors, vec!["stress", "tired"]);
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let samples = week_of_samples();
        let analyzer = MoodPatternAnalyzer::default();
        assert_eq!(analyzer.analyze(&samples), analyzer.analyze(&samples));
    }

    #[test]
    fn test_empty_input_does_not_panic() {
        let analysis = MoodPatternAnalyzer::default().analyze(&[]);
        assert_eq!(analysis.patterns.weekday_trend, WeekdayTrend::Consistent);
        assert_eq!(analysis.patterns.volatility, Volatility::RelativelyStable);
        assert_eq!(analysis.factors, FactorLists::default());
    }

    #[test]
    fn test_custom_rules_are_used() {
        let rules = FactorRules {
            happy_keywords: vec!["walk".to_string()],
            high_mood_cutoff: 0.0,
            ..FactorRules::default()
        };
        let samples = vec![MoodSample::new(
            parse_timestamp("2024-03-11T10:00:00").unwrap(),
            1.0,
            "Evening walk",
        )];

        let analysis = MoodPatternAnalyzer::with_rules(rules).analyze(&samples);
        assert_eq!(analysis.factors.happiness_factors, vec!["walk"]);
    }
}
