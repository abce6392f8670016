use crate::analysis::factors::FactorLists;
use crate::analysis::patterns::{PatternResult, Volatility, WeekdayTrend};

enum Trigger {
    Weekday(WeekdayTrend),
    Volatility(Volatility),
    HappyFactor(&'static str),
    SadFactor(&'static str),
}

const RULES: &[(Trigger, &str)] = &[
    (
        Trigger::Weekday(WeekdayTrend::SignificantlyBetterOnWeekends),
        "Try to incorporate more weekend-like activities into your weekdays.",
    ),
    (
        Trigger::Weekday(WeekdayTrend::SignificantlyBetterOnWeekdays),
        "Your weekends seem harder than your weekdays - consider planning some structure or social time for them.",
    ),
    (
        Trigger::Volatility(Volatility::HighlyVariable),
        "Your mood shifts a lot between entries - tracking sleep and stress alongside your mood may help spot the triggers.",
    ),
    (
        Trigger::HappyFactor("exercise"),
        "Regular exercise appears to boost your mood - consider making it a consistent part of your routine.",
    ),
    (
        Trigger::HappyFactor("outdoors"),
        "Time outdoors lines up with your better days - try to get outside regularly.",
    ),
    (
        Trigger::SadFactor("lonely"),
        "Consider scheduling regular social activities to combat feelings of loneliness.",
    ),
    (
        Trigger::SadFactor("stress"),
        "Stress shows up on your low days - short breaks or relaxation techniques might help.",
    ),
];

fn contains(list: &[String], keyword: &str) -> bool {
    list.iter().any(|f| f == keyword)
}

/// Maps patterns and factors to canned advice, in rule-table order.
pub fn generate_recommendations(patterns: &PatternResult, factors: &FactorLists) -> Vec<String> {
    RULES
        .iter()
        .filter(|(trigger, _)| match trigger {
            Trigger::Weekday(trend) => patterns.weekday_trend == *trend,
            Trigger::Volatility(v) => patterns.volatility == *v,
            Trigger::HappyFactor(k) => contains(&factors.happiness_factors, k),
            Trigger::SadFactor(k) => contains(&factors.sadness_factors, k),
        })
        .map(|(_, text)| text.to_string())
        .collect()
}
