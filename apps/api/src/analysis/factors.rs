//! Factor extraction: keyword "happiness" and "sadness" factors mined from notes.
//!
//! Matching is a case-insensitive substring test, so "Stressful" counts as `stress`
//! and "workout" does not count as `exercise`. Only samples past the mood cutoffs
//! are scanned, each against the vocabulary for its polarity.

use crate::analysis::preprocess::ProcessedSample;

pub const HAPPY_KEYWORDS: &[&str] = &["exercise", "friends", "outdoors", "success", "family"];
pub const SAD_KEYWORDS: &[&str] = &["stress", "work", "tired", "conflict", "lonely"];

/// Vocabularies and cutoffs used by the extractor.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorRules {
    pub happy_keywords: Vec<String>,
    pub sad_keywords: Vec<String>,
    /// Notes are scanned for happy keywords when mood is strictly above this.
    pub high_mood_cutoff: f64,
    /// Notes are scanned for sad keywords when mood is strictly below this.
    pub low_mood_cutoff: f64,
    pub top_n: usize,
}

impl Default for FactorRules {
    fn default() -> Self {
        Self {
            happy_keywords: HAPPY_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            sad_keywords: SAD_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            high_mood_cutoff: 5.0,
            low_mood_cutoff: -5.0,
            top_n: 5,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactorLists {
    pub happiness_factors: Vec<String>,
    pub sadness_factors: Vec<String>,
}

pub fn identify_factors(samples: &[ProcessedSample<'_>], rules: &FactorRules) -> FactorLists {
    let mut happy = Tally::default();
    let mut sad = Tally::default();

    for sample in samples {
        let mood = sample.mood_value();
        let (tally, vocabulary) = if mood > rules.high_mood_cutoff {
            (&mut happy, &rules.happy_keywords)
        } else if mood < rules.low_mood_cutoff {
            (&mut sad, &rules.sad_keywords)
        } else {
            continue;
        };

        let note = sample.notes().to_lowercase();
        for keyword in vocabulary {
            if note.contains(&keyword.to_lowercase()) {
                tally.record(keyword);
            }
        }
    }

    FactorLists {
        happiness_factors: happy.most_common(rules.top_n),
        sadness_factors: sad.most_common(rules.top_n),
    }
}

/// Occurrence counter that remembers first-seen order for tie-breaks.
#[derive(Debug, Default)]
struct Tally<'k> {
    counts: Vec<(&'k str, usize)>,
}

impl<'k> Tally<'k> {
    fn record(&mut self, keyword: &'k str) {
        match self.counts.iter_mut().find(|(k, _)| *k == keyword) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((keyword, 1)),
        }
    }

    fn most_common(mut self, n: usize) -> Vec<String> {
        // stable sort keeps first-seen order among equal counts
        self.counts.sort_by(|a, b| b.1.cmp(&a.1));
        self.counts
            .into_iter()
            .take(n)
            .map(|(k, _)| k.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::preprocess::preprocess;
    use crate::models::mood::{parse_timestamp, MoodSample};

    fn note(mood: f64, text: &str) -> MoodSample {
        MoodSample::new(parse_timestamp("2024-03-11T10:00:00").unwrap(), mood, text)
    }

    fn factors(samples: &[MoodSample]) -> FactorLists {
        identify_factors(&preprocess(samples), &FactorRules::default())
    }

    #[test]
    fn test_workout_is_not_exercise() {
        let lists = factors(&[note(7.0, "Had a great workout with friends today")]);
        assert_eq!(lists.happiness_factors, vec!["friends"]);
        assert!(lists.sadness_factors.is_empty());
    }

    #[test]
    fn test_substring_match_on_low_mood() {
        let lists = factors(&[note(-6.0, "Stressful day at work, felt tired")]);
        assert_eq!(lists.sadness_factors, vec!["stress", "work", "tired"]);
        assert!(lists.happiness_factors.is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let lists = factors(&[note(9.0, "FAMILY dinner, then OUTDOORS")]);
        assert_eq!(lists.happiness_factors, vec!["outdoors", "family"]);
    }

    #[test]
    fn test_cutoffs_are_exclusive() {
        let lists = factors(&[
            note(5.0, "friends and family"),
            note(-5.0, "stress at work"),
            note(0.0, "lonely"),
        ]);
        assert_eq!(lists, FactorLists::default());
    }

    #[test]
    fn test_high_mood_ignores_sad_vocabulary() {
        let lists = factors(&[note(8.0, "finished work early, success")]);
        assert_eq!(lists.happiness_factors, vec!["success"]);
        assert!(lists.sadness_factors.is_empty());
    }

    #[test]
    fn test_ranked_by_count_then_first_seen() {
        let lists = factors(&[
            note(6.0, "family"),
            note(6.0, "friends"),
            note(7.0, "friends, exercise"),
            note(8.0, "exercise with friends"),
            note(9.0, "family"),
        ]);
        // friends 3, family 2, exercise 2 (family seen first)
        assert_eq!(lists.happiness_factors, vec!["friends", "family", "exercise"]);
    }

    #[test]
    fn test_truncated_to_top_five() {
        let rules = FactorRules {
            happy_keywords: ["a1", "b2", "c3", "d4", "e5", "f6", "g7"]
                .iter()
                .map(|k| k.to_string())
                .collect(),
            ..FactorRules::default()
        };
        // keyword i appears i times
        let samples: Vec<_> = (1..=7)
            .flat_map(|i| {
                let kw = rules.happy_keywords[i - 1].clone();
                std::iter::repeat(kw).take(i)
            })
            .map(|kw| note(10.0, &kw))
            .collect();

        let lists = identify_factors(&preprocess(&samples), &rules);
        assert_eq!(lists.happiness_factors, vec!["g7", "f6", "e5", "d4", "c3"]);
    }

    #[test]
    fn test_notes_missing_contribute_nothing() {
        let lists = factors(&[note(10.0, ""), note(-10.0, "")]);
        assert_eq!(lists, FactorLists::default());
    }
}
