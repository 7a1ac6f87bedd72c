//! Key point extraction from a sentence ranking.

use gistline::{Ranking, SENTENCE_TERMINATORS};

use crate::SummaryConfig;

/// Returned when no ranked sentence qualifies as a key point.
pub const PLACEHOLDER_KEY_POINTS: [&str; 3] = [
    "Main content analyzed and processed",
    "Key information successfully extracted",
    "Summary generated from source text",
];

/// Turns the best sentences of a [`Ranking`] into short bullet points.
///
/// The top `limit` sentences are taken in reading order, their trailing
/// punctuation is dropped, and only those whose length falls in
/// `[min_chars, max_chars)` survive. An empty result is replaced by
/// [`PLACEHOLDER_KEY_POINTS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPointExtractor {
    limit: usize,
    min_chars: usize,
    max_chars: usize,
}

impl Default for KeyPointExtractor {
    fn default() -> Self {
        Self::from_config(&SummaryConfig::default())
    }
}

impl KeyPointExtractor {
    pub fn from_config(config: &SummaryConfig) -> Self {
        Self {
            limit: config.key_point_limit,
            min_chars: config.key_point_min_chars,
            max_chars: config.key_point_max_chars,
        }
    }

    /// Key points without the placeholder substitution.
    pub fn candidates(&self, ranking: &Ranking) -> Vec<String> {
        ranking
            .top_in_document_order(self.limit)
            .into_iter()
            .map(|sentence| {
                sentence
                    .text
                    .trim_end_matches(SENTENCE_TERMINATORS)
                    .trim()
                    .to_string()
            })
            .filter(|point| {
                let len = point.chars().count();
                len >= self.min_chars && len < self.max_chars
            })
            .collect()
    }

    pub fn extract(&self, ranking: &Ranking) -> Vec<String> {
        let points = self.candidates(ranking);
        if points.is_empty() {
            return PLACEHOLDER_KEY_POINTS.iter().map(|p| p.to_string()).collect();
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gistline::{SentenceScorer, SUMMARY_MIN_WORD_LEN};

    fn rank(text: &str) -> Ranking {
        SentenceScorer::new(SUMMARY_MIN_WORD_LEN).rank(text)
    }

    #[test]
    fn strips_trailing_terminators() {
        let ranking = rank("Renewable energy adoption keeps accelerating?!.. Energy matters.");
        let points = KeyPointExtractor::default().candidates(&ranking);
        assert_eq!(points, vec!["Renewable energy adoption keeps accelerating"]);
    }

    #[test]
    fn short_points_are_dropped() {
        // "Energy matters" is 14 characters
        let ranking = rank("Energy matters. Energy policy shapes long term investment.");
        let points = KeyPointExtractor::default().candidates(&ranking);
        assert_eq!(points, vec!["Energy policy shapes long term investment"]);
    }

    #[test]
    fn twenty_characters_is_enough() {
        // 20 characters once the period is gone
        let ranking = rank("Abcdefghij klmnopqrs.");
        let points = KeyPointExtractor::default().candidates(&ranking);
        assert_eq!(points, vec!["Abcdefghij klmnopqrs"]);
    }

    #[test]
    fn overlong_points_are_dropped() {
        let at_limit = format!("{}.", "x".repeat(200));
        assert!(KeyPointExtractor::default().candidates(&rank(&at_limit)).is_empty());

        let below_limit = format!("{}.", "x".repeat(199));
        assert_eq!(
            KeyPointExtractor::default().candidates(&rank(&below_limit)),
            vec!["x".repeat(199)]
        );
    }

    #[test]
    fn placeholder_replaces_empty_result() {
        let ranking = rank("Tiny. Also tiny. Short one.");
        let points = KeyPointExtractor::default().extract(&ranking);
        assert_eq!(points, PLACEHOLDER_KEY_POINTS.to_vec());
    }

    #[test]
    fn keeps_at_most_limit_in_reading_order() {
        let text = "Alpha alpha alpha sentence one here. \
                    Filler text that is quite bland. \
                    Alpha alpha sentence number two. \
                    Beta gamma delta epsilon zeta. \
                    Alpha sentence three is here too. \
                    Alpha alpha alpha alpha sentence four. \
                    Alpha alpha sentence five appears. \
                    Alpha alpha alpha sentence six today.";
        let points = KeyPointExtractor::default().candidates(&rank(text));
        assert_eq!(points.len(), 5);
        assert_eq!(
            points,
            vec![
                "Alpha alpha alpha sentence one here",
                "Alpha alpha sentence number two",
                "Alpha alpha alpha alpha sentence four",
                "Alpha alpha sentence five appears",
                "Alpha alpha alpha sentence six today",
            ]
        );
    }
}
