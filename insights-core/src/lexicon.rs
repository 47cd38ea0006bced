//! Static word lists used by the text analytics.
//!
//! The constants are the built-in defaults. [`Lexicon`] and [`StopWords`]
//! wrap them so a configuration file can swap in different lists without
//! touching the scoring code.

use crate::error::ConfigError;
use std::collections::HashSet;

/// Words that count towards a positive sentiment score.
pub const POSITIVE_WORDS: &[&str] = &[
    "great", "awesome", "excellent", "good", "love", "amazing", "best", "helpful", "useful",
    "cool",
];

/// Words that count towards a negative sentiment score.
pub const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "worst", "awful", "hate", "horrible", "useless", "broken", "annoying",
    "boring",
];

/// Common English function words excluded from keyword frequency analysis.
///
/// Keyword rankings depend directly on this list. Tokens of two characters
/// or fewer are dropped regardless, so short words like "a" and "is" are
/// listed only for completeness.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "is", "are", "was", "were", "be", "been", "being",
    "in", "on", "at", "to", "for", "with", "by", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "from", "up", "down", "out",
    "off", "over", "under", "again", "further", "then", "once", "here", "there", "when",
    "where", "why", "how", "all", "any", "both", "each", "few", "more", "most", "other",
    "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very",
    "can", "will", "just", "don", "should", "now", "you", "her", "one", "our", "this", "that",
    "have", "they", "what", "which",
];

/// Positive and negative marker words for sentiment scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl Lexicon {
    /// Builds a lexicon, rejecting any word listed on both sides.
    pub fn new<P, N, S>(positive: P, negative: N) -> Result<Self, ConfigError>
    where
        P: IntoIterator<Item = S>,
        N: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let positive: HashSet<String> = positive
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        let negative: HashSet<String> = negative
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        let mut overlap: Vec<&String> = positive.intersection(&negative).collect();
        overlap.sort();
        if let Some(word) = overlap.first() {
            return Err(ConfigError::LexiconOverlap {
                word: (*word).clone(),
            });
        }

        Ok(Self { positive, negative })
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn positive_len(&self) -> usize {
        self.positive.len()
    }

    pub fn negative_len(&self) -> usize {
        self.negative.len()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            positive: POSITIVE_WORDS.iter().map(|w| w.to_string()).collect(),
            negative: NEGATIVE_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

/// Case-insensitive stop-word set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        word.chars().any(char::is_uppercase) && self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new(STOP_WORDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lexicon_is_disjoint() {
        let positive: HashSet<&str> = POSITIVE_WORDS.iter().copied().collect();
        assert!(NEGATIVE_WORDS.iter().all(|w| !positive.contains(w)));
        assert!(Lexicon::new(POSITIVE_WORDS, NEGATIVE_WORDS).is_ok());
    }

    #[test]
    fn test_lexicon_rejects_overlap() {
        let result = Lexicon::new(["good", "Fine"], ["bad", "fine "]);
        match result {
            Err(ConfigError::LexiconOverlap { word }) => assert_eq!(word, "fine"),
            other => panic!("expected overlap error, got {:?}", other),
        }
    }

    #[test]
    fn test_lexicon_lookup_is_lowercase() {
        let lexicon = Lexicon::new(["Stellar"], ["Dire"]).unwrap();
        assert!(lexicon.is_positive("stellar"));
        assert!(lexicon.is_negative("dire"));
        assert!(!lexicon.is_positive("dire"));
        assert_eq!(lexicon.positive_len(), 1);
    }

    #[test]
    fn test_stop_words_case_insensitive() {
        let stop_words = StopWords::default();
        assert!(stop_words.contains("the"));
        assert!(stop_words.contains("The"));
        assert!(stop_words.contains("WHICH"));
        assert!(!stop_words.contains("rust"));
        assert!(!stop_words.is_empty());
    }
}
