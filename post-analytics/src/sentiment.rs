//! Keyword-based sentiment scoring.
//!
//! A text's score is the number of positive lexicon words it contains minus
//! the number of negative ones. Scores of zero, including texts with no
//! lexicon words at all, are neutral.

use insights_core::{Lexicon, Sentiment};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static PUNCTUATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));

pub fn sentiment_score(text: &str, lexicon: &Lexicon) -> i64 {
    let lower = text.to_lowercase();
    let stripped = PUNCTUATION_RE.replace_all(&lower, "");

    stripped.split_whitespace().fold(0, |score, word| {
        if lexicon.is_positive(word) {
            score + 1
        } else if lexicon.is_negative(word) {
            score - 1
        } else {
            score
        }
    })
}

pub fn classify_score(score: i64) -> Sentiment {
    match score {
        s if s > 0 => Sentiment::Positive,
        s if s < 0 => Sentiment::Negative,
        _ => Sentiment::Neutral,
    }
}

pub fn classify_sentiment(text: &str, lexicon: &Lexicon) -> Sentiment {
    classify_score(sentiment_score(text, lexicon))
}

/// Per-category counts over a collection of texts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentBreakdown {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentBreakdown {
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// The category with the most texts; ties and empty input lean neutral.
    pub fn dominant(&self) -> Sentiment {
        if self.positive > self.negative && self.positive > self.neutral {
            Sentiment::Positive
        } else if self.negative > self.positive && self.negative > self.neutral {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

pub fn sentiment_breakdown<I, S>(texts: I, lexicon: &Lexicon) -> SentimentBreakdown
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut breakdown = SentimentBreakdown::default();
    for text in texts {
        breakdown.record(classify_sentiment(text.as_ref(), lexicon));
    }
    breakdown
}
