//! Keyword and phrase frequency ranking, plus keyword-set similarity.

use crate::counter::RankedCounter;
use crate::text::keyword_tokens;
use insights_core::StopWords;
use std::collections::HashSet;
use std::hash::Hash;

/// Most frequent keywords across `texts`, ties in first-encountered order.
pub fn top_keywords<I, S>(texts: I, stop_words: &StopWords, n: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counter = RankedCounter::new();
    for text in texts {
        counter.extend(keyword_tokens(text.as_ref(), stop_words));
    }
    counter.top(n)
}

/// Most frequent runs of `window` consecutive keywords.
///
/// Windows are built per text and never join the tail of one text with the
/// head of the next.
pub fn top_phrases<I, S>(
    texts: I,
    stop_words: &StopWords,
    window: usize,
    n: usize,
) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if window == 0 {
        return Vec::new();
    }

    let mut counter = RankedCounter::new();
    for text in texts {
        let tokens = keyword_tokens(text.as_ref(), stop_words);
        counter.extend(tokens.windows(window).map(|phrase| phrase.join(" ")));
    }
    counter.top(n)
}

pub fn keyword_set(text: &str, stop_words: &StopWords) -> HashSet<String> {
    keyword_tokens(text, stop_words).into_iter().collect()
}

/// Jaccard index `|A ∩ B| / |A ∪ B|`; 0.0 when either set is empty.
pub fn jaccard_similarity<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count() as f64;
    let union = a.union(b).count() as f64;
    intersection / union
}

pub fn keyword_similarity(a: &str, b: &str, stop_words: &StopWords) -> f64 {
    jaccard_similarity(&keyword_set(a, stop_words), &keyword_set(b, stop_words))
}
