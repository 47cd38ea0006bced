//! Text normalization, tokenization and stop-word filtering.

use insights_core::StopWords;
use once_cell::sync::Lazy;
use regex::Regex;

/// Tokens shorter than this are treated as noise.
pub const MIN_TOKEN_LEN: usize = 3;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)https?://\S+|\bwww\.\S+").expect("valid regex"));

static MARKDOWN_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("valid regex"));

static MARKDOWN_FORMAT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[*_~#>`\-]").expect("valid regex"));

static NON_ALPHA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z\s]").expect("valid regex"));

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").expect("valid regex"));

pub fn strip_urls(text: &str) -> String {
    URL_RE.replace_all(text, "").into_owned()
}

/// Cleans Reddit-flavoured Markdown down to plain prose.
///
/// `[label](url)` becomes `label`, bare URLs are removed, the formatting
/// characters `* _ ~ # > ` and `-` are dropped and whitespace is collapsed
/// to single spaces.
pub fn clean_social_text(text: &str) -> String {
    let text = MARKDOWN_LINK_RE.replace_all(text, "$1");
    let text = URL_RE.replace_all(&text, "");
    let text = MARKDOWN_FORMAT_RE.replace_all(&text, "");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Removes URLs and every character that is not an ASCII letter or
/// whitespace, then lowercases.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = URL_RE.replace_all(text, "");
    NON_ALPHA_RE
        .replace_all(&text, "")
        .to_lowercase()
        .trim()
        .to_string()
}

/// Splits text into lowercase word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Word tokens of at least [`MIN_TOKEN_LEN`] characters.
pub fn significant_tokens(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
        .collect()
}

pub fn filter_stop_words<I>(tokens: I, stop_words: &StopWords) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    tokens
        .into_iter()
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN && !stop_words.contains(token))
        .collect()
}

/// URL-free, stop-word-free tokens of a text: the unit of keyword analysis.
pub fn keyword_tokens(text: &str, stop_words: &StopWords) -> Vec<String> {
    filter_stop_words(tokenize(&strip_urls(text)), stop_words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_urls() {
        assert_eq!(
            strip_urls("see https://example.com/a?b=1 and www.rust-lang.org now"),
            "see  and  now"
        );
        assert_eq!(strip_urls("HTTP://SHOUTY.COM"), "");
        assert_eq!(strip_urls(""), "");
    }

    #[test]
    fn test_clean_social_text() {
        let raw = "## Check **this** out: [the docs](https://docs.rs/regex) - also https://x.io\n> quoted ~~text~~";
        assert_eq!(
            clean_social_text(raw),
            "Check this out: the docs also quoted text"
        );
        assert_eq!(clean_social_text(""), "");
        assert_eq!(clean_social_text("   \n\t "), "");
    }

    #[test]
    fn test_clean_text_keeps_only_letters() {
        assert_eq!(
            clean_text("Rust 1.75 is OUT! https://blog.rust-lang.org"),
            "rust  is out"
        );
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("Hello, World! It's 2024."),
            vec!["hello", "world", "it", "s", "2024"]
        );
        assert!(tokenize("").is_empty());
        assert!(tokenize("!!! ???").is_empty());
    }

    #[test]
    fn test_significant_tokens() {
        assert_eq!(significant_tokens("I am so into Rust"), vec!["into", "rust"]);
    }

    #[test]
    fn test_filter_stop_words() {
        let stop_words = StopWords::default();
        let tokens = tokenize("The borrow checker is the best part of this language");
        assert_eq!(
            filter_stop_words(tokens, &stop_words),
            vec!["borrow", "checker", "best", "part", "language"]
        );
    }

    #[test]
    fn test_keyword_tokens_skip_urls() {
        let stop_words = StopWords::default();
        assert_eq!(
            keyword_tokens("Async runtimes compared https://tokio.rs/blog", &stop_words),
            vec!["async", "runtimes", "compared"]
        );
    }
}
