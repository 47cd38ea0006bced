//! TOML configuration for the analytics.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the built-in lexicons and scoring constants.

use crate::error::ConfigError;
use crate::lexicon::{Lexicon, StopWords, NEGATIVE_WORDS, POSITIVE_WORDS, STOP_WORDS};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Environment variable holding the path of the configuration file.
pub const CONFIG_ENV_VAR: &str = "POST_INSIGHTS_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub lexicon: LexiconConfig,
    /// Replaces the built-in stop-word list when set.
    pub stop_words: Option<Vec<String>>,
    pub trending: TrendingParams,
    pub classifier: ClassifierConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// Constants of the gravity formula
/// `(score + comment_weight * comments) / (age_hours + offset_hours)^gravity`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendingParams {
    pub comment_weight: f64,
    pub offset_hours: f64,
    pub gravity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Path suffixes, including the leading dot.
    pub image_extensions: Vec<String>,
    /// Matched as substrings of the URL host.
    pub video_domains: Vec<String>,
    /// Host of the site the posts come from.
    pub source_site: String,
    /// Path segment identifying a discussion thread on the source site.
    pub discussion_marker: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub top_posts: usize,
    pub top_words: usize,
    pub top_phrases: usize,
    pub phrase_window: usize,
    pub top_contributors: usize,
    pub trending: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            lexicon: LexiconConfig::default(),
            stop_words: None,
            trending: TrendingParams::default(),
            classifier: ClassifierConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            positive: POSITIVE_WORDS.iter().map(|w| w.to_string()).collect(),
            negative: NEGATIVE_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl Default for TrendingParams {
    fn default() -> Self {
        Self {
            comment_weight: 2.0,
            offset_hours: 2.0,
            gravity: 1.5,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            image_extensions: [".jpg", ".jpeg", ".png", ".gif", ".gifv", ".webp"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            video_domains: [
                "youtube.com",
                "youtu.be",
                "v.redd.it",
                "vimeo.com",
                "streamable.com",
                "twitch.tv",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            source_site: "reddit.com".to_string(),
            discussion_marker: "/comments/".to_string(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_posts: 10,
            top_words: 20,
            top_phrases: 10,
            phrase_window: 2,
            top_contributors: 10,
            trending: 10,
        }
    }
}

impl AnalyticsConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::FileNotFound {
                path: shown.clone(),
            },
            ErrorKind::PermissionDenied => ConfigError::PermissionDenied {
                path: shown.clone(),
            },
            _ => ConfigError::Unreadable {
                path: shown.clone(),
                reason: e.to_string(),
            },
        })?;

        debug!("Loaded configuration from {}", shown);
        Self::from_toml_str(&contents)
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV_VAR).ok_or_else(|| {
            ConfigError::MissingEnvironmentVariable {
                var_name: CONFIG_ENV_VAR.to_string(),
            }
        })?;
        Self::from_file(path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let trending = &self.trending;
        check_non_negative("trending.comment_weight", trending.comment_weight)?;
        check_non_negative("trending.offset_hours", trending.offset_hours)?;
        check_non_negative("trending.gravity", trending.gravity)?;

        if self.report.phrase_window == 0 {
            return Err(ConfigError::InvalidValue {
                field: "report.phrase_window".to_string(),
                value: "0".to_string(),
            });
        }

        if self.classifier.source_site.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "classifier.source_site".to_string(),
                value: self.classifier.source_site.clone(),
            });
        }

        if let Some(ext) = self
            .classifier
            .image_extensions
            .iter()
            .find(|ext| !ext.starts_with('.') || ext.len() < 2)
        {
            return Err(ConfigError::ValidationFailed {
                reason: format!(
                    "image extension '{}' must be a dot followed by at least one character",
                    ext
                ),
            });
        }

        self.lexicon().map(|_| ())
    }

    pub fn lexicon(&self) -> Result<Lexicon, ConfigError> {
        Lexicon::new(&self.lexicon.positive, &self.lexicon.negative)
    }

    pub fn stop_words(&self) -> StopWords {
        match &self.stop_words {
            Some(words) => StopWords::new(words),
            None => StopWords::new(STOP_WORDS),
        }
    }
}

fn check_non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = AnalyticsConfig::from_toml_str("").unwrap();
        assert_eq!(config, AnalyticsConfig::default());
        assert_eq!(config.trending.gravity, 1.5);
        assert_eq!(config.report.top_words, 20);
        assert_eq!(config.stop_words().len(), StopWords::default().len());
    }

    #[test]
    fn test_partial_override() {
        let toml = r#"
            stop_words = ["rust", "cargo"]

            [trending]
            gravity = 1.8

            [classifier]
            source_site = "lemmy.world"

            [report]
            top_words = 5
        "#;
        let config = AnalyticsConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.trending.gravity, 1.8);
        assert_eq!(config.trending.comment_weight, 2.0);
        assert_eq!(config.classifier.source_site, "lemmy.world");
        assert_eq!(config.classifier.discussion_marker, "/comments/");
        assert_eq!(config.report.top_words, 5);
        assert_eq!(config.report.top_posts, 10);

        let stop_words = config.stop_words();
        assert!(stop_words.contains("cargo"));
        assert!(!stop_words.contains("the"));
    }

    #[test]
    fn test_negative_gravity_rejected() {
        let err = AnalyticsConfig::from_toml_str("[trending]\ngravity = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "trending.gravity"));
    }

    #[test]
    fn test_zero_phrase_window_rejected() {
        let err = AnalyticsConfig::from_toml_str("[report]\nphrase_window = 0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_bad_image_extension_rejected() {
        let err =
            AnalyticsConfig::from_toml_str("[classifier]\nimage_extensions = [\"png\"]").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationFailed { .. }));
    }

    #[test]
    fn test_lexicon_overlap_rejected() {
        let toml = r#"
            [lexicon]
            positive = ["sick"]
            negative = ["sick", "meh"]
        "#;
        let err = AnalyticsConfig::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::LexiconOverlap { ref word } if word == "sick"));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = AnalyticsConfig::from_toml_str("[trending\ngravity = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
