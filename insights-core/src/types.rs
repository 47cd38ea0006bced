use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Author name used when a post's author is missing or was deleted.
pub const DELETED_AUTHOR: &str = "[deleted]";

/// A post as handed over by the ingestion layer.
///
/// Every field except `id` and `title` may be missing from the source data;
/// the accessor methods substitute the defaults the analytics rely on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub num_comments: Option<u64>,
    #[serde(
        default,
        alias = "created_utc",
        deserialize_with = "deserialize_unix_seconds"
    )]
    pub created_at: i64,
    #[serde(default)]
    pub subreddit: Option<String>,
    #[serde(default)]
    pub selftext: Option<String>,
    #[serde(default)]
    pub is_self: bool,
}

impl Post {
    pub fn score(&self) -> i64 {
        self.score.unwrap_or(0)
    }

    pub fn num_comments(&self) -> u64 {
        self.num_comments.unwrap_or(0)
    }

    pub fn author_or_deleted(&self) -> &str {
        match self.author.as_deref() {
            Some(author) if !author.trim().is_empty() => author,
            _ => DELETED_AUTHOR,
        }
    }

    pub fn selftext(&self) -> &str {
        self.selftext.as_deref().unwrap_or_default()
    }

    /// Title followed by the self text, as used for word-frequency analysis.
    pub fn full_text(&self) -> String {
        match self.selftext.as_deref() {
            Some(body) if !body.is_empty() => format!("{} {}", self.title, body),
            _ => self.title.clone(),
        }
    }
}

// Reddit reports creation time as float seconds.
fn deserialize_unix_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Seconds {
        Int(i64),
        Float(f64),
    }

    Ok(match Seconds::deserialize(deserializer)? {
        Seconds::Int(secs) => secs,
        Seconds::Float(secs) => secs.trunc() as i64,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What kind of content a post links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Self-post: text hosted on the originating site.
    Text,
    Image,
    Video,
    /// Link to another discussion thread on the source site.
    Discussion,
    /// External article or any other link.
    Link,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        ContentType::Text,
        ContentType::Image,
        ContentType::Video,
        ContentType::Discussion,
        ContentType::Link,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Image => "image",
            ContentType::Video => "video",
            ContentType::Discussion => "discussion",
            ContentType::Link => "link",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Buckets an hour of the day: Morning [5,12), Afternoon [12,17),
    /// Evening [17,21), Night for everything else.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
            TimeOfDay::Night => "Night",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_defaults() {
        let post = Post {
            id: "abc".to_string(),
            title: "Hello".to_string(),
            author: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(post.score(), 0);
        assert_eq!(post.num_comments(), 0);
        assert_eq!(post.author_or_deleted(), DELETED_AUTHOR);
        assert_eq!(post.selftext(), "");
        assert_eq!(post.full_text(), "Hello");
    }

    #[test]
    fn test_post_deserialize_reddit_shape() {
        let json = r#"{
            "id": "t3_x",
            "title": "Rust 2.0?",
            "author": null,
            "score": 42,
            "num_comments": 7,
            "created_utc": 1700000000.75,
            "is_self": true
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.created_at, 1_700_000_000);
        assert_eq!(post.score(), 42);
        assert_eq!(post.num_comments(), 7);
        assert!(post.is_self);
        assert!(post.url.is_none());
        assert_eq!(post.author_or_deleted(), DELETED_AUTHOR);
    }

    #[test]
    fn test_post_deserialize_missing_numbers() {
        let post: Post = serde_json::from_str(r#"{"id": "1", "created_at": 5}"#).unwrap();
        assert_eq!(post.created_at, 5);
        assert_eq!(post.score(), 0);
        assert_eq!(post.title, "");
    }

    #[test]
    fn test_time_of_day_partition() {
        let expected = [
            (0, TimeOfDay::Night),
            (4, TimeOfDay::Night),
            (5, TimeOfDay::Morning),
            (11, TimeOfDay::Morning),
            (12, TimeOfDay::Afternoon),
            (16, TimeOfDay::Afternoon),
            (17, TimeOfDay::Evening),
            (20, TimeOfDay::Evening),
            (21, TimeOfDay::Night),
            (23, TimeOfDay::Night),
        ];
        for (hour, bucket) in expected {
            assert_eq!(TimeOfDay::from_hour(hour), bucket, "hour {}", hour);
        }
    }

    #[test]
    fn test_enum_serialization() {
        assert_eq!(
            serde_json::to_string(&ContentType::Discussion).unwrap(),
            "\"discussion\""
        );
        assert_eq!(serde_json::to_string(&Sentiment::Neutral).unwrap(), "\"neutral\"");
        assert_eq!(Sentiment::Positive.to_string(), "positive");
    }
}
