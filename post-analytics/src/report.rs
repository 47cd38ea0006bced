//! Subreddit-level report assembled from a batch of already-fetched posts.

use crate::aggregate::{
    average, content_type_mix, hourly_distribution, peak_hour, source_distribution,
    top_contributors,
};
use crate::content_type::classify_post;
use crate::format::{format_large_number, sanitize_subreddit, time_ago};
use crate::keywords::{top_keywords, top_phrases};
use crate::metrics::{score_posts, PostMetrics, ScoringContext};
use crate::sentiment::{sentiment_breakdown, SentimentBreakdown};
use chrono::{TimeZone, Timelike, Utc};
use insights_core::{AnalyticsConfig, ConfigError, ContentType, Lexicon, Post, StopWords, TimeOfDay};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub score: i64,
    pub score_display: String,
    pub num_comments: u64,
    pub url: Option<String>,
    pub created_at: i64,
    pub posted: String,
}

impl PostSummary {
    fn new(post: &Post, now: i64) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            author: post.author_or_deleted().to_string(),
            score: post.score(),
            score_display: format_large_number(post.score()),
            num_comments: post.num_comments(),
            url: post.url.clone(),
            created_at: post.created_at,
            posted: time_ago(post.created_at, now),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubredditReport {
    pub subreddit: String,
    pub generated_at: i64,
    pub total_posts: usize,
    pub avg_score: f64,
    pub avg_comments: f64,
    pub top_posts: Vec<PostSummary>,
    pub top_words: Vec<(String, usize)>,
    pub top_phrases: Vec<(String, usize)>,
    /// Posts per UTC hour of day.
    pub posts_by_hour: [usize; 24],
    pub posts_by_time_of_day: Vec<(TimeOfDay, usize)>,
    pub peak_hour: Option<u32>,
    pub sentiment: SentimentBreakdown,
    pub sources: Vec<(String, usize)>,
    pub top_contributors: Vec<(String, usize)>,
    pub content_mix: Vec<(ContentType, usize)>,
    pub trending: Vec<PostMetrics>,
}

/// Runs every analysis with one validated configuration.
#[derive(Debug, Clone)]
pub struct PostAnalyzer {
    config: AnalyticsConfig,
    lexicon: Lexicon,
    stop_words: StopWords,
}

impl PostAnalyzer {
    pub fn new(config: AnalyticsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let lexicon = config.lexicon()?;
        let stop_words = config.stop_words();
        debug!(
            "Analyzer ready: {} positive / {} negative words, {} stop words",
            lexicon.positive_len(),
            lexicon.negative_len(),
            stop_words.len()
        );
        Ok(Self {
            config,
            lexicon,
            stop_words,
        })
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    fn scoring_context(&self) -> ScoringContext<'_> {
        ScoringContext {
            trending: &self.config.trending,
            classifier: &self.config.classifier,
            lexicon: &self.lexicon,
        }
    }

    pub fn score_post(&self, post: &Post, now: i64) -> PostMetrics {
        PostMetrics::compute(post, now, &self.scoring_context())
    }

    pub fn content_type(&self, post: &Post) -> ContentType {
        classify_post(post, &self.config.classifier)
    }

    /// Posts ranked by trending score, highest first.
    pub fn trending(&self, posts: &[Post], now: i64, limit: usize) -> Vec<PostMetrics> {
        let mut scored = score_posts(posts, now, &self.scoring_context());
        scored.sort_by(|a, b| b.trending_score.total_cmp(&a.trending_score));
        scored.truncate(limit);
        scored
    }

    #[tracing::instrument(skip_all, fields(subreddit = %subreddit, posts = posts.len()))]
    pub fn analyze(&self, subreddit: &str, posts: &[Post], now: i64) -> SubredditReport {
        let limits = &self.config.report;

        let mut by_score: Vec<&Post> = posts.iter().collect();
        by_score.sort_by(|a, b| b.score().cmp(&a.score()));
        let top_posts = by_score
            .into_iter()
            .take(limits.top_posts)
            .map(|post| PostSummary::new(post, now))
            .collect();

        let texts: Vec<String> = posts.iter().map(Post::full_text).collect();
        let top_words = top_keywords(&texts, &self.stop_words, limits.top_words);
        let top_phrases = top_phrases(
            &texts,
            &self.stop_words,
            limits.phrase_window,
            limits.top_phrases,
        );

        let posts_by_hour = hourly_distribution(posts.iter().map(|p| p.created_at), &Utc);
        let hour_samples: Vec<(u32, i64)> = posts
            .iter()
            .filter_map(|post| {
                Utc.timestamp_opt(post.created_at, 0)
                    .single()
                    .map(|at| (at.hour(), post.score()))
            })
            .collect();

        let report = SubredditReport {
            subreddit: sanitize_subreddit(subreddit),
            generated_at: now,
            total_posts: posts.len(),
            avg_score: average(posts.iter().map(|p| p.score() as f64)),
            avg_comments: average(posts.iter().map(|p| p.num_comments() as f64)),
            top_posts,
            top_words,
            top_phrases,
            posts_by_hour,
            posts_by_time_of_day: time_of_day_buckets(&posts_by_hour),
            peak_hour: peak_hour(&hour_samples),
            sentiment: sentiment_breakdown(posts.iter().map(|p| p.title.as_str()), &self.lexicon),
            sources: source_distribution(posts.iter().filter_map(|p| p.url.as_deref())),
            top_contributors: top_contributors(
                posts.iter().map(|p| p.author.as_deref()),
                limits.top_contributors,
            ),
            content_mix: content_type_mix(posts.iter().map(|p| self.content_type(p))),
            trending: self.trending(posts, now, limits.trending),
        };

        info!(
            "Analyzed {} posts for r/{} (avg score {}, peak hour {:?})",
            report.total_posts, report.subreddit, report.avg_score, report.peak_hour
        );
        report
    }
}

impl Default for PostAnalyzer {
    fn default() -> Self {
        Self {
            config: AnalyticsConfig::default(),
            lexicon: Lexicon::default(),
            stop_words: StopWords::default(),
        }
    }
}

fn time_of_day_buckets(posts_by_hour: &[usize; 24]) -> Vec<(TimeOfDay, usize)> {
    let mut buckets = vec![
        (TimeOfDay::Morning, 0),
        (TimeOfDay::Afternoon, 0),
        (TimeOfDay::Evening, 0),
        (TimeOfDay::Night, 0),
    ];
    for (hour, count) in posts_by_hour.iter().enumerate() {
        let bucket = TimeOfDay::from_hour(hour as u32);
        if let Some(entry) = buckets.iter_mut().find(|(b, _)| *b == bucket) {
            entry.1 += count;
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day_buckets() {
        let mut hours = [0usize; 24];
        hours[3] = 2;
        hours[6] = 1;
        hours[13] = 4;
        hours[18] = 5;
        hours[22] = 1;
        assert_eq!(
            time_of_day_buckets(&hours),
            vec![
                (TimeOfDay::Morning, 1),
                (TimeOfDay::Afternoon, 4),
                (TimeOfDay::Evening, 5),
                (TimeOfDay::Night, 3),
            ]
        );
    }

    #[test]
    fn test_analyzer_rejects_invalid_config() {
        let mut config = AnalyticsConfig::default();
        config.lexicon.negative.push("great".to_string());
        assert!(matches!(
            PostAnalyzer::new(config),
            Err(ConfigError::LexiconOverlap { .. })
        ));
    }

    #[test]
    fn test_empty_batch_report() {
        let report = PostAnalyzer::default().analyze("r/empty", &[], 1_700_000_000);
        assert_eq!(report.subreddit, "empty");
        assert_eq!(report.total_posts, 0);
        assert_eq!(report.avg_score, 0.0);
        assert!(report.top_posts.is_empty());
        assert!(report.top_words.is_empty());
        assert_eq!(report.posts_by_hour, [0; 24]);
        assert_eq!(report.peak_hour, None);
        assert_eq!(report.sentiment, SentimentBreakdown::default());
        assert!(report.sources.is_empty());
        assert!(report.trending.is_empty());
        assert!(report.content_mix.iter().all(|(_, n)| *n == 0));
    }
}
