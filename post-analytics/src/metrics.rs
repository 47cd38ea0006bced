//! Per-post derived metrics.
//!
//! Every function takes the current time as a parameter, so results are
//! reproducible. Divisions clamp their denominator: scores below
//! [`SCORE_FLOOR`] count as the floor and ages below [`AGE_FLOOR_HOURS`]
//! count as the floor. The trending decay is floored at [`DECAY_FLOOR`]
//! after the gravity power is applied. Results are rounded to
//! [`METRIC_PRECISION`] places.

use crate::content_type::classify_post;
use crate::sentiment::classify_sentiment;
use insights_core::{ClassifierConfig, ContentType, Lexicon, Post, Sentiment, TrendingParams};
use serde::Serialize;

pub const METRIC_PRECISION: u32 = 2;
pub const SCORE_FLOOR: i64 = 1;
pub const AGE_FLOOR_HOURS: f64 = 0.1;
pub const DECAY_FLOOR: f64 = 1e-6;

pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

fn round_metric(value: f64) -> f64 {
    round_to(value, METRIC_PRECISION)
}

pub fn age_hours(created_at: i64, now: i64) -> f64 {
    now.saturating_sub(created_at) as f64 / 3600.0
}

/// Comments per point of score.
pub fn engagement_ratio(score: i64, num_comments: u64) -> f64 {
    round_metric(num_comments as f64 / score.max(SCORE_FLOOR) as f64)
}

/// Engagement ratio as a percentage. High values mean a lot of discussion
/// relative to the score.
pub fn controversy_index(score: i64, num_comments: u64) -> f64 {
    round_metric(num_comments as f64 / score.max(SCORE_FLOOR) as f64 * 100.0)
}

/// Score accumulated per hour since posting.
pub fn post_velocity(score: i64, created_at: i64, now: i64) -> f64 {
    let age = age_hours(created_at, now).max(AGE_FLOOR_HOURS);
    round_metric(score as f64 / age)
}

/// Gravity-decayed hotness:
/// `(score + weight * comments) / (age_hours + offset)^gravity`.
pub fn trending_score(
    score: i64,
    num_comments: u64,
    age_hours: f64,
    params: &TrendingParams,
) -> f64 {
    let engagement = score as f64 + params.comment_weight * num_comments as f64;
    let decay_base = (age_hours + params.offset_hours).max(AGE_FLOOR_HOURS);
    let decay = decay_base.powf(params.gravity).max(DECAY_FLOOR);
    round_metric((engagement / decay).clamp(f64::MIN, f64::MAX))
}

/// Everything the per-post metrics need besides the post itself.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    pub trending: &'a TrendingParams,
    pub classifier: &'a ClassifierConfig,
    pub lexicon: &'a Lexicon,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostMetrics {
    pub id: String,
    pub title: String,
    pub score: i64,
    pub num_comments: u64,
    pub age_hours: f64,
    pub engagement_ratio: f64,
    pub controversy_index: f64,
    pub velocity: f64,
    pub trending_score: f64,
    pub content_type: ContentType,
    pub sentiment: Sentiment,
}

impl PostMetrics {
    pub fn compute(post: &Post, now: i64, ctx: &ScoringContext<'_>) -> Self {
        let score = post.score();
        let num_comments = post.num_comments();
        let age = age_hours(post.created_at, now);

        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            score,
            num_comments,
            age_hours: round_metric(age),
            engagement_ratio: engagement_ratio(score, num_comments),
            controversy_index: controversy_index(score, num_comments),
            velocity: post_velocity(score, post.created_at, now),
            trending_score: trending_score(score, num_comments, age, ctx.trending),
            content_type: classify_post(post, ctx.classifier),
            sentiment: classify_sentiment(&post.title, ctx.lexicon),
        }
    }
}

/// Computes [`PostMetrics`] for each post, preserving input order.
pub fn score_posts(posts: &[Post], now: i64, ctx: &ScoringContext<'_>) -> Vec<PostMetrics> {
    posts
        .iter()
        .map(|post| PostMetrics::compute(post, now, ctx))
        .collect()
}
