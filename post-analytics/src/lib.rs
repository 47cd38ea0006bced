//! Descriptive and ranking metrics for batches of Reddit-style posts.
//!
//! Everything here is a pure function of its inputs: callers pass in posts,
//! texts and the current time, and get freshly allocated results back.

pub mod aggregate;
pub mod content_type;
pub mod counter;
pub mod format;
pub mod keywords;
pub mod metrics;
pub mod report;
pub mod sentiment;
pub mod text;


pub use aggregate::{
    average, content_type_mix, extract_domain, hourly_distribution, hourly_distribution_local,
    peak_hour, source_distribution, top_contributors,
};
pub use content_type::{classify_post, classify_url};
pub use counter::RankedCounter;
pub use format::{format_large_number, sanitize_subreddit, time_ago};
pub use keywords::{jaccard_similarity, keyword_set, keyword_similarity, top_keywords, top_phrases};
pub use metrics::{
    age_hours, controversy_index, engagement_ratio, post_velocity, score_posts, trending_score,
    PostMetrics, ScoringContext,
};
pub use report::{PostAnalyzer, PostSummary, SubredditReport};
pub use sentiment::{
    classify_sentiment, sentiment_breakdown, sentiment_score, SentimentBreakdown,
};
pub use text::{
    clean_social_text, clean_text, filter_stop_words, significant_tokens, strip_urls, tokenize,
};
