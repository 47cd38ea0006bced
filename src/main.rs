use anyhow::Result;
use clap::Parser;
use insights_core::{AnalyticsConfig, ConfigError, CoreError, ErrorReporter, Post};
use post_analytics::PostAnalyzer;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Post Insights - analytics report for a batch of Reddit posts
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file with an array of posts (or an object with a "posts" array)
    posts: PathBuf,

    /// Path to a TOML config file (overrides POST_INSIGHTS_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Subreddit name for the report (default: taken from the first post)
    #[arg(short, long)]
    subreddit: Option<String>,

    /// Unix timestamp to treat as "now" (default: current time)
    #[arg(long)]
    now: Option<i64>,

    /// Number of top posts to include
    #[arg(long)]
    top: Option<usize>,

    /// Print the report on a single line
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("post_insights=info,post_analytics=info")
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        ErrorReporter::new().report_error(&e);
        return Err(anyhow::anyhow!(e));
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), CoreError> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(top) = args.top {
        config.report.top_posts = top;
    }

    let posts = load_posts(&args.posts)?;
    tracing::info!("Loaded {} posts from {}", posts.len(), args.posts.display());

    let subreddit = args
        .subreddit
        .clone()
        .or_else(|| posts.iter().find_map(|p| p.subreddit.clone()))
        .unwrap_or_else(|| "all".to_string());
    let now = args.now.unwrap_or_else(|| chrono::Utc::now().timestamp());

    let analyzer = PostAnalyzer::new(config)?;
    let report = analyzer.analyze(&subreddit, &posts, now);

    let rendered = if args.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{}", rendered);
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<AnalyticsConfig, ConfigError> {
    if let Some(path) = path {
        return AnalyticsConfig::from_file(path);
    }

    match AnalyticsConfig::from_env() {
        Ok(config) => Ok(config),
        Err(ConfigError::MissingEnvironmentVariable { var_name }) => {
            tracing::debug!("{} not set, using built-in configuration", var_name);
            Ok(AnalyticsConfig::default())
        }
        Err(e) => Err(e),
    }
}

fn load_posts(path: &Path) -> Result<Vec<Post>, CoreError> {
    let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CoreError::NotFound {
            resource: path.display().to_string(),
        },
        _ => CoreError::Io(e),
    })?;

    let value: serde_json::Value = serde_json::from_str(&contents)?;
    let posts = match value {
        array @ serde_json::Value::Array(_) => array,
        serde_json::Value::Object(mut map) => match map.remove("posts") {
            Some(posts @ serde_json::Value::Array(_)) => posts,
            _ => {
                return Err(CoreError::InvalidInput {
                    message: "object input must have a \"posts\" array".to_string(),
                })
            }
        },
        _ => {
            return Err(CoreError::InvalidInput {
                message: "expected a JSON array of posts".to_string(),
            })
        }
    };

    Ok(serde_json::from_value(posts)?)
}
