use insights_core::{ClassifierConfig, ContentType, Post};
use tracing::debug;
use url::Url;

/// Classifies what a post links to.
///
/// Rules apply in order: self-posts and posts without a URL are
/// [`ContentType::Text`]; an image extension at the end of the path is
/// [`ContentType::Image`]; a video domain inside the host is
/// [`ContentType::Video`]; a source-site host whose path contains the
/// discussion marker is [`ContentType::Discussion`]; anything else is
/// [`ContentType::Link`]. URLs that cannot be parsed are matched as a bare
/// path with no host.
pub fn classify_url(url: Option<&str>, is_self: bool, config: &ClassifierConfig) -> ContentType {
    if is_self {
        return ContentType::Text;
    }

    let raw = match url.map(str::trim) {
        Some(url) if !url.is_empty() => url.to_lowercase(),
        _ => return ContentType::Text,
    };

    let (host, path) = match parse_lenient(&raw) {
        Some(parsed) => (
            parsed.host_str().unwrap_or_default().to_string(),
            parsed.path().to_string(),
        ),
        None => {
            debug!("Could not parse URL {:?}, classifying by raw text", raw);
            (String::new(), raw.clone())
        }
    };

    if config
        .image_extensions
        .iter()
        .any(|ext| path.ends_with(&ext.to_lowercase()))
    {
        return ContentType::Image;
    }

    if !host.is_empty()
        && config
            .video_domains
            .iter()
            .any(|domain| host.contains(&domain.to_lowercase()))
    {
        return ContentType::Video;
    }

    let source_site = config.source_site.to_lowercase();
    if !host.is_empty()
        && host.contains(&source_site)
        && path.contains(&config.discussion_marker.to_lowercase())
    {
        return ContentType::Discussion;
    }

    ContentType::Link
}

pub fn classify_post(post: &Post, config: &ClassifierConfig) -> ContentType {
    classify_url(post.url.as_deref(), post.is_self, config)
}

// Scheme-less links such as "youtu.be/abc" are common in post bodies.
fn parse_lenient(raw: &str) -> Option<Url> {
    Url::parse(raw)
        .ok()
        .filter(|url| url.has_host())
        .or_else(|| Url::parse(&format!("https://{}", raw)).ok())
        .filter(|url| url.has_host())
}
