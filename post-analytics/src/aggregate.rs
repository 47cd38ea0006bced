//! Collection-level aggregations over a batch of posts.

use crate::counter::RankedCounter;
use crate::metrics::{round_to, METRIC_PRECISION};
use chrono::{Local, TimeZone, Timelike, Utc};
use insights_core::{ContentType, DELETED_AUTHOR};
use std::collections::BTreeMap;
use tracing::debug;
use url::Url;

/// Host of `url`, lowercased, without a leading `www.`.
pub fn extract_domain(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = parsed.host_str()?.to_lowercase();
    let domain = host.strip_prefix("www.").unwrap_or(&host);
    if domain.is_empty() {
        None
    } else {
        Some(domain.to_string())
    }
}

/// Counts posts per linked domain, most common first.
///
/// URLs without a parseable host are skipped.
pub fn source_distribution<I, S>(urls: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counter = RankedCounter::new();
    for url in urls {
        match extract_domain(url.as_ref()) {
            Some(domain) => counter.add(domain),
            None => debug!("Skipping URL without a domain: {:?}", url.as_ref()),
        }
    }
    counter.into_ranked()
}

/// Top `k` authors by post count. Missing or blank authors count as
/// [`DELETED_AUTHOR`].
pub fn top_contributors<'a, I>(authors: I, k: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let counter: RankedCounter = authors
        .into_iter()
        .map(|author| match author.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => DELETED_AUTHOR.to_string(),
        })
        .collect();
    counter.top(k)
}

/// Number of timestamps falling in each hour of the day in `tz`.
pub fn hourly_distribution<I, Tz>(timestamps: I, tz: &Tz) -> [usize; 24]
where
    I: IntoIterator<Item = i64>,
    Tz: TimeZone,
{
    let mut hours = [0usize; 24];
    for ts in timestamps {
        match Utc.timestamp_opt(ts, 0).single() {
            Some(utc) => hours[utc.with_timezone(tz).hour() as usize] += 1,
            None => debug!("Skipping out-of-range timestamp {}", ts),
        }
    }
    hours
}

/// [`hourly_distribution`] in the host's local time zone.
pub fn hourly_distribution_local<I>(timestamps: I) -> [usize; 24]
where
    I: IntoIterator<Item = i64>,
{
    hourly_distribution(timestamps, &Local)
}

/// Hour with the highest mean score. Ties go to the earliest hour.
pub fn peak_hour(samples: &[(u32, i64)]) -> Option<u32> {
    let mut totals: BTreeMap<u32, (f64, u32)> = BTreeMap::new();
    for &(hour, score) in samples {
        let entry = totals.entry(hour).or_insert((0.0, 0));
        entry.0 += score as f64;
        entry.1 += 1;
    }

    let mut best: Option<(u32, f64)> = None;
    for (hour, (sum, count)) in totals {
        let mean = sum / count as f64;
        match best {
            Some((_, best_mean)) if mean <= best_mean => {}
            _ => best = Some((hour, mean)),
        }
    }
    best.map(|(hour, _)| hour)
}

/// Count per content type, in [`ContentType::ALL`] order, zeros included.
pub fn content_type_mix<I>(types: I) -> Vec<(ContentType, usize)>
where
    I: IntoIterator<Item = ContentType>,
{
    let mut counts: BTreeMap<ContentType, usize> = BTreeMap::new();
    for content_type in types {
        *counts.entry(content_type).or_insert(0) += 1;
    }
    ContentType::ALL
        .iter()
        .map(|ct| (*ct, counts.get(ct).copied().unwrap_or(0)))
        .collect()
}

/// Arithmetic mean rounded to [`METRIC_PRECISION`] places; 0.0 for no values.
pub fn average<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        round_to(sum / count as f64, METRIC_PRECISION)
    }
}
