use crate::error::{GitCalError, Result};
use crate::model::{Activity, DayPlacement, IntensityLevel, ReportingWindow};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use tracing::debug;

/// Parses newline-separated UNIX epoch seconds. Blank lines are skipped; any
/// other line that is not an integer epoch is rejected.
pub fn parse_timestamps(raw: &str) -> Result<Vec<DateTime<Utc>>> {
    let mut out = Vec::new();
    for (idx, line) in raw.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let malformed = || GitCalError::MalformedTimestamp {
            line_number: idx + 1,
            line: trimmed.to_string(),
        };
        let secs: i64 = trimmed.parse().map_err(|_| malformed())?;
        let ts = DateTime::<Utc>::from_timestamp(secs, 0).ok_or_else(malformed)?;
        out.push(ts);
    }
    Ok(out)
}

/// Places a commit date relative to `window`.
///
/// Comparison is by year and ordinal day-of-year against the window start.
/// A date sharing the start's ordinal is the anchor regardless of its year, so
/// e.g. with a window starting on day 309 of 2023, day 309 of 2024 lands in
/// bucket 0 rather than at its true offset.
pub fn place_day(window: &ReportingWindow, date: NaiveDate) -> DayPlacement {
    let first = window.first_day();
    if date.year() < first.year() {
        return DayPlacement::BeforeWindow;
    }
    if date.year() == first.year() && date.ordinal() < first.ordinal() {
        return DayPlacement::BeforeWindow;
    }
    if date.ordinal() == first.ordinal() {
        return DayPlacement::Anchor;
    }
    let offset = (date - first).num_days();
    match usize::try_from(offset) {
        Ok(idx) if idx < window.len_days() => DayPlacement::Offset(idx),
        _ => DayPlacement::AfterWindow,
    }
}

/// Counts commits per day of `window`. Index 0 is the window's first day.
pub fn bin(window: &ReportingWindow, timestamps: &[DateTime<Utc>]) -> Vec<u32> {
    let mut buckets = vec![0u32; window.len_days()];
    let mut dropped = 0usize;
    for ts in timestamps {
        match place_day(window, ts.date_naive()).index() {
            Some(idx) => buckets[idx] += 1,
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        debug!(dropped, "commits outside the reporting window");
    }
    buckets
}

/// Scales each bucket by the busiest day. An empty history normalizes to all
/// zeros.
pub fn normalize(buckets: &[u32]) -> Vec<f64> {
    let max = buckets.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return vec![0.0; buckets.len()];
    }
    buckets.iter().map(|&c| c as f64 / max as f64).collect()
}

pub fn classify(normalized: &[f64]) -> Vec<IntensityLevel> {
    normalized
        .iter()
        .map(|&v| IntensityLevel::from_normalized(v))
        .collect()
}

/// Parses raw log text and produces the full activity picture for `window`.
pub fn compute_activity(window: ReportingWindow, raw: &str) -> Result<Activity> {
    let timestamps = parse_timestamps(raw)?;
    debug!(commits = timestamps.len(), "parsed commit timestamps");
    let buckets = bin(&window, &timestamps);
    let normalized = normalize(&buckets);
    let levels = classify(&normalized);
    Ok(Activity {
        window,
        buckets,
        normalized,
        levels,
    })
}
