use chrono::{Datelike, NaiveDate, Weekday};
use std::path::PathBuf;

/// Inclusive date range shown on the calendar. `first_day` is always a Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingWindow {
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl ReportingWindow {
    /// Returns `None` unless `first_day` is a Sunday on or before `last_day`.
    pub fn new(first_day: NaiveDate, last_day: NaiveDate) -> Option<Self> {
        if first_day.weekday() != Weekday::Sun || first_day > last_day {
            return None;
        }
        Some(Self { first_day, last_day })
    }

    pub(crate) fn anchored(first_day: NaiveDate, last_day: NaiveDate) -> Self {
        debug_assert_eq!(first_day.weekday(), Weekday::Sun);
        debug_assert!(first_day <= last_day);
        Self { first_day, last_day }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// Number of calendar days covered, both ends included.
    pub fn len_days(&self) -> usize {
        (self.last_day - self.first_day).num_days() as usize + 1
    }
}

/// Five-step color scale for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntensityLevel {
    None,
    Low,
    Medium,
    High,
    Max,
}

impl IntensityLevel {
    pub const ALL: [IntensityLevel; 5] = [
        IntensityLevel::None,
        IntensityLevel::Low,
        IntensityLevel::Medium,
        IntensityLevel::High,
        IntensityLevel::Max,
    ];

    /// Thresholds use closed lower bounds: 0.25 is Medium, 0.5 High, 0.75 Max.
    pub fn from_normalized(value: f64) -> Self {
        if value <= 0.0 {
            IntensityLevel::None
        } else if value < 0.25 {
            IntensityLevel::Low
        } else if value < 0.50 {
            IntensityLevel::Medium
        } else if value < 0.75 {
            IntensityLevel::High
        } else {
            IntensityLevel::Max
        }
    }
}

/// Where a commit date lands relative to a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPlacement {
    BeforeWindow,
    /// Same ordinal day-of-year as the window start, in any year at or after
    /// it. Always lands in bucket 0.
    Anchor,
    Offset(usize),
    AfterWindow,
}

impl DayPlacement {
    pub fn index(self) -> Option<usize> {
        match self {
            DayPlacement::Anchor => Some(0),
            DayPlacement::Offset(i) => Some(i),
            DayPlacement::BeforeWindow | DayPlacement::AfterWindow => None,
        }
    }
}

/// Filters handed to a log source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogQuery {
    pub author: Option<String>,
    pub paths: Vec<PathBuf>,
}

/// Binned, normalized and classified commit counts for one window.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub window: ReportingWindow,
    pub buckets: Vec<u32>,
    pub normalized: Vec<f64>,
    pub levels: Vec<IntensityLevel>,
}

impl Activity {
    pub fn total(&self) -> u64 {
        self.buckets.iter().map(|&c| c as u64).sum()
    }

    /// Date and count of the busiest day; the earliest one wins a tie.
    pub fn busiest(&self) -> Option<(NaiveDate, u32)> {
        let (idx, &count) = self
            .buckets
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(&a.0)))?;
        if count == 0 {
            return None;
        }
        let date = self.window.first_day() + chrono::Duration::days(idx as i64);
        Some((date, count))
    }
}
