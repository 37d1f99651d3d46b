use super::{compute_activity, output_calendar, validate_paths, GitLogSource, LogSource};
use crate::config::Settings;
use crate::error::Result;
use crate::model::{Activity, LogQuery, ReportingWindow};
use crate::window::compute_window;
use anyhow::Context;
use chrono::Utc;
use tracing::info;

/// Fetches the log for `query` from `source` and bins it into `window`.
pub fn collect_activity<S: LogSource + ?Sized>(
    source: &S,
    query: &LogQuery,
    window: ReportingWindow,
) -> Result<Activity> {
    let raw = source.fetch(query)?;
    compute_activity(window, &raw)
}

pub fn exec(settings: &Settings, query: LogQuery) -> anyhow::Result<()> {
    validate_paths(&query.paths)?;

    let window = compute_window(Utc::now(), settings.leap_rule);
    info!(
        first_day = %window.first_day(),
        last_day = %window.last_day(),
        rule = ?settings.leap_rule,
        "computed reporting window"
    );

    let source = GitLogSource::new(
        settings.git_program.clone(),
        settings.workdir.clone(),
        settings.timeout,
    );
    let activity = collect_activity(&source, &query, window)
        .context("Failed to collect commit activity")?;

    output_calendar(&activity);
    Ok(())
}
