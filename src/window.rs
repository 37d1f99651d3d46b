use crate::error::GitCalError;
use crate::model::ReportingWindow;
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use std::str::FromStr;

/// How "one year ago" is measured when anchoring the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LeapRule {
    /// Always step back 365 days. Earlier git-cal releases tested for a leap
    /// year with `y % 4 == 0 && y % 100 != 0 && y % 400 == 0`, which never
    /// holds, so this keeps their windows unchanged.
    #[default]
    Legacy,
    /// Step back 366 days when the current year is a Gregorian leap year and
    /// February is already behind us.
    Gregorian,
}

impl LeapRule {
    pub fn days_back(self, today: NaiveDate) -> i64 {
        match self {
            LeapRule::Legacy => 365,
            LeapRule::Gregorian => {
                if is_leap_year(today.year()) && today.month() > 2 {
                    366
                } else {
                    365
                }
            }
        }
    }
}

impl FromStr for LeapRule {
    type Err = GitCalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(LeapRule::Legacy),
            "gregorian" => Ok(LeapRule::Gregorian),
            other => Err(GitCalError::Config(format!(
                "unknown leap rule '{other}' (expected 'legacy' or 'gregorian')"
            ))),
        }
    }
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Computes the reporting window ending at `now`.
///
/// The start is the Sunday strictly before "one year ago" when that day is
/// itself a Sunday, and the Sunday on or before it otherwise: the step back is
/// `weekday + 1` days with Monday = 0, so a Sunday steps back a full week.
pub fn compute_window(now: DateTime<Utc>, rule: LeapRule) -> ReportingWindow {
    let today = now.date_naive();
    let one_year_ago = today - Duration::days(rule.days_back(today));
    let back = one_year_ago.weekday().num_days_from_monday() as i64 + 1;
    let first_day = one_year_ago - Duration::days(back);
    ReportingWindow::anchored(first_day, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Weekday};
    use pretty_assertions::assert_eq;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 30, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn last_day_is_today() {
        let w = compute_window(at(2024, 11, 4), LeapRule::Legacy);
        assert_eq!(w.last_day(), date(2024, 11, 4));
        assert_eq!(w.first_day(), date(2023, 10, 29));
    }

    #[test]
    fn sunday_one_year_ago_steps_back_a_full_week() {
        // 2025-06-09 minus 365 days is Sunday 2024-06-09.
        let w = compute_window(at(2025, 6, 9), LeapRule::Legacy);
        assert_eq!(w.first_day(), date(2024, 6, 2));
    }

    #[test]
    fn monday_one_year_ago_steps_back_one_day() {
        // 2025-06-10 minus 365 days is Monday 2024-06-10.
        let w = compute_window(at(2025, 6, 10), LeapRule::Legacy);
        assert_eq!(w.first_day(), date(2024, 6, 9));
    }

    #[test]
    fn legacy_and_gregorian_differ_after_february_of_a_leap_year() {
        let now = at(2024, 3, 12);
        assert_eq!(LeapRule::Legacy.days_back(now.date_naive()), 365);
        assert_eq!(LeapRule::Gregorian.days_back(now.date_naive()), 366);
        assert_eq!(compute_window(now, LeapRule::Legacy).first_day(), date(2023, 3, 12));
        assert_eq!(compute_window(now, LeapRule::Gregorian).first_day(), date(2023, 3, 5));
    }

    #[test]
    fn gregorian_matches_legacy_before_march() {
        let now = at(2024, 2, 29);
        assert_eq!(LeapRule::Gregorian.days_back(now.date_naive()), 365);
        assert_eq!(
            compute_window(now, LeapRule::Gregorian),
            compute_window(now, LeapRule::Legacy)
        );
    }

    #[test]
    fn every_day_yields_a_sunday_anchored_window() {
        let mut day = date(2019, 1, 1);
        while day <= date(2031, 12, 31) {
            let now = Utc.from_utc_datetime(&day.and_hms_opt(23, 59, 59).unwrap());
            for rule in [LeapRule::Legacy, LeapRule::Gregorian] {
                let w = compute_window(now, rule);
                assert_eq!(w.first_day().weekday(), Weekday::Sun, "{day} {rule:?}");
                let span = (w.last_day() - w.first_day()).num_days();
                let max = if rule == LeapRule::Legacy { 372 } else { 373 };
                assert!((366..=max).contains(&span), "{day} {rule:?} span {span}");
            }
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn parses_rule_names() {
        assert_eq!("legacy".parse::<LeapRule>().unwrap(), LeapRule::Legacy);
        assert_eq!(" Gregorian ".parse::<LeapRule>().unwrap(), LeapRule::Gregorian);
        assert!("julian".parse::<LeapRule>().is_err());
    }
}
