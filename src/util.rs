use crate::model::ReportingWindow;
use chrono::{Datelike, NaiveDate};

const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn month_abbrev(month: u32) -> &'static str {
    MONTH_ABBREVS[(month as usize + 11) % 12]
}

/// Columns needed to lay `days` out in Sunday-first weeks.
pub fn week_count(days: usize) -> usize {
    days.div_ceil(7)
}

/// First day of the month `offset` months after `date`'s month.
fn first_of_month_after(date: NaiveDate, offset: u32) -> Option<NaiveDate> {
    let zero_based = date.month0() + offset;
    let year = date.year() + (zero_based / 12) as i32;
    NaiveDate::from_ymd_opt(year, zero_based % 12 + 1, 1)
}

/// Week columns at which each of the twelve months after the window's first
/// month begins, paired with the month's abbreviation. Months that begin past
/// the last column are left out.
pub fn month_columns(window: &ReportingWindow) -> Vec<(usize, &'static str)> {
    let weeks = week_count(window.len_days());
    (1..=12)
        .filter_map(|offset| first_of_month_after(window.first_day(), offset))
        .filter(|first| *first <= window.last_day())
        .map(|first| {
            let col = (first - window.first_day()).num_days() as usize / 7;
            (col, month_abbrev(first.month()))
        })
        .filter(|(col, _)| *col < weeks)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_count_rounds_up() {
        assert_eq!(week_count(7), 1);
        assert_eq!(week_count(8), 2);
        assert_eq!(week_count(366), 53);
        assert_eq!(week_count(371), 53);
    }

    #[test]
    fn month_abbrevs() {
        assert_eq!(month_abbrev(1), "Jan");
        assert_eq!(month_abbrev(12), "Dec");
    }

    #[test]
    fn month_columns_walk_twelve_months_across_the_year_end() {
        let window = ReportingWindow::new(date(2023, 11, 5), date(2024, 11, 4)).unwrap();
        let cols = month_columns(&window);
        assert_eq!(cols.len(), 12);
        // Dec 1 2023 is 26 days in.
        assert_eq!(cols[0], (3, "Dec"));
        assert_eq!(cols[1], (8, "Jan"));
        // Nov 1 2024 is 362 days in.
        assert_eq!(cols[11], (51, "Nov"));
    }

    #[test]
    fn month_columns_stop_at_last_day() {
        let window = ReportingWindow::new(date(2024, 1, 7), date(2024, 3, 15)).unwrap();
        let labels: Vec<_> = month_columns(&window).into_iter().map(|(_, m)| m).collect();
        assert_eq!(labels, vec!["Feb", "Mar"]);
    }
}
