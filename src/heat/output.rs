use crate::model::{Activity, IntensityLevel};
use crate::util::{month_columns, week_count};
use console::Style;

const GLYPH: &str = "■";
const GUTTER: usize = 4;
const CELL_WIDTH: usize = 2;

fn level_style(level: IntensityLevel, colored: bool) -> Style {
    let code = match level {
        IntensityLevel::None => 237,
        IntensityLevel::Low => 22,
        IntensityLevel::Medium => 28,
        IntensityLevel::High => 34,
        IntensityLevel::Max => 40,
    };
    Style::new().color256(code).force_styling(colored)
}

fn weekday_label(row: usize) -> &'static str {
    match row {
        1 => "Mon",
        3 => "Wed",
        5 => "Fri",
        _ => "",
    }
}

fn month_header(activity: &Activity) -> String {
    let mut header = " ".repeat(GUTTER);
    for (col, label) in month_columns(&activity.window) {
        let at = GUTTER + col * CELL_WIDTH;
        // Keep at least one space between labels.
        if at < header.len() + 1 && header.len() > GUTTER {
            continue;
        }
        while header.len() < at {
            header.push(' ');
        }
        header.push_str(label);
    }
    header.trim_end().to_string()
}

/// Renders the calendar grid: a month header, seven Sunday-first weekday
/// rows, a legend and a one-line summary.
pub fn render_calendar(activity: &Activity, colored: bool) -> String {
    let days = activity.levels.len();
    let weeks = week_count(days);
    let mut lines = vec![month_header(activity)];

    for row in 0..7 {
        let mut line = format!("{:<width$}", weekday_label(row), width = GUTTER);
        let cells: Vec<String> = (0..weeks)
            .map(|col| col * 7 + row)
            .take_while(|&idx| idx < days)
            .map(|idx| {
                level_style(activity.levels[idx], colored)
                    .apply_to(GLYPH)
                    .to_string()
            })
            .collect();
        line.push_str(&cells.join(" "));
        lines.push(line.trim_end().to_string());
    }

    let legend: Vec<String> = IntensityLevel::ALL
        .iter()
        .map(|&level| level_style(level, colored).apply_to(GLYPH).to_string())
        .collect();
    lines.push(String::new());
    lines.push(format!("{}Less {} More", " ".repeat(GUTTER), legend.join(" ")));
    lines.push(format!("{}{}", " ".repeat(GUTTER), summary(activity)));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn summary(activity: &Activity) -> String {
    let total = activity.total();
    let first = activity.window.first_day();
    let last = activity.window.last_day();
    match activity.busiest() {
        Some((day, count)) => format!(
            "{total} commit{} from {first} to {last}; busiest day {day} ({count})",
            if total == 1 { "" } else { "s" }
        ),
        None => format!("No commits from {first} to {last}"),
    }
}

pub fn output_calendar(activity: &Activity) {
    print!("{}", render_calendar(activity, console::colors_enabled()));
}
