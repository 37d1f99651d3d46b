pub mod aggregate;
pub mod exec;
pub mod fetch;
pub mod output;

pub use aggregate::{bin, classify, compute_activity, normalize, parse_timestamps, place_day};
pub use exec::{collect_activity, exec};
pub use fetch::{log_args, validate_paths, GitLogSource, LogSource};
pub use output::{output_calendar, render_calendar};
