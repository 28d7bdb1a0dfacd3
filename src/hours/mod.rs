pub mod calc;
pub mod range;

pub use calc::{
    compare_ranges, compare_ranges_hhmm, format_delta, minutes_between, split_normal_and_overtime,
    summarize, HourSplit, WorkedSummary, DEFAULT_DAILY_CAP_MINUTES,
};
pub use range::{format_hhmm, parse_hhmm, TimeRange};
