mod anchor;
mod calculator;

pub use anchor::{DailyAnchor, DEFAULT_ANCHOR_HOUR, DEFAULT_ANCHOR_MINUTE};
pub use calculator::{compute_window, DailyWindowCalculator, TimeWindow, WindowSnapshot};
