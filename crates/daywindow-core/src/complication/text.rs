//! Complication text and countdown rendering.
//!
//! Countdowns round up to the next whole minute, so a display never claims
//! less time remains than actually does. A reference instant that has been
//! reached renders as `"Now"`.

use serde::{Deserialize, Serialize};

const MS_PER_MINUTE: i64 = 60_000;
const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;

/// How a time difference is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeDifferenceStyle {
    /// `"3h 12m"`, `"1d 2h"`, `"45m"`.
    #[default]
    ShortDualUnit,
    /// `"4h"`, `"2d"`, `"45m"`.
    ShortSingleUnit,
    /// `"4 hours"`, `"45 mins"`.
    ShortWordsSingleUnit,
    /// `"3:12"`, `"1d 2h"`.
    Stopwatch,
    /// `"4 hours"`, `"45 minutes"`.
    WordsSingleUnit,
}

impl TimeDifferenceStyle {
    /// Render a non-negative difference in milliseconds.
    pub fn format(&self, diff_ms: i64) -> String {
        if diff_ms <= 0 {
            return "Now".to_string();
        }
        let minutes = div_ceil(diff_ms, MS_PER_MINUTE);

        match self {
            TimeDifferenceStyle::ShortDualUnit => dual_unit(minutes),
            TimeDifferenceStyle::ShortSingleUnit => {
                let (n, unit) = single_unit(minutes);
                format!("{n}{}", unit.abbrev())
            }
            TimeDifferenceStyle::ShortWordsSingleUnit => {
                let (n, unit) = single_unit(minutes);
                format!("{n} {}", unit.short_word(n))
            }
            TimeDifferenceStyle::WordsSingleUnit => {
                let (n, unit) = single_unit(minutes);
                format!("{n} {}", unit.word(n))
            }
            TimeDifferenceStyle::Stopwatch => {
                if minutes < MINUTES_PER_DAY {
                    format!("{}:{:02}", minutes / MINUTES_PER_HOUR, minutes % MINUTES_PER_HOUR)
                } else {
                    dual_unit(minutes)
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Day,
    Hour,
    Minute,
}

impl Unit {
    fn abbrev(self) -> &'static str {
        match self {
            Unit::Day => "d",
            Unit::Hour => "h",
            Unit::Minute => "m",
        }
    }

    fn short_word(self, n: i64) -> &'static str {
        match (self, n == 1) {
            (Unit::Day, true) => "day",
            (Unit::Day, false) => "days",
            (Unit::Hour, true) => "hour",
            (Unit::Hour, false) => "hours",
            (Unit::Minute, true) => "min",
            (Unit::Minute, false) => "mins",
        }
    }

    fn word(self, n: i64) -> &'static str {
        match (self, n == 1) {
            (Unit::Minute, true) => "minute",
            (Unit::Minute, false) => "minutes",
            _ => self.short_word(n),
        }
    }
}

// Non-negative `n` only; never overflows.
fn div_ceil(n: i64, d: i64) -> i64 {
    n / d + i64::from(n % d != 0)
}

fn dual_unit(minutes: i64) -> String {
    if minutes >= MINUTES_PER_DAY {
        let hours = div_ceil(minutes, MINUTES_PER_HOUR);
        let (d, h) = (hours / 24, hours % 24);
        if h == 0 {
            format!("{d}d")
        } else {
            format!("{d}d {h}h")
        }
    } else if minutes >= MINUTES_PER_HOUR {
        let (h, m) = (minutes / MINUTES_PER_HOUR, minutes % MINUTES_PER_HOUR);
        if m == 0 {
            format!("{h}h")
        } else {
            format!("{h}h {m}m")
        }
    } else {
        format!("{minutes}m")
    }
}

fn single_unit(minutes: i64) -> (i64, Unit) {
    if minutes >= MINUTES_PER_DAY {
        (div_ceil(minutes, MINUTES_PER_DAY), Unit::Day)
    } else if minutes >= MINUTES_PER_HOUR {
        (div_ceil(minutes, MINUTES_PER_HOUR), Unit::Hour)
    } else {
        (minutes, Unit::Minute)
    }
}

/// Text shown alongside a complication value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComplicationText {
    Plain {
        text: String,
    },
    /// Counts down to a fixed instant; re-rendered by the host as time passes.
    TimeDifference {
        style: TimeDifferenceStyle,
        countdown_to_ms: i64,
    },
}

impl ComplicationText {
    pub fn plain(text: impl Into<String>) -> Self {
        ComplicationText::Plain { text: text.into() }
    }

    pub fn countdown(style: TimeDifferenceStyle, countdown_to_ms: i64) -> Self {
        ComplicationText::TimeDifference {
            style,
            countdown_to_ms,
        }
    }

    /// Text as it should appear at `now_ms`.
    pub fn render(&self, now_ms: i64) -> String {
        match self {
            ComplicationText::Plain { text } => text.clone(),
            ComplicationText::TimeDifference {
                style,
                countdown_to_ms,
            } => style.format(countdown_to_ms.saturating_sub(now_ms)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: i64 = 60_000;
    const HOUR: i64 = 60 * MIN;
    const DAY: i64 = 24 * HOUR;

    #[test]
    fn zero_and_past_render_now() {
        for style in [
            TimeDifferenceStyle::ShortDualUnit,
            TimeDifferenceStyle::Stopwatch,
            TimeDifferenceStyle::WordsSingleUnit,
        ] {
            assert_eq!(style.format(0), "Now");
            assert_eq!(style.format(-5 * MIN), "Now");
        }
    }

    #[test]
    fn short_dual_unit() {
        let s = TimeDifferenceStyle::ShortDualUnit;
        assert_eq!(s.format(HOUR), "1h");
        assert_eq!(s.format(3 * HOUR + 12 * MIN), "3h 12m");
        assert_eq!(s.format(45 * MIN), "45m");
        assert_eq!(s.format(DAY + 2 * HOUR), "1d 2h");
        // 23h59m59s rounds up to a full day
        assert_eq!(s.format(DAY - 1000), "1d");
    }

    #[test]
    fn rounds_partial_minutes_up() {
        let s = TimeDifferenceStyle::ShortDualUnit;
        assert_eq!(s.format(1), "1m");
        assert_eq!(s.format(59 * MIN + 1), "1h");
        assert_eq!(s.format(HOUR + 30_000), "1h 1m");
    }

    #[test]
    fn extreme_differences_do_not_overflow() {
        assert_eq!(TimeDifferenceStyle::ShortDualUnit.format(i64::MAX), "106751991167d 8h");
        assert_eq!(TimeDifferenceStyle::ShortSingleUnit.format(i64::MAX), "106751991168d");
        assert_eq!(TimeDifferenceStyle::Stopwatch.format(i64::MAX), "106751991167d 8h");

        let text = ComplicationText::countdown(TimeDifferenceStyle::ShortDualUnit, i64::MAX);
        assert_eq!(text.render(0), "106751991167d 8h");
        assert_eq!(text.render(i64::MIN), "106751991167d 8h");
        let past = ComplicationText::countdown(TimeDifferenceStyle::ShortDualUnit, i64::MIN);
        assert_eq!(past.render(i64::MAX), "Now");
    }

    #[test]
    fn single_unit_styles() {
        assert_eq!(TimeDifferenceStyle::ShortSingleUnit.format(3 * HOUR + MIN), "4h");
        assert_eq!(TimeDifferenceStyle::ShortSingleUnit.format(DAY + HOUR), "2d");
        assert_eq!(TimeDifferenceStyle::ShortWordsSingleUnit.format(MIN), "1 min");
        assert_eq!(TimeDifferenceStyle::ShortWordsSingleUnit.format(45 * MIN), "45 mins");
        assert_eq!(TimeDifferenceStyle::WordsSingleUnit.format(45 * MIN), "45 minutes");
        assert_eq!(TimeDifferenceStyle::WordsSingleUnit.format(HOUR), "1 hour");
    }

    #[test]
    fn stopwatch() {
        let s = TimeDifferenceStyle::Stopwatch;
        assert_eq!(s.format(3 * HOUR + 12 * MIN), "3:12");
        assert_eq!(s.format(5 * MIN), "0:05");
        assert_eq!(s.format(DAY + 2 * HOUR), "1d 2h");
    }

    #[test]
    fn countdown_renders_relative_to_now() {
        let text = ComplicationText::countdown(TimeDifferenceStyle::ShortDualUnit, 10 * HOUR);
        assert_eq!(text.render(7 * HOUR), "3h");
        assert_eq!(text.render(10 * HOUR), "Now");
        assert_eq!(ComplicationText::plain("hi").render(0), "hi");
    }
}
