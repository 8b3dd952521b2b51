use chrono::{NaiveTime, Timelike};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, Result};

pub const DEFAULT_ANCHOR_HOUR: u32 = 22;
pub const DEFAULT_ANCHOR_MINUTE: u32 = 0;

/// The fixed hour:minute at which the daily window resets.
///
/// Always holds a valid time of day; construct it through [`DailyAnchor::new`]
/// or by parsing `"HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DailyAnchor {
    time: NaiveTime,
}

impl DailyAnchor {
    /// Validate an anchor time.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfiguration`] when `hour` is not in
    /// `0..=23` or `minute` is not in `0..=59`.
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 {
            return Err(CoreError::invalid_value(
                "anchor.hour",
                format!("{hour} is outside 0..=23"),
            ));
        }
        if minute > 59 {
            return Err(CoreError::invalid_value(
                "anchor.minute",
                format!("{minute} is outside 0..=59"),
            ));
        }
        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
            CoreError::invalid_value("anchor", format!("{hour:02}:{minute:02} is not a time of day"))
        })?;
        Ok(Self { time })
    }

    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// Anchor as a wall-clock time (seconds and nanos are zero).
    pub fn time(&self) -> NaiveTime {
        self.time
    }
}

impl Default for DailyAnchor {
    fn default() -> Self {
        Self {
            time: NaiveTime::from_hms_opt(DEFAULT_ANCHOR_HOUR, DEFAULT_ANCHOR_MINUTE, 0)
                .unwrap_or(NaiveTime::MIN),
        }
    }
}

impl fmt::Display for DailyAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for DailyAnchor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let (h, m) = s.trim().split_once(':').ok_or_else(|| {
            CoreError::invalid_value("anchor", format!("expected HH:MM, got '{s}'"))
        })?;
        let hour = h
            .parse::<u32>()
            .map_err(|_| CoreError::invalid_value("anchor.hour", format!("cannot parse '{h}'")))?;
        let minute = m
            .parse::<u32>()
            .map_err(|_| CoreError::invalid_value("anchor.minute", format!("cannot parse '{m}'")))?;
        Self::new(hour, minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ten_pm() {
        let anchor = DailyAnchor::default();
        assert_eq!(anchor.hour(), 22);
        assert_eq!(anchor.minute(), 0);
        assert_eq!(anchor.to_string(), "22:00");
    }

    #[test]
    fn accepts_bounds() {
        assert!(DailyAnchor::new(0, 0).is_ok());
        assert!(DailyAnchor::new(23, 59).is_ok());
    }

    #[test]
    fn rejects_hour_24() {
        let err = DailyAnchor::new(24, 0).unwrap_err();
        assert!(err.is_invalid_configuration());
        assert!(err.to_string().contains("anchor.hour"));
    }

    #[test]
    fn rejects_minute_60() {
        let err = DailyAnchor::new(12, 60).unwrap_err();
        assert!(err.is_invalid_configuration());
        assert!(err.to_string().contains("anchor.minute"));
    }

    #[test]
    fn parses_hh_mm() {
        let anchor: DailyAnchor = "07:30".parse().unwrap();
        assert_eq!((anchor.hour(), anchor.minute()), (7, 30));
        assert!("7".parse::<DailyAnchor>().is_err());
        assert!("ab:00".parse::<DailyAnchor>().is_err());
        assert!("25:00".parse::<DailyAnchor>().unwrap_err().is_invalid_configuration());
    }
}
