//! Daily window calculator.
//!
//! Maps an instant to the bounds of the repeating daily window that contains
//! it. The window always ends at the next occurrence of the anchor time (or at
//! `now` itself when `now` sits exactly on the anchor) and starts 24 hours
//! earlier.
//!
//! The anchor is resolved in the UTC offset in effect at `now`, so the window
//! is exactly 24 hours of elapsed time even across daylight-saving changes.

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::anchor::DailyAnchor;
use crate::error::{CoreError, Result};

/// The current repeating window, computed fresh per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow<Tz: TimeZone> {
    start: DateTime<Tz>,
    end: DateTime<Tz>,
    now: DateTime<Tz>,
}

impl<Tz: TimeZone> TimeWindow<Tz> {
    pub fn start(&self) -> &DateTime<Tz> {
        &self.start
    }

    pub fn end(&self) -> &DateTime<Tz> {
        &self.end
    }

    pub fn now(&self) -> &DateTime<Tz> {
        &self.now
    }

    /// Time left until the window closes.
    pub fn remaining(&self) -> Duration {
        self.end.clone() - self.now.clone()
    }

    /// Time since the window opened.
    pub fn elapsed(&self) -> Duration {
        self.now.clone() - self.start.clone()
    }

    /// `now` as epoch milliseconds.
    pub fn progress_value_ms(&self) -> i64 {
        self.now.timestamp_millis()
    }

    pub fn range_min_ms(&self) -> i64 {
        self.start.timestamp_millis()
    }

    pub fn range_max_ms(&self) -> i64 {
        self.end.timestamp_millis()
    }

    /// 0.0 .. 1.0 progress through the window.
    pub fn fraction(&self) -> f64 {
        let total = self.range_max_ms() - self.range_min_ms();
        if total <= 0 {
            return 0.0;
        }
        (self.progress_value_ms() - self.range_min_ms()) as f64 / total as f64
    }

    /// Inclusive on both bounds.
    pub fn contains<T: TimeZone>(&self, instant: &DateTime<T>) -> bool {
        let at = instant.with_timezone(&Utc);
        self.start.with_timezone(&Utc) <= at && at <= self.end.with_timezone(&Utc)
    }

    /// Serializable snapshot of the presentation values.
    pub fn snapshot(&self) -> WindowSnapshot {
        WindowSnapshot {
            start: self.start.fixed_offset(),
            end: self.end.fixed_offset(),
            now: self.now.fixed_offset(),
            progress_value_ms: self.progress_value_ms(),
            range_min_ms: self.range_min_ms(),
            range_max_ms: self.range_max_ms(),
            remaining_ms: self.remaining().num_milliseconds(),
            fraction: self.fraction(),
        }
    }
}

/// Flattened view of a [`TimeWindow`] for printing or handing to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSnapshot {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub now: DateTime<FixedOffset>,
    pub progress_value_ms: i64,
    pub range_min_ms: i64,
    pub range_max_ms: i64,
    pub remaining_ms: i64,
    pub fraction: f64,
}

/// Stateless calculator for a fixed daily anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DailyWindowCalculator {
    anchor: DailyAnchor,
}

impl DailyWindowCalculator {
    pub fn new(anchor: DailyAnchor) -> Self {
        Self { anchor }
    }

    pub fn anchor(&self) -> DailyAnchor {
        self.anchor
    }

    /// Window containing `now`.
    ///
    /// `now` equal to the anchor instant belongs to the window that is about
    /// to close (`end == now`), not to tomorrow's.
    ///
    /// The anchor is read in the UTC offset in effect at `now`, not in the
    /// zone's rules for the day of `end`. When a daylight-saving change falls
    /// inside the window, `end` is still exactly 24 hours after `start`, but
    /// its wall-clock reading in `now`'s zone is the anchor shifted by the
    /// offset change (22:00 reads as 23:00 after a spring-forward). Requests
    /// made after the change see the anchor at its wall-clock time again.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::OutOfRange`] when the window would fall
    /// outside the range of representable instants.
    pub fn compute_window<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Result<TimeWindow<Tz>> {
        let out_of_range = || CoreError::OutOfRange {
            now: now.with_timezone(&Utc),
        };
        let local = now.fixed_offset();
        let offset = *local.offset();

        let anchor_local = local.date_naive().and_time(self.anchor.time());
        let anchor_utc = anchor_local
            .checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))
            .ok_or_else(out_of_range)?;
        let mut end = DateTime::<FixedOffset>::from_naive_utc_and_offset(anchor_utc, offset);

        if end < local {
            end = end.checked_add_signed(Duration::days(1)).ok_or_else(out_of_range)?;
        }
        let start = end.checked_sub_signed(Duration::hours(24)).ok_or_else(out_of_range)?;

        tracing::trace!(anchor = %self.anchor, %start, %end, now = %local, "computed daily window");

        let tz = now.timezone();
        Ok(TimeWindow {
            start: start.with_timezone(&tz),
            end: end.with_timezone(&tz),
            now: now.clone(),
        })
    }
}

/// Validate the anchor and compute the window containing `now`.
///
/// # Errors
///
/// Returns [`crate::CoreError::InvalidConfiguration`] if `anchor_hour` is not
/// in `0..=23` or `anchor_minute` is not in `0..=59`, and
/// [`crate::CoreError::OutOfRange`] if the window cannot be represented.
pub fn compute_window<Tz: TimeZone>(
    now: &DateTime<Tz>,
    anchor_hour: u32,
    anchor_minute: u32,
) -> Result<TimeWindow<Tz>> {
    let anchor = DailyAnchor::new(anchor_hour, anchor_minute)?;
    DailyWindowCalculator::new(anchor).compute_window(now)
}
