//! Complication data source.
//!
//! The host runtime drives a data source through a handful of callbacks:
//! activation, deactivation, preview and data requests. Here those callbacks
//! are plain method calls; the caller supplies "now" and receives a payload,
//! with no state retained between calls.

use chrono::{DateTime, FixedOffset, Utc};

use crate::complication::{
    ComplicationData, ComplicationRequest, ComplicationText, ComplicationType, RangedValueData,
    TimeDifferenceStyle,
};
use crate::error::Result;
use crate::events::Event;
use crate::storage::Config;
use crate::window::DailyWindowCalculator;

pub const PREVIEW_VALUE: f64 = 4.0;
pub const PREVIEW_MIN: f64 = 0.0;
pub const PREVIEW_MAX: f64 = 10.0;
pub const PREVIEW_DESCRIPTION: &str = "Ranged Value version of Number.";

/// Callbacks a watch-face host invokes on a complication data source.
pub trait ComplicationDataSource: Send + Sync {
    /// A complication slot started using this source.
    fn on_activated(&self, instance_id: i32, complication_type: ComplicationType) -> Event;

    /// A complication slot stopped using this source.
    fn on_deactivated(&self, instance_id: i32) -> Event;

    /// Static example data for the watch-face editor.
    fn preview_data(&self, complication_type: ComplicationType) -> ComplicationData;

    /// Live data for `request` at `now`, or `None` when the requested type
    /// is not supported or no payload can be built for `now`.
    fn on_request(
        &self,
        request: &ComplicationRequest,
        now: DateTime<FixedOffset>,
    ) -> Option<ComplicationData>;

    /// Answer a request and record it as an [`Event::DataRequested`].
    fn handle_request(
        &self,
        request: &ComplicationRequest,
        now: DateTime<FixedOffset>,
    ) -> (Option<ComplicationData>, Event) {
        let data = self.on_request(request, now);
        let event = Event::DataRequested {
            instance_id: request.instance_id,
            complication_type: request.complication_type,
            served: data.is_some(),
            at: now.with_timezone(&Utc),
        };
        (data, event)
    }
}

/// Ranged-value countdown to the next daily anchor.
///
/// The value is "now", the range is the current daily window, and the text
/// counts down to the window's end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DailyCountdownSource {
    calculator: DailyWindowCalculator,
    style: TimeDifferenceStyle,
}

impl DailyCountdownSource {
    pub fn new(calculator: DailyWindowCalculator, style: TimeDifferenceStyle) -> Self {
        Self { calculator, style }
    }

    /// Build from a loaded config, validating the anchor.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::InvalidConfiguration`] if the configured
    /// anchor is out of range.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.calculator()?, config.countdown.style))
    }

    pub fn calculator(&self) -> &DailyWindowCalculator {
        &self.calculator
    }

    pub fn style(&self) -> TimeDifferenceStyle {
        self.style
    }

    fn ranged_value(&self, now: DateTime<FixedOffset>) -> Option<ComplicationData> {
        let window = match self.calculator.compute_window(&now) {
            Ok(window) => window,
            Err(e) => {
                tracing::warn!(error = %e, "no daily window for request");
                return None;
            }
        };
        let description = format!("Time until {}", self.calculator.anchor());
        match RangedValueData::new(
            window.progress_value_ms() as f64,
            window.range_min_ms() as f64,
            window.range_max_ms() as f64,
            description,
        ) {
            Ok(data) => Some(ComplicationData::RangedValue(data.with_text(
                ComplicationText::countdown(self.style, window.range_max_ms()),
            ))),
            Err(e) => {
                tracing::error!(error = %e, "daily window produced an invalid ranged value");
                None
            }
        }
    }
}

impl ComplicationDataSource for DailyCountdownSource {
    fn on_activated(&self, instance_id: i32, complication_type: ComplicationType) -> Event {
        tracing::debug!(instance_id, %complication_type, "complication activated");
        Event::ComplicationActivated {
            instance_id,
            complication_type,
            at: Utc::now(),
        }
    }

    fn on_deactivated(&self, instance_id: i32) -> Event {
        tracing::debug!(instance_id, "complication deactivated");
        Event::ComplicationDeactivated {
            instance_id,
            at: Utc::now(),
        }
    }

    fn preview_data(&self, complication_type: ComplicationType) -> ComplicationData {
        tracing::trace!(%complication_type, "preview requested");
        ComplicationData::RangedValue(RangedValueData {
            value: PREVIEW_VALUE,
            min: PREVIEW_MIN,
            max: PREVIEW_MAX,
            content_description: PREVIEW_DESCRIPTION.to_string(),
            text: None,
        })
    }

    fn on_request(
        &self,
        request: &ComplicationRequest,
        now: DateTime<FixedOffset>,
    ) -> Option<ComplicationData> {
        match request.complication_type {
            ComplicationType::RangedValue => self.ranged_value(now),
            other => {
                tracing::warn!(
                    instance_id = request.instance_id,
                    complication_type = %other,
                    "unexpected complication type"
                );
                None
            }
        }
    }
}
