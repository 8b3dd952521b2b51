//! Host-facing complication data model.
//!
//! These types mirror what a watch-face runtime exchanges with a data source:
//! the requested complication kind, the payload returned for it, and the text
//! (plain or countdown) rendered next to the value.

mod data;
mod text;
mod types;

pub use data::{ComplicationData, RangedValueData};
pub use text::{ComplicationText, TimeDifferenceStyle};
pub use types::{ComplicationRequest, ComplicationType};
