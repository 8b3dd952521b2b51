//! # daywindow Core Library
//!
//! This library provides the logic behind a watch-face complication that
//! counts down to a fixed daily time (for example "time left until 22:00").
//! All operations are available through the standalone CLI binary; a host
//! runtime would call the same data source from its own lifecycle hooks.
//!
//! ## Architecture
//!
//! - **Window**: a pure calculator mapping "now" to the repeating 24-hour
//!   window that ends at the next anchor time
//! - **Complication**: host data model (request types, ranged values,
//!   countdown text)
//! - **Source**: the data source answering activation, preview and data
//!   requests
//! - **Storage**: TOML-based configuration of the anchor and text style
//!
//! ## Key Components
//!
//! - [`DailyWindowCalculator`]: window computation for a validated anchor
//! - [`DailyCountdownSource`]: ranged-value complication data source
//! - [`Config`]: application configuration management

pub mod complication;
pub mod error;
pub mod events;
pub mod source;
pub mod storage;
pub mod window;

pub use complication::{
    ComplicationData, ComplicationRequest, ComplicationText, ComplicationType, RangedValueData,
    TimeDifferenceStyle,
};
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use events::Event;
pub use source::{ComplicationDataSource, DailyCountdownSource};
pub use storage::Config;
pub use window::{compute_window, DailyAnchor, DailyWindowCalculator, TimeWindow, WindowSnapshot};
