pub mod complication;
pub mod config;
pub mod window;

use chrono::{DateTime, FixedOffset, Local};
use daywindow_core::{Config, DailyAnchor};

/// Parse `--at` as RFC 3339, defaulting to the local wall clock.
pub fn resolve_now(at: Option<&str>) -> Result<DateTime<FixedOffset>, Box<dyn std::error::Error>> {
    match at {
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map_err(|e| format!("invalid --at '{s}': {e}").into()),
        None => Ok(Local::now().fixed_offset()),
    }
}

/// Load config, letting `--anchor HH:MM` override the stored anchor.
pub fn load_config(anchor: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = Config::load()?;
    if let Some(s) = anchor {
        let anchor: DailyAnchor = s.parse()?;
        config.anchor.hour = anchor.hour();
        config.anchor.minute = anchor.minute();
    }
    Ok(config)
}
