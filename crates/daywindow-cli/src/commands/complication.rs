use clap::Args;
use daywindow_core::{
    ComplicationDataSource, ComplicationRequest, ComplicationType, DailyCountdownSource,
};

use super::{load_config, resolve_now};

#[derive(Args)]
pub struct RequestArgs {
    /// Complication type (e.g. ranged_value, short_text)
    pub complication_type: String,
    /// Complication instance id
    #[arg(long, default_value = "0")]
    pub instance: i32,
    /// Instant to answer for (RFC 3339); defaults to now
    #[arg(long)]
    pub at: Option<String>,
    /// Anchor time HH:MM; defaults to the configured anchor
    #[arg(long)]
    pub anchor: Option<String>,
}

fn source(anchor: Option<&str>) -> Result<DailyCountdownSource, Box<dyn std::error::Error>> {
    let config = load_config(anchor)?;
    Ok(DailyCountdownSource::from_config(&config)?)
}

/// Prints the payload as JSON, or `null` when the type is not served.
pub fn request(args: RequestArgs) -> Result<(), Box<dyn std::error::Error>> {
    let complication_type: ComplicationType = args.complication_type.parse()?;
    let source = source(args.anchor.as_deref())?;
    let now = resolve_now(args.at.as_deref())?;

    let request = ComplicationRequest::new(args.instance, complication_type);
    let (data, event) = source.handle_request(&request, now);
    tracing::debug!(event = %serde_json::to_string(&event)?, "request handled");

    if let Some(ref payload) = data {
        if let Some(text) = payload.as_ranged_value().and_then(|r| r.text.as_ref()) {
            tracing::info!(countdown = %text.render(now.timestamp_millis()), "countdown");
        }
    }
    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}

pub fn preview(complication_type: &str) -> Result<(), Box<dyn std::error::Error>> {
    let complication_type: ComplicationType = complication_type.parse()?;
    let data = DailyCountdownSource::default().preview_data(complication_type);
    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}

pub fn activate(instance_id: i32, complication_type: &str) -> Result<(), Box<dyn std::error::Error>> {
    let complication_type: ComplicationType = complication_type.parse()?;
    let event = DailyCountdownSource::default().on_activated(instance_id, complication_type);
    println!("{}", serde_json::to_string_pretty(&event)?);
    Ok(())
}

pub fn deactivate(instance_id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let event = DailyCountdownSource::default().on_deactivated(instance_id);
    println!("{}", serde_json::to_string_pretty(&event)?);
    Ok(())
}
