use clap::Args;

use super::{load_config, resolve_now};

#[derive(Args)]
pub struct WindowArgs {
    /// Instant to compute for (RFC 3339); defaults to now
    #[arg(long)]
    pub at: Option<String>,
    /// Anchor time HH:MM; defaults to the configured anchor
    #[arg(long)]
    pub anchor: Option<String>,
}

pub fn run(args: WindowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(args.anchor.as_deref())?;
    let calculator = config.calculator()?;
    let now = resolve_now(args.at.as_deref())?;

    let window = calculator.compute_window(&now)?;
    println!("{}", serde_json::to_string_pretty(&window.snapshot())?);
    Ok(())
}
