use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "daywindow-cli", version, about = "Daily countdown complication CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the daily window containing an instant
    Window(commands::window::WindowArgs),
    /// Answer a complication data request
    Request(commands::complication::RequestArgs),
    /// Print static preview data for the editor
    Preview {
        /// Complication type
        #[arg(default_value = "ranged_value")]
        complication_type: String,
    },
    /// Notify that a complication slot started using this source
    Activate {
        /// Complication instance id
        instance_id: i32,
        /// Complication type
        #[arg(long = "type", default_value = "ranged_value")]
        complication_type: String,
    },
    /// Notify that a complication slot stopped using this source
    Deactivate {
        /// Complication instance id
        instance_id: i32,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("DAYWINDOW_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Window(args) => commands::window::run(args),
        Commands::Request(args) => commands::complication::request(args),
        Commands::Preview { complication_type } => commands::complication::preview(&complication_type),
        Commands::Activate {
            instance_id,
            complication_type,
        } => commands::complication::activate(instance_id, &complication_type),
        Commands::Deactivate { instance_id } => commands::complication::deactivate(instance_id),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
