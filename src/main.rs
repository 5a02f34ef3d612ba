mod analytics;
mod animation;
mod app;
mod demo;
mod dispatch;
mod error;
mod event;
mod input;
mod logging;
mod render;
mod state;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use palette::Srgb;

use app::{App, AppConfig};
use demo::DemoConfig;
use render::colors::{parse_hex_color, Gradient, GRADIENT_END, GRADIENT_START};
use state::PanelLayout;

/// Teamboard: live team analytics in the terminal
///
/// Follows a match through the messages an analytics backend pushes: win
/// probability over time, role balance of the recommended heroes, per-role
/// performance and the team composition rules that fit the current game.
#[derive(Parser, Debug)]
#[command(name = "teamboard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the message file to watch (JSON lines format)
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Run in demo mode with a simulated match feed
    #[arg(long)]
    demo: bool,

    /// Role indicator color for a zero proportion (#rrggbb)
    #[arg(long, value_name = "HEX", value_parser = parse_hex_color)]
    gradient_start: Option<Srgb<u8>>,

    /// Role indicator color for a full proportion (#rrggbb)
    #[arg(long, value_name = "HEX", value_parser = parse_hex_color)]
    gradient_end: Option<Srgb<u8>>,

    /// Hide the win probability chart
    #[arg(long)]
    no_chart: bool,

    /// Hide the role balance indicators
    #[arg(long)]
    no_roles: bool,

    /// Hide the performance rows
    #[arg(long)]
    no_performance: bool,

    /// Hide the rules table
    #[arg(long)]
    no_rules: bool,

    /// Demo tick interval in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 800)]
    tick_ms: u64,

    /// Seed for a reproducible demo feed
    #[arg(long)]
    seed: Option<u64>,

    /// Where tracing output is written
    #[arg(long, value_name = "FILE", default_value = "teamboard.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    // Validate arguments
    if !cli.demo && cli.file.is_none() {
        eprintln!("Error: Either --file or --demo must be specified");
        eprintln!();
        eprintln!("Usage:");
        eprintln!("  teamboard --file messages.jsonl   Watch a file for dashboard messages");
        eprintln!("  teamboard --demo                  Run demo mode with a simulated match");
        eprintln!();
        eprintln!("Run 'teamboard --help' for more options");
        std::process::exit(1);
    }

    let log_guard = match logging::init(&cli.log_file) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let config = AppConfig {
        file_path: cli.file,
        demo_mode: cli.demo,
        gradient: Gradient::new(
            cli.gradient_start.unwrap_or(GRADIENT_START),
            cli.gradient_end.unwrap_or(GRADIENT_END),
        ),
        panels: PanelLayout {
            chart: !cli.no_chart,
            roles: !cli.no_roles,
            performance: !cli.no_performance,
            rules: !cli.no_rules,
        },
        demo: DemoConfig {
            tick: Duration::from_millis(cli.tick_ms),
            seed: cli.seed,
            ..DemoConfig::default()
        },
    };

    tracing::info!(demo = config.demo_mode, file = ?config.file_path, "starting teamboard");
    let mut app = App::new(config);

    // Run the app
    if let Err(e) = app.run().await {
        tracing::error!(error = %e, "teamboard stopped");
        eprintln!("Error: {}", e);
        drop(log_guard);
        std::process::exit(1);
    }

    drop(log_guard);
    Ok(())
}
