mod ai;
mod app;
mod config;
mod constants;
mod input;
mod prompt;
mod ui;

use anyhow::Result;
use std::env;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;
use crate::config::Config;

fn setup_logging() {
    use std::fs::OpenOptions;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mailprompt=debug"));

    // The TUI owns stdout, so prefer a log file in the config directory
    let log_file = Config::ensure_dirs()
        .and_then(|()| Config::config_dir())
        .ok()
        .map(|dir| dir.join("mailprompt.log"))
        .and_then(|path| {
            OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&path)
                .ok()
        });

    if let Some(file) = log_file {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else {
        // Fallback to stderr if file logging fails
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_usage() {
    eprintln!(
        r#"mailprompt - Email prompt generator for the terminal

Usage: mailprompt [command]

Commands:
    (none)        Open the prompt form
    print-config  Print the effective configuration as TOML
    help          Show this help message

Configuration file: ~/.config/mailprompt/config.toml
Log file:           ~/.config/mailprompt/mailprompt.log
"#
    );
}

fn print_config() -> Result<()> {
    let config = Config::load()?;
    print!("{}", config.to_toml()?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("help") | Some("--help") | Some("-h") => {
            print_usage();
            Ok(())
        }
        Some("print-config") => print_config(),
        Some(cmd) => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            std::process::exit(1);
        }
        None => {
            setup_logging();

            let config = Config::load()?;
            tracing::info!(
                model = %config.completion.model,
                endpoint = %config.completion.endpoint,
                "Starting mailprompt"
            );

            crate::ui::theme::init_theme(config.ui.theme);

            let mut app = App::new(config)?;
            app.run().await
        }
    }
}
