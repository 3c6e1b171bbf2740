//! logpad CLI
//!
//! Opens the window. The only option is a diagnostics sink, since the
//! terminal itself is owned by the UI.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use logpad::platform::default_log_path;
use logpad::tui::run::run;
use logpad::tui::state::App;
use logpad::types::WindowConfig;

#[derive(Parser)]
#[command(name = "logpad")]
#[command(about = "Show the time, log a line to ~/Documents/log.txt, paint the window green")]
#[command(version)]
struct Cli {
    /// Write diagnostic traces to this file (filter with RUST_LOG, default: info)
    #[arg(long, value_name = "FILE")]
    trace_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match open_window(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn open_window(cli: Cli) -> Result<(), String> {
    if let Some(path) = &cli.trace_file {
        init_tracing(path)?;
    }

    let log_path = default_log_path().map_err(|e| e.to_string())?;
    let app = App::new(log_path, WindowConfig::default());

    run(app).map_err(|e| format!("Terminal error: {}", e))
}

// ============================================================================
// DIAGNOSTICS
// ============================================================================

/// Route tracing output to a file; the UI owns stdout and stderr.
fn init_tracing(path: &Path) -> Result<(), String> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("Cannot open trace file {}: {}", path.display(), e))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
