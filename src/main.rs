// WorkflowView - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation
// 3. A single scan of the log file to stdout
// 4. Exit status (non-zero on any failure)

use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use workflow_view::{app, platform, util};

/// WorkflowView - extract worker-start and task-result lines from a
/// workflow scheduler log.
///
/// Prints every line where a worker starts running a task, and the part of
/// every line where the scheduler is told a task ended DONE or FAILED.
#[derive(Parser, Debug)]
#[command(name = "workflow-view", version, about)]
struct Cli {
    /// Log file to scan.
    #[arg(default_value = util::constants::DEFAULT_LOG_PATH)]
    path: PathBuf,

    /// Enable debug logging on stderr (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_file());

    util::logging::init(cli.debug, config.log_level.as_deref());

    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    tracing::info!(
        version = util::constants::APP_VERSION,
        path = %cli.path.display(),
        "WorkflowView starting"
    );

    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());

    if let Err(e) = app::scan::scan_file(&cli.path, out) {
        tracing::error!(error = %e, "Scan failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
