// WorkflowView - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug
//   - Config file: [logging] level = "debug"
//
// Output: always stderr. Stdout carries matched lines only.

use tracing_subscriber::EnvFilter;

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
/// `config_level` is the level from config.toml (if present).
///
/// Priority: RUST_LOG env var > CLI --debug flag > config level > default "warn".
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let env_value = std::env::var("RUST_LOG").ok();
    let filter = EnvFilter::new(select_directive(
        env_value.as_deref(),
        debug_flag,
        config_level,
    ));

    // try_init: a subscriber may already be installed (integration tests).
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .try_init()
        .is_ok();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        installed,
        "Logging initialised"
    );
}

/// Pick the filter directive following the priority order above.
fn select_directive<'a>(
    env_value: Option<&'a str>,
    debug_flag: bool,
    config_level: Option<&'a str>,
) -> &'a str {
    match (env_value, debug_flag, config_level) {
        (Some(env), _, _) => env,
        (None, true, _) => "debug",
        (None, false, Some(level)) => level,
        (None, false, None) => super::constants::DEFAULT_LOG_LEVEL,
    }
}
