//! Logger bootstrap.
//!
//! The library only talks to the `log` facade. Binaries call [`init_logging`]
//! once to route records to stderr through `flexi_logger`, keeping them apart
//! from command output on stdout.
//!
//! # Invariants
//! - Initialization is idempotent; later calls are no-ops.
//! - Initialization never panics; failures come back as an error string.

use flexi_logger::{Logger, LoggerHandle};
use once_cell::sync::OnceCell;

/// Environment variable holding a flexi_logger spec, e.g. `debug` or `mdnotes=trace`.
pub const LOG_ENV: &str = "MDNOTES_LOG";

const DEFAULT_LEVEL: &str = "warn";
const VERBOSE_LEVEL: &str = "debug";

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// The log spec to start with: an explicit env spec wins, then `--verbose`.
pub fn resolve_spec(verbose: bool, env_spec: Option<&str>) -> String {
    match env_spec.map(str::trim) {
        Some(spec) if !spec.is_empty() => spec.to_string(),
        _ if verbose => VERBOSE_LEVEL.to_string(),
        _ => DEFAULT_LEVEL.to_string(),
    }
}

/// Starts the stderr logger.
pub fn init_logging(verbose: bool) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let env_spec = std::env::var(LOG_ENV).ok();
    let spec = resolve_spec(verbose, env_spec.as_deref());

    LOGGER.get_or_try_init(|| {
        Logger::try_with_str(&spec)
            .map_err(|err| format!("invalid log spec `{spec}`: {err}"))?
            .log_to_stderr()
            .format(flexi_logger::default_format)
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))
    })?;

    log::debug!("logging started with spec `{}`", spec);
    Ok(())
}
