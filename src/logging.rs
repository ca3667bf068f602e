//! Logging bootstrap for the CLI.
//!
//! The library itself only emits through the `log` facade
//! (`event=<name> key=value ...`); nothing is printed unless a binary
//! installs a logger with [`init_logging`].

use flexi_logger::{Logger, LoggerHandle};

/// Level used when neither `RUST_LOG` nor a flag picks one.
pub fn default_log_level() -> &'static str {
    "info"
}

/// Starts a stderr logger. `RUST_LOG` wins over `level` when set.
///
/// The returned handle must be kept alive for as long as logging is wanted.
///
/// # Errors
/// - Returns an error when `level` is not one of trace|debug|info|warn|error.
/// - Returns an error when the logger backend fails to start (for example
///   when a logger is already installed).
pub fn init_logging(level: &str) -> Result<LoggerHandle, String> {
    let level = normalize_level(level)?;

    Logger::try_with_env_or_str(level)
        .map_err(|err| format!("invalid log specification `{level}`: {err}"))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::{default_log_level, normalize_level};

    #[test]
    fn test_normalize_level_accepts_known_values() {
        assert_eq!(normalize_level("INFO").expect("INFO should normalize"), "info");
        assert_eq!(
            normalize_level(" warning ").expect("warning should normalize"),
            "warn"
        );
        assert_eq!(normalize_level(default_log_level()).unwrap(), "info");
    }

    #[test]
    fn test_normalize_level_rejects_unknown_values() {
        let error = normalize_level("loud").expect_err("unknown level must be rejected");
        assert!(error.contains("unsupported log level"));
    }
}
