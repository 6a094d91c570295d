use std::{fs::File, path::PathBuf, sync::Mutex};

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Where log output goes and how much of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// Explicit filter; falls back to `RUST_LOG`, then `warn`
    pub filter: Option<String>,
    /// Log file; required to see any logs while browsing
    pub file: Option<PathBuf>,
    /// Whether the terminal is taken over by the browser
    pub interactive: bool,
}

impl LogConfig {
    /// The filter to install.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        match &self.filter {
            Some(filter) => {
                EnvFilter::try_new(filter).with_context(|| format!("Invalid log filter '{filter}'"))
            }
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
        }
    }
}

/// Installs the global `tracing` subscriber.
///
/// Logs go to stderr, except while browsing, where the terminal belongs to
/// the UI and logs are only written to `--log-file` if one is given.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_target(false);

    let installed = match (&config.file, config.interactive) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("Could not create log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        (None, true) => return Ok(()),
        (None, false) => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|error| anyhow!("Could not install log subscriber: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_accepts_directive_filters() {
        let config = LogConfig {
            filter: Some("drift_view=trace,warn".into()),
            ..Default::default()
        };

        assert!(config.env_filter().is_ok());
    }

    #[test]
    fn it_rejects_malformed_filters() {
        let config = LogConfig {
            filter: Some("drift_view=verbose".into()),
            ..Default::default()
        };

        assert!(config.env_filter().is_err());
    }
}
