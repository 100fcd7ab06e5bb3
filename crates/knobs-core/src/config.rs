/// Environment variable read by [`Config::from_env`].
pub const LOG_ENV: &str = "KNOBS_LOG";

/// Default filter: quiet dependencies, chatty panel internals.
pub const DEFAULT_LOG_FILTER: &str = "info,knobs_dom=info,knobs_ui=debug";

/// Process-wide configuration for a knobs application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing_subscriber::EnvFilter` directive string.
    pub log_filter: String,
    /// Emit ANSI colour codes in log output.
    pub ansi: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            ansi: true,
        }
    }
}

impl Config {
    /// Build a configuration, taking the log filter from `KNOBS_LOG` when set.
    pub fn from_env() -> Self {
        let mut config = Config::default();
        if let Ok(filter) = std::env::var(LOG_ENV) {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }
        config
    }

    /// Replace the log filter.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Enable or disable ANSI colours.
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }
}
