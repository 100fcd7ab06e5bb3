use crate::config::Config;

/// Install the global `tracing` subscriber using [`Config::from_env`].
///
/// Panics if a global subscriber is already installed.
pub fn init() {
    init_with(&Config::from_env());
}

/// Install the global `tracing` subscriber with an explicit configuration.
pub fn init_with(config: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter.as_str())
        .with_ansi(config.ansi)
        .init();
}

/// Like [`init_with`], but returns `false` instead of panicking when a
/// subscriber is already installed.
pub fn try_init_with(config: &Config) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter.as_str())
        .with_ansi(config.ansi)
        .try_init()
        .is_ok()
}
