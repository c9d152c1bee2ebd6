//! CLI context for shared state
//!
//! Resolves the config store once per invocation and owns logging setup, so
//! handlers stay free of environment concerns.

use crate::config::ConfigStore;
use crate::errors::AppResult;
use std::path::PathBuf;

/// CLI execution context
pub struct CliContext {
    pub config_store: ConfigStore,
    pub verbose: bool,
}

impl CliContext {
    /// Create a new CLI context with the specified config directory and
    /// verbosity. Without an explicit directory the default store location
    /// applies.
    pub fn new(config_dir: Option<PathBuf>, verbose: bool) -> AppResult<Self> {
        let config_store = match config_dir {
            Some(dir) => ConfigStore::open_at(dir),
            None => ConfigStore::open_default()?,
        };
        Ok(CliContext {
            config_store,
            verbose,
        })
    }

    /// Initialize the logging subsystem based on verbosity.
    pub fn init_logging(&self) {
        let log_level = if self.verbose { "debug" } else { "info" };

        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env().add_directive(
                    log_level
                        .parse()
                        .unwrap_or_else(|_| tracing::Level::INFO.into()),
                ),
            )
            .with_writer(std::io::stderr)
            .init();

        if self.verbose {
            tracing::debug!(config = %self.config_store.path().display(), "verbose logging enabled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_context_uses_explicit_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        let context = CliContext::new(Some(temp_dir.path().to_path_buf()), false).unwrap();

        assert!(!context.verbose);
        assert_eq!(
            context.config_store.path(),
            temp_dir.path().join("config.toml")
        );
    }

    #[test]
    fn test_context_verbose_mode() {
        let temp_dir = TempDir::new().unwrap();
        let context = CliContext::new(Some(temp_dir.path().to_path_buf()), true).unwrap();
        assert!(context.verbose);
    }
}
