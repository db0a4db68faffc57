// Configuration for the copilot binary.
// Defaults describe an interactive session with a single empty entry.

use std::path::PathBuf;

use log::LevelFilter;

/// Logging configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    /// Log file; `None` keeps the TUI session silent
    pub file: Option<PathBuf>,

    /// Maximum level written (default Info, Debug with `--verbose`)
    pub level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

/// Master configuration for one run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    /// Entries pre-filled in the form (blank form when empty)
    pub initial_entries: Vec<String>,

    /// Start with the pricing-table block visible
    pub pricing_enabled: bool,

    /// Print tokens to stdout instead of opening the TUI
    pub print_only: bool,

    pub log: LogConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_interactive_and_blank() {
        let config = Config::default();
        assert!(config.initial_entries.is_empty());
        assert!(!config.pricing_enabled);
        assert!(!config.print_only);
        assert_eq!(config.log.file, None);
        assert_eq!(config.log.level, LevelFilter::Info);
    }
}
