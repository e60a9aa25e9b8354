//! Configuration types for the chat application.
//!
//! This module provides CLI argument parsing via `arrrg` and the resolved
//! configuration for the REPL binary. Connection settings (endpoint,
//! credential, deployment) come from the settings file, not from flags;
//! see [`crate::config`].

use std::path::PathBuf;

use arrrg_derive::CommandLine;

use crate::config::DEFAULT_SETTINGS_PATH;

/// Command-line arguments for the delphi-chat tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// Path to the settings file.
    #[arrrg(optional, "Path to the settings file (default: appsettings.json)", "PATH")]
    pub settings: Option<String>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,

    /// Log prompts, completions, and errors to stderr.
    #[arrrg(flag, "Log client activity to stderr")]
    pub verbose: bool,
}

/// Resolved configuration for a chat session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Where to read connection settings from.
    pub settings_path: PathBuf,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,

    /// Whether to log client activity to stderr.
    pub verbose: bool,
}

impl ChatConfig {
    /// Creates a new ChatConfig with default values.
    pub fn new() -> Self {
        Self {
            settings_path: PathBuf::from(DEFAULT_SETTINGS_PATH),
            use_color: true,
            verbose: false,
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ChatArgs> for ChatConfig {
    fn from(args: ChatArgs) -> Self {
        ChatConfig {
            settings_path: args
                .settings
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH)),
            use_color: !args.no_color,
            verbose: args.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ChatConfig::new();
        assert_eq!(config.settings_path, PathBuf::from("appsettings.json"));
        assert!(config.use_color);
        assert!(!config.verbose);
    }

    #[test]
    fn config_from_args_defaults() {
        let args = ChatArgs::default();
        let config = ChatConfig::from(args);
        assert_eq!(config.settings_path, PathBuf::from("appsettings.json"));
        assert!(config.use_color);
        assert!(!config.verbose);
    }

    #[test]
    fn config_from_args_custom() {
        let args = ChatArgs {
            settings: Some("conf/agent.json".to_string()),
            no_color: true,
            verbose: true,
        };
        let config = ChatConfig::from(args);
        assert_eq!(config.settings_path, PathBuf::from("conf/agent.json"));
        assert!(!config.use_color);
        assert!(config.verbose);
    }
}
