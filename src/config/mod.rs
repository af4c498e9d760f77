//! Configuration for keytrail.
//!
//! Settings live in `~/.config/keytrail/config.toml` and provide defaults for
//! the CLI flags; a missing or unreadable file silently falls back to the
//! built-in defaults.
//!
//! # Example
//!
//! ```
//! use keytrail::config::Config;
//!
//! let config = Config::default();
//! assert!(config.collapse);
//! assert_eq!(config.separator, ".");
//! ```

use serde::{Deserialize, Serialize};

/// Tool configuration.
///
/// * `collapse` - rewrite enumerated path families into range/alternation
///   notation (default: true)
/// * `show_counts` - append occurrence counts to common paths (default: false)
/// * `separator` - string joining path segments in output (default: ".")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Collapse enumerated path families in the common set
    #[serde(default = "default_collapse")]
    pub collapse: bool,

    /// Append occurrence counts to common paths
    #[serde(default)]
    pub show_counts: bool,

    /// Separator between path segments in rendered output
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_collapse() -> bool {
    true
}

fn default_separator() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            collapse: default_collapse(),
            show_counts: false,
            separator: default_separator(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/keytrail/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("keytrail");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't
    /// be read.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|_| Self::default()),
            Err(_) => Self::default(),
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, toml_string)?;

        Ok(())
    }
}
