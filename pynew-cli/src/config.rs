//! Configuration
//!
//! Settings are merged from, lowest to highest precedence:
//!
//! 1. Hardcoded defaults
//! 2. `$XDG_CONFIG_HOME/python-new-project/config.toml` (or the platform
//!    equivalent)
//! 3. Environment variables with the `PYNEW_` prefix
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/python-new-project/config.toml
//! resources_dir = "/opt/python-new-project/resources"
//! default_kind = "lib"
//! quiet = false
//! ```

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::ProjectKind;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "PYNEW_";

/// Tool settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Template resource directory, overriding the install-relative lookup
    pub resources_dir: Option<PathBuf>,

    /// Kind used when neither `--app` nor `--lib` is given. Unset means one of
    /// them is required.
    pub default_kind: Option<ProjectKind>,

    /// Suppress progress and next-steps output
    pub quiet: bool,
}

impl Settings {
    /// Load settings from the user config file and environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source exists but cannot be parsed.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment(Self::config_path().as_deref()).extract()
    }

    /// Load settings from an explicit config file plus the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source exists but cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, figment::Error> {
        Self::figment(Some(path)).extract()
    }

    fn figment(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// User config file location, if the platform has a config directory
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("python-new-project").join("config.toml"))
    }
}
