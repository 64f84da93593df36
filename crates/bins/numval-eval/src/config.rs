//! Output configuration.
//!
//! Settings come from, in increasing priority: built-in defaults, a
//! `numval.toml` file (given with `--config` or found in the current working
//! directory), and command line flags.

use crate::error::EvalError;
use numval::VectorStyle;
use serde::{Deserialize, Serialize};
use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

/// Name of the configuration file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "numval.toml";

/// Contents of a user configuration file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserConfig {
    /// Rendering of vectors.
    pub style: VectorStyle,
    /// Number of digits after the decimal point; shortest round-trip form
    /// when absent.
    pub precision: Option<usize>,
}

impl UserConfig {
    /// Loads a configuration file.
    pub fn load(path: &Path) -> Result<Self, EvalError> {
        let content = std::fs::read_to_string(path).map_err(|source| EvalError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| EvalError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Effective configuration of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Rendering of vectors.
    pub style: VectorStyle,
    /// Number of digits after the decimal point.
    pub precision: Option<usize>,
}

impl Config {
    /// Resolves the configuration.
    ///
    /// An explicitly given file must exist; the file in the current directory
    /// is optional.
    pub fn load_config(
        filepath: Option<&Path>,
        style: Option<VectorStyle>,
        precision: Option<usize>,
    ) -> Result<Self, EvalError> {
        log::info!("Loading configurations...");
        let user = match filepath {
            Some(path) => {
                log::info!("  Load user specified configuration from {}", path.display());
                UserConfig::load(path)?
            },
            None => {
                let cwd = std::env::current_dir().map_err(|source| EvalError::ConfigIo {
                    path: PathBuf::from("."),
                    source,
                })?;
                let config_in_cwd = cwd.join(CONFIG_FILE_NAME);
                if config_in_cwd.exists() {
                    log::info!("  Load configuration in CWD: {}", config_in_cwd.display());
                    UserConfig::load(&config_in_cwd)?
                } else {
                    log::debug!("  No configuration file found, using defaults");
                    UserConfig::default()
                }
            },
        };
        let config = Config::from_user(user, style, precision);
        log::trace!("  - Vector style: {}", config.style);
        log::trace!("  - Precision: {:?}", config.precision);
        Ok(config)
    }

    /// Applies command line overrides on top of a user configuration.
    pub fn from_user(
        user: UserConfig,
        style: Option<VectorStyle>,
        precision: Option<usize>,
    ) -> Self {
        Self {
            style: style.unwrap_or(user.style),
            precision: precision.or(user.precision),
        }
    }

    /// Renders a value honoring the configured precision.
    pub fn render<D: Display + ?Sized>(&self, value: &D) -> String {
        match self.precision {
            Some(precision) => format!("{:.*}", precision, value),
            None => format!("{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numval::{Complex, DynVector};

    #[test]
    fn user_config_from_toml() {
        let user: UserConfig = toml::from_str("style = \"legacy\"\nprecision = 3\n").unwrap();
        assert_eq!(user.style, VectorStyle::Legacy);
        assert_eq!(user.precision, Some(3));

        let user: UserConfig = toml::from_str("").unwrap();
        assert_eq!(user, UserConfig::default());

        assert!(toml::from_str::<UserConfig>("style = \"fancy\"").is_err());
        assert!(toml::from_str::<UserConfig>("colour = true").is_err());
    }

    #[test]
    fn user_config_roundtrip_through_toml() {
        let user = UserConfig {
            style: VectorStyle::Legacy,
            precision: Some(2),
        };
        let serialized = toml::to_string(&user).unwrap();
        assert_eq!(toml::from_str::<UserConfig>(&serialized).unwrap(), user);
    }

    #[test]
    fn command_line_overrides_file() {
        let user = UserConfig {
            style: VectorStyle::Legacy,
            precision: Some(2),
        };
        let config = Config::from_user(user.clone(), None, None);
        assert_eq!(config.style, VectorStyle::Legacy);
        assert_eq!(config.precision, Some(2));

        let config = Config::from_user(user, Some(VectorStyle::Normalized), Some(0));
        assert_eq!(config.style, VectorStyle::Normalized);
        assert_eq!(config.precision, Some(0));
    }

    #[test]
    fn load_missing_file_fails() {
        let path = Path::new("/nonexistent/numval.toml");
        assert!(matches!(
            Config::load_config(Some(path), None, None),
            Err(EvalError::ConfigIo { .. })
        ));
    }

    #[test]
    fn render_values() {
        let config = Config::default();
        assert_eq!(config.render(&Complex::new(-5.0, 10.0)), "(-5, 10)");

        let config = Config {
            style: VectorStyle::Legacy,
            precision: Some(1),
        };
        let v = DynVector::from(vec![1.0, 2.0]);
        assert_eq!(config.render(&v.display(config.style)), "[1.0 2.0, ]");
    }
}
