//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`ReferenceSource`]
//! view of it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`create --reference`, handled at the call-site)
//! 2. Environment variables: `PREFACE__REFERENCE__MAIN`, `PREFACE__OUTPUT__NO_COLOR`, ...
//! 3. Config file (`--config FILE`, else `config.toml` in the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use preface_adapters::reference::DEFAULT_REFERENCE_LOCATION;
use preface_core::{
    application::ports::ReferenceSource,
    domain::ReferenceConfig,
    error::{PrefaceError, PrefaceResult},
};

const ENV_PREFIX: &str = "PREFACE";
const ENV_SEPARATOR: &str = "__";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where generated projects import Preface from.
    pub reference: ReferenceSettings,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSettings {
    pub main: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reference: ReferenceSettings {
                main: DEFAULT_REFERENCE_LOCATION.into(),
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// The default location is always optional; an explicit `config_file`
    /// must exist when `require_explicit` is set (everything but `init`).
    pub fn load(config_file: Option<&Path>, require_explicit: bool) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let file = match config_file {
            Some(path) => File::from(path).required(require_explicit),
            None => File::from(Self::config_path()).required(false),
        };

        Config::builder()
            .set_default("reference.main", defaults.reference.main)?
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default("output.format", defaults.output.format)?
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Failed to parse configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.preface.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("land", "preface", "preface")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".preface.toml"))
    }

    /// The file `load` reads: the explicit one if given, else the default.
    pub fn active_path(config_file: Option<&Path>) -> PathBuf {
        config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path)
    }

    /// Look up a dotted key for `preface config get`.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "reference.main" => Some(self.reference.main.clone()),
            "output.no_color" => Some(self.output.no_color.to_string()),
            "output.format" => Some(self.output.format.clone()),
            _ => None,
        }
    }

    pub const KEYS: [&'static str; 3] = ["reference.main", "output.no_color", "output.format"];
}

impl ReferenceSource for AppConfig {
    fn load(&self) -> PrefaceResult<ReferenceConfig> {
        ReferenceConfig::new(self.reference.main.as_str()).map_err(|e| {
            PrefaceError::Configuration {
                message: format!("reference.main: {e}"),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn default_reference_is_deno_land() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.reference.main, "https://deno.land/x/preface/mod.ts");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("preface.toml");
        fs::write(
            &path,
            "[reference]\nmain = \"https://cdn.example.com/preface/mod.ts\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(path.as_path()), true).unwrap();
        assert_eq!(cfg.reference.main, "https://cdn.example.com/preface/mod.ts");
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(AppConfig::load(Some(tmp.path().join("absent.toml").as_path()), true).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("preface.toml");
        fs::write(&path, "reference = [").unwrap();
        assert!(AppConfig::load(Some(path.as_path()), true).is_err());
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        for key in AppConfig::KEYS {
            assert!(cfg.get(key).is_some(), "{key}");
        }
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert!(cfg.get("does.not.exist").is_none());
    }

    #[test]
    fn reference_source_validates() {
        let mut cfg = AppConfig::default();
        assert!(ReferenceSource::load(&cfg).is_ok());

        cfg.reference.main = "   ".into();
        assert!(matches!(
            ReferenceSource::load(&cfg),
            Err(PrefaceError::Configuration { .. })
        ));
    }

    #[test]
    fn serialises_to_loadable_toml() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("preface.toml");
        fs::write(&path, toml::to_string_pretty(&AppConfig::default()).unwrap()).unwrap();
        assert_eq!(AppConfig::load(Some(path.as_path()), true).unwrap(), AppConfig::default());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
