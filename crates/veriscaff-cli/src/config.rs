//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The CLI
//! layer owns config; the core crate only sees the request built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `VERISCAFF_<SECTION>__<KEY>`
//! 3. Config file: `--config`, or `./.veriscaff.toml` over the platform file
//! 4. Built-in defaults

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use veriscaff_core::domain::{DEFAULT_PROTOCOL, DEFAULT_SIMULATOR};

use crate::error::{CliError, CliResult, IntoCli};

/// File name of the per-directory configuration.
pub const LOCAL_CONFIG_FILE: &str = ".veriscaff.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "VERISCAFF";

/// Every key `config get` and `config set` accept.
pub const KEYS: [&str; 5] = [
    "defaults.protocol",
    "defaults.simulator",
    "defaults.implementation",
    "output.no_color",
    "output.format",
];

const FORMATS: [&str; 4] = ["auto", "human", "plain", "json"];

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for generated projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub protocol: String,
    pub simulator: String,
    /// Generate the `impl/` FPGA flow.
    pub implementation: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// One of `auto`, `human`, `plain`, `json`.
    pub format: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            protocol: DEFAULT_PROTOCOL.into(),
            simulator: DEFAULT_SIMULATOR.into(),
            implementation: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, files and the process environment.
    ///
    /// `config_file` is the `--config` path; when given it must exist and the
    /// implicit files are skipped.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_from(
            config_file,
            &Self::config_path(),
            Path::new(LOCAL_CONFIG_FILE),
            None,
        )
    }

    /// Layered load with every source injectable.
    ///
    /// `env` replaces the process environment when `Some`.
    pub fn load_from(
        config_file: Option<&Path>,
        platform_file: &Path,
        local_file: &Path,
        env: Option<HashMap<String, String>>,
    ) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("failed to seed default configuration")?;

        let mut builder = Config::builder().add_source(defaults);
        builder = match config_file {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder
                .add_source(File::from(platform_file).required(false))
                .add_source(File::from(local_file).required(false)),
        };
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let loaded: Self = builder
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")?;

        if !FORMATS.contains(&loaded.output.format.as_str()) {
            anyhow::bail!(
                "invalid output.format '{}': expected one of {}",
                loaded.output.format,
                FORMATS.join(", ")
            );
        }
        Ok(loaded)
    }

    /// Path to the platform configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.veriscaff.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "veriscaff", "veriscaff")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// The file `config set` edits and `config path` reports.
    pub fn active_path(config_file: Option<&Path>) -> PathBuf {
        match config_file {
            Some(path) => path.to_path_buf(),
            None if Path::new(LOCAL_CONFIG_FILE).exists() => PathBuf::from(LOCAL_CONFIG_FILE),
            None => Self::config_path(),
        }
    }

    /// Current value of a dotted key, rendered as text.
    pub fn get_value(&self, key: &str) -> CliResult<String> {
        match key {
            "defaults.protocol" => Ok(self.defaults.protocol.clone()),
            "defaults.simulator" => Ok(self.defaults.simulator.clone()),
            "defaults.implementation" => Ok(self.defaults.implementation.to_string()),
            "output.no_color" => Ok(self.output.no_color.to_string()),
            "output.format" => Ok(self.output.format.clone()),
            _ => Err(CliError::UnknownConfigKey { key: key.into() }),
        }
    }

    /// Validate and apply one dotted key.
    pub fn set_value(&mut self, key: &str, raw: &str) -> CliResult<()> {
        match parse_value(key, raw)? {
            toml::Value::Boolean(flag) if key == "defaults.implementation" => {
                self.defaults.implementation = flag;
            }
            toml::Value::Boolean(flag) => self.output.no_color = flag,
            toml::Value::String(text) => match key {
                "defaults.protocol" => self.defaults.protocol = text,
                "defaults.simulator" => self.defaults.simulator = text,
                _ => self.output.format = text,
            },
            _ => return Err(CliError::UnknownConfigKey { key: key.into() }),
        }
        Ok(())
    }

    /// Store one key in the TOML file at `path`, keeping its other entries.
    ///
    /// The file and its parent directory are created when missing.
    pub fn persist_value(path: &Path, key: &str, raw: &str) -> CliResult<()> {
        let value = parse_value(key, raw)?;
        let (section, field) = key
            .split_once('.')
            .ok_or_else(|| CliError::UnknownConfigKey { key: key.into() })?;

        let mut document = if path.exists() {
            let text = fs::read_to_string(path)
                .with_cli_context(|| format!("Failed to read '{}'", path.display()))?;
            toml::from_str::<toml::Table>(&text).map_err(|e| CliError::ConfigError {
                message: format!("'{}' is not valid TOML", path.display()),
                source: Some(Box::new(e)),
            })?
        } else {
            toml::Table::new()
        };

        let entry = document
            .entry(section)
            .or_insert(toml::Value::Table(toml::Table::new()));
        let toml::Value::Table(table) = entry else {
            return Err(CliError::ConfigError {
                message: format!("'{section}' in '{}' is not a table", path.display()),
                source: None,
            });
        };
        table.insert(field.to_string(), value);

        let text = toml::to_string_pretty(&document).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise '{}'", path.display()),
            source: Some(Box::new(e)),
        })?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_cli_context(|| {
                format!("Failed to create config directory '{}'", parent.display())
            })?;
        }
        fs::write(path, text).with_cli_context(|| format!("Failed to write '{}'", path.display()))
    }
}

/// Parse a raw value into the TOML type the key holds.
fn parse_value(key: &str, raw: &str) -> CliResult<toml::Value> {
    let invalid = |reason: String| CliError::InvalidConfigValue {
        key: key.into(),
        value: raw.into(),
        reason,
    };

    match key {
        "defaults.implementation" | "output.no_color" => raw
            .parse::<bool>()
            .map(toml::Value::Boolean)
            .map_err(|_| invalid("expected 'true' or 'false'".into())),
        "defaults.protocol" | "defaults.simulator" => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                Err(invalid("must not be empty".into()))
            } else {
                Ok(toml::Value::String(trimmed.into()))
            }
        }
        "output.format" => {
            let lower = raw.trim().to_ascii_lowercase();
            if FORMATS.contains(&lower.as_str()) {
                Ok(toml::Value::String(lower))
            } else {
                Err(invalid(format!("expected one of {}", FORMATS.join(", "))))
            }
        }
        _ => Err(CliError::UnknownConfigKey { key: key.into() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn load_isolated(
        dir: &Path,
        config_file: Option<&Path>,
        pairs: &[(&str, &str)],
    ) -> anyhow::Result<AppConfig> {
        AppConfig::load_from(
            config_file,
            &dir.join("platform.toml"),
            &dir.join("local.toml"),
            env(pairs),
        )
    }

    #[test]
    fn defaults_match_core_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.protocol, "AXI4");
        assert_eq!(cfg.defaults.simulator, "dsim");
        assert!(cfg.defaults.implementation);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn load_without_files_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_isolated(dir.path(), None, &[]).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn explicit_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(load_isolated(dir.path(), Some(&missing), &[]).is_err());
    }

    #[test]
    fn local_file_overrides_platform_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("platform.toml"),
            "[defaults]\nprotocol = \"apb\"\nsimulator = \"questa\"\n",
        )
        .unwrap();
        fs::write(dir.path().join("local.toml"), "[defaults]\nprotocol = \"spi\"\n").unwrap();

        let cfg = load_isolated(dir.path(), None, &[]).unwrap();
        assert_eq!(cfg.defaults.protocol, "spi");
        assert_eq!(cfg.defaults.simulator, "questa");
    }

    #[test]
    fn environment_overrides_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("veriscaff.toml");
        fs::write(&file, "[defaults]\nprotocol = \"apb\"\n").unwrap();

        let cfg = load_isolated(
            dir.path(),
            Some(&file),
            &[
                ("VERISCAFF_DEFAULTS__PROTOCOL", "i2c"),
                ("VERISCAFF_DEFAULTS__IMPLEMENTATION", "false"),
            ],
        )
        .unwrap();
        assert_eq!(cfg.defaults.protocol, "i2c");
        assert!(!cfg.defaults.implementation);
    }

    #[test]
    fn unknown_output_format_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_isolated(dir.path(), None, &[("VERISCAFF_OUTPUT__FORMAT", "xml")]);
        assert!(result.is_err());
    }

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get_value("defaults.protocol").unwrap(), "AXI4");
        assert_eq!(cfg.get_value("defaults.implementation").unwrap(), "true");
        assert_eq!(cfg.get_value("output.no_color").unwrap(), "false");
        assert_eq!(cfg.get_value("output.format").unwrap(), "auto");
    }

    #[test]
    fn every_listed_key_is_readable() {
        let cfg = AppConfig::default();
        for key in KEYS {
            assert!(cfg.get_value(key).is_ok(), "{key}");
        }
    }

    #[test]
    fn get_unknown_key_is_not_found() {
        assert!(matches!(
            AppConfig::default().get_value("defaults.lang"),
            Err(CliError::UnknownConfigKey { .. })
        ));
    }

    #[test]
    fn set_value_parses_by_key_type() {
        let mut cfg = AppConfig::default();
        cfg.set_value("defaults.simulator", "questa").unwrap();
        cfg.set_value("defaults.implementation", "false").unwrap();
        cfg.set_value("output.no_color", "true").unwrap();
        cfg.set_value("output.format", "JSON").unwrap();

        assert_eq!(cfg.defaults.simulator, "questa");
        assert!(!cfg.defaults.implementation);
        assert!(cfg.output.no_color);
        assert_eq!(cfg.output.format, "json");
    }

    #[test]
    fn set_value_rejects_bad_values() {
        let mut cfg = AppConfig::default();
        assert!(matches!(
            cfg.set_value("output.no_color", "maybe"),
            Err(CliError::InvalidConfigValue { .. })
        ));
        assert!(matches!(
            cfg.set_value("defaults.protocol", "  "),
            Err(CliError::InvalidConfigValue { .. })
        ));
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn persist_value_keeps_other_entries() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("nested").join("config.toml");

        AppConfig::persist_value(&file, "defaults.protocol", "apb").unwrap();
        AppConfig::persist_value(&file, "output.no_color", "true").unwrap();

        let cfg = load_isolated(dir.path(), Some(&file), &[]).unwrap();
        assert_eq!(cfg.defaults.protocol, "apb");
        assert!(cfg.output.no_color);
        assert_eq!(cfg.defaults.simulator, "dsim");
    }

    #[test]
    fn persist_unknown_key_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("config.toml");
        assert!(AppConfig::persist_value(&file, "templates.path", "x").is_err());
        assert!(!file.exists());
    }

    #[test]
    fn explicit_path_is_active() {
        let path = Path::new("/tmp/custom.toml");
        assert_eq!(AppConfig::active_path(Some(path)), path);
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
