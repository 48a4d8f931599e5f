//! Layered settings: defaults, then `dynval.toml` (or `--config`), then
//! `DYNVAL_*` environment, then command-line flags.

use anyhow::{Context, Result, anyhow, ensure};
use dynval_value::ValueLimits;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

/// Config file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "dynval.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log: dynval_log::Config,
    pub limits: LimitsSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsSettings {
    /// One of `default`, `strict`, `permissive`, `unlimited`
    pub preset: String,
}

impl Default for Settings {
    fn default() -> Self {
        let mut log = dynval_log::Config::default().with_level("warn");
        log.display.time = false;
        log.display.target = false;
        Self {
            log,
            limits: LimitsSettings::default(),
        }
    }
}

impl Default for LimitsSettings {
    fn default() -> Self {
        Self {
            preset: "default".to_string(),
        }
    }
}

impl Settings {
    /// Resolve settings for this invocation
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        figment = match cli.config.as_deref() {
            Some(path) => {
                ensure!(path.exists(), "config file not found: {}", path.display());
                figment.merge(Toml::file(path))
            }
            None => figment.merge(Toml::file(DEFAULT_CONFIG_FILE)),
        };

        figment = figment.merge(env_provider()).merge(
            Env::raw()
                .only(&["DYNVAL_LOG", "DYNVAL_LOG_FORMAT"])
                .map(|key| {
                    if key.as_str().eq_ignore_ascii_case("DYNVAL_LOG") {
                        "log.level".into()
                    } else {
                        "log.format".into()
                    }
                }),
        );

        if let Some(level) = &cli.log_level {
            figment = figment.merge(Serialized::default("log.level", level));
        }
        if let Some(format) = cli.log_format {
            figment = figment.merge(Serialized::default(
                "log.format",
                dynval_log::Format::from(format),
            ));
        }
        if let Some(preset) = &cli.limits {
            figment = figment.merge(Serialized::default("limits.preset", preset));
        }

        figment.extract().context("invalid configuration")
    }

    /// Read settings from one file on top of the defaults
    #[cfg(test)]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .extract()
            .context("invalid configuration")
    }

    /// Decode limits named by `limits.preset`
    pub fn limits(&self) -> Result<ValueLimits> {
        ValueLimits::preset(&self.limits.preset)
            .ok_or_else(|| anyhow!("unknown limits preset '{}'", self.limits.preset))
    }
}

/// Nested keys only, e.g. `DYNVAL_LIMITS__PRESET` or `DYNVAL_LOG__LEVEL`
fn env_provider() -> Env {
    Env::prefixed("DYNVAL_")
        .filter(|key| key.as_str().contains("__"))
        .split("__")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_quiet() {
        let settings = Settings::default();
        assert_eq!(settings.log.level, "warn");
        assert_eq!(settings.limits.preset, "default");
        assert!(settings.limits().is_ok());
    }

    #[test]
    fn file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[limits]\npreset = \"strict\"\n\n[log]\nformat = \"json\"").unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.limits.preset, "strict");
        assert_eq!(settings.log.format, dynval_log::Format::Json);
        assert_eq!(settings.log.level, "warn");
        assert_eq!(settings.limits().unwrap(), ValueLimits::strict());
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let settings = Settings {
            limits: LimitsSettings {
                preset: "huge".into(),
            },
            ..Settings::default()
        };
        let err = settings.limits().unwrap_err();
        assert!(err.to_string().contains("huge"));
    }
}
