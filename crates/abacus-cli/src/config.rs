//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the values it is handed
//! (the angle unit).
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied by [`AppConfig::apply_overrides`])
//! 2. Environment variables, `ABACUS__SECTION__KEY`
//! 3. Config file (`--config FILE`, or the default location if it exists)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use abacus_core::domain::AngleUnit;
use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

/// Prefix for environment overrides, e.g. `ABACUS__CALCULATOR__ANGLE_UNIT`.
const ENV_PREFIX: &str = "ABACUS";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Calculator behaviour.
    pub calculator: CalculatorConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Interactive prompt settings.
    pub repl: ReplConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub angle_unit: AngleUnit,
    /// How many of the most recent records `history` shows.
    pub history_display_limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplConfig {
    pub prompt: String,
    pub banner: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            calculator: CalculatorConfig {
                angle_unit: AngleUnit::Degrees,
                history_display_limit: 10,
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
            repl: ReplConfig {
                prompt: "calc> ".into(),
                banner: true,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let file = match config_file {
            Some(path) => config::File::from(path.as_path()).required(true),
            None => config::File::from(Self::config_path().as_path()).required(false),
        };

        config::Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Apply CLI flags on top of the loaded values.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(unit) = cli.angle_unit {
            self.calculator.angle_unit = unit.into();
        }
        if cli.global.no_color {
            self.output.no_color = true;
        }
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.abacus.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "abacus", "abacus")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".abacus.toml"))
    }
}
