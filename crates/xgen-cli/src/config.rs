//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied by the command handlers)
//! 2. `XGEN_*` environment variables, `__` between sections
//!    (`XGEN_DEFAULTS__PLATFORM=macos`)
//! 3. Config file (`--config FILE`, else [`AppConfig::config_path`])
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use xgen_core::{application::PlaygroundOptions, domain::Platform};

const ENV_PREFIX: &str = "XGEN";
const FALLBACK_CONFIG_FILE: &str = ".xgen.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Defaults for newly generated playgrounds.
    pub defaults: Defaults,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    pub platform: Platform,
    pub run_on_edit: bool,
    pub build_active_scheme: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let options = PlaygroundOptions::default();
        Self {
            defaults: Defaults {
                platform: options.platform,
                run_on_edit: options.run_on_edit,
                build_active_scheme: options.build_active_scheme,
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl Defaults {
    /// Playground options seeded from these defaults.
    pub fn playground_options(&self) -> PlaygroundOptions {
        PlaygroundOptions {
            platform: self.platform,
            run_on_edit: self.run_on_edit,
            build_active_scheme: self.build_active_scheme,
            ..PlaygroundOptions::default()
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(&Self::resolve_path(config_file), config_file.is_some())
    }

    /// Like [`load`](Self::load), but a missing file is never an error.
    pub fn load_optional(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(&Self::resolve_path(config_file), false)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to serialise built-in defaults")?;

        Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for the platform config directory,
    /// falling back to `.xgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "xgen", "xgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_CONFIG_FILE))
    }

    /// Where `--config` points, or the default path.
    pub fn resolve_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file.cloned().unwrap_or_else(Self::config_path)
    }
}
