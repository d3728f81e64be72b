//! Layered configuration system
//!
//! Config is loaded with four layers of precedence (highest wins):
//! 1. Environment variables: `STITCH_SHADERS_DIR`, `STITCH_MODULES_DIR`,
//!    `STITCH_OUT_DIR`, `STITCH_MODULE_EXT`
//! 2. Project-local: `stitch.toml`
//! 3. Global: `~/.stitch/config.toml`
//! 4. Built-in defaults
//!
//! Command-line flags override all of these in the individual commands.
//! Relative paths are resolved against the working directory.

use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use stitch_core::{Result, StitchError};

pub const PROJECT_CONFIG: &str = "stitch.toml";

const DEFAULT_SHADERS_DIR: &str = "shaders";
const DEFAULT_MODULES_DIR: &str = "shaders/common";
const DEFAULT_OUT_DIR: &str = "dist/shaders";
const DEFAULT_MODULE_EXT: &str = "glsl";

/// `[paths]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsSection {
    #[serde(default)]
    pub shaders_dir: Option<String>,
    #[serde(default)]
    pub modules_dir: Option<String>,
    #[serde(default)]
    pub out_dir: Option<String>,
}

/// `[modules]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModulesSection {
    #[serde(default)]
    pub extension: Option<String>,
}

/// Top-level config file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StitchConfigFile {
    #[serde(default)]
    pub paths: PathsSection,
    #[serde(default)]
    pub modules: ModulesSection,
}

/// Resolved configuration with all layers applied
#[derive(Debug, Clone, PartialEq)]
pub struct StitchConfig {
    pub shaders_dir: PathBuf,
    pub modules_dir: PathBuf,
    pub out_dir: PathBuf,
    pub module_extension: String,
}

impl Default for StitchConfig {
    fn default() -> Self {
        Self {
            shaders_dir: PathBuf::from(DEFAULT_SHADERS_DIR),
            modules_dir: PathBuf::from(DEFAULT_MODULES_DIR),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            module_extension: DEFAULT_MODULE_EXT.to_string(),
        }
    }
}

impl StitchConfig {
    /// Load config with layered precedence: defaults < global < project < env vars
    pub fn load() -> Result<Self> {
        let mut config = StitchConfigFile::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                Self::merge_into(&mut config, global);
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG);
        if local_path.exists() {
            let local = Self::load_file(&local_path)?;
            Self::merge_into(&mut config, local);
        }

        Self::apply_overrides(&mut config, |key| std::env::var(key).ok());
        Ok(Self::resolve(config))
    }

    /// Load config from a specific file path only, plus env overrides
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let mut config = Self::load_file(path)?;
        Self::apply_overrides(&mut config, |key| std::env::var(key).ok());
        Ok(Self::resolve(config))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".stitch").join("config.toml"))
    }

    fn load_file(path: &Path) -> Result<StitchConfigFile> {
        debug!("Reading config {}", path.display());
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            StitchError::ConfigError(format!("Failed to parse config {}: {}", path.display(), e))
        })
    }

    fn merge_into(base: &mut StitchConfigFile, overlay: StitchConfigFile) {
        if overlay.paths.shaders_dir.is_some() {
            base.paths.shaders_dir = overlay.paths.shaders_dir;
        }
        if overlay.paths.modules_dir.is_some() {
            base.paths.modules_dir = overlay.paths.modules_dir;
        }
        if overlay.paths.out_dir.is_some() {
            base.paths.out_dir = overlay.paths.out_dir;
        }
        if overlay.modules.extension.is_some() {
            base.modules.extension = overlay.modules.extension;
        }
    }

    fn apply_overrides(config: &mut StitchConfigFile, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup("STITCH_SHADERS_DIR") {
            config.paths.shaders_dir = Some(dir);
        }
        if let Some(dir) = lookup("STITCH_MODULES_DIR") {
            config.paths.modules_dir = Some(dir);
        }
        if let Some(dir) = lookup("STITCH_OUT_DIR") {
            config.paths.out_dir = Some(dir);
        }
        if let Some(ext) = lookup("STITCH_MODULE_EXT") {
            config.modules.extension = Some(ext);
        }
    }

    fn resolve(file: StitchConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            shaders_dir: file
                .paths
                .shaders_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.shaders_dir),
            modules_dir: file
                .paths
                .modules_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.modules_dir),
            out_dir: file
                .paths
                .out_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.out_dir),
            module_extension: file
                .modules
                .extension
                .unwrap_or(defaults.module_extension),
        }
    }
}
