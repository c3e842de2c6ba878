use crate::preview::PreviewFormat;
use crate::template::{OutputTemplate, DEFAULT_TEMPLATE};
use crate::transform::DEFAULT_SEPARATOR;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PATTERN: &str = "(.*)";

/// Defaults read from `config.toml`. Command-line flags take precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub pattern: String,
    pub template: String,
    pub separator: char,
    pub auto_confirm: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
            separator: DEFAULT_SEPARATOR,
            auto_confirm: false,
        }
    }
}

/// Settings for a single run, fixed once built.
#[derive(Debug, Clone)]
pub struct RenameConfig {
    pub pattern: String,
    pub template: OutputTemplate,
    pub separator: char,
    pub verbose: bool,
    pub test_only: bool,
    pub auto_confirm: bool,
    pub preview_format: PreviewFormat,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for RenameConfig {
    fn from(app: &AppConfig) -> Self {
        Self {
            pattern: app.pattern.clone(),
            template: OutputTemplate::from_raw(&app.template),
            separator: app.separator,
            verbose: false,
            test_only: false,
            auto_confirm: app.auto_confirm,
            preview_format: PreviewFormat::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppPaths {
    pub config_dir: PathBuf,
    pub config_path: PathBuf,
}

pub fn app_paths() -> Result<AppPaths> {
    let proj = ProjectDirs::from("com", "rxrename", "rxrename")
        .context("could not resolve the OS config directory")?;
    let config_dir = proj.config_dir().to_path_buf();
    Ok(AppPaths {
        config_path: config_dir.join("config.toml"),
        config_dir,
    })
}

pub fn load_config() -> Result<AppConfig> {
    let paths = app_paths()?;
    load_config_from(&paths.config_path)
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config = toml::from_str::<AppConfig>(&raw)
        .with_context(|| format!("failed to parse config file: {}", path.display()))?;
    Ok(config)
}
