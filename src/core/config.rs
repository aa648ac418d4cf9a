//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.termfolio/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::theme::Theme;
use crate::core::typing::{DEFAULT_COMMAND_DELAY_MS, DEFAULT_OUTPUT_DELAY_MS, Pacing};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub typing: TypingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub theme: Option<Theme>,
    pub show_splash: Option<bool>,
    /// Replacement content file, relative to `~/.termfolio/` unless absolute
    pub content_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TypingConfig {
    pub command_delay_ms: Option<u64>,
    pub output_delay_ms: Option<u64>,
    pub startup_delay_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_STARTUP_DELAY_MS: u64 = 500;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub theme: Theme,
    pub show_splash: bool,
    pub pacing: Pacing,
    pub startup_delay_ms: u64,
    pub content_path: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&FolioConfig::default(), &CliOverrides::default())
    }
}

/// Values given on the command line (None / false = not specified).
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub theme: Option<Theme>,
    pub no_splash: bool,
    pub content: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.termfolio`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".termfolio"))
}

/// Returns the path to `~/.termfolio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.termfolio/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FolioConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FolioConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FolioConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FolioConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<FolioConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# termfolio configuration
# All settings are optional; defaults fill in anything left out.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# theme = "matrix"                   # "matrix", "cyberpunk", "retro", "ocean", "default"
# show_splash = true                 # boot splash before the terminal
# content_file = "portfolio.toml"    # Path relative to ~/.termfolio/

# [typing]
# command_delay_ms = 50              # per character, command echoes
# output_delay_ms = 20               # per character, everything else
# startup_delay_ms = 500             # pause before the welcome banner
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FolioConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Theme: CLI → env → config → default
    let theme = cli
        .theme
        .or_else(|| {
            std::env::var("TERMFOLIO_THEME")
                .ok()
                .and_then(|v| Theme::from_id(&v.trim().to_lowercase()))
        })
        .or(config.general.theme)
        .unwrap_or_default();

    // Splash: --no-splash wins, otherwise config, default on
    let show_splash = !cli.no_splash && config.general.show_splash.unwrap_or(true);

    // Content: CLI → env → config (relative to ~/.termfolio/) → built-in
    let content_path = cli
        .content
        .clone()
        .or_else(|| std::env::var("TERMFOLIO_CONTENT").ok().map(PathBuf::from))
        .or_else(|| {
            config
                .general
                .content_file
                .as_deref()
                .map(resolve_content_file)
        });

    let pacing = Pacing {
        command_delay_ms: config
            .typing
            .command_delay_ms
            .unwrap_or(DEFAULT_COMMAND_DELAY_MS),
        output_delay_ms: config
            .typing
            .output_delay_ms
            .unwrap_or(DEFAULT_OUTPUT_DELAY_MS),
    };

    ResolvedConfig {
        theme,
        show_splash,
        pacing,
        startup_delay_ms: config
            .typing
            .startup_delay_ms
            .unwrap_or(DEFAULT_STARTUP_DELAY_MS),
        content_path,
    }
}

fn resolve_content_file(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}
