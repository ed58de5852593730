//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.linkstatus/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::destination::{Destination, Route};
use crate::core::state::LinkEntry;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LinkStatusConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub links: Vec<LinkConfig>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub initial_path: Option<String>,
    pub navigation_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LinkConfig {
    pub label: String,
    /// `href`, `query` and `hash` keys.
    #[serde(flatten)]
    pub route: Route,
    pub prefix: Option<String>,
    pub root: Option<bool>,
}

impl LinkConfig {
    /// Plain `href` stays a raw path; `query` or `hash` make it a structured route.
    pub fn to_entry(&self) -> LinkEntry {
        let destination = if self.route.query.is_empty() && self.route.hash.is_none() {
            Destination::RawPath(self.route.pathname.clone())
        } else {
            Destination::Route(self.route.clone())
        };

        let mut entry = LinkEntry::new(self.label.clone(), destination);
        if let Some(root) = self.root {
            entry = entry.with_root(root);
        }
        if let Some(prefix) = &self.prefix {
            entry.prefix = prefix.clone();
        }
        entry
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_INITIAL_PATH: &str = "/";
pub const DEFAULT_NAVIGATION_DELAY_MS: u64 = 800;

pub fn default_links() -> Vec<LinkEntry> {
    vec![
        LinkEntry::new("Home", "/"),
        LinkEntry::new("Dashboard", "/dashboard"),
        LinkEntry::new("Settings", "/settings"),
        LinkEntry::new("Profile", "/settings/profile"),
        LinkEntry::new("Reports", Route::new("/reports").with_query("range", "week")),
        LinkEntry::new("Broken link", "/missing"),
    ]
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub initial_path: String,
    pub navigation_delay: Duration,
    pub links: Vec<LinkEntry>,
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

/// Returns the path to `~/.linkstatus/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".linkstatus").join("config.toml"))
}

/// Load config from `~/.linkstatus/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LinkStatusConfig::default()`.
pub fn load_config() -> Result<LinkStatusConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path, true),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(LinkStatusConfig::default())
        }
    }
}

/// Load config from an explicit path. A missing file yields defaults; the
/// commented template is only written when `generate_if_missing` is set.
pub fn load_config_from(path: &Path, generate_if_missing: bool) -> Result<LinkStatusConfig, ConfigError> {
    if !path.exists() {
        if generate_if_missing {
            info!("No config file found, generating default at {}", path.display());
            generate_default_config(path);
        } else {
            warn!("Config file {} not found, using defaults", path.display());
        }
        return Ok(LinkStatusConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: LinkStatusConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# linkstatus Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# initial_path = "/"              # Or set LINKSTATUS_INITIAL_PATH
# navigation_delay_ms = 800       # Or set LINKSTATUS_NAVIGATION_DELAY_MS

# [[links]]
# label = "Home"
# href = "/"
# root = true                     # Exact match only (default for "/")

# [[links]]
# label = "Settings"
# href = "/settings"              # Pending while loading /settings/...

# [[links]]
# label = "Reports"
# href = "/reports"
# query = { range = "week" }
# hash = "summary"
# prefix = "/reports"             # Defaults to href
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
///
/// `cli_delay_ms` and `cli_initial_path` are from CLI flags (None = not specified).
pub fn resolve(
    config: &LinkStatusConfig,
    cli_delay_ms: Option<u64>,
    cli_initial_path: Option<&str>,
) -> ResolvedConfig {
    // Delay: CLI → env → config → default
    let delay_ms = cli_delay_ms
        .or_else(|| {
            std::env::var("LINKSTATUS_NAVIGATION_DELAY_MS")
                .ok()
                .and_then(|v| match v.trim().parse() {
                    Ok(ms) => Some(ms),
                    Err(e) => {
                        warn!("Ignoring LINKSTATUS_NAVIGATION_DELAY_MS={:?}: {}", v, e);
                        None
                    }
                })
        })
        .or(config.general.navigation_delay_ms)
        .unwrap_or(DEFAULT_NAVIGATION_DELAY_MS);

    // Initial path: CLI → env → config → default
    let initial_path = cli_initial_path
        .map(|s| s.to_string())
        .or_else(|| std::env::var("LINKSTATUS_INITIAL_PATH").ok())
        .or_else(|| config.general.initial_path.clone())
        .unwrap_or_else(|| DEFAULT_INITIAL_PATH.to_string());

    let links = if config.links.is_empty() {
        default_links()
    } else {
        config.links.iter().map(LinkConfig::to_entry).collect()
    };

    ResolvedConfig {
        initial_path,
        navigation_delay: Duration::from_millis(delay_ms),
        links,
    }
}
