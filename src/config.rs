//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! serialized to a TOML table and the user file, if any, is merged on top, so
//! a config file only needs the keys it wants to change.
//!
//! ## Config File Location
//!
//! Place `config.toml` in the source directory, next to the content:
//!
//! ```text
//! site/
//! ├── config.toml              # Optional, overrides stock defaults
//! ├── index.html               # Optional page shell (see `shell`)
//! └── data/
//!     ├── content.json         # Required content document
//!     └── schema.json          # Optional, enables presence checks
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_path = "data/content.json"
//! schema_path = "data/schema.json"
//! # shell = "index.html"    # Splice the page into this file's id="app" element
//!
//! [theme]
//! color = "orange"          # One of the palettes below
//!
//! [theme.palettes.blue]
//! primary = "#2563eb"
//! secondary = "#1e40af"
//!
//! [theme.palettes.green]
//! primary = "#10b981"
//! secondary = "#047857"
//!
//! [theme.palettes.purple]
//! primary = "#8b5cf6"
//! secondary = "#6d28d9"
//!
//! [theme.palettes.orange]
//! primary = "#f97316"
//! secondary = "#ea580c"
//!
//! [assets]
//! stylesheets = [...]       # Linked from the default shell
//! scripts = [...]           # Loaded from the default shell
//! ```
//!
//! Extra palettes can be added under `[theme.palettes.<name>]`. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Content document, relative to the source directory.
    pub content_path: String,
    /// Schema document, relative to the source directory.
    pub schema_path: String,
    /// Optional HTML shell, relative to the source directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,
    /// Accent colors.
    pub theme: ThemeConfig,
    /// Third-party stylesheets and scripts for the default shell.
    pub assets: AssetsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_path: "data/content.json".to_string(),
            schema_path: "data/schema.json".to_string(),
            shell: None,
            theme: ThemeConfig::default(),
            assets: AssetsConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.theme.palettes.contains_key(&self.theme.color) {
            let known: Vec<&str> = self.theme.palettes.keys().map(String::as_str).collect();
            return Err(ConfigError::Validation(format!(
                "theme.color \"{}\" is not a palette (expected one of: {})",
                self.theme.color,
                known.join(", ")
            )));
        }
        if self.content_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "content_path must not be empty".into(),
            ));
        }
        if self.schema_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "schema_path must not be empty".into(),
            ));
        }
        if self.shell.as_deref().is_some_and(|s| s.trim().is_empty()) {
            return Err(ConfigError::Validation("shell must not be empty".into()));
        }
        Ok(())
    }

    pub fn content_file(&self, source: &Path) -> PathBuf {
        source.join(&self.content_path)
    }

    pub fn schema_file(&self, source: &Path) -> PathBuf {
        source.join(&self.schema_path)
    }

    pub fn shell_file(&self, source: &Path) -> Option<PathBuf> {
        self.shell.as_ref().map(|s| source.join(s))
    }

    /// The palette named by `theme.color`. Falls back to orange if validation
    /// was skipped.
    pub fn palette(&self) -> Palette {
        self.theme
            .palettes
            .get(&self.theme.color)
            .cloned()
            .unwrap_or_else(Palette::orange)
    }
}

/// Accent color selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Name of the palette to use.
    pub color: String,
    /// Named palettes. User entries merge over the stock four.
    pub palettes: BTreeMap<String, Palette>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let palettes = [
            ("blue", Palette::new("#2563eb", "#1e40af")),
            ("green", Palette::new("#10b981", "#047857")),
            ("purple", Palette::new("#8b5cf6", "#6d28d9")),
            ("orange", Palette::orange()),
        ]
        .into_iter()
        .map(|(name, palette)| (name.to_string(), palette))
        .collect();
        Self {
            color: "orange".to_string(),
            palettes,
        }
    }
}

/// A primary/secondary accent pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
}

impl Palette {
    pub fn new(primary: &str, secondary: &str) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
        }
    }

    fn orange() -> Self {
        Self::new("#f97316", "#ea580c")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetsConfig {
    pub stylesheets: Vec<String>,
    pub scripts: Vec<String>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            stylesheets: vec![
                "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css"
                    .to_string(),
                "https://cdnjs.cloudflare.com/ajax/libs/animate.css/4.1.1/animate.min.css"
                    .to_string(),
            ],
            scripts: vec!["https://cdn.tailwindcss.com".to_string()],
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    log::info!("Loaded config from {}", config_path.display());
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory, on top of the
/// stock defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Folio Configuration
# ===================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Content document, relative to this directory.
content_path = "data/content.json"

# Schema document. When it exists and parses, meta.title, profile.name and
# profile.title are checked for presence and misses are logged as warnings.
schema_path = "data/schema.json"

# HTML file to splice the rendered page into. The page replaces the contents
# of the element with id="app"; <title> and the description meta are updated.
# When unset, a complete document is generated.
# shell = "index.html"

# ---------------------------------------------------------------------------
# Theme
# ---------------------------------------------------------------------------
[theme]
# Accent palette. Must name one of the [theme.palettes.*] tables.
color = "orange"

[theme.palettes.blue]
primary = "#2563eb"
secondary = "#1e40af"

[theme.palettes.green]
primary = "#10b981"
secondary = "#047857"

[theme.palettes.orange]
primary = "#f97316"
secondary = "#ea580c"

[theme.palettes.purple]
primary = "#8b5cf6"
secondary = "#6d28d9"

# ---------------------------------------------------------------------------
# Third-party assets (default shell only)
# ---------------------------------------------------------------------------
[assets]
stylesheets = [
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css",
    "https://cdnjs.cloudflare.com/ajax/libs/animate.css/4.1.1/animate.min.css",
]
scripts = ["https://cdn.tailwindcss.com"]
"##
}

/// Generate CSS custom properties for the selected palette.
pub fn generate_theme_css(palette: &Palette) -> String {
    format!(
        r#":root {{
    --color-primary: {primary};
    --color-secondary: {secondary};
}}"#,
        primary = palette.primary,
        secondary = palette.secondary,
    )
}
