//! Content document model and loading.
//!
//! The whole site is described by one JSON file (`data/content.json` by
//! default). It is deliberately loose: every section is optional, unknown keys
//! are ignored, and renderers substitute defaults for anything missing. The
//! only required thing is that the file exists and parses.
//!
//! ```text
//! {
//!   "meta":       { "title": ..., "description": ... },
//!   "profile":    { "name": ..., "title": ..., "bio": ..., "avatar": ..., "socialLinks": [...] },
//!   "navbar":     { ... },
//!   "hero":       { ... },
//!   "about":      { ... },
//!   "experience": { "layout": "timeline", "jobs": [...] },
//!   "projects":   { "layout": "featured", "list": [...] },
//!   "skills":     { "categories": [...], "certifications": {...} },
//!   "education":  { "schools": [...] },
//!   "contact":    { "info": { "items": [...], "availability": {...} } },
//!   "footer":     { ... }
//! }
//! ```
//!
//! A separate schema document may sit next to the content. It is optional and
//! only switches on a handful of presence checks; failures there are logged and
//! never stop a build.
//!
//! ## Enabled flags
//!
//! Sections (and a few nested blocks) carry an `enabled` flag. Only a literal
//! `false` turns them off; absence, `null`, or any other value keeps them on.
//! [`Toggle`] encodes exactly that rule.

use crate::layout::{self, ExperienceLayout, ProjectsLayout, SkillsLayout};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read content from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse content in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

// =============================================================================
// Site context
// =============================================================================

/// Everything the renderers read, loaded once and never mutated.
#[derive(Debug, Clone)]
pub struct SiteContext {
    pub content: ContentDocument,
    /// Parsed schema document, if one was found and parsed.
    pub schema: Option<Value>,
}

impl SiteContext {
    pub fn new(content: ContentDocument, schema: Option<Value>) -> Self {
        Self { content, schema }
    }

    /// Load the content document (required) and the schema (best-effort).
    ///
    /// When the schema loads, the required-field presence checks run and each
    /// miss is logged as a warning.
    pub fn load(content_path: &Path, schema_path: &Path) -> Result<Self, ContentError> {
        let content = load_content(content_path)?;
        let schema = load_schema(schema_path);
        if schema.is_some() {
            for field in validate_required_fields(&content) {
                log::warn!("Missing required field: {field}");
            }
        }
        Ok(Self::new(content, schema))
    }
}

/// Read and parse the content document.
pub fn load_content(path: &Path) -> Result<ContentDocument, ContentError> {
    let raw = fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let content = serde_json::from_str(&raw).map_err(|source| ContentError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Loaded content from {}", path.display());
    Ok(content)
}

/// Read the schema document, swallowing every failure.
pub fn load_schema(path: &Path) -> Option<Value> {
    let parsed = fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|raw| serde_json::from_str::<Value>(&raw).map_err(|e| e.to_string()));
    match parsed {
        Ok(schema) => Some(schema),
        Err(reason) => {
            log::warn!(
                "Schema not available at {} ({reason}), skipping validation",
                path.display()
            );
            None
        }
    }
}

/// Presence checks enabled by the schema: returns the dotted path of every
/// required field that is missing or empty.
pub fn validate_required_fields(content: &ContentDocument) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if is_blank(content.meta.title.as_deref()) {
        missing.push("meta.title");
    }
    if is_blank(content.profile.name.as_deref()) {
        missing.push("profile.name");
    }
    if is_blank(content.profile.title.as_deref()) {
        missing.push("profile.title");
    }
    missing
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

// =============================================================================
// Document
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentDocument {
    pub meta: Meta,
    pub profile: Profile,
    pub navbar: Option<NavbarSection>,
    pub hero: Option<HeroSection>,
    pub about: Option<AboutSection>,
    pub experience: Option<ExperienceSection>,
    pub projects: Option<ProjectsSection>,
    pub skills: Option<SkillsSection>,
    pub education: Option<EducationSection>,
    pub contact: Option<ContactSection>,
    pub footer: Option<FooterSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub social_links: Option<Vec<SocialLink>>,
}

/// The `enabled` flag: on unless the document says literally `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle(bool);

impl Toggle {
    pub fn is_on(self) -> bool {
        self.0
    }
}

impl Default for Toggle {
    fn default() -> Self {
        Toggle(true)
    }
}

impl<'de> Deserialize<'de> for Toggle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Toggle(value != Value::Bool(false)))
    }
}

/// Whether an optional section should be rendered.
pub fn is_enabled(enabled: Option<Toggle>) -> bool {
    enabled.is_none_or(Toggle::is_on)
}

/// Accepts `"80%"` as well as `80`; anything else reads as absent.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Reads an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// =============================================================================
// Small value records
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialLink {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    pub icon: Option<String>,
    pub aria_label: Option<String>,
}

/// A navigation link or call-to-action button.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Link {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    pub aria_label: Option<String>,
}

impl Link {
    pub fn new(text: &str, url: &str) -> Self {
        Self {
            text: text.to_string(),
            url: url.to_string(),
            aria_label: None,
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NavbarSection {
    pub enabled: Toggle,
    pub logo: Option<String>,
    pub links: Option<Vec<Link>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroSection {
    pub enabled: Toggle,
    pub greeting: Option<String>,
    pub description: Option<String>,
    pub social_links: Option<Vec<SocialLink>>,
    pub cta: Option<CtaButtons>,
    pub terminal: Option<Terminal>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CtaButtons {
    pub primary: Option<Link>,
    pub secondary: Option<Link>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Terminal {
    pub enabled: Toggle,
    pub lines: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AboutSection {
    pub enabled: Toggle,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub cards: Vec<AboutCard>,
    pub passion: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AboutCard {
    pub icon: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExperienceSection {
    pub enabled: Toggle,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "layout::lenient")]
    pub layout: ExperienceLayout,
    #[serde(deserialize_with = "null_as_default")]
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Job {
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(deserialize_with = "null_as_default")]
    pub period: String,
    pub location: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub achievements: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectsSection {
    pub enabled: Toggle,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "layout::lenient")]
    pub layout: ProjectsLayout,
    #[serde(deserialize_with = "null_as_default")]
    pub list: Vec<Project>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub icon: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub metrics: Vec<Metric>,
    pub project_url: Option<String>,
    pub repo_url: Option<String>,
    pub image_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub featured: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Metric {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "string_or_number")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SkillsSection {
    pub enabled: Toggle,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub categories: Vec<SkillCategory>,
    pub certifications: Option<Certifications>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub icon: Option<String>,
    #[serde(deserialize_with = "layout::lenient")]
    pub layout: SkillsLayout,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Skill {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "string_or_number")]
    pub level: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Certifications {
    pub enabled: Toggle,
    pub title: Option<String>,
    pub icon: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub list: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EducationSection {
    pub enabled: Toggle,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub schools: Vec<School>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct School {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub location: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub period: String,
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(deserialize_with = "null_as_default")]
    pub field: String,
    #[serde(deserialize_with = "string_or_number")]
    pub gpa: Option<String>,
    pub icon: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub focus_areas: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub activities: Vec<String>,
    pub capstone_project: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactSection {
    pub enabled: Toggle,
    pub title: Option<String>,
    pub description: Option<String>,
    pub info: Option<ContactInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub title: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<ContactItem>,
    pub availability: Option<Availability>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactItem {
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    pub url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_link: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Availability {
    pub enabled: Toggle,
    pub title: Option<String>,
    pub text: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub level: Option<String>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterSection {
    pub enabled: Toggle,
    pub logo: Option<String>,
    pub tagline: Option<String>,
    pub links: Option<Vec<Link>>,
    pub social_links: Option<Vec<SocialLink>>,
    pub copyright: Option<String>,
}
