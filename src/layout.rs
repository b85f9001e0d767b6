//! Layout strategies for the multi-layout sections.
//!
//! Experience, projects, and each skill category pick one of three rendering
//! strategies through a `layout` string in the content document. The set is
//! closed, so each section gets an enum and renderers dispatch with `match`.
//!
//! | Section | Keys | Default |
//! |---|---|---|
//! | experience | `timeline`, `cards`, `list` | `timeline` |
//! | projects | `featured`, `grid`, `list` | `featured` |
//! | skills (per category) | `bars`, `tags`, `icons` | `bars` |
//!
//! Parsing never fails. A missing, unknown, or non-string value resolves to the
//! section default, so an unrecognized key renders exactly like no key at all.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A closed set of layout keys with a default.
pub trait LayoutKey: Sized + Default + Copy {
    /// Section name, for diagnostics.
    const SECTION: &'static str;

    fn from_key(key: &str) -> Option<Self>;

    fn key(self) -> &'static str;

    /// Resolve a key, falling back to the default for anything unrecognized.
    fn resolve(key: &str) -> Self {
        Self::from_key(key).unwrap_or_else(|| {
            let fallback = Self::default();
            log::debug!(
                "Unknown {} layout '{key}', using '{}'",
                Self::SECTION,
                fallback.key()
            );
            fallback
        })
    }
}

/// `deserialize_with` helper: lenient layout parsing.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: LayoutKey,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(key)) => T::resolve(&key),
        _ => T::default(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExperienceLayout {
    #[default]
    Timeline,
    Cards,
    List,
}

impl LayoutKey for ExperienceLayout {
    const SECTION: &'static str = "experience";

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "timeline" => Some(Self::Timeline),
            "cards" => Some(Self::Cards),
            "list" => Some(Self::List),
            _ => None,
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::Timeline => "timeline",
            Self::Cards => "cards",
            Self::List => "list",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectsLayout {
    #[default]
    Featured,
    Grid,
    List,
}

impl LayoutKey for ProjectsLayout {
    const SECTION: &'static str = "projects";

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "featured" => Some(Self::Featured),
            "grid" => Some(Self::Grid),
            "list" => Some(Self::List),
            _ => None,
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillsLayout {
    #[default]
    Bars,
    Tags,
    Icons,
}

impl LayoutKey for SkillsLayout {
    const SECTION: &'static str = "skills";

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "bars" => Some(Self::Bars),
            "tags" => Some(Self::Tags),
            "icons" => Some(Self::Icons),
            _ => None,
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::Bars => "bars",
            Self::Tags => "tags",
            Self::Icons => "icons",
        }
    }
}
