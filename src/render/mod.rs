//! Section renderers.
//!
//! One module per page section. Every renderer is a pure function from the
//! section's (optional) sub-document, plus shared context such as the profile,
//! to a maud [`Markup`] fragment. Fragments are self-contained: each carries
//! its own landmark element, heading, and divider, so the page assembler only
//! has to concatenate them.
//!
//! All text goes through maud interpolation and is HTML-escaped.
//!
//! ## Marker attributes
//!
//! The interactivity script (`static/site.js`) only looks at:
//!
//! - `data-animation` / `data-animation-delay`: reveal-on-scroll
//! - `.skill-bar[data-level]`: bars that grow to a percentage
//! - ids `mobile-menu-button`, `mobile-menu`, `back-to-top`

pub mod about;
pub mod contact;
pub mod education;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod skills;

use crate::content::ContentDocument;
use maud::{Markup, html};

/// The page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Navbar,
    Hero,
    About,
    Experience,
    Projects,
    Skills,
    Education,
    Contact,
    Footer,
}

impl SectionKind {
    /// Fixed page order.
    pub const ALL: [SectionKind; 9] = [
        SectionKind::Navbar,
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Skills,
        SectionKind::Education,
        SectionKind::Contact,
        SectionKind::Footer,
    ];

    /// Key of the section in the content document.
    pub fn key(self) -> &'static str {
        match self {
            SectionKind::Navbar => "navbar",
            SectionKind::Hero => "hero",
            SectionKind::About => "about",
            SectionKind::Experience => "experience",
            SectionKind::Projects => "projects",
            SectionKind::Skills => "skills",
            SectionKind::Education => "education",
            SectionKind::Contact => "contact",
            SectionKind::Footer => "footer",
        }
    }

    /// `id` of the section's landmark element.
    pub fn landmark_id(self) -> &'static str {
        match self {
            SectionKind::Hero => "home",
            other => other.key(),
        }
    }

    /// Whether the document leaves this section switched on.
    pub fn is_enabled(self, content: &ContentDocument) -> bool {
        use crate::content::is_enabled;
        match self {
            SectionKind::Navbar => is_enabled(content.navbar.as_ref().map(|s| s.enabled)),
            SectionKind::Hero => is_enabled(content.hero.as_ref().map(|s| s.enabled)),
            SectionKind::About => is_enabled(content.about.as_ref().map(|s| s.enabled)),
            SectionKind::Experience => is_enabled(content.experience.as_ref().map(|s| s.enabled)),
            SectionKind::Projects => is_enabled(content.projects.as_ref().map(|s| s.enabled)),
            SectionKind::Skills => is_enabled(content.skills.as_ref().map(|s| s.enabled)),
            SectionKind::Education => is_enabled(content.education.as_ref().map(|s| s.enabled)),
            SectionKind::Contact => is_enabled(content.contact.as_ref().map(|s| s.enabled)),
            SectionKind::Footer => is_enabled(content.footer.as_ref().map(|s| s.enabled)),
        }
    }

    /// Render this section's fragment. `year` feeds the footer copyright.
    pub fn render(self, content: &ContentDocument, year: i32) -> Markup {
        let profile = &content.profile;
        match self {
            SectionKind::Navbar => navbar::render(content.navbar.as_ref(), profile),
            SectionKind::Hero => hero::render(content.hero.as_ref(), profile),
            SectionKind::About => about::render(content.about.as_ref(), profile),
            SectionKind::Experience => experience::render(content.experience.as_ref()),
            SectionKind::Projects => projects::render(content.projects.as_ref()),
            SectionKind::Skills => skills::render(content.skills.as_ref()),
            SectionKind::Education => education::render(content.education.as_ref()),
            SectionKind::Contact => contact::render(content.contact.as_ref()),
            SectionKind::Footer => footer::render(content.footer.as_ref(), profile, year),
        }
    }
}

// ============================================================================
// Shared components
// ============================================================================

/// Vertical spacing under a section header. Empty sections sit tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HeaderSpacing {
    Regular,
    Tight,
}

/// Centered section heading with divider and optional lead paragraph.
pub(crate) fn section_header(
    id: &str,
    title: &str,
    description: Option<&str>,
    spacing: HeaderSpacing,
) -> Markup {
    let class = match spacing {
        HeaderSpacing::Regular => "flex flex-col items-center text-center mb-16",
        HeaderSpacing::Tight => "flex flex-col items-center text-center mb-6",
    };
    html! {
        div class=(class) data-animation="animate__fadeIn" {
            h2 id={ (id) "-title" } class="text-3xl md:text-4xl font-bold mb-4 font-display" { (title) }
            (divider())
            @if let Some(description) = description {
                p class="max-w-2xl text-lg text-gray-700" { (description) }
            }
        }
    }
}

pub(crate) fn divider() -> Markup {
    html! {
        div class="w-20 h-1 bg-primary mb-6" {}
    }
}

/// The "nothing here" line shown in place of an empty collection.
pub(crate) fn empty_state(message: &str) -> Markup {
    html! {
        p class="text-center text-gray-500" { (message) }
    }
}

/// Small pill used for tags and skills.
pub(crate) fn tag(text: &str) -> Markup {
    html! {
        span class="bg-primary/10 text-primary px-2 py-1 rounded-md text-xs" { (text) }
    }
}

/// Bulleted list with a Font Awesome icon per item. Renders nothing when empty.
pub(crate) fn icon_list(items: &[String], icon_class: &str, list_class: &str) -> Markup {
    html! {
        @if !items.is_empty() {
            ul class=(list_class) {
                @for item in items {
                    li class="flex items-start" {
                        i class=(icon_class) {}
                        span { (item) }
                    }
                }
            }
        }
    }
}

/// Progress bar the interactivity script grows to `level`.
pub(crate) fn level_bar(level: &str, track_class: &str, bar_class: &str) -> Markup {
    html! {
        div class=(track_class) {
            div class={ "skill-bar " (bar_class) } data-level=(level) {}
        }
    }
}

/// `data-animation-delay` value for the `index`th item of a staggered list.
pub(crate) fn stagger(index: usize, step_ms: usize) -> String {
    format!("{}ms", index * step_ms)
}
