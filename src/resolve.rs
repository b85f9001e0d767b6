//! Field resolution: effective values for every templated field.
//!
//! Each section resolves its fields through a fixed fallback chain, taking the
//! first candidate that is present and non-empty and ending in a literal
//! default. Resolution is pure and infallible; renderers only ever see the
//! resolved views defined here.
//!
//! Two rules shape every chain:
//!
//! - An empty string counts as absent (`""` for a title falls through to the
//!   default).
//! - A list that is present counts, even when empty (`hero.socialLinks: []`
//!   does not fall back to `profile.socialLinks`).

use crate::content::{
    AboutCard, AboutSection, ContactItem, ContactSection, ContentDocument, EducationSection,
    ExperienceSection, FooterSection, HeroSection, Job, Link, NavbarSection, Profile, Project,
    ProjectsSection, School, SkillCategory, SkillsSection, SocialLink, is_enabled,
};
use crate::layout::{ExperienceLayout, ProjectsLayout};
use std::borrow::Cow;

/// Initials used when the profile has no name ("Developer Portfolio").
pub const DEFAULT_INITIALS: &str = "DP";

/// First present, non-empty candidate.
pub fn first_non_empty<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates.into_iter().flatten().find(|s| !s.is_empty())
}

/// `value` unless it is absent or empty.
pub fn text_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    first_non_empty([value]).unwrap_or(default)
}

/// Up to two uppercase initials from a space-separated name.
pub fn initials(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => name
            .split(' ')
            .filter_map(|part| part.chars().next())
            .collect::<String>()
            .to_uppercase()
            .chars()
            .take(2)
            .collect(),
        _ => DEFAULT_INITIALS.to_string(),
    }
}

/// Section anchors shown when the content supplies no navigation links.
pub fn default_nav_links() -> Vec<Link> {
    vec![
        Link::new("About", "#about"),
        Link::new("Experience", "#experience"),
        Link::new("Projects", "#projects"),
        Link::new("Skills", "#skills"),
    ]
}

fn links_or_default(links: Option<&[Link]>) -> Cow<'_, [Link]> {
    match links {
        Some(links) => Cow::Borrowed(links),
        None => Cow::Owned(default_nav_links()),
    }
}

fn social_links<'a>(own: Option<&'a [SocialLink]>, profile: &'a Profile) -> &'a [SocialLink] {
    own.or(profile.social_links.as_deref()).unwrap_or(&[])
}

/// Accessible label for a link or button: `ariaLabel`, else its text.
pub fn link_aria(link: &Link) -> &str {
    text_or(link.aria_label.as_deref(), &link.text)
}

/// Font Awesome brand name for a social link: `icon`, else `name`.
pub fn social_icon(link: &SocialLink) -> &str {
    text_or(link.icon.as_deref(), &link.name)
}

/// Accessible label for a hero social button.
pub fn social_aria(link: &SocialLink) -> Cow<'_, str> {
    match first_non_empty([link.aria_label.as_deref()]) {
        Some(label) => Cow::Borrowed(label),
        None => Cow::Owned(format!("{} profile", link.name)),
    }
}

/// Icon name with a per-context default.
pub fn icon_or<'a>(icon: Option<&'a str>, default: &'a str) -> &'a str {
    text_or(icon, default)
}

// =============================================================================
// Document
// =============================================================================

/// `<title>`: `meta.title`, then the profile name, then a generic label.
pub fn document_title(content: &ContentDocument) -> &str {
    first_non_empty([content.meta.title.as_deref(), content.profile.name.as_deref()])
        .unwrap_or("Portfolio")
}

pub fn document_description(content: &ContentDocument) -> &str {
    text_or(content.meta.description.as_deref(), "")
}

// =============================================================================
// Navbar
// =============================================================================

/// A site logo: either supplied text or the `<XY/>` initials mark.
#[derive(Debug, Clone, PartialEq)]
pub enum Logo<'a> {
    Custom(&'a str),
    Initials(String),
}

#[derive(Debug)]
pub struct NavbarView<'a> {
    pub logo: Logo<'a>,
    pub links: Cow<'a, [Link]>,
}

pub fn navbar<'a>(navbar: Option<&'a NavbarSection>, profile: &'a Profile) -> NavbarView<'a> {
    let logo = match first_non_empty([navbar.and_then(|n| n.logo.as_deref())]) {
        Some(logo) => Logo::Custom(logo),
        None => Logo::Initials(initials(profile.name.as_deref())),
    };
    NavbarView {
        logo,
        links: links_or_default(navbar.and_then(|n| n.links.as_deref())),
    }
}

// =============================================================================
// Hero
// =============================================================================

/// The visual shown beside the hero text.
#[derive(Debug, PartialEq)]
pub enum HeroVisual<'a> {
    Terminal(Cow<'a, [String]>),
    Avatar { src: &'a str, alt: &'a str },
    Initials(String),
}

#[derive(Debug)]
pub struct HeroView<'a> {
    pub greeting: &'a str,
    pub name: &'a str,
    pub title: &'a str,
    pub description: Cow<'a, str>,
    pub social_links: &'a [SocialLink],
    pub primary_cta: Cow<'a, Link>,
    pub secondary_cta: Cow<'a, Link>,
    pub visual: HeroVisual<'a>,
}

pub fn hero<'a>(hero: Option<&'a HeroSection>, profile: &'a Profile) -> HeroView<'a> {
    let name = text_or(profile.name.as_deref(), "");
    let title = text_or(profile.title.as_deref(), "");

    let description = match first_non_empty([
        hero.and_then(|h| h.description.as_deref()),
        profile.bio.as_deref(),
    ]) {
        Some(text) => Cow::Borrowed(text),
        None => Cow::Owned(format!("Specializing in {title}")),
    };

    let cta = hero.and_then(|h| h.cta.as_ref());
    let primary_cta = match cta.and_then(|c| c.primary.as_ref()) {
        Some(link) => Cow::Borrowed(link),
        None => Cow::Owned(Link::new("View Projects", "#projects")),
    };
    let secondary_cta = match cta.and_then(|c| c.secondary.as_ref()) {
        Some(link) => Cow::Borrowed(link),
        None => Cow::Owned(Link::new("View Skills", "#skills")),
    };

    let terminal = hero
        .and_then(|h| h.terminal.as_ref())
        .filter(|t| t.enabled.is_on());
    let visual = match terminal {
        Some(terminal) => HeroVisual::Terminal(match terminal.lines.as_deref() {
            Some(lines) => Cow::Borrowed(lines),
            None => Cow::Owned(vec![
                "Hello World!".to_string(),
                format!("I'm a {}", title.to_lowercase()),
                "Welcome to my portfolio".to_string(),
            ]),
        }),
        None => match first_non_empty([profile.avatar.as_deref()]) {
            Some(src) => HeroVisual::Avatar { src, alt: name },
            None => HeroVisual::Initials(initials(profile.name.as_deref())),
        },
    };

    HeroView {
        greeting: text_or(hero.and_then(|h| h.greeting.as_deref()), "Hello, I'm"),
        name,
        title,
        description,
        social_links: social_links(hero.and_then(|h| h.social_links.as_deref()), profile),
        primary_cta,
        secondary_cta,
        visual,
    }
}

// =============================================================================
// About
// =============================================================================

#[derive(Debug)]
pub struct AboutView<'a> {
    pub title: &'a str,
    pub description: &'a str,
    /// `(src, alt)` of the profile photo, when the profile has one.
    pub photo: Option<(&'a str, &'a str)>,
    pub cards: &'a [AboutCard],
    pub passion: Option<&'a str>,
}

pub fn about<'a>(about: Option<&'a AboutSection>, profile: &'a Profile) -> AboutView<'a> {
    let photo = profile
        .avatar
        .as_deref()
        .filter(|src| !src.trim().is_empty())
        .map(|src| (src, text_or(profile.name.as_deref(), "")));
    AboutView {
        title: text_or(about.and_then(|a| a.title.as_deref()), "About Me"),
        description: text_or(about.and_then(|a| a.description.as_deref()), ""),
        photo,
        cards: about.map(|a| a.cards.as_slice()).unwrap_or(&[]),
        passion: first_non_empty([about.and_then(|a| a.passion.as_deref())]),
    }
}

// =============================================================================
// Experience / Projects
// =============================================================================

#[derive(Debug)]
pub struct ExperienceView<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub layout: ExperienceLayout,
    pub jobs: &'a [Job],
}

pub fn experience(experience: Option<&ExperienceSection>) -> ExperienceView<'_> {
    ExperienceView {
        title: text_or(experience.and_then(|e| e.title.as_deref()), "Work Experience"),
        description: text_or(experience.and_then(|e| e.description.as_deref()), ""),
        layout: experience.map(|e| e.layout).unwrap_or_default(),
        jobs: experience.map(|e| e.jobs.as_slice()).unwrap_or(&[]),
    }
}

#[derive(Debug)]
pub struct ProjectsView<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub layout: ProjectsLayout,
    pub list: &'a [Project],
}

pub fn projects(projects: Option<&ProjectsSection>) -> ProjectsView<'_> {
    ProjectsView {
        title: text_or(projects.and_then(|p| p.title.as_deref()), "Key Projects"),
        description: text_or(projects.and_then(|p| p.description.as_deref()), ""),
        layout: projects.map(|p| p.layout).unwrap_or_default(),
        list: projects.map(|p| p.list.as_slice()).unwrap_or(&[]),
    }
}

// =============================================================================
// Skills
// =============================================================================

#[derive(Debug)]
pub struct CertificationsView<'a> {
    pub title: &'a str,
    pub icon: &'a str,
    pub list: &'a [String],
}

#[derive(Debug)]
pub struct SkillsView<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub categories: &'a [SkillCategory],
    pub certifications: Option<CertificationsView<'a>>,
}

pub fn skills(skills: Option<&SkillsSection>) -> SkillsView<'_> {
    let certifications = skills
        .and_then(|s| s.certifications.as_ref())
        .filter(|c| c.enabled.is_on() && !c.list.is_empty())
        .map(|c| CertificationsView {
            title: text_or(c.title.as_deref(), "Certifications"),
            icon: icon_or(c.icon.as_deref(), "award"),
            list: &c.list,
        });
    SkillsView {
        title: text_or(skills.and_then(|s| s.title.as_deref()), "Skills & Expertise"),
        description: text_or(skills.and_then(|s| s.description.as_deref()), ""),
        categories: skills.map(|s| s.categories.as_slice()).unwrap_or(&[]),
        certifications,
    }
}

// =============================================================================
// Education
// =============================================================================

#[derive(Debug)]
pub struct EducationView<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub schools: &'a [School],
}

pub fn education(education: Option<&EducationSection>) -> EducationView<'_> {
    EducationView {
        title: text_or(education.and_then(|e| e.title.as_deref()), "Education"),
        description: first_non_empty([education.and_then(|e| e.description.as_deref())]),
        schools: education.map(|e| e.schools.as_slice()).unwrap_or(&[]),
    }
}

// =============================================================================
// Contact
// =============================================================================

#[derive(Debug)]
pub struct AvailabilityView<'a> {
    pub title: &'a str,
    pub text: &'a str,
    /// `(level, label)` for the availability bar, when a level is given.
    pub bar: Option<(&'a str, Cow<'a, str>)>,
}

#[derive(Debug)]
pub struct ContactInfoView<'a> {
    pub title: &'a str,
    pub items: &'a [ContactItem],
    pub availability: Option<AvailabilityView<'a>>,
}

#[derive(Debug)]
pub struct ContactView<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub info: Option<ContactInfoView<'a>>,
}

pub fn contact(contact: Option<&ContactSection>) -> ContactView<'_> {
    let info = contact.and_then(|c| c.info.as_ref()).map(|info| {
        let availability = info.availability.as_ref();
        // An absent availability block is on, like every other default-true flag.
        let availability = is_enabled(availability.map(|a| a.enabled)).then(|| {
            let level = first_non_empty([availability.and_then(|a| a.level.as_deref())]);
            AvailabilityView {
                title: text_or(availability.and_then(|a| a.title.as_deref()), "Availability"),
                text: text_or(
                    availability.and_then(|a| a.text.as_deref()),
                    "Currently available for new opportunities.",
                ),
                bar: level.map(|level| {
                    let label = match first_non_empty([availability.and_then(|a| a.label.as_deref())]) {
                        Some(label) => Cow::Borrowed(label),
                        None => Cow::Owned(format!("Current availability: {level}")),
                    };
                    (level, label)
                }),
            }
        });
        ContactInfoView {
            title: text_or(info.title.as_deref(), "Contact Information"),
            items: &info.items,
            availability,
        }
    });
    ContactView {
        title: text_or(contact.and_then(|c| c.title.as_deref()), "Get In Touch"),
        description: text_or(contact.and_then(|c| c.description.as_deref()), ""),
        info,
    }
}

// =============================================================================
// Footer
// =============================================================================

#[derive(Debug)]
pub struct FooterView<'a> {
    pub logo: Logo<'a>,
    pub tagline: &'a str,
    pub links: Cow<'a, [Link]>,
    pub social_links: &'a [SocialLink],
    pub copyright: Cow<'a, str>,
}

pub fn footer<'a>(footer: Option<&'a FooterSection>, profile: &'a Profile, year: i32) -> FooterView<'a> {
    let name = text_or(profile.name.as_deref(), "");
    let logo = match first_non_empty([footer.and_then(|f| f.logo.as_deref())]) {
        Some(logo) => Logo::Custom(logo),
        None => Logo::Initials(initials(Some(name))),
    };
    let copyright = match first_non_empty([footer.and_then(|f| f.copyright.as_deref())]) {
        Some(text) => Cow::Borrowed(text),
        None => Cow::Owned(format!("© {year} {name}. All rights reserved.")),
    };
    FooterView {
        logo,
        tagline: first_non_empty([
            footer.and_then(|f| f.tagline.as_deref()),
            profile.title.as_deref(),
        ])
        .unwrap_or(""),
        links: links_or_default(footer.and_then(|f| f.links.as_deref())),
        social_links: social_links(footer.and_then(|f| f.social_links.as_deref()), profile),
        copyright,
    }
}
