//! Hero banner: greeting, name, title, calls to action, and a visual.
//!
//! The visual is a fake terminal when `hero.terminal` is present and enabled;
//! otherwise the profile photo, or a gradient tile with the owner's initials.

use crate::content::{HeroSection, Profile};
use crate::resolve::{self, HeroVisual, link_aria, social_aria, social_icon};
use maud::{Markup, html};

pub fn render(hero: Option<&HeroSection>, profile: &Profile) -> Markup {
    let view = resolve::hero(hero, profile);

    html! {
        section id="home" class="pt-32 pb-20 md:pt-40 md:pb-32 px-4 relative overflow-hidden" aria-labelledby="hero-title" {
            div class="absolute inset-0 bg-gradient-to-br from-blue-50 to-indigo-50 animate-gradient bg-[length:400%_400%] -z-10" {}
            div class="container mx-auto max-w-5xl relative" {
                div class="grid md:grid-cols-2 gap-8 items-center" {
                    div data-animation="animate__fadeInUp" {
                        p class="text-primary font-medium mb-2" { (view.greeting) }
                        h1 id="hero-title" class="text-4xl md:text-5xl lg:text-6xl font-bold mb-4 font-display" { (view.name) }
                        h2 class="text-xl md:text-2xl text-gray-600 mb-6" { (view.title) }
                        p class="text-gray-700 mb-8 text-lg" { (view.description) }
                        div class="flex flex-wrap gap-3" {
                            a href=(view.primary_cta.url) class="px-6 py-3 bg-primary hover:bg-secondary text-white rounded-lg shadow-lg hover:shadow-xl transition-all flex items-center group" aria-label=(link_aria(&view.primary_cta)) {
                                span { (view.primary_cta.text) }
                                i class="fas fa-arrow-right ml-2 group-hover:translate-x-1 transition-transform" {}
                            }
                            a href=(view.secondary_cta.url) class="px-6 py-3 bg-white hover:bg-gray-100 border border-gray-200 rounded-lg shadow-lg hover:shadow-xl transition-all" aria-label=(link_aria(&view.secondary_cta)) {
                                (view.secondary_cta.text)
                            }
                        }
                    }
                    (visual(&view.visual))
                }
                @if !view.social_links.is_empty() {
                    div class="mt-16 md:mt-24 flex justify-center" {
                        div class="flex space-x-4" {
                            @for link in view.social_links {
                                a href=(link.url) class="w-12 h-12 flex items-center justify-center rounded-full bg-white shadow-lg hover:shadow-xl transition-all hover:-translate-y-1 text-primary" aria-label=(social_aria(link)) {
                                    i class={ "fab fa-" (social_icon(link)) " text-xl" } {}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn visual(visual: &HeroVisual<'_>) -> Markup {
    html! {
        div class="relative" data-animation="animate__fadeIn" {
            div class="w-full h-full aspect-square bg-gradient-to-br from-primary to-secondary rounded-full opacity-10 absolute -right-10 -top-10 animate-pulse" {}
            @match visual {
                HeroVisual::Terminal(lines) => {
                    (terminal(lines))
                }
                HeroVisual::Avatar { src, alt } => {
                    div class="relative z-10 p-2 bg-white rounded-xl shadow-xl overflow-hidden" {
                        img src=(src) alt=(alt) class="w-full h-auto rounded-lg";
                    }
                }
                HeroVisual::Initials(initials) => {
                    div class="relative z-10 aspect-square bg-gradient-to-br from-primary to-secondary rounded-xl shadow-xl flex items-center justify-center" {
                        span class="text-white text-6xl font-bold" { (initials) }
                    }
                }
            }
        }
    }
}

fn terminal(lines: &[String]) -> Markup {
    html! {
        div class="terminal-window relative z-10" {
            div class="terminal-header" {
                div class="terminal-dot red" {}
                div class="terminal-dot yellow" {}
                div class="terminal-dot green" {}
                div class="terminal-title" { "terminal" }
            }
            div class="terminal-body" {
                @for line in lines {
                    p class="mb-2" {
                        span class="prompt" { "➜" }
                        " "
                        span class="directory" { "~" }
                        " " (line)
                    }
                }
                p class="flex items-center" {
                    span class="prompt" { "➜" }
                    " "
                    span class="directory" { "~" }
                    " "
                    span class="cursor" {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SocialLink;

    fn jane() -> Profile {
        Profile {
            name: Some("Jane Doe".to_string()),
            title: Some("Engineer".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_from_profile_only() {
        let html = render(None, &jane()).into_string();
        assert!(html.contains(r#"id="home""#));
        assert!(html.contains("Hello, I&#39;m") || html.contains("Hello, I'm"));
        assert!(html.contains(">Jane Doe</h1>"));
        assert!(html.contains(">Engineer</h2>"));
        assert!(html.contains("Specializing in Engineer"));
        assert!(html.contains(r#"<span class="text-white text-6xl font-bold">JD</span>"#));
        assert!(!html.contains("terminal-window"));
    }

    #[test]
    fn default_ctas() {
        let html = render(None, &jane()).into_string();
        assert!(html.contains(r##"href="#projects""##));
        assert!(html.contains("View Projects"));
        assert!(html.contains(r#"aria-label="View Skills""#));
    }

    #[test]
    fn terminal_lines_rendered() {
        let section: HeroSection = serde_json::from_str(
            r#"{"terminal": {"lines": ["cargo build", "cargo test"]}}"#,
        )
        .unwrap();
        let html = render(Some(&section), &jane()).into_string();
        assert!(html.contains("terminal-window"));
        assert!(html.contains("cargo build"));
        assert!(html.contains("cargo test"));
        assert_eq!(html.matches(r#"class="prompt""#).count(), 3);
    }

    #[test]
    fn avatar_image_when_terminal_off() {
        let mut profile = jane();
        profile.avatar = Some("/img/jane.jpg".to_string());
        let html = render(None, &profile).into_string();
        assert!(html.contains(r#"src="/img/jane.jpg""#));
        assert!(html.contains(r#"alt="Jane Doe""#));
    }

    #[test]
    fn social_links_from_profile() {
        let mut profile = jane();
        profile.social_links = Some(vec![SocialLink {
            name: "linkedin".to_string(),
            url: "https://linkedin.com/in/jane".to_string(),
            ..Default::default()
        }]);
        let html = render(None, &profile).into_string();
        assert!(html.contains(r#"class="fab fa-linkedin text-xl""#));
        assert!(html.contains(r#"aria-label="linkedin profile""#));
    }

    #[test]
    fn no_social_row_without_links() {
        let html = render(None, &jane()).into_string();
        assert!(!html.contains("mt-16 md:mt-24"));
    }
}
