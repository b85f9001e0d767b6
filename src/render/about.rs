//! About section: description (beside the profile photo when there is one),
//! feature cards, and an optional closing statement.

use super::{HeaderSpacing, section_header, stagger};
use crate::content::{AboutSection, Profile};
use crate::resolve::{self, icon_or};
use maud::{Markup, html};

pub fn render(about: Option<&AboutSection>, profile: &Profile) -> Markup {
    let view = resolve::about(about, profile);
    let columns = view.cards.len().min(3);

    html! {
        section id="about" class="py-20 px-4 bg-white transition-colors duration-300" aria-labelledby="about-title" {
            div class="container mx-auto max-w-5xl" {
                (section_header("about", view.title, None, HeaderSpacing::Regular))

                @if let Some((src, alt)) = view.photo {
                    div class="grid md:grid-cols-12 gap-10 mb-16 items-center" {
                        div class="md:col-span-4 flex justify-center" data-animation="animate__fadeInLeft" {
                            div class="about-photo-container" {
                                div class="about-photo-bg" {}
                                div class="about-photo" {
                                    img src=(src) alt=(alt) class="w-full h-full object-cover";
                                }
                            }
                        }
                        div class="md:col-span-8" data-animation="animate__fadeInRight" {
                            p class="text-lg text-gray-700 mb-6" { (view.description) }
                        }
                    }
                } @else {
                    div class="mb-16" data-animation="animate__fadeIn" {
                        p class="max-w-2xl text-lg text-gray-700 mx-auto text-center" { (view.description) }
                    }
                }

                @if !view.cards.is_empty() {
                    div class={ "grid md:grid-cols-" (columns) " gap-8" } {
                        @for (index, card) in view.cards.iter().enumerate() {
                            div class="bg-gray-50 p-6 rounded-lg shadow-lg hover:shadow-xl transition-all hover-card" data-animation="animate__fadeInUp" data-animation-delay=(stagger(index, 200)) {
                                div class="w-16 h-16 bg-primary/10 rounded-lg flex items-center justify-center mb-6 text-primary" {
                                    i class={ "fas fa-" (icon_or(card.icon.as_deref(), "star")) " text-2xl" } {}
                                }
                                h3 class="text-xl font-semibold mb-3" { (card.title) }
                                p class="text-gray-700" { (card.description) }
                            }
                        }
                    }
                }

                @if let Some(passion) = view.passion {
                    div class="mt-16 text-center" data-animation="animate__fadeIn" {
                        p class="text-lg text-gray-700 mb-6 max-w-3xl mx-auto" { (passion) }
                        a href="#experience" class="inline-flex items-center text-primary hover:text-secondary font-medium group" {
                            "View my experience "
                            i class="fas fa-arrow-down ml-2 group-hover:translate-y-1 transition-transform" {}
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> AboutSection {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn default_title_and_centered_text() {
        let html = render(None, &Profile::default()).into_string();
        assert!(html.contains(r#"id="about""#));
        assert!(html.contains(">About Me</h2>"));
        assert!(html.contains("mx-auto text-center"));
        assert!(!html.contains("about-photo"));
    }

    #[test]
    fn photo_layout_with_avatar() {
        let profile = Profile {
            name: Some("Jane".to_string()),
            avatar: Some("/me.png".to_string()),
            ..Default::default()
        };
        let section = parse(r#"{"description": "I build compilers."}"#);
        let html = render(Some(&section), &profile).into_string();
        assert!(html.contains("about-photo-container"));
        assert!(html.contains(r#"src="/me.png""#));
        assert!(html.contains("I build compilers."));
    }

    #[test]
    fn cards_grid_caps_at_three_columns() {
        let section = parse(
            r#"{"cards": [{"title": "A"}, {"title": "B"}, {"title": "C"}, {"title": "D", "icon": "bolt"}]}"#,
        );
        let html = render(Some(&section), &Profile::default()).into_string();
        assert!(html.contains("grid md:grid-cols-3 gap-8"));
        assert!(html.contains(r#"data-animation-delay="600ms""#));
        assert!(html.contains("fas fa-star text-2xl"));
        assert!(html.contains("fas fa-bolt text-2xl"));
    }

    #[test]
    fn two_cards_two_columns() {
        let section = parse(r#"{"cards": [{"title": "A"}, {"title": "B"}]}"#);
        let html = render(Some(&section), &Profile::default()).into_string();
        assert!(html.contains("grid md:grid-cols-2 gap-8"));
    }

    #[test]
    fn passion_block() {
        let section = parse(r#"{"passion": "I love open source."}"#);
        let html = render(Some(&section), &Profile::default()).into_string();
        assert!(html.contains("I love open source."));
        assert!(html.contains("View my experience"));

        let html = render(None, &Profile::default()).into_string();
        assert!(!html.contains("View my experience"));
    }
}
