//! Education history: one card per school.

use super::{HeaderSpacing, empty_state, icon_list, section_header, stagger};
use crate::content::{EducationSection, School};
use crate::resolve::{self, first_non_empty, icon_or};
use maud::{Markup, html};

pub fn render(education: Option<&EducationSection>) -> Markup {
    let view = resolve::education(education);

    html! {
        section id="education" class="py-20 px-4 bg-white transition-colors duration-300" aria-labelledby="education-title" {
            div class="container mx-auto max-w-5xl" {
                @if view.schools.is_empty() {
                    (section_header("education", view.title, view.description, HeaderSpacing::Tight))
                    (empty_state("No education history listed."))
                } @else {
                    (section_header("education", view.title, view.description, HeaderSpacing::Regular))
                    @for (index, school) in view.schools.iter().enumerate() {
                        (school_card(index, school))
                    }
                }
            }
        }
    }
}

fn school_card(index: usize, school: &School) -> Markup {
    let has_lists = !school.focus_areas.is_empty() || !school.activities.is_empty();
    html! {
        div class="bg-gray-50 rounded-xl overflow-hidden shadow-lg p-6 md:p-8 border border-gray-100 mb-8 last:mb-0" data-animation="animate__fadeInUp" data-animation-delay=(stagger(index, 200)) {
            div class="flex flex-col md:flex-row gap-6" {
                div class="md:w-1/4" {
                    div class="w-16 h-16 bg-primary/10 rounded-lg flex items-center justify-center mb-4 text-primary" {
                        i class={ "fas fa-" (icon_or(school.icon.as_deref(), "graduation-cap")) " text-2xl" } {}
                    }
                    h3 class="text-xl font-bold mb-2" { (school.name) }
                    @if let Some(location) = first_non_empty([school.location.as_deref()]) {
                        p class="text-gray-600 mb-4" { (location) }
                    }
                    div class="text-sm text-gray-600 mb-4" {
                        p { (school.period) }
                        p class="font-medium mt-2" { (school.degree) }
                        p { (school.field) }
                        @if let Some(gpa) = first_non_empty([school.gpa.as_deref()]) {
                            p class="mt-2" { "GPA: " (gpa) }
                        }
                    }
                }
                div class="md:w-3/4" {
                    @if has_lists {
                        div class="grid md:grid-cols-2 gap-6 mb-6" {
                            @if !school.focus_areas.is_empty() {
                                div {
                                    h4 class="text-lg font-semibold mb-3 text-gray-800" { "Focus Areas" }
                                    (icon_list(&school.focus_areas, "fas fa-check-circle text-green-500 mt-1 mr-2", "space-y-2 text-gray-700"))
                                }
                            }
                            @if !school.activities.is_empty() {
                                div {
                                    h4 class="text-lg font-semibold mb-3 text-gray-800" { "Activities & Achievements" }
                                    (icon_list(&school.activities, "fas fa-trophy text-yellow-500 mt-1 mr-2", "space-y-2 text-gray-700"))
                                }
                            }
                        }
                    }
                    @if let Some(capstone) = first_non_empty([school.capstone_project.as_deref()]) {
                        div {
                            h4 class="text-lg font-semibold mb-3 text-gray-800" { "Capstone Project" }
                            p class="text-gray-700" { (capstone) }
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

    fn parse(json: &str) -> EducationSection {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn empty_schools_placeholder() {
        let html = render(None).into_string();
        assert!(html.contains(r#"id="education""#));
        assert!(html.contains("No education history listed."));
        assert!(!html.contains("<p class=\"max-w-2xl"));
    }

    #[test]
    fn full_school_card() {
        let section = parse(
            r#"{"description": "Where I studied", "schools": [{
                "name": "State University", "location": "Springfield", "period": "2012 - 2016",
                "degree": "B.Sc.", "field": "Computer Science", "gpa": 3.8,
                "focusAreas": ["Compilers"], "activities": ["ACM ICPC"],
                "capstoneProject": "A tiny JIT"
            }]}"#,
        );
        let html = render(Some(&section)).into_string();
        assert!(html.contains("Where I studied"));
        assert!(html.contains("fas fa-graduation-cap text-2xl"));
        assert!(html.contains("Springfield"));
        assert!(html.contains("GPA: 3.8"));
        assert!(html.contains("Focus Areas"));
        assert!(html.contains("Activities &amp; Achievements"));
        assert!(html.contains("fas fa-trophy text-yellow-500"));
        assert!(html.contains("Capstone Project"));
        assert!(html.contains("A tiny JIT"));
    }

    #[test]
    fn optional_parts_omitted() {
        let section = parse(r#"{"schools": [{"name": "Bootcamp", "degree": "Cert", "icon": "laptop-code"}]}"#);
        let html = render(Some(&section)).into_string();
        assert!(html.contains("fas fa-laptop-code text-2xl"));
        assert!(!html.contains("GPA:"));
        assert!(!html.contains("Focus Areas"));
        assert!(!html.contains("Capstone Project"));
        assert!(!html.contains("grid md:grid-cols-2 gap-6 mb-6"));
    }

    #[test]
    fn staggered_cards() {
        let section = parse(r#"{"schools": [{"name": "A"}, {"name": "B"}]}"#);
        let html = render(Some(&section)).into_string();
        assert!(html.contains(r#"data-animation-delay="0ms""#));
        assert!(html.contains(r#"data-animation-delay="200ms""#));
    }
}
