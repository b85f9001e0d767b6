//! Work experience, in one of three layouts:
//!
//! - `timeline`: alternating entries along a vertical line (default)
//! - `cards`: two-column card grid
//! - `list`: a single panel with stacked entries

use super::{HeaderSpacing, empty_state, icon_list, section_header, stagger, tag};
use crate::content::{ExperienceSection, Job};
use crate::layout::ExperienceLayout;
use crate::resolve;
use maud::{Markup, html};

const ACHIEVEMENT_ICON: &str = "fas fa-check-circle text-green-500 mt-1 mr-2";
const ACHIEVEMENT_LIST: &str = "space-y-3 text-gray-700 mb-4";

pub fn render(experience: Option<&ExperienceSection>) -> Markup {
    let view = resolve::experience(experience);

    html! {
        section id="experience" class="py-20 px-4 bg-gray-50 transition-colors duration-300" aria-labelledby="experience-title" {
            div class="container mx-auto max-w-5xl" {
                (section_header("experience", view.title, Some(view.description), HeaderSpacing::Regular))
                @if view.jobs.is_empty() {
                    (empty_state("No work experience listed."))
                } @else {
                    (render_layout(view.layout, view.jobs))
                }
            }
        }
    }
}

/// Dispatch to a layout strategy. `jobs` is non-empty.
pub fn render_layout(layout: ExperienceLayout, jobs: &[Job]) -> Markup {
    match layout {
        ExperienceLayout::Timeline => timeline(jobs),
        ExperienceLayout::Cards => cards(jobs),
        ExperienceLayout::List => list(jobs),
    }
}

fn skill_tags(skills: &[String], wrapper_class: &str) -> Markup {
    html! {
        @if !skills.is_empty() {
            div class=(wrapper_class) {
                @for skill in skills {
                    (tag(skill))
                }
            }
        }
    }
}

fn timeline(jobs: &[Job]) -> Markup {
    html! {
        div class="relative" {
            div class="timeline-line" {}
            @for job in jobs {
                div class="md:flex items-center mb-24 relative" data-animation="animate__fadeIn" {
                    div class="timeline-dot" {}
                    div class="md:w-1/2 md:pr-12 mb-6 md:mb-0 md:text-right" {
                        span class="text-gray-500" { (job.period) }
                        h3 class="text-xl font-semibold text-primary mb-1" { (job.company) }
                        p class="text-gray-600 italic mb-2" { (job.location.as_deref().unwrap_or_default()) }
                        p class="font-medium text-lg mb-4" { (job.position) }
                    }
                    div class="md:w-1/2 md:pl-12" {
                        div class="bg-white rounded-lg p-6 shadow-lg hover:shadow-xl transition-all border border-gray-100 hover-card" {
                            (icon_list(&job.achievements, ACHIEVEMENT_ICON, ACHIEVEMENT_LIST))
                            (skill_tags(&job.skills, "flex flex-wrap gap-2"))
                        }
                    }
                }
            }
        }
    }
}

fn cards(jobs: &[Job]) -> Markup {
    html! {
        div class="grid md:grid-cols-2 gap-6" {
            @for (index, job) in jobs.iter().enumerate() {
                div class="bg-white rounded-lg overflow-hidden shadow-lg border border-gray-100 hover-card" data-animation="animate__fadeInUp" data-animation-delay=(stagger(index, 100)) {
                    div class="p-6" {
                        div class="flex justify-between items-start mb-4" {
                            div {
                                h3 class="text-xl font-semibold text-primary" { (job.company) }
                                p class="text-gray-600 italic" { (job.location.as_deref().unwrap_or_default()) }
                            }
                            span class="text-gray-500 text-sm" { (job.period) }
                        }
                        p class="font-medium text-lg mb-4" { (job.position) }
                        (icon_list(&job.achievements, ACHIEVEMENT_ICON, ACHIEVEMENT_LIST))
                        (skill_tags(&job.skills, "flex flex-wrap gap-2 mt-4"))
                    }
                }
            }
        }
    }
}

fn list(jobs: &[Job]) -> Markup {
    html! {
        div class="bg-white rounded-lg p-6 md:p-8 shadow-lg" {
            @for (index, job) in jobs.iter().enumerate() {
                div class="mb-10 last:mb-0" data-animation="animate__fadeInUp" data-animation-delay=(stagger(index, 100)) {
                    div class="flex flex-col md:flex-row md:justify-between md:items-start mb-2" {
                        h3 class="text-xl font-semibold text-primary mb-1 md:mb-0" { (job.company) }
                        span class="text-gray-500" { (job.period) }
                    }
                    div class="flex flex-col md:flex-row md:justify-between md:items-start mb-4" {
                        p class="font-medium" { (job.position) }
                        p class="text-gray-600 italic" { (job.location.as_deref().unwrap_or_default()) }
                    }
                    (icon_list(&job.achievements, ACHIEVEMENT_ICON, ACHIEVEMENT_LIST))
                    (skill_tags(&job.skills, "flex flex-wrap gap-2"))
                    div class="w-full h-px bg-gray-200 mt-10" {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ExperienceSection {
        serde_json::from_str(json).unwrap()
    }

    const TWO_JOBS: &str = r#"[
        {"company": "Acme", "position": "Engineer", "period": "2020 - 2022",
         "achievements": ["Shipped v2"], "skills": ["Rust"]},
        {"company": "Globex", "position": "Lead", "period": "2022 - Present", "location": "Remote"}
    ]"#;

    #[test]
    fn defaults_without_config() {
        let html = render(None).into_string();
        assert!(html.contains(r#"id="experience""#));
        assert!(html.contains(">Work Experience</h2>"));
        assert!(html.contains("No work experience listed."));
    }

    #[test]
    fn cards_layout_two_column_grid_in_order() {
        let section = parse(&format!(r#"{{"layout": "cards", "jobs": {TWO_JOBS}}}"#));
        let html = render(Some(&section)).into_string();
        assert!(html.contains("grid md:grid-cols-2 gap-6"));
        assert_eq!(html.matches("hover-card").count(), 2);
        let acme = html.find("Acme").unwrap();
        let globex = html.find("Globex").unwrap();
        assert!(acme < globex);
        for text in ["2020 - 2022", "Engineer", "2022 - Present", "Lead"] {
            assert!(html.contains(text), "missing {text}");
        }
        assert!(html.contains(r#"data-animation-delay="100ms""#));
    }

    #[test]
    fn timeline_is_default() {
        let section = parse(&format!(r#"{{"jobs": {TWO_JOBS}}}"#));
        let html = render(Some(&section)).into_string();
        assert!(html.contains("timeline-line"));
        assert_eq!(html.matches("timeline-dot").count(), 2);
    }

    #[test]
    fn unknown_layout_matches_default_output() {
        let default = parse(&format!(r#"{{"jobs": {TWO_JOBS}}}"#));
        let unknown = parse(&format!(r#"{{"layout": "zigzag", "jobs": {TWO_JOBS}}}"#));
        assert_eq!(
            render(Some(&default)).into_string(),
            render(Some(&unknown)).into_string()
        );
    }

    #[test]
    fn list_layout() {
        let section = parse(&format!(r#"{{"layout": "list", "jobs": {TWO_JOBS}}}"#));
        let html = render(Some(&section)).into_string();
        assert!(html.contains("bg-white rounded-lg p-6 md:p-8 shadow-lg"));
        assert_eq!(html.matches("w-full h-px bg-gray-200 mt-10").count(), 2);
        assert!(html.contains("Remote"));
    }

    #[test]
    fn achievements_and_skills_only_when_present() {
        let section = parse(&format!(r#"{{"layout": "cards", "jobs": {TWO_JOBS}}}"#));
        let html = render(Some(&section)).into_string();
        assert_eq!(html.matches("fa-check-circle").count(), 1);
        assert_eq!(html.matches("bg-primary/10 text-primary px-2").count(), 1);
    }

    #[test]
    fn empty_jobs_with_layout_shows_placeholder() {
        let section = parse(r#"{"layout": "cards", "jobs": [], "description": "Where I've been"}"#);
        let html = render(Some(&section)).into_string();
        assert!(html.contains("No work experience listed."));
        assert!(!html.contains("grid md:grid-cols-2"));
    }
}
