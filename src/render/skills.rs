//! Skills grouped into categories, each with its own presentation
//! (`bars`, `tags` or `icons`), plus an optional certifications strip.

use super::{HeaderSpacing, empty_state, level_bar, section_header};
use crate::content::{Skill, SkillCategory, SkillsSection};
use crate::layout::SkillsLayout;
use crate::resolve::{self, CertificationsView, first_non_empty};
use maud::{Markup, html};

pub fn render(skills: Option<&SkillsSection>) -> Markup {
    let view = resolve::skills(skills);
    let columns = view.categories.len().min(2);

    html! {
        section id="skills" class="py-20 px-4 bg-gray-50 transition-colors duration-300" aria-labelledby="skills-title" {
            div class="container mx-auto max-w-5xl" {
                @if view.categories.is_empty() {
                    (section_header("skills", view.title, Some(view.description), HeaderSpacing::Tight))
                    (empty_state("No skills listed."))
                } @else {
                    (section_header("skills", view.title, Some(view.description), HeaderSpacing::Regular))
                    div class={ "grid md:grid-cols-" (columns) " gap-10" } {
                        @for (index, category) in view.categories.iter().enumerate() {
                            (category_block(index, category))
                        }
                    }
                    @if let Some(certs) = &view.certifications {
                        (certifications(certs))
                    }
                }
            }
        }
    }
}

fn category_block(index: usize, category: &SkillCategory) -> Markup {
    let animation = if index % 2 == 0 {
        "animate__fadeInLeft"
    } else {
        "animate__fadeInRight"
    };
    html! {
        div data-animation=(animation) {
            h3 class="text-xl font-bold mb-6 flex items-center text-gray-800" {
                @if let Some(icon) = first_non_empty([category.icon.as_deref()]) {
                    i class={ "fas fa-" (icon) " mr-3 text-primary" } {}
                }
                (category.title)
            }
            @if !category.skills.is_empty() {
                (render_layout(category.layout, &category.skills))
            }
        }
    }
}

/// Dispatch to a layout strategy. `skills` is non-empty.
pub fn render_layout(layout: SkillsLayout, skills: &[Skill]) -> Markup {
    match layout {
        SkillsLayout::Bars => bars(skills),
        SkillsLayout::Tags => tags(skills),
        SkillsLayout::Icons => icons(skills),
    }
}

fn bars(skills: &[Skill]) -> Markup {
    html! {
        div class="space-y-4" {
            @for skill in skills {
                @let level = skill.level.as_deref().unwrap_or_default();
                div {
                    div class="flex justify-between mb-1" {
                        span class="text-gray-700" { (skill.name) }
                        span class="text-gray-700" { (level) }
                    }
                    (level_bar(level, "w-full bg-gray-200 rounded-full h-2.5", "bg-blue-600 h-2.5 rounded-full"))
                }
            }
        }
    }
}

fn tags(skills: &[Skill]) -> Markup {
    html! {
        div class="flex flex-wrap gap-3" {
            @for skill in skills {
                span class="bg-white px-4 py-2 rounded-full shadow text-gray-800 hover:shadow-md transition-shadow" {
                    (skill.name)
                }
            }
        }
    }
}

fn icons(skills: &[Skill]) -> Markup {
    html! {
        div class="grid grid-cols-2 md:grid-cols-4 gap-4" {
            @for skill in skills {
                div class="bg-white p-4 rounded-lg shadow hover:shadow-md transition-all text-center" {
                    i class={ (icon_class(skill)) " text-3xl mb-2 text-primary" } {}
                    p class="font-medium" { (skill.name) }
                }
            }
        }
    }
}

/// Brand icon when one is named, a generic code glyph otherwise.
fn icon_class(skill: &Skill) -> String {
    match first_non_empty([skill.icon.as_deref()]) {
        Some(icon) => format!("fab fa-{icon}"),
        None => "fas fa-code".to_string(),
    }
}

fn certifications(certs: &CertificationsView<'_>) -> Markup {
    html! {
        div class="mt-16" data-animation="animate__fadeIn" {
            h3 class="text-xl font-bold mb-6 flex items-center text-gray-800" {
                i class={ "fas fa-" (certs.icon) " mr-3 text-primary" } {}
                (certs.title)
            }
            div class="grid grid-cols-1 md:grid-cols-3 gap-4" {
                @for cert in certs.list {
                    div class="bg-white p-4 rounded-lg shadow hover:shadow-md transition-all border border-gray-100 flex items-center" {
                        i class="fas fa-certificate text-primary mr-3 text-xl" {}
                        span class="font-medium" { (cert) }
                    }
                }
            }
        }
    }
}
