//! Project showcase in one of three layouts:
//!
//! - `featured`: one highlighted project across the full width, the rest in
//!   half-width cards (default)
//! - `grid`: up to three columns of cards, with optional cover images
//! - `list`: stacked full-width entries
//!
//! The featured project is the first one flagged `featured`, else the first
//! in the list.

use super::{HeaderSpacing, empty_state, level_bar, section_header, stagger, tag};
use crate::content::{Metric, Project, ProjectsSection};
use crate::layout::ProjectsLayout;
use crate::resolve::{self, first_non_empty, icon_or};
use maud::{Markup, html};

const LINK_CLASS: &str = "text-primary hover:text-secondary transition-colors";

pub fn render(projects: Option<&ProjectsSection>) -> Markup {
    let view = resolve::projects(projects);

    html! {
        section id="projects" class="py-20 px-4 bg-white transition-colors duration-300" aria-labelledby="projects-title" {
            div class="container mx-auto max-w-5xl" {
                @if view.list.is_empty() {
                    (section_header("projects", view.title, Some(view.description), HeaderSpacing::Tight))
                    (empty_state("No projects listed."))
                } @else {
                    (section_header("projects", view.title, Some(view.description), HeaderSpacing::Regular))
                    (render_layout(view.layout, view.list))
                }
            }
        }
    }
}

/// Dispatch to a layout strategy. `list` is non-empty.
pub fn render_layout(layout: ProjectsLayout, list: &[Project]) -> Markup {
    match layout {
        ProjectsLayout::Featured => featured(list),
        ProjectsLayout::Grid => grid(list),
        ProjectsLayout::List => stacked(list),
    }
}

/// Index of the project to highlight.
pub fn pick_featured(list: &[Project]) -> Option<usize> {
    if list.is_empty() {
        return None;
    }
    Some(list.iter().position(|p| p.featured).unwrap_or(0))
}

// ============================================================================
// Pieces
// ============================================================================

fn tags(tags: &[String], wrapper_class: &str) -> Markup {
    html! {
        @if !tags.is_empty() {
            div class=(wrapper_class) {
                @for t in tags {
                    (tag(t))
                }
            }
        }
    }
}

fn metrics(metrics: &[Metric]) -> Markup {
    html! {
        @if !metrics.is_empty() {
            div class="space-y-3" {
                @for metric in metrics {
                    @let value = metric.value.as_deref().unwrap_or_default();
                    div class="relative pt-1" {
                        div class="flex items-center justify-between mb-1" {
                            span class="text-xs font-medium text-gray-700" { (metric.name) }
                            span class="text-xs font-medium text-gray-700" { (value) }
                        }
                        (level_bar(value, "w-full bg-gray-200 rounded-full h-2", "bg-green-500 h-2 rounded-full"))
                    }
                }
            }
        }
    }
}

/// Non-empty live and repository URLs.
fn project_urls(project: &Project) -> (Option<&str>, Option<&str>) {
    (
        first_non_empty([project.project_url.as_deref()]),
        first_non_empty([project.repo_url.as_deref()]),
    )
}

/// Labelled "Live Demo" / "Source Code" links.
fn text_links(project: &Project, wrapper_class: &str) -> Markup {
    let (live, repo) = project_urls(project);
    html! {
        @if live.is_some() || repo.is_some() {
            div class=(wrapper_class) {
                @if let Some(url) = live {
                    a href=(url) target="_blank" rel="noopener noreferrer" class=(LINK_CLASS) aria-label="View project" {
                        i class="fas fa-external-link-alt mr-1" {}
                        " Live Demo"
                    }
                }
                @if let Some(url) = repo {
                    a href=(url) target="_blank" rel="noopener noreferrer" class=(LINK_CLASS) aria-label="View code repository" {
                        i class="fab fa-github mr-1" {}
                        " Source Code"
                    }
                }
            }
        }
    }
}

/// Icon-only links pinned to the card's top-right corner.
fn corner_links(project: &Project) -> Markup {
    let (live, repo) = project_urls(project);
    html! {
        @if live.is_some() || repo.is_some() {
            div class="absolute top-4 right-4 flex space-x-3" {
                @if let Some(url) = live {
                    a href=(url) target="_blank" rel="noopener noreferrer" class=(LINK_CLASS) aria-label="View project" {
                        i class="fas fa-external-link-alt" {}
                    }
                }
                @if let Some(url) = repo {
                    a href=(url) target="_blank" rel="noopener noreferrer" class=(LINK_CLASS) aria-label="View code repository" {
                        i class="fab fa-github" {}
                    }
                }
            }
        }
    }
}

// ============================================================================
// Layouts
// ============================================================================

fn featured(list: &[Project]) -> Markup {
    let Some(pick) = pick_featured(list) else {
        return html! {};
    };
    let main = &list[pick];
    let others = list
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != pick)
        .map(|(_, p)| p);

    html! {
        div class="grid md:grid-cols-12 gap-8" {
            div class="md:col-span-12 group" data-animation="animate__fadeInUp" {
                div class="bg-gray-50 rounded-xl overflow-hidden shadow-lg hover:shadow-xl transition-all border border-gray-100 h-full hover-card" {
                    div class="p-6 md:p-8" {
                        div class="flex flex-col md:flex-row md:items-center gap-6" {
                            div class="md:w-1/3" {
                                div class="w-16 h-16 bg-primary/10 rounded-lg flex items-center justify-center mb-4 text-primary" {
                                    i class={ "fas fa-" (icon_or(main.icon.as_deref(), "star")) " text-2xl" } {}
                                }
                                h3 class="text-xl font-bold mb-2" { (main.title) }
                                (tags(&main.tags, "flex flex-wrap gap-2 mb-4"))
                                (text_links(main, "mt-4 flex space-x-4"))
                            }
                            div class="md:w-2/3" {
                                p class="text-gray-700 mb-4" { (main.description) }
                                (metrics(&main.metrics))
                            }
                        }
                    }
                }
            }

            @for (index, project) in others.enumerate() {
                div class="md:col-span-6 group" data-animation="animate__fadeInUp" data-animation-delay=(stagger(index, 200)) {
                    div class="bg-gray-50 rounded-xl overflow-hidden shadow-lg hover:shadow-xl transition-all border border-gray-100 h-full hover-card relative" {
                        div class="p-6" {
                            (corner_links(project))
                            div class="w-12 h-12 bg-primary/10 rounded-lg flex items-center justify-center mb-4 text-primary" {
                                i class={ "fas fa-" (icon_or(project.icon.as_deref(), "code")) " text-xl" } {}
                            }
                            h3 class="text-lg font-bold mb-2" { (project.title) }
                            (tags(&project.tags, "flex flex-wrap gap-2 mb-4"))
                            p class="text-gray-700 mb-4" { (project.description) }
                            (metrics(&project.metrics))
                        }
                    }
                }
            }
        }
    }
}

fn grid(list: &[Project]) -> Markup {
    let columns = list.len().min(3);
    html! {
        div class={ "grid md:grid-cols-" (columns) " gap-6" } {
            @for (index, project) in list.iter().enumerate() {
                div class="group" data-animation="animate__fadeInUp" data-animation-delay=(stagger(index, 100)) {
                    div class="bg-gray-50 rounded-xl overflow-hidden shadow-lg hover:shadow-xl transition-all border border-gray-100 h-full hover-card relative" {
                        @if let Some(src) = first_non_empty([project.image_url.as_deref()]) {
                            div class="h-48 overflow-hidden" {
                                img src=(src) alt=(project.title) class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-500";
                            }
                        }
                        div class="p-6" {
                            (corner_links(project))
                            div class="flex items-center mb-3" {
                                div class="w-10 h-10 bg-primary/10 rounded-lg flex items-center justify-center mr-3 text-primary" {
                                    i class={ "fas fa-" (icon_or(project.icon.as_deref(), "code")) " text-lg" } {}
                                }
                                h3 class="text-lg font-bold" { (project.title) }
                            }
                            p class="text-gray-700 mb-4" { (project.description) }
                            (tags(&project.tags, "flex flex-wrap gap-2 mt-4"))
                        }
                    }
                }
            }
        }
    }
}

fn stacked(list: &[Project]) -> Markup {
    html! {
        div class="space-y-6" {
            @for (index, project) in list.iter().enumerate() {
                div class="mb-8 last:mb-0" data-animation="animate__fadeInUp" data-animation-delay=(stagger(index, 100)) {
                    div class="bg-gray-50 rounded-xl p-6 shadow-lg border border-gray-100 hover-card" {
                        div class="flex items-center mb-4" {
                            div class="w-12 h-12 bg-primary/10 rounded-lg flex items-center justify-center mr-4 text-primary" {
                                i class={ "fas fa-" (icon_or(project.icon.as_deref(), "code")) " text-xl" } {}
                            }
                            h3 class="text-xl font-bold" { (project.title) }
                        }
                        p class="text-gray-700 mb-4" { (project.description) }
                        (tags(&project.tags, "flex flex-wrap gap-2 mb-3"))
                        (text_links(project, "flex space-x-4 mt-3"))
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ProjectsSection {
        serde_json::from_str(json).unwrap()
    }

    fn project(title: &str, featured: bool) -> Project {
        Project {
            title: title.to_string(),
            featured,
            ..Default::default()
        }
    }

    #[test]
    fn pick_featured_prefers_flag() {
        let list = [project("A", false), project("B", true), project("C", true)];
        assert_eq!(pick_featured(&list), Some(1));
    }

    #[test]
    fn pick_featured_falls_back_to_first() {
        let list = [project("A", false), project("B", false)];
        assert_eq!(pick_featured(&list), Some(0));
        assert_eq!(pick_featured(&[]), None);
    }

    #[test]
    fn empty_list_shows_placeholder_with_tight_header() {
        let section = parse(r#"{"layout": "grid", "list": []}"#);
        let html = render(Some(&section)).into_string();
        assert!(html.contains("No projects listed."));
        assert!(html.contains("text-center mb-6"));
        assert!(!html.contains("grid md:grid-cols"));
    }

    #[test]
    fn default_title_without_config() {
        let html = render(None).into_string();
        assert!(html.contains(">Key Projects</h2>"));
        assert!(html.contains("No projects listed."));
    }

    #[test]
    fn featured_layout_highlights_flagged_project() {
        let section = parse(
            r#"{"list": [
                {"title": "Alpha", "description": "first"},
                {"title": "Beta", "featured": true, "projectUrl": "https://beta.dev",
                 "metrics": [{"name": "Speed", "value": "90%"}]}
            ]}"#,
        );
        let html = render(Some(&section)).into_string();
        let beta = html.find("Beta").unwrap();
        let alpha = html.find("Alpha").unwrap();
        assert!(beta < alpha, "featured project renders first");
        assert!(html.contains("Live Demo"));
        assert!(!html.contains("Source Code"));
        assert!(html.contains(r#"data-level="90%""#));
        assert!(html.contains("fas fa-star text-2xl"));
        assert!(html.contains("fas fa-code text-xl"));
        assert_eq!(html.matches("md:col-span-6").count(), 1);
    }

    #[test]
    fn grid_columns_follow_count() {
        let section = parse(r#"{"layout": "grid", "list": [{"title": "A"}, {"title": "B"}]}"#);
        let html = render(Some(&section)).into_string();
        assert!(html.contains("grid md:grid-cols-2 gap-6"));

        let section = parse(
            r#"{"layout": "grid", "list": [{"title": "A"}, {"title": "B"}, {"title": "C"}, {"title": "D"}]}"#,
        );
        let html = render(Some(&section)).into_string();
        assert!(html.contains("grid md:grid-cols-3 gap-6"));
    }

    #[test]
    fn grid_cover_image() {
        let section = parse(r#"{"layout": "grid", "list": [{"title": "Pic", "imageUrl": "/p.png"}]}"#);
        let html = render(Some(&section)).into_string();
        assert!(html.contains(r#"src="/p.png""#));
        assert!(html.contains(r#"alt="Pic""#));
    }

    #[test]
    fn list_layout_with_repo_link() {
        let section = parse(
            r#"{"layout": "list", "list": [{"title": "Tool", "repoUrl": "https://github.com/x/tool", "tags": ["cli"]}]}"#,
        );
        let html = render(Some(&section)).into_string();
        assert!(html.contains(r#"class="space-y-6""#));
        assert!(html.contains("Source Code"));
        assert!(html.contains(">cli</span>"));
    }

    #[test]
    fn unknown_layout_matches_featured() {
        let list = r#"[{"title": "A"}, {"title": "B"}]"#;
        let default = parse(&format!(r#"{{"list": {list}}}"#));
        let unknown = parse(&format!(r#"{{"layout": "carousel", "list": {list}}}"#));
        assert_eq!(
            render(Some(&default)).into_string(),
            render(Some(&unknown)).into_string()
        );
    }

    #[test]
    fn empty_urls_render_no_links() {
        for layout in ["featured", "grid", "list"] {
            let section = parse(&format!(
                r#"{{"layout": "{layout}", "list": [
                    {{"title": "A", "projectUrl": "", "repoUrl": ""}},
                    {{"title": "B", "projectUrl": "", "repoUrl": ""}}]}}"#
            ));
            let html = render(Some(&section)).into_string();
            assert!(!html.contains("Live Demo"), "{layout}");
            assert!(!html.contains("Source Code"), "{layout}");
            assert!(!html.contains(r#"href="""#), "{layout}");
            assert!(!html.contains("absolute top-4 right-4"), "{layout}");
        }
    }
}
