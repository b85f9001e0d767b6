//! Page assembly and site generation.
//!
//! Takes the loaded [`SiteContext`], renders every enabled section in page
//! order, wraps the result in a document, and writes `index.html`.
//!
//! ## Document Modes
//!
//! - **Default shell**: a complete document is generated here, linking the
//!   configured CDN stylesheets and scripts, inlining the theme CSS and the
//!   interactivity script, with the page inside `<div id="app">`.
//! - **User shell** (`shell = "index.html"` in config): the page replaces the
//!   contents of the shell's `id="app"` element and `<title>` / the
//!   description meta are updated in place. A shell without an `id="app"`
//!   element is written unchanged and a warning is logged.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! └── index.html
//! ```
//!
//! When the content document cannot be read or parsed, `index.html` gets a
//! static "Error Loading Portfolio" panel instead and the build fails.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/site.css`: theme utilities, terminal, timeline, skill bars
//! - `static/site.js`: reveal-on-scroll, skill bars, smooth scroll, mobile
//!   menu, back-to-top

use crate::config::{self, AssetsConfig, ConfigError, SiteConfig};
use crate::content::{ContentError, SiteContext, load_schema, validate_required_fields};
use crate::render::SectionKind;
use crate::resolve::{document_description, document_title};
use chrono::Datelike;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Content(#[from] ContentError),
}

const CSS_STATIC: &str = include_str!("../static/site.css");
const JS: &str = include_str!("../static/site.js");

/// Title used when no content could be loaded.
const FALLBACK_TITLE: &str = "Portfolio";

/// Inputs to rendering that are not part of the content document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Year for the default footer copyright line.
    pub year: i32,
}

impl RenderOptions {
    pub fn current() -> Self {
        Self {
            year: chrono::Local::now().year(),
        }
    }
}

/// How the page ended up in the written document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentMode {
    /// Complete document generated from the built-in shell.
    Standalone,
    /// Page spliced into the user's shell.
    Shell,
    /// User shell had no `id="app"` element and was written as-is.
    ShellUnchanged,
}

/// Outcome of a successful build.
#[derive(Debug)]
pub struct GenerateReport {
    pub output_file: PathBuf,
    pub title: String,
    pub sections: Vec<SectionKind>,
    pub mode: DocumentMode,
}

/// Outcome of `check`: what a build would render, without writing anything.
#[derive(Debug)]
pub struct CheckReport {
    pub content_file: PathBuf,
    pub schema_loaded: bool,
    pub missing_fields: Vec<&'static str>,
    pub title: String,
    /// Every section with whether it would be rendered.
    pub sections: Vec<(SectionKind, bool)>,
}

// ============================================================================
// Pipeline entry points
// ============================================================================

/// Build the site in `source` into `output_dir/index.html`.
pub fn generate(
    source: &Path,
    output_dir: &Path,
    options: &RenderOptions,
) -> Result<GenerateReport, GenerateError> {
    let config = config::load_config(source)?;
    let shell = read_shell(&config, source)?;

    fs::create_dir_all(output_dir)?;
    let output_file = output_dir.join("index.html");

    let ctx = match load_context(&config, source) {
        Ok(ctx) => ctx,
        Err(err) => {
            let (html, _) =
                build_document(&config, shell.as_deref(), FALLBACK_TITLE, "", error_panel());
            fs::write(&output_file, html)?;
            log::error!("{err}");
            log::info!("Wrote error page to {}", output_file.display());
            return Err(err.into());
        }
    };

    let sections = enabled_sections(&ctx);
    let title = document_title(&ctx.content).to_string();
    let page = assemble_page(&ctx, options);
    let (html, mode) = build_document(
        &config,
        shell.as_deref(),
        &title,
        document_description(&ctx.content),
        page,
    );
    fs::write(&output_file, html)?;
    log::info!("Wrote {}", output_file.display());

    Ok(GenerateReport {
        output_file,
        title,
        sections,
        mode,
    })
}

/// Load config and content and report what would be built.
pub fn check(source: &Path) -> Result<CheckReport, GenerateError> {
    let config = config::load_config(source)?;
    let content_file = config.content_file(source);
    let content = crate::content::load_content(&content_file)?;
    let schema_loaded = load_schema(&config.schema_file(source)).is_some();
    let missing_fields = if schema_loaded {
        validate_required_fields(&content)
    } else {
        Vec::new()
    };
    let sections = SectionKind::ALL
        .iter()
        .map(|&kind| (kind, kind.is_enabled(&content)))
        .collect();
    Ok(CheckReport {
        content_file,
        schema_loaded,
        missing_fields,
        title: document_title(&content).to_string(),
        sections,
    })
}

/// Render just the page fragment (what goes inside `id="app"`).
pub fn render_fragment(source: &Path, options: &RenderOptions) -> Result<String, GenerateError> {
    let config = config::load_config(source)?;
    let ctx = load_context(&config, source)?;
    Ok(assemble_page(&ctx, options).into_string())
}

fn load_context(config: &SiteConfig, source: &Path) -> Result<SiteContext, ContentError> {
    SiteContext::load(&config.content_file(source), &config.schema_file(source))
}

fn read_shell(config: &SiteConfig, source: &Path) -> Result<Option<String>, std::io::Error> {
    config
        .shell_file(source)
        .map(fs::read_to_string)
        .transpose()
}

// ============================================================================
// Page assembly
// ============================================================================

/// Sections that will be rendered, in page order.
pub fn enabled_sections(ctx: &SiteContext) -> Vec<SectionKind> {
    SectionKind::ALL
        .into_iter()
        .filter(|kind| kind.is_enabled(&ctx.content))
        .collect()
}

/// The whole page: every enabled section followed by the back-to-top button.
pub fn assemble_page(ctx: &SiteContext, options: &RenderOptions) -> Markup {
    html! {
        @for kind in enabled_sections(ctx) {
            (kind.render(&ctx.content, options.year))
        }
        (back_to_top())
    }
}

fn back_to_top() -> Markup {
    html! {
        a href="#" id="back-to-top" class="fixed bottom-6 right-6 w-12 h-12 bg-primary text-white rounded-full flex items-center justify-center shadow-lg hover:bg-secondary transition-colors" aria-label="Back to top" style="display: none;" {
            i class="fas fa-arrow-up" {}
        }
    }
}

/// Static panel shown in place of the page when content fails to load.
pub fn error_panel() -> Markup {
    html! {
        div class="flex justify-center items-center min-h-screen" {
            div class="text-center" {
                div class="text-red-600 text-6xl mb-4" {
                    i class="fas fa-exclamation-circle" {}
                }
                h1 class="text-2xl font-bold mb-2" { "Error Loading Portfolio" }
                p { "Sorry, we couldn't load the portfolio content. Please try again later." }
            }
        }
    }
}

// ============================================================================
// Documents
// ============================================================================

/// Wrap `body` in the user's shell if one is configured, else the built-in one.
fn build_document(
    config: &SiteConfig,
    shell: Option<&str>,
    title: &str,
    description: &str,
    body: Markup,
) -> (String, DocumentMode) {
    match shell {
        None => {
            let css = format!(
                "{}\n\n{}",
                config::generate_theme_css(&config.palette()),
                CSS_STATIC
            );
            let html = base_document(title, description, &css, &config.assets, body);
            (html.into_string(), DocumentMode::Standalone)
        }
        Some(shell) => match splice_into_root(shell, &body.into_string(), title, description) {
            Some(html) => (html, DocumentMode::Shell),
            None => {
                log::warn!("Shell has no element with id=\"app\", writing it unchanged");
                (shell.to_string(), DocumentMode::ShellUnchanged)
            }
        },
    }
}

/// Renders the base HTML document structure
fn base_document(
    title: &str,
    description: &str,
    css: &str,
    assets: &AssetsConfig,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                meta name="description" content=(description);
                @for href in &assets.stylesheets {
                    link rel="stylesheet" href=(href);
                }
                @for src in &assets.scripts {
                    script src=(src) {}
                }
                style { (PreEscaped(css)) }
            }
            body class="font-sans text-gray-800 bg-white antialiased" {
                div id="app" {
                    (content)
                }
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Replace the contents of the shell's `id="app"` element with `fragment` and
/// update `<title>` and the description meta.
///
/// Returns `None` when the shell has no such element. Nesting is tracked by
/// counting open and close tags with the root element's name.
pub fn splice_into_root(
    shell: &str,
    fragment: &str,
    title: &str,
    description: &str,
) -> Option<String> {
    let (inner_start, inner_end) = find_root_contents(shell)?;
    let mut out = String::with_capacity(shell.len() + fragment.len());
    out.push_str(&shell[..inner_start]);
    out.push_str(fragment);
    out.push_str(&shell[inner_end..]);
    let out = replace_title(&out, title);
    Some(replace_description(&out, description))
}

/// Byte range of the inner HTML of the `id="app"` element.
fn find_root_contents(shell: &str) -> Option<(usize, usize)> {
    let id_pos = [r#"id="app""#, "id='app'"]
        .iter()
        .filter_map(|needle| find_id_attr(shell, needle))
        .min()?;
    let tag_start = shell[..id_pos].rfind('<')?;
    let name: String = shell[tag_start + 1..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();
    if name.is_empty() {
        return None;
    }
    let inner_start = tag_start + shell[tag_start..].find('>')? + 1;

    let open = format!("<{name}");
    let close = format!("</{name}");
    let mut depth = 1usize;
    let mut pos = inner_start;
    loop {
        let next_close = find_tag(shell, &close, pos)?;
        match find_tag(shell, &open, pos) {
            Some(next_open) if next_open < next_close => {
                depth += 1;
                pos = next_open + open.len();
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    return Some((inner_start, next_close));
                }
                pos = next_close + close.len();
            }
        }
    }
}

/// First `needle` that starts an attribute (`id="app"` but not `data-id="app"`).
fn find_id_attr(haystack: &str, needle: &str) -> Option<usize> {
    haystack.match_indices(needle).map(|(at, _)| at).find(|&at| {
        haystack[..at]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_whitespace())
    })
}

/// Next `<name` or `</name` that is a whole tag name (`<div` but not `<divider`).
fn find_tag(haystack: &str, prefix: &str, from: usize) -> Option<usize> {
    let mut pos = from;
    while let Some(offset) = haystack[pos..].find(prefix) {
        let at = pos + offset;
        let after = haystack[at + prefix.len()..].chars().next();
        if matches!(after, Some(c) if c.is_ascii_whitespace() || c == '>' || c == '/') {
            return Some(at);
        }
        pos = at + prefix.len();
    }
    None
}

fn escape(text: &str) -> String {
    html! { (text) }.into_string()
}

fn replace_title(doc: &str, title: &str) -> String {
    let Some(open) = doc.find("<title") else {
        return doc.to_string();
    };
    let Some(gt) = doc[open..].find('>') else {
        return doc.to_string();
    };
    let start = open + gt + 1;
    let Some(len) = doc[start..].find("</title>") else {
        return doc.to_string();
    };
    format!("{}{}{}", &doc[..start], escape(title), &doc[start + len..])
}

fn replace_description(doc: &str, description: &str) -> String {
    let Some(name_pos) = doc
        .find(r#"name="description""#)
        .or_else(|| doc.find("name='description'"))
    else {
        return doc.to_string();
    };
    let Some(tag_start) = doc[..name_pos].rfind('<') else {
        return doc.to_string();
    };
    let Some(tag_len) = doc[tag_start..].find('>') else {
        return doc.to_string();
    };
    let tag = &doc[tag_start..tag_start + tag_len];
    let Some(attr) = tag.find(r#"content=""#) else {
        return doc.to_string();
    };
    let value_start = tag_start + attr + r#"content=""#.len();
    let Some(value_len) = doc[value_start..].find('"') else {
        return doc.to_string();
    };
    format!(
        "{}{}{}",
        &doc[..value_start],
        escape(description),
        &doc[value_start + value_len..]
    )
}

// ============================================================================
// Tests
// ============================================================================
