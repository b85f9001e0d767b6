//! CLI output formatting for `check` and `build`.
//!
//! Output is a content inventory: each section is listed by its position on
//! the page and its key, with the landmark it renders as secondary context.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Content
//!     Source: site/data/content.json
//!     Title: Jane Doe - Engineer
//!     Schema: loaded
//!
//! Sections
//! 001 navbar
//! 002 hero
//! 003 about (disabled)
//! ...
//!
//! Warnings
//!     Missing required field: meta.title
//! ```
//!
//! ## Build
//!
//! ```text
//! Sections
//! 001 navbar → #navbar
//! 002 hero → #home
//! ...
//!
//! Wrote dist/index.html (standalone document)
//! Rendered 8 of 9 sections
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::generate::{CheckReport, DocumentMode, GenerateReport};
use crate::render::SectionKind;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Positional index + section key, with an optional trailing detail.
///
/// ```text
/// 003 about (disabled)
/// 002 hero → #home
/// ```
fn section_line(index: usize, kind: SectionKind, detail: Option<&str>) -> String {
    match detail {
        Some(d) => format!("{} {} {}", format_index(index), kind.key(), d),
        None => format!("{} {}", format_index(index), kind.key()),
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}

fn mode_label(mode: DocumentMode) -> &'static str {
    match mode {
        DocumentMode::Standalone => "standalone document",
        DocumentMode::Shell => "spliced into shell",
        DocumentMode::ShellUnchanged => "shell unchanged, no id=\"app\"",
    }
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check_output(report: &CheckReport) -> Vec<String> {
    let mut lines = vec![
        "Content".to_string(),
        format!("{}Source: {}", indent(1), report.content_file.display()),
        format!("{}Title: {}", indent(1), truncate(&report.title, 60)),
        format!(
            "{}Schema: {}",
            indent(1),
            if report.schema_loaded {
                "loaded"
            } else {
                "not found, presence checks skipped"
            }
        ),
        String::new(),
        "Sections".to_string(),
    ];

    for (pos, (kind, enabled)) in report.sections.iter().enumerate() {
        let detail = (!enabled).then_some("(disabled)");
        lines.push(section_line(pos + 1, *kind, detail));
    }

    if !report.missing_fields.is_empty() {
        lines.push(String::new());
        lines.push("Warnings".to_string());
        for field in &report.missing_fields {
            lines.push(format!("{}Missing required field: {field}", indent(1)));
        }
    }

    lines
}

pub fn print_check_output(report: &CheckReport) {
    for line in format_check_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = vec!["Sections".to_string()];

    for (pos, kind) in report.sections.iter().enumerate() {
        let anchor = format!("→ #{}", kind.landmark_id());
        lines.push(section_line(pos + 1, *kind, Some(&anchor)));
    }

    lines.push(String::new());
    lines.push(format!(
        "Wrote {} ({})",
        report.output_file.display(),
        mode_label(report.mode)
    ));
    lines.push(format!(
        "Rendered {} of {} sections",
        report.sections.len(),
        SectionKind::ALL.len()
    ));
    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn check_report() -> CheckReport {
        CheckReport {
            content_file: PathBuf::from("site/data/content.json"),
            schema_loaded: true,
            missing_fields: vec!["meta.title"],
            title: "Jane Doe".to_string(),
            sections: SectionKind::ALL
                .iter()
                .map(|&k| (k, k != SectionKind::About))
                .collect(),
        }
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1000), "1000");
    }

    #[test]
    fn truncate_is_char_safe() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("ééééé", 2), "éé...");
    }

    #[test]
    fn check_output_lists_sections_and_warnings() {
        let lines = format_check_output(&check_report());
        assert_eq!(lines[0], "Content");
        assert_eq!(lines[1], "    Source: site/data/content.json");
        assert!(lines.contains(&"001 navbar".to_string()));
        assert!(lines.contains(&"003 about (disabled)".to_string()));
        assert!(lines.contains(&"009 footer".to_string()));
        assert_eq!(lines.last().unwrap(), "    Missing required field: meta.title");
    }

    #[test]
    fn check_output_without_schema_has_no_warnings() {
        let mut report = check_report();
        report.schema_loaded = false;
        report.missing_fields.clear();
        let lines = format_check_output(&report);
        assert!(lines[3].contains("not found"));
        assert!(!lines.contains(&"Warnings".to_string()));
    }

    #[test]
    fn generate_output_shows_anchors_and_summary() {
        let report = GenerateReport {
            output_file: PathBuf::from("dist/index.html"),
            title: "Jane".to_string(),
            sections: vec![SectionKind::Navbar, SectionKind::Hero, SectionKind::Footer],
            mode: DocumentMode::Standalone,
        };
        let lines = format_generate_output(&report);
        assert_eq!(lines[1], "001 navbar → #navbar");
        assert_eq!(lines[2], "002 hero → #home");
        assert_eq!(lines[3], "003 footer → #footer");
        assert_eq!(lines[5], "Wrote dist/index.html (standalone document)");
        assert_eq!(lines[6], "Rendered 3 of 9 sections");
    }

    #[test]
    fn generate_output_notes_unchanged_shell() {
        let report = GenerateReport {
            output_file: PathBuf::from("out/index.html"),
            title: String::new(),
            sections: vec![],
            mode: DocumentMode::ShellUnchanged,
        };
        let lines = format_generate_output(&report);
        assert!(lines.iter().any(|l| l.contains("shell unchanged")));
    }
}
