//! End-to-end tests: run the `folio` binary against a copy of the fixture site.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixture_site() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    copy_dir(&src, tmp.path());
    tmp
}

fn copy_dir(src: &Path, dst: &Path) {
    for entry in std::fs::read_dir(src).unwrap() {
        let entry = entry.unwrap();
        let target = dst.join(entry.file_name());
        if entry.path().is_dir() {
            std::fs::create_dir_all(&target).unwrap();
            copy_dir(&entry.path(), &target);
        } else {
            std::fs::copy(entry.path(), &target).unwrap();
        }
    }
}

fn folio(site: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_folio"))
        .args(args)
        .arg("--source")
        .arg(site)
        .arg("--output")
        .arg(site.join("dist"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run folio")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn build_writes_index_html() {
    let site = fixture_site();
    let out = folio(site.path(), &["build"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let html = std::fs::read_to_string(site.path().join("dist/index.html")).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Jane Doe - Software Engineer</title>"));
    assert!(html.contains("--color-primary: #2563eb"));
    assert!(html.contains("Tidewater"));
    assert!(html.contains(r#"id="back-to-top""#));

    let text = stdout(&out);
    assert!(text.contains("001 navbar → #navbar"));
    assert!(text.contains("Rendered 9 of 9 sections"));
}

#[test]
fn build_with_empty_document_renders_defaults() {
    let site = fixture_site();
    std::fs::write(site.path().join("data/content.json"), "{}").unwrap();
    let out = folio(site.path(), &["build"]);
    assert!(out.status.success());

    let html = std::fs::read_to_string(site.path().join("dist/index.html")).unwrap();
    assert!(html.contains("<title>Portfolio</title>"));
    assert!(html.contains("No work experience listed."));
}

#[test]
fn build_skips_disabled_sections() {
    let site = fixture_site();
    std::fs::write(
        site.path().join("data/content.json"),
        r#"{"education": {"enabled": false}, "projects": {"enabled": false}}"#,
    )
    .unwrap();
    let out = folio(site.path(), &["build"]);
    assert!(out.status.success());

    let html = std::fs::read_to_string(site.path().join("dist/index.html")).unwrap();
    assert!(!html.contains(r#"id="education""#));
    assert!(!html.contains(r#"id="projects""#));
    assert!(stdout(&out).contains("Rendered 7 of 9 sections"));
}

#[test]
fn build_with_malformed_content_fails_with_error_page() {
    let site = fixture_site();
    std::fs::write(site.path().join("data/content.json"), "{ broken").unwrap();
    let out = folio(site.path(), &["build"]);
    assert!(!out.status.success());

    let html = std::fs::read_to_string(site.path().join("dist/index.html")).unwrap();
    assert!(html.contains("Error Loading Portfolio"));
    assert!(String::from_utf8_lossy(&out.stderr).contains("content.json"));
}

#[test]
fn build_rejects_unknown_theme_color() {
    let site = fixture_site();
    std::fs::write(site.path().join("config.toml"), "[theme]\ncolor = \"teal\"\n").unwrap();
    let out = folio(site.path(), &["build"]);
    assert!(!out.status.success());
    assert!(!site.path().join("dist/index.html").exists());
}

#[test]
fn check_reports_without_writing() {
    let site = fixture_site();
    let out = folio(site.path(), &["check"]);
    assert!(out.status.success());

    let text = stdout(&out);
    assert!(text.contains("Title: Jane Doe - Software Engineer"));
    assert!(text.contains("Schema: loaded"));
    assert!(text.contains("009 footer"));
    assert!(!text.contains("Warnings"));
    assert!(!site.path().join("dist").exists());
}

#[test]
fn check_warns_on_missing_required_fields() {
    let site = fixture_site();
    std::fs::write(site.path().join("data/content.json"), r#"{"profile": {"name": "Jo"}}"#)
        .unwrap();
    let out = folio(site.path(), &["check"]);
    assert!(out.status.success());

    let text = stdout(&out);
    assert!(text.contains("Missing required field: meta.title"));
    assert!(text.contains("Missing required field: profile.title"));
}

#[test]
fn render_prints_fragment() {
    let site = fixture_site();
    let out = folio(site.path(), &["render"]);
    assert!(out.status.success());

    let text = stdout(&out);
    assert!(text.starts_with("<nav"));
    assert!(!text.contains("<!DOCTYPE"));
    assert!(text.contains(r#"id="contact""#));
}

#[test]
fn gen_config_output_is_loadable() {
    let site = fixture_site();
    let out = folio(site.path(), &["gen-config"]);
    assert!(out.status.success());

    std::fs::write(site.path().join("config.toml"), out.stdout).unwrap();
    let build = folio(site.path(), &["build"]);
    assert!(build.status.success());
    let html = std::fs::read_to_string(site.path().join("dist/index.html")).unwrap();
    assert!(html.contains("--color-primary: #f97316"));
}
