//! Browser tests for the page script: mobile menu, skill bars, back-to-top.
//!
//! Run with: `cargo test --test browser_interactivity -- --ignored`

use headless_chrome::{Browser, LaunchOptions, Tab};
use std::path::PathBuf;
use std::process::Command;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn generated_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("browser-generated")
}

fn ensure_site_built() {
    static BUILT: OnceLock<()> = OnceLock::new();
    BUILT.get_or_init(|| {
        let bin = env!("CARGO_BIN_EXE_folio");
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

        let output_dir = generated_dir();
        if output_dir.exists() {
            std::fs::remove_dir_all(&output_dir).expect("failed to clean output dir");
        }

        let status = Command::new(bin)
            .args([
                "build",
                "--source",
                root.join("fixtures/site").to_str().unwrap(),
                "--output",
                output_dir.to_str().unwrap(),
            ])
            .status()
            .expect("failed to run folio");
        assert!(status.success(), "fixture generation failed");
    });
}

fn browser() -> &'static Browser {
    static B: OnceLock<Browser> = OnceLock::new();
    B.get_or_init(|| {
        Browser::new(LaunchOptions {
            window_size: Some((390, 844)),
            ..Default::default()
        })
        .expect("failed to launch Chrome")
    })
}

fn load_index() -> Arc<Tab> {
    ensure_site_built();
    let tab = browser().new_tab().unwrap();
    let file = generated_dir().join("index.html");
    assert!(file.exists(), "missing: {}", file.display());

    tab.navigate_to(&format!("file://{}", file.display()))
        .unwrap()
        .wait_until_navigated()
        .unwrap();
    tab
}

fn eval(tab: &Tab, js: &str) -> serde_json::Value {
    tab.evaluate(js, false)
        .expect("failed to evaluate JS")
        .value
        .expect("no value returned")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn mobile_menu_toggles_aria_expanded() {
    let tab = load_index();
    let js = r#"(function() {
        const button = document.getElementById('mobile-menu-button');
        const menu = document.getElementById('mobile-menu');
        const before = [button.getAttribute('aria-expanded'), menu.classList.contains('hidden')];
        button.click();
        const open = [button.getAttribute('aria-expanded'), menu.classList.contains('hidden')];
        button.click();
        const closed = [button.getAttribute('aria-expanded'), menu.classList.contains('hidden')];
        return JSON.stringify([before, open, closed]);
    })()"#;
    let states = eval(&tab, js);
    assert_eq!(
        states.as_str().unwrap(),
        r#"[["false",true],["true",false],["false",true]]"#
    );
}

#[test]
#[ignore]
fn mobile_menu_link_closes_menu() {
    let tab = load_index();
    let js = r#"(function() {
        const button = document.getElementById('mobile-menu-button');
        const menu = document.getElementById('mobile-menu');
        button.click();
        menu.querySelector('a').click();
        return menu.classList.contains('hidden') && button.getAttribute('aria-expanded') === 'false';
    })()"#;
    assert!(eval(&tab, js).as_bool().unwrap());
}

#[test]
#[ignore]
fn skill_bars_grow_to_their_level() {
    let tab = load_index();
    eval(
        &tab,
        "document.querySelector('#skills .skill-bar').scrollIntoView(); true",
    );
    std::thread::sleep(Duration::from_millis(1200));
    let width = eval(
        &tab,
        "document.querySelector('#skills .skill-bar').style.width",
    );
    assert_eq!(width.as_str().unwrap(), "90%");
}

#[test]
#[ignore]
fn back_to_top_starts_hidden_and_appears_after_scroll() {
    let tab = load_index();
    let initial = eval(&tab, "document.getElementById('back-to-top').style.display");
    assert_eq!(initial.as_str().unwrap(), "none");

    eval(&tab, "window.scrollTo(0, 1000); true");
    std::thread::sleep(Duration::from_millis(200));
    let shown = eval(&tab, "document.getElementById('back-to-top').style.display");
    assert_eq!(shown.as_str().unwrap(), "flex");
}
