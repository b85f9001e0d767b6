//! Shared test utilities for the folio test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let report = check(tmp.path()).unwrap();
//!
//! let content = fixture_content();
//! assert_eq!(content.profile.name.as_deref(), Some("Jane Doe"));
//! ```

use crate::content::ContentDocument;
use std::path::Path;
use tempfile::TempDir;

const FIXTURE_CONTENT: &str = include_str!("../fixtures/site/data/content.json");

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/site` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Parsed fixtures
// =========================================================================

/// The fixture content document, parsed. Panics if the fixture is invalid.
pub fn fixture_content() -> ContentDocument {
    serde_json::from_str(FIXTURE_CONTENT)
        .unwrap_or_else(|e| panic!("fixtures/site/data/content.json is invalid: {e}"))
}
