//! Shared test utilities for the gallery-splice test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let before = read_index(tmp.path());
//! pipeline::run(&SiteLayout::new(tmp.path(), GalleryConfig::default())).unwrap();
//! assert_outside_region_unchanged(&before, &read_index(tmp.path()));
//! ```

use std::path::Path;
use tempfile::TempDir;

const START: &str = "<!-- GALLERY:START -->";
const END: &str = "<!-- GALLERY:END -->";

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/site/` to a temp directory and return it.
///
/// Tests get an isolated copy they can rewrite without affecting other tests
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
// Site file access
// =========================================================================

pub fn read_index(root: &Path) -> String {
    std::fs::read_to_string(root.join("index.html")).unwrap()
}

/// Replace the fixture gallery data.
pub fn write_data(root: &Path, json: &str) {
    std::fs::write(root.join("data/gallery.json"), json).unwrap();
}

// =========================================================================
// Assertions
// =========================================================================

/// Split a document around the default markers. Panics if either is missing.
fn outside_region(html: &str) -> (&str, &str) {
    let (before, rest) = html
        .split_once(START)
        .unwrap_or_else(|| panic!("start marker missing from:\n{html}"));
    let (_, after) = rest
        .split_once(END)
        .unwrap_or_else(|| panic!("end marker missing from:\n{html}"));
    (before, after)
}

/// Assert that everything outside the managed region is byte-identical.
pub fn assert_outside_region_unchanged(before: &str, after: &str) {
    let (old_head, old_tail) = outside_region(before);
    let (new_head, new_tail) = outside_region(after);
    assert_eq!(old_head, new_head, "text before the start marker changed");
    assert_eq!(old_tail, new_tail, "text after the end marker changed");
}
