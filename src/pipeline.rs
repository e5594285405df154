//! Read, render, splice, write.
//!
//! [`run`] is the whole build: load the gallery data, load the host document,
//! compute the new document in memory, and only then overwrite the host file.
//! Any failure before the write leaves the host untouched on disk.
//!
//! [`check`] performs every step except the write.

use crate::config::{ConfigError, SiteLayout};
use crate::render::render_all;
use crate::splice::{SpliceError, managed_region, splice};
use crate::types::{DataError, GalleryDocument, ItemKind};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Missing {}", .0.display())]
    MissingInputFile(PathBuf),
    #[error("Cannot access host document {}: {source}", path.display())]
    HostDocument {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Splice(#[from] SpliceError),
}

/// What a build rendered and where it went.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub data_path: PathBuf,
    pub index_path: PathBuf,
    /// `(kind, title)` per rendered item, in render order.
    pub items: Vec<(ItemKind, String)>,
    /// Whether the managed region differs from what was on disk.
    pub changed: bool,
    /// Whether the host document was written.
    pub written: bool,
}

/// Rebuild the gallery region and overwrite the host document.
pub fn run(layout: &SiteLayout) -> Result<BuildSummary, BuildError> {
    execute(layout, true)
}

/// Validate data and markers and report what would change, without writing.
pub fn check(layout: &SiteLayout) -> Result<BuildSummary, BuildError> {
    execute(layout, false)
}

fn execute(layout: &SiteLayout, write: bool) -> Result<BuildSummary, BuildError> {
    let data_path = layout.data_path();
    let index_path = layout.index_path();
    if !data_path.exists() {
        return Err(BuildError::MissingInputFile(data_path));
    }

    let document = GalleryDocument::load(&data_path)?;
    let host = fs::read_to_string(&index_path).map_err(|source| BuildError::HostDocument {
        path: index_path.clone(),
        source,
    })?;

    let config = &layout.config;
    let block = render_all(&document.items);
    let updated = splice(&host, &block, config.markers(), config.indent)?;

    let changed = managed_region(&host, config.markers())
        != managed_region(&updated, config.markers());
    if write {
        fs::write(&index_path, &updated).map_err(|source| BuildError::HostDocument {
            path: index_path.clone(),
            source,
        })?;
    }

    Ok(BuildSummary {
        data_path,
        index_path,
        items: document
            .items
            .iter()
            .map(|item| (item.kind(), item.title().to_string()))
            .collect(),
        changed,
        written: write,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GalleryConfig;
    use crate::test_helpers::*;

    #[test]
    fn run_rewrites_managed_region_only() {
        let tmp = setup_fixtures();
        let layout = SiteLayout::new(tmp.path(), GalleryConfig::default());
        let before = read_index(tmp.path());

        let summary = run(&layout).unwrap();
        assert!(summary.written);
        assert!(summary.changed);
        assert_eq!(summary.items.len(), 3);

        let after = read_index(tmp.path());
        assert_outside_region_unchanged(&before, &after);
        assert!(after.contains(r#"        <div class="gallery-item is-link" data-link="/demos/orbits/""#));
        assert!(!after.contains("stale card"));
    }

    #[test]
    fn run_is_idempotent() {
        let tmp = setup_fixtures();
        let layout = SiteLayout::new(tmp.path(), GalleryConfig::default());

        run(&layout).unwrap();
        let once = read_index(tmp.path());
        let summary = run(&layout).unwrap();
        let twice = read_index(tmp.path());

        assert_eq!(once, twice);
        assert!(!summary.changed);
    }

    #[test]
    fn missing_data_file_is_reported() {
        let tmp = setup_fixtures();
        fs::remove_file(tmp.path().join("data/gallery.json")).unwrap();
        let layout = SiteLayout::new(tmp.path(), GalleryConfig::default());

        let result = run(&layout);
        assert!(matches!(result, Err(BuildError::MissingInputFile(p)) if p.ends_with("gallery.json")));
    }

    #[test]
    fn unknown_type_leaves_host_untouched() {
        let tmp = setup_fixtures();
        write_data(tmp.path(), r#"{"items":[{"type":"upcoming"},{"type":"banner"}]}"#);
        let before = read_index(tmp.path());
        let layout = SiteLayout::new(tmp.path(), GalleryConfig::default());

        let result = run(&layout);
        assert!(matches!(
            result,
            Err(BuildError::Data(DataError::UnknownItemType(k))) if k == "banner"
        ));
        assert_eq!(read_index(tmp.path()), before);
    }

    #[test]
    fn missing_marker_leaves_host_untouched() {
        let tmp = setup_fixtures();
        let host = "<html><body>no gallery here</body></html>\n";
        fs::write(tmp.path().join("index.html"), host).unwrap();
        let layout = SiteLayout::new(tmp.path(), GalleryConfig::default());

        let result = run(&layout);
        assert!(matches!(
            result,
            Err(BuildError::Splice(SpliceError::MissingMarker(_)))
        ));
        assert_eq!(read_index(tmp.path()), host);
    }

    #[test]
    fn top_level_array_data_leaves_host_untouched() {
        let tmp = setup_fixtures();
        write_data(tmp.path(), "[]");
        let before = read_index(tmp.path());
        let layout = SiteLayout::new(tmp.path(), GalleryConfig::default());

        let result = run(&layout);
        assert!(matches!(result, Err(BuildError::Data(DataError::Json(_)))));
        assert_eq!(read_index(tmp.path()), before);
    }

    #[test]
    fn missing_host_document_names_its_path() {
        let tmp = setup_fixtures();
        fs::remove_file(tmp.path().join("index.html")).unwrap();
        let layout = SiteLayout::new(tmp.path(), GalleryConfig::default());

        let err = run(&layout).unwrap_err();
        assert!(matches!(&err, BuildError::HostDocument { path, .. } if path.ends_with("index.html")));
        assert!(err.to_string().contains("index.html"), "message: {err}");
    }

    #[test]
    fn check_does_not_write() {
        let tmp = setup_fixtures();
        let before = read_index(tmp.path());
        let layout = SiteLayout::new(tmp.path(), GalleryConfig::default());

        let summary = check(&layout).unwrap();
        assert!(!summary.written);
        assert!(summary.changed);
        assert_eq!(read_index(tmp.path()), before);
    }

    #[test]
    fn empty_items_produce_empty_region() {
        let tmp = setup_fixtures();
        write_data(tmp.path(), r#"{"items":[]}"#);
        let layout = SiteLayout::new(tmp.path(), GalleryConfig::default());

        run(&layout).unwrap();
        let after = read_index(tmp.path());
        let region = managed_region(&after, layout.config.markers()).unwrap();
        assert!(region.trim().is_empty());
    }

    #[test]
    fn data_file_is_never_modified() {
        let tmp = setup_fixtures();
        let data_path = tmp.path().join("data/gallery.json");
        let data_before = fs::read(&data_path).unwrap();
        let layout = SiteLayout::new(tmp.path(), GalleryConfig::default());

        run(&layout).unwrap();
        assert_eq!(fs::read(&data_path).unwrap(), data_before);
    }
}
