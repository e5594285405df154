//! # Gallery Splice
//!
//! Regenerates the homepage gallery of a static site from a JSON data file.
//! The homepage is hand-written HTML; only the region between two marker
//! comments belongs to this tool:
//!
//! ```text
//! index.html
//!   ...
//!   <!-- GALLERY:START -->     ← everything in here is regenerated
//!   <!-- GALLERY:END -->
//!   ...
//! ```
//!
//! # Pipeline
//!
//! ```text
//! data/gallery.json  →  GalleryDocument  →  HTML fragments  →  index.html
//!      (load)              (render)             (splice)          (write)
//! ```
//!
//! The new document is computed entirely in memory before the host file is
//! overwritten, so a failed run never leaves a half-written page.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Gallery data model and `type` discriminant dispatch |
//! | [`render`] | Card fragments, blank-line joining, indentation |
//! | [`splice`] | Managed-region replacement between the markers |
//! | [`config`] | Optional `gallery.toml` layered over stock defaults |
//! | [`pipeline`] | `run`/`check` orchestration and `BuildError` |
//! | [`output`] | CLI output formatting for `--verbose` and `check` |
//!
//! # Design Decisions
//!
//! ## No Escaping
//!
//! Field values are interpolated into the markup verbatim. The data file is
//! maintained alongside the site and is trusted, and descriptions may carry
//! inline markup. Escaping would silently change that output.
//!
//! ## Closed Item Set
//!
//! Exactly two card shapes exist, `project` and `upcoming`. They are a plain
//! enum with an exhaustive match, and unknown `type` values are rejected while
//! loading rather than skipped.

pub mod config;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod splice;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
