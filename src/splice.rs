//! Managed-region replacement inside the host HTML document.
//!
//! The host is treated as three opaque spans:
//!
//! ```text
//! ...before...<!-- GALLERY:START -->...managed...<!-- GALLERY:END -->...after...
//! ```
//!
//! Only the managed span is rewritten. The first occurrence of each marker
//! is used; `before` and `after` are carried over byte for byte.

use crate::render::indent;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpliceError {
    #[error("Gallery marker not found in host document: {0}")]
    MissingMarker(String),
}

/// Start and end comment strings delimiting the managed region.
#[derive(Debug, Clone, Copy)]
pub struct Markers<'a> {
    pub start: &'a str,
    pub end: &'a str,
}

/// Replace the managed region of `host` with `block`, indented by `width`.
///
/// Both markers are checked before anything is split. The end marker is
/// searched for after the start marker, matching a single left-to-right split.
pub fn splice(
    host: &str,
    block: &str,
    markers: Markers<'_>,
    width: usize,
) -> Result<String, SpliceError> {
    if !host.contains(markers.start) {
        return Err(SpliceError::MissingMarker(markers.start.to_string()));
    }
    if !host.contains(markers.end) {
        return Err(SpliceError::MissingMarker(markers.end.to_string()));
    }

    let (before, rest) = host
        .split_once(markers.start)
        .ok_or_else(|| SpliceError::MissingMarker(markers.start.to_string()))?;
    // An end marker that only appears before the start marker leaves nothing to split.
    let (_, after) = rest
        .split_once(markers.end)
        .ok_or_else(|| SpliceError::MissingMarker(markers.end.to_string()))?;

    let pad = " ".repeat(width);
    Ok(format!(
        "{before}{start}\n{body}\n{pad}{end}{after}",
        start = markers.start,
        body = indent(block, width),
        end = markers.end,
    ))
}

/// The current managed region of `host`, if both markers are present.
pub fn managed_region<'h>(host: &'h str, markers: Markers<'_>) -> Option<&'h str> {
    let (_, rest) = host.split_once(markers.start)?;
    let (region, _) = rest.split_once(markers.end)?;
    Some(region)
}
