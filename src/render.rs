//! HTML fragment rendering for gallery cards.
//!
//! Fragments are assembled line by line rather than through an HTML builder:
//! the managed region is committed alongside hand-written markup, so the
//! layout (one attribute per line on `<video>`, two-space nesting) has to be
//! reproduced byte for byte.
//!
//! Field values are interpolated verbatim. The data file is trusted input,
//! and escaping would change the output of any existing entry that contains
//! markup.

use crate::types::{GalleryItem, ProjectItem, UpcomingItem};

/// Render a single card.
pub fn render_item(item: &GalleryItem) -> String {
    match item {
        GalleryItem::Project(project) => render_project(project),
        GalleryItem::Upcoming(upcoming) => render_upcoming(upcoming),
    }
}

/// Render every card in order, separated by a blank line.
pub fn render_all(items: &[GalleryItem]) -> String {
    items
        .iter()
        .map(render_item)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Prefix every non-empty line with `width` spaces.
///
/// Empty lines stay empty so the output carries no trailing whitespace.
pub fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_project(item: &ProjectItem) -> String {
    let poster_attr = item
        .poster()
        .map(|p| format!(r#" poster="{p}""#))
        .unwrap_or_default();

    [
        format!(
            r#"<div class="gallery-item is-link" data-link="{}" role="link" aria-label="{}" tabindex="0">"#,
            item.link,
            item.aria_label()
        ),
        "  <video".to_string(),
        r#"    class="gallery-media gallery-media-video""#.to_string(),
        format!(r#"    src="{}""#, item.video),
        "    muted".to_string(),
        "    loop".to_string(),
        "    playsinline".to_string(),
        format!(r#"    preload="metadata"{poster_attr}"#),
        r#"    aria-hidden="true">"#.to_string(),
        "  </video>".to_string(),
        overlay_open(),
        overlay_title(&item.title),
        overlay_desc(&item.description),
        "  </div>".to_string(),
        "</div>".to_string(),
    ]
    .join("\n")
}

fn render_upcoming(item: &UpcomingItem) -> String {
    [
        format!(
            r#"<div class="gallery-item is-upcoming" role="status" aria-label="{}">"#,
            item.aria_label()
        ),
        overlay_open(),
        overlay_title(item.title()),
        overlay_desc(item.description()),
        "  </div>".to_string(),
        "</div>".to_string(),
    ]
    .join("\n")
}

fn overlay_open() -> String {
    r#"  <div class="gallery-overlay">"#.to_string()
}

fn overlay_title(title: &str) -> String {
    format!(r#"    <h2 class="gallery-title">{title}</h2>"#)
}

fn overlay_desc(description: &str) -> String {
    format!(r#"    <p class="gallery-desc">{description}</p>"#)
}
