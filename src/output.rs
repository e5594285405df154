//! CLI output formatting.
//!
//! A default build is silent. With `--verbose`, and always for `check`, the
//! rendered items are listed followed by the target document:
//!
//! ```text
//! Gallery (3 items)
//! 001 Orbits
//! 002 Quizzes
//! 003 Upcoming Project (upcoming)
//!     Source: data/gallery.json
//! index.html: updated
//! ```
//!
//! Format functions are pure and return `Vec<String>`; the `print_*`
//! wrappers write to stdout.

use crate::pipeline::BuildSummary;
use crate::types::ItemKind;
use std::path::Path;

fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Display a path relative to `root` when it lives underneath it.
fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Project cards show their title; other kinds are tagged.
fn item_line(index: usize, kind: ItemKind, title: &str) -> String {
    match kind {
        ItemKind::Project => format!("{} {}", format_index(index), title),
        ItemKind::Upcoming => format!("{} {} ({})", format_index(index), title, kind.as_str()),
    }
}

fn status(summary: &BuildSummary) -> &'static str {
    match (summary.changed, summary.written) {
        (false, _) => "unchanged",
        (true, true) => "updated",
        (true, false) => "would update",
    }
}

pub fn format_build_output(summary: &BuildSummary, root: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    let count = summary.items.len();
    let noun = if count == 1 { "item" } else { "items" };
    lines.push(format!("Gallery ({count} {noun})"));
    for (i, (kind, title)) in summary.items.iter().enumerate() {
        lines.push(item_line(i + 1, *kind, title));
    }
    lines.push(format!(
        "    Source: {}",
        display_path(&summary.data_path, root)
    ));
    lines.push(format!(
        "{}: {}",
        display_path(&summary.index_path, root),
        status(summary)
    ));
    lines
}

pub fn print_build_output(summary: &BuildSummary, root: &Path) {
    for line in format_build_output(summary, root) {
        println!("{}", line);
    }
}
