//! Gallery data model and JSON loading.
//!
//! The data file is a single object with an ordered `items` array:
//!
//! ```json
//! {
//!   "items": [
//!     { "type": "project", "title": "Foo", "description": "Bar",
//!       "link": "/foo", "video": "/v.mp4", "poster": "/p.jpg" },
//!     { "type": "upcoming" }
//!   ]
//! }
//! ```
//!
//! Each item carries a `type` discriminant. `"project"` is assumed when the
//! key is absent; `"upcoming"` selects the placeholder card. Anything else is
//! rejected while loading, so a loaded [`GalleryDocument`] only ever holds
//! renderable items.

use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_UPCOMING_TITLE: &str = "Upcoming Project";
pub const DEFAULT_UPCOMING_DESCRIPTION: &str = "More updates are on the way.";
pub const DEFAULT_UPCOMING_ARIA_LABEL: &str = "Upcoming project";

#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown gallery item type: {0}")]
    UnknownItemType(String),
}

/// The parsed gallery data file. Render order is `items` order.
#[derive(Debug, Clone, Default)]
pub struct GalleryDocument {
    pub items: Vec<GalleryItem>,
}

/// On-disk shape before discriminant dispatch. Only built from a JSON object.
#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    items: Vec<Value>,
}

impl GalleryDocument {
    /// Parse a gallery document from JSON text.
    ///
    /// The top level must be an object; serde would otherwise accept an array
    /// as a positional `RawDocument` and default the missing `items`.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let value: Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(DataError::Json(serde::de::Error::custom(
                "gallery data must be an object with an `items` array",
            )));
        }
        let raw: RawDocument = serde_json::from_value(value)?;
        let items = raw
            .items
            .into_iter()
            .map(GalleryItem::from_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { items })
    }

    /// Read and parse a gallery data file.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

/// The `type` discriminant of a gallery item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Project,
    Upcoming,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Upcoming => "upcoming",
        }
    }
}

/// One gallery card.
#[derive(Debug, Clone)]
pub enum GalleryItem {
    Project(ProjectItem),
    Upcoming(UpcomingItem),
}

impl GalleryItem {
    /// Dispatch on the `type` key and deserialize the matching shape.
    pub fn from_value(value: Value) -> Result<Self, DataError> {
        let kind = match value.get("type") {
            None => "project".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => return Err(DataError::UnknownItemType(other.to_string())),
        };
        match kind.as_str() {
            "project" => Ok(Self::Project(serde_json::from_value(value)?)),
            "upcoming" => Ok(Self::Upcoming(serde_json::from_value(value)?)),
            _ => Err(DataError::UnknownItemType(kind)),
        }
    }

    /// The `type` discriminant this item was loaded from.
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Project(_) => ItemKind::Project,
            Self::Upcoming(_) => ItemKind::Upcoming,
        }
    }

    /// Display title, with the upcoming placeholder applied.
    pub fn title(&self) -> &str {
        match self {
            Self::Project(p) => &p.title,
            Self::Upcoming(u) => u.title(),
        }
    }
}

/// A clickable project card backed by a looping video.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    pub title: String,
    pub description: String,
    /// Navigation target, emitted as `data-link`
    pub link: String,
    /// Video source URL or path
    pub video: String,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub aria_label: Option<String>,
}

impl ProjectItem {
    /// Falls back to the title when no explicit label is given.
    pub fn aria_label(&self) -> &str {
        self.aria_label.as_deref().unwrap_or(&self.title)
    }

    /// Poster image, if one is set. An empty string counts as unset.
    pub fn poster(&self) -> Option<&str> {
        self.poster.as_deref().filter(|p| !p.is_empty())
    }
}

/// A non-interactive placeholder for work that hasn't shipped yet.
///
/// Every field is optional and defaults independently.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub aria_label: Option<String>,
}

impl UpcomingItem {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_UPCOMING_TITLE)
    }

    pub fn description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or(DEFAULT_UPCOMING_DESCRIPTION)
    }

    pub fn aria_label(&self) -> &str {
        self.aria_label
            .as_deref()
            .unwrap_or(DEFAULT_UPCOMING_ARIA_LABEL)
    }
}
