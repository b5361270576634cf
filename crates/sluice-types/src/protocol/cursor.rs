use serde::{Deserialize, Serialize};

/// Cursor-field declaration as a stream exposes it: a single field name or
/// an ordered path of field names.
///
/// Serialized untagged, so the wire shape is either a JSON string or an
/// array of strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum CursorField {
    Single(String),
    Path(Vec<String>),
}

impl CursorField {
    /// Normalize to an ordered field path.
    ///
    /// An empty string or empty sequence yields an empty path, which the
    /// projector treats as "no cursor declared".
    pub fn into_path(self) -> Vec<String> {
        match self {
            Self::Single(field) if field.is_empty() => Vec::new(),
            Self::Single(field) => vec![field],
            Self::Path(path) => path,
        }
    }

    /// Whether this declaration normalizes to the empty path.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(field) => field.is_empty(),
            Self::Path(path) => path.is_empty(),
        }
    }
}

impl From<&str> for CursorField {
    fn from(field: &str) -> Self {
        Self::Single(field.to_string())
    }
}

impl From<String> for CursorField {
    fn from(field: String) -> Self {
        Self::Single(field)
    }
}

impl From<Vec<String>> for CursorField {
    fn from(path: Vec<String>) -> Self {
        Self::Path(path)
    }
}
