use serde::{Deserialize, Serialize};

/// How records are read from a stream during a sync run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SyncMode {
    /// Re-read all records each run.
    FullRefresh,
    /// Read only records newer than the stored cursor position.
    Incremental,
}

/// Descriptor for a single stream: identity, record schema, and the sync
/// modes an orchestrator may request.
///
/// Built fresh on each projection call; owned solely by the caller.
/// Invariant: `Incremental` is supported iff `default_cursor_field` is a
/// non-empty path iff `source_defined_cursor` is true.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    /// Stream name as known to the orchestrator.
    pub name: String,
    /// JSON Schema describing the stream's records. Always a JSON object.
    pub json_schema: serde_json::Value,
    /// Sync modes this stream supports. `FullRefresh` is always present.
    pub supported_sync_modes: Vec<SyncMode>,
    /// Cursor path for incremental sync, present iff `Incremental` is supported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_cursor_field: Option<Vec<String>>,
    /// True iff the cursor is fixed by the stream rather than configurable
    /// by the caller.
    #[serde(default)]
    pub source_defined_cursor: bool,
}

impl CatalogEntry {
    /// Whether this stream can be synchronized incrementally.
    pub fn supports_incremental(&self) -> bool {
        self.supported_sync_modes.contains(&SyncMode::Incremental)
    }
}

/// Collection of stream descriptors produced by source discovery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub streams: Vec<CatalogEntry>,
}
