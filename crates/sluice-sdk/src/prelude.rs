//! Convenience re-exports for connector authors.
//!
//! ```ignore
//! use sluice_sdk::prelude::*;
//! ```

// Capability traits
pub use crate::source::Source;
pub use crate::stream::{derive_stream_name, Stream};

// Projection
pub use crate::projector::project;

// Errors
pub use sluice_types::errors::SchemaError;

// Protocol types — catalog
pub use sluice_types::protocol::{Catalog, CatalogEntry, CursorField, SyncMode};
