//! Source capability: the streams a connector exposes, and catalog discovery.

use tracing::info;

use sluice_types::errors::SchemaError;
use sluice_types::protocol::Catalog;

use crate::projector::project;
use crate::stream::Stream;

/// A source connector's pure capability surface.
///
/// Connection checking, configuration loading, and record reads live with
/// the surrounding connector and are not modeled here.
pub trait Source {
    /// The streams this source exposes.
    fn streams(&self) -> Vec<Box<dyn Stream>>;

    /// Project every stream into a [`Catalog`], preserving stream order.
    ///
    /// Fails with the first stream's [`SchemaError`] rather than emitting
    /// a partial catalog.
    fn discover(&self) -> Result<Catalog, SchemaError> {
        let mut entries = Vec::new();
        for stream in self.streams() {
            entries.push(project(stream.as_ref())?);
        }
        info!(streams = entries.len(), "discovered catalog");
        Ok(Catalog { streams: entries })
    }
}
