//! Catalog types shared between connectors and the sync orchestrator.

mod catalog;
mod cursor;

pub use catalog::*;
pub use cursor::*;
