//! Stream capability traits and catalog projection for sluice connectors.

pub mod prelude;
pub mod projector;
pub mod source;
pub mod stream;
