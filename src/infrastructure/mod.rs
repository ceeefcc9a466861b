//! Infrastructure layer: document I/O
//!
//! This layer keeps markup and filesystem concerns out of the naming logic.

pub mod document;
pub mod error;

pub use document::{load_document, parse_document, serialize_document, write_document, Document, Node};
pub use error::{InfraError, InfraResult};
