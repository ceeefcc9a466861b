//! Domain layer: naming contracts and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config
//! loading).

pub mod diagnostics;
pub mod entities;
pub mod error;
pub mod patterns;
pub mod rewrite;
pub mod validate;

pub use diagnostics::{Diagnostic, DiagnosticSink, EntityKind, Verdict};
pub use entities::{attr, tag, Folder, Job, RenamePlan};
pub use error::{DomainError, DomainResult};
pub use patterns::NamingRules;
