//! Naming-standard validation and bulk identifier rewrite for job scheduling
//! definition documents.
//!
//! The crate is layered: `domain` holds the format contracts, validators and
//! rewrite rules; `application` walks loaded documents in validation or
//! rewrite mode; `infrastructure` loads and serializes the documents; `cli`
//! wires it all to the command line.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
