//! Dependency analysis core
//!
//! Pure logic with no I/O: reconstructing Gradle dependency trees from their
//! textual form, flattening them into reports, and diffing two reports.
pub mod domain;
pub mod parser;
pub mod services;
