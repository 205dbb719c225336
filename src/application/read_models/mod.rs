//! Read models for query operations
//!
//! Denormalized views handed to the formatters.

mod comparison_view;

pub use comparison_view::{ComparisonView, SnapshotView};
