//! Parsing of Gradle's `dependencies` task output
//!
//! Data flow: [`extract_section`] isolates one configuration, [`parse_line`]
//! classifies each line, [`parse_tree`] folds the lines into a tree.
//! [`render_tree`] goes the other way.
mod block_extractor;
mod line_classifier;
mod tree_builder;
mod tree_renderer;

pub use block_extractor::{extract_section, parse_tree_from_section};
pub use line_classifier::{is_tree_marker, parse_line, LineEntry, ParsedLine};
pub use tree_builder::parse_tree;
pub use tree_renderer::render_tree;
