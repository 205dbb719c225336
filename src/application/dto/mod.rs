/// Data Transfer Objects for application layer
///
/// DTOs carry what the CLI collected into a use case, and what the use case
/// produced back out to the formatters.
mod collect;
mod compare;
mod output_format;
mod tree;

pub use collect::{CollectRequest, CollectResponse, ReportLabels};
pub use compare::{CompareRequest, CompareResponse};
pub use output_format::OutputFormat;
pub use tree::{TreeRequest, TreeResponse};
