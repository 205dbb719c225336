/// Use cases module containing application business logic orchestration
mod collect_report;
mod compare_reports;
mod inspect_tree;

pub use collect_report::CollectReportUseCase;
pub use compare_reports::CompareReportsUseCase;
pub use inspect_tree::InspectTreeUseCase;
