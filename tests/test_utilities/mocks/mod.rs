/// Mock implementations for testing
mod mock_dependency_output_reader;
mod mock_progress_reporter;
mod mock_report_reader;

#[allow(unused_imports)]
pub use mock_dependency_output_reader::MockDependencyOutputReader;
pub use mock_progress_reporter::MockProgressReporter;
#[allow(unused_imports)]
pub use mock_report_reader::MockReportReader;
