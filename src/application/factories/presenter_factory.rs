use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Where command output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File { path: PathBuf, overwrite: bool },
}

impl PresenterType {
    /// `None` means stdout
    pub fn from_output(output: Option<PathBuf>, overwrite: bool) -> Self {
        match output {
            Some(path) => PresenterType::File { path, overwrite },
            None => PresenterType::Stdout,
        }
    }
}

/// Factory for creating output presenters
pub struct PresenterFactory;

impl PresenterFactory {
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File { path, overwrite } => {
                Box::new(FileSystemWriter::new(path, overwrite))
            }
        }
    }
}
