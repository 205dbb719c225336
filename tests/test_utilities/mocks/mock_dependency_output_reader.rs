use gradle_depdiff::prelude::*;
use std::cell::RefCell;

/// Mock DependencyOutputReader serving a fixed dump and recording what was asked for
pub struct MockDependencyOutputReader {
    content: Option<String>,
    requested: RefCell<Vec<InputSource>>,
}

#[allow(dead_code)]
impl MockDependencyOutputReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            requested: RefCell::new(Vec::new()),
        }
    }

    /// A reader whose every read fails
    pub fn failing() -> Self {
        Self {
            content: None,
            requested: RefCell::new(Vec::new()),
        }
    }

    pub fn requested_sources(&self) -> Vec<InputSource> {
        self.requested.borrow().clone()
    }
}

impl DependencyOutputReader for MockDependencyOutputReader {
    fn read_dependency_output(&self, source: &InputSource) -> Result<String> {
        self.requested.borrow_mut().push(source.clone());
        self.content
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Mock read failure for {}", source))
    }
}

impl DependencyOutputReader for &MockDependencyOutputReader {
    fn read_dependency_output(&self, source: &InputSource) -> Result<String> {
        (**self).read_dependency_output(source)
    }
}
