use crate::dependency_analysis::domain::DependencyTree;
use crate::ports::outbound::InputSource;

/// TreeRequest - parse one configuration of a dump and show it
#[derive(Debug, Clone)]
pub struct TreeRequest {
    pub input: InputSource,
    pub configuration: String,
}

#[derive(Debug, Clone)]
pub struct TreeResponse {
    pub tree: DependencyTree,
}
