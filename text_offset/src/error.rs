use std::fmt;

/// Deterministic locator errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OffsetError {
    /// No element carries the requested container identifier.
    ContainerNotFound(String),
    /// Children can only be appended to structural nodes.
    NotAContainer,
    /// A node handle that does not belong to this document.
    UnknownNode,
}

impl OffsetError {
    pub fn message(&self) -> &'static str {
        match self {
            OffsetError::ContainerNotFound(_) => "Container not found",
            OffsetError::NotAContainer => "Node cannot have children",
            OffsetError::UnknownNode => "Unknown node",
        }
    }
}

impl fmt::Display for OffsetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OffsetError::ContainerNotFound(id) => write!(f, "{}: {}", self.message(), id),
            OffsetError::NotAContainer | OffsetError::UnknownNode => f.write_str(self.message()),
        }
    }
}

impl std::error::Error for OffsetError {}
