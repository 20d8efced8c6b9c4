//! Unified error type for binding extraction.

use thiserror::Error;

use crate::tree::NodeId;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BindingError>;

/// All errors that can occur while extracting bindings.
#[derive(Error, Debug)]
pub enum BindingError {
    /// A method-invocation binding must have exactly one member
    #[error("Invalid argument: binding group has {actual} members, expected exactly 1")]
    GroupSize { actual: usize },

    /// The bound node's parent is not a method invocation
    #[error("Invalid argument: parent of node {node} is '{ast_type}', expected a method invocation")]
    NotAnInvocation { node: NodeId, ast_type: String },

    /// I/O error (file read/write, directory access)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error (corpus output)
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The tree-sitter grammar could not be loaded into the parser
    #[error("Failed to load grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    /// tree-sitter produced no tree for the input
    #[error("Failed to parse {path}")]
    Parse { path: String },

    /// Directory does not exist
    #[error("Directory does not exist: {0}")]
    DirNotFound(String),

    /// Argument validation error
    #[error("{0}")]
    InvalidArgs(String),
}

impl BindingError {
    /// True for errors caused by a caller handing the extractor a group it
    /// did not produce. These indicate an integration bug, not bad input.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::GroupSize { .. } | Self::NotAnInvocation { .. })
    }
}
