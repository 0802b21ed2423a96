use std::path::PathBuf;

use thiserror::Error;

/// A rule broken by a published-branches value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("published branches must be a list")]
    NotASequence,

    #[error("published branches must not be empty")]
    Empty,

    #[error("published branch at position {index} must be a branch name (string or number)")]
    NotABranchName { index: usize },

    #[error("right now, we must publish master (first published branch is '{found}')")]
    FirstNotMaster { found: String },
}

/// Errors from resolving git configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Repository(#[from] anyhow::Error),

    #[error("failed to load run-state '{path}': {message}")]
    RunState { path: PathBuf, message: String },
}

impl ConfigError {
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            ConfigError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
