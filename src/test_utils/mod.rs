#[cfg(test)]
pub mod log_capture;

#[cfg(test)]
pub mod repo_extensions;

#[cfg(test)]
pub use log_capture::{capture_logs, captured_errors};

#[cfg(test)]
pub use repo_extensions::{create_test_repo, RepoAssertions, RepoTestOperations};
