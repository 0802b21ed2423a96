use std::path::Path;

use anyhow::Error;

use super::GitRepo;

/// The queries the configuration layer needs from a working copy.
///
/// `GitRepo` is the production implementation. Anything that can answer
/// these two questions can back a [`GitConfig`](crate::config::GitConfig).
pub trait RepositoryHandle {
    /// Open the repository containing `path`.
    fn open(path: &Path) -> Result<Self, Error>
    where
        Self: Sized;

    /// Full commit sha for `rev`.
    fn sha(&self, rev: &str) -> Result<String, Error>;

    /// Short name of the branch HEAD points to.
    fn current_branch(&self) -> Result<String, Error>;
}

impl RepositoryHandle for GitRepo {
    fn open(path: &Path) -> Result<Self, Error> {
        GitRepo::open(path)
    }

    fn sha(&self, rev: &str) -> Result<String, Error> {
        GitRepo::sha(self, rev)
    }

    fn current_branch(&self) -> Result<String, Error> {
        self.get_current_branch()
    }
}
