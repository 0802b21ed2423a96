use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use super::branches::{BranchConfig, Branches};
use super::error::Result;
use super::lazy::Lazy;
use super::remote::RemoteConfig;
use super::run_state::RunState;
use crate::git::{GitRepo, RepositoryHandle};

/// Root of the git configuration tree.
///
/// Owns the repository handle (opened on first need, then kept) and the lazily
/// created branch and remote nodes. Branch accessors borrow the handle slot
/// through [`Branches`] rather than holding their own.
pub struct GitConfig<R = GitRepo> {
    path: PathBuf,
    repo: Lazy<R>,
    run_state: RunState,
    last_commit: Option<String>,
    branches: Lazy<BranchConfig>,
    remote: Lazy<RemoteConfig>,
}

/// Every field resolved at once, for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GitSnapshot {
    pub commit: String,
    pub current: String,
    pub manual: Option<Value>,
    pub published: Vec<String>,
    pub remote: RemoteConfig,
}

impl<R: RepositoryHandle> GitConfig<R> {
    pub fn new<P: AsRef<Path>>(path: P, run_state: RunState) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            repo: Lazy::Unset,
            run_state,
            last_commit: None,
            branches: Lazy::Unset,
            remote: Lazy::Unset,
        }
    }

    /// Use an already opened repository instead of opening `path` on demand.
    pub fn with_repo<P: AsRef<Path>>(path: P, repo: R, run_state: RunState) -> Self {
        let mut config = Self::new(path, run_state);
        config.repo.set(repo);
        config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn run_state(&self) -> &RunState {
        &self.run_state
    }

    pub fn repo(&mut self) -> Result<&R> {
        let path = &self.path;
        let repo = self.repo.get_or_try_resolve(|| R::open(path))?;
        Ok(&*repo)
    }

    /// The HEAD commit sha, read from the repository on every call.
    // TODO: confirm with the docs build owners whether this should be memoized like the rest.
    pub fn commit(&mut self) -> Result<String> {
        let sha = self.repo()?.sha("HEAD")?;
        self.last_commit = Some(sha.clone());
        Ok(sha)
    }

    /// The sha returned by the most recent [`commit`](Self::commit) call, if any.
    pub fn last_commit(&self) -> Option<&str> {
        self.last_commit.as_deref()
    }

    /// Branch accessors. Nothing is read here; the repository is only opened
    /// if [`Branches::current`] needs it.
    pub fn branches(&mut self) -> Branches<'_, R> {
        let state = self.branches.get_or_resolve(|| {
            log::debug!("creating branch config");
            BranchConfig::default()
        });

        Branches {
            state,
            repo: &mut self.repo,
            path: &self.path,
            run_state: &self.run_state,
        }
    }

    pub fn remote(&mut self) -> &RemoteConfig {
        self.remote_mut()
    }

    pub fn remote_mut(&mut self) -> &mut RemoteConfig {
        let run_state = &self.run_state;
        self.remote.get_or_resolve(|| seed_remote(run_state))
    }

    pub fn reset_branches(&mut self) {
        self.branches.reset();
    }

    pub fn reset_remote(&mut self) {
        self.remote.reset();
    }

    pub fn snapshot(&mut self) -> Result<GitSnapshot> {
        let commit = self.commit()?;
        let remote = self.remote().clone();

        let mut branches = self.branches();
        let current = branches.current()?.to_string();
        let manual = branches.manual().cloned();
        let published = branches.published()?.to_vec();

        Ok(GitSnapshot {
            commit,
            current,
            manual,
            published,
            remote,
        })
    }
}

fn seed_remote(run_state: &RunState) -> RemoteConfig {
    log::debug!("creating remote config");

    let Some(value) = run_state.lookup(&["git", "remote"]) else {
        return RemoteConfig::default();
    };

    // Derived struct deserializers also accept sequences, filling fields by position
    if !value.is_object() {
        log::warn!("ignoring git.remote section: expected a mapping, found {value}");
        return RemoteConfig::default();
    }

    serde_json::from_value(value.clone()).unwrap_or_else(|e| {
        log::warn!("ignoring malformed git.remote section: {e}");
        RemoteConfig::default()
    })
}
