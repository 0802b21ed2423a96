use std::path::{Path, PathBuf};

use anyhow::{Context, Error};
use git2::Repository;

/// A git working copy (or bare repository) backed by libgit2
pub struct GitRepo {
    path: PathBuf,
    repo: Repository,
}

impl GitRepo {
    /// Open the git repository containing `path`, searching parent directories
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let repo = Repository::discover(path).context(format!(
            "Cannot find a git repository at or above '{}'",
            path.display()
        ))?;

        // Workdir for normal checkouts, the git dir itself for bare repos
        let root = repo
            .workdir()
            .unwrap_or_else(|| repo.path())
            .to_path_buf();

        log::info!("opened git repository at {}", root.display());

        Ok(Self { path: root, repo })
    }

    pub fn init<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path_ref = path.as_ref();

        if Repository::open(path_ref).is_ok() {
            return Err(anyhow::anyhow!("Directory is already a git repository"));
        }

        let repo = Repository::init(path_ref).context("Failed to initialize git repository")?;

        // Published branches are anchored on master, so new repos start there
        repo.set_head("refs/heads/master")
            .context("Failed to set HEAD to master")?;

        Ok(Self {
            path: path_ref.to_path_buf(),
            repo,
        })
    }

    /// Get the path to the repository
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if this is a bare repository
    pub fn is_bare(&self) -> bool {
        self.repo.is_bare()
    }

    pub(crate) fn repo(&self) -> &Repository {
        &self.repo
    }
}
