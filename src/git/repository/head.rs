use anyhow::{Context, Error};

use super::core::GitRepo;

impl GitRepo {
    /// Resolve a revspec (e.g. `HEAD`, `master~1`) to a full commit sha
    pub fn sha(&self, rev: &str) -> Result<String, Error> {
        let object = self
            .repo()
            .revparse_single(rev)
            .context(format!("Failed to resolve revision '{rev}'"))?;

        let commit = object
            .peel_to_commit()
            .context(format!("Revision '{rev}' does not point to a commit"))?;

        Ok(commit.id().to_string())
    }

    pub fn get_head_symbolic_target(&self) -> Result<String, Error> {
        let head_ref = self
            .repo()
            .find_reference("HEAD")
            .context("Failed to find HEAD reference")?;

        match head_ref.symbolic_target() {
            Some(target) => Ok(target.to_string()),
            None => Err(anyhow::anyhow!("HEAD is detached")),
        }
    }

    /// Get the current branch name
    ///
    /// Works on unborn branches too, since only the symbolic HEAD is read.
    pub fn get_current_branch(&self) -> Result<String, Error> {
        let head_target = self
            .get_head_symbolic_target()
            .context("Failed to get current branch from HEAD")?;

        let branch_name = head_target
            .strip_prefix("refs/heads/")
            .ok_or_else(|| anyhow::anyhow!("HEAD is not pointing to a branch"))?;

        Ok(branch_name.to_string())
    }
}
