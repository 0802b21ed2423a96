use crate::git::GitRepo;
use anyhow::{Context, Error};
use git2::{build::CheckoutBuilder, Oid, Signature};

/// Create a new temporary repository for testing, HEAD on an unborn master
pub fn create_test_repo() -> (assert_fs::TempDir, GitRepo) {
    let temp_dir = assert_fs::TempDir::new().unwrap();
    let repo = GitRepo::init(temp_dir.path()).unwrap();
    (temp_dir, repo)
}

/// Test-only trait that adds assertion methods to GitRepo
pub trait RepoAssertions {
    /// Assert that HEAD's symbolic target matches the expected value
    fn assert_head_symbolic_target(&self, expected_target: &str) -> &Self;

    /// Assert that the current branch matches the expected branch name
    fn assert_current_branch(&self, branch_name: &str) -> &Self;
}

/// Test-only trait that moves HEAD around so the config layer has something to observe
pub trait RepoTestOperations {
    /// Write a file, stage it and commit it on the current branch, returning the new sha
    fn commit_file(&self, filename: &str, content: &str, message: &str) -> Result<String, Error>;

    /// Create a branch at HEAD (or an unborn one) and point HEAD at it
    fn create_and_checkout_branch(&self, branch_name: &str) -> Result<&Self, Error>;

    /// Switch HEAD and the working tree to an existing branch
    fn checkout_branch(&self, branch_name: &str) -> Result<&Self, Error>;

    /// Point HEAD directly at a commit
    fn detach_head(&self, sha: &str) -> Result<&Self, Error>;
}

impl RepoAssertions for GitRepo {
    fn assert_head_symbolic_target(&self, expected_target: &str) -> &Self {
        match self.get_head_symbolic_target() {
            Ok(actual_target) => {
                if actual_target != expected_target {
                    panic!(
                        "HEAD symbolic target mismatch. Expected: '{expected_target}', Found: '{actual_target}'"
                    );
                }
            }
            Err(e) => {
                panic!("Failed to get HEAD symbolic target: {e}");
            }
        }
        self
    }

    fn assert_current_branch(&self, branch_name: &str) -> &Self {
        let expected_target = format!("refs/heads/{branch_name}");
        self.assert_head_symbolic_target(&expected_target);
        self
    }
}

impl RepoTestOperations for GitRepo {
    fn commit_file(&self, filename: &str, content: &str, message: &str) -> Result<String, Error> {
        std::fs::write(self.path().join(filename), content)
            .context(format!("Failed to write '{filename}'"))?;

        let repo = self.repo();
        let mut index = repo.index().context("Failed to get repository index")?;
        index
            .add_path(std::path::Path::new(filename))
            .context("Failed to stage file")?;
        index.write().context("Failed to write index")?;

        let tree_id = index.write_tree().context("Failed to write tree")?;
        let tree = repo.find_tree(tree_id).context("Failed to find tree")?;
        let signature = Signature::now("Test User", "test@example.com")?;

        let parent = match repo.head() {
            Ok(head) => Some(head.peel_to_commit().context("Failed to peel HEAD")?),
            Err(_) => None,
        };
        let parents: Vec<_> = parent.iter().collect();

        let oid = repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
            .context("Failed to create commit")?;

        Ok(oid.to_string())
    }

    fn create_and_checkout_branch(&self, branch_name: &str) -> Result<&Self, Error> {
        let repo = self.repo();
        if let Ok(head) = repo.head() {
            let commit = head.peel_to_commit().context("Failed to find HEAD commit")?;
            repo.branch(branch_name, &commit, false)
                .context("Failed to create branch")?;
        }

        repo.set_head(&format!("refs/heads/{branch_name}"))
            .context("Failed to set HEAD to new branch")?;

        Ok(self)
    }

    fn checkout_branch(&self, branch_name: &str) -> Result<&Self, Error> {
        let branch_ref = format!("refs/heads/{branch_name}");
        let obj = self.repo().revparse_single(&branch_ref)?;

        self.repo()
            .checkout_tree(&obj, Some(CheckoutBuilder::new().force()))?;
        self.repo().set_head(&branch_ref)?;

        Ok(self)
    }

    fn detach_head(&self, sha: &str) -> Result<&Self, Error> {
        let oid = Oid::from_str(sha)?;
        self.repo().set_head_detached(oid)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_file_advances_head() {
        let (_dir, repo) = create_test_repo();
        let first = repo.commit_file("a.txt", "a", "first").unwrap();
        let second = repo.commit_file("a.txt", "b", "second").unwrap();

        assert_ne!(first, second);
        assert_eq!(repo.sha("HEAD").unwrap(), second);
    }

    #[test]
    fn checkout_branch_switches_head() {
        let (_dir, repo) = create_test_repo();
        repo.commit_file("a.txt", "a", "first").unwrap();
        repo.create_and_checkout_branch("v1").unwrap();
        repo.assert_current_branch("v1");

        repo.checkout_branch("master").unwrap();
        repo.assert_current_branch("master");
    }
}
