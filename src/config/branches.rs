use std::path::Path;

use serde_json::Value;

use super::error::{Result, ValidationError};
use super::lazy::Lazy;
use super::run_state::RunState;
use crate::git::RepositoryHandle;

/// The only branch allowed to lead the published list.
pub const PUBLISHED_ANCHOR: &str = "master";

/// Cached branch state. Read it through [`Branches`].
#[derive(Debug, Clone, Default)]
pub struct BranchConfig {
    current: Lazy<String>,
    manual: Lazy<Option<Value>>,
    published: Lazy<Vec<String>>,
}

impl BranchConfig {
    /// Forget everything resolved so far.
    pub fn reset(&mut self) {
        self.current.reset();
        self.manual.reset();
        self.published.reset();
    }
}

/// Branch accessors, borrowing the repository slot and run-state of the
/// owning [`GitConfig`](super::GitConfig) for the duration of the access.
///
/// Only [`current`](Self::current) needs the repository; it is opened there,
/// at most once, into the slot the root config owns.
pub struct Branches<'a, R> {
    pub(super) state: &'a mut BranchConfig,
    pub(super) repo: &'a mut Lazy<R>,
    pub(super) path: &'a Path,
    pub(super) run_state: &'a RunState,
}

impl<R: RepositoryHandle> Branches<'_, R> {
    /// The branch checked out when this was first read; later checkouts are not seen.
    pub fn current(&mut self) -> Result<&str> {
        let repo = &mut *self.repo;
        let path = self.path;
        let current = self
            .state
            .current
            .get_or_try_resolve(|| -> anyhow::Result<String> {
                log::debug!("resolving current branch");
                repo.get_or_try_resolve(|| R::open(path))?.current_branch()
            })?;

        Ok(current.as_str())
    }

    pub fn manual(&mut self) -> Option<&Value> {
        let run_state = self.run_state;
        self.state
            .manual
            .get_or_resolve(|| {
                log::debug!("resolving manual branch override");
                run_state.lookup(&["git", "branches", "manual"]).cloned()
            })
            .as_ref()
    }

    /// Branches documentation may be published from.
    ///
    /// Taken from `git.branches.published` when present, and validated.
    /// A `git.branches` section without that key publishes nothing; no
    /// `git.branches` section at all publishes master alone.
    pub fn published(&mut self) -> Result<&[String]> {
        let run_state = self.run_state;
        let published = self.state.published.get_or_try_resolve(|| {
            log::debug!("resolving published branches");
            match run_state.lookup(&["git", "branches"]) {
                Some(branches) => match branches.get("published") {
                    Some(value) => validate_published(value),
                    None => Ok(Vec::new()),
                },
                None => Ok(vec![PUBLISHED_ANCHOR.to_string()]),
            }
        })?;

        Ok(published.as_slice())
    }

    /// Override the published branches. On failure the cached list is left as it was.
    pub fn set_published<V: Into<Value>>(&mut self, value: V) -> Result<&[String]> {
        let published = validate_published(&value.into())?;
        Ok(self.state.published.set(published).as_slice())
    }
}

/// Check a published-branches value, logging the broken rule before failing.
pub fn validate_published(value: &Value) -> std::result::Result<Vec<String>, ValidationError> {
    check_published(value).map_err(|e| {
        log::error!("{e}");
        e
    })
}

fn check_published(value: &Value) -> std::result::Result<Vec<String>, ValidationError> {
    let items = value.as_array().ok_or(ValidationError::NotASequence)?;

    let branches = items
        .iter()
        .enumerate()
        .map(|(index, item)| branch_name(index, item))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    match branches.first() {
        None => Err(ValidationError::Empty),
        Some(first) if first != PUBLISHED_ANCHOR => Err(ValidationError::FirstNotMaster {
            found: first.clone(),
        }),
        Some(_) => Ok(branches),
    }
}

/// Unquoted YAML versions (`2.4`) arrive as numbers; take their printed form.
fn branch_name(index: usize, item: &Value) -> std::result::Result<String, ValidationError> {
    match item {
        Value::String(name) => Ok(name.clone()),
        Value::Number(number) => {
            log::warn!(
                "published branch at position {index} read as the number {number}; quote it to keep its exact spelling"
            );
            Ok(number.to_string())
        }
        _ => Err(ValidationError::NotABranchName { index }),
    }
}
