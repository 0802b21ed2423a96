//! Git configuration
//!
//! Branch, commit and remote metadata exposed as lazily resolved fields:
//!
//! - `git`: the root `GitConfig`, owning the repository handle
//! - `branches`: current/manual/published branches, with validation of `published`
//! - `remote`: upstream and tools identifiers
//! - `run_state`: user-supplied overrides the resolvers consult
//! - `lazy`: the `Lazy<T>` field every cached value is stored in
//!
//! Every field is resolved once and then served from cache, except
//! `GitConfig::commit`, which asks the repository each time.
//!
//! ```no_run
//! use gitconf::config::{GitConfig, RunState};
//!
//! let run_state = RunState::from_path("published_branches.yaml")?;
//! let mut config: GitConfig = GitConfig::new(".", run_state);
//!
//! let commit = config.commit()?;
//! println!("building {} at {commit}", config.branches().current()?);
//! for branch in config.branches().published()? {
//!     println!("publishing {branch}");
//! }
//! # Ok::<(), gitconf::config::ConfigError>(())
//! ```

pub mod branches;
pub mod error;
pub mod git;
pub mod lazy;
pub mod remote;
pub mod run_state;

pub use branches::{validate_published, BranchConfig, Branches, PUBLISHED_ANCHOR};
pub use error::{ConfigError, Result, ValidationError};
pub use git::{GitConfig, GitSnapshot};
pub use lazy::Lazy;
pub use remote::RemoteConfig;
pub use run_state::RunState;
