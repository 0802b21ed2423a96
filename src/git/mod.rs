//! Git access module
//!
//! Only the read side of a repository is exposed here:
//!
//! - `repository`: opening repositories, resolving revisions and the current branch
//! - `handle`: the `RepositoryHandle` trait the configuration layer is written against

pub mod handle;
pub mod repository;

pub use handle::RepositoryHandle;
pub use repository::core::GitRepo;
