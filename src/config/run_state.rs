use std::path::Path;

use serde_json::{Map, Value};

use super::error::{ConfigError, Result};

/// User-supplied overrides, kept as the nested mapping they were written as.
///
/// Only a few paths are consulted: `git.branches.manual`,
/// `git.branches.published` and `git.remote`.
#[derive(Debug, Clone, PartialEq)]
pub struct RunState {
    branch_conf: Value,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            branch_conf: Value::Object(Map::new()),
        }
    }
}

impl RunState {
    pub fn new(branch_conf: Value) -> Self {
        Self { branch_conf }
    }

    /// Load a run-state file; `.yaml`/`.yml` is read as YAML, anything else as JSON
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let load_error = |message: String| ConfigError::RunState {
            path: path.to_path_buf(),
            message,
        };

        let text = std::fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;

        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml" | "yml")
        );

        let value = if text.trim().is_empty() {
            Value::Null
        } else if is_yaml {
            serde_yaml::from_str(&text).map_err(|e| load_error(e.to_string()))?
        } else {
            serde_json::from_str(&text).map_err(|e| load_error(e.to_string()))?
        };

        log::debug!("loaded run-state from {}", path.display());

        Ok(match value {
            // An empty document carries no overrides
            Value::Null => Self::default(),
            value => Self::new(value),
        })
    }

    pub fn branch_conf(&self) -> &Value {
        &self.branch_conf
    }

    /// Walk nested mappings; `None` when a key is missing or a step is not a mapping.
    pub fn lookup(&self, path: &[&str]) -> Option<&Value> {
        path.iter()
            .try_fold(&self.branch_conf, |node, key| node.as_object()?.get(*key))
    }
}
