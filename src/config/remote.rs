use serde::{Deserialize, Serialize};

/// Remote identifiers, passed through without validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    upstream: Option<String>,
    tools: Option<String>,
}

impl RemoteConfig {
    pub fn upstream(&self) -> Option<&str> {
        self.upstream.as_deref()
    }

    pub fn set_upstream<S: Into<String>>(&mut self, value: S) {
        self.upstream = Some(value.into());
    }

    pub fn tools(&self) -> Option<&str> {
        self.tools.as_deref()
    }

    pub fn set_tools<S: Into<String>>(&mut self, value: S) {
        self.tools = Some(value.into());
    }
}
