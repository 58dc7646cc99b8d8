//! Resource identifiers and availability state

use serde::{Deserialize, Serialize};

/// Identifier of a resource slot, in `[0, n_resources)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub usize);

impl ResourceId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for ResourceId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Availability of a resource
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceState {
    /// Ready to take a task
    #[default]
    Idle,
    /// Holding a task until it is completed
    Busy,
}

impl ResourceState {
    pub fn is_idle(self) -> bool {
        self == ResourceState::Idle
    }
}

impl std::fmt::Display for ResourceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceState::Idle => write!(f, "idle"),
            ResourceState::Busy => write!(f, "busy"),
        }
    }
}
