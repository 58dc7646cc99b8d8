//! Task identifiers

use serde::{Deserialize, Serialize};

/// Identifier of a task slot, in `[0, n_tasks)`
///
/// Tasks are never queued or repeated, so the id doubles as the Q-table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub usize);

impl TaskId {
    pub fn index(self) -> usize {
        self.0
    }

    /// All task ids of a run, in presentation order
    pub fn range(n_tasks: usize) -> impl Iterator<Item = TaskId> {
        (0..n_tasks).map(TaskId)
    }
}

impl From<usize> for TaskId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_range_in_order() {
        let ids: Vec<TaskId> = TaskId::range(4).collect();
        assert_eq!(ids, vec![TaskId(0), TaskId(1), TaskId(2), TaskId(3)]);
    }

    #[test]
    fn test_task_id_range_empty() {
        assert_eq!(TaskId::range(0).count(), 0);
    }

    #[test]
    fn test_task_id_serialization() {
        let json = serde_json::to_string(&TaskId(9)).unwrap();
        assert_eq!(json, "9");
    }
}
