//! Integration tests for identifier and resource state types
//! Complements the inline unit tests in src/task.rs and src/resource.rs

use qalloc_core::{ResourceId, ResourceState, TaskId};
use std::collections::HashSet;

#[test]
fn test_task_ids_are_distinct_columns() {
    let ids: HashSet<TaskId> = TaskId::range(1000).collect();
    assert_eq!(ids.len(), 1000);
    assert!(ids.iter().all(|id| id.index() < 1000));
}

#[test]
fn test_task_id_ordering_follows_index() {
    let mut ids = vec![TaskId(5), TaskId(0), TaskId(3)];
    ids.sort();
    assert_eq!(ids, vec![TaskId(0), TaskId(3), TaskId(5)]);
}

#[test]
fn test_resource_id_ordering_follows_index() {
    assert!(ResourceId(0) < ResourceId(1));
    assert_eq!(ResourceId(2).max(ResourceId(4)), ResourceId(4));
}

#[test]
fn test_resource_state_json_roundtrip() {
    let states = vec![ResourceState::Idle, ResourceState::Busy, ResourceState::Idle];

    let json = serde_json::to_string(&states).unwrap();
    assert_eq!(json, r#"["idle","busy","idle"]"#);

    let parsed: Vec<ResourceState> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, states);
}

#[test]
fn test_resource_state_rejects_unknown_variant() {
    let parsed = serde_json::from_str::<ResourceState>("\"draining\"");
    assert!(parsed.is_err());
}

#[test]
fn test_display_matches_index() {
    assert_eq!(TaskId(12).to_string(), "12");
    assert_eq!(ResourceId(0).to_string(), "0");
    assert_eq!(ResourceState::Busy.to_string(), "busy");
}
