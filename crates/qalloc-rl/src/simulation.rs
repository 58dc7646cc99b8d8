//! Simulation driver presenting tasks to an allocator in order

use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};

use qalloc_core::{ResourceId, TaskId};

use crate::allocator::Allocator;

/// When an assigned resource is handed back
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Release {
    /// Complete each task right after it is assigned
    #[default]
    Immediate,
    /// Keep every assigned resource busy for the rest of the run
    Never,
}

/// Result of presenting one task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskOutcome {
    pub task: TaskId,
    pub resource: Option<ResourceId>,
}

impl TaskOutcome {
    pub fn is_assigned(&self) -> bool {
        self.resource.is_some()
    }
}

impl std::fmt::Display for TaskOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.resource {
            Some(resource) => write!(f, "Task {} assigned to Resource {}", self.task, resource),
            None => write!(
                f,
                "Task {} could not be assigned, no available resources.",
                self.task
            ),
        }
    }
}

/// Present tasks `0..n_tasks` to `allocator` in order
pub fn run<R: Rng>(
    allocator: &mut Allocator<R>,
    n_tasks: usize,
    release: Release,
) -> Vec<TaskOutcome> {
    info!(
        "Starting simulation: {} resources, {} tasks",
        allocator.n_resources(),
        n_tasks
    );

    let outcomes: Vec<TaskOutcome> = TaskId::range(n_tasks)
        .map(|task| {
            let resource = allocator.assign_task(task);
            match resource {
                Some(resource) if release == Release::Immediate => {
                    allocator.complete_task(resource);
                }
                Some(_) => {}
                None => warn!("Task {} could not be assigned", task),
            }
            TaskOutcome { task, resource }
        })
        .collect();

    let stats = allocator.stats();
    info!(
        "Simulation finished: {} assigned, {} unavailable",
        stats.assignments, stats.unavailable
    );

    outcomes
}
