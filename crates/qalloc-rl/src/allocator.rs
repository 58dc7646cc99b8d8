//! Allocator - epsilon-greedy assignment of tasks to idle resources

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::debug;

use qalloc_core::{ResourceId, ResourceState, TaskId};

use crate::algorithm::{Hyperparameters, QTable};
use crate::state::{ResourcePool, Reward};

/// Reward granted for every successful assignment
pub const ASSIGNMENT_REWARD: Reward = 1.0;

/// Learns which resource to pick for which task
///
/// Owns the availability of every resource and the Q-table. Ids passed in must
/// come from `[0, n_resources)` and `[0, n_tasks)`; anything else panics.
pub struct Allocator<R = StdRng> {
    pool: ResourcePool,
    q_table: QTable,
    params: Hyperparameters,
    rng: R,
    stats: AllocatorStats,
}

impl Allocator<StdRng> {
    /// Create an allocator drawing exploration randomness from OS entropy
    pub fn new(n_resources: usize, n_tasks: usize, params: Hyperparameters) -> Self {
        Self::with_rng(n_resources, n_tasks, params, StdRng::from_entropy())
    }

    /// Create an allocator with a reproducible exploration sequence
    pub fn seeded(
        n_resources: usize,
        n_tasks: usize,
        params: Hyperparameters,
        seed: u64,
    ) -> Self {
        Self::with_rng(n_resources, n_tasks, params, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Allocator<R> {
    pub fn with_rng(n_resources: usize, n_tasks: usize, params: Hyperparameters, rng: R) -> Self {
        Self {
            pool: ResourcePool::new(n_resources),
            q_table: QTable::new(n_resources, n_tasks),
            params,
            rng,
            stats: AllocatorStats::default(),
        }
    }

    /// Pick an idle resource for `task` without claiming it
    ///
    /// Returns `None` when every resource is busy. With probability ε a uniformly
    /// random idle resource is returned, otherwise the idle resource with the
    /// highest Q-value (lowest id on ties).
    pub fn choose_action(&mut self, task: TaskId) -> Option<ResourceId> {
        let idle = self.pool.idle();
        if idle.is_empty() {
            return None;
        }

        if self.rng.gen::<f64>() < self.params.epsilon() {
            let choice = idle.choose(&mut self.rng).copied();
            debug!("Task {} exploring, picked {:?}", task, choice);
            choice
        } else {
            let choice = self.q_table.best_among(&idle, task);
            debug!("Task {} exploiting, picked {:?}", task, choice);
            choice
        }
    }

    /// Apply the Bellman update to `Q[resource, task]`
    pub fn update_q_table(
        &mut self,
        resource: ResourceId,
        task: TaskId,
        reward: Reward,
        next_best_q: f64,
    ) {
        let new_q = self
            .q_table
            .bellman_update(resource, task, reward, next_best_q, &self.params);
        debug!(
            "Q[{}, {}] updated to {:.4} (reward {}, next best {:.4})",
            resource, task, new_q, reward, next_best_q
        );
    }

    /// Assign `task` to an idle resource and learn from the assignment
    ///
    /// The chosen resource becomes busy until [`Allocator::complete_task`]. The
    /// bootstrap value is the best Q-value across the resource's whole row, read
    /// before the update. Returns `None`, leaving all state untouched, when no
    /// resource is idle.
    pub fn assign_task(&mut self, task: TaskId) -> Option<ResourceId> {
        let Some(resource) = self.choose_action(task) else {
            self.stats.unavailable += 1;
            debug!("Task {} found no idle resource", task);
            return None;
        };

        self.pool.mark_busy(resource);
        let reward = ASSIGNMENT_REWARD;
        let next_best_q = self.q_table.row_max(resource);
        self.update_q_table(resource, task, reward, next_best_q);

        self.stats.assignments += 1;
        self.stats.total_rewards += reward;

        Some(resource)
    }

    /// Return `resource` to the idle set
    ///
    /// Completing a resource that is already idle leaves it idle.
    pub fn complete_task(&mut self, resource: ResourceId) {
        if self.pool.mark_idle(resource) == ResourceState::Busy {
            self.stats.completions += 1;
        } else {
            debug!("Resource {} completed while already idle", resource);
        }
    }

    pub fn n_resources(&self) -> usize {
        self.pool.len()
    }

    pub fn n_tasks(&self) -> usize {
        self.q_table.n_tasks()
    }

    pub fn params(&self) -> &Hyperparameters {
        &self.params
    }

    pub fn resource_state(&self, resource: ResourceId) -> ResourceState {
        self.pool.state(resource)
    }

    pub fn resources(&self) -> &[ResourceState] {
        self.pool.states()
    }

    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// Get statistics
    pub fn stats(&self) -> AllocatorStats {
        let mut stats = self.stats.clone();
        stats.busy = self.pool.busy_count();
        stats.average_reward = if stats.assignments > 0 {
            stats.total_rewards / stats.assignments as f64
        } else {
            0.0
        };
        stats
    }
}

/// Allocator statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AllocatorStats {
    pub assignments: u64,
    pub unavailable: u64,
    pub completions: u64,
    pub busy: usize,
    pub total_rewards: f64,
    pub average_reward: f64,
}
