//! Q-value table and learning hyperparameters

use ndarray::Array2;
use serde::Serialize;

use qalloc_core::{AllocError, ResourceId, Result, TaskId};

use crate::state::Reward;

/// Learning rate, discount factor and exploration rate
///
/// Fixed at construction; the allocator never changes them during a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hyperparameters {
    alpha: f64,
    gamma: f64,
    epsilon: f64,
}

impl Hyperparameters {
    pub const DEFAULT_ALPHA: f64 = 0.1;
    pub const DEFAULT_GAMMA: f64 = 0.9;
    pub const DEFAULT_EPSILON: f64 = 0.1;

    /// Create hyperparameters, rejecting values outside `[0, 1]`
    pub fn new(alpha: f64, gamma: f64, epsilon: f64) -> Result<Self> {
        check_unit_interval("alpha", alpha)?;
        check_unit_interval("gamma", gamma)?;
        check_unit_interval("epsilon", epsilon)?;
        Ok(Self {
            alpha,
            gamma,
            epsilon,
        })
    }

    /// Learning rate (α)
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Discount factor (γ)
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Exploration rate (ε)
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            alpha: Self::DEFAULT_ALPHA,
            gamma: Self::DEFAULT_GAMMA,
            epsilon: Self::DEFAULT_EPSILON,
        }
    }
}

fn check_unit_interval(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(AllocError::InvalidParameter(format!(
            "{name} must be within [0, 1], got {value}"
        )))
    }
}

/// Tabular Q-values indexed by (resource, task), zero-initialized
#[derive(Debug, Clone, PartialEq)]
pub struct QTable {
    values: Array2<f64>,
}

impl QTable {
    pub fn new(n_resources: usize, n_tasks: usize) -> Self {
        Self {
            values: Array2::zeros((n_resources, n_tasks)),
        }
    }

    pub fn n_resources(&self) -> usize {
        self.values.nrows()
    }

    pub fn n_tasks(&self) -> usize {
        self.values.ncols()
    }

    /// Q-value of assigning `resource` to `task`
    ///
    /// # Panics
    ///
    /// Panics if either id is outside the table.
    pub fn get(&self, resource: ResourceId, task: TaskId) -> f64 {
        self.values[[resource.index(), task.index()]]
    }

    /// All Q-values of one resource, one per task
    pub fn row(&self, resource: ResourceId) -> Vec<f64> {
        self.values.row(resource.index()).to_vec()
    }

    /// Best Q-value across every task for `resource`
    ///
    /// Returns `f64::NEG_INFINITY` for a table without task columns.
    pub fn row_max(&self, resource: ResourceId) -> f64 {
        self.values
            .row(resource.index())
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Candidate with the highest Q-value for `task`
    ///
    /// Ties go to the first candidate in iteration order, so with candidates in
    /// ascending id order the lowest id wins.
    pub fn best_among(&self, candidates: &[ResourceId], task: TaskId) -> Option<ResourceId> {
        let mut best: Option<(ResourceId, f64)> = None;
        for &resource in candidates {
            let q = self.get(resource, task);
            if best.map_or(true, |(_, best_q)| q > best_q) {
                best = Some((resource, q));
            }
        }
        best.map(|(resource, _)| resource)
    }

    /// One-step Bellman update, returning the new value
    ///
    /// `Q ← Q + α · (reward + γ · next_best_q − Q)`
    pub fn bellman_update(
        &mut self,
        resource: ResourceId,
        task: TaskId,
        reward: Reward,
        next_best_q: f64,
        params: &Hyperparameters,
    ) -> f64 {
        let cell = &mut self.values[[resource.index(), task.index()]];
        let current_q = *cell;
        *cell = current_q + params.alpha() * (reward + params.gamma() * next_best_q - current_q);
        *cell
    }

    pub fn snapshot(&self) -> QTableSnapshot {
        QTableSnapshot {
            n_resources: self.n_resources(),
            n_tasks: self.n_tasks(),
            values: self.values.outer_iter().map(|row| row.to_vec()).collect(),
        }
    }
}

/// Serializable copy of a Q-table, one row per resource
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QTableSnapshot {
    pub n_resources: usize,
    pub n_tasks: usize,
    pub values: Vec<Vec<f64>>,
}
