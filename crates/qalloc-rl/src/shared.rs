//! Shared allocator for concurrent callers
//!
//! The allocator's assign path reads the idle set, claims a resource and updates
//! the Q-table. Those steps must not interleave between callers, so every
//! operation here runs under one lock.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::Rng;
use tokio::sync::Mutex;
use tracing::debug;

use qalloc_core::{ResourceId, ResourceState, TaskId};

use crate::algorithm::QTableSnapshot;
use crate::allocator::{Allocator, AllocatorStats};

/// Cloneable handle to a single allocator
pub struct SharedAllocator<R = StdRng> {
    inner: Arc<Mutex<Allocator<R>>>,
}

impl<R> Clone for SharedAllocator<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Rng + Send> SharedAllocator<R> {
    pub fn new(allocator: Allocator<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(allocator)),
        }
    }

    /// Assign `task` atomically with respect to other callers
    pub async fn assign_task(&self, task: TaskId) -> Option<ResourceId> {
        let mut allocator = self.inner.lock().await;
        let resource = allocator.assign_task(task);
        debug!("Shared assign of task {} -> {:?}", task, resource);
        resource
    }

    pub async fn complete_task(&self, resource: ResourceId) {
        self.inner.lock().await.complete_task(resource);
    }

    pub async fn resources(&self) -> Vec<ResourceState> {
        self.inner.lock().await.resources().to_vec()
    }

    pub async fn stats(&self) -> AllocatorStats {
        self.inner.lock().await.stats()
    }

    pub async fn q_table_snapshot(&self) -> QTableSnapshot {
        self.inner.lock().await.q_table().snapshot()
    }
}
