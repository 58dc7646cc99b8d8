//! Resource availability and reward types

use qalloc_core::{ResourceId, ResourceState};

/// Reward value for an assignment
pub type Reward = f64;

/// Idle/busy flag for every resource slot
///
/// Every resource is in exactly one state; all start idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePool {
    states: Vec<ResourceState>,
}

impl ResourcePool {
    pub fn new(n_resources: usize) -> Self {
        Self {
            states: vec![ResourceState::Idle; n_resources],
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// # Panics
    ///
    /// Panics if `resource` is outside the pool.
    pub fn state(&self, resource: ResourceId) -> ResourceState {
        self.states[resource.index()]
    }

    pub fn states(&self) -> &[ResourceState] {
        &self.states
    }

    /// Idle resources in ascending id order
    pub fn idle(&self) -> Vec<ResourceId> {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, state)| state.is_idle())
            .map(|(index, _)| ResourceId(index))
            .collect()
    }

    pub fn busy_count(&self) -> usize {
        self.states.iter().filter(|state| !state.is_idle()).count()
    }

    /// Mark `resource` busy, returning its previous state
    pub fn mark_busy(&mut self, resource: ResourceId) -> ResourceState {
        std::mem::replace(&mut self.states[resource.index()], ResourceState::Busy)
    }

    /// Mark `resource` idle, returning its previous state
    pub fn mark_idle(&mut self, resource: ResourceId) -> ResourceState {
        std::mem::replace(&mut self.states[resource.index()], ResourceState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_starts_idle() {
        let pool = ResourcePool::new(3);
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.idle(), vec![ResourceId(0), ResourceId(1), ResourceId(2)]);
        assert_eq!(pool.busy_count(), 0);
    }

    #[test]
    fn test_empty_pool() {
        let pool = ResourcePool::new(0);
        assert!(pool.is_empty());
        assert!(pool.idle().is_empty());
    }

    #[test]
    fn test_mark_busy_and_idle() {
        let mut pool = ResourcePool::new(3);

        assert_eq!(pool.mark_busy(ResourceId(1)), ResourceState::Idle);
        assert_eq!(pool.state(ResourceId(1)), ResourceState::Busy);
        assert_eq!(pool.idle(), vec![ResourceId(0), ResourceId(2)]);
        assert_eq!(pool.busy_count(), 1);

        assert_eq!(pool.mark_idle(ResourceId(1)), ResourceState::Busy);
        assert_eq!(pool.state(ResourceId(1)), ResourceState::Idle);
    }

    #[test]
    fn test_mark_idle_on_idle_resource() {
        let mut pool = ResourcePool::new(2);
        let before = pool.clone();

        assert_eq!(pool.mark_idle(ResourceId(0)), ResourceState::Idle);
        assert_eq!(pool, before);
    }
}
