//! qalloc RL - Q-learning task allocation
//!
//! This crate provides the allocator that assigns tasks to idle resources,
//! learning per (resource, task) desirability with a tabular Q-value update.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithm;
pub mod allocator;
pub mod shared;
pub mod simulation;
pub mod state;

pub use algorithm::{Hyperparameters, QTable, QTableSnapshot};
pub use allocator::{Allocator, AllocatorStats, ASSIGNMENT_REWARD};
pub use shared::SharedAllocator;
pub use simulation::{Release, TaskOutcome};
pub use state::{ResourcePool, Reward};
