//! qalloc Core - identifiers, resource state, and errors
//!
//! This crate provides the foundational types shared by the allocator and the CLI.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod resource;
pub mod task;

pub use error::{AllocError, Result};
pub use resource::{ResourceId, ResourceState};
pub use task::TaskId;
