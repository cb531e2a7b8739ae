//! Core traits module
//!
//! Seams between the job orchestrator and its I/O collaborators

pub mod sink;
pub mod source;

pub use sink::*;
pub use source::*;
