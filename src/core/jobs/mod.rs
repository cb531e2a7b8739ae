//! Weather collection jobs
//!
//! A job takes a list of city identifiers, fetches them from the upstream in
//! size-limited batches running concurrently, persists every returned record
//! and keeps live progress counters while it runs.
//!
//! Only one job runs at a time. The orchestrator keeps a handle to the most
//! recently started job so progress can be read during and after the run.

mod orchestrator;
mod types;


pub use orchestrator::JobOrchestrator;
pub use types::{BatchReport, JobHandle, JobId, JobResult, JobState};
