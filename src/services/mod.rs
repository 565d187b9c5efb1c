pub mod allocation;
pub mod candidates;
pub mod scoring;
pub mod selector;

pub use allocation::{parse_request, run_allocation, Allocator, RunPhase};
