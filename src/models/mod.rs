pub mod grid;
pub mod seat;
pub mod report;

pub use grid::{CenterReference, SeatGrid};
pub use seat::{SeatLocation, SeatRange};
pub use report::{AllocationOutcome, AllocationReport};
