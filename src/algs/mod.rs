//! Sorting algorithms and the messaging they run over.

pub mod communicator;
pub mod line_sort;
pub mod shear;

pub use line_sort::{Direction, LineSorter};
pub use shear::{run_node, shear_sort, validate_worker_count, PhasePlan};
