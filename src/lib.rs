//! # mesh-shear
//!
//! mesh-shear sorts N fixed-width records, distributed one per worker across
//! a virtual √N × √N mesh, into snake (boustrophedon) order using only
//! nearest-neighbor message exchanges — no worker ever sees a global view of
//! the data.
//!
//! ## How it works
//! - [`topology::Mesh`] maps flat worker ranks onto a non-periodic 2D grid
//!   and answers neighbor queries along either axis.
//! - [`algs::LineSorter`] fully sorts one row or column with exactly `size`
//!   passes of the odd-even transposition exchange protocol.
//! - [`algs::shear_sort`] interleaves row and column phases for
//!   `2·⌊log₂ √N⌋ + 1` rounds — even phases sort rows boustrophedonically,
//!   odd phases sort columns ascending — after which the grid reads as one
//!   ascending sequence along the snake path.
//!
//! Workers run in lock-step phases and mutate nothing but their own record;
//! the only cross-line coordination is a barrier between phases. Messaging
//! goes through the [`algs::communicator::Communicator`] façade; the shipped
//! transport is in-process threads, but any point-to-point realization of
//! the exchange protocol fits the trait.
//!
//! ## Failure model
//! There are no partial results. Configuration problems (non-square record
//! counts, worker/record mismatch, oversized words) fail before any sorting
//! work starts, and a single failed exchange aborts the entire run.
//!
//! ## Example
//! ```
//! use mesh_shear::prelude::*;
//!
//! let records: Vec<Record> = ["delta", "alpha", "charlie", "bravo"]
//!     .iter()
//!     .map(|w| Record::try_from_word(w))
//!     .collect::<Result<_, _>>()?;
//! let sorted = shear_sort(&records)?;
//! // row-major: row 0 ascending, row 1 descending
//! assert_eq!(sorted[0].text(), "alpha");
//! assert_eq!(sorted[1].text(), "bravo");
//! assert_eq!(sorted[2].text(), "delta");
//! assert_eq!(sorted[3].text(), "charlie");
//! # Ok::<(), mesh_shear::MeshShearError>(())
//! ```

pub mod algs;
pub mod io;
pub mod mesh_error;
pub mod record;
pub mod topology;

pub use mesh_error::MeshShearError;
pub use record::{Record, MAX_WORD_LEN};

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::communicator::{CommTag, Communicator, NoComm, ThreadComm, Wait};
    pub use crate::algs::line_sort::{Direction, LineSorter};
    pub use crate::algs::shear::{run_node, shear_sort, validate_worker_count, PhasePlan};
    pub use crate::io::words::{format_matrix, parse_words, read_words, snake_reading};
    pub use crate::mesh_error::MeshShearError;
    pub use crate::record::{Record, MAX_WORD_LEN};
    pub use crate::topology::{Axis, Mesh, NodeId, Shift};
}
