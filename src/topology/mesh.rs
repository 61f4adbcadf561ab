//! The virtual 2D worker mesh: rank/coordinate mapping and neighbor queries.
//!
//! The mesh is a non-periodic `side × side` Cartesian grid of workers, one
//! record per worker, frozen at construction. All queries are pure and
//! read-only, so any number of workers may consult the same mesh
//! concurrently without coordination.

use crate::mesh_error::MeshShearError;
use crate::topology::node::NodeId;

/// Which dimension a line runs along.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Axis {
    Row,
    Col,
}

/// One-step displacement along an axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Shift {
    /// Toward the higher coordinate (+1).
    Forward,
    /// Toward the lower coordinate (−1).
    Backward,
}

/// An immutable `side × side` grid of workers.
///
/// Grid boundaries are open: a worker on an edge has no neighbor past the
/// edge, mirroring a non-periodic Cartesian communicator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Mesh {
    side: usize,
}

impl Mesh {
    /// Builds the mesh for `node_count` workers.
    ///
    /// Fails with [`MeshShearError::NotPerfectSquare`] when `node_count` has
    /// no integer square root.
    pub fn new(node_count: usize) -> Result<Self, MeshShearError> {
        let side = (node_count as f64).sqrt().round() as usize;
        if node_count == 0 || side * side != node_count {
            return Err(MeshShearError::NotPerfectSquare(node_count));
        }
        Ok(Mesh { side })
    }

    /// Grid side length (√N).
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total worker count (N).
    #[inline]
    pub fn node_count(&self) -> usize {
        self.side * self.side
    }

    /// Number of alternating row/column phases that guarantees a snake-sorted
    /// grid: `2·⌊log₂ side⌋ + 1`.
    #[inline]
    pub fn phase_count(&self) -> usize {
        2 * self.side.ilog2() as usize + 1
    }

    /// `(row, col)` of a worker.
    #[inline]
    pub fn coords_of(&self, node: NodeId) -> (usize, usize) {
        (node.rank() / self.side, node.rank() % self.side)
    }

    /// The worker at `(row, col)`.
    #[inline]
    pub fn id_of(&self, row: usize, col: usize) -> NodeId {
        debug_assert!(row < self.side && col < self.side);
        NodeId::from(row * self.side + col)
    }

    /// The adjacent worker one step along `axis`, or `None` when the step
    /// would leave the grid.
    pub fn neighbor_along(&self, axis: Axis, node: NodeId, shift: Shift) -> Option<NodeId> {
        let (row, col) = self.coords_of(node);
        let pos = match axis {
            Axis::Row => col,
            Axis::Col => row,
        };
        let moved = match shift {
            Shift::Forward => pos.checked_add(1).filter(|&p| p < self.side)?,
            Shift::Backward => pos.checked_sub(1)?,
        };
        Some(match axis {
            Axis::Row => self.id_of(row, moved),
            Axis::Col => self.id_of(moved, col),
        })
    }

    /// Flat indices in snake (boustrophedon) reading order: row 0 left to
    /// right, row 1 right to left, and so on.
    pub fn snake_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.side).flat_map(move |row| {
            let base = row * self.side;
            let cols: Box<dyn Iterator<Item = usize>> = if row % 2 == 0 {
                Box::new(0..self.side)
            } else {
                Box::new((0..self.side).rev())
            };
            cols.map(move |col| base + col)
        })
    }
}
