//! `NodeId`: a strong handle for one worker in the mesh.
//!
//! Workers are identified by their flat rank in row-major order. The newtype
//! keeps ranks from being mixed up with line positions or grid coordinates
//! in the scheduler. Rank 0 is a valid worker, so this is a plain `u32`
//! wrapper rather than a `NonZero` one.

use std::fmt;

/// Identifier of one mesh worker (its flat row-major rank).
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Creates a `NodeId` from a flat rank.
    #[inline]
    pub const fn new(rank: u32) -> Self {
        NodeId(rank)
    }

    /// The flat rank as used by the communication layer.
    #[inline]
    pub const fn rank(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(rank: usize) -> Self {
        NodeId(rank as u32)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeId").field(&self.0).finish()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
