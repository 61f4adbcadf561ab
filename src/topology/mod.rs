//! Mesh topology: worker identifiers and the 2D grid they live on.

pub mod mesh;
pub mod node;

pub use mesh::{Axis, Mesh, Shift};
pub use node::NodeId;
