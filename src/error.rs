//! Error type shared by the octree, ray construction and configuration.

use std::collections::TryReserveError;

use glam::Vec3;
use thiserror::Error;

use crate::Aabb;

/// Errors reported by octree operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OctreeError {
    /// The node that should store the object is full and no octant claimed it.
    ///
    /// The object is dropped; the tree itself stays usable.
    #[error("node {bounds} at depth {depth} is full")]
    CapacityExhausted {
        /// Bounds of the full node
        bounds: Aabb,
        /// Depth of the full node (root is 0)
        depth: usize,
    },

    /// A node's object storage could not grow
    #[error("failed to reserve node storage: {0}")]
    Allocation(#[from] TryReserveError),

    /// A ray direction that cannot be normalized
    #[error("ray direction {direction} cannot be normalized")]
    DegenerateRay {
        /// The rejected direction
        direction: Vec3,
    },

    /// Configuration rejected by [`OctreeConfig::validate`](crate::OctreeConfig::validate)
    #[error("invalid octree configuration: {0}")]
    InvalidConfig(&'static str),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, OctreeError>;
