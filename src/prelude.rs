//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use octree::prelude::*;
//! ```

pub use crate::{Aabb, BoxScatter, ChildDescent, Octree, OctreeConfig, OctreeError, Ray, RayHit};
