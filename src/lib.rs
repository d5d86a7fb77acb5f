//! # Octree - 3D AABB Spatial Index
//!
//! An insert-only octree over axis-aligned bounding boxes (AABBs) with
//! nearest ray-hit queries, built for picking objects in a 3D scene.
//!
//! ## Features
//!
//! - **Lazy Subdivision**: Child octants are created only when an object first fits them
//! - **Bounded Depth**: Subdivision stops at depth 5, so recursion stays shallow
//! - **Tolerant Containment**: Boxes sitting on octant boundaries still descend
//! - **Ray Picking**: Slab-method intersection with octant pruning finds the nearest hit
//!
//! ## Quick Start
//!
//! ```rust
//! use glam::Vec3;
//! use octree::prelude::*;
//!
//! // A 500 unit world
//! let mut tree = Octree::new(Aabb::new(Vec3::ZERO, Vec3::splat(500.0))).unwrap();
//!
//! // Objects descend into the smallest octant that holds them
//! let near = Aabb::new(Vec3::new(100.0, 240.0, 240.0), Vec3::new(110.0, 260.0, 260.0));
//! let far = Aabb::new(Vec3::new(400.0, 240.0, 240.0), Vec3::new(410.0, 260.0, 260.0));
//! tree.insert(far).unwrap();
//! tree.insert(near).unwrap();
//!
//! // Cast a ray along +x through both boxes
//! let ray = Ray::new(Vec3::new(-50.0, 250.0, 250.0), Vec3::X).unwrap();
//! let hit = tree.find_hit(&ray).unwrap();
//! assert_eq!(hit.aabb, near);
//! assert_eq!(hit.distance(), 150.0);
//!
//! // A miss returns the empty sentinel
//! let away = Ray::new(Vec3::new(-50.0, 250.0, 250.0), -Vec3::X).unwrap();
//! assert_eq!(tree.find(&away), Aabb::EMPTY);
//! ```
//!
//! ## How It Works
//!
//! Every node covers a box and splits it at its center into eight octants.
//! Bit `j` of an octant index selects the lower half of axis `j` when set and
//! the upper half when clear. An inserted object walks down the first octant
//! that contains it until no octant does or the depth limit is reached, and
//! is stored there. Each node holds at most 100 objects; inserting into a
//! full node fails without touching the rest of the tree.
//!
//! Ray queries visit only the children whose octant the ray crosses, then
//! test the node's own objects, keeping the candidate with the smallest
//! entry distance.

pub mod aabb;
pub mod config;
pub mod error;
pub mod octree;
pub mod prelude;
pub mod ray;
pub mod scatter;
pub mod traversal;

mod comparison_tests;
mod integration_test;

pub use aabb::{Aabb, RayInterval};
pub use config::{
    CONTAINS_TOLERANCE, ChildDescent, MAX_DEPTH, MAX_DEPTH_LIMIT, NODE_CAPACITY, OctreeConfig,
};
pub use error::{OctreeError, Result};
pub use octree::{Octree, OctreeNode, Placement, RayHit};
pub use ray::Ray;
pub use scatter::{BoxScatter, ScatterReport};
pub use traversal::{NodeView, Nodes, Objects};
