//! Tuning knobs for [`Octree`](crate::Octree) construction.

use crate::error::{OctreeError, Result};

/// Maximum subdivision depth; nodes at this depth store objects locally.
pub const MAX_DEPTH: usize = 5;

/// Largest accepted `max_depth`.
///
/// Insertion recurses once per level, and degenerate boxes fit an octant at
/// every level, so the depth has to stay small enough for the call stack.
pub const MAX_DEPTH_LIMIT: usize = 16;

/// Number of objects a single node can hold.
pub const NODE_CAPACITY: usize = 100;

/// Absolute tolerance used by containment tests.
///
/// Absorbs the rounding of octant boundaries computed by repeated midpoint
/// division. Sized for worlds spanning hundreds of units.
pub const CONTAINS_TOLERANCE: f32 = 0.001;

/// What insertion does when an octant that contains the object already has a child node
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ChildDescent {
    /// Recurse into existing children exactly like freshly created ones.
    #[default]
    Always,
    /// Only recurse into a child at the moment it is created.
    ///
    /// Once an octant's child exists, later objects that fit it skip it and
    /// end up in the parent (or in another octant that also contains them).
    /// Kept for reproducing trees built by earlier versions of the
    /// visualizer.
    OnCreate,
}

/// Octree parameters
///
/// # Examples
/// ```
/// use octree::{ChildDescent, OctreeConfig};
///
/// let config = OctreeConfig::default()
///     .with_capacity(16)
///     .with_descent(ChildDescent::OnCreate);
/// assert_eq!(config.max_depth, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OctreeConfig {
    /// Deepest level at which children may be created (root is level 0)
    pub max_depth: usize,
    /// Objects stored per node before insertions into it start failing
    pub capacity: usize,
    /// Absolute containment tolerance, see [`CONTAINS_TOLERANCE`]
    pub tolerance: f32,
    /// Re-descent policy for existing children
    pub descent: ChildDescent,
}

impl Default for OctreeConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            capacity: NODE_CAPACITY,
            tolerance: CONTAINS_TOLERANCE,
            descent: ChildDescent::Always,
        }
    }
}

impl OctreeConfig {
    /// Sets the maximum subdivision depth
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the per-node object capacity
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the containment tolerance
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the re-descent policy
    #[must_use]
    pub fn with_descent(mut self, descent: ChildDescent) -> Self {
        self.descent = descent;
        self
    }

    /// Checks that the configuration can build a usable tree
    ///
    /// # Errors
    /// Returns [`OctreeError::InvalidConfig`] for a `max_depth` above
    /// [`MAX_DEPTH_LIMIT`], a zero capacity or a negative / non-finite
    /// tolerance.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(OctreeError::InvalidConfig("max_depth must be at most 16"));
        }
        if self.capacity == 0 {
            return Err(OctreeError::InvalidConfig("capacity must be at least 1"));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(OctreeError::InvalidConfig(
                "tolerance must be finite and non-negative",
            ));
        }
        Ok(())
    }
}
