//! Rays with a unit-length direction, used for picking.

use glam::Vec3;

use crate::error::{OctreeError, Result};

/// Half-line with a unit-length direction
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// Starting point
    pub origin: Vec3,
    /// Unit direction
    pub direction: Vec3,
}

impl Ray {
    /// Creates a ray, normalizing `direction`
    ///
    /// # Errors
    /// Returns [`OctreeError::DegenerateRay`] when `direction` has zero length
    /// or non-finite components.
    ///
    /// # Examples
    /// ```
    /// use glam::Vec3;
    /// use octree::Ray;
    ///
    /// let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 4.0)).unwrap();
    /// assert_eq!(ray.direction, Vec3::Z);
    /// assert!(Ray::new(Vec3::ZERO, Vec3::ZERO).is_err());
    /// ```
    pub fn new(origin: Vec3, direction: Vec3) -> Result<Self> {
        let direction = direction
            .try_normalize()
            .ok_or(OctreeError::DegenerateRay { direction })?;
        Ok(Self { origin, direction })
    }

    /// Creates a ray from a direction that is already unit length
    #[inline]
    pub fn from_normalized(origin: Vec3, direction: Vec3) -> Self {
        debug_assert!(
            direction.is_normalized(),
            "ray direction {direction} is not unit length"
        );
        Self { origin, direction }
    }

    /// Pick ray from a camera at `from` looking at `to`
    ///
    /// # Errors
    /// Returns [`OctreeError::DegenerateRay`] when the two points coincide.
    pub fn look_at(from: Vec3, to: Vec3) -> Result<Self> {
        Self::new(from, to - from)
    }

    /// Point at distance `t` along the ray
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
