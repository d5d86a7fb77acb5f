//! Axis-aligned box geometry: containment with tolerance, octant subdivision
//! and slab-method ray intersection.

use std::fmt;

use glam::Vec3;

use crate::Ray;
use crate::config::CONTAINS_TOLERANCE;

/// Axis-aligned bounding box described by its two extreme corners
///
/// `min[i] <= max[i]` is expected on every axis but not enforced.
/// The default value is [`Aabb::EMPTY`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    /// Lower corner
    pub min: Vec3,
    /// Upper corner
    pub max: Vec3,
}

/// Parametric interval along a ray returned by [`Aabb::ray_intersect`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayInterval {
    /// Distance at which the ray enters the box (never below 0)
    pub tmin: f32,
    /// Distance at which the ray leaves the box
    pub tmax: f32,
}

impl RayInterval {
    /// True when the interval is non-empty, i.e. the ray hits the box
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.tmin <= self.tmax
    }
}

impl Aabb {
    /// Degenerate box at the origin, used as the "no result" sentinel
    pub const EMPTY: Self = Self {
        min: Vec3::ZERO,
        max: Vec3::ZERO,
    };

    /// Creates a box from its lower and upper corners
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Returns [`Aabb::EMPTY`]
    #[inline]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// True for the degenerate sentinel box
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Component-wise midpoint of the two corners
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    /// Extent along each axis
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Tests whether `inner` lies inside `self`, using [`CONTAINS_TOLERANCE`]
    ///
    /// # Examples
    /// ```
    /// use glam::Vec3;
    /// use octree::Aabb;
    ///
    /// let outer = Aabb::new(Vec3::ZERO, Vec3::splat(10.0));
    /// let inner = Aabb::new(Vec3::splat(2.0), Vec3::splat(3.0));
    /// assert!(outer.contains(&inner));
    /// assert!(!inner.contains(&outer));
    /// ```
    #[inline]
    pub fn contains(&self, inner: &Self) -> bool {
        self.contains_within(inner, CONTAINS_TOLERANCE)
    }

    /// Tests whether `inner` lies inside `self`
    ///
    /// A face of `inner` may poke out of `self` by less than `tolerance`.
    /// The test is reflexive and not symmetric.
    pub fn contains_within(&self, inner: &Self, tolerance: f32) -> bool {
        (0..3).all(|axis| {
            let min_inside = inner.min[axis] >= self.min[axis]
                || (inner.min[axis] - self.min[axis]).abs() < tolerance;
            let max_inside = inner.max[axis] <= self.max[axis]
                || (inner.max[axis] - self.max[axis]).abs() < tolerance;
            min_inside && max_inside
        })
    }

    /// Sub-box for one of the 8 octants of this box
    ///
    /// Bit `j` of `index` selects the half on axis `j` (0 = x, 1 = y, 2 = z):
    /// set picks the lower half `[min, center]`, clear picks the upper half
    /// `[center, max]`. Octant 0 is therefore the upper corner and octant 7
    /// the lower corner. Only the low three bits of `index` are read.
    pub fn octant(&self, index: usize) -> Self {
        self.octant_around(index, self.center())
    }

    /// [`Aabb::octant`] with a precomputed center
    pub(crate) fn octant_around(&self, index: usize, center: Vec3) -> Self {
        let mut min = Vec3::ZERO;
        let mut max = Vec3::ZERO;
        for axis in 0..3 {
            if index & (1 << axis) != 0 {
                min[axis] = self.min[axis];
                max[axis] = center[axis];
            } else {
                min[axis] = center[axis];
                max[axis] = self.max[axis];
            }
        }
        Self { min, max }
    }

    /// Intersects `ray` with this box using the slab method
    ///
    /// The interval starts at `[0, +inf]` so hits behind the origin are
    /// ignored. Zero direction components divide to infinities (or NaN when the
    /// origin lies on a slab plane), which `f32::min` / `f32::max` absorb.
    ///
    /// # Examples
    /// ```
    /// use glam::Vec3;
    /// use octree::{Aabb, Ray};
    ///
    /// let unit = Aabb::new(Vec3::ZERO, Vec3::ONE);
    /// let ray = Ray::from_normalized(Vec3::new(-5.0, 0.5, 0.5), Vec3::X);
    /// let hit = unit.ray_intersect(&ray);
    /// assert_eq!((hit.tmin, hit.tmax), (5.0, 6.0));
    /// ```
    pub fn ray_intersect(&self, ray: &Ray) -> RayInterval {
        let mut tmin = 0.0_f32;
        let mut tmax = f32::INFINITY;
        for axis in 0..3 {
            let t0 = (self.min[axis] - ray.origin[axis]) / ray.direction[axis];
            let t1 = (self.max[axis] - ray.origin[axis]) / ray.direction[axis];

            tmin = t0.max(tmin).min(t1.max(tmin));
            tmax = t0.min(tmax).max(t1.min(tmax));
        }
        RayInterval { tmin, tmax }
    }

    /// True when `ray` hits this box at or in front of its origin
    #[inline]
    pub fn ray_hit(&self, ray: &Ray) -> bool {
        self.ray_intersect(ray).is_hit()
    }
}

impl fmt::Display for Aabb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}
