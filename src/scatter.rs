//! Random box generation for populating a tree.

use glam::Vec3;
use log::debug;
use rand::Rng;

use crate::error::OctreeError;
use crate::{Aabb, Octree};

/// Uniform generator of random boxes
///
/// Each box gets a lower corner drawn uniformly from `[0, extent)` on every
/// axis, and a per-axis size of `min_size + [0, size_jitter)`.
/// The default matches a `500^3` world filled with boxes 10 to 40 units wide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxScatter {
    /// Upper limit for the lower corner coordinates
    pub extent: f32,
    /// Smallest size along an axis
    pub min_size: f32,
    /// Random size added on top of `min_size`
    pub size_jitter: f32,
}

/// Outcome of [`BoxScatter::fill`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScatterReport {
    /// Boxes the tree accepted
    pub inserted: usize,
    /// Boxes dropped because their node was full
    pub rejected: usize,
}

impl Default for BoxScatter {
    fn default() -> Self {
        Self {
            extent: 450.0,
            min_size: 10.0,
            size_jitter: 30.0,
        }
    }
}

impl BoxScatter {
    /// Draws one box
    ///
    /// # Examples
    /// ```
    /// use octree::BoxScatter;
    /// use rand::SeedableRng;
    ///
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    /// let aabb = BoxScatter::default().sample(&mut rng);
    /// assert!(aabb.min.cmpge(glam::Vec3::ZERO).all());
    /// assert!(aabb.size().cmpge(glam::Vec3::splat(10.0)).all());
    /// ```
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Aabb {
        let min = Vec3::new(
            rng.random::<f32>() * self.extent,
            rng.random::<f32>() * self.extent,
            rng.random::<f32>() * self.extent,
        );
        let size = Vec3::new(
            rng.random::<f32>() * self.size_jitter,
            rng.random::<f32>() * self.size_jitter,
            rng.random::<f32>() * self.size_jitter,
        ) + self.min_size;
        Aabb::new(min, min + size)
    }

    /// Inserts `count` random boxes into `tree`
    ///
    /// Boxes rejected by a full node are counted and skipped.
    ///
    /// # Errors
    /// Stops at the first error other than
    /// [`OctreeError::CapacityExhausted`].
    pub fn fill<R: Rng + ?Sized>(
        &self,
        tree: &mut Octree,
        rng: &mut R,
        count: usize,
    ) -> Result<ScatterReport, OctreeError> {
        let mut report = ScatterReport::default();
        for _ in 0..count {
            match tree.insert(self.sample(rng)) {
                Ok(_) => report.inserted += 1,
                Err(OctreeError::CapacityExhausted { .. }) => report.rejected += 1,
                Err(err) => return Err(err),
            }
        }
        debug!(
            "scattered {} boxes ({} rejected), tree has {} nodes",
            report.inserted,
            report.rejected,
            tree.node_count()
        );
        Ok(report)
    }
}
