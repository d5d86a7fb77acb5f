//! Insert-only octree over [`Aabb`]s with nearest ray-hit queries.
//!
//! Each node covers a box of space and stores the objects that fit none of
//! its eight octants. Children are created on demand the first time an object
//! fits their octant, and are never removed. Subdivision stops at
//! [`OctreeConfig::max_depth`]; objects reaching that depth are stored where
//! they land.

use log::{debug, trace, warn};

use crate::config::{ChildDescent, OctreeConfig};
use crate::error::{OctreeError, Result};
use crate::{Aabb, Ray, RayInterval};

/// Number of children per node
pub const OCTANTS: usize = 8;

/// One cubic region of the octree
#[derive(Clone, Debug)]
pub struct OctreeNode {
    bounds: Aabb,
    objects: Vec<Aabb>,
    children: [Option<Box<OctreeNode>>; OCTANTS],
}

/// Where [`Octree::insert`] stored an object
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Depth of the storing node (root is 0)
    pub depth: usize,
    /// Bounds of the storing node
    pub bounds: Aabb,
}

/// Nearest object hit by a ray
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// The object that was hit
    pub aabb: Aabb,
    /// Entry and exit distances along the ray
    pub interval: RayInterval,
}

impl RayHit {
    /// Distance from the ray origin to the entry point
    #[inline]
    pub fn distance(&self) -> f32 {
        self.interval.tmin
    }
}

impl OctreeNode {
    fn new(bounds: Aabb) -> Self {
        Self {
            bounds,
            objects: Vec::new(),
            children: Default::default(),
        }
    }

    /// Region covered by this node
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    /// Objects stored directly at this node, in insertion order
    pub fn objects(&self) -> &[Aabb] {
        &self.objects
    }

    /// Child node for octant `index`, if it was ever created
    pub fn child(&self, index: usize) -> Option<&Self> {
        self.children.get(index)?.as_deref()
    }

    /// Present children with their octant index, in increasing index order
    pub fn children(&self) -> impl Iterator<Item = (usize, &Self)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(index, child)| Some((index, child.as_deref()?)))
    }

    fn insert(&mut self, aabb: Aabb, depth: usize, config: &OctreeConfig) -> Result<Placement> {
        if depth < config.max_depth {
            let center = self.bounds.center();
            for index in 0..OCTANTS {
                let octant = self.bounds.octant_around(index, center);
                if !octant.contains_within(&aabb, config.tolerance) {
                    continue;
                }

                let child = match self.children[index] {
                    Some(ref mut child) if config.descent == ChildDescent::Always => child,
                    Some(_) => continue,
                    None => {
                        let node = Self::new(octant);
                        debug!("created octant {index} {octant} at depth {}", depth + 1);
                        self.children[index].insert(Box::new(node))
                    }
                };
                return child.insert(aabb, depth + 1, config);
            }
        }

        if self.objects.len() >= config.capacity {
            warn!(
                "dropping {aabb}: node {} at depth {depth} holds {} objects",
                self.bounds,
                self.objects.len()
            );
            return Err(OctreeError::CapacityExhausted {
                bounds: self.bounds,
                depth,
            });
        }

        self.objects.try_reserve(1)?;
        self.objects.push(aabb);
        Ok(Placement {
            depth,
            bounds: self.bounds,
        })
    }

    fn nearest(&self, ray: &Ray) -> Option<RayHit> {
        let mut best: Option<RayHit> = None;
        let center = self.bounds.center();

        for (index, child) in self.children() {
            let octant = self.bounds.octant_around(index, center);
            if !octant.ray_hit(ray) {
                trace!("ray misses octant {index} {octant}");
                continue;
            }
            let Some(candidate) = child.nearest(ray) else {
                continue;
            };
            let interval = candidate.aabb.ray_intersect(ray);
            if interval.is_hit() && is_closer(&interval, best.as_ref()) {
                best = Some(RayHit {
                    aabb: candidate.aabb,
                    interval,
                });
            }
        }

        for aabb in &self.objects {
            let interval = aabb.ray_intersect(ray);
            if interval.is_hit() && is_closer(&interval, best.as_ref()) {
                best = Some(RayHit {
                    aabb: *aabb,
                    interval,
                });
            }
        }

        best
    }
}

/// Strict comparison: at equal distance the earlier candidate wins
#[inline]
fn is_closer(interval: &RayInterval, best: Option<&RayHit>) -> bool {
    best.is_none_or(|best| interval.tmin < best.interval.tmin)
}

/// Octree spatial index over 3D axis-aligned boxes
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use octree::{Aabb, Octree, Ray};
///
/// let mut tree = Octree::new(Aabb::new(Vec3::ZERO, Vec3::splat(500.0))).unwrap();
/// tree.insert(Aabb::new(Vec3::splat(10.0), Vec3::splat(20.0))).unwrap();
/// tree.insert(Aabb::new(Vec3::splat(300.0), Vec3::splat(320.0))).unwrap();
///
/// let ray = Ray::look_at(Vec3::splat(-100.0), Vec3::splat(250.0)).unwrap();
/// assert_eq!(tree.find(&ray), Aabb::new(Vec3::splat(10.0), Vec3::splat(20.0)));
/// ```
#[derive(Clone, Debug)]
pub struct Octree {
    root: OctreeNode,
    config: OctreeConfig,
    len: usize,
}

impl Octree {
    /// Creates an empty octree covering `bounds` with the default configuration
    ///
    /// # Errors
    /// Never fails with the default configuration; the `Result` matches
    /// [`Octree::with_config`].
    pub fn new(bounds: Aabb) -> Result<Self> {
        Self::with_config(bounds, OctreeConfig::default())
    }

    /// Creates an empty octree covering `bounds`
    ///
    /// # Errors
    /// Returns [`OctreeError::InvalidConfig`] for a rejected configuration.
    /// Node storage grows on demand, so a large `capacity` costs nothing up
    /// front.
    pub fn with_config(bounds: Aabb, config: OctreeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            root: OctreeNode::new(bounds),
            config,
            len: 0,
        })
    }

    /// Inserts an object and reports the node that stored it
    ///
    /// The object descends into the first octant (in index order) that
    /// contains it, creating child nodes as needed, until it fits no octant
    /// or the maximum depth is reached. Child nodes created on the way down
    /// are kept even if the insertion fails.
    ///
    /// # Errors
    /// - [`OctreeError::CapacityExhausted`] if the storing node is full. The
    ///   object is not stored anywhere else.
    /// - [`OctreeError::Allocation`] if the storing node cannot grow its
    ///   object storage.
    pub fn insert(&mut self, aabb: Aabb) -> Result<Placement> {
        let placement = self.root.insert(aabb, 0, &self.config)?;
        self.len += 1;
        Ok(placement)
    }

    /// Nearest stored object hit by `ray`, or [`Aabb::EMPTY`] on a miss
    pub fn find(&self, ray: &Ray) -> Aabb {
        self.find_hit(ray).map_or(Aabb::EMPTY, |hit| hit.aabb)
    }

    /// Nearest stored object hit by `ray` together with its hit interval
    ///
    /// Subtrees whose octant the ray misses are skipped. Candidates are
    /// ranked by entry distance; among equal distances the first one found
    /// wins, visiting children in octant order before the node's own objects.
    pub fn find_hit(&self, ray: &Ray) -> Option<RayHit> {
        self.root.nearest(ray)
    }

    /// Removes every object and child node, keeping bounds and configuration
    pub fn clear(&mut self) {
        self.root.children = Default::default();
        self.root.objects.clear();
        self.len = 0;
    }

    /// Number of stored objects
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when nothing is stored
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// World bounds covered by the root
    pub fn bounds(&self) -> &Aabb {
        &self.root.bounds
    }

    /// Configuration the tree was built with
    pub fn config(&self) -> &OctreeConfig {
        &self.config
    }

    /// Root node
    pub fn root(&self) -> &OctreeNode {
        &self.root
    }

    /// Number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Depth of the deepest node (0 for a tree without children)
    pub fn depth(&self) -> usize {
        self.nodes().map(|node| node.depth).max().unwrap_or(0)
    }
}
