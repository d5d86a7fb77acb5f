//! Depth-first pre-order enumeration of nodes and stored objects.
//!
//! A node is yielded before its children, and children are visited in
//! increasing octant index. Renderers use this to draw one box per node and
//! one box per stored object.

use std::iter::FusedIterator;
use std::slice;

use crate::octree::{OCTANTS, OctreeNode};
use crate::{Aabb, Octree};

/// A node as seen during traversal
#[derive(Clone, Copy, Debug)]
pub struct NodeView<'a> {
    /// Region covered by the node
    pub bounds: Aabb,
    /// Depth of the node (root is 0)
    pub depth: usize,
    /// Objects stored directly at the node
    pub objects: &'a [Aabb],
}

/// Pre-order iterator over the nodes of an [`Octree`]
#[derive(Clone, Debug)]
pub struct Nodes<'a> {
    stack: Vec<(&'a OctreeNode, usize)>,
}

impl<'a> Nodes<'a> {
    fn new(root: &'a OctreeNode) -> Self {
        let mut stack = Vec::with_capacity(OCTANTS);
        stack.push((root, 0));
        Self { stack }
    }
}

impl<'a> Iterator for Nodes<'a> {
    type Item = NodeView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        // reversed so that octant 0 is popped first
        for index in (0..OCTANTS).rev() {
            if let Some(child) = node.child(index) {
                self.stack.push((child, depth + 1));
            }
        }
        Some(NodeView {
            bounds: *node.bounds(),
            depth,
            objects: node.objects(),
        })
    }
}

impl FusedIterator for Nodes<'_> {}

/// Iterator over every stored object paired with its owning node's bounds
#[derive(Clone, Debug)]
pub struct Objects<'a> {
    nodes: Nodes<'a>,
    current: Option<(Aabb, slice::Iter<'a, Aabb>)>,
}

impl Iterator for Objects<'_> {
    type Item = (Aabb, Aabb);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((bounds, objects)) = &mut self.current {
                if let Some(aabb) = objects.next() {
                    return Some((*bounds, *aabb));
                }
            }
            let node = self.nodes.next()?;
            self.current = Some((node.bounds, node.objects.iter()));
        }
    }
}

impl FusedIterator for Objects<'_> {}

impl Octree {
    /// Iterates over all nodes in pre-order
    ///
    /// # Examples
    /// ```
    /// use glam::Vec3;
    /// use octree::{Aabb, Octree};
    ///
    /// let mut tree = Octree::new(Aabb::new(Vec3::ZERO, Vec3::splat(8.0))).unwrap();
    /// tree.insert(Aabb::new(Vec3::splat(4.5), Vec3::splat(5.5))).unwrap();
    ///
    /// let depths: Vec<usize> = tree.nodes().map(|node| node.depth).collect();
    /// assert_eq!(depths, vec![0, 1, 2]);
    /// ```
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes::new(self.root())
    }

    /// Iterates over `(node bounds, object)` pairs in pre-order
    ///
    /// A node's own objects come before those of its children.
    pub fn objects(&self) -> Objects<'_> {
        Objects {
            nodes: self.nodes(),
            current: None,
        }
    }

    /// Calls `visit` with `(node bounds, object)` for every stored object
    pub fn visit<F>(&self, mut visit: F)
    where
        F: FnMut(&Aabb, &Aabb),
    {
        for (bounds, aabb) in self.objects() {
            visit(&bounds, &aabb);
        }
    }
}
