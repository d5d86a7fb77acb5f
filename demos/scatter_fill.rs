//! Fill a tree with random boxes and print how they spread over the levels.
use glam::Vec3;
use octree::prelude::*;
use rand::SeedableRng;

fn main() {
    env_logger::init();

    for descent in [ChildDescent::Always, ChildDescent::OnCreate] {
        let config = OctreeConfig::default().with_descent(descent);
        let bounds = Aabb::new(Vec3::ZERO, Vec3::splat(500.0));
        let mut tree = Octree::with_config(bounds, config).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let report = BoxScatter::default().fill(&mut tree, &mut rng, 1000).unwrap();

        let mut per_level = vec![(0usize, 0usize); config.max_depth + 1];
        for node in tree.nodes() {
            per_level[node.depth].0 += 1;
            per_level[node.depth].1 += node.objects.len();
        }

        println!(
            "{descent:?}: {} stored, {} rejected, {} nodes",
            report.inserted,
            report.rejected,
            tree.node_count()
        );
        for (depth, (nodes, objects)) in per_level.iter().enumerate() {
            println!("  depth {depth}: {nodes:>4} nodes {objects:>5} objects");
        }
    }
}
