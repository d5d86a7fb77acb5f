//! Pick boxes from the visualizer's fixed camera, the way a mouse click would.
//!
//! ```bash
//! RUST_LOG=octree=debug cargo run --example pick_ray
//! ```
use glam::Vec3;
use octree::prelude::*;
use rand::SeedableRng;

fn main() {
    env_logger::init();

    let mut tree = Octree::new(Aabb::new(Vec3::ZERO, Vec3::splat(500.0))).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    let report = BoxScatter::default().fill(&mut tree, &mut rng, 1000).unwrap();
    println!("Inserted {} boxes ({} rejected)", report.inserted, report.rejected);

    let camera = Vec3::new(700.0, 300.0, -400.0);

    // Aim at the world center, then sweep across it
    for offset in [-100.0, -50.0, 0.0, 50.0, 100.0] {
        let target = Vec3::new(250.0 + offset, 250.0, 250.0);
        let ray = Ray::look_at(camera, target).unwrap();
        match tree.find_hit(&ray) {
            Some(hit) => println!("  -> {target}: hit {} at {:.2}", hit.aabb, hit.distance()),
            None => println!("  -> {target}: nothing"),
        }
    }
}
