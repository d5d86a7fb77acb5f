//! Find the nearest box along a ray.
use glam::Vec3;
use octree::prelude::*;

fn main() {
    let mut tree = Octree::new(Aabb::new(Vec3::ZERO, Vec3::splat(100.0))).unwrap();
    tree.insert(Aabb::new(Vec3::new(60.0, 45.0, 45.0), Vec3::new(70.0, 55.0, 55.0))).unwrap();
    tree.insert(Aabb::new(Vec3::new(20.0, 45.0, 45.0), Vec3::new(30.0, 55.0, 55.0))).unwrap();
    tree.insert(Aabb::new(Vec3::new(5.0, 5.0, 5.0), Vec3::new(10.0, 10.0, 10.0))).unwrap();

    let ray = Ray::new(Vec3::new(-10.0, 50.0, 50.0), Vec3::X).unwrap();
    if let Some(hit) = tree.find_hit(&ray) {
        println!("Nearest box: {} at distance {}", hit.aabb, hit.distance());
    }
}
