//! Performance profiling example for ray queries
//!
//! This example performs intensive `find` operations on a densely filled octree.
//! Designed to be used with low-level profilers like `samply`:
//!
//! ```bash
//! samply record cargo run --release --example perf
//! ```

use glam::Vec3;
use octree::prelude::*;
use std::time::Instant;

fn main() {
    println!("Building octree...");
    let config = OctreeConfig::default().with_capacity(2_000);
    let mut tree = Octree::with_config(Aabb::new(Vec3::ZERO, Vec3::splat(1000.0)), config).unwrap();

    let mut rng = 12345u64; // Simple LCG random number generator
    let mut next = move || {
        rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (rng >> 40) as f32 / (1u64 << 24) as f32
    };

    let build_start = Instant::now();
    let mut rejected = 0;
    for _ in 0..100_000 {
        let min = Vec3::new(next(), next(), next()) * 990.0;
        let size = Vec3::new(next(), next(), next()) * 9.0 + 1.0;
        if tree.insert(Aabb::new(min, min + size)).is_err() {
            rejected += 1;
        }
    }
    let build_duration = build_start.elapsed();
    println!(
        "Inserted {} boxes ({} rejected) into {} nodes",
        tree.len(),
        rejected,
        tree.node_count()
    );

    let query_start = Instant::now();
    let mut hits = 0;
    for _ in 0..100_000 {
        let from = Vec3::new(next(), next(), -0.5) * 1000.0;
        let to = Vec3::new(next(), next(), next()) * 1000.0;
        let ray = Ray::look_at(from, to).unwrap();
        if tree.find_hit(&ray).is_some() {
            hits += 1;
        }
    }
    let query_duration = query_start.elapsed();

    println!(
        "\nCompleted 100,000 queries in {:.2}ms ({:.2}µs per query), {} hits",
        query_duration.as_secs_f64() * 1000.0,
        query_duration.as_secs_f64() * 1_000_000.0 / 100_000.0,
        hits
    );

    println!("\nProfile Summary:");
    println!("  Building: {:.2}ms", build_duration.as_secs_f64() * 1000.0);
    println!("  Querying: {:.2}ms", query_duration.as_secs_f64() * 1000.0);
    println!("  Total:    {:.2}ms", (build_duration + query_duration).as_secs_f64() * 1000.0);
}
