//! Octree SVG visualizer
//! Generates an SVG of the tree projected onto the xy plane: node regions,
//! stored boxes, and the box picked by a ray along +z

use std::fs::File;
use std::io::Write;

use glam::Vec3;
use octree::prelude::*;
use rand::SeedableRng;

fn main() {
    let size = 800.0;
    let margin = 40.0;
    let world = 500.0;
    let scale = (size - 2.0 * margin) / world;

    // Parameter: number of random boxes
    let count = 300;

    let mut tree = Octree::new(Aabb::new(Vec3::ZERO, Vec3::splat(world))).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(5);
    let report = BoxScatter::default().fill(&mut tree, &mut rng, count).unwrap();

    let ray = Ray::new(Vec3::new(250.0, 250.0, -100.0), Vec3::Z).unwrap();
    let picked = tree.find(&ray);

    // Converts a box to an SVG rect (y axis points up)
    let rect = |b: &Aabb, class: &str| -> String {
        let x = margin + b.min.x * scale;
        let y = size - margin - b.max.y * scale;
        format!(
            "    <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" class=\"{}\"/>\n",
            x,
            y,
            b.size().x * scale,
            b.size().y * scale,
            class
        )
    };

    // Generate SVG
    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let side = size as i32;
    svg.push_str(&format!(
        "<svg width=\"{side}\" height=\"{side}\" xmlns=\"http://www.w3.org/2000/svg\" \
         viewBox=\"0 0 {side} {side}\">\n"
    ));

    svg.push_str("  <defs>\n");
    svg.push_str("    <style>\n");
    svg.push_str("      .node { fill: none; stroke: #CCCCCC; stroke-width: 1; }\n");
    svg.push_str("      .object { fill: #4A90D9; fill-opacity: 0.25; ");
    svg.push_str("stroke: #2A5D8F; stroke-width: 0.5; }\n");
    svg.push_str("      .picked { fill: #FF6B35; fill-opacity: 0.8; ");
    svg.push_str("stroke: #333333; stroke-width: 1.5; }\n");
    svg.push_str("    </style>\n");
    svg.push_str("  </defs>\n\n");

    // Node regions, shallow to deep
    svg.push_str("  <g id=\"nodes\">\n");
    for node in tree.nodes() {
        svg.push_str(&rect(&node.bounds, "node"));
    }
    svg.push_str("  </g>\n\n");

    // Stored boxes
    svg.push_str("  <g id=\"objects\">\n");
    tree.visit(|_, object| svg.push_str(&rect(object, "object")));
    svg.push_str("  </g>\n\n");

    if !picked.is_empty() {
        svg.push_str("  <!-- Picked box -->\n");
        svg.push_str(&rect(&picked, "picked"));
    }

    svg.push_str("</svg>\n");

    // Write to file
    let mut file = File::create("octree_xy.svg").expect("Failed to create file");
    file.write_all(svg.as_bytes()).expect("Failed to write to file");

    println!("Generated: octree_xy.svg");
    println!("  - Boxes: {} stored, {} rejected", report.inserted, report.rejected);
    println!("  - Nodes: {} (depth {})", tree.node_count(), tree.depth());
    println!("  - Picked: {picked}");
}
