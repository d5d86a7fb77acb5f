//! Comparison tests between the octree ray query and a brute-force linear scan

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use rand::{Rng, SeedableRng};

    use crate::{Aabb, BoxScatter, ChildDescent, Octree, OctreeConfig, Ray};

    /// Nearest entry distance over every box, the reference answer
    fn linear_nearest(boxes: &[Aabb], ray: &Ray) -> Option<f32> {
        boxes
            .iter()
            .map(|b| b.ray_intersect(ray))
            .filter(|interval| interval.is_hit())
            .map(|interval| interval.tmin)
            .min_by(f32::total_cmp)
    }

    /// Helper to scatter the same boxes into a tree and a flat list
    fn setup(seed: u64, count: usize, config: OctreeConfig) -> (Octree, Vec<Aabb>) {
        let bounds = Aabb::new(Vec3::ZERO, Vec3::splat(500.0));
        let mut tree = Octree::with_config(bounds, config).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let scatter = BoxScatter::default();
        let mut boxes = Vec::with_capacity(count);
        for _ in 0..count {
            let b = scatter.sample(&mut rng);
            if tree.insert(b).is_ok() {
                boxes.push(b);
            }
        }
        (tree, boxes)
    }

    fn random_ray<R: Rng>(rng: &mut R) -> Ray {
        let from = Vec3::new(
            rng.random_range(-300.0..800.0),
            rng.random_range(-300.0..800.0),
            rng.random_range(-300.0..800.0),
        );
        let to = Vec3::new(
            rng.random_range(50.0..450.0),
            rng.random_range(50.0..450.0),
            rng.random_range(50.0..450.0),
        );
        Ray::look_at(from, to).unwrap()
    }

    fn check_consistency(descent: ChildDescent, seed: u64) {
        let config = OctreeConfig::default().with_descent(descent);
        let (tree, boxes) = setup(seed, 1000, config);
        assert_eq!(tree.len(), boxes.len());

        let mut rng = rand::rngs::StdRng::seed_from_u64(seed + 1);
        let mut hits = 0;
        for _ in 0..300 {
            let ray = random_ray(&mut rng);
            let expected = linear_nearest(&boxes, &ray);
            let found = tree.find_hit(&ray);
            assert_eq!(
                found.map(|hit| hit.distance()),
                expected,
                "Octree and linear scan disagree for {ray:?}"
            );
            if let Some(hit) = found {
                assert!(boxes.contains(&hit.aabb), "Hit must be a stored box");
                assert_eq!(hit.aabb.ray_intersect(&ray), hit.interval);
                hits += 1;
            }
        }
        assert!(hits > 0, "Rays aimed into the world should hit something");
    }

    #[test]
    fn test_find_matches_linear_scan() {
        check_consistency(ChildDescent::Always, 42);
    }

    #[test]
    fn test_find_matches_linear_scan_on_create() {
        check_consistency(ChildDescent::OnCreate, 42);
    }

    #[test]
    fn test_find_matches_linear_scan_many_seeds() {
        for seed in [1, 7, 123, 9001] {
            check_consistency(ChildDescent::Always, seed);
        }
    }

    /// Configurations large enough that no node ever fills up
    fn roomy(descent: ChildDescent) -> OctreeConfig {
        OctreeConfig::default().with_capacity(10_000).with_descent(descent)
    }

    #[test]
    fn test_policies_store_same_objects() {
        let (always, _) = setup(5, 800, roomy(ChildDescent::Always));
        let (on_create, _) = setup(5, 800, roomy(ChildDescent::OnCreate));
        assert_eq!(always.len(), 800);
        assert_eq!(on_create.len(), 800);

        let mut a: Vec<Aabb> = always.objects().map(|(_, b)| b).collect();
        let mut b: Vec<Aabb> = on_create.objects().map(|(_, b)| b).collect();
        let key = |x: &Aabb| x.min.to_array().map(f32::to_bits);
        a.sort_by_key(key);
        b.sort_by_key(key);
        assert_eq!(a, b, "Both policies should keep every box");
    }

    #[test]
    fn test_on_create_stores_shallower() {
        let (always, _) = setup(9, 1000, roomy(ChildDescent::Always));
        let (on_create, _) = setup(9, 1000, roomy(ChildDescent::OnCreate));

        let depth_sum = |tree: &Octree| -> usize {
            tree.nodes().map(|node| node.depth * node.objects.len()).sum()
        };
        assert!(
            depth_sum(&on_create) < depth_sum(&always),
            "Skipping existing children should leave objects higher up"
        );
        assert!(
            on_create.root().objects().len() > always.root().objects().len(),
            "The root should absorb boxes that fit existing children"
        );
    }

    #[test]
    fn test_containment_invariant_always() {
        let (tree, _) = setup(17, 1000, OctreeConfig::default());
        let config = tree.config();
        for node in tree.nodes() {
            for object in node.objects {
                assert!(
                    node.bounds.contains_within(object, config.tolerance),
                    "{object} stored outside its node {}",
                    node.bounds
                );
                if node.depth < config.max_depth {
                    for index in 0..8 {
                        assert!(
                            !node.bounds.octant(index).contains_within(object, config.tolerance),
                            "{object} at depth {} fits octant {index} but was not pushed down",
                            node.depth
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_placement_path_contains_object() {
        let mut tree = Octree::new(Aabb::new(Vec3::ZERO, Vec3::splat(500.0))).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(99);
        let scatter = BoxScatter {
            extent: 495.0,
            min_size: 0.5,
            size_jitter: 4.0,
        };
        for _ in 0..500 {
            let b = scatter.sample(&mut rng);
            let placement = tree.insert(b).unwrap();
            assert!(placement.depth <= 5);

            // walk from the root along the octants that contain the box
            let mut node = tree.root();
            for depth in 0..placement.depth {
                let index = (0..8)
                    .find(|&i| node.bounds().octant(i).contains(&b))
                    .unwrap_or_else(|| panic!("{b} fits no octant at depth {depth}"));
                node = node.child(index).expect("path child should exist");
            }
            assert_eq!(*node.bounds(), placement.bounds);
            assert!(node.objects().contains(&b));
        }
    }
}
