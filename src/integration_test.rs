#[cfg(test)]
mod integration_tests {
    use glam::Vec3;
    use rand::SeedableRng;

    use crate::prelude::*;

    #[test]
    fn test_visualizer_session() {
        // 500^3 world filled up to the visualizer's 1000 box limit, picked from the fixed camera
        let mut tree = Octree::new(Aabb::new(Vec3::ZERO, Vec3::splat(500.0))).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(2024);
        let report = BoxScatter::default().fill(&mut tree, &mut rng, 1000).unwrap();
        assert_eq!(report.inserted + report.rejected, 1000);
        assert!(report.inserted > 850, "Most boxes should find room, got {report:?}");

        let camera = Vec3::new(700.0, 300.0, -400.0);
        let target = Vec3::splat(250.0);
        let ray = Ray::look_at(camera, target).unwrap();
        let hit = tree.find_hit(&ray).expect("pick ray through the world center should hit");
        assert!(hit.distance() > 0.0, "Camera sits outside every box");
        assert!(tree.bounds().contains(&hit.aabb));

        // no stored box is entered strictly before the picked one
        for (_, object) in tree.objects() {
            let interval = object.ray_intersect(&ray);
            if interval.is_hit() {
                assert!(interval.tmin >= hit.distance(), "{object} is closer than {}", hit.aabb);
            }
        }

        // every stored box is reported once with a node that holds it
        let mut rendered = 0;
        tree.visit(|node_bounds, object| {
            assert!(node_bounds.contains(object));
            rendered += 1;
        });
        assert_eq!(rendered, tree.len());
        assert!(tree.depth() <= 5);

        tree.clear();
        assert_eq!(tree.find(&ray), Aabb::EMPTY);
    }
}
