//! Comparison tests between SpatialQuadtree range queries and a brute-force linear scan

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    /// Sorts points so results from different traversal orders compare equal
    fn sorted(mut points: Vec<Point>) -> Vec<Point> {
        points.sort_by(|a, b| {
            a.x.partial_cmp(&b.x)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
        });
        points
    }

    fn brute_force(points: &[Point], rect: &Rect) -> Vec<Point> {
        sorted(points.iter().copied().filter(|p| rect.contains_closed(p)).collect())
    }

    fn random_point<R: Rng>(rng: &mut R, bounds: &Rect) -> Point {
        Point::new(
            bounds.x + rng.random_range(0.0..bounds.width),
            bounds.y + rng.random_range(0.0..bounds.height),
        )
    }

    fn random_rect<R: Rng>(rng: &mut R, bounds: &Rect) -> Rect {
        Rect::from_corners(random_point(rng, bounds), random_point(rng, bounds))
    }

    fn build(config: QuadtreeConfig, points: &[Point]) -> SpatialQuadtree {
        let mut tree = SpatialQuadtree::with_config(config).unwrap();
        for &p in points {
            assert!(tree.insert(p), "Point {p} inside the domain must be accepted");
        }
        tree
    }

    fn assert_queries_match(
        tree: &SpatialQuadtree,
        rng: &mut rand::rngs::StdRng,
        num_queries: usize,
    ) {
        let bounds = tree.bounds();
        for _ in 0..num_queries {
            let rect = random_rect(rng, &bounds);
            let expected = brute_force(tree.points(), &rect);
            let actual = sorted(tree.query_range(&rect).points);
            assert_eq!(actual, expected, "Query results differ from linear scan for {rect}");
        }
    }

    #[test]
    fn test_small_dataset_consistency() {
        let points: Vec<Point> = [
            (0.1, 0.1),
            (0.15, 0.15),
            (0.4, 0.9),
            (0.75, 0.25),
            (0.5, 0.5),
            (0.9, 0.95),
        ]
        .into_iter()
        .map(Point::from)
        .collect();
        let tree = build(QuadtreeConfig::default(), &points);

        for rect in [
            Rect::new(0.0, 0.0, 0.2, 0.2),
            Rect::new(0.0, 0.0, 0.5, 0.5),
            Rect::new(0.5, 0.0, 0.5, 0.5),
            Rect::new(0.3, 0.3, 0.4, 0.7),
            Rect::new(0.95, 0.95, 0.01, 0.01),
        ] {
            let actual = sorted(tree.query_range(&rect).points);
            assert_eq!(actual, brute_force(&points, &rect), "Mismatch for {rect}");
        }
    }

    #[test]
    fn test_large_dataset_consistency() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let bounds = Rect::unit();
        let points: Vec<Point> = (0..2_000).map(|_| random_point(&mut rng, &bounds)).collect();
        let tree = build(QuadtreeConfig::default(), &points);

        assert_eq!(tree.stats().points, points.len());
        assert_queries_match(&tree, &mut rng, 200);
    }

    #[test]
    fn test_consistency_with_capacity_and_offset_domain() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let bounds = Rect::new(-50.0, -20.0, 100.0, 40.0);
        let config = QuadtreeConfig::default()
            .with_bounds(bounds)
            .with_capacity(8)
            .with_max_level(6);
        let points: Vec<Point> = (0..1_000).map(|_| random_point(&mut rng, &bounds)).collect();
        let tree = build(config, &points);

        assert!(tree.regions().all(|r| r.level() <= 6));
        assert_queries_match(&tree, &mut rng, 200);
    }

    #[test]
    fn test_whole_domain_query_returns_everything() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(1234);
        let bounds = Rect::unit();
        let points: Vec<Point> = (0..500).map(|_| random_point(&mut rng, &bounds)).collect();
        let tree = build(QuadtreeConfig::default().with_capacity(3), &points);

        let found = sorted(tree.query_range(&bounds).points);
        assert_eq!(found, sorted(points), "Every inserted point must be found");
    }

    #[test]
    fn test_clustered_points_hit_depth_cap() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(99);
        let cluster = Rect::new(0.3, 0.3, 0.0005, 0.0005);
        let points: Vec<Point> = (0..300).map(|_| random_point(&mut rng, &cluster)).collect();
        let config = QuadtreeConfig::default().with_capacity(2).with_max_level(5);
        let tree = build(config, &points);

        let stats = tree.stats();
        assert_eq!(stats.max_level, 5, "Cluster should drive the tree to the depth cap");
        assert_eq!(stats.points, 300);
        assert_queries_match(&tree, &mut rng, 50);

        let found = sorted(tree.query_range(&Rect::new(0.29, 0.29, 0.02, 0.02)).points);
        assert_eq!(found, sorted(points));
    }

    #[test]
    fn test_consistency_after_deletions() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(2024);
        let bounds = Rect::unit();
        let points: Vec<Point> = (0..800).map(|_| random_point(&mut rng, &bounds)).collect();
        let mut tree = build(QuadtreeConfig::default().with_capacity(2), &points);

        let mut shuffled = points.clone();
        shuffled.shuffle(&mut rng);
        for p in &shuffled[..400] {
            assert!(tree.delete(*p), "Inserted point {p} must be deletable");
        }

        assert_eq!(tree.len(), 400);
        assert_eq!(tree.stats().points, 400, "Tree and flat list must agree");
        assert_queries_match(&tree, &mut rng, 200);
    }

    #[test]
    fn test_insert_delete_round_trip() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(5);
        let bounds = Rect::unit();
        for capacity in [1, 2, 4, 16] {
            let points: Vec<Point> = (0..600).map(|_| random_point(&mut rng, &bounds)).collect();
            let mut tree = build(QuadtreeConfig::default().with_capacity(capacity), &points);

            let mut shuffled = points.clone();
            shuffled.shuffle(&mut rng);
            for p in shuffled {
                assert!(tree.delete(p), "Inserted point {p} must be deletable");
            }

            let root = tree.root();
            assert!(!root.is_subdivided(), "Capacity {capacity}: root should collapse");
            assert!(root.points().is_empty());
            assert!(tree.is_empty());
            assert_eq!(tree.stats().regions, 1);
        }
    }

    #[test]
    fn test_nearest_matches_linear_scan() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(31);
        let bounds = Rect::unit();
        let points: Vec<Point> = (0..300).map(|_| random_point(&mut rng, &bounds)).collect();
        let tree = build(QuadtreeConfig::default(), &points);

        for _ in 0..50 {
            let target = random_point(&mut rng, &bounds);
            let nearest = tree.nearest(target).unwrap();
            let best = points
                .iter()
                .map(|p| p.distance(&target))
                .fold(f64::INFINITY, f64::min);
            assert_eq!(nearest.distance(&target), best);
        }
    }
}
