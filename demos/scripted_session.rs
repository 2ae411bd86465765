//! Replays an interactive session: insert clicks, a drag query and
//! nearest-point deletes, printing the tree after each step.
//!
//! Run with `RUST_LOG=debug` (or `trace`) to follow every split and collapse.
use quadtree::prelude::*;

fn print_tree(tree: &SpatialQuadtree) {
    for region in tree.regions() {
        let indent = "  ".repeat(region.level());
        println!("{}{} points={}", indent, region.bounding_box(), region.points().len());
    }
    let stats = tree.stats();
    println!(
        "Total: {} points, {} regions, {} leaves, depth {}\n",
        tree.len(),
        stats.regions,
        stats.leaves,
        stats.max_level
    );
}

fn main() {
    env_logger::init();

    let mut tree = SpatialQuadtree::new();

    println!("=== Insert ===");
    for p in [(0.1, 0.1), (0.15, 0.15), (0.8, 0.2), (0.3, 0.7), (1.0, 0.5)] {
        let point = Point::from(p);
        if tree.insert(point) {
            println!("Inserted {point}");
        } else {
            println!("Could not insert {point}");
        }
    }
    print_tree(&tree);

    println!("=== Drag query ===");
    let rect = Rect::from_corners(Point::new(0.2, 0.2), Point::new(0.0, 0.0));
    let result = tree.query_range(&rect);
    println!(
        "Query {}: {} points found, {} regions visited: {:?}\n",
        rect,
        result.points.len(),
        result.visited.len(),
        result.points
    );

    println!("=== Delete nearest ===");
    for click in [(0.12, 0.12), (0.9, 0.9), (0.0, 0.0), (0.5, 0.5)] {
        match tree.delete_nearest(click) {
            Some(p) => println!("Deleted {p} (clicked {:?})", click),
            None => println!("Nothing to delete"),
        }
    }
    print_tree(&tree);
}
