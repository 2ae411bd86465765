//! Find points inside a rectangle and list the regions the search visited.
use quadtree::prelude::*;

fn main() {
    let mut tree = SpatialQuadtree::new();
    for p in [(0.1, 0.1), (0.15, 0.15), (0.4, 0.9), (0.75, 0.25), (0.6, 0.55)] {
        tree.insert(p);
    }

    let rect = Rect::new(0.0, 0.0, 0.2, 0.2);
    let result = tree.query_range(&rect);
    println!("Points in {}: {:?}", rect, result.points);
    for region in &result.visited {
        println!("  visited level {} {}", region.level(), region.bounding_box());
    }
}
