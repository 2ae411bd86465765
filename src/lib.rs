//! # quadtree - Region Quadtree over a Bounded 2D Domain
//!
//! A point quadtree supporting insertion, deletion and axis-aligned range
//! queries inside a fixed rectangular domain.
//!
//! ## Features
//!
//! - **Capacity-Driven Subdivision**: a leaf splits into four quadrants once it
//!   holds more than `capacity` points
//! - **Depth Cap**: no region is created below `max_level`; excess points stay in the deepest leaf
//! - **Collapse on Delete**: subtrees that become empty revert to a single leaf
//! - **Traced Range Queries**: queries report every region they visited, for visualization
//!
//! ## Quick Start
//!
//! ```rust
//! use quadtree::prelude::*;
//!
//! // Unit square, capacity 1, depth cap 10
//! let mut tree = SpatialQuadtree::new();
//!
//! tree.insert((0.1, 0.1));
//! // The first point always splits the root into four quadrants
//! assert_eq!(tree.root().children().len(), 4);
//!
//! tree.insert((0.15, 0.15));
//! tree.insert((0.7, 0.8));
//!
//! let result = tree.query_range(&Rect::new(0.0, 0.0, 0.2, 0.2));
//! println!("Found {} points, visited {} regions", result.points.len(), result.visited.len());
//! assert_eq!(result.points.len(), 2);
//!
//! // Deleting everything collapses the tree back to an empty root
//! for p in tree.points().to_vec() {
//!     tree.delete(p);
//! }
//! assert!(!tree.root().is_subdivided());
//! ```
//!
//! ## How It Works
//!
//! Each [`Region`] covers a rectangle and either stores points directly or owns
//! four children covering its quadrants in the fixed order NW, NE, SW, SE.
//! Containment is half-open (`x <= px < x + width`), so a point on an edge
//! shared by two siblings belongs to exactly one of them.
//!
//! When a split happens, the points already held by the leaf are moved into
//! the new children in one flat pass; a child that receives more than
//! `capacity` points this way is only split on its next insertion.
//!
//! Diagnostics are emitted through the [`log`] facade. Install any logger
//! (for example `env_logger`) and set `RUST_LOG=debug` or `trace` to follow
//! splits, collapses and query summaries.

pub mod config;
pub mod error;
pub mod geometry;
pub mod prelude;
pub mod region;
pub mod tree;

pub use config::{QuadtreeConfig, SplitPolicy};
pub use error::ConfigError;
pub use geometry::{Point, Quadrant, Rect};
pub use region::{QueryResult, Region, Regions};
pub use tree::{SpatialQuadtree, TreeStats};

mod comparison_tests;
