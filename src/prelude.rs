//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use quadtree::prelude::*;
//! ```

pub use crate::{
    ConfigError, Point, Quadrant, QueryResult, QuadtreeConfig, Rect, Region, SpatialQuadtree,
    SplitPolicy, TreeStats,
};
