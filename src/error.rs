//! Error type for fallible quadtree construction.
//!
//! Insert, delete and query never fail; they report outcomes through `bool`
//! and empty results. Only building a tree from a [`QuadtreeConfig`](crate::QuadtreeConfig)
//! can be rejected.

use thiserror::Error;

/// Reasons a [`QuadtreeConfig`](crate::QuadtreeConfig) is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Domain origin or size is not finite, or the size is not positive.
    #[error("invalid domain bounds: origin ({x}, {y}), size {width}x{height}")]
    InvalidBounds {
        /// Domain origin x
        x: f64,
        /// Domain origin y
        y: f64,
        /// Domain width
        width: f64,
        /// Domain height
        height: f64,
    },

    /// A capacity of zero would split on every insertion.
    #[error("node capacity must be at least 1")]
    ZeroCapacity,

    /// Regions at the depth cap would be narrower than the coordinate precision.
    #[error("max level {max_level} exceeds the deepest usable level {limit} for these bounds")]
    MaxLevelTooDeep {
        /// Requested depth cap
        max_level: usize,
        /// Deepest level the bounds support
        limit: usize,
    },
}
