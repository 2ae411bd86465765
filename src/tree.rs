//! The owning tree: one root [`Region`] plus the flat list of inserted points.

use log::debug;

use crate::config::QuadtreeConfig;
use crate::error::ConfigError;
use crate::geometry::{Point, Rect};
use crate::region::{QueryResult, Region, Regions};

/// Point quadtree over a fixed domain.
///
/// Besides the tree itself this keeps every successfully inserted point in a
/// flat list, in insertion order. The tree does not need the list for its own
/// operations; it backs iteration and nearest-point lookup.
///
/// # Example
///
/// ```
/// use quadtree::prelude::*;
///
/// let mut tree = SpatialQuadtree::new();
/// assert!(tree.insert(Point::new(0.1, 0.1)));
/// assert!(tree.insert(Point::new(0.15, 0.15)));
/// assert!(!tree.insert(Point::new(1.5, 0.5)), "outside the unit square");
///
/// let result = tree.query_range(&Rect::new(0.0, 0.0, 0.2, 0.2));
/// assert_eq!(result.points.len(), 2);
///
/// assert!(tree.delete(Point::new(0.1, 0.1)));
/// assert!(tree.delete(Point::new(0.15, 0.15)));
/// assert!(!tree.root().is_subdivided());
/// ```
#[derive(Debug, Clone)]
pub struct SpatialQuadtree {
    root: Region,
    points: Vec<Point>,
    config: QuadtreeConfig,
}

/// Shape summary of a tree, see [`SpatialQuadtree::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    /// Total number of regions, root included
    pub regions: usize,
    /// Regions without children
    pub leaves: usize,
    /// Deepest level present
    pub max_level: usize,
    /// Points stored across all regions
    pub points: usize,
}

impl Default for SpatialQuadtree {
    fn default() -> Self {
        Self::new()
    }
}

impl SpatialQuadtree {
    /// Creates an empty tree over the unit square with capacity 1 and depth cap 10
    pub fn new() -> Self {
        Self::from_valid_config(QuadtreeConfig::default())
    }

    /// Creates an empty tree from `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if [`QuadtreeConfig::validate`] rejects the
    /// configuration.
    pub fn with_config(config: QuadtreeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: QuadtreeConfig) -> Self {
        Self {
            root: Region::new(config.bounds, config.policy),
            points: Vec::new(),
            config,
        }
    }

    /// Configuration the tree was built with
    pub fn config(&self) -> &QuadtreeConfig {
        &self.config
    }

    /// Domain covered by the root
    pub fn bounds(&self) -> Rect {
        self.config.bounds
    }

    /// Root region, for read-only traversal
    pub fn root(&self) -> &Region {
        &self.root
    }

    /// All inserted points, in insertion order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of inserted points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if no point is stored
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Inserts a point. Returns `false` if it lies outside the domain.
    pub fn insert(&mut self, point: impl Into<Point>) -> bool {
        let point = point.into();
        let inserted = self.root.insert(point);
        if inserted {
            self.points.push(point);
            debug!("inserted {}, total {} points", point, self.points.len());
        } else {
            debug!("rejected {}: outside {}", point, self.config.bounds);
        }
        inserted
    }

    /// Deletes one point with exactly these coordinates.
    ///
    /// Returns `false` if no such point is stored.
    pub fn delete(&mut self, point: impl Into<Point>) -> bool {
        let point = point.into();
        let deleted = self.root.delete(point);
        if deleted {
            if let Some(idx) = self.points.iter().position(|p| *p == point) {
                let _removed = self.points.remove(idx);
            }
            debug!("deleted {}, total {} points", point, self.points.len());
        }
        deleted
    }

    /// Points inside `rect` (closed test) and every region visited.
    pub fn query_range(&self, rect: &Rect) -> QueryResult<'_> {
        let result = self.root.query_range(rect);
        debug!(
            "query {}: {} points found, {} regions visited",
            rect,
            result.points.len(),
            result.visited.len()
        );
        result
    }

    /// Appends the result of a range query into `out`
    pub fn query_range_into<'a>(&'a self, rect: &Rect, out: &mut QueryResult<'a>) {
        self.root.query_range_into(rect, out);
    }

    /// Stored point closest to `target` by Euclidean distance.
    ///
    /// Scans the flat point list; ties go to the earliest inserted point.
    pub fn nearest(&self, target: impl Into<Point>) -> Option<Point> {
        let target = target.into();
        let mut best: Option<(Point, f64)> = None;
        for p in &self.points {
            let d = p.distance_squared(&target);
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((*p, d));
            }
        }
        best.map(|(p, _)| p)
    }

    /// Deletes and returns the stored point closest to `target`
    pub fn delete_nearest(&mut self, target: impl Into<Point>) -> Option<Point> {
        let nearest = self.nearest(target)?;
        if self.delete(nearest) {
            Some(nearest)
        } else {
            None
        }
    }

    /// Removes every point and resets the root to an empty leaf
    pub fn clear(&mut self) {
        self.root = Region::new(self.config.bounds, self.config.policy);
        self.points.clear();
    }

    /// Pre-order iterator over every region, for rendering
    pub fn regions(&self) -> Regions<'_> {
        self.root.iter()
    }

    /// Counts regions, leaves and stored points, and finds the deepest level
    pub fn stats(&self) -> TreeStats {
        self.regions().fold(TreeStats::default(), |mut s, r| {
            s.regions += 1;
            if !r.is_subdivided() {
                s.leaves += 1;
            }
            s.max_level = s.max_level.max(r.level());
            s.points += r.points().len();
            s
        })
    }
}
