//! Quadtree node: subdivision, collapse, and the insert / delete / range-query
//! traversals.
//!
//! A [`Region`] is either a leaf that stores points directly, or an internal
//! node that owns exactly four children tiling its box in [`Quadrant`] order.
//! Internal nodes normally hold no points; the exception is a point that the
//! one-shot redistribution after a split could not place in any child, which
//! stays with the parent.

use log::{debug, trace, warn};

use crate::config::SplitPolicy;
use crate::geometry::{Point, Quadrant, Rect};

/// A node of the quadtree covering one axis-aligned rectangle.
#[derive(Debug, Clone)]
pub struct Region {
    bounds: Rect,
    policy: SplitPolicy,
    level: usize,
    points: Vec<Point>,
    /// `Some` exactly when the region is subdivided
    children: Option<Box<[Region; 4]>>,
}

/// Accumulator for [`Region::query_range_into`].
///
/// `visited` records every region the search touched, including regions that
/// turned out not to intersect the query rectangle.
#[derive(Debug, Default, Clone)]
pub struct QueryResult<'a> {
    /// Points inside the query rectangle (closed test), in traversal order
    pub points: Vec<Point>,
    /// Every region visited, in traversal order
    pub visited: Vec<&'a Region>,
}

impl QueryResult<'_> {
    /// Empties both collections, keeping their allocations
    pub fn clear(&mut self) {
        self.points.clear();
        self.visited.clear();
    }
}

impl Region {
    /// Creates an empty root region (level 0)
    pub fn new(bounds: Rect, policy: SplitPolicy) -> Self {
        Self::with_level(bounds, policy, 0)
    }

    fn with_level(bounds: Rect, policy: SplitPolicy, level: usize) -> Self {
        Self {
            bounds,
            policy,
            level,
            points: Vec::new(),
            children: None,
        }
    }

    /// Box covered by this region
    pub fn bounding_box(&self) -> Rect {
        self.bounds
    }

    /// Points stored directly in this region (not in its descendants)
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether this region has four children
    pub fn is_subdivided(&self) -> bool {
        self.children.is_some()
    }

    /// The four children in [`Quadrant::ALL`] order, or an empty slice for a leaf
    pub fn children(&self) -> &[Self] {
        match &self.children {
            Some(children) => &children[..],
            None => &[],
        }
    }

    /// Child covering `quadrant`, if subdivided
    pub fn child(&self, quadrant: Quadrant) -> Option<&Self> {
        self.children.as_ref().map(|c| &c[quadrant.index()])
    }

    /// Depth of this region, root = 0
    pub fn level(&self) -> usize {
        self.level
    }

    /// Split parameters shared by the whole tree
    pub fn policy(&self) -> SplitPolicy {
        self.policy
    }

    /// True for a leaf holding no points
    pub fn is_empty_leaf(&self) -> bool {
        self.children.is_none() && self.points.is_empty()
    }

    /// Number of points stored in this subtree
    pub fn point_count(&self) -> usize {
        self.iter().map(|r| r.points.len()).sum()
    }

    /// Pre-order iterator over this region and all of its descendants
    pub fn iter(&self) -> Regions<'_> {
        Regions { stack: vec![self] }
    }

    /// Half-open containment test against this region's box
    pub fn contains(&self, point: &Point) -> bool {
        self.bounds.contains(point)
    }

    /// Splits into four children unless already subdivided or at the depth cap.
    ///
    /// Returns whether children were created. Existing points are not moved.
    fn subdivide(&mut self) -> bool {
        if self.children.is_some() || self.level >= self.policy.max_level {
            return false;
        }
        let policy = self.policy;
        let level = self.level + 1;
        let children = self.bounds.quadrants().map(|b| Self::with_level(b, policy, level));
        self.children = Some(Box::new(children));
        debug!("level {}: subdivided {} into 4 regions", self.level, self.bounds);
        true
    }

    /// Inserts `point` into this subtree.
    ///
    /// Returns `false` when the point lies outside this region's box, or when
    /// the region is subdivided and rounding left the point outside every
    /// child's box.
    /// Points landing in a leaf may trigger a split followed by a single flat
    /// redistribution pass; children filled by that pass are not split again
    /// until their next insertion.
    pub fn insert(&mut self, point: Point) -> bool {
        if !self.bounds.contains(&point) {
            return false;
        }

        if let Some(children) = self.children.as_mut() {
            // Children tile this box up to rounding; the first match wins
            return children.iter_mut().any(|child| child.insert(point));
        }

        self.points.push(point);
        trace!(
            "point {} added to level {} ({} points)",
            point,
            self.level,
            self.points.len()
        );

        if self.should_split() {
            self.split_and_redistribute();
        }
        true
    }

    fn should_split(&self) -> bool {
        if self.policy.force_root_split && self.level == 0 && self.points.len() == 1 {
            debug!("level 0: first point, forcing subdivision");
            return true;
        }
        if self.points.len() > self.policy.capacity && self.level < self.policy.max_level {
            debug!(
                "level {}: over capacity ({} > {})",
                self.level,
                self.points.len(),
                self.policy.capacity
            );
            return true;
        }
        false
    }

    fn split_and_redistribute(&mut self) {
        if !self.subdivide() {
            return;
        }
        let Some(children) = self.children.as_mut() else {
            return;
        };

        let pending = std::mem::take(&mut self.points);
        let mut moved = 0usize;
        for p in pending {
            match children.iter_mut().find(|c| c.bounds.contains(&p)) {
                Some(child) => {
                    child.points.push(p);
                    moved += 1;
                    trace!("point {} redistributed to level {}", p, child.level);
                }
                None => {
                    warn!("point {} fits no child of level {}, retained", p, self.level);
                    self.points.push(p);
                }
            }
        }
        debug!("level {}: redistributed {} points to children", self.level, moved);
    }

    /// Removes the first point equal to `point` (exact coordinates).
    ///
    /// After a successful removal below a subdivided region, its children are
    /// dropped if all four are empty leaves. Applied on the way back up, this
    /// collapses every emptied subtree along the deletion path.
    pub fn delete(&mut self, point: Point) -> bool {
        if !self.bounds.contains(&point) {
            return false;
        }

        let Some(children) = self.children.as_mut() else {
            return remove_first(&mut self.points, &point);
        };

        // Falls back to points left here by a redistribution that found no child
        let removed = children.iter_mut().any(|child| child.delete(point))
            || remove_first(&mut self.points, &point);
        if removed {
            self.collapse_if_empty();
        }
        removed
    }

    /// Drops the children once all four are empty leaves
    fn collapse_if_empty(&mut self) {
        let Some(children) = &self.children else {
            return;
        };
        if children.iter().all(Self::is_empty_leaf) {
            self.children = None;
            debug!("level {}: collapsed, all children empty", self.level);
        }
    }

    /// Collects points inside `rect` and every region visited on the way.
    pub fn query_range(&self, rect: &Rect) -> QueryResult<'_> {
        let mut result = QueryResult::default();
        self.query_range_into(rect, &mut result);
        result
    }

    /// Like [`query_range`](Self::query_range), appending into a caller-owned
    /// accumulator shared across the whole recursion.
    ///
    /// A region is recorded as visited before its box is tested. The box test
    /// is strict ([`Rect::intersects`]) while point membership is closed
    /// ([`Rect::contains_closed`]).
    pub fn query_range_into<'a>(&'a self, rect: &Rect, out: &mut QueryResult<'a>) {
        out.visited.push(self);

        if !self.bounds.intersects(rect) {
            return;
        }

        out.points
            .extend(self.points.iter().filter(|p| rect.contains_closed(p)).copied());

        if let Some(children) = &self.children {
            for child in children.iter() {
                child.query_range_into(rect, out);
            }
        }
    }
}

fn remove_first(points: &mut Vec<Point>, point: &Point) -> bool {
    match points.iter().position(|p| p == point) {
        Some(idx) => {
            let removed = points.remove(idx);
            trace!("point {} removed", removed);
            true
        }
        None => false,
    }
}

/// Pre-order iterator returned by [`Region::iter`].
///
/// Yields a region before its children, children in [`Quadrant::ALL`] order.
#[derive(Debug, Clone)]
pub struct Regions<'a> {
    stack: Vec<&'a Region>,
}

impl<'a> Iterator for Regions<'a> {
    type Item = &'a Region;

    fn next(&mut self) -> Option<Self::Item> {
        let region = self.stack.pop()?;
        self.stack.extend(region.children().iter().rev());
        Some(region)
    }
}

impl<'a> IntoIterator for &'a Region {
    type Item = &'a Region;
    type IntoIter = Regions<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
