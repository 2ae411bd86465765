//! Tree configuration and the split policy shared by every region.

use crate::error::ConfigError;
use crate::geometry::Rect;

/// Default point count a leaf holds before it splits.
pub const DEFAULT_CAPACITY: usize = 1;

/// Default depth cap.
pub const DEFAULT_MAX_LEVEL: usize = 10;

/// Subdivision parameters applied uniformly to every [`Region`](crate::Region).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitPolicy {
    /// A leaf splits once it holds more than this many points
    pub capacity: usize,
    /// Regions at this level never split
    pub max_level: usize,
    /// Split the root on its first point regardless of capacity.
    ///
    /// This keeps the four top-level quadrants visible from the first insert
    /// on. Turning it off leaves only the capacity rule.
    pub force_root_split: bool,
}

impl Default for SplitPolicy {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_level: DEFAULT_MAX_LEVEL,
            force_root_split: true,
        }
    }
}

/// Configuration for a [`SpatialQuadtree`](crate::SpatialQuadtree).
///
/// ```
/// use quadtree::prelude::*;
///
/// let config = QuadtreeConfig::default()
///     .with_bounds(Rect::new(0.0, 0.0, 100.0, 100.0))
///     .with_capacity(4)
///     .with_max_level(6);
/// let tree = SpatialQuadtree::with_config(config).unwrap();
/// assert_eq!(tree.bounds().width, 100.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadtreeConfig {
    /// Domain covered by the root region
    pub bounds: Rect,
    /// Split parameters
    pub policy: SplitPolicy,
}

impl Default for QuadtreeConfig {
    fn default() -> Self {
        Self {
            bounds: Rect::unit(),
            policy: SplitPolicy::default(),
        }
    }
}

impl QuadtreeConfig {
    /// Sets the domain rectangle
    #[must_use]
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    /// Sets the leaf capacity
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.policy.capacity = capacity;
        self
    }

    /// Sets the depth cap.
    ///
    /// [`validate`](Self::validate) rejects a cap deeper than
    /// [`deepest_level`] for the configured bounds.
    #[must_use]
    pub fn with_max_level(mut self, max_level: usize) -> Self {
        self.policy.max_level = max_level;
        self
    }

    /// Enables or disables the forced split of the root on its first point
    #[must_use]
    pub fn with_force_root_split(mut self, force: bool) -> Self {
        self.policy.force_root_split = force;
        self
    }

    /// Checks that the configuration describes a usable tree.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBounds`] if the domain has a non-finite
    /// coordinate or a non-positive size, [`ConfigError::ZeroCapacity`] if the
    /// capacity is zero, and [`ConfigError::MaxLevelTooDeep`] if regions at
    /// the depth cap would be narrower than the coordinate precision.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let b = &self.bounds;
        let finite =
            b.x.is_finite() && b.y.is_finite() && b.width.is_finite() && b.height.is_finite();
        if !finite || b.is_degenerate() {
            return Err(ConfigError::InvalidBounds {
                x: b.x,
                y: b.y,
                width: b.width,
                height: b.height,
            });
        }
        if self.policy.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        let limit = deepest_level(b);
        if self.policy.max_level > limit {
            return Err(ConfigError::MaxLevelTooDeep {
                max_level: self.policy.max_level,
                limit,
            });
        }
        Ok(())
    }
}

/// Deepest level whose regions inside `bounds` are still wider and taller than
/// one `f64` step at the domain's largest coordinate.
///
/// Past this level `x + width / 2` can round back to `x`, producing empty
/// child boxes that accept no point.
pub fn deepest_level(bounds: &Rect) -> usize {
    let max_x = bounds.left().abs().max(bounds.right().abs());
    let max_y = bounds.top().abs().max(bounds.bottom().abs());
    let mut width = bounds.width;
    let mut height = bounds.height;
    let mut level = 0;
    loop {
        width /= 2.0;
        height /= 2.0;
        if !(width > f64::EPSILON * max_x && height > f64::EPSILON * max_y) {
            return level;
        }
        level += 1;
    }
}
