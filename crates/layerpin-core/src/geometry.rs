//! Geometric primitives for placing nodes of a layered drawing.
//!
//! This module provides the value types used by the constraint engine to
//! describe where nodes are, how large they are, and which horizontal band
//! of the drawing a layer occupies.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//! - [`LayerBounds`] - The band of the drawing spanned by one layer
//!
//! # Coordinate System
//!
//! ```text
//!   (0,0) ────────► +X   (layers are ordered along X)
//!     │
//!     │
//!     ▼
//!    +Y                  (positions within a layer are ordered along Y)
//! ```
//!
//! Node positions are anchored at the top-left corner of the node's box.

use serde::Serialize;

/// A 2D point representing a position in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use layerpin_core::geometry::Point;
/// let p = Point::new(10.0, 20.0);
/// assert_eq!(p.x(), 10.0);
/// assert_eq!(p.y(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Bounds that contain nothing and act as the identity for [`Bounds::merge`].
    pub fn empty() -> Self {
        Self {
            min_x: f32::INFINITY,
            min_y: f32::INFINITY,
            max_x: f32::NEG_INFINITY,
            max_y: f32::NEG_INFINITY,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Merges two bounds to create a larger bounds that contains both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use layerpin_core::geometry::{Bounds, Point, Size};
    /// let a = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 30.0));
    /// let b = Bounds::new_from_top_left(Point::new(10.0, 40.0), Size::new(120.0, 80.0));
    ///
    /// let combined = a.merge(&b);
    /// assert_eq!(combined.min_x(), 0.0);
    /// assert_eq!(combined.max_x(), 130.0);
    /// assert_eq!(combined.max_y(), 120.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// The horizontal band of a layered drawing occupied by one layer.
///
/// Bands produced for a whole level tile the drawing: the right edge of one
/// band is the left edge of the next. Vertical extents are shared by every
/// band of a level. `mid` is the center of the layer's raw node extent and is
/// kept when the band edges are moved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayerBounds {
    left_x: f32,
    right_x: f32,
    top_y: f32,
    bot_y: f32,
    mid: f32,
}

impl LayerBounds {
    /// Creates a band from the raw horizontal extent of a layer's nodes.
    ///
    /// `mid` is derived from the extent; the vertical bounds start out empty.
    pub fn from_extent(left_x: f32, right_x: f32) -> Self {
        Self {
            left_x,
            right_x,
            top_y: 0.0,
            bot_y: 0.0,
            mid: left_x + (right_x - left_x) / 2.0,
        }
    }

    pub fn left_x(self) -> f32 {
        self.left_x
    }

    pub fn right_x(self) -> f32 {
        self.right_x
    }

    pub fn top_y(self) -> f32 {
        self.top_y
    }

    pub fn bot_y(self) -> f32 {
        self.bot_y
    }

    pub fn mid(self) -> f32 {
        self.mid
    }

    pub fn set_left_x(&mut self, left_x: f32) {
        self.left_x = left_x;
    }

    pub fn set_right_x(&mut self, right_x: f32) {
        self.right_x = right_x;
    }

    /// Sets the vertical extent of the band.
    pub fn set_vertical(&mut self, top_y: f32, bot_y: f32) {
        self.top_y = top_y;
        self.bot_y = bot_y;
    }

    /// Returns the horizontal size of the band
    pub fn width(self) -> f32 {
        self.right_x - self.left_x
    }

    /// Returns true if `x` falls inside the band.
    ///
    /// The left edge is inclusive and the right edge exclusive, so a point on
    /// the shared edge of two bands belongs to the right one only.
    pub fn contains_x(self, x: f32) -> bool {
        self.left_x <= x && x < self.right_x
    }

}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_bounds_from_top_left() {
        let bounds = Bounds::new_from_top_left(Point::new(10.0, 20.0), Size::new(30.0, 40.0));
        assert_eq!(bounds.min_x(), 10.0);
        assert_eq!(bounds.max_x(), 40.0);
        assert_eq!(bounds.min_y(), 20.0);
        assert_eq!(bounds.max_y(), 60.0);
    }

    #[test]
    fn test_empty_bounds_is_merge_identity() {
        let bounds = Bounds::new_from_top_left(Point::new(-5.0, 3.0), Size::new(10.0, 2.0));
        let empty = Bounds::empty();
        assert_eq!(empty.merge(&bounds), bounds);
        assert_eq!(bounds.merge(&empty), bounds);
    }

    #[test]
    fn test_layer_bounds_mid_from_extent() {
        let layer = LayerBounds::from_extent(10.0, 50.0);
        assert_approx_eq!(f32, layer.mid(), 30.0);
        assert_approx_eq!(f32, layer.width(), 40.0);
    }

    #[test]
    fn test_layer_bounds_mid_survives_edge_moves() {
        let mut layer = LayerBounds::from_extent(10.0, 50.0);
        layer.set_left_x(0.0);
        layer.set_right_x(80.0);
        assert_approx_eq!(f32, layer.mid(), 30.0);
        assert_approx_eq!(f32, layer.width(), 80.0);
    }

    #[test]
    fn test_layer_bounds_contains_x_is_half_open() {
        let layer = LayerBounds::from_extent(0.0, 10.0);
        assert!(layer.contains_x(0.0));
        assert!(layer.contains_x(9.99));
        assert!(!layer.contains_x(10.0));
        assert!(!layer.contains_x(-0.01));
    }

}
