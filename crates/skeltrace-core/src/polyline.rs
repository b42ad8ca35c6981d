//! Point, Polyline - Traced stroke geometry
//!
//! A `Polyline` is an ordered sequence of integer points forming an open
//! path (a stroke fragment, or a complete stroke once fragments have been
//! merged). Polylines are mutated freely while chunks are being stitched
//! together and treated as immutable output afterwards.

use crate::error::{Error, Result};

/// An integer 2D point in bitmap coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another point.
    #[inline]
    pub fn manhattan(&self, other: Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// An open polyline: an ordered point sequence.
///
/// A fragment fresh out of the recursion floor has exactly two points;
/// merging grows it by concatenation at either end.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    /// Create a new empty polyline.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a polyline with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Create a polyline from a point vector.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Get the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get a point by index.
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Get the first point, if any.
    #[inline]
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Get the last point, if any.
    #[inline]
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Append a point.
    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    /// Replace the point at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the index is out of bounds.
    pub fn set(&mut self, index: usize, p: Point) -> Result<()> {
        let len = self.points.len();
        match self.points.get_mut(index) {
            Some(slot) => {
                *slot = p;
                Ok(())
            }
            None => Err(Error::IndexOutOfBounds { index, len }),
        }
    }

    /// Reverse the point order in place.
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Append all points of `other` to the end.
    pub fn append(&mut self, other: Polyline) {
        self.points.extend(other.points);
    }

    /// Insert all points of `other` at the front, preserving their order.
    pub fn prepend(&mut self, other: Polyline) {
        self.points.splice(0..0, other.points);
    }

    /// Drop the first point.
    pub fn remove_first(&mut self) {
        if !self.points.is_empty() {
            self.points.remove(0);
        }
    }

    /// Drop the last point.
    pub fn remove_last(&mut self) {
        self.points.pop();
    }

    /// View the points as a slice.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consume the polyline, yielding its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Iterate over the points.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }
}

impl FromIterator<Point> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
