//! Geometric primitives for the sliding computation.
//!
//! Polygons are handled as closed rings: `N` distinct vertices stored with
//! the first vertex repeated at the end, so edge walks never need a modulo
//! and a touching point recorded at the seam behaves like any other index.
//! Rings are validated and normalized to counter-clockwise winding on
//! construction; every algorithm downstream assumes both.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use geo::{Area, Coord, LineString, Polygon};
use nfp_orbit_core::robust::{is_ccw, signed_area};
use nfp_orbit_core::{Error, Result};

// ============================================================================
// Point
// ============================================================================

/// A 2D point, also used as a translation vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin / zero vector.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Creates a new point.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Cross product z-component with another vector.
    #[inline]
    pub fn cross(self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Euclidean length when interpreted as a vector.
    #[inline]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// Vectors shorter than 1e-10 have no usable direction and normalize to
    /// the canonical zero vector, which alignment tests classify as `On`.
    #[inline]
    pub fn normalized(self) -> Point {
        let len = self.length();
        if len < 1e-10 {
            Point::ZERO
        } else {
            Point::new(self.x / len, self.y / len)
        }
    }

    /// Per-coordinate comparison within `eps`.
    #[inline]
    pub fn approx_eq(self, other: Point, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }

    /// The point as an `(x, y)` tuple for the core predicates.
    #[inline]
    pub fn tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ============================================================================
// Segment
// ============================================================================

/// A directed line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    /// Creates a new directed segment.
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Direction vector (end minus start). Not normalized.
    #[inline]
    pub fn direction(self) -> Point {
        self.end - self.start
    }

    /// Segment length.
    #[inline]
    pub fn length(self) -> f64 {
        self.direction().length()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

// ============================================================================
// Ring
// ============================================================================

/// A simple closed polygon ring with counter-clockwise winding.
///
/// Storage is closed: `vertex_count() + 1` points with the first repeated at
/// the end. Neighbor lookups work on logical indices `0..vertex_count()`;
/// `next_index` of the last vertex returns the closing duplicate, which
/// holds the same coordinates as vertex 0.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ring {
    points: Vec<Point>,
}

impl Ring {
    /// Builds a ring from vertices in order.
    ///
    /// Accepts open input (`N` vertices) or closed input (`N + 1` with the
    /// first repeated). Rejects rings with fewer than 3 distinct vertices,
    /// consecutive duplicate vertices, or zero area. Clockwise input is
    /// reversed to counter-clockwise; indices always refer to the stored
    /// order.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        let mut points = points;
        if points.len() > 1 && points[0] == points[points.len() - 1] {
            points.pop();
        }

        if points.len() < 3 {
            return Err(Error::InvalidRing(
                "a ring needs at least 3 distinct vertices".into(),
            ));
        }
        for i in 0..points.len() - 1 {
            if points[i] == points[i + 1] {
                return Err(Error::InvalidRing(format!(
                    "consecutive duplicate vertex at index {}",
                    i
                )));
            }
        }

        let tuples: Vec<(f64, f64)> = points.iter().map(|p| p.tuple()).collect();
        if signed_area(&tuples) == 0.0 {
            return Err(Error::InvalidRing("ring has zero area".into()));
        }
        if !is_ccw(&tuples) {
            points.reverse();
        }

        let first = points[0];
        points.push(first);
        Ok(Self { points })
    }

    /// Builds a ring from `(x, y)` tuples. See [`Ring::new`].
    pub fn from_tuples(points: &[(f64, f64)]) -> Result<Self> {
        Self::new(points.iter().map(|&p| Point::from(p)).collect())
    }

    /// Number of distinct vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Vertex at `index`. Valid for `0..=vertex_count()`; the last valid
    /// index is the closing duplicate of vertex 0.
    #[inline]
    pub fn vertex(&self, index: usize) -> Point {
        self.points[index]
    }

    /// Index of the vertex preceding `index` along the ring.
    #[inline]
    pub fn prev_index(&self, index: usize) -> usize {
        if index == 0 {
            self.vertex_count() - 1
        } else {
            index - 1
        }
    }

    /// Index of the vertex following `index` along the ring. For the last
    /// distinct vertex this is the closing duplicate.
    #[inline]
    pub fn next_index(&self, index: usize) -> usize {
        index + 1
    }

    /// The closed point slice (`vertex_count() + 1` entries).
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The `vertex_count()` directed edges in order.
    pub fn edges(&self) -> Vec<Segment> {
        (0..self.vertex_count())
            .map(|i| Segment::new(self.points[i], self.points[i + 1]))
            .collect()
    }

    /// A copy of the ring shifted by `delta`. Winding and vertex order are
    /// preserved, so no re-validation is needed.
    pub fn translated(&self, delta: Point) -> Ring {
        Ring {
            points: self.points.iter().map(|&p| p + delta).collect(),
        }
    }

    /// Unsigned enclosed area.
    pub fn area(&self) -> f64 {
        self.to_geo_polygon().unsigned_area()
    }

    /// Converts to a `geo` polygon (exterior only).
    pub fn to_geo_polygon(&self) -> Polygon<f64> {
        let exterior: Vec<Coord<f64>> = self.points[..self.vertex_count()]
            .iter()
            .map(|p| Coord { x: p.x, y: p.y })
            .collect();
        Polygon::new(LineString::from(exterior), vec![])
    }
}

// ============================================================================
// Tests
// ============================================================================
