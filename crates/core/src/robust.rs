//! Robust alignment predicates for sliding geometry.
//!
//! Sliding a polygon along another is driven entirely by side-of-line
//! decisions: which side of a directed edge a neighbouring vertex falls on
//! determines whether a translation keeps the polygons apart or drives one
//! into the other. Those decisions must never flip sign because of rounding,
//! so they are backed by Shewchuk's adaptive precision arithmetic with a
//! floating-point filter in front.
//!
//! ## References
//!
//! - Shewchuk, J.R. (1997). "Adaptive Precision Floating-Point Arithmetic and
//!   Fast Robust Predicates for Computational Geometry"
//! - <https://www.cs.cmu.edu/~quake/robust.html>
//!
//! ## Example
//!
//! ```rust
//! use nfp_orbit_core::robust::{alignment, Alignment};
//!
//! let start = (0.0, 0.0);
//! let end = (1.0, 0.0);
//!
//! assert_eq!(alignment(start, end, (0.5, 1.0)), Alignment::Left);
//! assert_eq!(alignment(start, end, (0.5, -1.0)), Alignment::Right);
//! assert_eq!(alignment(start, end, (2.0, 0.0)), Alignment::On);
//! ```

use robust::{orient2d as robust_orient2d, Coord};

/// Position of a point relative to a directed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    /// The point lies strictly on the counter-clockwise side of the line.
    Left,
    /// The point lies strictly on the clockwise side of the line.
    Right,
    /// The point is collinear with the line.
    On,
}

impl Alignment {
    /// Returns true if the point was on the counter-clockwise side.
    #[inline]
    pub fn is_left(self) -> bool {
        matches!(self, Alignment::Left)
    }

    /// Returns true if the point was on the clockwise side.
    #[inline]
    pub fn is_right(self) -> bool {
        matches!(self, Alignment::Right)
    }

    /// Returns true if the point was collinear with the line.
    #[inline]
    pub fn is_on(self) -> bool {
        matches!(self, Alignment::On)
    }
}

// ============================================================================
// Core Predicates (using robust crate)
// ============================================================================

/// Classifies `point` against the directed line from `start` to `end`.
///
/// This is a numerically robust implementation using Shewchuk's adaptive
/// precision arithmetic. It correctly handles near-degenerate cases where
/// standard floating-point arithmetic would report the wrong side.
///
/// # Arguments
///
/// * `start` - Line origin
/// * `end` - Point defining the line direction
/// * `point` - The point being classified
///
/// # Returns
///
/// - [`Alignment::Left`] if `point` lies to the left of start → end
/// - [`Alignment::Right`] if it lies to the right
/// - [`Alignment::On`] if the three points are collinear
///
/// # Example
///
/// ```rust
/// use nfp_orbit_core::robust::{alignment, Alignment};
///
/// assert_eq!(
///     alignment((0.0, 0.0), (1.0, 0.0), (0.5, 1.0)),
///     Alignment::Left
/// );
/// ```
#[inline]
pub fn alignment(start: (f64, f64), end: (f64, f64), point: (f64, f64)) -> Alignment {
    let result = robust_orient2d(
        Coord {
            x: start.0,
            y: start.1,
        },
        Coord { x: end.0, y: end.1 },
        Coord {
            x: point.0,
            y: point.1,
        },
    );

    if result > 0.0 {
        Alignment::Left
    } else if result < 0.0 {
        Alignment::Right
    } else {
        Alignment::On
    }
}

/// Returns the raw orientation determinant.
///
/// The magnitude is twice the signed area of the triangle (start, end,
/// point); the sign matches [`alignment`].
#[inline]
pub fn orient2d_raw(start: (f64, f64), end: (f64, f64), point: (f64, f64)) -> f64 {
    robust_orient2d(
        Coord {
            x: start.0,
            y: start.1,
        },
        Coord { x: end.0, y: end.1 },
        Coord {
            x: point.0,
            y: point.1,
        },
    )
}

// ============================================================================
// Floating-Point Filter (Fast Path + Exact Fallback)
// ============================================================================

/// Threshold for the fast floating-point filter.
///
/// If the determinant magnitude exceeds this times the summed term magnitude,
/// the fast result is trusted; otherwise exact arithmetic decides.
const FILTER_EPSILON: f64 = 1e-12;

/// Side-of-line test with a fast path and exact fallback.
///
/// Evaluates the plain f64 cross product first and accepts it when it clears
/// a magnitude-scaled error bound. Only near-collinear inputs pay for the
/// exact predicate, which in practice is a small fraction of the calls made
/// while sliding.
///
/// # Arguments
///
/// * `start` - Line origin
/// * `end` - Point defining the line direction
/// * `point` - The point being classified
#[inline]
pub fn alignment_filtered(start: (f64, f64), end: (f64, f64), point: (f64, f64)) -> Alignment {
    // Fast path: simple cross product
    let acx = start.0 - point.0;
    let bcx = end.0 - point.0;
    let acy = start.1 - point.1;
    let bcy = end.1 - point.1;

    let det = acx * bcy - acy * bcx;

    // Compute error bound
    let det_sum = (acx * bcy).abs() + (acy * bcx).abs();

    if det.abs() > FILTER_EPSILON * det_sum {
        return if det > 0.0 {
            Alignment::Left
        } else {
            Alignment::Right
        };
    }

    // Fall back to exact arithmetic
    alignment(start, end, point)
}

// ============================================================================
// Ring-Level Predicates
// ============================================================================

/// Checks whether a vertex sequence is wound counter-clockwise.
///
/// Decides at the lowest-then-leftmost vertex, which is guaranteed convex,
/// using the exact orientation test. Accepts open (`N`) or closed (`N+1`,
/// first repeated) sequences.
pub fn is_ccw(points: &[(f64, f64)]) -> bool {
    let mut points = points;
    if points.len() > 1 && points[0] == points[points.len() - 1] {
        points = &points[..points.len() - 1];
    }
    if points.len() < 3 {
        return false;
    }

    let mut min_idx = 0;
    for (i, &(x, y)) in points.iter().enumerate() {
        let (min_x, min_y) = points[min_idx];
        if y < min_y || (y == min_y && x < min_x) {
            min_idx = i;
        }
    }

    let n = points.len();
    let prev = points[(min_idx + n - 1) % n];
    let curr = points[min_idx];
    let next = points[(min_idx + 1) % n];

    alignment(prev, curr, next).is_left()
}

/// Signed area of a vertex sequence via the shoelace formula.
///
/// Uses Kahan summation for numerical stability. Positive for
/// counter-clockwise winding, negative for clockwise. A closed sequence
/// (first vertex repeated at the end) contributes a zero term for the
/// duplicate, so open and closed inputs agree.
pub fn signed_area(points: &[(f64, f64)]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    let mut c = 0.0; // Compensation for lost low-order bits

    for i in 0..n {
        let j = (i + 1) % n;
        let term = points[i].0 * points[j].1 - points[j].0 * points[i].1;

        let y = term - c;
        let t = sum + y;
        c = (t - sum) - y;
        sum = t;
    }

    sum / 2.0
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_basic() {
        let start = (0.0, 0.0);
        let end = (1.0, 0.0);

        assert_eq!(alignment(start, end, (0.5, 1.0)), Alignment::Left);
        assert_eq!(alignment(start, end, (0.5, -1.0)), Alignment::Right);
    }

    #[test]
    fn test_alignment_collinear() {
        let a = (0.0, 0.0);
        let b = (1.0, 1.0);

        assert_eq!(alignment(a, b, (2.0, 2.0)), Alignment::On);
        assert_eq!(alignment(a, b, (-3.0, -3.0)), Alignment::On);
    }

    #[test]
    fn test_alignment_near_collinear() {
        // Near-collinear points that would be fragile with naive f64
        let a = (0.0, 0.0);
        let b = (1.0, 1.0);
        let c = (2.0, 2.0 + 1e-15);

        let result = alignment(a, b, c);
        assert!(
            result == Alignment::On || result == Alignment::Left,
            "expected On or Left, got {:?}",
            result
        );
    }

    #[test]
    fn test_alignment_filtered_fast_path() {
        let a = (0.0, 0.0);
        let b = (10.0, 0.0);

        assert_eq!(alignment_filtered(a, b, (5.0, 10.0)), Alignment::Left);
        assert_eq!(alignment_filtered(a, b, (5.0, -10.0)), Alignment::Right);
    }

    #[test]
    fn test_alignment_filtered_matches_exact() {
        let cases = [
            ((0.0, 0.0), (1.0, 0.0), (0.5, 0.0)),
            ((0.0, 0.0), (3.0, 1.0), (6.0, 2.0)),
            ((1.0, 1.0), (2.0, 2.0), (0.0, 0.5)),
        ];
        for (a, b, p) in cases {
            assert_eq!(alignment_filtered(a, b, p), alignment(a, b, p));
        }
    }

    #[test]
    fn test_alignment_methods() {
        assert!(Alignment::Left.is_left());
        assert!(!Alignment::Left.is_right());
        assert!(!Alignment::Left.is_on());

        assert!(Alignment::Right.is_right());
        assert!(!Alignment::Right.is_left());

        assert!(Alignment::On.is_on());
        assert!(!Alignment::On.is_left());
    }

    #[test]
    fn test_is_ccw() {
        let ccw_square = vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        assert!(is_ccw(&ccw_square));

        let cw_square = vec![(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)];
        assert!(!is_ccw(&cw_square));
    }

    #[test]
    fn test_is_ccw_closed_input() {
        let closed = vec![
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (0.0, 10.0),
            (0.0, 0.0),
        ];
        assert!(is_ccw(&closed));
    }

    #[test]
    fn test_signed_area() {
        let ccw_square = vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        assert!((signed_area(&ccw_square) - 100.0).abs() < 1e-10);

        let cw_square = vec![(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)];
        assert!((signed_area(&cw_square) + 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_signed_area_closed_matches_open() {
        let open = vec![(0.0, 0.0), (4.0, 0.0), (4.0, 3.0)];
        let closed = vec![(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 0.0)];
        assert!((signed_area(&open) - signed_area(&closed)).abs() < 1e-12);
    }

    #[test]
    fn test_extreme_coordinates() {
        // Very large coordinates
        let a = (1e10, 1e10);
        let b = (1e10 + 1.0, 1e10);
        let c = (1e10 + 0.5, 1e10 + 1.0);

        assert_eq!(alignment(a, b, c), Alignment::Left);

        // Very small coordinates
        let a = (1e-10, 1e-10);
        let b = (1e-10 + 1e-12, 1e-10);
        let c = (1e-10 + 5e-13, 1e-10 + 1e-12);

        let result = alignment(a, b, c);
        assert!(
            result == Alignment::Left || result == Alignment::On,
            "unexpected alignment: {:?}",
            result
        );
    }
}
