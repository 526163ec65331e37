//! Touching-point detection between a stationary ring and an orbiting ring.
//!
//! A touching point is a place where the boundaries of ring A (stationary)
//! and ring B (orbiting) meet without the interiors overlapping. Three kinds
//! exist: coincident vertices, a B vertex interior to an A edge, and an A
//! vertex interior to a B edge. Pure edge-edge overlap needs no kind of its
//! own: collinear touching edges always share at least one vertex-on-edge or
//! vertex-on-vertex incidence, which this scan reports.

use crate::geometry::{Point, Ring, Segment};

/// Kind of contact between the two rings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TouchKind {
    /// A vertex of A coincides with a vertex of B.
    Vertex,
    /// A vertex of A lies in the interior of a B edge.
    AOnB,
    /// A vertex of B lies in the interior of an A edge.
    BOnA,
}

/// A single point of contact between ring A and ring B.
///
/// For `Vertex` both indices name the coincident vertices. For `BOnA`,
/// `a_index` names the *end* vertex of the touched A edge and `b_index` the
/// touching B vertex; `AOnB` is symmetric with `b_index` naming the end
/// vertex of the touched B edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TouchingPoint {
    pub a_index: usize,
    pub b_index: usize,
    pub kind: TouchKind,
}

/// Distance from a point to a segment.
fn point_segment_distance(point: Point, seg: Segment) -> f64 {
    let d = seg.direction();
    let len_sq = d.dot(d);
    if len_sq < 1e-20 {
        return (point - seg.start).length();
    }
    let t = ((point - seg.start).dot(d) / len_sq).clamp(0.0, 1.0);
    let proj = seg.start + d * t;
    (point - proj).length()
}

/// Checks if a point lies on a segment (within tolerance, endpoints
/// included).
fn point_on_segment(point: Point, seg: Segment, tol: f64) -> bool {
    point_segment_distance(point, seg) < tol
}

/// Finds all touching points between `ring_a` and `ring_b`.
///
/// Scans every A index against every B index, so the emission order is
/// deterministic: outer loop over A, inner loop over B. Each coincident
/// vertex pair is reported exactly once as `Vertex`; the vertex-on-edge
/// checks exclude contact at the edge's end vertex, which the vertex check
/// already covers. Indices in the result are logical (`< vertex_count()`).
///
/// # Arguments
///
/// * `ring_a` - The stationary ring
/// * `ring_b` - The orbiting ring at its current position
/// * `tolerance` - Distance tolerance for coincidence and on-edge tests
pub fn find_touching_points(ring_a: &Ring, ring_b: &Ring, tolerance: f64) -> Vec<TouchingPoint> {
    let mut touchers = Vec::new();

    let n = ring_a.vertex_count();
    let m = ring_b.vertex_count();
    let a_pts = ring_a.points();
    let b_pts = ring_b.points();

    for i in 0..n {
        let next_i = i + 1;
        let a_edge = Segment::new(a_pts[i], a_pts[next_i]);

        for j in 0..m {
            let next_j = j + 1;
            let b_edge = Segment::new(b_pts[j], b_pts[next_j]);

            if a_pts[i].approx_eq(b_pts[j], tolerance) {
                touchers.push(TouchingPoint {
                    a_index: i,
                    b_index: j,
                    kind: TouchKind::Vertex,
                });
            } else if !a_pts[next_i].approx_eq(b_pts[j], tolerance)
                && point_on_segment(b_pts[j], a_edge, tolerance)
            {
                touchers.push(TouchingPoint {
                    a_index: if next_i == n { 0 } else { next_i },
                    b_index: j,
                    kind: TouchKind::BOnA,
                });
            } else if !b_pts[next_j].approx_eq(a_pts[i], tolerance)
                && point_on_segment(a_pts[i], b_edge, tolerance)
            {
                touchers.push(TouchingPoint {
                    a_index: i,
                    b_index: if next_j == m { 0 } else { next_j },
                    kind: TouchKind::AOnB,
                });
            }
        }
    }

    log::trace!(
        "touch scan: {} touching points between {}-gon and {}-gon",
        touchers.len(),
        n,
        m
    );

    touchers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_on_segment() {
        let seg = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));

        assert!(point_on_segment(Point::new(5.0, 0.0), seg, 1e-6));
        assert!(point_on_segment(Point::new(0.0, 0.0), seg, 1e-6));
        assert!(point_on_segment(Point::new(10.0, 0.0), seg, 1e-6));
        assert!(!point_on_segment(Point::new(5.0, 1.0), seg, 1e-6));
        assert!(!point_on_segment(Point::new(11.0, 0.0), seg, 1e-6));
    }

    #[test]
    fn test_corner_touch_is_single_vertex_contact() {
        let a = Ring::from_tuples(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
        let b = Ring::from_tuples(&[(1.0, -1.0), (2.0, -1.0), (2.0, 0.0), (1.0, 0.0)]).unwrap();

        let touchers = find_touching_points(&a, &b, 1e-6);
        assert_eq!(
            touchers,
            vec![TouchingPoint {
                a_index: 1,
                b_index: 3,
                kind: TouchKind::Vertex,
            }]
        );
    }

    #[test]
    fn test_square_resting_on_block() {
        // B's bottom edge lies along part of A's top edge: one coincident
        // corner plus one B vertex interior to A's top edge.
        let a = Ring::from_tuples(&[(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)]).unwrap();
        let b = Ring::from_tuples(&[(0.0, 1.0), (1.0, 1.0), (1.0, 2.0), (0.0, 2.0)]).unwrap();

        let touchers = find_touching_points(&a, &b, 1e-6);
        assert_eq!(
            touchers,
            vec![
                TouchingPoint {
                    a_index: 3,
                    b_index: 1,
                    kind: TouchKind::BOnA,
                },
                TouchingPoint {
                    a_index: 3,
                    b_index: 0,
                    kind: TouchKind::Vertex,
                },
            ]
        );
    }

    #[test]
    fn test_partial_edge_overlap() {
        // B's left edge overlaps the upper part of A's right edge with no
        // coincident vertices: one BOnA and one AOnB contact.
        let a = Ring::from_tuples(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]).unwrap();
        let b = Ring::from_tuples(&[(2.0, 0.5), (4.0, 0.5), (4.0, 3.0), (2.0, 3.0)]).unwrap();

        let touchers = find_touching_points(&a, &b, 1e-6);
        assert_eq!(
            touchers,
            vec![
                TouchingPoint {
                    a_index: 2,
                    b_index: 0,
                    kind: TouchKind::BOnA,
                },
                TouchingPoint {
                    a_index: 2,
                    b_index: 0,
                    kind: TouchKind::AOnB,
                },
            ]
        );
    }

    #[test]
    fn test_separated_rings_have_no_touchers() {
        let a = Ring::from_tuples(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
        let b = Ring::from_tuples(&[(5.0, 0.0), (6.0, 0.0), (6.0, 1.0), (5.0, 1.0)]).unwrap();

        assert!(find_touching_points(&a, &b, 1e-6).is_empty());
    }

    #[test]
    fn test_tolerance_bounds_detection() {
        let a = Ring::from_tuples(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
        // Nudged off the corner by more than tolerance
        let off = Ring::from_tuples(&[(1.0, -1.0), (2.0, -1.0), (2.0, -1e-3), (1.0, -1e-3)])
            .unwrap();
        assert!(find_touching_points(&a, &off, 1e-6).is_empty());

        // Nudged by less than tolerance: still a vertex contact
        let near = Ring::from_tuples(&[(1.0, -1.0), (2.0, -1.0), (2.0, -1e-8), (1.0, -1e-8)])
            .unwrap();
        let touchers = find_touching_points(&a, &near, 1e-6);
        assert_eq!(touchers.len(), 1);
        assert_eq!(touchers[0].kind, TouchKind::Vertex);
    }
}
