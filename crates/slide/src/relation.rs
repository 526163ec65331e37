//! Spatial relations between rings, tolerant of floating-point contact.
//!
//! The slide filter needs three questions answered about a trial placement:
//! do the rings touch at all, do their interiors overlap, and does one ring
//! cover the other? Exact DE-9IM predicates misclassify placements that
//! arithmetic has nudged off a shared boundary by a few ulps, so contact is
//! measured as boundary distance within tolerance and interior overlap as
//! clipped area above a threshold.

use geo::Intersects;
use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;

use nfp_orbit_core::signed_area;

use crate::geometry::{Point, Ring, Segment};

/// Distance from a point to a segment.
#[inline]
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

/// Checks if two segments properly cross (endpoints of each strictly on
/// opposite sides of the other).
fn segments_properly_intersect(s1: Segment, s2: Segment) -> bool {
    let side = |seg: Segment, p: Point| {
        nfp_orbit_core::alignment_filtered(seg.start.tuple(), seg.end.tuple(), p.tuple())
    };

    let d1 = side(s2, s1.start);
    let d2 = side(s2, s1.end);
    let d3 = side(s1, s2.start);
    let d4 = side(s1, s2.end);

    d1 != d2
        && d3 != d4
        && !d1.is_on()
        && !d2.is_on()
        && !d3.is_on()
        && !d4.is_on()
}

/// Minimum distance between two segments.
fn segment_distance(s1: Segment, s2: Segment) -> f64 {
    if segments_properly_intersect(s1, s2) {
        return 0.0;
    }
    point_segment_distance(s1.start, s2)
        .min(point_segment_distance(s1.end, s2))
        .min(point_segment_distance(s2.start, s1))
        .min(point_segment_distance(s2.end, s1))
}

/// Minimum distance between the boundaries of two rings.
fn boundary_distance(ring_a: &Ring, ring_b: &Ring) -> f64 {
    let mut min = f64::INFINITY;
    for a_edge in ring_a.edges() {
        for b_edge in ring_b.edges() {
            let d = segment_distance(a_edge, b_edge);
            if d < min {
                min = d;
            }
            if min == 0.0 {
                return 0.0;
            }
        }
    }
    min
}

/// Checks if two rings intersect: boundaries within `tolerance` of each
/// other, or one ring inside the other.
pub fn intersects(ring_a: &Ring, ring_b: &Ring, tolerance: f64) -> bool {
    if boundary_distance(ring_a, ring_b) <= tolerance {
        return true;
    }
    // Boundaries are apart; containment is the only remaining way to touch.
    ring_a.to_geo_polygon().intersects(&ring_b.to_geo_polygon())
}

/// Area of the intersection of two rings via polygon clipping.
pub fn intersection_area(ring_a: &Ring, ring_b: &Ring) -> f64 {
    let to_contour = |ring: &Ring| -> Vec<[f64; 2]> {
        (0..ring.vertex_count())
            .map(|i| {
                let p = ring.vertex(i);
                [p.x, p.y]
            })
            .collect()
    };

    let subject: Vec<Vec<[f64; 2]>> = vec![to_contour(ring_a)];
    let clip = to_contour(ring_b);

    let shapes = subject.overlay(&[clip], OverlayRule::Intersect, FillRule::NonZero);

    let mut total = 0.0;
    for shape in &shapes {
        for contour in shape {
            let pts: Vec<(f64, f64)> = contour.iter().map(|p| (p[0], p[1])).collect();
            total += signed_area(&pts).abs();
        }
    }
    total
}

/// Checks if the interiors of two rings overlap by more than `area_epsilon`.
///
/// Rings that merely share boundary have an intersection of zero area and do
/// not overlap.
pub fn overlaps(ring_a: &Ring, ring_b: &Ring, area_epsilon: f64) -> bool {
    intersection_area(ring_a, ring_b) > area_epsilon
}

/// Checks if `ring_a` is covered by `ring_b` (boundary contact allowed).
pub fn covered_by(ring_a: &Ring, ring_b: &Ring, area_epsilon: f64) -> bool {
    intersection_area(ring_a, ring_b) >= ring_a.area() - area_epsilon
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, size: f64) -> Ring {
        Ring::from_tuples(&[(x, y), (x + size, y), (x + size, y + size), (x, y + size)])
            .unwrap()
    }

    #[test]
    fn test_segment_distance() {
        let s1 = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let s2 = Segment::new(Point::new(0.0, 3.0), Point::new(10.0, 3.0));
        assert!((segment_distance(s1, s2) - 3.0).abs() < 1e-9);

        let s3 = Segment::new(Point::new(5.0, -1.0), Point::new(5.0, 1.0));
        assert_eq!(segment_distance(s1, s3), 0.0);
    }

    #[test]
    fn test_disjoint_squares() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(20.0, 0.0, 10.0);

        assert!(!intersects(&a, &b, 1e-6));
        assert!(!overlaps(&a, &b, 1e-9));
        assert!(!covered_by(&a, &b, 1e-9));
    }

    #[test]
    fn test_edge_sharing_squares_touch_without_overlap() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(10.0, 0.0, 10.0);

        assert!(intersects(&a, &b, 1e-6));
        assert!(!overlaps(&a, &b, 1e-9));
        assert!(!covered_by(&a, &b, 1e-9));
    }

    #[test]
    fn test_overlapping_squares() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(5.0, 5.0, 10.0);

        assert!(intersects(&a, &b, 1e-6));
        assert!(overlaps(&a, &b, 1e-9));
        assert!((intersection_area(&a, &b) - 25.0).abs() < 1e-6);
        assert!(!covered_by(&a, &b, 1e-9));
    }

    #[test]
    fn test_contained_square() {
        let outer = square(0.0, 0.0, 10.0);
        let inner = square(3.0, 3.0, 2.0);

        // Boundaries are a unit apart; containment must still register.
        assert!(intersects(&outer, &inner, 1e-6));
        assert!(overlaps(&outer, &inner, 1e-9));
        assert!(covered_by(&inner, &outer, 1e-9));
        assert!(!covered_by(&outer, &inner, 1e-9));
    }

    #[test]
    fn test_near_contact_within_tolerance() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(10.0 + 1e-8, 0.0, 10.0);

        assert!(intersects(&a, &b, 1e-6));
        assert!(!intersects(&a, &b, 1e-10));
    }
}
