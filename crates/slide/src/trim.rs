//! Translation trimming against first re-contact.
//!
//! A feasible translation vector taken at full length may drive the orbiting
//! ring through the stationary ring. Trimming shortens the vector to the
//! distance at which the rings would first touch again: every B vertex is
//! cast along the translation direction against A's edges, and every A
//! vertex is cast along the reverse direction against B's edges. The
//! shortest strike inside the vector's length wins.

use crate::geometry::{Point, Ring, Segment};
use crate::sliding::TranslationVector;

/// Intersects the ray `origin + t * dir` (t >= 0) with a segment.
///
/// Returns the ray parameter `t` of the hit, or `None` when the ray misses
/// or runs parallel to the segment. `dir` is expected to be normalized so
/// `t` is a distance.
fn ray_segment_intersection(origin: Point, dir: Point, seg: Segment, tol: f64) -> Option<f64> {
    let seg_dir = seg.direction();
    let denom = dir.cross(seg_dir);
    if denom.abs() < tol {
        return None;
    }

    let diff = seg.start - origin;
    let t = diff.cross(seg_dir) / denom;
    let u = diff.cross(dir) / denom;

    if t >= -tol && u >= -tol && u <= 1.0 + tol {
        Some(t.max(0.0))
    } else {
        None
    }
}

/// Trims `vector` so that translating ring B by it does not pass through
/// ring A.
///
/// Strikes closer than `tolerance` are ignored: the rings already touch, and
/// the current contact would otherwise trim every vector to zero. A strike
/// at the vector's full length is likewise no reason to shorten it. The
/// vector's edge and provenance are preserved; only the length changes.
pub fn trim_vector(
    ring_a: &Ring,
    ring_b: &Ring,
    vector: &TranslationVector,
    tolerance: f64,
) -> TranslationVector {
    let len = vector.vector.length();
    if len < tolerance {
        return vector.clone();
    }
    let dir = vector.vector * (1.0 / len);

    let a_edges = ring_a.edges();
    let b_edges = ring_b.edges();
    let mut shortest = len;

    // B vertices travel along the vector; test them against A's edges.
    for j in 0..ring_b.vertex_count() {
        let origin = ring_b.vertex(j);
        for &a_edge in &a_edges {
            if let Some(t) = ray_segment_intersection(origin, dir, a_edge, tolerance) {
                if t > tolerance && t < shortest - tolerance {
                    shortest = t;
                }
            }
        }
    }

    // Relative to B, A's vertices travel the opposite way.
    let rev = -dir;
    for i in 0..ring_a.vertex_count() {
        let origin = ring_a.vertex(i);
        for &b_edge in &b_edges {
            if let Some(t) = ray_segment_intersection(origin, rev, b_edge, tolerance) {
                if t > tolerance && t < shortest - tolerance {
                    shortest = t;
                }
            }
        }
    }

    if shortest < len {
        log::trace!(
            "trimmed translation {} from {} to {}",
            vector.vector,
            len,
            shortest
        );
    }

    TranslationVector {
        vector: dir * shortest,
        ..vector.clone()
    }
}
