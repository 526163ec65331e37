//! Feasible translation vectors for the orbiting phase of NFP generation.
//!
//! Given a stationary ring A, an orbiting ring B and their touching points,
//! this module produces the set of translations along which B can slide
//! while staying in contact with A, following the orbiting approach of
//! Burke et al. (2007), "Complete and robust no-fit polygon generation for
//! the irregular stock cutting problem".
//!
//! The computation runs in two stages:
//!
//! 1. **Candidate generation**: every touching point contributes potential
//!    translations derived from the edges meeting at the contact, together
//!    with the touching edge pairs used later for filtering.
//! 2. **Feasibility filtering**: each candidate is tested against every
//!    touching edge pair; candidates that would immediately drive B into
//!    A's interior are discarded. When angles tie and the test is
//!    inconclusive, the trimmed translation is applied to a scratch copy of
//!    B and the resulting placement is inspected directly.

use std::collections::BTreeSet;
use std::fmt;

use nfp_orbit_core::{
    alignment_filtered, approx_eq, approx_zero, definitely_greater, definitely_less, inner_angle,
    Error, Result,
};

use crate::geometry::{Point, Ring, Segment};
use crate::relation::{covered_by, intersects, overlaps};
use crate::touch::{TouchKind, TouchingPoint};
use crate::trim::trim_vector;

// ============================================================================
// Configuration
// ============================================================================

/// Tolerances for the slide computation.
#[derive(Debug, Clone)]
pub struct SlideConfig {
    /// Distance below which points and boundaries count as touching.
    pub contact_tolerance: f64,
    /// Tolerance for comparing angles (radians).
    pub angle_epsilon: f64,
    /// Tolerance for comparing normalized direction vectors.
    pub vector_epsilon: f64,
    /// Interior overlap below this area is treated as boundary contact.
    pub area_epsilon: f64,
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            contact_tolerance: 1e-6,
            angle_epsilon: 1e-8,
            vector_epsilon: 1e-8,
            area_epsilon: 1e-9,
        }
    }
}

// ============================================================================
// Translation vectors
// ============================================================================

/// Which generation rule produced a translation vector.
///
/// The names describe the geometric test at a touching point: for example
/// `BNextLeftOfANext` means B's forward edge endpoint lay left of A's
/// forward edge. Purely diagnostic; the filter never consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Provenance {
    /// Vertex contact, B's next vertex left of A's forward edge.
    BNextLeftOfANext,
    /// Vertex contact, B's next vertex right of A's forward edge.
    BNextRightOfANext,
    /// Vertex contact, B's next vertex on A's forward edge.
    BNextOnANext,
    /// Vertex contact, B's previous vertex right of A's forward edge.
    BPrevRightOfANext,
    /// Vertex contact, B's previous vertex on A's forward edge.
    BPrevOnANext,
    /// Vertex contact, B's next vertex left of A's backward edge.
    BNextLeftOfAPrev,
    /// Vertex contact, B's next vertex right of A's backward edge.
    BNextRightOfAPrev,
    /// Vertex contact, B's next vertex on A's backward edge.
    BNextOnAPrev,
    /// A B vertex rests on an A edge.
    BVertexOnAEdge,
    /// An A vertex rests on a B edge.
    AVertexOnBEdge,
}

/// A candidate translation of ring B.
///
/// `edge` is the polygon edge the translation was derived from and doubles
/// as the reference direction during feasibility filtering. `from_a` records
/// which ring contributed that edge.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TranslationVector {
    pub vector: Point,
    pub edge: Segment,
    pub from_a: bool,
    pub provenance: Provenance,
}

impl fmt::Display for TranslationVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} along {} edge {} [{:?}]",
            self.vector,
            if self.from_a { "A" } else { "B" },
            self.edge,
            self.provenance
        )
    }
}

/// Output of candidate generation.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    /// Potential translations, in touching-point order. Duplicates from
    /// different rules are kept; they carry distinct provenance.
    pub vectors: Vec<TranslationVector>,
    /// Touching edge pairs (A edge, B edge) from all contacts, oriented
    /// away from the touching point.
    pub touch_edges: Vec<(Segment, Segment)>,
    /// Indices of A vertices involved in any contact.
    pub touched_a: BTreeSet<usize>,
}

impl CandidateSet {
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn candidate_count(&self) -> usize {
        self.vectors.len()
    }
}

/// Feasible translations plus the contact bookkeeping an NFP orbit needs.
#[derive(Debug, Clone)]
pub struct FeasibleTranslations {
    pub vectors: Vec<TranslationVector>,
    /// Indices of A vertices involved in any contact.
    pub touched_a: BTreeSet<usize>,
}

// ============================================================================
// Candidate generation
// ============================================================================

/// Neighborhood of one touching point: the touching vertices and their ring
/// neighbors.
struct Contact {
    vertex_a: Point,
    prev_a: Point,
    next_a: Point,
    vertex_b: Point,
    prev_b: Point,
    next_b: Point,
}

impl Contact {
    fn new(ring_a: &Ring, ring_b: &Ring, a_index: usize, b_index: usize) -> Self {
        Self {
            vertex_a: ring_a.vertex(a_index),
            prev_a: ring_a.vertex(ring_a.prev_index(a_index)),
            next_a: ring_a.vertex(ring_a.next_index(a_index)),
            vertex_b: ring_b.vertex(b_index),
            prev_b: ring_b.vertex(ring_b.prev_index(b_index)),
            next_b: ring_b.vertex(ring_b.next_index(b_index)),
        }
    }
}

/// Touching edge pairs for one contact, oriented away from the touching
/// point, ordered (A edge, B edge).
fn touch_edge_pairs(kind: TouchKind, c: &Contact) -> [(Segment, Segment); 4] {
    match kind {
        TouchKind::Vertex => {
            let a1 = Segment::new(c.vertex_a, c.next_a);
            let a2 = Segment::new(c.vertex_a, c.prev_a);
            let b1 = Segment::new(c.vertex_b, c.next_b);
            let b2 = Segment::new(c.vertex_b, c.prev_b);
            [(a1, b1), (a1, b2), (a2, b1), (a2, b2)]
        }
        TouchKind::BOnA => {
            // The touching point is the B vertex; A's edge splits there.
            let a1 = Segment::new(c.vertex_b, c.vertex_a);
            let a2 = Segment::new(c.vertex_b, c.prev_a);
            let b1 = Segment::new(c.vertex_b, c.prev_b);
            let b2 = Segment::new(c.vertex_b, c.next_b);
            [(a1, b1), (a1, b2), (a2, b1), (a2, b2)]
        }
        TouchKind::AOnB => {
            // The touching point is the A vertex; B's edge splits there.
            let a1 = Segment::new(c.vertex_a, c.prev_a);
            let a2 = Segment::new(c.vertex_a, c.next_a);
            let b1 = Segment::new(c.vertex_a, c.vertex_b);
            let b2 = Segment::new(c.vertex_a, c.prev_b);
            [(a1, b1), (a2, b1), (a1, b2), (a2, b2)]
        }
    }
}

#[inline]
fn align(seg: Segment, point: Point) -> nfp_orbit_core::Alignment {
    alignment_filtered(seg.start.tuple(), seg.end.tuple(), point.tuple())
}

/// Candidates contributed by a vertex-vertex contact.
///
/// Three checks compare B's adjacent vertices against A's adjacent edges.
/// Each check that passes pushes either A's forward edge as a translation or
/// B's forward edge reversed, so that B either slides along A's boundary or
/// rolls its own edge along the contact.
fn vertex_candidates(c: &Contact, out: &mut Vec<TranslationVector>) {
    let a_forward = Segment::new(c.vertex_a, c.next_a);
    let a_backward = Segment::new(c.vertex_a, c.prev_a);
    let b_forward = Segment::new(c.vertex_b, c.next_b);

    let along_a = |provenance| TranslationVector {
        vector: c.next_a - c.vertex_a,
        edge: a_forward,
        from_a: true,
        provenance,
    };
    let along_b_reversed = |provenance| TranslationVector {
        vector: c.vertex_b - c.next_b,
        edge: b_forward,
        from_a: false,
        provenance,
    };

    // B's forward edge against A's forward edge.
    let side = align(a_forward, c.next_b);
    if side.is_left() {
        out.push(along_b_reversed(Provenance::BNextLeftOfANext));
    } else if side.is_right() {
        out.push(along_a(Provenance::BNextRightOfANext));
    } else {
        out.push(along_a(Provenance::BNextOnANext));
    }

    // B's backward edge against A's forward edge. Left means B's previous
    // edge blocks the slide; no candidate.
    let side = align(a_forward, c.prev_b);
    if side.is_right() {
        out.push(along_a(Provenance::BPrevRightOfANext));
    } else if side.is_on() {
        out.push(along_a(Provenance::BPrevOnANext));
    }

    // B's forward edge against A's backward edge.
    let side = align(a_backward, c.next_b);
    if side.is_left() {
        out.push(along_b_reversed(Provenance::BNextLeftOfAPrev));
    } else if side.is_right() {
        out.push(along_b_reversed(Provenance::BNextRightOfAPrev));
    } else {
        out.push(along_b_reversed(Provenance::BNextOnAPrev));
    }
}

/// Generates all potential translation vectors for the given touching
/// points.
///
/// Indices equal to the ring's vertex count refer to the closing vertex and
/// are folded to zero; larger indices are rejected. B vertices touched by
/// `BOnA` contacts slide along the touched A edge toward its end vertex; A
/// vertices touched by `AOnB` contacts push B along the touched B edge the
/// opposite way.
///
/// # Arguments
///
/// * `ring_a` - The stationary ring
/// * `ring_b` - The orbiting ring at its current position
/// * `touchers` - Touching points from [`find_touching_points`](crate::touch::find_touching_points)
///
/// # Returns
///
/// The candidate vectors, the touching edge pairs for filtering, and the
/// set of touched A vertex indices.
pub fn candidate_translations(
    ring_a: &Ring,
    ring_b: &Ring,
    touchers: &[TouchingPoint],
) -> Result<CandidateSet> {
    let n = ring_a.vertex_count();
    let m = ring_b.vertex_count();

    for t in touchers {
        if t.a_index > n || t.b_index > m {
            return Err(Error::InvalidTouchingPoint(format!(
                "indices ({}, {}) out of range for rings with {} and {} vertices",
                t.a_index, t.b_index, n, m
            )));
        }
    }

    let mut set = CandidateSet::default();

    for t in touchers {
        let a_index = if t.a_index == n { 0 } else { t.a_index };
        let b_index = if t.b_index == m { 0 } else { t.b_index };
        set.touched_a.insert(a_index);

        let contact = Contact::new(ring_a, ring_b, a_index, b_index);
        set.touch_edges
            .extend(touch_edge_pairs(t.kind, &contact));

        match t.kind {
            TouchKind::Vertex => vertex_candidates(&contact, &mut set.vectors),
            TouchKind::BOnA => {
                // Slide the touching B vertex along the rest of the A edge.
                set.vectors.push(TranslationVector {
                    vector: contact.vertex_a - contact.vertex_b,
                    edge: Segment::new(contact.vertex_b, contact.vertex_a),
                    from_a: true,
                    provenance: Provenance::BVertexOnAEdge,
                });
            }
            TouchKind::AOnB => {
                // Slide B so the touched B edge runs past the A vertex.
                set.vectors.push(TranslationVector {
                    vector: contact.vertex_a - contact.vertex_b,
                    edge: Segment::new(contact.vertex_a, contact.vertex_b),
                    from_a: false,
                    provenance: Provenance::AVertexOnBEdge,
                });
            }
        }
    }

    log::trace!(
        "candidate generation: {} vectors, {} touch edge pairs from {} touchers",
        set.vectors.len(),
        set.touch_edges.len(),
        touchers.len()
    );

    Ok(set)
}

// ============================================================================
// Feasibility filtering
// ============================================================================

/// Filters candidates down to translations that do not immediately drive
/// ring B into ring A.
///
/// Every candidate is tested against every touching edge pair. The edge
/// directions are normalized and classified against the candidate's own
/// edge direction; a pair constrains the candidate only when both its edges
/// fall strictly on the same side. The angles the pair's edges make with
/// the candidate edge then decide:
///
/// * angles equal: inconclusive. The candidate is trimmed, applied to B,
///   and kept only if the moved B touches A without interior overlap and
///   without either ring covering the other.
/// * candidate points along its edge: discarded when the pair's A-side
///   angle is nonzero and its B-side angle is larger.
/// * candidate points against its edge: discarded when the pair's B-side
///   angle is nonzero and smaller than the A-side angle.
pub fn filter_feasible(
    ring_a: &Ring,
    ring_b: &Ring,
    candidates: &CandidateSet,
    config: &SlideConfig,
) -> Vec<TranslationVector> {
    let origin = (0.0, 0.0);
    let mut feasible = Vec::new();

    'candidates: for v in &candidates.vectors {
        let norm_edge = v.edge.direction().normalized();
        let norm_vector = v.vector.normalized();

        for &(first, second) in &candidates.touch_edges {
            let norm_first = first.direction().normalized();
            let norm_second = second.direction().normalized();

            let side_first = alignment_filtered(origin, norm_edge.tuple(), norm_first.tuple());
            let side_second = alignment_filtered(origin, norm_edge.tuple(), norm_second.tuple());

            // Only pairs whose edges fall strictly on one side constrain
            // the candidate. Zero-length directions normalize to the
            // origin and land On, so degenerate edges never constrain.
            if side_first != side_second || side_first.is_on() {
                continue;
            }

            let angle_first = inner_angle(origin, norm_edge.tuple(), norm_first.tuple());
            let angle_second = inner_angle(origin, norm_edge.tuple(), norm_second.tuple());

            if approx_eq(angle_first, angle_second, config.angle_epsilon) {
                // The angle test cannot separate the edges. Move B by the
                // trimmed candidate and accept only sliding contact.
                let trimmed = trim_vector(ring_a, ring_b, v, config.contact_tolerance);
                let translated = ring_b.translated(trimmed.vector);

                let touching = intersects(&translated, ring_a, config.contact_tolerance)
                    && !overlaps(&translated, ring_a, config.area_epsilon)
                    && !covered_by(&translated, ring_a, config.area_epsilon)
                    && !covered_by(ring_a, &translated, config.area_epsilon);

                if !touching {
                    log::trace!("discarded by trial translation: {}", v);
                    continue 'candidates;
                }
            } else if norm_edge.approx_eq(norm_vector, config.vector_epsilon) {
                if !approx_zero(angle_first, config.angle_epsilon)
                    && definitely_greater(angle_second, angle_first, config.angle_epsilon)
                {
                    log::trace!("discarded, angle order along edge direction: {}", v);
                    continue 'candidates;
                }
            } else if !approx_zero(angle_second, config.angle_epsilon)
                && definitely_less(angle_second, angle_first, config.angle_epsilon)
            {
                log::trace!("discarded, angle order against edge direction: {}", v);
                continue 'candidates;
            }
        }

        feasible.push(v.clone());
    }

    log::debug!(
        "feasibility filter kept {} of {} candidates",
        feasible.len(),
        candidates.vectors.len()
    );

    feasible
}

/// Computes the feasible translation vectors for one orbit step.
///
/// Convenience wrapper running [`candidate_translations`] and
/// [`filter_feasible`] back to back.
pub fn feasible_translations(
    ring_a: &Ring,
    ring_b: &Ring,
    touchers: &[TouchingPoint],
    config: &SlideConfig,
) -> Result<FeasibleTranslations> {
    let candidates = candidate_translations(ring_a, ring_b, touchers)?;
    let vectors = filter_feasible(ring_a, ring_b, &candidates, config);
    Ok(FeasibleTranslations {
        vectors,
        touched_a: candidates.touched_a,
    })
}
