//! Angle measurement and tolerance comparisons.
//!
//! Feasibility decisions compare the opening angles between a candidate
//! translation and the edges around a touching point. Angles are measured as
//! the non-reflex angle between two rays sharing a joint, and every
//! comparison against a tolerance goes through the named comparators here so
//! that the tolerance in use is always explicit at the call site.

/// Non-reflex angle at `joint` between the rays toward `end1` and `end2`.
///
/// Returns a value in `[0, PI]`. The cosine is clamped before `acos`, so
/// nearly parallel rays cannot produce NaN from rounding above 1. A ray of
/// zero length carries no direction; the angle is reported as 0.
pub fn inner_angle(joint: (f64, f64), end1: (f64, f64), end2: (f64, f64)) -> f64 {
    let d1 = (end1.0 - joint.0, end1.1 - joint.1);
    let d2 = (end2.0 - joint.0, end2.1 - joint.1);

    let m1 = (d1.0 * d1.0 + d1.1 * d1.1).sqrt();
    let m2 = (d2.0 * d2.0 + d2.1 * d2.1).sqrt();
    if m1 == 0.0 || m2 == 0.0 {
        return 0.0;
    }

    let cos = ((d1.0 * d2.0 + d1.1 * d2.1) / (m1 * m2)).clamp(-1.0, 1.0);
    cos.acos()
}

/// True if `a` and `b` differ by at most `eps`.
#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

/// True if `a` is within `eps` of zero.
#[inline]
pub fn approx_zero(a: f64, eps: f64) -> bool {
    a.abs() <= eps
}

/// True if `a` exceeds `b` by more than `eps`.
#[inline]
pub fn definitely_greater(a: f64, b: f64, eps: f64) -> bool {
    a - b > eps
}

/// True if `a` falls short of `b` by more than `eps`.
#[inline]
pub fn definitely_less(a: f64, b: f64, eps: f64) -> bool {
    b - a > eps
}
