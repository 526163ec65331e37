//! # NFP-Orbit Slide
//!
//! Sliding-contact translation computation for no-fit polygon (NFP)
//! generation by orbiting, after Burke et al. (2007).
//!
//! Given a stationary ring and an orbiting ring in touching contact, this
//! crate finds where they touch, derives the translations that keep the
//! orbiting ring sliding along the stationary one, filters out translations
//! that would drive it into the interior, and trims the survivors to the
//! next contact.
//!
//! ## Features
//!
//! - Touching-point detection (vertex-vertex and vertex-on-edge)
//! - Candidate translation generation from touching edge geometry
//! - Feasibility filtering with exact-arithmetic orientation tests
//! - Trial translation fallback for ambiguous contacts
//! - Vector trimming against the first re-contact
//!
//! ## Quick Start
//!
//! ```rust
//! use nfp_orbit_slide::{feasible_translations, find_touching_points, Ring, SlideConfig};
//!
//! // A unit square with another square hanging off its lower-right corner.
//! let stationary = Ring::from_tuples(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
//! let orbiting = Ring::from_tuples(&[(1.0, -1.0), (2.0, -1.0), (2.0, 0.0), (1.0, 0.0)]).unwrap();
//!
//! let config = SlideConfig::default();
//! let touchers = find_touching_points(&stationary, &orbiting, config.contact_tolerance);
//! let result = feasible_translations(&stationary, &orbiting, &touchers, &config).unwrap();
//!
//! // The orbiting square can slide up along the stationary one.
//! assert!(!result.vectors.is_empty());
//! for v in &result.vectors {
//!     println!("can slide by {}", v.vector);
//! }
//! ```

pub mod geometry;
pub mod relation;
pub mod sliding;
pub mod touch;
pub mod trim;

pub use geometry::{Point, Ring, Segment};
pub use relation::{covered_by, intersection_area, intersects, overlaps};
pub use sliding::{
    candidate_translations, feasible_translations, filter_feasible, CandidateSet,
    FeasibleTranslations, Provenance, SlideConfig, TranslationVector,
};
pub use touch::{find_touching_points, TouchKind, TouchingPoint};
pub use trim::trim_vector;
pub use nfp_orbit_core::{Alignment, Error, Result};
