//! # NFP-Orbit Core
//!
//! Numeric foundations shared by the nfp-orbit crates.
//!
//! The sliding (orbiting) approach to no-fit polygon generation rests on a
//! small set of numeric decisions: which side of a directed edge a point lies
//! on, how wide the angle between two rays is, and whether two measurements
//! agree within a tolerance. This crate provides those pieces:
//!
//! - **Alignment predicates**: [`robust::alignment`],
//!   [`robust::alignment_filtered`] - exact side-of-line tests backed by
//!   Shewchuk's adaptive arithmetic
//! - **Ring predicates**: [`robust::is_ccw`], [`robust::signed_area`]
//! - **Angles**: [`angle::inner_angle`] and the epsilon comparators
//! - **Errors**: [`Error`], [`Result`]
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod angle;
pub mod error;
pub mod robust;

// Re-exports
pub use angle::{approx_eq, approx_zero, definitely_greater, definitely_less, inner_angle};
pub use error::{Error, Result};
pub use robust::{alignment, alignment_filtered, is_ccw, orient2d_raw, signed_area, Alignment};
