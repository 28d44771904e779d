#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

//! # phonon-params Library
//!
//! This library defines the [`ParameterSet`] configuration record shared by the
//! stages of a phonon analysis pipeline. Construction fills every field with a
//! documented default; fields with invariants are guarded by validated setters
//! that reject bad values with a [`ParameterError`] instead of deferring the
//! failure to a downstream solver.

mod bands;
mod parameters;
mod ranges;

// Re-export key public types
pub use bands::BandSegment;
pub use parameters::{IntegrationMethod, ParameterError, ParameterSet, PowerSpectraAlgorithm};
pub use ranges::{linspace, linspace_usize, q_vector_from};
