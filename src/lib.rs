//! Vgpost computes the Void Growth Index (VGI), a micromechanical metric for
//! the prediction of ductile fracture, from the results of finite element
//! simulations, and correlates the computed VGI histories against
//! experimentally observed failure points.
//!
//! The input data are histories of von Mises equivalent stress, hydrostatic
//! pressure, and equivalent plastic strain at a set of spatial locations
//! (nodes, elements, or integration points), extracted beforehand from the
//! simulation database by an external tool. This crate performs no finite
//! element assembly or solving.
//!
//! # Organization
//!
//! * [base] -- data model: field histories, load histories, specimen
//!   strategies, and the analysis configuration
//! * [vgi] -- the VGI integrator: triaxiality, monotonic and cyclic variants,
//!   and the deterministic (length-scale) narrowing
//! * [correlation] -- the failure correlator: nearest-step search and
//!   extraction of the failure VGI

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod correlation;
pub mod prelude;
pub mod vgi;
