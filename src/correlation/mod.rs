//! Implements the failure correlator
//!
//! Maps experimentally observed failure values (displacements or fracture
//! parameters) onto simulation steps by a nearest-match search over the load
//! history, then extracts the matching rows of the VGI history.

mod failure_match;
mod failure_vgi;
mod report;
pub use crate::correlation::failure_match::*;
pub use crate::correlation::failure_vgi::*;
pub use crate::correlation::report::*;
