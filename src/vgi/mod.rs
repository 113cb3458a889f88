//! Implements the void growth index integrator
//!
//! The VGI at a spatial location is the integral of `exp(1.5 T)` over the
//! equivalent plastic strain, where `T` is the stress triaxiality. The integral
//! is approximated with the trapezoidal rule over the recorded steps.

mod cyclic;
mod deterministic;
mod monotonic;
mod triaxiality;
pub use crate::vgi::cyclic::*;
pub use crate::vgi::deterministic::*;
pub use crate::vgi::monotonic::*;
pub use crate::vgi::triaxiality::*;

use russell_lab::Matrix;
use std::collections::HashMap;

/// Defines a keyed collection of VGI variants computed at all data locations
///
/// Keys identify the kind of location the columns refer to; see
/// [VGI_KEY_INTEGRATION_POINT] and [VGI_KEY_NODAL_EXTRAPOLATED].
pub type VgiSet = HashMap<String, Matrix>;

/// Key of the integration-point VGI in a [VgiSet]
pub const VGI_KEY_INTEGRATION_POINT: &str = "ELEM_IP";

/// Key of the nodal-extrapolated VGI in a [VgiSet]
pub const VGI_KEY_NODAL_EXTRAPOLATED: &str = "ELEM_NODAL";
