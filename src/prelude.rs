//! Makes available common structures needed for post-processing
//!
//! You may write `use vgpost::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{AnalysisConfig, AnalysisInput, FieldHistory, LoadConvention, LoadHistory};
pub use crate::base::{LocationKind, Material, Specimen};
pub use crate::correlation::{extract_failure_vgi, extract_failure_vgi_set, find_failure_steps};
pub use crate::correlation::{FailureMatch, FailureReport};
pub use crate::vgi::{calc_all_monotonic_vgi, calc_cyclic_vgi, calc_deterministic_vgi, calc_monotonic_vgi};
pub use crate::vgi::{CyclicVgi, DeterministicVgi, VgiSet};
