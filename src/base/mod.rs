//! Defines the data model for post-processing: field histories, load histories,
//! specimen strategies, and the analysis configuration

mod config;
mod field_history;
mod load_history;
mod specimen;
pub use crate::base::config::*;
pub use crate::base::field_history::*;
pub use crate::base::load_history::*;
pub use crate::base::specimen::*;

/// Defines the default directory for test files
pub const DEFAULT_TEST_DIR: &str = "/tmp/vgpost";
