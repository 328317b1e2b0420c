//! Command handlers for the pantry-tools binary.
//!
//! Each handler loads the catalog, runs the corresponding library operation,
//! renders the result in the requested format, and returns the process exit
//! code.

mod browse;
mod compare;
mod recommend;

pub use browse::run_browse;
pub use compare::run_compare;
pub use recommend::run_recommend;
