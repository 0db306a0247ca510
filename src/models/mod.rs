//! Domain models
//!
//! Snapshots of server payloads plus the values derived from them.

pub mod contest;
pub mod problem;
pub mod submission;

pub use contest::*;
pub use problem::*;
pub use submission::*;
