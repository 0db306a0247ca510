//! Utility functions

pub mod time;
pub mod validation;

pub use time::{Clock, DurationParts, ManualClock, SystemClock, duration_parts, millis_until};
pub use validation::{validate_dob, validate_login, validate_mobile};
