#![forbid(unsafe_code)]

//! Field validation contexts and their aggregation into groups

pub mod field;
pub mod group;

pub use field::FieldValidation;
pub use group::ValidationGroup;

use serde::{Deserialize, Serialize};

/// Outcome of a field or group validation, detached from the validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// True if no rule failed
    pub passed: bool,

    /// Failure messages in the order they were recorded
    pub errors: Vec<String>,
}
