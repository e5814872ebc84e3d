//! Test utilities for rulecheck integration tests

use rulecheck::{MessageTemplates, ValidationGroup};

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// A group with default templates that never touches the process-wide table
pub fn group() -> ValidationGroup {
    ValidationGroup::with_templates(MessageTemplates::new())
}
