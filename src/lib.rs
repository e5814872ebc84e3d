#![forbid(unsafe_code)]

//! Rulecheck: composable validation of dynamically typed field values
//!
//! A [`ValidationGroup`] collects named values, each checked by a chain of
//! rules. Every failing rule records a message on its field, and the group
//! reports overall pass/fail plus every message in order.
//!
//! ```
//! use rulecheck::ValidationGroup;
//!
//! let mut vg = ValidationGroup::new();
//! vg.validate("", "username").required().alpha_dash();
//! vg.validate(30u8, "age").range(18, 120);
//!
//! assert!(!vg.passed());
//! assert_eq!(vg.errors(), vec!["username Can not be empty"]);
//! ```

pub mod config;
pub mod error;
pub mod rules;
pub mod types;
pub mod validation;

// Re-export error types for convenient access
pub use error::{ConfigError, RuleError, RulecheckError};

// Re-export core domain types for convenient access
pub use config::MessageTemplates;
pub use rules::Rule;
pub use types::{RuleName, Value};
pub use validation::{FieldValidation, ValidationGroup, Verdict};
