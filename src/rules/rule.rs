#![forbid(unsafe_code)]

//! Core Rule trait

use crate::config::MessageTemplates;
use crate::types::{RuleName, Value};

/// Trait that all rules must implement
///
/// A rule is a predicate over a [`Value`] plus a message explaining what the
/// predicate requires. `is_satisfied` must be total: an input the rule has
/// no meaning for is simply not satisfied. The trait is `Send + Sync` so
/// rules and the compiled patterns they hold can be shared freely.
pub trait Rule: Send + Sync {
    /// Returns the stable name of this rule
    fn name(&self) -> RuleName;

    /// Returns true if the value meets the constraint
    fn is_satisfied(&self, value: &Value) -> bool;

    /// Renders the failure message from the given template table
    ///
    /// Rules with parameters override this to pass them as positional
    /// arguments.
    fn message(&self, templates: &MessageTemplates) -> String {
        templates.render(self.name(), &[])
    }

    /// Renders the failure message from the process-wide template table
    fn default_message(&self) -> String {
        self.message(MessageTemplates::global())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EvenRule;

    impl Rule for EvenRule {
        fn name(&self) -> RuleName {
            RuleName::Numeric
        }

        fn is_satisfied(&self, value: &Value) -> bool {
            value.as_i128().is_some_and(|v| v % 2 == 0)
        }
    }

    #[test]
    fn test_rule_trait_implementation() {
        let rule = EvenRule;
        assert!(rule.is_satisfied(&Value::from(4u64)));
        assert!(!rule.is_satisfied(&Value::from(3i8)));
        assert!(!rule.is_satisfied(&Value::from("4")));
        assert_eq!(
            rule.message(&MessageTemplates::new()),
            "Must be valid numeric characters"
        );
    }

    #[test]
    fn test_rule_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Box<dyn Rule>>();
        assert_sync::<Box<dyn Rule>>();
    }
}
