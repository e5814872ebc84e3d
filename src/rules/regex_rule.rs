#![forbid(unsafe_code)]

//! Regex-based rules
//!
//! `Match` tests the textual rendering of a value against a compiled
//! pattern; `NoMatch` is its negation. Values that are not text are
//! rendered with their `Display` form before matching, so `Match` is the
//! one rule family that can be satisfied by any value category.

use crate::config::MessageTemplates;
use crate::error::RuleError;
use crate::rules::Rule;
use crate::types::{RuleName, Value};
use regex::Regex;

/// Requires the value's text to match a regular expression
#[derive(Debug, Clone)]
pub struct Match {
    pattern: Regex,
}

impl Match {
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }

    /// Compile a pattern into a Match rule
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidRegex` if the pattern does not compile.
    pub fn from_pattern(pattern: &str) -> Result<Self, RuleError> {
        let pattern = Regex::new(pattern).map_err(|e| {
            RuleError::InvalidRegex(format!("Failed to compile pattern '{}': {}", pattern, e))
        })?;
        Ok(Self::new(pattern))
    }

    /// Returns the pattern source
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Rule for Match {
    fn name(&self) -> RuleName {
        RuleName::Match
    }

    fn is_satisfied(&self, value: &Value) -> bool {
        match value.as_str() {
            Some(text) => self.pattern.is_match(text),
            None => self.pattern.is_match(&value.to_string()),
        }
    }

    fn message(&self, templates: &MessageTemplates) -> String {
        templates.render(self.name(), &[&self.as_str()])
    }
}

/// Requires the value's text to not match a regular expression
#[derive(Debug, Clone)]
pub struct NoMatch {
    inner: Match,
}

impl NoMatch {
    pub fn new(pattern: Regex) -> Self {
        Self {
            inner: Match::new(pattern),
        }
    }

    /// Compile a pattern into a NoMatch rule
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidRegex` if the pattern does not compile.
    pub fn from_pattern(pattern: &str) -> Result<Self, RuleError> {
        Ok(Self {
            inner: Match::from_pattern(pattern)?,
        })
    }

    /// Returns the pattern source
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }
}

impl Rule for NoMatch {
    fn name(&self) -> RuleName {
        RuleName::NoMatch
    }

    fn is_satisfied(&self, value: &Value) -> bool {
        !self.inner.is_satisfied(value)
    }

    fn message(&self, templates: &MessageTemplates) -> String {
        templates.render(self.name(), &[&self.as_str()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_text() {
        let rule = Match::from_pattern(r"^\w+@\w+\.\w+$").unwrap();
        assert!(!rule.is_satisfied(&Value::from("suchuangji@gmail")));
        assert!(rule.is_satisfied(&Value::from("suchuangji@gmail.com")));
    }

    #[test]
    fn test_match_renders_non_text() {
        let digits = Match::from_pattern("^[0-9]+$").unwrap();
        assert!(digits.is_satisfied(&Value::from(12345u32)));
        assert!(!digits.is_satisfied(&Value::from(-1)));

        let nil = Match::from_pattern("^<nil>$").unwrap();
        assert!(nil.is_satisfied(&Value::Null));

        let list = Match::from_pattern(r"^\[a b\]$").unwrap();
        assert!(list.is_satisfied(&Value::from(vec!["a", "b"])));
    }

    #[test]
    fn test_no_match_is_negation() {
        let rule = NoMatch::from_pattern(r"[^\w\d]").unwrap();
        assert!(!rule.is_satisfied(&Value::from("123@gmail")));
        assert!(rule.is_satisfied(&Value::from("123gmail")));

        let positive = Match::from_pattern(r"[^\w\d]").unwrap();
        for text in ["123@gmail", "123gmail", "", "a b"] {
            let value = Value::from(text);
            assert_ne!(positive.is_satisfied(&value), rule.is_satisfied(&value));
        }
    }

    #[test]
    fn test_invalid_pattern() {
        let result = Match::from_pattern("[unclosed");
        assert!(matches!(result, Err(RuleError::InvalidRegex(_))));
        assert!(NoMatch::from_pattern("(").is_err());
    }

    #[test]
    fn test_messages_include_pattern() {
        let templates = MessageTemplates::new();
        let rule = Match::from_pattern("^a+$").unwrap();
        assert_eq!(rule.message(&templates), "Must match ^a+$");
        let rule = NoMatch::from_pattern("^a+$").unwrap();
        assert_eq!(rule.message(&templates), "Must not match ^a+$");
    }
}
