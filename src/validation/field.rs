#![forbid(unsafe_code)]

//! Validation of a single named value

use crate::config::MessageTemplates;
use crate::rules::{
    Alpha, AlphaDash, AlphaNumeric, Base64, Email, Ip, Length, Match, Max, MaxLength, Min,
    MinLength, Mobile, NoMatch, Numeric, Phone, Range, Required, Rule, Tel, ZipCode,
};
use crate::types::Value;
use crate::validation::Verdict;
use regex::Regex;
use std::sync::Arc;

/// One value under test, bound to the name used in its error messages
///
/// Every chained rule runs regardless of earlier failures, and each failure
/// appends `"<name> <message>"` to the error list. The value and name never
/// change after construction.
#[derive(Debug, Clone)]
pub struct FieldValidation {
    value: Value,
    name: String,
    errors: Vec<String>,
    templates: Arc<MessageTemplates>,
}

impl FieldValidation {
    /// Binds a value to a field name, using the process-wide templates
    pub fn new(value: impl Into<Value>, name: impl Into<String>) -> Self {
        Self::with_templates(value, name, MessageTemplates::shared())
    }

    /// Binds a value to a field name with an explicit template table
    pub fn with_templates(
        value: impl Into<Value>,
        name: impl Into<String>,
        templates: Arc<MessageTemplates>,
    ) -> Self {
        Self {
            value: value.into(),
            name: name.into(),
            errors: Vec::new(),
            templates,
        }
    }

    /// Apply any rule to the bound value
    pub fn check(&mut self, rule: &dyn Rule) -> &mut Self {
        if !rule.is_satisfied(&self.value) {
            tracing::debug!(field = %self.name, rule = %rule.name(), "rule not satisfied");
            let message = rule.message(&self.templates);
            self.errors.push(format!("{} {}", self.name, message));
        }
        self
    }

    pub fn required(&mut self) -> &mut Self {
        self.check(&Required)
    }

    pub fn min(&mut self, min: i64) -> &mut Self {
        self.check(&Min { min })
    }

    pub fn max(&mut self, max: i64) -> &mut Self {
        self.check(&Max { max })
    }

    pub fn range(&mut self, min: i64, max: i64) -> &mut Self {
        self.check(&Range::new(min, max))
    }

    /// Text is measured in characters, sequences in elements
    pub fn min_length(&mut self, min: usize) -> &mut Self {
        self.check(&MinLength { min })
    }

    pub fn max_length(&mut self, max: usize) -> &mut Self {
        self.check(&MaxLength { max })
    }

    pub fn length(&mut self, n: usize) -> &mut Self {
        self.check(&Length { n })
    }

    pub fn alpha(&mut self) -> &mut Self {
        self.check(&Alpha)
    }

    pub fn numeric(&mut self) -> &mut Self {
        self.check(&Numeric)
    }

    pub fn alpha_numeric(&mut self) -> &mut Self {
        self.check(&AlphaNumeric)
    }

    pub fn matches(&mut self, pattern: &Regex) -> &mut Self {
        self.check(&Match::new(pattern.clone()))
    }

    pub fn no_match(&mut self, pattern: &Regex) -> &mut Self {
        self.check(&NoMatch::new(pattern.clone()))
    }

    pub fn alpha_dash(&mut self) -> &mut Self {
        self.check(&AlphaDash::new())
    }

    pub fn email(&mut self) -> &mut Self {
        self.check(&Email::new())
    }

    pub fn ip(&mut self) -> &mut Self {
        self.check(&Ip::new())
    }

    pub fn base64(&mut self) -> &mut Self {
        self.check(&Base64::new())
    }

    pub fn mobile(&mut self) -> &mut Self {
        self.check(&Mobile::new())
    }

    pub fn tel(&mut self) -> &mut Self {
        self.check(&Tel::new())
    }

    /// Passes for either a mobile or a landline number
    pub fn phone(&mut self) -> &mut Self {
        self.check(&Phone::new())
    }

    pub fn zip_code(&mut self) -> &mut Self {
        self.check(&ZipCode::new())
    }

    /// Returns true if no rule has failed
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns every failure message in the order the rules were applied
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn verdict(&self) -> Verdict {
        Verdict {
            passed: self.passed(),
            errors: self.errors.clone(),
        }
    }
}
