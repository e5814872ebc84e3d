#![forbid(unsafe_code)]

//! Aggregation of many field validations

use crate::config::MessageTemplates;
use crate::types::Value;
use crate::validation::{FieldValidation, Verdict};
use std::sync::Arc;

/// An ordered collection of field validations queried as one
///
/// The group passes iff every member passes. Errors are reported member by
/// member in registration order. `clear` empties the group so it can be
/// reused.
#[derive(Debug, Clone)]
pub struct ValidationGroup {
    fields: Vec<FieldValidation>,
    templates: Arc<MessageTemplates>,
}

impl ValidationGroup {
    /// Creates an empty group that renders messages with the process-wide templates
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            templates: MessageTemplates::shared(),
        }
    }

    /// Creates an empty group with its own template table
    pub fn with_templates(templates: MessageTemplates) -> Self {
        Self {
            fields: Vec::new(),
            templates: Arc::new(templates),
        }
    }

    /// Registers a value for validation and returns it for rule chaining
    pub fn validate(
        &mut self,
        value: impl Into<Value>,
        name: impl Into<String>,
    ) -> &mut FieldValidation {
        let index = self.fields.len();
        self.fields.push(FieldValidation::with_templates(
            value,
            name,
            Arc::clone(&self.templates),
        ));
        &mut self.fields[index]
    }

    /// Returns true if every registered field passed
    pub fn passed(&self) -> bool {
        self.fields.iter().all(FieldValidation::passed)
    }

    /// Returns every member's errors, members in registration order
    pub fn errors(&self) -> Vec<String> {
        self.fields
            .iter()
            .flat_map(|field| field.errors().iter().cloned())
            .collect()
    }

    /// Removes every registered field
    pub fn clear(&mut self) {
        tracing::trace!(fields = self.fields.len(), "clearing validation group");
        self.fields.clear();
    }

    pub fn fields(&self) -> &[FieldValidation] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn verdict(&self) -> Verdict {
        Verdict {
            passed: self.passed(),
            errors: self.errors(),
        }
    }
}

impl Default for ValidationGroup {
    fn default() -> Self {
        Self::new()
    }
}
