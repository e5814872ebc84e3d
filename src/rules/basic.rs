#![forbid(unsafe_code)]

//! Primitive rules: presence, numeric bounds, length and character classes

use crate::config::MessageTemplates;
use crate::rules::Rule;
use crate::types::{RuleName, Value, ZERO_TIME_SECS};

/// Fails for the empty or zero representative of each value category
///
/// `false` counts as empty, as does the zero time and an empty sequence.
/// A non-empty sequence passes whatever its elements are.
#[derive(Debug, Clone, Copy, Default)]
pub struct Required;

impl Rule for Required {
    fn name(&self) -> RuleName {
        RuleName::Required
    }

    fn is_satisfied(&self, value: &Value) -> bool {
        match value {
            Value::Null | Value::Other(_) => false,
            Value::Bool(b) => *b,
            Value::Str(s) => !s.is_empty(),
            Value::Seq(items) => !items.is_empty(),
            Value::Time(t) => t.timestamp() != ZERO_TIME_SECS || t.timestamp_subsec_nanos() != 0,
            other => {
                if let Some(i) = other.as_i128() {
                    i != 0
                } else {
                    other.as_f64().is_some_and(|f| f != 0.0)
                }
            }
        }
    }
}

/// Requires a number to be at least `min`
#[derive(Debug, Clone, Copy)]
pub struct Min {
    pub min: i64,
}

impl Rule for Min {
    fn name(&self) -> RuleName {
        RuleName::Min
    }

    fn is_satisfied(&self, value: &Value) -> bool {
        compare_number(value, |i| i >= i128::from(self.min), |f| f >= self.min as f64)
    }

    fn message(&self, templates: &MessageTemplates) -> String {
        templates.render(self.name(), &[&self.min])
    }
}

/// Requires a number to be at most `max`
#[derive(Debug, Clone, Copy)]
pub struct Max {
    pub max: i64,
}

impl Rule for Max {
    fn name(&self) -> RuleName {
        RuleName::Max
    }

    fn is_satisfied(&self, value: &Value) -> bool {
        compare_number(value, |i| i <= i128::from(self.max), |f| f <= self.max as f64)
    }

    fn message(&self, templates: &MessageTemplates) -> String {
        templates.render(self.name(), &[&self.max])
    }
}

/// Requires a number to be within `min..=max`
#[derive(Debug, Clone, Copy)]
pub struct Range {
    pub min: Min,
    pub max: Max,
}

impl Range {
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            min: Min { min },
            max: Max { max },
        }
    }
}

impl Rule for Range {
    fn name(&self) -> RuleName {
        RuleName::Range
    }

    fn is_satisfied(&self, value: &Value) -> bool {
        self.min.is_satisfied(value) && self.max.is_satisfied(value)
    }

    fn message(&self, templates: &MessageTemplates) -> String {
        templates.render(self.name(), &[&self.min.min, &self.max.max])
    }
}

// Integers are widened to i128 so no width is truncated against the bound.
fn compare_number(
    value: &Value,
    int_cmp: impl Fn(i128) -> bool,
    float_cmp: impl Fn(f64) -> bool,
) -> bool {
    if let Some(i) = value.as_i128() {
        int_cmp(i)
    } else if let Some(f) = value.as_f64() {
        float_cmp(f)
    } else {
        false
    }
}

/// Requires text or a sequence to have at least `min` characters/elements
#[derive(Debug, Clone, Copy)]
pub struct MinLength {
    pub min: usize,
}

impl Rule for MinLength {
    fn name(&self) -> RuleName {
        RuleName::MinLength
    }

    fn is_satisfied(&self, value: &Value) -> bool {
        value.length().is_some_and(|len| len >= self.min)
    }

    fn message(&self, templates: &MessageTemplates) -> String {
        templates.render(self.name(), &[&self.min])
    }
}

/// Requires text or a sequence to have at most `max` characters/elements
#[derive(Debug, Clone, Copy)]
pub struct MaxLength {
    pub max: usize,
}

impl Rule for MaxLength {
    fn name(&self) -> RuleName {
        RuleName::MaxLength
    }

    fn is_satisfied(&self, value: &Value) -> bool {
        value.length().is_some_and(|len| len <= self.max)
    }

    fn message(&self, templates: &MessageTemplates) -> String {
        templates.render(self.name(), &[&self.max])
    }
}

/// Requires text or a sequence to have exactly `n` characters/elements
#[derive(Debug, Clone, Copy)]
pub struct Length {
    pub n: usize,
}

impl Rule for Length {
    fn name(&self) -> RuleName {
        RuleName::Length
    }

    fn is_satisfied(&self, value: &Value) -> bool {
        value.length() == Some(self.n)
    }

    fn message(&self, templates: &MessageTemplates) -> String {
        templates.render(self.name(), &[&self.n])
    }
}

/// Requires text made only of ASCII letters
#[derive(Debug, Clone, Copy, Default)]
pub struct Alpha;

impl Rule for Alpha {
    fn name(&self) -> RuleName {
        RuleName::Alpha
    }

    fn is_satisfied(&self, value: &Value) -> bool {
        all_chars(value, |c| c.is_ascii_alphabetic())
    }
}

/// Requires text made only of ASCII digits
#[derive(Debug, Clone, Copy, Default)]
pub struct Numeric;

impl Rule for Numeric {
    fn name(&self) -> RuleName {
        RuleName::Numeric
    }

    fn is_satisfied(&self, value: &Value) -> bool {
        all_chars(value, |c| c.is_ascii_digit())
    }
}

/// Requires text made only of ASCII letters and digits
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphaNumeric;

impl Rule for AlphaNumeric {
    fn name(&self) -> RuleName {
        RuleName::AlphaNumeric
    }

    fn is_satisfied(&self, value: &Value) -> bool {
        all_chars(value, |c| c.is_ascii_alphanumeric())
    }
}

fn all_chars(value: &Value, allowed: impl Fn(char) -> bool) -> bool {
    value.as_str().is_some_and(|s| s.chars().all(allowed))
}
