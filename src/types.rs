#![forbid(unsafe_code)]

//! Core domain types for rulecheck
//!
//! This module defines the dynamically typed [`Value`] every rule is checked
//! against, and the stable [`RuleName`] each rule is addressed by.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unix timestamp of 0001-01-01T00:00:00Z, the zero-valued time
pub const ZERO_TIME_SECS: i64 = -62_135_596_800;

/// A value under test
///
/// The set of categories is closed. Anything the engine does not model is
/// carried as [`Value::Other`] with its textual rendering, and every rule
/// except the pattern rules treats it as not satisfied.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Str(String),
    Seq(Vec<Value>),
    Time(DateTime<Utc>),
    Other(String),
}

impl Value {
    /// Returns the zero-valued time (0001-01-01T00:00:00Z)
    pub fn zero_time() -> DateTime<Utc> {
        DateTime::from_timestamp(ZERO_TIME_SECS, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Returns the integer content widened to i128, if this is an integer
    pub fn as_i128(&self) -> Option<i128> {
        match *self {
            Value::I8(v) => Some(v.into()),
            Value::I16(v) => Some(v.into()),
            Value::I32(v) => Some(v.into()),
            Value::I64(v) => Some(v.into()),
            Value::Isize(v) => Some(v as i128),
            Value::U8(v) => Some(v.into()),
            Value::U16(v) => Some(v.into()),
            Value::U32(v) => Some(v.into()),
            Value::U64(v) => Some(v.into()),
            Value::Usize(v) => Some(v as i128),
            _ => None,
        }
    }

    /// Returns the floating point content, if this is a float
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::F32(v) => Some(v.into()),
            Value::F64(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the text content, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Length in Unicode code points for text, element count for sequences
    pub fn length(&self) -> Option<usize> {
        match self {
            Value::Str(s) => Some(s.chars().count()),
            Value::Seq(items) => Some(items.len()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "<nil>"),
            Value::Bool(v) => write!(f, "{}", v),
            Value::I8(v) => write!(f, "{}", v),
            Value::I16(v) => write!(f, "{}", v),
            Value::I32(v) => write!(f, "{}", v),
            Value::I64(v) => write!(f, "{}", v),
            Value::Isize(v) => write!(f, "{}", v),
            Value::U8(v) => write!(f, "{}", v),
            Value::U16(v) => write!(f, "{}", v),
            Value::U32(v) => write!(f, "{}", v),
            Value::U64(v) => write!(f, "{}", v),
            Value::Usize(v) => write!(f, "{}", v),
            Value::F32(v) => write!(f, "{}", v),
            Value::F64(v) => write!(f, "{}", v),
            Value::Str(s) => write!(f, "{}", s),
            Value::Seq(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Time(t) => write!(f, "{}", t),
            Value::Other(s) => write!(f, "{}", s),
        }
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => Str,
    DateTime<Utc> => Time,
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Str(c.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::Seq(items.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::I64(i)
                } else if let Some(u) = n.as_u64() {
                    Value::U64(u)
                } else {
                    n.as_f64().map_or(Value::Null, Value::F64)
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::Seq(items.into_iter().map(Value::from).collect())
            }
            other @ serde_json::Value::Object(_) => Value::Other(other.to_string()),
        }
    }
}

/// The stable name of a rule
///
/// Used both to identify which rule produced a message and to look up the
/// rule's message template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RuleName {
    Required,
    Min,
    Max,
    Range,
    MinLength,
    MaxLength,
    Length,
    Alpha,
    Numeric,
    AlphaNumeric,
    Match,
    NoMatch,
    AlphaDash,
    Email,
    Ip,
    Base64,
    Mobile,
    Tel,
    Phone,
    ZipCode,
}

impl RuleName {
    /// Every rule name, in catalog order
    pub const ALL: [RuleName; 20] = [
        RuleName::Required,
        RuleName::Min,
        RuleName::Max,
        RuleName::Range,
        RuleName::MinLength,
        RuleName::MaxLength,
        RuleName::Length,
        RuleName::Alpha,
        RuleName::Numeric,
        RuleName::AlphaNumeric,
        RuleName::Match,
        RuleName::NoMatch,
        RuleName::AlphaDash,
        RuleName::Email,
        RuleName::Ip,
        RuleName::Base64,
        RuleName::Mobile,
        RuleName::Tel,
        RuleName::Phone,
        RuleName::ZipCode,
    ];

    /// Returns the rule name as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleName::Required => "Required",
            RuleName::Min => "Min",
            RuleName::Max => "Max",
            RuleName::Range => "Range",
            RuleName::MinLength => "MinLength",
            RuleName::MaxLength => "MaxLength",
            RuleName::Length => "Length",
            RuleName::Alpha => "Alpha",
            RuleName::Numeric => "Numeric",
            RuleName::AlphaNumeric => "AlphaNumeric",
            RuleName::Match => "Match",
            RuleName::NoMatch => "NoMatch",
            RuleName::AlphaDash => "AlphaDash",
            RuleName::Email => "Email",
            RuleName::Ip => "IP",
            RuleName::Base64 => "Base64",
            RuleName::Mobile => "Mobile",
            RuleName::Tel => "Tel",
            RuleName::Phone => "Phone",
            RuleName::ZipCode => "ZipCode",
        }
    }

    /// Number of positional arguments the rule's message template receives
    pub fn arity(&self) -> usize {
        match self {
            RuleName::Range => 2,
            RuleName::Min
            | RuleName::Max
            | RuleName::MinLength
            | RuleName::MaxLength
            | RuleName::Length
            | RuleName::Match
            | RuleName::NoMatch => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RuleName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MinSize" => return Ok(RuleName::MinLength),
            "MaxSize" => return Ok(RuleName::MaxLength),
            _ => {}
        }
        RuleName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| format!("Unknown rule name: {}", s))
    }
}

impl TryFrom<String> for RuleName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RuleName> for String {
    fn from(name: RuleName) -> Self {
        name.as_str().to_string()
    }
}
