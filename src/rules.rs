#![forbid(unsafe_code)]

//! Rule catalog

mod basic;
pub mod builtin;
mod domain;
mod regex_rule;
mod rule;

// Re-export core types
pub use basic::{
    Alpha, AlphaNumeric, Length, Max, MaxLength, Min, MinLength, Numeric, Range, Required,
};
pub use domain::{AlphaDash, Base64, Email, Ip, Mobile, Phone, Tel, ZipCode};
pub use regex_rule::{Match, NoMatch};
pub use rule::Rule;
