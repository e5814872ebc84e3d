#![forbid(unsafe_code)]

//! Built-in patterns backing the domain rules
//!
//! The pattern text is public so callers can reproduce a verdict exactly.
//! Word and digit classes are spelled out as ASCII ranges; `\w` and `\d`
//! would also accept non-ASCII letters and digits.
//! Mobile, Tel and ZipCode follow mainland China numbering.

use regex::Regex;
use std::sync::LazyLock;

/// Any character that is not an ASCII letter, digit, dash or underscore
pub const ALPHA_DASH_PATTERN: &str = r"[^0-9A-Za-z_\-]";

/// Unanchored: the value passes if any substring looks like an address
pub const EMAIL_PATTERN: &str = r"[0-9A-Za-z_!#$%\&'*+/=?^`{|}\~\-]+(?:\.[0-9A-Za-z_!#$%\&'*+/=?^`{|}\~\-]+)*@(?:[0-9A-Za-z_](?:[0-9A-Za-z_\-]*[0-9A-Za-z_])?\.)+[a-zA-Z0-9](?:[0-9A-Za-z_\-]*[0-9A-Za-z_])?";

/// Dotted-quad IPv4, octets 0-255 with optional leading zeros
pub const IP_PATTERN: &str =
    r"^((2[0-4][0-9]|25[0-5]|[01]?[0-9][0-9]?)\.){3}(2[0-4][0-9]|25[0-5]|[01]?[0-9][0-9]?)$";

pub const BASE64_PATTERN: &str =
    r"^(?:[A-Za-z0-99+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=)?$";

/// 11-digit mobile number with optional `+86`/`86` country prefix
pub const MOBILE_PATTERN: &str =
    r"^((\+86)|(86))?(1(([35][0-9])|[8][0-9]|[7][06789]|[4][579]))[0-9]{8}$";

/// 7-8 digit landline with optional `0`-led area code and dash
pub const TEL_PATTERN: &str = r"^(0[0-9]{2,3}(\-)?)?[0-9]{7,8}$";

pub const ZIP_CODE_PATTERN: &str = r"^[1-9][0-9]{5}$";

pub(crate) static ALPHA_DASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ALPHA_DASH_PATTERN).expect("valid regex"));
pub(crate) static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));
pub(crate) static IP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IP_PATTERN).expect("valid regex"));
pub(crate) static BASE64_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(BASE64_PATTERN).expect("valid regex"));
pub(crate) static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MOBILE_PATTERN).expect("valid regex"));
pub(crate) static TEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TEL_PATTERN).expect("valid regex"));
pub(crate) static ZIP_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ZIP_CODE_PATTERN).expect("valid regex"));
