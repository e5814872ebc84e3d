#![forbid(unsafe_code)]

//! Domain rules layered on `Match`/`NoMatch`
//!
//! Each rule wraps a [`Match`] (or [`NoMatch`]) over one of the built-in
//! patterns and only changes the name its message is looked up under.

use crate::rules::builtin::{
    ALPHA_DASH_RE, BASE64_RE, EMAIL_RE, IP_RE, MOBILE_RE, TEL_RE, ZIP_CODE_RE,
};
use crate::rules::{Match, NoMatch, Rule};
use crate::types::{RuleName, Value};

macro_rules! pattern_rule {
    ($(#[$doc:meta])* $ty:ident, $name:expr, $re:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $ty {
            inner: Match,
        }

        impl $ty {
            pub fn new() -> Self {
                Self {
                    inner: Match::new($re.clone()),
                }
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Rule for $ty {
            fn name(&self) -> RuleName {
                $name
            }

            fn is_satisfied(&self, value: &Value) -> bool {
                self.inner.is_satisfied(value)
            }
        }
    };
}

pattern_rule!(
    /// Requires an email address somewhere in the value's text
    Email,
    RuleName::Email,
    EMAIL_RE
);
pattern_rule!(
    /// Requires a dotted-quad IPv4 address
    Ip,
    RuleName::Ip,
    IP_RE
);
pattern_rule!(
    /// Requires padded base64 text
    Base64,
    RuleName::Base64,
    BASE64_RE
);
pattern_rule!(
    /// Requires a mainland China mobile number
    Mobile,
    RuleName::Mobile,
    MOBILE_RE
);
pattern_rule!(
    /// Requires a mainland China landline number
    Tel,
    RuleName::Tel,
    TEL_RE
);
pattern_rule!(
    /// Requires a mainland China postal code
    ZipCode,
    RuleName::ZipCode,
    ZIP_CODE_RE
);

/// Requires text made only of ASCII letters, digits, `-` and `_`
#[derive(Debug, Clone)]
pub struct AlphaDash {
    inner: NoMatch,
}

impl AlphaDash {
    pub fn new() -> Self {
        Self {
            inner: NoMatch::new(ALPHA_DASH_RE.clone()),
        }
    }
}

impl Default for AlphaDash {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for AlphaDash {
    fn name(&self) -> RuleName {
        RuleName::AlphaDash
    }

    fn is_satisfied(&self, value: &Value) -> bool {
        self.inner.is_satisfied(value)
    }
}

/// Requires either a mobile or a landline number
#[derive(Debug, Clone, Default)]
pub struct Phone {
    pub mobile: Mobile,
    pub tel: Tel,
}

impl Phone {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Rule for Phone {
    fn name(&self) -> RuleName {
        RuleName::Phone
    }

    fn is_satisfied(&self, value: &Value) -> bool {
        self.mobile.is_satisfied(value) || self.tel.is_satisfied(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MessageTemplates;

    fn passes(rule: &dyn Rule, text: &str) -> bool {
        rule.is_satisfied(&Value::from(text))
    }

    #[test]
    fn test_alpha_dash() {
        assert!(!passes(&AlphaDash::new(), "a,1-@ $"));
        assert!(passes(&AlphaDash::new(), "1234aB-_"));
        assert!(passes(&AlphaDash::new(), ""));
    }

    #[test]
    fn test_email() {
        assert!(!passes(&Email::new(), "not@a email"));
        assert!(passes(&Email::new(), "suchuangji@gmail.com"));
        assert!(passes(&Email::new(), "first.last+tag@mail.example.org"));
        assert!(!passes(&Email::new(), "suchuangji@gmail"));
    }

    #[test]
    fn test_ip() {
        assert!(!passes(&Ip::new(), "11.255.255.256"));
        assert!(passes(&Ip::new(), "01.11.11.11"));
        assert!(passes(&Ip::new(), "255.255.255.255"));
        assert!(!passes(&Ip::new(), "1.2.3"));
    }

    #[test]
    fn test_base64() {
        assert!(!passes(&Base64::new(), "suchuangji@gmail.com"));
        assert!(passes(&Base64::new(), "c3VjaHVhbmdqaUBnbWFpbC5jb20="));
    }

    #[test]
    fn test_mobile() {
        assert!(!passes(&Mobile::new(), "19800008888"));
        assert!(passes(&Mobile::new(), "18800008888"));
        assert!(passes(&Mobile::new(), "18000008888"));
        assert!(passes(&Mobile::new(), "8618300008888"));
        assert!(passes(&Mobile::new(), "+8614700008888"));
    }

    #[test]
    fn test_tel() {
        assert!(!passes(&Tel::new(), "222-00008888"));
        assert!(passes(&Tel::new(), "022-70008888"));
        assert!(passes(&Tel::new(), "02270008888"));
        assert!(passes(&Tel::new(), "70008888"));
    }

    #[test]
    fn test_phone_is_mobile_or_tel() {
        assert!(!passes(&Phone::new(), "222-00008888"));
        assert!(passes(&Phone::new(), "+8614700008888"));
        assert!(passes(&Phone::new(), "02270008888"));

        let phone = Phone::new();
        for text in ["19800008888", "18800008888", "022-70008888", "abc", ""] {
            let value = Value::from(text);
            assert_eq!(
                phone.is_satisfied(&value),
                phone.mobile.is_satisfied(&value) || phone.tel.is_satisfied(&value)
            );
        }
    }

    #[test]
    fn test_zip_code() {
        assert!(!passes(&ZipCode::new(), ""));
        assert!(!passes(&ZipCode::new(), "036000"));
        assert!(passes(&ZipCode::new(), "536000"));
    }

    #[test]
    fn test_numbers_are_rendered_before_matching() {
        assert!(ZipCode::new().is_satisfied(&Value::from(536000u32)));
        assert!(Mobile::new().is_satisfied(&Value::from(18800008888u64)));
    }

    #[test]
    fn test_domain_messages() {
        let templates = MessageTemplates::new();
        assert_eq!(Email::new().message(&templates), "Must be a valid email address");
        assert_eq!(Ip::new().message(&templates), "Must be a valid ip address");
        assert_eq!(
            AlphaDash::new().message(&templates),
            "Must be valid alpha or numeric or dash(-_) characters"
        );
        assert_eq!(
            Phone::new().message(&templates),
            "Must be valid telephone or mobile phone number"
        );
    }
}
