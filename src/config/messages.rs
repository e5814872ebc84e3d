//! Message templates for rule violations
//!
//! Every rule renders its failure message from a template keyed by its
//! [`RuleName`]. Templates carry positional placeholders (`{0}`, `{1}`) that
//! are substituted with the rule's parameters. The default table can be
//! overridden from an in-memory TOML document, either per validation group
//! or once for the whole process.

use crate::error::ConfigError;
use crate::types::RuleName;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::{Arc, LazyLock, OnceLock};

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\d+)\}").expect("valid regex"));

static INSTALLED: OnceLock<Arc<MessageTemplates>> = OnceLock::new();

/// Default template for each rule
const DEFAULT_TEMPLATES: [(RuleName, &str); 20] = [
    (RuleName::Required, "Can not be empty"),
    (RuleName::Min, "Minimum is {0}"),
    (RuleName::Max, "Maximum is {0}"),
    (RuleName::Range, "Range is {0} to {1}"),
    (RuleName::MinLength, "Minimum size is {0}"),
    (RuleName::MaxLength, "Maximum size is {0}"),
    (RuleName::Length, "Required length is {0}"),
    (RuleName::Alpha, "Must be valid alpha characters"),
    (RuleName::Numeric, "Must be valid numeric characters"),
    (
        RuleName::AlphaNumeric,
        "Must be valid alpha or numeric characters",
    ),
    (RuleName::Match, "Must match {0}"),
    (RuleName::NoMatch, "Must not match {0}"),
    (
        RuleName::AlphaDash,
        "Must be valid alpha or numeric or dash(-_) characters",
    ),
    (RuleName::Email, "Must be a valid email address"),
    (RuleName::Ip, "Must be a valid ip address"),
    (RuleName::Base64, "Must be valid base64 characters"),
    (RuleName::Mobile, "Must be valid mobile number"),
    (RuleName::Tel, "Must be valid telephone number"),
    (
        RuleName::Phone,
        "Must be valid telephone or mobile phone number",
    ),
    (RuleName::ZipCode, "Must be valid zipcode"),
];

/// TOML document shape for template overrides
///
/// ```toml
/// [messages]
/// Required = "must not be blank"
/// Range = "must be between {0} and {1}"
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct MessagesFile {
    #[serde(default)]
    messages: BTreeMap<String, String>,
}

/// A complete table of message templates, one per rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplates {
    templates: HashMap<RuleName, String>,
}

impl MessageTemplates {
    /// Creates a table holding the default templates
    pub fn new() -> Self {
        Self {
            templates: DEFAULT_TEMPLATES
                .iter()
                .map(|(name, template)| (*name, (*template).to_string()))
                .collect(),
        }
    }

    /// Parse template overrides from a TOML string
    ///
    /// Rules not mentioned keep their default template.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSyntax` for malformed TOML,
    /// `ConfigError::UnknownRule` for a key that names no rule, and
    /// `ConfigError::InvalidValue` for a placeholder the rule cannot fill.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let file: MessagesFile = toml::from_str(s)?;
        let mut templates = Self::new();
        for (key, template) in file.messages {
            let name: RuleName = key
                .parse()
                .map_err(|_| ConfigError::UnknownRule(key.clone()))?;
            templates.set(name, template)?;
        }
        Ok(templates)
    }

    /// Replace the template for one rule
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the template references a
    /// positional argument the rule does not provide.
    pub fn set(&mut self, name: RuleName, template: impl Into<String>) -> Result<(), ConfigError> {
        let template = template.into();
        validate_placeholders(name, &template)?;
        self.templates.insert(name, template);
        Ok(())
    }

    /// Returns the raw template for a rule
    pub fn get(&self, name: RuleName) -> &str {
        self.templates
            .get(&name)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Render a rule's template, substituting positional arguments
    pub fn render(&self, name: RuleName, args: &[&dyn fmt::Display]) -> String {
        PLACEHOLDER_RE
            .replace_all(self.get(name), |caps: &Captures| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| args.get(i))
                    .map_or_else(|| caps[0].to_string(), |arg| arg.to_string())
            })
            .into_owned()
    }

    /// Install this table as the process-wide default
    ///
    /// Must happen before the first validation that reads the process-wide
    /// table; after that the table is fixed for the life of the process.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::AlreadyInstalled` if a table is already in place.
    pub fn install(self) -> Result<(), ConfigError> {
        INSTALLED
            .set(Arc::new(self))
            .map_err(|_| ConfigError::AlreadyInstalled)?;
        tracing::debug!("installed process-wide message templates");
        Ok(())
    }

    /// Returns the process-wide table, initializing it with defaults on first use
    pub fn global() -> &'static MessageTemplates {
        Self::shared_global()
    }

    pub(crate) fn shared() -> Arc<MessageTemplates> {
        Arc::clone(Self::shared_global())
    }

    fn shared_global() -> &'static Arc<MessageTemplates> {
        INSTALLED.get_or_init(|| Arc::new(MessageTemplates::new()))
    }
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_placeholders(name: RuleName, template: &str) -> Result<(), ConfigError> {
    for caps in PLACEHOLDER_RE.captures_iter(template) {
        let in_range = caps[1]
            .parse::<usize>()
            .is_ok_and(|i| i < name.arity());
        if !in_range {
            return Err(ConfigError::InvalidValue {
                field: name.to_string(),
                message: format!(
                    "placeholder {} is out of range, rule takes {} argument(s)",
                    &caps[0],
                    name.arity()
                ),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_rule() {
        let templates = MessageTemplates::new();
        for name in RuleName::ALL {
            assert!(!templates.get(name).is_empty(), "no template for {}", name);
        }
    }

    #[test]
    fn test_render_substitutes_positional_arguments() {
        let templates = MessageTemplates::new();
        assert_eq!(templates.render(RuleName::Min, &[&5]), "Minimum is 5");
        assert_eq!(
            templates.render(RuleName::Range, &[&-1, &10]),
            "Range is -1 to 10"
        );
        assert_eq!(
            templates.render(RuleName::Required, &[]),
            "Can not be empty"
        );
    }

    #[test]
    fn test_render_leaves_unfilled_placeholder() {
        let templates = MessageTemplates::new();
        assert_eq!(templates.render(RuleName::Max, &[]), "Maximum is {0}");
    }

    #[test]
    fn test_parse_overrides() {
        let toml = r#"
[messages]
Required = "must not be blank"
Range = "must be between {0} and {1}"
MinSize = "at least {0} long"
"#;

        let templates = MessageTemplates::parse(toml).unwrap();
        assert_eq!(templates.get(RuleName::Required), "must not be blank");
        assert_eq!(
            templates.render(RuleName::Range, &[&1, &3]),
            "must be between 1 and 3"
        );
        assert_eq!(templates.get(RuleName::MinLength), "at least {0} long");
        assert_eq!(templates.get(RuleName::Email), "Must be a valid email address");
    }

    #[test]
    fn test_parse_empty_document_keeps_defaults() {
        assert_eq!(MessageTemplates::parse("").unwrap(), MessageTemplates::new());
    }

    #[test]
    fn test_parse_unknown_rule() {
        let result = MessageTemplates::parse("[messages]\nRequird = \"x\"\n");
        assert!(matches!(result, Err(ConfigError::UnknownRule(ref name)) if name == "Requird"));
    }

    #[test]
    fn test_parse_placeholder_out_of_range() {
        let result = MessageTemplates::parse("[messages]\nEmail = \"bad {0}\"\n");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));

        let result = MessageTemplates::parse("[messages]\nRange = \"{0} {1} {2}\"\n");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_parse_invalid_syntax() {
        let result = MessageTemplates::parse("[messages\nRequired = 1");
        assert!(matches!(result, Err(ConfigError::InvalidSyntax(_))));

        let result = MessageTemplates::parse("[other]\nRequired = \"x\"\n");
        assert!(matches!(result, Err(ConfigError::InvalidSyntax(_))));
    }

    #[test]
    fn test_set_validates() {
        let mut templates = MessageTemplates::new();
        assert!(templates.set(RuleName::Min, "at least {0}").is_ok());
        assert_eq!(templates.render(RuleName::Min, &[&2]), "at least 2");
        assert!(templates.set(RuleName::Min, "at least {1}").is_err());
        assert_eq!(templates.get(RuleName::Min), "at least {0}");
    }
}
