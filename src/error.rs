//! Error types for rulecheck
//!
//! Rule violations are never errors: they are recorded as messages on the
//! field that failed. The types here cover the configuration-time failures
//! that can happen before any value is checked, such as a malformed message
//! template table or an invalid caller-supplied pattern.

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid configuration syntax
    #[error("Invalid configuration syntax: {0}")]
    InvalidSyntax(String),

    /// A template was supplied for a rule name that does not exist
    #[error("Unknown rule name: {0}")]
    UnknownRule(String),

    /// Invalid configuration value
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// The process-wide template table was already initialized
    #[error("Message templates are already installed")]
    AlreadyInstalled,
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::InvalidSyntax(err.to_string())
    }
}

/// Rule-related errors
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Invalid regex pattern
    #[error("Invalid regex pattern: {0}")]
    InvalidRegex(String),
}

/// Top-level error type for rulecheck
#[derive(Debug, thiserror::Error)]
pub enum RulecheckError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_error_converts_to_invalid_syntax() {
        let err = toml::from_str::<toml::Table>("not = [valid").unwrap_err();
        let config_err: ConfigError = err.into();
        assert!(matches!(config_err, ConfigError::InvalidSyntax(_)));
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidValue {
            field: "Min".to_string(),
            message: "placeholder {3} out of range".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for Min: placeholder {3} out of range"
        );

        let top: RulecheckError = RuleError::InvalidRegex("(".to_string()).into();
        assert_eq!(top.to_string(), "Rule error: Invalid regex pattern: (");
    }
}
