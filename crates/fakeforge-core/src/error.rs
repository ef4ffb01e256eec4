//! Error types for the fakeforge resolution engine.
//!
//! Every fallible operation in the engine returns [`ForgeError`]. Errors are
//! unrecoverable at the point of detection and propagate straight to the
//! caller of the top-level generation request: there is no retry and no
//! partial substitution, so an unresolved placeholder never leaks into
//! output.

/// Error type for dataset lookup, placeholder resolution, and generation.
#[derive(Debug, thiserror::Error)]
pub enum ForgeError {
    /// No dataset exists for the requested locale
    #[error("No dataset for locale '{0}'")]
    LocaleNotFound(String),

    /// Requested dotted key is absent from the dataset
    #[error("Key not found: '{0}'")]
    KeyNotFound(String),

    /// A key exists but its value has the wrong shape for the caller
    #[error("Value at '{key}' is {found}, expected {expected}")]
    WrongValueShape {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A placeholder referenced a category that is not registered
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    /// A placeholder or format entry referenced an operation the category
    /// does not provide
    #[error("No operation '{operation}' in category '{category}'")]
    UnknownOperation { category: String, operation: String },

    /// A composite format entry is missing its leading ':' marker
    #[error("Format entry '{entry}' at '{key}' is missing the ':' prefix")]
    MalformedFormatEntry { key: String, entry: String },

    /// An operation invoked during placeholder resolution failed
    #[error("Operation '{category}.{operation}' failed")]
    Invocation {
        category: String,
        operation: String,
        source: Box<ForgeError>,
    },

    /// Resolution recursed past the depth limit, which means the dataset's
    /// templates or format lists reference each other in a cycle
    #[error("Placeholder recursion exceeded {limit} levels while resolving '{key}'")]
    RecursionLimitExceeded { key: String, limit: usize },

    /// Error reading a dataset file
    #[error("Failed to read dataset file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing dataset YAML
    #[error("Failed to parse dataset YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_exposes_source() {
        let inner = ForgeError::KeyNotFound("name.first_name".to_string());
        let outer = ForgeError::Invocation {
            category: "name".to_string(),
            operation: "firstName".to_string(),
            source: Box::new(inner),
        };

        let source = std::error::Error::source(&outer).map(|e| e.to_string());
        assert_eq!(source, Some("Key not found: 'name.first_name'".to_string()));
        assert_eq!(outer.to_string(), "Operation 'name.firstName' failed");
    }

    #[test]
    fn test_wrong_value_shape_display() {
        let err = ForgeError::WrongValueShape {
            key: "name.first_name".to_string(),
            expected: "string",
            found: "list",
        };
        assert_eq!(
            err.to_string(),
            "Value at 'name.first_name' is list, expected string"
        );
    }
}
