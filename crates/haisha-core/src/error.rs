//! Error types for the Haisha application.

use thiserror::Error;

/// A shared error type for setup-time failures.
///
/// The interaction path never returns this type: delegated-call failures are
/// rendered into the transcript instead. It covers loading configuration and
/// the front-end's own I/O.
#[derive(Error, Debug, Clone)]
pub enum HaishaError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl HaishaError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

impl From<std::io::Error> for HaishaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for HaishaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, HaishaError>`.
pub type Result<T> = std::result::Result<T, HaishaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion_keeps_kind() {
        let err: HaishaError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        let text = err.to_string();
        assert!(text.starts_with("IO error:"));
        assert!(text.contains("PermissionDenied"));
    }

    #[test]
    fn test_json_error_conversion() {
        let err: HaishaError = serde_json::from_str::<serde_json::Value>("{ nope")
            .unwrap_err()
            .into();
        assert!(err.is_serialization());
        assert!(err.to_string().contains("JSON"));
    }

    #[test]
    fn test_not_found_display() {
        let err = HaishaError::not_found("quick_action", "9");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: quick_action '9'");
    }
}
