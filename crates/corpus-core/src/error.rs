//! Unified error types for the corpus cleaner.

/// Main error type for corpus cleaning operations.
#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    /// A record field is missing or not text where text is required.
    #[error("malformed input in field '{field}': {reason}")]
    MalformedInput { field: String, reason: String },

    /// More distinct noise words were requested than the vocabulary holds.
    #[error("insufficient vocabulary: requested up to {requested} words, only {available} available")]
    InsufficientVocabulary { requested: usize, available: usize },

    /// The base normalization primitive rejected a value.
    #[error("normalization failed for {value:?}: {reason}")]
    Normalization { value: String, reason: String },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid input provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience type alias for Results with CleanError.
pub type CleanResult<T> = Result<T, CleanError>;

impl CleanError {
    /// Create a malformed input error for a field.
    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a normalization error carrying the offending value.
    pub fn normalization(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Normalization {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a config error with message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid input error with message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a serialization error with message.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}

impl From<serde_json::Error> for CleanError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CleanError::malformed("model", "expected text, found number");
        assert_eq!(
            err.to_string(),
            "malformed input in field 'model': expected text, found number"
        );

        let err = CleanError::InsufficientVocabulary {
            requested: 5,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "insufficient vocabulary: requested up to 5 words, only 2 available"
        );
    }

    #[test]
    fn test_normalization_error_keeps_value() {
        let err = CleanError::normalization("پراید ۱۳۹۸", "unexpected code point");
        match err {
            CleanError::Normalization { value, .. } => assert_eq!(value, "پراید ۱۳۹۸"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_error_constructors() {
        let err = CleanError::config("min > max");
        assert!(matches!(err, CleanError::Config(_)));

        let err = CleanError::invalid_input("series lengths differ");
        assert!(matches!(err, CleanError::InvalidInput(_)));
    }
}
