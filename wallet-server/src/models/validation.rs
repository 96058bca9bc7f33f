//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is missing, null, or empty
    Required { field: &'static str },

    /// Field is present but not in the expected shape
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Request body could not be decoded into the expected structure
    MalformedBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field } => write!(f, "{} is required", field),
            Self::InvalidFormat { field, reason } => write!(f, "invalid {}: {}", field, reason),
            Self::MalformedBody { reason } => write!(f, "malformed request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Require a non-empty string field.
pub fn required(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::Required { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InvalidFormat {
            field: "id",
            reason: "must be an integer",
        };
        assert_eq!(err.to_string(), "invalid id: must be an integer");

        let err = ValidationError::Required { field: "title" };
        assert_eq!(err.to_string(), "title is required");
    }

    #[test]
    fn required_rejects_missing_and_empty() {
        assert_eq!(
            required("title", None),
            Err(ValidationError::Required { field: "title" })
        );
        assert_eq!(
            required("title", Some(String::new())),
            Err(ValidationError::Required { field: "title" })
        );
    }

    #[test]
    fn required_keeps_value() {
        assert_eq!(required("title", Some("Coffee".into())), Ok("Coffee".to_string()));
        // Whitespace is content; only presence is checked.
        assert_eq!(required("title", Some(" ".into())), Ok(" ".to_string()));
    }
}
