//! Error types for recipe and snapshot validation.

use thiserror::Error;

/// Error codes for validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Slot-assignment token has invalid syntax
    InvalidSlotToken,
    /// E002: Attribute has an invalid component width
    InvalidAttributeSize,
    /// E003: Attribute value length does not match element count * size
    AttributeLengthMismatch,
    /// E004: Duplicate attribute name within one element class
    DuplicateAttribute,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidSlotToken => "E001",
            ErrorCode::InvalidAttributeSize => "E002",
            ErrorCode::AttributeLengthMismatch => "E003",
            ErrorCode::DuplicateAttribute => "E004",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for validation findings that do not fail a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Recipe assigns no slots (output is all default pixels)
    NoAssignedSlots,
    /// W002: The same attribute component is assigned to multiple slots
    DuplicateAssignment,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::NoAssignedSlots => "W001",
            WarningCode::DuplicateAssignment => "W002",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional input path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Path to the problematic field (e.g., "assignments\[3\]").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with an input path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional input path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// Path to the problematic field.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation warning with an input path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Top-level error type for recipe and snapshot handling.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Validation failed with one or more errors.
    #[error("validation failed with {0} error(s)")]
    ValidationFailed(usize),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of recipe or snapshot validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Creates a failed validation result.
    pub fn failure(errors: Vec<ValidationError>) -> Self {
        Self {
            ok: false,
            errors,
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, Vec<ValidationError>> {
        if self.ok {
            Ok(self.warnings)
        } else {
            Err(self.errors)
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// Common trait for engine errors.
///
/// Provides a unified reporting interface so callers can surface stable
/// error codes without depending on the engine crate's concrete error type.
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a stable static string like "PACK_001".
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorCode::InvalidSlotToken.code(), "E001");
        assert_eq!(ErrorCode::InvalidAttributeSize.code(), "E002");
        assert_eq!(ErrorCode::AttributeLengthMismatch.code(), "E003");
        assert_eq!(ErrorCode::DuplicateAttribute.code(), "E004");
    }

    #[test]
    fn test_warning_codes() {
        assert_eq!(WarningCode::NoAssignedSlots.code(), "W001");
        assert_eq!(WarningCode::DuplicateAssignment.code(), "W002");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new(ErrorCode::InvalidSlotToken, "unparseable token '@@'");
        assert_eq!(err.to_string(), "E001: unparseable token '@@'");

        let err_with_path = ValidationError::with_path(
            ErrorCode::AttributeLengthMismatch,
            "expected 12 values, got 9",
            "attributes[0].values",
        );
        assert_eq!(
            err_with_path.to_string(),
            "E003: expected 12 values, got 9 (at attributes[0].values)"
        );
    }

    #[test]
    fn test_validation_result() {
        let mut result = ValidationResult::success();
        assert!(result.is_ok());

        result.add_error(ValidationError::new(
            ErrorCode::InvalidAttributeSize,
            "size must be at least 1",
        ));
        assert!(!result.is_ok());
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_into_result() {
        let ok = ValidationResult::success();
        assert!(ok.into_result().is_ok());

        let failed = ValidationResult::failure(vec![ValidationError::new(
            ErrorCode::InvalidSlotToken,
            "bad token",
        )]);
        assert_eq!(failed.into_result().unwrap_err().len(), 1);
    }
}
