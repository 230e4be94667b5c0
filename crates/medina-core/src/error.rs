//! # Error Types
//!
//! Domain-specific error types for medina-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  medina-core errors (this file)                                        │
//! │  ├── CoreError        - Order draft rule violations                    │
//! │  ├── ValidationError  - Form input validation failures                 │
//! │  └── ConfigError      - Bad environment configuration                  │
//! │                                                                         │
//! │  quote-cli errors (app)                                                │
//! │  └── ApiError         - What the caller sees (serialized)              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → stdout                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The calculators themselves never fail; errors only come from the
//! layers in front of them.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Order draft errors raised while creating or editing an order.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No line for this product in the draft.
    #[error("Product {0} is not in the order")]
    LineNotFound(String),

    /// Draft already holds the maximum number of distinct lines.
    #[error("Order cannot have more than {max} lines")]
    OrderTooLarge { max: usize },

    /// Merging or updating a line would exceed the per-line quantity cap.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the form layer before anything reaches a calculator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or more.
    #[error("{field} cannot be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g., not a number, not a UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// More decimal places than the currency allows.
    #[error("{field} allows at most {max_places} decimal places")]
    TooPrecise { field: String, max_places: u32 },
}

// =============================================================================
// Config Error
// =============================================================================

/// Configuration error types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::QuantityTooLarge {
            requested: 1200,
            max: 999,
        };
        assert_eq!(err.to_string(), "Quantity 1200 exceeds maximum allowed (999)");

        let err = CoreError::LineNotFound("p-1".to_string());
        assert_eq!(err.to_string(), "Product p-1 is not in the order");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBeNonNegative {
            field: "manual discount".to_string(),
        };
        assert_eq!(err.to_string(), "manual discount cannot be negative");

        let err = ValidationError::TooPrecise {
            field: "unit price".to_string(),
            max_places: 3,
        };
        assert_eq!(err.to_string(), "unit price allows at most 3 decimal places");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "product id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_config_error_message() {
        let err = ConfigError::InvalidValue("MEDINA_SHIPPING_FEE".to_string());
        assert_eq!(err.to_string(), "Invalid value for MEDINA_SHIPPING_FEE");
    }
}
