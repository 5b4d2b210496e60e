//! # Error Types
//!
//! Domain-specific error types for voyage-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  voyage-core errors (this file)                                        │
//! │  ├── CoreError        - Catalog lookups, invalid records               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  voyage-assistant errors (separate crate)                              │
//! │  └── AssistantError   - Upstream chat failures (never reach the UI)    │
//! │                                                                         │
//! │  voyage-session errors                                                 │
//! │  └── BookingError     - What the booking widget sees (with a code)     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError / BookingError → Front-end          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (tour id, field name)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No region with this id on the map.
    #[error("Region not found: {0}")]
    RegionNotFound(String),

    /// A catalog tour violates a data invariant.
    #[error("Invalid tour {tour_id}: {source}")]
    InvalidTour {
        tour_id: String,
        #[source]
        source: ValidationError,
    },

    /// A catalog region violates a data invariant.
    #[error("Invalid region {region_id}: {source}")]
    InvalidRegion {
        region_id: String,
        #[source]
        source: ValidationError,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// One value must not exceed another (e.g. min vs max group size).
    #[error("{field} must not exceed {limit}")]
    ExceedsLimit { field: String, limit: String },

    /// Invalid format (e.g., invalid UUID, unknown locale).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two tours sharing an id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
