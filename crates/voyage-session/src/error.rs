//! # Session Error Types
//!
//! What the booking widget and the contact form can see go wrong.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ValidationError ──► BookingError::Validation   code VALIDATION_ERROR  │
//! │  unknown tour id ──► BookingError::TourNotFound code NOT_FOUND         │
//! │  second submit   ──► BookingError::AlreadySubmitted                    │
//! │                                              code ALREADY_SUBMITTED    │
//! │                                                                         │
//! │  ValidationError ──► InquiryError::Validation   code VALIDATION_ERROR  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are fatal; the UI shows the message and stays put.

use thiserror::Error;
use voyage_core::ValidationError;

/// Result type alias for booking operations.
pub type BookingResult<T> = Result<T, BookingError>;

/// Result type alias for inquiry operations.
pub type InquiryResult<T> = Result<T, InquiryError>;

#[derive(Debug, Error)]
pub enum BookingError {
    /// Input rejected before anything was committed.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Tour not found: {0}")]
    TourNotFound(String),

    /// The flow already committed its booking.
    #[error("Booking has already been submitted")]
    AlreadySubmitted,
}

impl BookingError {
    /// Machine-readable code for the front-end.
    pub fn code(&self) -> &'static str {
        match self {
            BookingError::Validation(_) => "VALIDATION_ERROR",
            BookingError::TourNotFound(_) => "NOT_FOUND",
            BookingError::AlreadySubmitted => "ALREADY_SUBMITTED",
        }
    }
}

#[derive(Debug, Error)]
pub enum InquiryError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

impl InquiryError {
    pub fn code(&self) -> &'static str {
        match self {
            InquiryError::Validation(_) => "VALIDATION_ERROR",
        }
    }
}
