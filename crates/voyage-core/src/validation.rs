//! # Validation Module
//!
//! Input and catalog validation for Voyage.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front-end widgets                                            │
//! │  ├── Participant stepper never goes below 1                            │
//! │  └── Date picker for private departures                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Booking flow / inquiry (voyage-session)                      │
//! │  └── THIS MODULE: departure date, required form fields                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog load (StaticCatalog::new)                            │
//! │  └── THIS MODULE: tour and region record invariants                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{BookingMode, Rate, Region, Tour};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Largest map coordinate (percent).
const MAX_MAP_COORDINATE: u8 = 100;

// =============================================================================
// Booking Inputs
// =============================================================================

/// Resolves the departure date for a booking.
///
/// ## Rules
/// - GROUP: always the tour's fixed start date; any chosen date is ignored
/// - PRIVATE: the chosen date is required
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Booking widget: "Book now"                                             │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  resolve_departure_date(tour, mode, chosen) ← THIS FUNCTION            │
/// │       │                                                                 │
/// │       ├── PRIVATE, no date? → Error: "date is required"                │
/// │       │                                                                 │
/// │       └── OK(date) → price, build booking, commit                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn resolve_departure_date(
    tour: &Tour,
    mode: BookingMode,
    chosen: Option<NaiveDate>,
) -> ValidationResult<NaiveDate> {
    match mode {
        BookingMode::Group => Ok(tour.start_date),
        BookingMode::Private => chosen.ok_or_else(|| ValidationError::required("date")),
    }
}

/// Validates a required free-text field and returns it trimmed.
pub fn validate_required_text(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::required(field));
    }

    Ok(value.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a per-person catalog price.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a fraction such as a cashback or commission rate.
///
/// ## Rules
/// - Must be between 0 and 10000 bps (0% to 100%)
///
/// ```rust
/// use voyage_core::types::Rate;
/// use voyage_core::validation::validate_rate;
///
/// assert!(validate_rate("cashback_rate", Rate::from_bps(500)).is_ok());
/// assert!(validate_rate("cashback_rate", Rate::from_bps(10_001)).is_err());
/// ```
pub fn validate_rate(field: &str, rate: Rate) -> ValidationResult<()> {
    if rate.bps() > Rate::MAX_BPS {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: Rate::MAX_BPS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Catalog Records
// =============================================================================

/// Validates a tour record.
///
/// ## Rules
/// - id and title are present
/// - all three prices are positive
/// - `min_group_size ≤ max_group_size` and `current_group_size ≤ max_group_size`
/// - cashback and commission rates are within 0-100%
pub fn validate_tour(tour: &Tour) -> ValidationResult<()> {
    validate_required_text("id", &tour.id)?;

    if tour.title.is_empty() {
        return Err(ValidationError::required("title"));
    }

    validate_price("group_price", tour.group_price)?;
    validate_price("private_price", tour.private_price)?;
    validate_price("original_price", tour.original_price)?;

    if tour.min_group_size > tour.max_group_size {
        return Err(ValidationError::ExceedsLimit {
            field: "min_group_size".to_string(),
            limit: format!("max_group_size ({})", tour.max_group_size),
        });
    }

    if tour.current_group_size > tour.max_group_size {
        return Err(ValidationError::ExceedsLimit {
            field: "current_group_size".to_string(),
            limit: format!("max_group_size ({})", tour.max_group_size),
        });
    }

    validate_rate("cashback_rate", tour.cashback_rate)?;
    validate_rate("commission_rate", tour.commission_rate)?;

    Ok(())
}

/// Validates a map region record.
///
/// ## Rules
/// - id and name are present
/// - coordinates are percentages (0-100)
pub fn validate_region(region: &Region) -> ValidationResult<()> {
    validate_required_text("id", &region.id)?;

    if region.name.is_empty() {
        return Err(ValidationError::required("name"));
    }

    for (field, value) in [("x", region.x), ("y", region.y)] {
        if value > MAX_MAP_COORDINATE {
            return Err(ValidationError::OutOfRange {
                field: field.to_string(),
                min: 0,
                max: MAX_MAP_COORDINATE as i64,
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
