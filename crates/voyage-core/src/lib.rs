//! # voyage-core: Pure Business Logic for Voyage
//!
//! The pricing and rewards engine behind the tour booking widget, plus the
//! catalog types it reads. Every function here is deterministic and free of I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Voyage Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front-end (SPA)                              │   │
//! │  │   Tour list ──► Tour detail / booking ──► Dashboard ──► Chat    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 voyage-session                                  │   │
//! │  │   SessionState, BookingFlow, inquiry, ChatSession               │   │
//! │  └──────────────┬──────────────────────────────┬───────────────────┘   │
//! │                 │                              │                        │
//! │  ┌──────────────▼──────────────────┐  ┌────────▼──────────────────┐    │
//! │  │     ★ voyage-core (THIS) ★      │  │    voyage-assistant       │    │
//! │  │  types · money · pricing        │  │    Gemini chat backend    │    │
//! │  │  catalog · validation           │  │                           │    │
//! │  │  NO I/O • PURE FUNCTIONS        │  │                           │    │
//! │  └─────────────────────────────────┘  └───────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Tour, Booking, Region, User, Rate, Locale)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Discount tiers, totals, cashback and commission
//! - [`catalog`] - Catalog provider trait and the static catalog
//! - [`error`] - Domain error types
//! - [`validation`] - Booking input and catalog record validation
//!
//! ## Example Usage
//!
//! ```rust
//! use voyage_core::catalog::{CatalogProvider, StaticCatalog};
//! use voyage_core::pricing::quote;
//! use voyage_core::{BookingMode, Money};
//!
//! let catalog = StaticCatalog::seeded();
//! let tour = catalog.get_tour("t1").unwrap();
//!
//! let q = quote(&tour, BookingMode::Group, 4);
//! assert_eq!(q.total_price, Money::from_major(25024));
//! assert_eq!(q.discount_label(), "Group Discount");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{CatalogProvider, StaticCatalog};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{quote, DiscountTier, PriceQuote};
pub use types::*;
