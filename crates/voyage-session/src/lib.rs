//! # voyage-session: Session State & Booking Flow
//!
//! The orchestration layer between the front-end and the pure engine.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        voyage-session                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐  │
//! │  │  BookingFlow     │  │  submit_inquiry  │  │  ChatSession         │  │
//! │  │  (booking.rs)    │  │  (inquiry.rs)    │  │  (chat.rs)           │  │
//! │  │                  │  │                  │  │                      │  │
//! │  │  quote preview,  │  │  prefilled from  │  │  greeting, history,  │  │
//! │  │  commit delay,   │  │  custom plan,    │  │  empty-reply         │  │
//! │  │  cashback        │  │  clears plan     │  │  fallback            │  │
//! │  └────────┬─────────┘  └────────┬─────────┘  └──────────┬───────────┘  │
//! │           │                     │                       │              │
//! │           ▼                     ▼                       ▼              │
//! │  ┌─────────────────────────────────────────┐  ┌──────────────────────┐ │
//! │  │  SessionStore / SessionState (state/)   │  │  voyage-assistant    │ │
//! │  └─────────────────────────────────────────┘  └──────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod booking;
pub mod chat;
pub mod config;
pub mod error;
pub mod inquiry;
pub mod state;

pub use booking::{BookingFlow, BookingPhase, BookingReceipt};
pub use chat::ChatSession;
pub use config::SessionConfig;
pub use error::{BookingError, BookingResult, InquiryError, InquiryResult};
pub use inquiry::{submit_inquiry, InquiryForm, InquiryReceipt};
pub use state::{CustomPlan, Session, SessionState, SessionStore};

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// Reads `RUST_LOG`; defaults to `info,voyage=debug`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,voyage=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
