//! # State Module
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐        ┌──────────────────────────────────────┐  │
//! │  │  SessionStore    │◄───────│  BookingFlow, submit_inquiry, UI     │  │
//! │  │  (trait)         │        │  (constructor-injected, no global)   │  │
//! │  └────────┬─────────┘        └──────────────────────────────────────┘  │
//! │           │ impl                                                        │
//! │  ┌────────▼─────────┐                                                   │
//! │  │  SessionState    │   Arc<Mutex<Session>>                            │
//! │  │                  │   user · wallet · bookings · plan · toggles      │
//! │  └──────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod plan;
mod session;

pub use plan::CustomPlan;
pub use session::{Session, SessionState, SessionStore};
