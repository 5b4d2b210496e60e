//! # Session State
//!
//! Per-visitor state: the signed-in user, the custom plan and UI toggles.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Operations                             │
//! │                                                                         │
//! │  Caller                   SessionStore            State Change          │
//! │  ──────                   ────────────            ────────────          │
//! │                                                                         │
//! │  BookingFlow::submit ───► add_booking() ────────► bookings.push(b)     │
//! │                     └───► add_to_wallet() ──────► balance += cashback  │
//! │                                                                         │
//! │  Map "add to plan" ─────► add_to_plan() ────────► plan.add(region)     │
//! │  Map "remove" ──────────► remove_from_plan() ───► plan.remove(id)      │
//! │  submit_inquiry ────────► clear_plan() ─────────► plan.clear()         │
//! │                                                                         │
//! │  Header toggles ────────► set_locale / set_cart_open / set_chat_open   │
//! │                                                                         │
//! │  NOTE: Every operation takes the mutex exactly once, so each one is    │
//! │        atomic with respect to the others.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;
use voyage_core::{Booking, Locale, Money, Region, User};

use crate::config::SessionConfig;
use crate::state::plan::CustomPlan;

/// Everything the front-end shows about the current visitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user: User,
    pub plan: CustomPlan,
    pub locale: Locale,
    pub is_cart_open: bool,
    pub is_chat_open: bool,
}

impl Session {
    /// A fresh session: empty wallet, no bookings, empty plan, panels closed.
    pub fn new(config: &SessionConfig) -> Self {
        Session {
            user: User {
                id: config.user_id.clone(),
                name: config.user_name.clone(),
                avatar_url: config.avatar_url.clone(),
                wallet_balance: Money::zero(),
                referral_code: config.referral_code.clone(),
                is_member: config.is_member,
                bookings: Vec::new(),
            },
            plan: CustomPlan::new(),
            locale: config.locale,
            is_cart_open: false,
            is_chat_open: false,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(&SessionConfig::default())
    }
}

// =============================================================================
// Store Trait
// =============================================================================

/// Mutations and reads on a visitor's session.
///
/// None of these operations can fail.
pub trait SessionStore: Send + Sync {
    /// Credits the wallet. Negative amounts are ignored.
    fn add_to_wallet(&self, amount: Money);

    /// Appends to booking history. Does not touch the wallet.
    fn add_booking(&self, booking: Booking);

    /// Adds a region to the custom plan unless already present.
    fn add_to_plan(&self, region: Region);

    fn remove_from_plan(&self, region_id: &str);

    fn clear_plan(&self);

    fn set_locale(&self, locale: Locale);

    fn locale(&self) -> Locale;

    fn set_cart_open(&self, open: bool);

    fn is_cart_open(&self) -> bool;

    fn set_chat_open(&self, open: bool);

    fn is_chat_open(&self) -> bool;

    fn plan(&self) -> CustomPlan;

    fn wallet_balance(&self) -> Money;

    fn bookings(&self) -> Vec<Booking>;

    /// A copy of the whole session.
    fn snapshot(&self) -> Session;
}

// =============================================================================
// In-Memory Store
// =============================================================================

/// In-memory [`SessionStore`].
///
/// Clones share the same session, so one handle can go to the booking flow
/// while another renders the dashboard.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    pub fn new(config: &SessionConfig) -> Self {
        SessionState {
            session: Arc::new(Mutex::new(Session::new(config))),
        }
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut session)
    }
}

impl SessionStore for SessionState {
    fn add_to_wallet(&self, amount: Money) {
        if amount.is_negative() {
            warn!(%amount, "Ignoring negative wallet credit");
            return;
        }

        let balance = self.with_session_mut(|s| {
            s.user.wallet_balance += amount;
            s.user.wallet_balance
        });
        info!(%amount, %balance, "Wallet credited");
    }

    fn add_booking(&self, booking: Booking) {
        info!(
            booking_id = %booking.id,
            tour_id = %booking.tour_id,
            participants = booking.participants,
            total = %booking.total_price,
            "Booking recorded"
        );
        self.with_session_mut(|s| s.user.bookings.push(booking));
    }

    fn add_to_plan(&self, region: Region) {
        let region_id = region.id.clone();
        let added = self.with_session_mut(|s| s.plan.add(region));
        debug!(region_id = %region_id, added, "Add to custom plan");
    }

    fn remove_from_plan(&self, region_id: &str) {
        let removed = self.with_session_mut(|s| s.plan.remove(region_id));
        debug!(region_id = %region_id, removed, "Remove from custom plan");
    }

    fn clear_plan(&self) {
        self.with_session_mut(|s| s.plan.clear());
        debug!("Custom plan cleared");
    }

    fn set_locale(&self, locale: Locale) {
        self.with_session_mut(|s| s.locale = locale);
    }

    fn locale(&self) -> Locale {
        self.with_session(|s| s.locale)
    }

    fn set_cart_open(&self, open: bool) {
        self.with_session_mut(|s| s.is_cart_open = open);
    }

    fn is_cart_open(&self) -> bool {
        self.with_session(|s| s.is_cart_open)
    }

    fn set_chat_open(&self, open: bool) {
        self.with_session_mut(|s| s.is_chat_open = open);
    }

    fn is_chat_open(&self) -> bool {
        self.with_session(|s| s.is_chat_open)
    }

    fn plan(&self) -> CustomPlan {
        self.with_session(|s| s.plan.clone())
    }

    fn wallet_balance(&self) -> Money {
        self.with_session(|s| s.user.wallet_balance)
    }

    fn bookings(&self) -> Vec<Booking> {
        self.with_session(|s| s.user.bookings.clone())
    }

    fn snapshot(&self) -> Session {
        self.with_session(Session::clone)
    }
}
