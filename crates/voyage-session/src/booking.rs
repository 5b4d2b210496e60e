//! # Booking Flow
//!
//! Drives the booking widget on a tour page from first click to receipt.
//!
//! ## Phases
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Composing ──submit()──► Submitting ──commit delay──► Submitted        │
//! │     ▲  │                                               (terminal)      │
//! │     │  │ PRIVATE without a date                                         │
//! │     └──┘ → ValidationError, nothing committed                           │
//! │                                                                         │
//! │  Composing inputs: mode, participants (never below 1), chosen date     │
//! │  quote() is the live preview; submit() commits that same quote          │
//! │                                                                         │
//! │  Commit order: add_booking(booking) then add_to_wallet(cashback)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `submit` takes `&mut self`, so one flow can never have two submissions in
//! flight. If a `submit` future is dropped during the commit delay nothing
//! has been committed, the phase falls back to `Composing` and the flow may
//! be submitted again.

use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;
use voyage_core::catalog::CatalogProvider;
use voyage_core::pricing::{quote, PriceQuote};
use voyage_core::validation::resolve_departure_date;
use voyage_core::{Booking, BookingMode, Money, Tour};

use crate::config::SessionConfig;
use crate::error::{BookingError, BookingResult};
use crate::state::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingPhase {
    Composing,
    /// Commit in flight.
    Submitting,
    Submitted,
}

/// What the success screen shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookingReceipt {
    pub booking: Booking,
    /// Credited to the wallet.
    pub cashback: Money,
    /// Earned by the referrer.
    pub commission: Money,
}

/// Holds the flow in `Submitting` until the commit lands.
///
/// Dropped without [`commit`](Self::commit) (the submit future was
/// cancelled), it puts the flow back to `Composing`.
struct SubmittingGuard<'a> {
    phase: &'a mut BookingPhase,
    committed: bool,
}

impl<'a> SubmittingGuard<'a> {
    fn enter(phase: &'a mut BookingPhase) -> Self {
        *phase = BookingPhase::Submitting;
        SubmittingGuard {
            phase,
            committed: false,
        }
    }

    fn commit(mut self) {
        *self.phase = BookingPhase::Submitted;
        self.committed = true;
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        if !self.committed {
            debug!("Booking submit cancelled before commit");
            *self.phase = BookingPhase::Composing;
        }
    }
}

/// Booking widget controller for one tour.
pub struct BookingFlow<S: SessionStore> {
    tour: Tour,
    store: S,
    mode: BookingMode,
    participants: u32,
    chosen_date: Option<NaiveDate>,
    phase: BookingPhase,
    commit_delay: Duration,
}

impl<S: SessionStore> BookingFlow<S> {
    /// Starts composing a GROUP booking for one traveller.
    pub fn new(tour: Tour, store: S, commit_delay: Duration) -> Self {
        BookingFlow {
            tour,
            store,
            mode: BookingMode::Group,
            participants: 1,
            chosen_date: None,
            phase: BookingPhase::Composing,
            commit_delay,
        }
    }

    /// Looks the tour up in `catalog` and starts a flow for it.
    pub fn for_tour(
        catalog: &dyn CatalogProvider,
        tour_id: &str,
        store: S,
        config: &SessionConfig,
    ) -> BookingResult<Self> {
        let tour = catalog
            .get_tour(tour_id)
            .ok_or_else(|| BookingError::TourNotFound(tour_id.to_string()))?;
        Ok(Self::new(tour, store, config.commit_delay()))
    }

    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    pub fn phase(&self) -> BookingPhase {
        self.phase
    }

    pub fn mode(&self) -> BookingMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: BookingMode) {
        self.mode = mode;
    }

    pub fn participants(&self) -> u32 {
        self.participants
    }

    /// Sets the head count; anything below 1 becomes 1.
    pub fn set_participants(&mut self, participants: u32) {
        self.participants = participants.max(1);
    }

    pub fn increment_participants(&mut self) {
        self.participants = self.participants.saturating_add(1);
    }

    pub fn decrement_participants(&mut self) {
        self.participants = self.participants.saturating_sub(1).max(1);
    }

    pub fn chosen_date(&self) -> Option<NaiveDate> {
        self.chosen_date
    }

    /// Date picked for a PRIVATE departure. Ignored in GROUP mode.
    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.chosen_date = date;
    }

    /// The departure date as the widget should display it.
    pub fn departure_date(&self) -> Option<NaiveDate> {
        resolve_departure_date(&self.tour, self.mode, self.chosen_date).ok()
    }

    /// Live price preview for the current inputs.
    pub fn quote(&self) -> PriceQuote {
        quote(&self.tour, self.mode, self.participants)
    }

    /// Validates, prices and commits the booking.
    pub async fn submit(&mut self) -> BookingResult<BookingReceipt> {
        if self.phase == BookingPhase::Submitted {
            return Err(BookingError::AlreadySubmitted);
        }

        let date = resolve_departure_date(&self.tour, self.mode, self.chosen_date).map_err(|e| {
            warn!(tour_id = %self.tour.id, mode = %self.mode, error = %e, "Booking rejected");
            e
        })?;

        let quote = self.quote();
        let booking = Booking::from_quote(&self.tour, &quote, date, self.store.locale());

        let guard = SubmittingGuard::enter(&mut self.phase);
        debug!(
            booking_id = %booking.id,
            delay_ms = self.commit_delay.as_millis() as u64,
            "Committing booking"
        );
        tokio::time::sleep(self.commit_delay).await;

        self.store.add_booking(booking.clone());
        self.store.add_to_wallet(quote.cashback);
        guard.commit();

        info!(
            booking_id = %booking.id,
            tour_id = %self.tour.id,
            mode = %self.mode,
            participants = quote.participants,
            total = %quote.total_price,
            cashback = %quote.cashback,
            "Booking submitted"
        );

        Ok(BookingReceipt {
            booking,
            cashback: quote.cashback,
            commission: quote.commission,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SessionState;
    use voyage_core::{BookingStatus, Locale, StaticCatalog};

    fn flow(state: &SessionState) -> BookingFlow<SessionState> {
        BookingFlow::for_tour(
            &StaticCatalog::seeded(),
            "t1",
            state.clone(),
            &SessionConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_unknown_tour_is_not_found() {
        let result = BookingFlow::for_tour(
            &StaticCatalog::seeded(),
            "t404",
            SessionState::default(),
            &SessionConfig::default(),
        );
        assert!(matches!(result, Err(BookingError::TourNotFound(ref id)) if id == "t404"));
    }

    #[test]
    fn test_participant_stepper_never_below_one() {
        let mut flow = flow(&SessionState::default());
        flow.decrement_participants();
        assert_eq!(flow.participants(), 1);

        flow.increment_participants();
        flow.increment_participants();
        assert_eq!(flow.participants(), 3);

        flow.set_participants(0);
        assert_eq!(flow.participants(), 1);
    }

    #[test]
    fn test_preview_tracks_inputs() {
        let mut flow = flow(&SessionState::default());
        assert_eq!(flow.quote().total_price, Money::from_major(6800));

        flow.set_participants(4);
        assert_eq!(flow.quote().total_price, Money::from_major(25024));

        flow.set_mode(BookingMode::Private);
        assert_eq!(flow.quote().total_price, Money::from_major(34000));
    }

    #[test]
    fn test_departure_date_by_mode() {
        let mut flow = flow(&SessionState::default());
        assert_eq!(flow.departure_date(), Some(flow.tour().start_date));

        flow.set_mode(BookingMode::Private);
        assert_eq!(flow.departure_date(), None);

        let chosen = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
        flow.set_date(Some(chosen));
        assert_eq!(flow.departure_date(), Some(chosen));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_commits_booking_and_cashback() {
        let state = SessionState::default();
        let mut flow = flow(&state);
        flow.set_participants(2);

        let receipt = flow.submit().await.unwrap();

        assert_eq!(receipt.cashback, Money::from_major(646));
        assert_eq!(receipt.commission, Money::from_minor(38_760));
        assert_eq!(receipt.booking.total_price, Money::from_major(12920));
        assert_eq!(receipt.booking.status, BookingStatus::Pending);
        assert_eq!(receipt.booking.mode, BookingMode::Group);
        assert_eq!(receipt.booking.date, flow.tour().start_date);
        assert_eq!(receipt.booking.participants, 2);

        assert_eq!(state.wallet_balance(), Money::from_major(646));
        assert_eq!(state.bookings(), vec![receipt.booking.clone()]);
        assert_eq!(flow.phase(), BookingPhase::Submitted);
    }

    #[tokio::test(start_paused = true)]
    async fn test_private_without_date_commits_nothing() {
        let state = SessionState::default();
        let mut flow = flow(&state);
        flow.set_mode(BookingMode::Private);
        flow.set_participants(3);

        let err = flow.submit().await.unwrap_err();

        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(err.to_string(), "date is required");
        assert!(state.bookings().is_empty());
        assert!(state.wallet_balance().is_zero());
        assert_eq!(flow.phase(), BookingPhase::Composing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_private_booking_uses_chosen_date() {
        let state = SessionState::default();
        let mut flow = flow(&state);
        let chosen = NaiveDate::from_ymd_opt(2024, 11, 2).unwrap();
        flow.set_mode(BookingMode::Private);
        flow.set_participants(4);
        flow.set_date(Some(chosen));

        let receipt = flow.submit().await.unwrap();

        assert_eq!(receipt.booking.date, chosen);
        assert_eq!(receipt.booking.mode, BookingMode::Private);
        assert_eq!(receipt.booking.total_price, Money::from_major(34000));
        assert_eq!(state.wallet_balance(), Money::from_major(1700));
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_lands_before_commit_delay() {
        let state = SessionState::default();
        let mut flow = flow(&state);

        {
            let submit = flow.submit();
            tokio::pin!(submit);

            let early = tokio::time::timeout(Duration::from_millis(799), &mut submit).await;
            assert!(early.is_err());
            assert!(state.bookings().is_empty());

            submit.await.unwrap();
        }

        assert_eq!(state.bookings().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_submit_returns_to_composing() {
        let state = SessionState::default();
        let mut flow = flow(&state);

        let cancelled = tokio::time::timeout(Duration::from_millis(100), flow.submit()).await;

        assert!(cancelled.is_err());
        assert_eq!(flow.phase(), BookingPhase::Composing);
        assert!(state.bookings().is_empty());
        assert!(state.wallet_balance().is_zero());

        flow.submit().await.unwrap();
        assert_eq!(flow.phase(), BookingPhase::Submitted);
        assert_eq!(state.bookings().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_submit_is_rejected() {
        let state = SessionState::default();
        let mut flow = flow(&state);

        flow.submit().await.unwrap();
        let err = flow.submit().await.unwrap_err();

        assert!(matches!(err, BookingError::AlreadySubmitted));
        assert_eq!(state.bookings().len(), 1);
        assert_eq!(state.wallet_balance(), Money::from_major(340));
    }

    #[tokio::test(start_paused = true)]
    async fn test_receipt_json_shape() {
        let state = SessionState::default();
        let mut flow = flow(&state);
        flow.set_participants(3);

        let receipt = flow.submit().await.unwrap();
        let json = serde_json::to_value(&receipt).unwrap();

        assert_eq!(json["booking"]["type"], "GROUP");
        assert_eq!(json["booking"]["status"], "PENDING");
        assert_eq!(json["booking"]["tourId"], "t1");
        assert!(json.get("cashback").is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_tour_title_follows_session_locale() {
        let state = SessionState::default();
        state.set_locale(Locale::En);
        let mut flow = flow(&state);

        let receipt = flow.submit().await.unwrap();
        assert_eq!(
            receipt.booking.tour_title,
            "Xi’an Ancient Capital: Terracotta Warriors Restoration"
        );
    }
}
