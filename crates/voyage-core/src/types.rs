//! # Domain Types
//!
//! Core domain types used throughout Voyage.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Tour       │   │     Booking     │   │     Region      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  tour_id        │   │  id             │       │
//! │  │  group_price    │   │  tour_title     │   │  x, y (0-100)   │       │
//! │  │  private_price  │   │  total_price    │   │  linked_tour_ids│──►Tour│
//! │  │  cashback_rate  │   │  mode, status   │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Rate       │   │   BookingMode   │   │  LocalizedText  │       │
//! │  │  bps (u32)      │   │  Group          │   │  Locale → text  │       │
//! │  │  500 = 5%       │   │  Private        │   │  zh (default)   │       │
//! │  └─────────────────┘   └─────────────────┘   │  en             │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `Booking` copies the tour title and the computed total at booking time.
//! Later catalog changes never rewrite booking history.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;
use crate::pricing::PriceQuote;

// =============================================================================
// Rate
// =============================================================================

/// A fraction in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 500 bps = 5% (couple discount, standard cashback)
/// 800 bps = 8% (group discount)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rate(u32);

impl Rate {
    /// The whole: 10000 bps.
    pub const MAX_BPS: u32 = 10_000;

    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 100 == 0 {
            write!(f, "{}%", self.0 / 100)
        } else {
            write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
        }
    }
}

// =============================================================================
// Locale & Localized Text
// =============================================================================

/// Display language of the session.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Simplified Chinese, the site's primary language.
    #[default]
    Zh,
    En,
}

impl Locale {
    pub const fn code(&self) -> &'static str {
        match self {
            Locale::Zh => "zh",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zh" | "zh-cn" | "cn" => Ok(Locale::Zh),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            other => Err(ValidationError::InvalidFormat {
                field: "locale".to_string(),
                reason: format!("unknown locale '{}', expected zh or en", other),
            }),
        }
    }
}

/// One displayable attribute in every locale it was authored in.
///
/// Lookup falls back to the default locale, then to any available text, so a
/// missing translation never renders as a hole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LocalizedText(BTreeMap<Locale, String>);

impl LocalizedText {
    /// Text authored in both site languages.
    pub fn new(zh: impl Into<String>, en: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(Locale::Zh, zh.into());
        map.insert(Locale::En, en.into());
        LocalizedText(map)
    }

    /// Text authored in a single locale.
    pub fn single(locale: Locale, text: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(locale, text.into());
        LocalizedText(map)
    }

    pub fn get(&self, locale: Locale) -> &str {
        self.0
            .get(&locale)
            .or_else(|| self.0.get(&Locale::default()))
            .or_else(|| self.0.values().next())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|text| text.trim().is_empty())
    }
}

// =============================================================================
// Tour Category
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TourCategory {
    /// Educational study tours.
    Study,
    /// Leisure sightseeing.
    Tourism,
    /// Business delegations.
    Business,
}

impl TourCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TourCategory::Study => "STUDY",
            TourCategory::Tourism => "TOURISM",
            TourCategory::Business => "BUSINESS",
        }
    }
}

impl fmt::Display for TourCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Booking Mode & Status
// =============================================================================

/// How a tour is booked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingMode {
    /// Shared departure on the tour's fixed start date, tiered discounts.
    #[default]
    Group,
    /// Bespoke departure on a chosen date, never discounted.
    Private,
}

impl fmt::Display for BookingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingMode::Group => f.write_str("GROUP"),
            BookingMode::Private => f.write_str("PRIVATE"),
        }
    }
}

/// Booking lifecycle status.
///
/// Bookings are created `Pending`. Confirmation and completion belong to an
/// external fulfillment process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
}

// =============================================================================
// Tour
// =============================================================================

/// One day of a tour's itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDay {
    pub day: u32,
    pub title: LocalizedText,
    pub description: LocalizedText,
}

/// A sellable travel product with group and private pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: String,
    pub category: TourCategory,

    pub title: LocalizedText,
    pub subtitle: LocalizedText,
    pub location: LocalizedText,
    pub description: LocalizedText,
    pub features: Vec<LocalizedText>,
    pub itinerary: Vec<ItineraryDay>,

    /// Per-person price for the shared group departure.
    pub group_price: Money,
    /// Per-person price for a private departure.
    pub private_price: Money,
    /// Struck-through reference price. Display only.
    pub original_price: Money,

    pub days: u32,
    pub image_url: String,

    /// Travellers needed before the group departure is confirmed.
    pub min_group_size: u32,
    /// Travellers already signed up for the group departure.
    pub current_group_size: u32,
    pub max_group_size: u32,
    /// Fixed departure date for group bookings.
    pub start_date: NaiveDate,

    /// Share of the booking total credited to the booker's wallet.
    pub cashback_rate: Rate,
    /// Share of the booking total earned by the referrer.
    pub commission_rate: Rate,
}

impl Tour {
    /// Per-person base price for a booking mode.
    #[inline]
    pub fn base_price(&self, mode: BookingMode) -> Money {
        match mode {
            BookingMode::Group => self.group_price,
            BookingMode::Private => self.private_price,
        }
    }

    /// Group departure progress as shown on tour cards.
    pub fn group_status(&self) -> GroupStatus {
        GroupStatus::of(self)
    }
}

/// Fill level of a tour's group departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GroupStatus {
    pub current: u32,
    pub minimum: u32,
    pub maximum: u32,
    /// `current / minimum` as a whole percentage, capped at 100.
    pub progress_percent: u8,
    /// The departure runs once the minimum is reached.
    pub is_confirmed: bool,
    /// Travellers still needed to reach the minimum.
    pub seats_to_start: u32,
    /// Seats left before the group is full.
    pub seats_remaining: u32,
}

impl GroupStatus {
    pub fn of(tour: &Tour) -> Self {
        let current = tour.current_group_size;
        let minimum = tour.min_group_size;
        let progress_percent = if minimum == 0 {
            100
        } else {
            (u64::from(current) * 100 / u64::from(minimum)).min(100) as u8
        };

        GroupStatus {
            current,
            minimum,
            maximum: tour.max_group_size,
            progress_percent,
            is_confirmed: current >= minimum,
            seats_to_start: minimum.saturating_sub(current),
            seats_remaining: tour.max_group_size.saturating_sub(current),
        }
    }
}

// =============================================================================
// Region
// =============================================================================

/// A destination pin on the map explorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: String,
    pub name: LocalizedText,
    /// Horizontal map position, percent of map width (0-100).
    pub x: u8,
    /// Vertical map position, percent of map height (0-100).
    pub y: u8,
    pub description: LocalizedText,
    pub culture_tag: LocalizedText,
    pub image_url: String,
    /// Tours visiting this region. Empty means "make a wish" via inquiry.
    pub linked_tour_ids: Vec<String>,
}

// =============================================================================
// Booking
// =============================================================================

/// A booking recorded in the session.
///
/// Uses the snapshot pattern: title and total are frozen at booking time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub tour_id: String,
    /// Tour title in the session's locale at booking time (frozen).
    pub tour_title: String,
    /// Departure date: the group start date or the chosen private date.
    pub date: NaiveDate,
    pub participants: u32,
    /// Engine total for this booking's mode and participants (frozen).
    pub total_price: Money,
    #[serde(rename = "type")]
    pub mode: BookingMode,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a pending booking from a priced quote.
    ///
    /// The caller has already validated `date` for the quote's mode.
    pub fn from_quote(tour: &Tour, quote: &PriceQuote, date: NaiveDate, locale: Locale) -> Self {
        Booking {
            id: Uuid::new_v4().to_string(),
            tour_id: tour.id.clone(),
            tour_title: tour.title.get(locale).to_string(),
            date,
            participants: quote.participants,
            total_price: quote.total_price,
            mode: quote.mode,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        }
    }
}

// =============================================================================
// User
// =============================================================================

/// The signed-in traveller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub avatar_url: String,
    /// Accumulated cashback. Never negative.
    pub wallet_balance: Money,
    /// Code others enter to credit this user with referral commission.
    pub referral_code: String,
    pub is_member: bool,
    /// Append-only booking history, oldest first.
    pub bookings: Vec<Booking>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_tours;

    #[test]
    fn test_rate_from_bps() {
        let rate = Rate::from_bps(500);
        assert_eq!(rate.bps(), 500);
        assert!((rate.percentage() - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(Rate::from_bps(500).to_string(), "5%");
        assert_eq!(Rate::from_bps(825).to_string(), "8.25%");
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("ZH".parse::<Locale>().unwrap(), Locale::Zh);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_localized_text_fallback() {
        let both = LocalizedText::new("西安", "Xi'an");
        assert_eq!(both.get(Locale::En), "Xi'an");
        assert_eq!(both.get(Locale::Zh), "西安");

        let zh_only = LocalizedText::single(Locale::Zh, "桂林");
        assert_eq!(zh_only.get(Locale::En), "桂林");

        let en_only = LocalizedText::single(Locale::En, "Guilin");
        assert_eq!(en_only.get(Locale::Zh), "Guilin");

        assert_eq!(LocalizedText::default().get(Locale::En), "");
        assert!(LocalizedText::default().is_empty());
    }

    #[test]
    fn test_localized_text_serializes_as_map() {
        let text = LocalizedText::new("上海", "Shanghai");
        let json = serde_json::to_value(&text).unwrap();
        assert_eq!(json["zh"], "上海");
        assert_eq!(json["en"], "Shanghai");
    }

    #[test]
    fn test_booking_mode_default_is_group() {
        assert_eq!(BookingMode::default(), BookingMode::Group);
        assert_eq!(BookingStatus::default(), BookingStatus::Pending);
    }

    #[test]
    fn test_base_price_by_mode() {
        let tour = &seed_tours()[0];
        assert_eq!(tour.base_price(BookingMode::Group), Money::from_major(6800));
        assert_eq!(tour.base_price(BookingMode::Private), Money::from_major(8500));
    }

    #[test]
    fn test_group_status_below_minimum() {
        let mut tour = seed_tours()[0].clone();
        tour.min_group_size = 10;
        tour.current_group_size = 8;
        tour.max_group_size = 20;

        let status = tour.group_status();
        assert_eq!(status.progress_percent, 80);
        assert!(!status.is_confirmed);
        assert_eq!(status.seats_to_start, 2);
        assert_eq!(status.seats_remaining, 12);
    }

    #[test]
    fn test_group_status_caps_progress() {
        let mut tour = seed_tours()[0].clone();
        tour.min_group_size = 4;
        tour.current_group_size = 9;
        tour.max_group_size = 10;

        let status = tour.group_status();
        assert_eq!(status.progress_percent, 100);
        assert!(status.is_confirmed);
        assert_eq!(status.seats_to_start, 0);
        assert_eq!(status.seats_remaining, 1);
    }

    #[test]
    fn test_booking_serializes_mode_as_type() {
        let tour = &seed_tours()[0];
        let quote = crate::pricing::quote(tour, BookingMode::Group, 2);
        let booking = Booking::from_quote(tour, &quote, tour.start_date, Locale::En);

        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["type"], "GROUP");
        assert_eq!(json["status"], "PENDING");
        assert_eq!(json["tourId"], "t1");
        assert_eq!(json["totalPrice"], 1_292_000);
    }
}
