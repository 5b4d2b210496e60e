//! # Pricing Engine
//!
//! Computes what a booking costs and what it earns.
//!
//! ## Calculation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  quote(tour, mode, participants)                                        │
//! │                                                                         │
//! │  1. base      = group_price (GROUP) | private_price (PRIVATE)          │
//! │  2. tier      = GROUP:   1 → Base, 2 → Couple (5%), 3+ → Group (8%)    │
//! │                 PRIVATE: always Base                                    │
//! │  3. per head  = base − round(base × rate)                              │
//! │  4. total     = per head × participants                                │
//! │     discount  = base × participants − total                            │
//! │  5. cashback  = round(total × tour.cashback_rate)                      │
//! │  6. commission= round(total × tour.commission_rate)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything is integer fen, so the preview in the booking widget and the
//! total stored on the booking are the same value, bit for bit.
//!
//! ## Example
//! ```rust
//! use voyage_core::catalog::seed_tours;
//! use voyage_core::pricing::quote;
//! use voyage_core::{BookingMode, Money};
//!
//! let tour = &seed_tours()[0]; // ¥6800 group price
//! let q = quote(tour, BookingMode::Group, 2);
//! assert_eq!(q.total_price, Money::from_major(12920));
//! assert_eq!(q.discount_label(), "Couple Discount");
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{BookingMode, Locale, Rate, Tour};

/// Discount for exactly two travellers on a group departure.
pub const COUPLE_DISCOUNT: Rate = Rate::from_bps(500);

/// Discount for three or more travellers on a group departure.
pub const GROUP_DISCOUNT: Rate = Rate::from_bps(800);

/// Smallest party that gets the group discount.
pub const GROUP_DISCOUNT_MIN_PARTICIPANTS: u32 = 3;

// =============================================================================
// Discount Tier
// =============================================================================

/// Which discount a booking qualifies for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountTier {
    /// No discount.
    Base,
    /// Two travellers on a group departure.
    Couple,
    /// Three or more travellers on a group departure.
    Group,
}

impl DiscountTier {
    /// Selects the tier for a booking.
    ///
    /// Private departures are never discounted, whatever the head count.
    pub const fn for_booking(mode: BookingMode, participants: u32) -> Self {
        match mode {
            BookingMode::Private => DiscountTier::Base,
            BookingMode::Group => match participants {
                0 | 1 => DiscountTier::Base,
                2 => DiscountTier::Couple,
                _ => DiscountTier::Group,
            },
        }
    }

    pub const fn rate(&self) -> Rate {
        match self {
            DiscountTier::Base => Rate::zero(),
            DiscountTier::Couple => COUPLE_DISCOUNT,
            DiscountTier::Group => GROUP_DISCOUNT,
        }
    }

    /// English label shown next to the price breakdown.
    pub const fn label(&self) -> &'static str {
        match self {
            DiscountTier::Base => "Base Price",
            DiscountTier::Couple => "Couple Discount",
            DiscountTier::Group => "Group Discount",
        }
    }

    pub const fn localized_label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.label(),
            Locale::Zh => match self {
                DiscountTier::Base => "基础价格",
                DiscountTier::Couple => "双人优惠",
                DiscountTier::Group => "拼团优惠",
            },
        }
    }
}

// =============================================================================
// Price Quote
// =============================================================================

/// Result of pricing one booking configuration.
///
/// ## Invariants
/// - `total_price == final_price_per_person × participants`
/// - `subtotal − discount_amount == total_price`
/// - `cashback` and `commission` are derived from `total_price`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub mode: BookingMode,
    /// Head count actually priced (at least 1).
    pub participants: u32,
    /// Per-person price before discount.
    pub base_price: Money,
    pub discount_tier: DiscountTier,
    pub discount_rate: Rate,
    /// Per-person price after discount, rounded to the fen.
    pub final_price_per_person: Money,
    /// `base_price × participants`.
    pub subtotal: Money,
    /// `subtotal − total_price`.
    pub discount_amount: Money,
    pub total_price: Money,
    /// Credited to the booker's wallet once the booking commits.
    pub cashback: Money,
    /// Earned by whoever referred the booker.
    pub commission: Money,
}

impl PriceQuote {
    pub const fn discount_label(&self) -> &'static str {
        self.discount_tier.label()
    }

    pub const fn localized_discount_label(&self, locale: Locale) -> &'static str {
        self.discount_tier.localized_label(locale)
    }

    /// Whether the breakdown should show a discount line.
    pub fn has_discount(&self) -> bool {
        !self.discount_rate.is_zero()
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Prices a booking of `tour` in `mode` for `participants` travellers.
///
/// `participants` below 1 is clamped to 1. `tour.original_price` is a display
/// reference and never enters the calculation.
pub fn quote(tour: &Tour, mode: BookingMode, participants: u32) -> PriceQuote {
    let participants = participants.max(1);

    let base_price = tour.base_price(mode);
    let discount_tier = DiscountTier::for_booking(mode, participants);
    let discount_rate = discount_tier.rate();

    let final_price_per_person = base_price.discounted_by(discount_rate);
    let total_price = final_price_per_person.times(participants);
    let subtotal = base_price.times(participants);

    PriceQuote {
        mode,
        participants,
        base_price,
        discount_tier,
        discount_rate,
        final_price_per_person,
        subtotal,
        discount_amount: subtotal - total_price,
        total_price,
        cashback: total_price.percentage_of(tour.cashback_rate),
        commission: total_price.percentage_of(tour.commission_rate),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
