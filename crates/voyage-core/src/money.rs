//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  6800 × 0.95 in floating point is 6459.999999999999, not 6460.          │
//! │  A booking total shown in the widget and the total stored on the        │
//! │  booking must be the SAME number, so floats are out.                    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer fen (1/100 yuan) + basis-point rates            │
//! │    680000 fen × (10000 − 500) / 10000 = 646000 fen = ¥6460.00           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use voyage_core::money::Money;
//! use voyage_core::types::Rate;
//!
//! let price = Money::from_major(6800);          // ¥6800.00
//! let couple = price.discounted_by(Rate::from_bps(500));
//! assert_eq!(couple, Money::from_major(6460));
//!
//! let total = couple * 2u32;
//! assert_eq!(total.percentage_of(Rate::from_bps(500)), Money::from_major(646));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::Rate;

/// Basis points in one whole (100%).
const BPS_SCALE: i128 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (fen for CNY).
///
/// ## Design Decisions
/// - **i64 (signed)**: discount amounts are computed as differences
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serialized as the raw minor-unit integer**: the front-end divides by 100
///
/// ## Where Money Flows
/// ```text
/// Tour.group_price ──► PriceQuote.base_price ──► final_price_per_person
///                                                      │
///                                                      ▼
///                      Booking.total_price ◄── PriceQuote.total_price
///                                                      │
///                             ┌────────────────────────┤
///                             ▼                        ▼
///                 User.wallet_balance += cashback   commission
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from the minor unit (fen).
    ///
    /// ```rust
    /// use voyage_core::money::Money;
    ///
    /// let price = Money::from_minor(680_050); // ¥6800.50
    /// assert_eq!(price.minor(), 680_050);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from whole yuan.
    ///
    /// Catalog prices are whole-yuan amounts, so this is the common constructor.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Returns the value in the minor unit.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the whole-yuan portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the fen portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns `rate` of this amount, rounded half away from zero to the
    /// nearest fen.
    ///
    /// Used for cashback and referral commission.
    ///
    /// ```rust
    /// use voyage_core::money::Money;
    /// use voyage_core::types::Rate;
    ///
    /// let total = Money::from_major(12920);
    /// assert_eq!(total.percentage_of(Rate::from_bps(500)).minor(), 64_600);
    ///
    /// // ¥0.25 × 3% = 0.75 fen → 1 fen
    /// assert_eq!(Money::from_minor(25).percentage_of(Rate::from_bps(300)).minor(), 1);
    /// ```
    pub fn percentage_of(&self, rate: Rate) -> Money {
        Money(round_div(self.0 as i128 * rate.bps() as i128, BPS_SCALE))
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// The discount itself is rounded first and then subtracted, so
    /// `amount - amount.discounted_by(r) == amount.percentage_of(r)` always holds.
    ///
    /// ```rust
    /// use voyage_core::money::Money;
    /// use voyage_core::types::Rate;
    ///
    /// let base = Money::from_major(6800);
    /// assert_eq!(base.discounted_by(Rate::from_bps(800)), Money::from_major(6256));
    /// ```
    pub fn discounted_by(&self, rate: Rate) -> Money {
        *self - self.percentage_of(rate)
    }

    /// Multiplies a per-person amount by a head count.
    #[inline]
    pub const fn times(&self, count: u32) -> Self {
        Money(self.0 * count as i64)
    }
}

/// Integer division rounding half away from zero.
fn round_div(numerator: i128, denominator: i128) -> i64 {
    let half = denominator / 2;
    let rounded = if numerator >= 0 {
        (numerator + half) / denominator
    } else {
        (numerator - half) / denominator
    };
    rounded as i64
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `¥6800.00`.
///
/// ## Note
/// This is for logs and the price sheet. Front-end formatting (thousands
/// separators, locale) happens in the UI.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}¥{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a participant count.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: u32) -> Self {
        self.times(count)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
