//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## One Minor Unit: the Millime
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE MINOR UNIT PROBLEM                                                 │
//! │                                                                         │
//! │  1 dinar = 1000 millimes (three decimal places)                         │
//! │                                                                         │
//! │  Multiplying by 100 and calling the result "millimes" makes             │
//! │  2.500 DT show up as 0.250 DT on a receipt.                             │
//! │                                                                         │
//! │  OUR SOLUTION: every amount is an i64 count of millimes                 │
//! │    2.500 DT  ──►  Money(2500)                                           │
//! │    Conversion, arithmetic and display all use MILLIMES_PER_DINAR        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use medina_core::money::Money;
//!
//! // Create from millimes (preferred)
//! let price = Money::from_millimes(12_500); // 12.500 DT
//!
//! // Arithmetic operations
//! let doubled = price * 2;                          // 25.000 DT
//! let total = price + Money::from_millimes(500);    // 13.000 DT
//! assert_eq!(doubled.millimes(), 25_000);
//! assert_eq!(total.to_string(), "13.000 DT");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::Percentage;

/// Number of millimes in one dinar.
///
/// This is the only minor-unit scale in the crate. Conversions from
/// decimal amounts, arithmetic, and display all go through it.
pub const MILLIMES_PER_DINAR: i64 = 1000;

/// Number of decimal places shown for an amount.
pub const MINOR_UNIT_DIGITS: u32 = 3;

/// Currency suffix used by `Display`.
pub const CURRENCY_SYMBOL: &str = "DT";

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in millimes (thousandths of a dinar).
///
/// ## Design Decisions
/// - **i64 (signed)**: A manual discount larger than the subtotal can drive
///   an order total below zero, so negative amounts must be representable
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serializes as a plain integer**: `{"subtotal": 200000}`
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  LineItem.unit_price ──► effective price × qty ──► subtotal              │
/// │                                                                         │
/// │  subtotal ──► coupon / manual discount ──► + shipping ──► total         │
/// │                                                                         │
/// │  purchase amount ──► PointsCalculator ──► points earned                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from millimes (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use medina_core::money::Money;
    ///
    /// let price = Money::from_millimes(2500); // 2.500 DT
    /// assert_eq!(price.millimes(), 2500);
    /// ```
    #[inline]
    pub const fn from_millimes(millimes: i64) -> Self {
        Money(millimes)
    }

    /// Creates a Money value from whole dinars.
    #[inline]
    pub const fn from_dinars(dinars: i64) -> Self {
        Money(dinars.saturating_mul(MILLIMES_PER_DINAR))
    }

    /// Creates a Money value from major and minor units (dinars and millimes).
    ///
    /// ## Example
    /// ```rust
    /// use medina_core::money::Money;
    ///
    /// let price = Money::from_major_minor(10, 990); // 10.990 DT
    /// assert_eq!(price.millimes(), 10_990);
    ///
    /// let negative = Money::from_major_minor(-5, 500); // -5.500 DT
    /// assert_eq!(negative.millimes(), -5_500);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * MILLIMES_PER_DINAR - minor)
        } else {
            Money(major * MILLIMES_PER_DINAR + minor)
        }
    }

    /// Converts a decimal dinar amount to millimes, rounding half away
    /// from zero at the third decimal place.
    ///
    /// Returns `None` when the amount does not fit in an `i64` of millimes.
    ///
    /// ## Example
    /// ```rust
    /// use medina_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let amount = Money::from_major_decimal(Decimal::new(25, 1)).unwrap(); // 2.5
    /// assert_eq!(amount.millimes(), 2500);
    ///
    /// let rounded = Money::from_major_decimal(Decimal::new(10005, 4)).unwrap(); // 1.0005
    /// assert_eq!(rounded.millimes(), 1001);
    /// ```
    pub fn from_major_decimal(amount: Decimal) -> Option<Self> {
        amount
            .checked_mul(Decimal::from(MILLIMES_PER_DINAR))?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .map(Money)
    }

    /// Returns the value in millimes.
    #[inline]
    pub const fn millimes(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dinars) portion, truncated toward zero.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MILLIMES_PER_DINAR
    }

    /// Returns the minor unit (millimes) portion (always 0-999).
    ///
    /// ## Example
    /// ```rust
    /// use medina_core::money::Money;
    ///
    /// assert_eq!(Money::from_millimes(10_990).minor_part(), 990);
    /// assert_eq!(Money::from_millimes(-5_500).minor_part(), 500);
    /// ```
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MILLIMES_PER_DINAR).abs()
    }

    /// Returns the amount in dinars as an exact decimal.
    #[inline]
    pub fn to_major_decimal(&self) -> Decimal {
        Decimal::new(self.0, MINOR_UNIT_DIGITS)
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.saturating_abs())
    }

    /// Clamps negative values to zero.
    ///
    /// ```rust
    /// use medina_core::money::Money;
    ///
    /// assert_eq!(Money::from_millimes(-5).non_negative(), Money::zero());
    /// assert_eq!(Money::from_millimes(5).non_negative().millimes(), 5);
    /// ```
    #[inline]
    pub const fn non_negative(&self) -> Self {
        if self.0 < 0 {
            Money(0)
        } else {
            Money(self.0)
        }
    }

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use medina_core::money::Money;
    ///
    /// let unit_price = Money::from_millimes(2_990); // 2.990 DT
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.millimes(), 8_970);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Returns `rate` of this amount, rounded half away from zero to the
    /// millime.
    ///
    /// ## Implementation
    /// Integer math on basis points: `(amount * bps + 5000) / 10000`.
    /// `i128` keeps large amounts from overflowing the intermediate product;
    /// a result outside the `i64` range saturates.
    ///
    /// ## Example
    /// ```rust
    /// use medina_core::money::Money;
    /// use medina_core::types::Percentage;
    ///
    /// let subtotal = Money::from_dinars(200);
    /// let coupon = subtotal.percentage_of(Percentage::from_bps(1000)); // 10%
    /// assert_eq!(coupon, Money::from_dinars(20));
    ///
    /// // 0.005 DT rounds up to one millime
    /// let tiny = Money::from_millimes(1).percentage_of(Percentage::from_bps(5000));
    /// assert_eq!(tiny.millimes(), 1);
    /// ```
    pub fn percentage_of(&self, rate: Percentage) -> Money {
        let product = self.0 as i128 * rate.bps() as i128;
        let rounded = div_round_half_away(product, 10_000);
        Money(rounded.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }
}

/// Divides with round-half-away-from-zero. `divisor` must be positive.
fn div_round_half_away(value: i128, divisor: i128) -> i128 {
    let half = divisor / 2;
    if value >= 0 {
        (value + half) / divisor
    } else {
        -((-value + half) / divisor)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================
//
// Arithmetic saturates instead of wrapping: an absurd order reports
// `i64::MAX` millimes rather than a negative subtotal.

/// Renders `12.500 DT`, `-5.000 DT`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:03} {}",
            sign,
            self.major().abs(),
            self.minor_part(),
            CURRENCY_SYMBOL
        )
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
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Pins the minor-unit scale. Changing it silently rescales every
    /// stored amount and every points preview.
    #[test]
    fn test_minor_unit_scale_is_millimes() {
        assert_eq!(MILLIMES_PER_DINAR, 1000);
        assert_eq!(MINOR_UNIT_DIGITS, 3);
        assert_eq!(Money::from_dinars(1).millimes(), 1000);
        assert_eq!(
            Money::from_major_decimal(Decimal::new(25, 1)).unwrap().millimes(),
            2500
        );
    }

    #[test]
    fn test_from_millimes() {
        let money = Money::from_millimes(10_990);
        assert_eq!(money.millimes(), 10_990);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor_part(), 990);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 990).millimes(), 10_990);
        assert_eq!(Money::from_major_minor(-5, 500).millimes(), -5_500);
    }

    #[test]
    fn test_from_major_decimal_rounds_half_away_from_zero() {
        // 1.0004 → 1.000, 1.0005 → 1.001
        assert_eq!(
            Money::from_major_decimal(Decimal::new(10004, 4)).unwrap().millimes(),
            1000
        );
        assert_eq!(
            Money::from_major_decimal(Decimal::new(10005, 4)).unwrap().millimes(),
            1001
        );
        assert_eq!(
            Money::from_major_decimal(Decimal::new(-10005, 4)).unwrap().millimes(),
            -1001
        );
    }

    #[test]
    fn test_from_major_decimal_overflow() {
        assert!(Money::from_major_decimal(Decimal::MAX).is_none());
    }

    #[test]
    fn test_to_major_decimal() {
        let money = Money::from_millimes(2_500);
        assert_eq!(money.to_major_decimal(), Decimal::new(25, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_millimes(12_500)), "12.500 DT");
        assert_eq!(format!("{}", Money::from_millimes(8_000)), "8.000 DT");
        assert_eq!(format!("{}", Money::from_millimes(-5_000)), "-5.000 DT");
        assert_eq!(format!("{}", Money::from_millimes(-250)), "-0.250 DT");
        assert_eq!(format!("{}", Money::zero()), "0.000 DT");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_millimes(1000);
        let b = Money::from_millimes(500);

        assert_eq!((a + b).millimes(), 1500);
        assert_eq!((a - b).millimes(), 500);
        assert_eq!((a * 3).millimes(), 3000);

        let mut c = a;
        c += b;
        c -= Money::from_millimes(100);
        assert_eq!(c.millimes(), 1400);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 200, 300].into_iter().map(Money::from_millimes).sum();
        assert_eq!(total.millimes(), 600);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_percentage_of() {
        let subtotal = Money::from_dinars(200);
        assert_eq!(
            subtotal.percentage_of(Percentage::from_bps(1000)),
            Money::from_dinars(20)
        );
        assert_eq!(subtotal.percentage_of(Percentage::zero()), Money::zero());
        assert_eq!(
            subtotal.percentage_of(Percentage::from_bps(10_000)),
            subtotal
        );
    }

    #[test]
    fn test_percentage_of_rounding() {
        // 12.345 DT × 12.5% = 1.543125 DT → 1.543 DT
        let amount = Money::from_millimes(12_345);
        assert_eq!(
            amount.percentage_of(Percentage::from_bps(1250)).millimes(),
            1_543
        );
        // 0.003 DT × 50% = 0.0015 DT → 0.002 DT
        assert_eq!(
            Money::from_millimes(3)
                .percentage_of(Percentage::from_bps(5000))
                .millimes(),
            2
        );
        assert_eq!(
            Money::from_millimes(-3)
                .percentage_of(Percentage::from_bps(5000))
                .millimes(),
            -2
        );
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_millimes(9_000_000_000_000_000_000);

        assert_eq!(huge.multiply_quantity(2).millimes(), i64::MAX);
        assert_eq!((huge * 2).millimes(), i64::MAX);
        assert_eq!((huge + huge).millimes(), i64::MAX);
        assert_eq!((Money::zero() - huge - huge).millimes(), i64::MIN);

        let total: Money = [huge, huge, Money::from_millimes(1)].into_iter().sum();
        assert_eq!(total.millimes(), i64::MAX);

        assert_eq!(Money::from_millimes(i64::MIN).abs().millimes(), i64::MAX);
    }

    #[test]
    fn test_percentage_of_saturates() {
        let huge = Money::from_millimes(i64::MAX);
        assert_eq!(
            huge.percentage_of(Percentage::from_bps(20_000)).millimes(),
            i64::MAX
        );
        assert_eq!(
            Money::from_millimes(i64::MIN)
                .percentage_of(Percentage::from_bps(20_000))
                .millimes(),
            i64::MIN
        );
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let negative = Money::from_millimes(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().millimes(), 100);
        assert!(negative.non_negative().is_zero());
    }

    #[test]
    fn test_serializes_as_integer_millimes() {
        let json = serde_json::to_string(&Money::from_millimes(183_000)).unwrap();
        assert_eq!(json, "183000");
        let back: Money = serde_json::from_str("2500").unwrap();
        assert_eq!(back.millimes(), 2500);
    }
}
