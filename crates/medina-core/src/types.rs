//! # Domain Types
//!
//! Value types shared by the pricing and points calculators.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐    │
//! │  │ CheckoutLineItem │   │  PricingInput    │   │  PricingResult   │    │
//! │  │ ──────────────── │   │ ──────────────── │   │ ──────────────── │    │
//! │  │ product_id       │──►│ line_items       │──►│ subtotal         │    │
//! │  │ unit_price       │   │ coupon_rate      │   │ coupon_discount  │    │
//! │  │ discounted_price │   │ manual_discount  │   │ manual_discount  │    │
//! │  │ quantity         │   │ free_delivery    │   │ shipping, total  │    │
//! │  └──────────────────┘   └──────────────────┘   └──────────────────┘    │
//! │                                                                         │
//! │  ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐    │
//! │  │   Percentage     │   │   PointsInput    │   │  PointsResult    │    │
//! │  │  bps (u32)       │   │ purchase_amount  │──►│ points_earned    │    │
//! │  │  1000 = 10%      │   │ rate, active     │   └──────────────────┘    │
//! │  └──────────────────┘   └──────────────────┘                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All of these are transient: built per request or per form render and
//! never persisted here.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Percentage
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1250 bps = 12.5% coupon, kept exact without floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Percentage(u32);

impl Percentage {
    /// One hundred percent.
    pub const FULL: Percentage = Percentage(10_000);

    /// Creates a percentage from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Percentage(bps)
    }

    /// Creates a percentage from a whole-number percent (10 = 10%).
    #[inline]
    pub const fn from_percent(percent: u32) -> Self {
        Percentage(percent * 100)
    }

    /// Creates a percentage from a decimal percent (12.5 = 12.5%).
    ///
    /// Rounds half away from zero to the nearest basis point. Returns `None`
    /// for negative values or values that do not fit in `u32`.
    pub fn from_decimal(percent: Decimal) -> Option<Self> {
        percent
            .checked_mul(Decimal::ONE_HUNDRED)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
            .map(Percentage)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as an exact decimal percent (for display).
    #[inline]
    pub fn as_percent(&self) -> Decimal {
        Decimal::new(self.0 as i64, 2)
    }

    #[inline]
    pub const fn zero() -> Self {
        Percentage(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Percentage::zero()
    }
}

// =============================================================================
// Points Rate
// =============================================================================

/// Loyalty points earned per millime spent.
///
/// Held as an exact decimal: `0.01` means one point per 100 millimes,
/// i.e. ten points per dinar. Serialized as a string (`"0.01"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PointsRate(#[ts(type = "string")] Decimal);

impl PointsRate {
    #[inline]
    pub const fn new(rate: Decimal) -> Self {
        PointsRate(rate)
    }

    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        PointsRate(Decimal::ZERO)
    }

    /// True when the rate can earn points at all.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl Default for PointsRate {
    fn default() -> Self {
        PointsRate::zero()
    }
}

// =============================================================================
// Checkout Line Item
// =============================================================================

/// One product line of a checkout or order being edited.
///
/// ## Invariants
/// - `quantity >= 1` (enforced by `validation::validate_line_item`)
/// - A `discounted_unit_price` of `None` or zero means "no override"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CheckoutLineItem {
    /// Backend product id (UUID).
    pub product_id: String,

    /// Catalogue price per unit.
    pub unit_price: Money,

    /// Promotional price per unit, if any.
    #[serde(default)]
    pub discounted_unit_price: Option<Money>,

    /// Units ordered.
    pub quantity: i64,
}

impl CheckoutLineItem {
    /// Creates a line with no price override.
    pub fn new(product_id: impl Into<String>, unit_price: Money, quantity: i64) -> Self {
        CheckoutLineItem {
            product_id: product_id.into(),
            unit_price,
            discounted_unit_price: None,
            quantity,
        }
    }

    /// Sets the promotional price (builder style).
    pub fn with_discounted_price(mut self, price: Money) -> Self {
        self.discounted_unit_price = Some(price);
        self
    }

    /// The price actually charged per unit.
    ///
    /// ```rust
    /// use medina_core::{CheckoutLineItem, Money};
    ///
    /// let plain = CheckoutLineItem::new("p", Money::from_dinars(100), 1);
    /// assert_eq!(plain.effective_unit_price(), Money::from_dinars(100));
    ///
    /// let zero_override = plain.clone().with_discounted_price(Money::zero());
    /// assert_eq!(zero_override.effective_unit_price(), Money::from_dinars(100));
    ///
    /// let promo = plain.with_discounted_price(Money::from_dinars(80));
    /// assert_eq!(promo.effective_unit_price(), Money::from_dinars(80));
    /// ```
    #[inline]
    pub fn effective_unit_price(&self) -> Money {
        match self.discounted_unit_price {
            Some(price) if !price.is_zero() => price,
            _ => self.unit_price,
        }
    }

    /// Effective unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.effective_unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Pricing Input / Result
// =============================================================================

/// Snapshot of a checkout handed to `pricing::compute_total`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PricingInput {
    pub line_items: Vec<CheckoutLineItem>,

    /// Coupon rate in basis points. `None` or zero means no coupon.
    #[serde(default)]
    pub coupon_rate: Option<Percentage>,

    /// Flat admin discount. Negative values are treated as zero.
    #[serde(default)]
    pub manual_discount: Option<Money>,

    /// Waives shipping regardless of the subtotal.
    #[serde(default)]
    pub free_delivery_override: bool,
}

/// Pricing breakdown shown in the order form before submission.
///
/// The backend recomputes and owns the persisted total; this is a preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PricingResult {
    pub subtotal: Money,
    pub coupon_discount_amount: Money,
    pub manual_discount_amount: Money,
    pub shipping_cost: Money,
    pub total: Money,
}

impl PricingResult {
    /// Sum of both discounts.
    #[inline]
    pub fn total_discount(&self) -> Money {
        self.coupon_discount_amount + self.manual_discount_amount
    }

    #[inline]
    pub fn has_free_shipping(&self) -> bool {
        self.shipping_cost.is_zero()
    }
}

// =============================================================================
// Points Input / Result
// =============================================================================

/// A purchase to preview loyalty points for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PointsInput {
    /// Purchase amount. Stored in millimes, so the major-to-minor
    /// conversion has already happened.
    pub purchase_amount: Money,

    /// Points per millime.
    pub conversion_rate: PointsRate,

    pub is_program_active: bool,
}

impl PointsInput {
    /// Builds the input from a purchase amount in dinars.
    ///
    /// The amount is converted to millimes (× `MILLIMES_PER_DINAR`, rounded
    /// half away from zero). Returns `None` when it does not fit in `Money`.
    ///
    /// ```rust
    /// use medina_core::points::compute_points;
    /// use medina_core::{PointsInput, PointsRate};
    /// use rust_decimal::Decimal;
    ///
    /// let input =
    ///     PointsInput::from_major_units(Decimal::new(25, 1), PointsRate::new(Decimal::new(1, 2)), true)
    ///         .unwrap();
    /// assert_eq!(compute_points(&input).points_earned, 25);
    /// ```
    pub fn from_major_units(
        purchase_amount: Decimal,
        conversion_rate: PointsRate,
        is_program_active: bool,
    ) -> Option<Self> {
        Some(PointsInput {
            purchase_amount: Money::from_major_decimal(purchase_amount)?,
            conversion_rate,
            is_program_active,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PointsResult {
    #[ts(type = "number")]
    pub points_earned: u64,
}

// =============================================================================
// Unit Tests
// =============================================================================
