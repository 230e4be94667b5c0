//! # Pricing Calculator
//!
//! The single order-total formula used by every order screen.
//!
//! ## Calculation Steps
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  line items ──► Σ effective price × qty ──────────────► subtotal        │
//! │                                                            │            │
//! │  coupon rate ──► subtotal × rate (rounded to millime) ──► coupon        │
//! │  manual discount ──► max(0, manual) ─────────────────────► manual       │
//! │  free override OR subtotal > threshold ? 0 : fee ──────► shipping       │
//! │                                                            │            │
//! │  total = subtotal - coupon - manual + shipping  ◄──────────┘            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Line amounts are exact millimes; the coupon amount is the only value
//! with a fractional part, and it is rounded once. The identity on `total`
//! therefore holds exactly.

use tracing::trace;

use crate::config::PricingConfig;
use crate::money::Money;
use crate::types::{CheckoutLineItem, PricingInput, PricingResult};

/// Computes the pricing breakdown of a checkout.
///
/// Pure and deterministic. Assumes validated input (see
/// [`crate::validation`]); out-of-domain values are clamped, never rejected.
///
/// ## Example
/// ```rust
/// use medina_core::config::PricingConfig;
/// use medina_core::pricing::compute_total;
/// use medina_core::{CheckoutLineItem, Money, Percentage, PricingInput};
///
/// let input = PricingInput {
///     line_items: vec![CheckoutLineItem::new("p1", Money::from_dinars(100), 2)],
///     coupon_rate: Some(Percentage::from_percent(10)),
///     manual_discount: Some(Money::from_dinars(5)),
///     free_delivery_override: false,
/// };
///
/// let result = compute_total(&input, &PricingConfig::default());
/// assert_eq!(result.subtotal, Money::from_dinars(200));
/// assert_eq!(result.coupon_discount_amount, Money::from_dinars(20));
/// assert_eq!(result.shipping_cost, Money::from_dinars(8));
/// assert_eq!(result.total, Money::from_dinars(183));
/// ```
pub fn compute_total(input: &PricingInput, config: &PricingConfig) -> PricingResult {
    let subtotal = subtotal(&input.line_items);

    let coupon_discount_amount = match input.coupon_rate {
        Some(rate) if !rate.is_zero() => subtotal.percentage_of(rate),
        _ => Money::zero(),
    };

    let manual_discount_amount = input
        .manual_discount
        .map(|amount| amount.non_negative())
        .unwrap_or_default();

    let shipping_cost = shipping_cost(subtotal, input.free_delivery_override, config);

    let mut total = subtotal - coupon_discount_amount - manual_discount_amount + shipping_cost;
    if config.floor_total_at_zero {
        total = total.non_negative();
    }

    trace!(
        subtotal = subtotal.millimes(),
        coupon = coupon_discount_amount.millimes(),
        manual = manual_discount_amount.millimes(),
        shipping = shipping_cost.millimes(),
        total = total.millimes(),
        "computed order total"
    );

    PricingResult {
        subtotal,
        coupon_discount_amount,
        manual_discount_amount,
        shipping_cost,
        total,
    }
}

/// Sum of every line's effective price × quantity.
pub fn subtotal(line_items: &[CheckoutLineItem]) -> Money {
    line_items.iter().map(CheckoutLineItem::line_total).sum()
}

/// Shipping for a given subtotal.
///
/// Free when the override is set or the subtotal is strictly above the
/// threshold. A subtotal exactly at the threshold still pays.
pub fn shipping_cost(subtotal: Money, free_delivery_override: bool, config: &PricingConfig) -> Money {
    if free_delivery_override || subtotal > config.free_shipping_threshold {
        Money::zero()
    } else {
        config.standard_shipping_fee
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
