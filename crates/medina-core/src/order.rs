//! # Order Draft
//!
//! The order being built on the "create order" screen or changed on the
//! "edit order" screen. Both screens hold an `OrderDraft` and get every
//! total from [`pricing::compute_total`](crate::pricing::compute_total).
//!
//! ## Draft Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Draft Operations                               │
//! │                                                                         │
//! │  Admin Action             Method                  Draft Change          │
//! │  ────────────             ──────                  ────────────          │
//! │                                                                         │
//! │  Pick product ──────────► add_item() ───────────► push / merge qty     │
//! │  Change quantity ───────► update_quantity() ────► lines[i].qty = n     │
//! │  Promo price ───────────► set_discounted_price()                       │
//! │  Remove line ───────────► remove_item() ────────► lines.remove(i)      │
//! │  Enter coupon ──────────► apply_coupon()                               │
//! │  Enter discount ────────► set_manual_discount()                        │
//! │  Tick free delivery ────► set_free_delivery()                          │
//! │                                                                         │
//! │  Render totals ─────────► quote() ──────────────► PricingResult        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by `product_id` (adding the same product merges)
//! - Every line passed `validation::validate_line_item`
//! - At most `MAX_ORDER_LINES` lines, `MAX_ITEM_QUANTITY` units per line

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use crate::config::PricingConfig;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::compute_total;
use crate::types::{CheckoutLineItem, Percentage, PricingInput, PricingResult};
use crate::validation::{
    validate_coupon_percentage, validate_line_item, validate_manual_discount, validate_order_size,
    validate_price, validate_quantity,
};
use crate::{MAX_ITEM_QUANTITY, MAX_ORDER_LINES};

/// Serialize-only: a draft is rebuilt through [`OrderDraft::from_existing`]
/// so loaded lines go through the same checks as typed ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderDraft {
    lines: Vec<CheckoutLineItem>,
    coupon_rate: Option<Percentage>,
    manual_discount: Option<Money>,
    free_delivery: bool,
}

impl OrderDraft {
    /// Creates an empty draft (the "create order" screen).
    pub fn new() -> Self {
        OrderDraft::default()
    }

    /// Loads an existing order into a draft (the "edit order" screen).
    ///
    /// Every line is validated and duplicate products are merged, so an
    /// order fetched from the backend obeys the same rules as a new one.
    pub fn from_existing(
        lines: Vec<CheckoutLineItem>,
        coupon_rate: Option<Percentage>,
        manual_discount: Option<Money>,
        free_delivery: bool,
    ) -> CoreResult<Self> {
        let mut draft = OrderDraft::new();
        for line in lines {
            draft.add_item(line)?;
        }
        if let Some(rate) = coupon_rate {
            draft.apply_coupon(rate)?;
        }
        if let Some(amount) = manual_discount {
            draft.set_manual_discount(amount)?;
        }
        draft.set_free_delivery(free_delivery);
        Ok(draft)
    }

    /// Adds a line or increases the quantity of an existing one.
    ///
    /// ## Behavior
    /// - Product already present: quantities are summed, the new prices win
    /// - Product not present: appended as a new line
    pub fn add_item(&mut self, item: CheckoutLineItem) -> CoreResult<()> {
        validate_line_item(&item)?;

        if let Some(line) = self.find_mut(&item.product_id) {
            let new_qty = line.quantity + item.quantity;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            line.quantity = new_qty;
            line.unit_price = item.unit_price;
            line.discounted_unit_price = item.discounted_unit_price;
            debug!(product_id = %item.product_id, quantity = new_qty, "merged order line");
            return Ok(());
        }

        validate_order_size(self.lines.len()).map_err(|_| CoreError::OrderTooLarge {
            max: MAX_ORDER_LINES,
        })?;

        debug!(product_id = %item.product_id, quantity = item.quantity, "added order line");
        self.lines.push(item);
        Ok(())
    }

    /// Sets the quantity of a line. A quantity of 0 removes it.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> CoreResult<()> {
        if quantity == 0 {
            return self.remove_item(product_id);
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }
        validate_quantity(quantity)?;

        let line = self
            .find_mut(product_id)
            .ok_or_else(|| CoreError::LineNotFound(product_id.to_string()))?;
        line.quantity = quantity;
        debug!(product_id, quantity, "updated order line quantity");
        Ok(())
    }

    /// Sets or clears the promotional price of a line.
    pub fn set_discounted_price(&mut self, product_id: &str, price: Option<Money>) -> CoreResult<()> {
        if let Some(price) = price {
            validate_price("discounted price", price)?;
        }

        let line = self
            .find_mut(product_id)
            .ok_or_else(|| CoreError::LineNotFound(product_id.to_string()))?;
        line.discounted_unit_price = price;
        debug!(product_id, discounted = ?price.map(|p| p.millimes()), "set discounted price");
        Ok(())
    }

    /// Removes a line by product id.
    pub fn remove_item(&mut self, product_id: &str) -> CoreResult<()> {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);

        if self.lines.len() == initial_len {
            return Err(CoreError::LineNotFound(product_id.to_string()));
        }

        debug!(product_id, "removed order line");
        Ok(())
    }

    /// Applies a coupon rate (0–100%), replacing any previous coupon.
    pub fn apply_coupon(&mut self, rate: Percentage) -> CoreResult<()> {
        validate_coupon_percentage(rate)?;
        self.coupon_rate = Some(rate);
        debug!(coupon_bps = rate.bps(), "applied coupon");
        Ok(())
    }

    pub fn clear_coupon(&mut self) {
        self.coupon_rate = None;
    }

    /// Sets the flat admin discount. Must not be negative.
    pub fn set_manual_discount(&mut self, amount: Money) -> CoreResult<()> {
        validate_manual_discount(amount)?;
        self.manual_discount = Some(amount);
        debug!(manual_discount = amount.millimes(), "set manual discount");
        Ok(())
    }

    pub fn set_free_delivery(&mut self, free_delivery: bool) {
        self.free_delivery = free_delivery;
    }

    /// Empties the draft.
    pub fn clear(&mut self) {
        *self = OrderDraft::new();
        debug!("cleared order draft");
    }

    pub fn lines(&self) -> &[CheckoutLineItem] {
        &self.lines
    }

    pub fn coupon_rate(&self) -> Option<Percentage> {
        self.coupon_rate
    }

    pub fn manual_discount(&self) -> Option<Money> {
        self.manual_discount
    }

    pub fn free_delivery(&self) -> bool {
        self.free_delivery
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Snapshot handed to the pricing calculator and to the backend mutation.
    pub fn to_pricing_input(&self) -> PricingInput {
        PricingInput {
            line_items: self.lines.clone(),
            coupon_rate: self.coupon_rate,
            manual_discount: self.manual_discount,
            free_delivery_override: self.free_delivery,
        }
    }

    /// Prices the draft.
    pub fn quote(&self, config: &PricingConfig) -> PricingResult {
        compute_total(&self.to_pricing_input(), config)
    }

    fn find_mut(&mut self, product_id: &str) -> Option<&mut CheckoutLineItem> {
        self.lines.iter_mut().find(|l| l.product_id == product_id)
    }
}
