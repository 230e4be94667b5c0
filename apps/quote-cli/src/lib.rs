//! # medina-quote
//!
//! Prices an order request the way the dashboard's order screens do:
//! form-style string amounts are validated, loaded into an
//! [`OrderDraft`], priced, and the loyalty points of the resulting total
//! are previewed.
//!
//! ## Request
//! ```json
//! {
//!   "lines": [
//!     { "productId": "550e8400-…", "unitPrice": "100", "discountedUnitPrice": "0", "quantity": 2 }
//!   ],
//!   "couponPercentage": "10",
//!   "manualDiscount": "5",
//!   "freeDelivery": false,
//!   "customerName": "Amel"
//! }
//! ```
//!
//! ## Response
//! `{ "pricing": PricingResult, "points": PointsResult, "pointsValue": Money,
//!    "receipt": PointsReceipt | null }`

pub mod error;

use medina_core::validation::{parse_amount, parse_percentage};
use medina_core::{
    CheckoutLineItem, LoyaltyProgram, Money, OrderDraft, PointsReceipt, PointsResult,
    PricingConfig, PricingResult,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;

/// One line as typed in the order form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRequest {
    pub product_id: String,
    pub unit_price: String,
    #[serde(default)]
    pub discounted_unit_price: Option<String>,
    pub quantity: i64,
}

/// An order as submitted by the create or edit screen.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub lines: Vec<LineRequest>,
    #[serde(default)]
    pub coupon_percentage: Option<String>,
    #[serde(default)]
    pub manual_discount: Option<String>,
    #[serde(default)]
    pub free_delivery: bool,
    /// When present, a points receipt is issued for this customer.
    #[serde(default)]
    pub customer_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub pricing: PricingResult,
    pub points: PointsResult,
    pub points_value: Money,
    pub receipt: Option<PointsReceipt>,
}

/// Treats an empty form field as absent.
fn non_blank(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl LineRequest {
    fn to_line_item(&self) -> Result<CheckoutLineItem, ApiError> {
        let unit_price = parse_amount("unit price", &self.unit_price)?;
        let discounted_unit_price = non_blank(&self.discounted_unit_price)
            .map(|raw| parse_amount("discounted price", raw))
            .transpose()?;

        Ok(CheckoutLineItem {
            product_id: self.product_id.trim().to_string(),
            unit_price,
            discounted_unit_price,
            quantity: self.quantity,
        })
    }
}

impl OrderRequest {
    /// Validates the request and loads it into a draft.
    pub fn to_draft(&self) -> Result<OrderDraft, ApiError> {
        let lines = self
            .lines
            .iter()
            .map(LineRequest::to_line_item)
            .collect::<Result<Vec<_>, _>>()?;

        let coupon = non_blank(&self.coupon_percentage)
            .map(|raw| parse_percentage("coupon", raw))
            .transpose()?;

        let manual = non_blank(&self.manual_discount)
            .map(|raw| parse_amount("manual discount", raw))
            .transpose()?;

        Ok(OrderDraft::from_existing(lines, coupon, manual, self.free_delivery)?)
    }
}

/// Prices a request and previews the points its total would earn.
pub fn quote(
    request: &OrderRequest,
    pricing_config: &PricingConfig,
    loyalty: &LoyaltyProgram,
) -> Result<QuoteResponse, ApiError> {
    let draft = request.to_draft()?;
    debug!(
        lines = draft.item_count(),
        units = draft.total_quantity(),
        "order draft loaded"
    );

    let pricing = draft.quote(pricing_config);
    let points = loyalty.preview(pricing.total);
    let points_value = loyalty.value_of(points.points_earned);

    let receipt = non_blank(&request.customer_name)
        .filter(|_| points.points_earned > 0)
        .map(|name| PointsReceipt::new(name, pricing.total, points));

    info!(
        total = %pricing.total,
        points = points.points_earned,
        "order quoted"
    );

    Ok(QuoteResponse {
        pricing,
        points,
        points_value,
        receipt,
    })
}

/// Parses a JSON request and quotes it.
pub fn quote_json(
    body: &str,
    pricing_config: &PricingConfig,
    loyalty: &LoyaltyProgram,
) -> Result<QuoteResponse, ApiError> {
    let request: OrderRequest = serde_json::from_str(body)?;
    quote(&request, pricing_config, loyalty)
}
