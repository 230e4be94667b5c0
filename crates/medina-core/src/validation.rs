//! # Validation Module
//!
//! Input validation for the order forms.
//!
//! The calculators assume validated numbers. Everything an admin types
//! passes through here first.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Dashboard form (TypeScript)                                  │
//! │  ├── Required fields, numeric keyboard                                 │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── String → Money / Percentage / PointsRate parsing                  │
//! │  └── Range checks (quantity, coupon 0-100%, non-negative amounts)      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: pricing / points (never fail, clamp what slips through)      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 4: Backend mutation (authoritative recompute)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use medina_core::validation::{parse_amount, validate_quantity};
//!
//! let price = parse_amount("unit price", "12.5").unwrap();
//! assert_eq!(price.millimes(), 12_500);
//!
//! assert!(validate_quantity(5).is_ok());
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::money::{Money, MINOR_UNIT_DIGITS};
use crate::types::{CheckoutLineItem, Percentage, PointsRate};
use crate::{MAX_AMOUNT, MAX_ITEM_QUANTITY, MAX_ORDER_LINES};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Parsers
// =============================================================================

fn parse_decimal(field: &str, raw: &str) -> ValidationResult<Decimal> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Decimal::from_str(raw).map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be a number".to_string(),
    })
}

/// Parses a dinar amount typed by an admin ("12.5", "8", "0.250").
///
/// ## Rules
/// - Must not be empty
/// - Must be a plain decimal number
/// - Must not be negative
/// - At most 3 decimal places (the millime)
/// - At most `MAX_AMOUNT`
///
/// ## Example
/// ```rust
/// use medina_core::validation::parse_amount;
///
/// assert_eq!(parse_amount("price", "2.500").unwrap().millimes(), 2500);
/// assert!(parse_amount("price", "").is_err());
/// assert!(parse_amount("price", "abc").is_err());
/// assert!(parse_amount("price", "-1").is_err());
/// assert!(parse_amount("price", "1.2345").is_err());
/// assert!(parse_amount("price", "9000000000000000").is_err());
/// ```
pub fn parse_amount(field: &str, raw: &str) -> ValidationResult<Money> {
    let amount = parse_decimal(field, raw)?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    if amount.normalize().scale() > MINOR_UNIT_DIGITS {
        return Err(ValidationError::TooPrecise {
            field: field.to_string(),
            max_places: MINOR_UNIT_DIGITS,
        });
    }

    let money = Money::from_major_decimal(amount).ok_or_else(|| amount_out_of_range(field))?;
    validate_price(field, money)?;
    Ok(money)
}

fn amount_out_of_range(field: &str) -> ValidationError {
    ValidationError::OutOfRange {
        field: field.to_string(),
        min: 0,
        max: MAX_AMOUNT.major(),
    }
}

/// Parses a percentage typed as "10" or "12.5".
///
/// Must lie in 0–100 and resolve to whole basis points.
pub fn parse_percentage(field: &str, raw: &str) -> ValidationResult<Percentage> {
    let percent = parse_decimal(field, raw)?;

    if percent.normalize().scale() > 2 {
        return Err(ValidationError::TooPrecise {
            field: field.to_string(),
            max_places: 2,
        });
    }

    let out_of_range = || ValidationError::OutOfRange {
        field: field.to_string(),
        min: 0,
        max: 100,
    };

    if percent.is_sign_negative() && !percent.is_zero() {
        return Err(out_of_range());
    }

    let rate = Percentage::from_decimal(percent).ok_or_else(out_of_range)?;
    validate_percentage(field, rate)?;
    Ok(rate)
}

/// Parses a points conversion rate ("0.01" points per millime).
pub fn parse_points_rate(raw: &str) -> ValidationResult<PointsRate> {
    let rate = parse_decimal("points rate", raw)?;

    if rate.is_sign_negative() && !rate.is_zero() {
        return Err(ValidationError::MustBeNonNegative {
            field: "points rate".to_string(),
        });
    }

    Ok(PointsRate::new(rate))
}

// =============================================================================
// Numeric Validators
// =============================================================================

fn validate_percentage(field: &str, rate: Percentage) -> ValidationResult<()> {
    if rate > Percentage::FULL {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

/// Validates a coupon rate: 0% to 100%.
///
/// ```rust
/// use medina_core::validation::validate_coupon_percentage;
/// use medina_core::Percentage;
///
/// assert!(validate_coupon_percentage(Percentage::from_percent(100)).is_ok());
/// assert!(validate_coupon_percentage(Percentage::from_bps(10_001)).is_err());
/// ```
pub fn validate_coupon_percentage(rate: Percentage) -> ValidationResult<()> {
    validate_percentage("coupon", rate)
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price. Zero is allowed (free items, gifts), anything above
/// `MAX_AMOUNT` is not.
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    if price > MAX_AMOUNT {
        return Err(amount_out_of_range(field));
    }

    Ok(())
}

/// Validates a manual discount. Amounts above the subtotal are accepted.
pub fn validate_manual_discount(amount: Money) -> ValidationResult<()> {
    validate_price("manual discount", amount)
}

// =============================================================================
// Identifier Validators
// =============================================================================

/// Validates a backend product id (UUID).
///
/// ```rust
/// use medina_core::validation::validate_product_id;
///
/// assert!(validate_product_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_product_id("not-a-uuid").is_err());
/// ```
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "product id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "product id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates every field of a line item.
pub fn validate_line_item(item: &CheckoutLineItem) -> ValidationResult<()> {
    validate_product_id(&item.product_id)?;
    validate_price("unit price", item.unit_price)?;
    if let Some(discounted) = item.discounted_unit_price {
        validate_price("discounted price", discounted)?;
    }
    validate_quantity(item.quantity)
}

/// Validates that one more line fits in the order.
pub fn validate_order_size(current_lines: usize) -> ValidationResult<()> {
    if current_lines >= MAX_ORDER_LINES {
        return Err(ValidationError::OutOfRange {
            field: "order lines".to_string(),
            min: 0,
            max: MAX_ORDER_LINES as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCT: &str = "550e8400-e29b-41d4-a716-446655440000";

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("price", "12.5").unwrap().millimes(), 12_500);
        assert_eq!(parse_amount("price", " 8 ").unwrap().millimes(), 8_000);
        assert_eq!(parse_amount("price", "0.001").unwrap().millimes(), 1);
        assert_eq!(parse_amount("price", "1.5000").unwrap().millimes(), 1_500);
        assert_eq!(parse_amount("price", "0").unwrap(), Money::zero());
    }

    #[test]
    fn test_parse_amount_rejections() {
        assert_eq!(
            parse_amount("price", "   ").unwrap_err(),
            ValidationError::Required {
                field: "price".to_string()
            }
        );
        assert!(matches!(
            parse_amount("price", "12,5").unwrap_err(),
            ValidationError::InvalidFormat { .. }
        ));
        assert!(matches!(
            parse_amount("price", "-0.5").unwrap_err(),
            ValidationError::MustBeNonNegative { .. }
        ));
        assert!(matches!(
            parse_amount("price", "0.0001").unwrap_err(),
            ValidationError::TooPrecise { max_places: 3, .. }
        ));
    }

    #[test]
    fn test_parse_amount_upper_bound() {
        assert_eq!(parse_amount("price", "10000000").unwrap(), MAX_AMOUNT);
        assert_eq!(
            parse_amount("unit price", "9000000000000000").unwrap_err(),
            ValidationError::OutOfRange {
                field: "unit price".to_string(),
                min: 0,
                max: 10_000_000,
            }
        );
        assert!(matches!(
            parse_amount("price", "10000000.001").unwrap_err(),
            ValidationError::OutOfRange { .. }
        ));
    }

    #[test]
    fn test_validate_price_upper_bound() {
        assert!(validate_price("price", MAX_AMOUNT).is_ok());
        assert!(matches!(
            validate_price("price", Money::from_millimes(i64::MAX)).unwrap_err(),
            ValidationError::OutOfRange { .. }
        ));
        assert!(validate_manual_discount(MAX_AMOUNT + Money::from_millimes(1)).is_err());
    }

    #[test]
    fn test_parse_percentage() {
        assert_eq!(
            parse_percentage("coupon", "10").unwrap(),
            Percentage::from_percent(10)
        );
        assert_eq!(
            parse_percentage("coupon", "12.5").unwrap(),
            Percentage::from_bps(1250)
        );
        assert_eq!(parse_percentage("coupon", "100").unwrap(), Percentage::FULL);
        assert!(parse_percentage("coupon", "100.01").is_err());
        assert!(parse_percentage("coupon", "-5").is_err());
        assert!(parse_percentage("coupon", "12.345").is_err());
        assert!(parse_percentage("coupon", "ten").is_err());
    }

    #[test]
    fn test_parse_points_rate() {
        assert_eq!(
            parse_points_rate("0.01").unwrap().value(),
            Decimal::new(1, 2)
        );
        assert!(parse_points_rate("-0.01").is_err());
        assert!(parse_points_rate("").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_manual_discount() {
        assert!(validate_manual_discount(Money::zero()).is_ok());
        assert!(validate_manual_discount(Money::from_dinars(10_000)).is_ok());
        assert!(validate_manual_discount(Money::from_millimes(-1)).is_err());
    }

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id(PRODUCT).is_ok());
        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("123").is_err());
    }

    #[test]
    fn test_validate_line_item() {
        let item = CheckoutLineItem::new(PRODUCT, Money::from_dinars(10), 2);
        assert!(validate_line_item(&item).is_ok());

        let bad_qty = CheckoutLineItem::new(PRODUCT, Money::from_dinars(10), 0);
        assert!(validate_line_item(&bad_qty).is_err());

        let bad_promo = item.with_discounted_price(Money::from_millimes(-10));
        assert!(matches!(
            validate_line_item(&bad_promo).unwrap_err(),
            ValidationError::MustBeNonNegative { .. }
        ));
    }

    #[test]
    fn test_validate_order_size() {
        assert!(validate_order_size(0).is_ok());
        assert!(validate_order_size(MAX_ORDER_LINES - 1).is_ok());
        assert!(validate_order_size(MAX_ORDER_LINES).is_err());
    }
}
