//! # Points Calculator
//!
//! Previews the loyalty points a purchase would earn. The points ledger
//! service owns the real balance; nothing here is persisted.
//!
//! ## Conversion
//! ```text
//! purchase 2.500 DT ──► 2500 millimes ──► × 0.01 points/millime ──► floor ──► 25 points
//! ```
//!
//! The dinar-to-millime step happens when the amount becomes a [`Money`],
//! so this module only ever sees millimes.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::trace;

use crate::config::LoyaltyProgram;
use crate::money::Money;
use crate::types::{PointsInput, PointsRate, PointsResult};

/// Computes the points earned by a purchase.
///
/// Zero when the program is inactive, the amount is not positive, or the
/// rate is not positive. Results too large for `u64` saturate.
///
/// ## Example
/// ```rust
/// use medina_core::points::compute_points;
/// use medina_core::{Money, PointsInput, PointsRate};
/// use rust_decimal::Decimal;
///
/// let input = PointsInput {
///     purchase_amount: Money::from_major_decimal(Decimal::new(25, 1)).unwrap(), // 2.5 DT
///     conversion_rate: PointsRate::new(Decimal::new(1, 2)),                  // 0.01
///     is_program_active: true,
/// };
/// assert_eq!(compute_points(&input).points_earned, 25);
/// ```
pub fn compute_points(input: &PointsInput) -> PointsResult {
    if !input.is_program_active
        || !input.purchase_amount.is_positive()
        || !input.conversion_rate.is_positive()
    {
        return PointsResult::default();
    }

    let points_earned = Decimal::from(input.purchase_amount.millimes())
        .checked_mul(input.conversion_rate.value())
        .map(|points| points.floor().to_u64().unwrap_or(u64::MAX))
        .unwrap_or(u64::MAX);

    trace!(
        millimes = input.purchase_amount.millimes(),
        rate = %input.conversion_rate.value(),
        points_earned,
        "computed loyalty points"
    );

    PointsResult { points_earned }
}

/// Currency value of a point balance at `rate`, rounded down to the millime.
///
/// The inverse of [`compute_points`]: with a rate of 0.01 points per
/// millime, 25 points are worth 2.500 DT. A rate that is not positive
/// makes points worthless.
///
/// ```rust
/// use medina_core::points::points_value;
/// use medina_core::{Money, PointsRate};
/// use rust_decimal::Decimal;
///
/// let value = points_value(25, PointsRate::new(Decimal::new(1, 2)));
/// assert_eq!(value, Money::from_millimes(2_500));
/// ```
pub fn points_value(points: u64, rate: PointsRate) -> Money {
    if !rate.is_positive() {
        return Money::zero();
    }

    let millimes = Decimal::from(points)
        .checked_div(rate.value())
        .map(|value| value.floor().to_i64().unwrap_or(i64::MAX))
        .unwrap_or(i64::MAX);

    Money::from_millimes(millimes)
}

impl LoyaltyProgram {
    /// Builds the points input for a purchase under this program.
    pub fn input_for(&self, purchase_amount: Money) -> PointsInput {
        PointsInput {
            purchase_amount,
            conversion_rate: self.rate,
            is_program_active: self.active,
        }
    }

    /// Points a purchase would earn under this program.
    pub fn preview(&self, purchase_amount: Money) -> PointsResult {
        compute_points(&self.input_for(purchase_amount))
    }

    /// Currency value of a balance under this program's rate.
    pub fn value_of(&self, points: u64) -> Money {
        points_value(points, self.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rate(mantissa: i64, scale: u32) -> PointsRate {
        PointsRate::new(Decimal::new(mantissa, scale))
    }

    fn input(millimes: i64, rate: PointsRate, active: bool) -> PointsInput {
        PointsInput {
            purchase_amount: Money::from_millimes(millimes),
            conversion_rate: rate,
            is_program_active: active,
        }
    }

    #[test]
    fn test_reference_purchase() {
        // 2.5 DT at 0.01 points per millime
        let amount = Money::from_major_decimal(Decimal::new(25, 1)).unwrap();
        assert_eq!(amount.millimes(), 2_500);

        let result = compute_points(&PointsInput {
            purchase_amount: amount,
            conversion_rate: rate(1, 2),
            is_program_active: true,
        });
        assert_eq!(result.points_earned, 25);
    }

    #[test]
    fn test_inactive_program_earns_nothing() {
        let result = compute_points(&input(1_000_000, rate(1, 2), false));
        assert_eq!(result.points_earned, 0);
    }

    #[test]
    fn test_non_positive_amount_earns_nothing() {
        assert_eq!(compute_points(&input(0, rate(1, 2), true)).points_earned, 0);
        assert_eq!(compute_points(&input(-5_000, rate(1, 2), true)).points_earned, 0);
    }

    #[test]
    fn test_non_positive_rate_earns_nothing() {
        assert_eq!(compute_points(&input(5_000, PointsRate::zero(), true)).points_earned, 0);
        assert_eq!(compute_points(&input(5_000, rate(-1, 2), true)).points_earned, 0);
    }

    #[test]
    fn test_points_are_floored() {
        // 2.599 DT = 2599 millimes × 0.01 = 25.99 → 25
        assert_eq!(compute_points(&input(2_599, rate(1, 2), true)).points_earned, 25);
        // 0.099 DT → 0.99 → 0
        assert_eq!(compute_points(&input(99, rate(1, 2), true)).points_earned, 0);
    }

    #[test]
    fn test_decimal_rate_is_exact() {
        // 0.29 DT at 0.1 points per millime = 29 points exactly (no 28.999…)
        assert_eq!(compute_points(&input(290, rate(1, 1), true)).points_earned, 29);
    }

    #[test]
    fn test_points_value() {
        assert_eq!(points_value(25, rate(1, 2)), Money::from_millimes(2_500));
        assert_eq!(points_value(0, rate(1, 2)), Money::zero());
        assert_eq!(points_value(100, PointsRate::zero()), Money::zero());
        // 1 point at 0.03 points/millime = 33.33… millimes → 33
        assert_eq!(points_value(1, rate(3, 2)), Money::from_millimes(33));
    }

    #[test]
    fn test_loyalty_program_helpers() {
        let program = LoyaltyProgram::default();
        assert_eq!(program.preview(Money::from_dinars(10)).points_earned, 100);
        assert_eq!(program.value_of(100), Money::from_dinars(10));

        let inactive = LoyaltyProgram {
            active: false,
            ..program
        };
        assert_eq!(inactive.preview(Money::from_dinars(10)).points_earned, 0);
    }

    proptest! {
        #[test]
        fn prop_inactive_always_zero(millimes in any::<i64>(), mantissa in 0i64..10_000) {
            let result = compute_points(&input(millimes, rate(mantissa, 3), false));
            prop_assert_eq!(result.points_earned, 0);
        }

        #[test]
        fn prop_points_never_exceed_exact_product(millimes in 0i64..1_000_000_000, mantissa in 0i64..10_000) {
            let r = rate(mantissa, 3);
            let points = compute_points(&input(millimes, r, true)).points_earned;
            let exact = Decimal::from(millimes) * r.value();
            prop_assert!(Decimal::from(points) <= exact);
            prop_assert!(exact - Decimal::from(points) < Decimal::ONE);
        }
    }
}
