//! # Points Receipt
//!
//! Data handed to the receipt renderer after points are granted. The
//! printable HTML lives in the dashboard; this module only fixes the
//! content and provides a plain-text preview.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;
use crate::types::PointsResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PointsReceipt {
    /// `PTS-YYYYMMDD-XXXXXXXX`
    pub receipt_number: String,
    pub customer_name: String,
    pub purchase_amount: Money,
    #[ts(type = "number")]
    pub points_earned: u64,
    #[ts(as = "String")]
    pub issued_at: DateTime<Utc>,
}

impl PointsReceipt {
    /// Builds a receipt stamped now.
    pub fn new(customer_name: impl Into<String>, purchase_amount: Money, points: PointsResult) -> Self {
        Self::issued_at(customer_name, purchase_amount, points, Utc::now())
    }

    /// Builds a receipt with an explicit timestamp.
    pub fn issued_at(
        customer_name: impl Into<String>,
        purchase_amount: Money,
        points: PointsResult,
        issued_at: DateTime<Utc>,
    ) -> Self {
        PointsReceipt {
            receipt_number: receipt_number(issued_at),
            customer_name: customer_name.into(),
            purchase_amount,
            points_earned: points.points_earned,
            issued_at,
        }
    }

    /// Plain-text rendering, one field per line.
    ///
    /// ```text
    /// Receipt  PTS-20261019-1A2B3C4D
    /// Date     2026-10-19 14:05
    /// Customer Amel
    /// Purchase 2.500 DT
    /// Points   +25
    /// ```
    pub fn render_text(&self) -> String {
        format!(
            "Receipt  {}\nDate     {}\nCustomer {}\nPurchase {}\nPoints   +{}\n",
            self.receipt_number,
            self.issued_at.format("%Y-%m-%d %H:%M"),
            self.customer_name,
            self.purchase_amount,
            self.points_earned,
        )
    }
}

fn receipt_number(issued_at: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string()[..8].to_uppercase();
    format!("PTS-{}-{}", issued_at.format("%Y%m%d"), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 14, 5, 0).unwrap()
    }

    #[test]
    fn test_receipt_number_format() {
        let receipt = PointsReceipt::issued_at(
            "Amel",
            Money::from_millimes(2_500),
            PointsResult { points_earned: 25 },
            fixed_time(),
        );
        assert!(receipt.receipt_number.starts_with("PTS-20261019-"));
        assert_eq!(receipt.receipt_number.len(), "PTS-20261019-".len() + 8);
    }

    #[test]
    fn test_receipt_numbers_are_unique() {
        let a = PointsReceipt::issued_at("A", Money::zero(), PointsResult::default(), fixed_time());
        let b = PointsReceipt::issued_at("A", Money::zero(), PointsResult::default(), fixed_time());
        assert_ne!(a.receipt_number, b.receipt_number);
    }

    #[test]
    fn test_render_text() {
        let receipt = PointsReceipt::issued_at(
            "Amel",
            Money::from_millimes(2_500),
            PointsResult { points_earned: 25 },
            fixed_time(),
        );
        let text = receipt.render_text();
        assert!(text.contains("Date     2026-10-19 14:05"));
        assert!(text.contains("Customer Amel"));
        assert!(text.contains("Purchase 2.500 DT"));
        assert!(text.contains("Points   +25"));
        assert_eq!(text.lines().count(), 5);
        assert!(text.ends_with("Points   +25\n"));
    }

    #[test]
    fn test_json_shape() {
        let receipt = PointsReceipt::issued_at(
            "Amel",
            Money::from_millimes(2_500),
            PointsResult { points_earned: 25 },
            fixed_time(),
        );
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["purchaseAmount"], 2500);
        assert_eq!(json["pointsEarned"], 25);
        assert_eq!(json["customerName"], "Amel");
    }
}
