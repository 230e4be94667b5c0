//! # Configuration
//!
//! Backend-configured values the calculators take as parameters.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`MEDINA_*`)
//! 2. Defaults (this file), matching what the backend ships today
//!
//! Configuration is read once and is immutable afterwards, so it is passed
//! around by reference and never locked.
//!
//! ## Environment Variables
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `MEDINA_FREE_SHIPPING_THRESHOLD` | Subtotal (DT) above which shipping is free | `499` |
//! | `MEDINA_SHIPPING_FEE` | Standard shipping fee (DT) | `8` |
//! | `MEDINA_FLOOR_TOTAL_AT_ZERO` | Never report a negative total | `false` |
//! | `MEDINA_LOYALTY_ACTIVE` | Loyalty program switch | `true` |
//! | `MEDINA_POINTS_RATE` | Points per millime | `0.01` |

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ConfigError;
use crate::money::Money;
use crate::types::PointsRate;
use crate::validation::{parse_amount, parse_points_rate};

pub const ENV_FREE_SHIPPING_THRESHOLD: &str = "MEDINA_FREE_SHIPPING_THRESHOLD";
pub const ENV_SHIPPING_FEE: &str = "MEDINA_SHIPPING_FEE";
pub const ENV_FLOOR_TOTAL_AT_ZERO: &str = "MEDINA_FLOOR_TOTAL_AT_ZERO";
pub const ENV_LOYALTY_ACTIVE: &str = "MEDINA_LOYALTY_ACTIVE";
pub const ENV_POINTS_RATE: &str = "MEDINA_POINTS_RATE";

/// Default free-shipping threshold: 499 DT.
pub const DEFAULT_FREE_SHIPPING_THRESHOLD: Money = Money::from_dinars(499);

/// Default standard shipping fee: 8 DT.
pub const DEFAULT_SHIPPING_FEE: Money = Money::from_dinars(8);

// =============================================================================
// Pricing Config
// =============================================================================

/// Parameters of the order total computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PricingConfig {
    /// Shipping is waived when the subtotal is strictly above this.
    pub free_shipping_threshold: Money,

    /// Charged when shipping is not waived.
    pub standard_shipping_fee: Money,

    /// When set, a negative total is reported as zero. Off by default:
    /// a manual discount larger than the order shows up as a negative total.
    pub floor_total_at_zero: bool,
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            free_shipping_threshold: DEFAULT_FREE_SHIPPING_THRESHOLD,
            standard_shipping_fee: DEFAULT_SHIPPING_FEE,
            floor_total_at_zero: false,
        }
    }
}

impl PricingConfig {
    /// Loads the pricing configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the pricing configuration from any key/value source.
    ///
    /// ```rust
    /// use medina_core::config::PricingConfig;
    /// use medina_core::Money;
    ///
    /// let config = PricingConfig::from_lookup(|key| match key {
    ///     "MEDINA_SHIPPING_FEE" => Some("7.5".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(config.standard_shipping_fee, Money::from_millimes(7_500));
    /// assert_eq!(config.free_shipping_threshold, Money::from_dinars(499));
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = PricingConfig::default();

        if let Some(raw) = lookup(ENV_FREE_SHIPPING_THRESHOLD) {
            config.free_shipping_threshold = parse_dinars(ENV_FREE_SHIPPING_THRESHOLD, &raw)?;
        }

        if let Some(raw) = lookup(ENV_SHIPPING_FEE) {
            config.standard_shipping_fee = parse_dinars(ENV_SHIPPING_FEE, &raw)?;
        }

        if let Some(raw) = lookup(ENV_FLOOR_TOTAL_AT_ZERO) {
            config.floor_total_at_zero = parse_bool(ENV_FLOOR_TOTAL_AT_ZERO, &raw)?;
        }

        Ok(config)
    }
}

// =============================================================================
// Loyalty Program
// =============================================================================

/// Loyalty program settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LoyaltyProgram {
    pub active: bool,
    pub rate: PointsRate,
}

impl Default for LoyaltyProgram {
    /// Active, 0.01 points per millime (10 points per dinar).
    fn default() -> Self {
        LoyaltyProgram {
            active: true,
            rate: PointsRate::new(Decimal::new(1, 2)),
        }
    }
}

impl LoyaltyProgram {
    /// Loads loyalty settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads loyalty settings from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut program = LoyaltyProgram::default();

        if let Some(raw) = lookup(ENV_LOYALTY_ACTIVE) {
            program.active = parse_bool(ENV_LOYALTY_ACTIVE, &raw)?;
        }

        if let Some(raw) = lookup(ENV_POINTS_RATE) {
            program.rate = parse_points_rate(&raw)
                .map_err(|_| ConfigError::InvalidValue(ENV_POINTS_RATE.to_string()))?;
        }

        Ok(program)
    }
}

// =============================================================================
// Parsing Helpers
// =============================================================================

fn parse_dinars(var: &str, raw: &str) -> Result<Money, ConfigError> {
    parse_amount(var, raw).map_err(|_| ConfigError::InvalidValue(var.to_string()))
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue(var.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_pricing_defaults() {
        let config = PricingConfig::default();
        assert_eq!(config.free_shipping_threshold.millimes(), 499_000);
        assert_eq!(config.standard_shipping_fee.millimes(), 8_000);
        assert!(!config.floor_total_at_zero);
    }

    #[test]
    fn test_pricing_empty_lookup_gives_defaults() {
        let config = PricingConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, PricingConfig::default());
    }

    #[test]
    fn test_pricing_overrides() {
        let config = PricingConfig::from_lookup(lookup_from(&[
            (ENV_FREE_SHIPPING_THRESHOLD, "300"),
            (ENV_SHIPPING_FEE, " 6.900 "),
            (ENV_FLOOR_TOTAL_AT_ZERO, "TRUE"),
        ]))
        .unwrap();

        assert_eq!(config.free_shipping_threshold, Money::from_dinars(300));
        assert_eq!(config.standard_shipping_fee, Money::from_millimes(6_900));
        assert!(config.floor_total_at_zero);
    }

    #[test]
    fn test_pricing_invalid_values() {
        let err = PricingConfig::from_lookup(lookup_from(&[(ENV_SHIPPING_FEE, "eight")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue(ENV_SHIPPING_FEE.to_string()));

        let err = PricingConfig::from_lookup(lookup_from(&[(ENV_FREE_SHIPPING_THRESHOLD, "-1")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue(ENV_FREE_SHIPPING_THRESHOLD.to_string())
        );

        assert!(
            PricingConfig::from_lookup(lookup_from(&[(ENV_FLOOR_TOTAL_AT_ZERO, "maybe")]))
                .is_err()
        );
    }

    #[test]
    fn test_loyalty_defaults() {
        let program = LoyaltyProgram::from_lookup(|_| None).unwrap();
        assert!(program.active);
        assert_eq!(program.rate.value(), Decimal::new(1, 2));
    }

    #[test]
    fn test_loyalty_overrides() {
        let program = LoyaltyProgram::from_lookup(lookup_from(&[
            (ENV_LOYALTY_ACTIVE, "off"),
            (ENV_POINTS_RATE, "0.05"),
        ]))
        .unwrap();
        assert!(!program.active);
        assert_eq!(program.rate.value(), Decimal::new(5, 2));
    }

    #[test]
    fn test_loyalty_rejects_negative_rate() {
        let err = LoyaltyProgram::from_lookup(lookup_from(&[(ENV_POINTS_RATE, "-0.01")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue(ENV_POINTS_RATE.to_string()));
    }

    #[test]
    fn test_loyalty_rejects_blank_or_garbled_rate() {
        for raw in ["", "  ", "ten"] {
            let err = LoyaltyProgram::from_lookup(lookup_from(&[(ENV_POINTS_RATE, raw)]))
                .unwrap_err();
            assert_eq!(err, ConfigError::InvalidValue(ENV_POINTS_RATE.to_string()));
        }
    }

    #[test]
    fn test_pricing_rejects_amount_above_limit() {
        let err = PricingConfig::from_lookup(lookup_from(&[(ENV_SHIPPING_FEE, "99999999")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue(ENV_SHIPPING_FEE.to_string()));
    }
}
