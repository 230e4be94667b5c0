//! # medina-core: Order Pricing Logic for the Medina Admin Dashboard
//!
//! This crate holds the only logic the dashboard computes locally: order
//! totals and loyalty points previews. Everything else (inventory,
//! payments, persisted totals, point balances) belongs to the backend.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Medina Admin Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Dashboard (React)                            │   │
//! │  │   Create Order ──► Edit Order ──► Loyalty ──► Receipt print     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON (ts-rs generated types)           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ medina-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │  pricing  │  │  points   │  │   order   │  │   │
//! │  │   │   Money   │  │  totals   │  │  loyalty  │  │   draft   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ order mutation                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            GraphQL backend (authoritative totals)               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type in millimes (no floating point)
//! - [`types`] - Line items, pricing and points inputs/results
//! - [`pricing`] - Order total computation
//! - [`points`] - Loyalty points preview and points-to-currency value
//! - [`order`] - Order draft shared by the create and edit screens
//! - [`validation`] - Form input parsing and validation
//! - [`config`] - Shipping and loyalty parameters
//! - [`receipt`] - Points receipt content
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use medina_core::config::PricingConfig;
//! use medina_core::order::OrderDraft;
//! use medina_core::{CheckoutLineItem, Money, Percentage};
//!
//! let mut draft = OrderDraft::new();
//! draft
//!     .add_item(CheckoutLineItem::new(
//!         "550e8400-e29b-41d4-a716-446655440000",
//!         Money::from_dinars(100),
//!         2,
//!     ))
//!     .unwrap();
//! draft.apply_coupon(Percentage::from_percent(10)).unwrap();
//! draft.set_manual_discount(Money::from_dinars(5)).unwrap();
//!
//! let totals = draft.quote(&PricingConfig::default());
//! assert_eq!(totals.total.to_string(), "183.000 DT");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod money;
pub mod order;
pub mod points;
pub mod pricing;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::{LoyaltyProgram, PricingConfig};
pub use error::{ConfigError, CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::OrderDraft;
pub use points::{compute_points, points_value};
pub use pricing::compute_total;
pub use receipt::PointsReceipt;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines in one order.
pub const MAX_ORDER_LINES: usize = 100;

/// Maximum quantity of a single line.
///
/// Catches slips like typing 1000 instead of 10.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Largest amount accepted for a price or discount: 10 000 000 DT.
///
/// At `MAX_ORDER_LINES × MAX_ITEM_QUANTITY` units this keeps every order
/// total far inside `i64` millimes.
pub const MAX_AMOUNT: Money = Money::from_dinars(10_000_000);
