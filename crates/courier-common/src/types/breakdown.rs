//! Itemized cost breakdown and the final quote
//!
//! Components are kept in the order they are applied:
//! base, weight, distance, subtotal, urgent, fragile, insurance, total.
//! Optional components are omitted from the JSON form when not applied.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Named cost components of one quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Flat base fee
    #[serde(with = "rust_decimal::serde::float")]
    pub base: Decimal,

    /// Weight × price per kg
    #[serde(with = "rust_decimal::serde::float")]
    pub weight: Decimal,

    /// Distance × price per km
    #[serde(with = "rust_decimal::serde::float")]
    pub distance: Decimal,

    /// base + weight + distance, before any surcharge
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,

    /// Urgent surcharge delta
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub urgent: Option<Decimal>,

    /// Fragile surcharge, on top of the urgent-adjusted subtotal
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub fragile: Option<Decimal>,

    /// Insurance charge, never scaled by surcharges
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub insurance: Option<Decimal>,

    /// Rounded final amount
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl CostBreakdown {
    /// Sum of all surcharges added after the subtotal
    pub fn surcharges(&self) -> Decimal {
        [self.urgent, self.fragile, self.insurance]
            .into_iter()
            .flatten()
            .sum()
    }
}

/// Final cost together with its itemized breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryQuote {
    /// Rounded total cost
    #[serde(with = "rust_decimal::serde::float")]
    pub cost: Decimal,

    /// Itemized components
    pub details: CostBreakdown,
}
