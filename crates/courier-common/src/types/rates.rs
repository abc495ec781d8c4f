//! Rate table - the fixed prices and limits every quote is computed against
//!
//! A [`RateConfig`] is built once at startup and shared read-only by all
//! callers. It serializes as the flat object served by `GET /delivery/rates`.

use crate::error::{PricingError, ShipmentField, ValidationError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Prices, surcharges and accepted ranges for delivery quotes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateConfig {
    /// Flat fee charged on every shipment
    #[serde(with = "rust_decimal::serde::float")]
    pub base_rate: Decimal,

    /// Price per kilogram
    #[serde(with = "rust_decimal::serde::float")]
    pub price_per_kg: Decimal,

    /// Price per kilometre
    #[serde(with = "rust_decimal::serde::float")]
    pub price_per_km: Decimal,

    /// Multiplier applied to the subtotal for urgent delivery (e.g. 1.5)
    #[serde(with = "rust_decimal::serde::float")]
    pub urgent_multiplier: Decimal,

    /// Fractional surcharge for fragile goods (e.g. 0.2 for +20%)
    #[serde(rename = "fragile_surcharge", with = "rust_decimal::serde::float")]
    pub fragile_surcharge_fraction: Decimal,

    /// Fraction of the insured value charged as insurance
    #[serde(with = "rust_decimal::serde::float")]
    pub insurance_rate: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub min_weight: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub max_weight: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub min_distance: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub max_distance: Decimal,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            base_rate: dec!(10),
            price_per_kg: dec!(3),
            price_per_km: dec!(2),
            urgent_multiplier: dec!(1.5),
            fragile_surcharge_fraction: dec!(0.2),
            insurance_rate: dec!(0.01),
            min_weight: dec!(0.1),
            max_weight: dec!(1000),
            min_distance: dec!(1),
            max_distance: dec!(5000),
        }
    }
}

impl RateConfig {
    /// Check that the table is usable: no negative amounts, ordered ranges
    pub fn validate(&self) -> Result<(), PricingError> {
        let amounts = [
            ("base_rate", self.base_rate),
            ("price_per_kg", self.price_per_kg),
            ("price_per_km", self.price_per_km),
            ("urgent_multiplier", self.urgent_multiplier),
            ("fragile_surcharge", self.fragile_surcharge_fraction),
            ("insurance_rate", self.insurance_rate),
            ("min_weight", self.min_weight),
            ("min_distance", self.min_distance),
        ];
        if let Some((name, value)) = amounts.iter().find(|(_, v)| v.is_sign_negative()) {
            return Err(PricingError::InvalidRates(format!(
                "{} must not be negative (got {})",
                name, value
            )));
        }

        if self.min_weight > self.max_weight {
            return Err(PricingError::InvalidRates(format!(
                "weight range is empty: {} > {}",
                self.min_weight, self.max_weight
            )));
        }
        if self.min_distance > self.max_distance {
            return Err(PricingError::InvalidRates(format!(
                "distance range is empty: {} > {}",
                self.min_distance, self.max_distance
            )));
        }

        Ok(())
    }

    /// Reject a weight outside `[min_weight, max_weight]`
    pub fn check_weight(&self, weight: Decimal) -> Result<(), ValidationError> {
        Self::check_range(ShipmentField::Weight, weight, self.min_weight, self.max_weight)
    }

    /// Reject a distance outside `[min_distance, max_distance]`
    pub fn check_distance(&self, distance: Decimal) -> Result<(), ValidationError> {
        Self::check_range(
            ShipmentField::Distance,
            distance,
            self.min_distance,
            self.max_distance,
        )
    }

    fn check_range(
        field: ShipmentField,
        value: Decimal,
        min: Decimal,
        max: Decimal,
    ) -> Result<(), ValidationError> {
        if value < min || value > max {
            return Err(ValidationError::OutOfRange {
                field,
                value,
                min,
                max,
            });
        }
        Ok(())
    }
}
