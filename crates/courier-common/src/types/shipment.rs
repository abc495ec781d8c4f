//! Shipment parameters for a single quote

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request for a delivery price quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRequest {
    /// Parcel weight in kilograms
    pub weight: Decimal,

    /// Delivery distance in kilometres
    pub distance: Decimal,

    /// Urgent delivery
    #[serde(default)]
    pub is_urgent: bool,

    /// Fragile contents
    #[serde(default)]
    pub is_fragile: bool,

    /// Declared value to insure; only positive values are charged
    #[serde(default)]
    pub insurance_value: Decimal,
}

impl ShipmentRequest {
    /// Create a plain shipment: not urgent, not fragile, uninsured
    pub fn new(weight: Decimal, distance: Decimal) -> Self {
        Self {
            weight,
            distance,
            is_urgent: false,
            is_fragile: false,
            insurance_value: Decimal::ZERO,
        }
    }

    /// Mark as urgent
    pub fn urgent(mut self) -> Self {
        self.is_urgent = true;
        self
    }

    /// Mark as fragile
    pub fn fragile(mut self) -> Self {
        self.is_fragile = true;
        self
    }

    /// Set the insured value
    pub fn insured(mut self, value: Decimal) -> Self {
        self.insurance_value = value;
        self
    }

    /// Whether an insurance charge applies
    pub fn is_insured(&self) -> bool {
        self.insurance_value > Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_builder_defaults() {
        let request = ShipmentRequest::new(dec!(5), dec!(10));
        assert!(!request.is_urgent);
        assert!(!request.is_fragile);
        assert!(!request.is_insured());
    }

    #[test]
    fn test_only_positive_value_is_insured() {
        let request = ShipmentRequest::new(dec!(5), dec!(10)).urgent().fragile();
        assert!(request.is_urgent && request.is_fragile);
        assert!(request.clone().insured(dec!(1000)).is_insured());
        assert!(!request.clone().insured(dec!(0)).is_insured());
        assert!(!request.insured(dec!(-50)).is_insured());
    }
}
