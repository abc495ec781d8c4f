//! Error types for the Courier service
//!
//! Provides a unified error type and domain-specific error variants

use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// Result type alias using CourierError
pub type Result<T> = std::result::Result<T, CourierError>;

/// Unified error type for Courier operations
#[derive(Debug, Error)]
pub enum CourierError {
    // Request validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // Pricing errors
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    // Product catalog errors
    #[error("Catalog error: {0}")]
    Catalog(String),
}

/// Shipment request fields that can fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipmentField {
    Weight,
    Distance,
    InsuranceValue,
    IsUrgent,
    IsFragile,
}

impl ShipmentField {
    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipmentField::Weight => "weight",
            ShipmentField::Distance => "distance",
            ShipmentField::InsuranceValue => "insurance_value",
            ShipmentField::IsUrgent => "is_urgent",
            ShipmentField::IsFragile => "is_fragile",
        }
    }

    /// Measurement unit used in messages
    pub fn unit(&self) -> &'static str {
        match self {
            ShipmentField::Weight => "kg",
            ShipmentField::Distance => "km",
            _ => "",
        }
    }
}

impl fmt::Display for ShipmentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shipment validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{} must be between {} and {} {} (got {})", .field, .min, .max, .field.unit(), .value)]
    OutOfRange {
        field: ShipmentField,
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },

    #[error("{field} must be a number, got {raw}")]
    InvalidNumber { field: ShipmentField, raw: String },

    #[error("{field} must be a boolean, got {raw}")]
    InvalidFlag { field: ShipmentField, raw: String },
}

impl ValidationError {
    /// Field the error refers to
    pub fn field(&self) -> ShipmentField {
        match self {
            ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidNumber { field, .. }
            | ValidationError::InvalidFlag { field, .. } => *field,
        }
    }
}

/// Pricing calculation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("Pricing calculation overflow")]
    Overflow,

    #[error("Invalid rate table: {0}")]
    InvalidRates(String),
}
