//! # Courier Common
//!
//! Shared types and errors for the Courier delivery quote service.
//!
//! ## Core Types
//!
//! - [`RateConfig`]: Immutable rate table and accepted weight/distance ranges
//! - [`ShipmentRequest`]: Parameters of a single shipment to price
//! - [`CostBreakdown`]: Itemized cost components, in application order
//! - [`DeliveryQuote`]: Final cost paired with its breakdown
//!
//! ## Pricing Formula
//!
//! ```text
//! subtotal = base + weight × per_kg + distance × per_km
//! subtotal ×= urgent_multiplier            (urgent only)
//! subtotal ×= 1 + fragile_surcharge        (fragile only)
//! subtotal += insured_value × insurance    (insured only)
//! cost     = round(subtotal, 2)
//! ```

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{CourierError, PricingError, Result, ShipmentField, ValidationError};
pub use types::{
    breakdown::{CostBreakdown, DeliveryQuote},
    rates::RateConfig,
    shipment::ShipmentRequest,
};

/// Courier version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Decimal places kept in a monetary amount
pub const MONEY_SCALE: u32 = 2;
