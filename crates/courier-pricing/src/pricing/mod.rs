//! Pricing module
//!
//! Provides the delivery pricing engine with:
//! - Range validation of weight and distance
//! - Urgent and fragile surcharges
//! - Insurance charges
//! - Cent rounding, half away from zero

pub mod engine;
pub mod rounding;

pub use engine::PricingEngine;
pub use rounding::round_money;
