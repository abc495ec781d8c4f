//! # Courier Pricing
//!
//! Delivery cost calculation for the Courier quote service.
//!
//! ## Pricing Formula
//!
//! ```text
//! subtotal = base_rate + weight × price_per_kg + distance × price_per_km
//! urgent   = subtotal × (urgent_multiplier - 1)
//! fragile  = (subtotal + urgent) × fragile_surcharge
//! insurance = insurance_value × insurance_rate     (value > 0 only)
//! total    = round(subtotal + urgent + fragile + insurance, 2)
//! ```
//!
//! The engine holds nothing but an immutable [`courier_common::RateConfig`],
//! so a single instance can be shared by any number of concurrent callers.

pub mod pricing;

pub use pricing::{round_money, PricingEngine};
