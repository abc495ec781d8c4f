//! Core data types for the Courier quote service

pub mod breakdown;
pub mod rates;
pub mod shipment;
