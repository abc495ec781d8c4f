//! Request bodies and their coercion into domain types
//!
//! Clients are lenient about types: numbers may arrive as strings and flags
//! as numbers or words. Missing or `null` numbers default to 0 and missing
//! flags to false, leaving range checks to the pricing engine. The body
//! itself must be a JSON object.

use courier_common::{ShipmentField, ShipmentRequest, ValidationError};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};
use std::str::FromStr;

/// Body of `POST /delivery/calculate`, before coercion
#[derive(Debug, Clone, Default)]
pub struct CalculateRequest {
    pub weight: Value,
    pub distance: Value,
    pub is_urgent: Value,
    pub is_fragile: Value,
    pub insurance_value: Value,
}

impl CalculateRequest {
    /// Pick the known fields out of a JSON body; `None` unless it is an object
    pub fn from_json(body: Value) -> Option<Self> {
        match body {
            Value::Object(map) => Some(Self::from_map(map)),
            _ => None,
        }
    }

    fn from_map(mut map: Map<String, Value>) -> Self {
        let mut take = |key: &str| map.remove(key).unwrap_or(Value::Null);
        Self {
            weight: take("weight"),
            distance: take("distance"),
            is_urgent: take("is_urgent"),
            is_fragile: take("is_fragile"),
            insurance_value: take("insurance_value"),
        }
    }

    /// Coerce the raw fields into a [`ShipmentRequest`]
    pub fn into_shipment(self) -> Result<ShipmentRequest, ValidationError> {
        Ok(ShipmentRequest {
            weight: coerce_number(ShipmentField::Weight, &self.weight)?,
            distance: coerce_number(ShipmentField::Distance, &self.distance)?,
            is_urgent: coerce_flag(ShipmentField::IsUrgent, &self.is_urgent)?,
            is_fragile: coerce_flag(ShipmentField::IsFragile, &self.is_fragile)?,
            insurance_value: coerce_number(ShipmentField::InsuranceValue, &self.insurance_value)?,
        })
    }
}

/// Body of `GET /products`
#[derive(Debug, Clone, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<Value>,
}

fn coerce_number(field: ShipmentField, value: &Value) -> Result<Decimal, ValidationError> {
    let invalid = || ValidationError::InvalidNumber {
        field,
        raw: value.to_string(),
    };

    match value {
        Value::Null => Ok(Decimal::ZERO),
        Value::Bool(b) => Ok(if *b { Decimal::ONE } else { Decimal::ZERO }),
        Value::Number(n) => parse_decimal(&n.to_string())
            .or_else(|| n.as_f64().and_then(saturate))
            .ok_or_else(invalid),
        Value::String(s) => {
            let text = s.trim();
            parse_decimal(text)
                .or_else(|| text.parse::<f64>().ok().and_then(saturate))
                .ok_or_else(invalid)
        }
        Value::Array(_) | Value::Object(_) => Err(invalid()),
    }
}

/// Finite numbers outside `Decimal` precision collapse to zero or the
/// representable extreme so the range check reports them
fn saturate(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        None
    } else if value.abs() < 1.0 {
        Some(Decimal::ZERO)
    } else if value > 0.0 {
        Some(Decimal::MAX)
    } else {
        Some(Decimal::MIN)
    }
}

/// Plain or scientific notation, as printed by JSON encoders
fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

fn coerce_flag(field: ShipmentField, value: &Value) -> Result<bool, ValidationError> {
    let invalid = || ValidationError::InvalidFlag {
        field,
        raw: value.to_string(),
    };

    match value {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).ok_or_else(invalid),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" | "" => Ok(false),
            _ => Err(invalid()),
        },
        Value::Array(_) | Value::Object(_) => Err(invalid()),
    }
}
