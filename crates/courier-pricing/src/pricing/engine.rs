//! Delivery pricing engine
//!
//! Computes the cost of a shipment against an immutable [`RateConfig`]:
//! - Base fee plus per-kg and per-km charges
//! - Urgent multiplier and fragile surcharge, compounding in that order
//! - Insurance charge added last, never multiplied
//!
//! Every public operation validates the request on its own, so callers may
//! use any of them in isolation.

use crate::pricing::rounding::round_money;
use courier_common::{
    CostBreakdown, CourierError, DeliveryQuote, PricingError, RateConfig, Result,
    ShipmentRequest,
};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Stateless pricing engine over a fixed rate table
#[derive(Debug, Clone)]
pub struct PricingEngine {
    /// Rate table, never mutated after construction
    rates: RateConfig,
}

impl PricingEngine {
    /// Create an engine over a validated rate table
    pub fn new(rates: RateConfig) -> Result<Self> {
        rates.validate()?;
        Ok(Self { rates })
    }

    /// Rate table this engine prices against
    pub fn rates(&self) -> &RateConfig {
        &self.rates
    }

    /// Total cost of a shipment, rounded to cents
    #[instrument(skip(self), level = "debug")]
    pub fn calculate_cost(&self, request: &ShipmentRequest) -> Result<Decimal> {
        self.validate(request)?;
        self.cost_unchecked(request)
    }

    /// Itemized cost of a shipment; `total` equals [`Self::calculate_cost`]
    #[instrument(skip(self), level = "debug")]
    pub fn detailed_calculation(&self, request: &ShipmentRequest) -> Result<CostBreakdown> {
        self.validate(request)?;
        self.itemize(request)
    }

    /// Cost and breakdown for the same request, validated once
    #[instrument(skip(self))]
    pub fn quote(&self, request: &ShipmentRequest) -> Result<DeliveryQuote> {
        self.validate(request)?;

        let cost = self.cost_unchecked(request)?;
        let details = self.itemize(request)?;
        debug_assert_eq!(cost, details.total);

        debug!(
            cost = %cost,
            urgent = request.is_urgent,
            fragile = request.is_fragile,
            insured = request.is_insured(),
            "Computed delivery quote"
        );

        Ok(DeliveryQuote { cost, details })
    }

    fn validate(&self, request: &ShipmentRequest) -> Result<()> {
        self.rates.check_weight(request.weight)?;
        self.rates.check_distance(request.distance)?;
        Ok(())
    }

    fn cost_unchecked(&self, request: &ShipmentRequest) -> Result<Decimal> {
        let rates = &self.rates;

        let mut subtotal = self.base_subtotal(request)?;
        if request.is_urgent {
            subtotal = mul(subtotal, rates.urgent_multiplier)?;
        }
        if request.is_fragile {
            subtotal = mul(subtotal, add(Decimal::ONE, rates.fragile_surcharge_fraction)?)?;
        }
        if request.is_insured() {
            subtotal = add(subtotal, mul(request.insurance_value, rates.insurance_rate)?)?;
        }

        Ok(round_money(subtotal))
    }

    fn itemize(&self, request: &ShipmentRequest) -> Result<CostBreakdown> {
        let rates = &self.rates;

        let base = rates.base_rate;
        let weight = mul(request.weight, rates.price_per_kg)?;
        let distance = mul(request.distance, rates.price_per_km)?;
        let subtotal = add(add(base, weight)?, distance)?;

        // The running amount goes through the same steps as cost_unchecked,
        // so the rounded total matches it exactly.
        let mut running = subtotal;

        let urgent = if request.is_urgent {
            let surcharge = mul(running, rates.urgent_multiplier - Decimal::ONE)?;
            running = mul(running, rates.urgent_multiplier)?;
            Some(surcharge)
        } else {
            None
        };

        let fragile = if request.is_fragile {
            let surcharge = mul(running, rates.fragile_surcharge_fraction)?;
            running = mul(running, add(Decimal::ONE, rates.fragile_surcharge_fraction)?)?;
            Some(surcharge)
        } else {
            None
        };

        let insurance = if request.is_insured() {
            let charge = mul(request.insurance_value, rates.insurance_rate)?;
            running = add(running, charge)?;
            Some(charge)
        } else {
            None
        };

        Ok(CostBreakdown {
            base,
            weight,
            distance,
            subtotal,
            urgent,
            fragile,
            insurance,
            total: round_money(running),
        })
    }

    fn base_subtotal(&self, request: &ShipmentRequest) -> Result<Decimal> {
        let rates = &self.rates;
        let weight = mul(request.weight, rates.price_per_kg)?;
        let distance = mul(request.distance, rates.price_per_km)?;
        add(add(rates.base_rate, weight)?, distance)
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self {
            rates: RateConfig::default(),
        }
    }
}

fn mul(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_mul(b)
        .ok_or(CourierError::Pricing(PricingError::Overflow))
}

fn add(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_add(b)
        .ok_or(CourierError::Pricing(PricingError::Overflow))
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_common::{ShipmentField, ValidationError};
    use rust_decimal_macros::dec;

    fn engine() -> PricingEngine {
        PricingEngine::new(RateConfig::default()).unwrap()
    }

    fn shipment() -> ShipmentRequest {
        ShipmentRequest::new(dec!(5), dec!(10))
    }

    #[test]
    fn test_plain_shipment() {
        // 10 + 5×3 + 10×2
        assert_eq!(engine().calculate_cost(&shipment()).unwrap(), dec!(45));
    }

    #[test]
    fn test_urgent_shipment() {
        let engine = engine();
        let request = shipment().urgent();

        assert_eq!(engine.calculate_cost(&request).unwrap(), dec!(67.5));

        let breakdown = engine.detailed_calculation(&request).unwrap();
        assert_eq!(breakdown.subtotal, dec!(45));
        assert_eq!(breakdown.urgent, Some(dec!(22.5)));
        assert_eq!(breakdown.fragile, None);
        assert_eq!(breakdown.total, dec!(67.5));
    }

    #[test]
    fn test_fragile_compounds_on_urgent() {
        let engine = engine();
        let request = shipment().urgent().fragile();

        assert_eq!(engine.calculate_cost(&request).unwrap(), dec!(81));

        let breakdown = engine.detailed_calculation(&request).unwrap();
        assert_eq!(breakdown.urgent, Some(dec!(22.5)));
        assert_eq!(breakdown.fragile, Some(dec!(13.5)));
        assert_eq!(breakdown.total, dec!(81));
    }

    #[test]
    fn test_fragile_only() {
        let breakdown = engine()
            .detailed_calculation(&shipment().fragile())
            .unwrap();
        assert_eq!(breakdown.urgent, None);
        assert_eq!(breakdown.fragile, Some(dec!(9)));
        assert_eq!(breakdown.total, dec!(54));
    }

    #[test]
    fn test_insurance_added_last_and_unscaled() {
        let engine = engine();

        let insured = shipment().insured(dec!(1000));
        assert_eq!(engine.calculate_cost(&insured).unwrap(), dec!(55));

        let everything = shipment().urgent().fragile().insured(dec!(1000));
        let breakdown = engine.detailed_calculation(&everything).unwrap();
        assert_eq!(breakdown.insurance, Some(dec!(10)));
        assert_eq!(breakdown.total, dec!(91));
        assert_eq!(engine.calculate_cost(&everything).unwrap(), dec!(91));
    }

    #[test]
    fn test_non_positive_insurance_is_ignored() {
        let engine = engine();
        for value in [dec!(0), dec!(-250)] {
            let request = shipment().insured(value);
            assert_eq!(engine.calculate_cost(&request).unwrap(), dec!(45));
            assert_eq!(engine.detailed_calculation(&request).unwrap().insurance, None);
        }
    }

    #[test]
    fn test_rounding_midpoint_goes_up() {
        // 10 + 0.115×3 + 1×2 = 12.345 exactly
        let request = ShipmentRequest::new(dec!(0.115), dec!(1));
        let engine = engine();
        assert_eq!(engine.calculate_cost(&request).unwrap(), dec!(12.35));

        let breakdown = engine.detailed_calculation(&request).unwrap();
        assert_eq!(breakdown.subtotal, dec!(12.345));
        assert_eq!(breakdown.total, dec!(12.35));
    }

    #[test]
    fn test_weight_below_minimum() {
        let err = engine()
            .calculate_cost(&ShipmentRequest::new(dec!(0.05), dec!(10)))
            .unwrap_err();
        match err {
            CourierError::Validation(ValidationError::OutOfRange { field, min, max, .. }) => {
                assert_eq!(field, ShipmentField::Weight);
                assert_eq!(min, dec!(0.1));
                assert_eq!(max, dec!(1000));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_weight_checked_before_distance() {
        let err = engine()
            .detailed_calculation(&ShipmentRequest::new(dec!(2000), dec!(0)))
            .unwrap_err();
        assert!(matches!(
            err,
            CourierError::Validation(ValidationError::OutOfRange {
                field: ShipmentField::Weight,
                ..
            })
        ));
    }

    #[test]
    fn test_distance_out_of_range() {
        let engine = engine();
        for distance in [dec!(0.5), dec!(5000.01)] {
            let err = engine
                .quote(&ShipmentRequest::new(dec!(5), distance))
                .unwrap_err();
            assert!(matches!(
                err,
                CourierError::Validation(ValidationError::OutOfRange {
                    field: ShipmentField::Distance,
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_quote_pairs_cost_and_details() {
        let quote = engine().quote(&shipment().urgent()).unwrap();
        assert_eq!(quote.cost, dec!(67.5));
        assert_eq!(quote.details.total, quote.cost);

        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["cost"], 67.5);
        assert_eq!(json["details"]["urgent"], 22.5);
        assert!(json["details"].get("fragile").is_none());
    }

    #[test]
    fn test_custom_rates() {
        let rates = RateConfig {
            base_rate: dec!(0),
            price_per_kg: dec!(1),
            price_per_km: dec!(0.5),
            ..RateConfig::default()
        };
        let engine = PricingEngine::new(rates).unwrap();
        assert_eq!(engine.calculate_cost(&shipment()).unwrap(), dec!(10));
    }

    #[test]
    fn test_rejects_invalid_rate_table() {
        let rates = RateConfig {
            min_weight: dec!(5),
            max_weight: dec!(1),
            ..RateConfig::default()
        };
        assert!(matches!(
            PricingEngine::new(rates),
            Err(CourierError::Pricing(PricingError::InvalidRates(_)))
        ));
    }

    #[test]
    fn test_huge_insurance_overflows_cleanly() {
        let rates = RateConfig {
            insurance_rate: dec!(1000),
            ..RateConfig::default()
        };
        let engine = PricingEngine::new(rates).unwrap();
        let err = engine
            .calculate_cost(&shipment().insured(Decimal::MAX))
            .unwrap_err();
        assert!(matches!(err, CourierError::Pricing(PricingError::Overflow)));
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        let engine = std::sync::Arc::new(engine());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let engine = engine.clone();
                std::thread::spawn(move || engine.calculate_cost(&shipment().urgent().fragile()))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), dec!(81));
        }
    }
}
