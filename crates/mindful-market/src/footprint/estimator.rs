use serde::{Deserialize, Serialize};
use tracing::debug;

use super::geo::{Location, LookupError};
use super::product::ProductCategory;

/// Transport emissions per kilometer shipped.
pub const TRANSPORT_FACTOR_KG_PER_KM: f64 = 0.015;
/// Purchases at or below this impact count as eco friendly.
pub const ECO_IMPACT_THRESHOLD_KG: f64 = 50.0;

/// Outcome of a single footprint estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Total impact in kg CO2e, rounded to cents.
    pub impact_kg: f64,
    /// Shipping distance in kilometers, rounded to cents.
    pub distance_km: f64,
    pub eco_friendly: bool,
}

/// Errors raised while estimating or recording a purchase.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimateError {
    #[error("invalid location '{0}'")]
    InvalidLocation(String),
    #[error("invalid price {0}: price must be a positive amount")]
    InvalidPrice(f64),
    #[error("invalid estimate: impact {impact_kg} kg over {distance_km} km")]
    InvalidEstimate { impact_kg: f64, distance_km: f64 },
}

impl From<LookupError> for EstimateError {
    fn from(value: LookupError) -> Self {
        Self::InvalidLocation(value.0)
    }
}

/// Estimate the footprint of buying `product` at `price` from `shipper` into `buyer`.
pub fn estimate(
    product: &ProductCategory,
    price: f64,
    buyer: Location,
    shipper: Location,
) -> Result<EstimateResult, EstimateError> {
    let price = validate_price(price)?;

    let material_impact = price * product.emission_factor();
    let distance = buyer.coordinate().distance_to(&shipper.coordinate());
    let transport_impact = distance * TRANSPORT_FACTOR_KG_PER_KM;

    let impact_kg = round_to_cents(material_impact + transport_impact);
    let result = EstimateResult {
        impact_kg,
        distance_km: round_to_cents(distance),
        eco_friendly: is_eco_friendly(impact_kg),
    };

    debug!(
        product = %product,
        price,
        %buyer,
        %shipper,
        impact_kg = result.impact_kg,
        distance_km = result.distance_km,
        eco = result.eco_friendly,
        "estimated purchase footprint"
    );

    Ok(result)
}

/// Same as [`estimate`], resolving the product and locations by name first.
pub fn estimate_by_name(
    product: &str,
    price: f64,
    buyer: &str,
    shipper: &str,
) -> Result<EstimateResult, EstimateError> {
    let buyer: Location = buyer.parse()?;
    let shipper: Location = shipper.parse()?;
    estimate(&ProductCategory::from_name(product), price, buyer, shipper)
}

pub fn is_eco_friendly(impact_kg: f64) -> bool {
    impact_kg <= ECO_IMPACT_THRESHOLD_KG
}

pub(crate) fn validate_price(price: f64) -> Result<f64, EstimateError> {
    if price.is_finite() && price > 0.0 {
        Ok(price)
    } else {
        Err(EstimateError::InvalidPrice(price))
    }
}

/// Accept an estimate for recording. Impact and distance must be finite and
/// non-negative; the eco flag is always re-derived from the impact.
pub(crate) fn validate_estimate(
    estimate: EstimateResult,
) -> Result<EstimateResult, EstimateError> {
    let EstimateResult {
        impact_kg,
        distance_km,
        ..
    } = estimate;
    let usable = |value: f64| value.is_finite() && value >= 0.0;
    if !usable(impact_kg) || !usable(distance_km) {
        return Err(EstimateError::InvalidEstimate {
            impact_kg,
            distance_km,
        });
    }

    Ok(EstimateResult {
        impact_kg,
        distance_km,
        eco_friendly: is_eco_friendly(impact_kg),
    })
}

pub(crate) fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Explanation of how a recorded impact was composed.
///
/// Built from the stored price and rounded distance so the explanation never
/// depends on the location table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactBreakdown {
    pub product: ProductCategory,
    pub price: f64,
    pub material_factor: f64,
    pub material_impact_kg: f64,
    pub distance_km: f64,
    pub transport_factor: f64,
    pub transport_impact_kg: f64,
    pub total_impact_kg: f64,
}

impl ImpactBreakdown {
    pub fn from_parts(
        product: &ProductCategory,
        price: f64,
        distance_km: f64,
        total_impact_kg: f64,
    ) -> Self {
        let material_factor = product.emission_factor();
        Self {
            product: product.clone(),
            price,
            material_factor,
            material_impact_kg: round_to_cents(price * material_factor),
            distance_km,
            transport_factor: TRANSPORT_FACTOR_KG_PER_KM,
            transport_impact_kg: round_to_cents(distance_km * TRANSPORT_FACTOR_KG_PER_KM),
            total_impact_kg,
        }
    }

    /// Multi-line rendering used by the command line shell.
    pub fn describe(&self) -> String {
        format!(
            "Product type: {product}\n\
             Price impact: {price} x {factor} = {material} kg CO2\n\
             Transport impact: {distance:.2} km x {transport_factor} = {transport} kg CO2\n\
             Total CO2 impact: {material} + {transport} = {total} kg CO2",
            product = self.product,
            price = self.price,
            factor = self.material_factor,
            material = self.material_impact_kg,
            distance = self.distance_km,
            transport_factor = self.transport_factor,
            transport = self.transport_impact_kg,
            total = self.total_impact_kg,
        )
    }
}
