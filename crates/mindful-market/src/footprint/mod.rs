//! Static location and product tables plus the per-purchase footprint formula.

pub mod distance;
pub mod estimator;
pub mod geo;
pub mod product;

pub use distance::{distance_km, EARTH_RADIUS_KM};
pub use estimator::{
    estimate, estimate_by_name, is_eco_friendly, EstimateError, EstimateResult, ImpactBreakdown,
    ECO_IMPACT_THRESHOLD_KG, TRANSPORT_FACTOR_KG_PER_KM,
};
pub use geo::{coordinate_of, Coordinate, Location, LookupError};
pub use product::{ProductCategory, DEFAULT_EMISSION_FACTOR};

/// Every configured location in display order.
pub fn list_locations() -> Vec<Location> {
    Location::ordered().to_vec()
}

/// Display-only sub-locations for `location`.
pub fn list_sub_locations(location: Location) -> &'static [&'static str] {
    location.sub_locations()
}

/// Cataloged product categories in display order.
pub fn list_product_categories() -> Vec<ProductCategory> {
    ProductCategory::ordered()
}
