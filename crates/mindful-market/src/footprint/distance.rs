/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two points given in degrees.
///
/// Coordinates are not range checked; callers pass values from the location table.
pub fn distance_km(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
    let d_lat = (lat_b - lat_a).to_radians();
    let d_lon = (lon_b - lon_a).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat_a.to_radians().cos() * lat_b.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::footprint::geo::Location;

    #[test]
    fn identical_points_are_zero_apart() {
        for location in Location::ordered() {
            let c = location.coordinate();
            assert_eq!(distance_km(c.latitude, c.longitude, c.latitude, c.longitude), 0.0);
        }
    }

    #[test]
    fn distance_is_symmetric_for_every_pair() {
        for a in Location::ordered() {
            for b in Location::ordered() {
                let ab = a.coordinate().distance_to(&b.coordinate());
                let ba = b.coordinate().distance_to(&a.coordinate());
                assert!((ab - ba).abs() < 1e-9, "{a} -> {b}: {ab} vs {ba}");
                assert!(ab >= 0.0);
            }
        }
    }

    #[test]
    fn india_to_united_states_matches_reference() {
        let india = Location::India.coordinate();
        let us = Location::UnitedStates.coordinate();
        let distance = india.distance_to(&us);
        assert!((distance - 13355.12).abs() < 0.01, "got {distance}");
    }

    #[test]
    fn germany_to_france_is_short_haul() {
        let distance = Location::Germany
            .coordinate()
            .distance_to(&Location::France.coordinate());
        assert!(distance < 1000.0, "got {distance}");
    }
}
