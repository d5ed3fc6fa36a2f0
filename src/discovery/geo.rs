//! Geographic distance helpers
//!
//! Leaf module: great-circle distance used by location scoring and the
//! radius filter.

use crate::error::{Error, Result};

/// Mean Earth radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinate pairs, in kilometers.
///
/// Standard haversine formula. Inputs are degrees.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Validate a coordinate pair, failing fast on out-of-range values.
///
/// The engine itself never calls this: candidate data is treated
/// defensively. It is for callers that build filter coordinates from
/// user input and want integration bugs surfaced loudly.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) || latitude.is_nan() {
        return Err(Error::invalid_coordinate("latitude", latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) || longitude.is_nan() {
        return Err(Error::invalid_coordinate("longitude", longitude));
    }
    Ok(())
}
