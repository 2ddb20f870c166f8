//! Geographic bounding box bounding admissible observation coordinates.
//!
//! The box is configuration data: loaded once at startup and immutable for
//! the life of the process. Construction rejects non-finite values, bounds
//! outside WGS84 ranges, and inverted axes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration key for the western bound.
pub const LON_MIN_KEY: &str = "lonMin";
/// Configuration key for the eastern bound.
pub const LON_MAX_KEY: &str = "lonMax";
/// Configuration key for the southern bound.
pub const LAT_MIN_KEY: &str = "latMin";
/// Configuration key for the northern bound.
pub const LAT_MAX_KEY: &str = "latMax";

/// Errors raised when constructing a [`BoundingBox`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoundingBoxError {
    /// A bound is NaN or infinite.
    #[error("{key} must be a finite number")]
    NonFinite {
        /// Configuration key of the offending bound.
        key: &'static str,
    },
    /// A longitude bound lies outside [-180, 180].
    #[error("{key} must lie within [-180, 180]")]
    LongitudeOutOfRange {
        /// Configuration key of the offending bound.
        key: &'static str,
    },
    /// A latitude bound lies outside [-90, 90].
    #[error("{key} must lie within [-90, 90]")]
    LatitudeOutOfRange {
        /// Configuration key of the offending bound.
        key: &'static str,
    },
    /// The minimum exceeds the maximum on one axis.
    #[error("{min_key} must not exceed {max_key}")]
    Inverted {
        /// Key of the minimum bound.
        min_key: &'static str,
        /// Key of the maximum bound.
        max_key: &'static str,
    },
}

/// Inclusive rectangle in longitude/latitude space (WGS84 degrees).
///
/// # Examples
/// ```
/// use observation_map::domain::BoundingBox;
///
/// let rio = BoundingBox::new(-44.887212, -40.95975, -23.366868, -20.764962)
///     .expect("valid bounds");
/// assert!(rio.contains_longitude(-42.0));
/// assert!(!rio.contains_latitude(-24.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoundingBoxDto", into = "BoundingBoxDto")]
pub struct BoundingBox {
    lon_min: f64,
    lon_max: f64,
    lat_min: f64,
    lat_max: f64,
}

impl BoundingBox {
    /// Validate and construct a bounding box.
    pub fn new(
        lon_min: f64,
        lon_max: f64,
        lat_min: f64,
        lat_max: f64,
    ) -> Result<Self, BoundingBoxError> {
        validate_longitude_bound(LON_MIN_KEY, lon_min)?;
        validate_longitude_bound(LON_MAX_KEY, lon_max)?;
        validate_latitude_bound(LAT_MIN_KEY, lat_min)?;
        validate_latitude_bound(LAT_MAX_KEY, lat_max)?;

        if lon_min > lon_max {
            return Err(BoundingBoxError::Inverted {
                min_key: LON_MIN_KEY,
                max_key: LON_MAX_KEY,
            });
        }
        if lat_min > lat_max {
            return Err(BoundingBoxError::Inverted {
                min_key: LAT_MIN_KEY,
                max_key: LAT_MAX_KEY,
            });
        }

        Ok(Self {
            lon_min,
            lon_max,
            lat_min,
            lat_max,
        })
    }

    /// Western bound.
    #[must_use]
    pub const fn lon_min(&self) -> f64 {
        self.lon_min
    }

    /// Eastern bound.
    #[must_use]
    pub const fn lon_max(&self) -> f64 {
        self.lon_max
    }

    /// Southern bound.
    #[must_use]
    pub const fn lat_min(&self) -> f64 {
        self.lat_min
    }

    /// Northern bound.
    #[must_use]
    pub const fn lat_max(&self) -> f64 {
        self.lat_max
    }

    /// Whether `longitude` lies within `[lon_min, lon_max]`. NaN never does.
    #[must_use]
    pub fn contains_longitude(&self, longitude: f64) -> bool {
        (self.lon_min..=self.lon_max).contains(&longitude)
    }

    /// Whether `latitude` lies within `[lat_min, lat_max]`. NaN never does.
    #[must_use]
    pub fn contains_latitude(&self, latitude: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&latitude)
    }
}

fn validate_longitude_bound(key: &'static str, value: f64) -> Result<(), BoundingBoxError> {
    if !value.is_finite() {
        return Err(BoundingBoxError::NonFinite { key });
    }
    if !valid_longitude(value) {
        return Err(BoundingBoxError::LongitudeOutOfRange { key });
    }
    Ok(())
}

fn validate_latitude_bound(key: &'static str, value: f64) -> Result<(), BoundingBoxError> {
    if !value.is_finite() {
        return Err(BoundingBoxError::NonFinite { key });
    }
    if !valid_latitude(value) {
        return Err(BoundingBoxError::LatitudeOutOfRange { key });
    }
    Ok(())
}

#[rustfmt::skip]
fn valid_longitude(value: f64) -> bool { (-180.0..=180.0).contains(&value) }

#[rustfmt::skip]
fn valid_latitude(value: f64) -> bool { (-90.0..=90.0).contains(&value) }

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BoundingBoxDto {
    lon_min: f64,
    lon_max: f64,
    lat_min: f64,
    lat_max: f64,
}

impl From<BoundingBox> for BoundingBoxDto {
    fn from(value: BoundingBox) -> Self {
        Self {
            lon_min: value.lon_min,
            lon_max: value.lon_max,
            lat_min: value.lat_min,
            lat_max: value.lat_max,
        }
    }
}

impl TryFrom<BoundingBoxDto> for BoundingBox {
    type Error = BoundingBoxError;

    fn try_from(value: BoundingBoxDto) -> Result<Self, Self::Error> {
        Self::new(value.lon_min, value.lon_max, value.lat_min, value.lat_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn accepts_degenerate_box() {
        let point_box = BoundingBox::new(-42.0, -42.0, -22.0, -22.0).expect("valid box");
        assert!(point_box.contains_longitude(-42.0));
        assert!(point_box.contains_latitude(-22.0));
    }

    #[rstest]
    #[case::nan_lon_min(f64::NAN, 0.0, 0.0, 0.0, BoundingBoxError::NonFinite { key: LON_MIN_KEY })]
    #[case::inf_lat_max(0.0, 0.0, 0.0, f64::INFINITY, BoundingBoxError::NonFinite { key: LAT_MAX_KEY })]
    #[case::lon_max_too_large(0.0, 180.5, 0.0, 0.0, BoundingBoxError::LongitudeOutOfRange { key: LON_MAX_KEY })]
    #[case::lat_min_too_small(0.0, 0.0, -90.5, 0.0, BoundingBoxError::LatitudeOutOfRange { key: LAT_MIN_KEY })]
    #[case::inverted_longitude(
        -40.0, -44.0, 0.0, 0.0,
        BoundingBoxError::Inverted { min_key: LON_MIN_KEY, max_key: LON_MAX_KEY }
    )]
    #[case::inverted_latitude(
        0.0, 0.0, -20.0, -23.0,
        BoundingBoxError::Inverted { min_key: LAT_MIN_KEY, max_key: LAT_MAX_KEY }
    )]
    fn rejects_invalid_bounds(
        #[case] lon_min: f64,
        #[case] lon_max: f64,
        #[case] lat_min: f64,
        #[case] lat_max: f64,
        #[case] expected: BoundingBoxError,
    ) {
        let error = BoundingBox::new(lon_min, lon_max, lat_min, lat_max)
            .expect_err("invalid bounds should be rejected");
        assert_eq!(error, expected);
    }

    #[rstest]
    fn nan_is_never_contained() {
        let world = BoundingBox::new(-180.0, 180.0, -90.0, 90.0).expect("valid box");
        assert!(!world.contains_longitude(f64::NAN));
        assert!(!world.contains_latitude(f64::NAN));
    }

    #[rstest]
    fn deserialises_configuration_keys() {
        let bounds: BoundingBox = serde_json::from_value(json!({
            "lonMin": -44.887212,
            "lonMax": -40.95975,
            "latMin": -23.366868,
            "latMax": -20.764962,
        }))
        .expect("valid configuration");
        assert_eq!(bounds.lon_min(), -44.887212);
        assert_eq!(bounds.lat_max(), -20.764962);
    }

    #[rstest]
    fn deserialisation_runs_validation() {
        let result = serde_json::from_value::<BoundingBox>(json!({
            "lonMin": 10.0,
            "lonMax": 5.0,
            "latMin": 0.0,
            "latMax": 1.0,
        }));
        assert!(result.is_err());
    }
}
