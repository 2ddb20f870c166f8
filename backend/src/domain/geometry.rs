//! GeoJSON Point geometry.
//!
//! Serialises as `{"type": "Point", "coordinates": [longitude, latitude]}`.
//! Deserialisation rejects other geometry types, coordinate arrays that are
//! not exactly two long, and non-finite components.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when decoding a [`Point`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PointValidationError {
    /// A coordinate component is NaN or infinite.
    #[error("point coordinates must be finite numbers")]
    NonFinite,
}

/// A `(longitude, latitude)` pair, x before y.
///
/// # Examples
/// ```
/// use observation_map::domain::build_geometry;
/// use serde_json::json;
///
/// let point = build_geometry(-42.0, -22.0);
/// assert_eq!(
///     serde_json::to_value(point).expect("serialise point"),
///     json!({ "type": "Point", "coordinates": [-42.0, -22.0] })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PointDto", into = "PointDto")]
pub struct Point {
    longitude: f64,
    latitude: f64,
}

impl Point {
    /// Longitude (x).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude (y).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Coordinates in GeoJSON order.
    #[must_use]
    pub const fn coordinates(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

/// Construct a Point from a longitude and latitude.
///
/// Performs no bounds checking: admissibility is decided beforehand by
/// [`crate::domain::validate_longitude`] and
/// [`crate::domain::validate_latitude`].
#[must_use]
pub const fn build_geometry(longitude: f64, latitude: f64) -> Point {
    Point {
        longitude,
        latitude,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum GeometryType {
    Point,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct PointDto {
    #[serde(rename = "type")]
    kind: GeometryType,
    coordinates: [f64; 2],
}

impl From<Point> for PointDto {
    fn from(value: Point) -> Self {
        Self {
            kind: GeometryType::Point,
            coordinates: value.coordinates(),
        }
    }
}

impl TryFrom<PointDto> for Point {
    type Error = PointValidationError;

    fn try_from(value: PointDto) -> Result<Self, Self::Error> {
        let [longitude, latitude] = value.coordinates;
        if !(longitude.is_finite() && latitude.is_finite()) {
            return Err(PointValidationError::NonFinite);
        }
        Ok(build_geometry(longitude, latitude))
    }
}
