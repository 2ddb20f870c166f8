//! Coordinate validators checking submitted values against a [`BoundingBox`].
//!
//! Validators are pure: they report an [`OutOfBounds`] error and never clamp
//! or default the offending value. Bounds are inclusive.

use std::fmt;

use thiserror::Error;

use super::BoundingBox;

/// Which coordinate component a validator checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateField {
    /// The x component.
    Longitude,
    /// The y component.
    Latitude,
}

impl CoordinateField {
    /// Field name as reported to clients.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Longitude => "longitude",
            Self::Latitude => "latitude",
        }
    }
}

impl fmt::Display for CoordinateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A coordinate fell outside the configured bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Coordinate {field} outside the state's configured context")]
pub struct OutOfBounds {
    field: CoordinateField,
}

impl OutOfBounds {
    /// Construct an error for `field`.
    #[must_use]
    pub const fn new(field: CoordinateField) -> Self {
        Self { field }
    }

    /// The coordinate that violated its bound.
    #[must_use]
    pub const fn field(&self) -> CoordinateField {
        self.field
    }
}

/// Check `longitude` against `[lon_min, lon_max]`.
///
/// # Examples
/// ```
/// use observation_map::domain::{BoundingBox, CoordinateField, validate_longitude};
///
/// let bounds = BoundingBox::new(-44.887212, -40.95975, -23.366868, -20.764962)
///     .expect("valid bounds");
/// assert!(validate_longitude(-42.0, &bounds).is_ok());
/// let err = validate_longitude(-45.0, &bounds).expect_err("west of the box");
/// assert_eq!(err.field(), CoordinateField::Longitude);
/// ```
pub fn validate_longitude(longitude: f64, bounds: &BoundingBox) -> Result<(), OutOfBounds> {
    if bounds.contains_longitude(longitude) {
        Ok(())
    } else {
        Err(OutOfBounds::new(CoordinateField::Longitude))
    }
}

/// Check `latitude` against `[lat_min, lat_max]`.
pub fn validate_latitude(latitude: f64, bounds: &BoundingBox) -> Result<(), OutOfBounds> {
    if bounds.contains_latitude(latitude) {
        Ok(())
    } else {
        Err(OutOfBounds::new(CoordinateField::Latitude))
    }
}

type CoordinateValidator = fn(f64, &BoundingBox) -> Result<(), OutOfBounds>;

/// Run every coordinate validator and collect all failures.
///
/// Errors are reported in table order. A `None` component was rejected
/// earlier (missing or unparseable) and is skipped rather than reported twice.
pub(crate) fn coordinate_errors(
    longitude: Option<f64>,
    latitude: Option<f64>,
    bounds: &BoundingBox,
) -> Vec<OutOfBounds> {
    let checks: [(Option<f64>, CoordinateValidator); 2] = [
        (longitude, validate_longitude),
        (latitude, validate_latitude),
    ];
    checks
        .into_iter()
        .filter_map(|(value, validate)| {
            value.and_then(|component| validate(component, bounds).err())
        })
        .collect()
}
