//! Observation aggregate and the composed submission rule.
//!
//! An [`Observation`] is only produced when every coordinate validator
//! passes; otherwise [`submit_observation`] returns all field errors at once.

mod name;
mod validation;

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{BoundingBox, Point, build_geometry, coordinates::coordinate_errors};

pub use self::name::{OBSERVATION_NAME_MAX, ObservationName, ObservationNameError};
pub use self::validation::{FieldError, ObservationField, ValidationErrors};

/// A named phenomenon sighted at a date, time, and location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    name: ObservationName,
    date: NaiveDate,
    time: NaiveTime,
    geometry: Point,
}

impl Observation {
    /// Assemble an observation from already validated parts.
    #[must_use]
    pub const fn new(name: ObservationName, date: NaiveDate, time: NaiveTime, geometry: Point) -> Self {
        Self {
            name,
            date,
            time,
            geometry,
        }
    }

    /// Name of the phenomenon.
    #[must_use]
    pub const fn name(&self) -> &ObservationName {
        &self.name
    }

    /// Observation date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Observation time of day.
    #[must_use]
    pub const fn time(&self) -> NaiveTime {
        self.time
    }

    /// Location of the sighting.
    #[must_use]
    pub const fn geometry(&self) -> &Point {
        &self.geometry
    }
}

/// Typed submission awaiting the bounding-box check.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationDraft {
    /// Name of the phenomenon.
    pub name: ObservationName,
    /// Observation date.
    pub date: NaiveDate,
    /// Observation time of day.
    pub time: NaiveTime,
    /// Submitted longitude.
    pub longitude: f64,
    /// Submitted latitude.
    pub latitude: f64,
}

/// Validate a draft's coordinates and, if admissible, build its geometry.
///
/// Both validators always run so the caller sees every failing field.
///
/// # Examples
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use observation_map::domain::{
///     BoundingBox, ObservationDraft, ObservationField, ObservationName, submit_observation,
/// };
///
/// let rio = BoundingBox::new(-44.887212, -40.95975, -23.366868, -20.764962)
///     .expect("valid bounds");
/// let draft = ObservationDraft {
///     name: ObservationName::new("Teste").expect("valid name"),
///     date: NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date"),
///     time: NaiveTime::from_hms_opt(9, 12, 12).expect("valid time"),
///     longitude: -40.0,
///     latitude: -19.0,
/// };
/// let errors = submit_observation(draft, &rio).expect_err("outside the box");
/// assert_eq!(errors.fields(), vec![ObservationField::Longitude, ObservationField::Latitude]);
/// ```
pub fn submit_observation(
    draft: ObservationDraft,
    bounds: &BoundingBox,
) -> Result<Observation, ValidationErrors> {
    let ObservationDraft {
        name,
        date,
        time,
        longitude,
        latitude,
    } = draft;

    let mut errors = ValidationErrors::default();
    for error in coordinate_errors(Some(longitude), Some(latitude), bounds) {
        errors.push_out_of_bounds(error);
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Observation::new(
        name,
        date,
        time,
        build_geometry(longitude, latitude),
    ))
}

/// Repository-assigned identifier of a stored observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObservationId(u64);

impl ObservationId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An observation together with its storage identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRecord {
    /// Storage identifier.
    pub id: ObservationId,
    /// The stored observation.
    pub observation: Observation,
}

#[cfg(test)]
mod tests;
