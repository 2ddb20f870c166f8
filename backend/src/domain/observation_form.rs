//! Raw observation input as submitted by clients, and its cleaning rules.
//!
//! Fields are cleaned independently and every failure is collected. A
//! coordinate that parsed is still checked against the bounding box when a
//! sibling field failed, so a single response lists every problem. Fields
//! accept any JSON value; a value of the wrong type is a field error.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::coordinates::coordinate_errors;
use super::{
    BoundingBox, FieldError, Observation, ObservationDraft, ObservationField, ObservationName,
    ValidationErrors, submit_observation,
};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 3] = ["%H:%M:%S", "%H:%M:%S%.f", "%H:%M"];

/// A text field as submitted. Any JSON value is accepted so a mistyped field
/// is reported against itself instead of rejecting the whole body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextInput {
    /// A JSON string.
    Text(String),
    /// Any other JSON value, for example a number.
    Other(Value),
}

impl TextInput {
    /// The submitted string, if the value was one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Other(_) => None,
        }
    }
}

impl From<&str> for TextInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for TextInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A coordinate supplied either as a JSON number or as numeric text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    /// A JSON number.
    Number(f64),
    /// Text expected to parse as a number, for example `"-42.5"`.
    Text(String),
    /// Any other JSON value, never a valid coordinate.
    Other(Value),
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Unvalidated observation fields.
///
/// # Examples
/// ```
/// use observation_map::domain::{BoundingBox, ObservationForm};
///
/// let rio = BoundingBox::new(-44.887212, -40.95975, -23.366868, -20.764962)
///     .expect("valid bounds");
/// let form = ObservationForm {
///     name: Some("Teste".into()),
///     date: Some("2020-01-01".into()),
///     time: Some("09:12:12".into()),
///     longitude: Some((-42.0).into()),
///     latitude: Some("-22".into()),
/// };
/// let observation = form.clean(&rio).expect("valid form");
/// assert_eq!(observation.geometry().coordinates(), [-42.0, -22.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservationForm {
    /// Name of the phenomenon.
    pub name: Option<TextInput>,
    /// Date as `YYYY-MM-DD`.
    pub date: Option<TextInput>,
    /// Time as `HH:MM:SS` or `HH:MM`.
    pub time: Option<TextInput>,
    /// Longitude in WGS84 degrees.
    pub longitude: Option<NumericInput>,
    /// Latitude in WGS84 degrees.
    pub latitude: Option<NumericInput>,
}

impl ObservationForm {
    /// Clean every field and, when all parse, submit the typed draft.
    pub fn clean(self, bounds: &BoundingBox) -> Result<Observation, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let parsed_name = errors.capture(ObservationField::Name, clean_name(self.name));
        let parsed_date = errors.capture(ObservationField::Date, clean_date(self.date));
        let parsed_time = errors.capture(ObservationField::Time, clean_time(self.time));
        let parsed_longitude = errors.capture(
            ObservationField::Longitude,
            clean_coordinate(self.longitude),
        );
        let parsed_latitude =
            errors.capture(ObservationField::Latitude, clean_coordinate(self.latitude));

        if let (Some(name), Some(date), Some(time), Some(longitude), Some(latitude)) = (
            parsed_name,
            parsed_date,
            parsed_time,
            parsed_longitude,
            parsed_latitude,
        ) {
            return submit_observation(
                ObservationDraft {
                    name,
                    date,
                    time,
                    longitude,
                    latitude,
                },
                bounds,
            );
        }

        for error in coordinate_errors(parsed_longitude, parsed_latitude, bounds) {
            errors.push_out_of_bounds(error);
        }
        Err(errors)
    }
}

fn required_text(value: Option<TextInput>, mistyped: FieldError) -> Result<String, FieldError> {
    match value {
        Some(TextInput::Text(text)) if !text.trim().is_empty() => Ok(text),
        Some(TextInput::Other(_)) => Err(mistyped),
        _ => Err(FieldError::Required),
    }
}

fn clean_name(value: Option<TextInput>) -> Result<ObservationName, FieldError> {
    let text = required_text(value, FieldError::InvalidText)?;
    ObservationName::new(text).map_err(FieldError::from)
}

fn clean_date(value: Option<TextInput>) -> Result<NaiveDate, FieldError> {
    let text = required_text(value, FieldError::InvalidDate)?;
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).map_err(|_| FieldError::InvalidDate)
}

fn clean_time(value: Option<TextInput>) -> Result<NaiveTime, FieldError> {
    let text = required_text(value, FieldError::InvalidTime)?;
    let trimmed = text.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
        .ok_or(FieldError::InvalidTime)
}

fn clean_coordinate(value: Option<NumericInput>) -> Result<f64, FieldError> {
    let number = match value {
        None => return Err(FieldError::Required),
        Some(NumericInput::Number(number)) => number,
        Some(NumericInput::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(FieldError::Required);
            }
            trimmed
                .parse::<f64>()
                .map_err(|_| FieldError::InvalidNumber)?
        }
        Some(NumericInput::Other(_)) => return Err(FieldError::InvalidNumber),
    };

    if number.is_finite() {
        Ok(number)
    } else {
        Err(FieldError::InvalidNumber)
    }
}

#[cfg(test)]
#[path = "observation_form_tests.rs"]
mod tests;
