//! Per-field validation errors collected while cleaning an observation.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Value, json};
use thiserror::Error;

use crate::domain::{CoordinateField, Error, OutOfBounds};

use super::ObservationNameError;

/// Fields of an observation submission, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObservationField {
    /// Name of the phenomenon.
    Name,
    /// Observation date.
    Date,
    /// Observation time of day.
    Time,
    /// Longitude component.
    Longitude,
    /// Latitude component.
    Latitude,
}

impl ObservationField {
    /// Field name as reported to clients.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Date => "date",
            Self::Time => "time",
            Self::Longitude => "longitude",
            Self::Latitude => "latitude",
        }
    }
}

impl fmt::Display for ObservationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CoordinateField> for ObservationField {
    fn from(value: CoordinateField) -> Self {
        match value {
            CoordinateField::Longitude => Self::Longitude,
            CoordinateField::Latitude => Self::Latitude,
        }
    }
}

/// Why a single field was rejected. Messages are user-facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The field is missing or blank.
    #[error("This field is required.")]
    Required,
    /// A text field held a non-string JSON value.
    #[error("Enter a valid value.")]
    InvalidText,
    /// The name exceeds the permitted length.
    #[error("Ensure this value has at most {max} characters (it has {actual}).")]
    NameTooLong {
        /// Maximum permitted length.
        max: usize,
        /// Length of the rejected value.
        actual: usize,
    },
    /// The date is not `YYYY-MM-DD`.
    #[error("Enter a valid date.")]
    InvalidDate,
    /// The time is not `HH:MM[:SS]`.
    #[error("Enter a valid time.")]
    InvalidTime,
    /// The coordinate is not a finite number.
    #[error("Enter a number.")]
    InvalidNumber,
    /// The coordinate lies outside the configured bounding box.
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBounds),
}

impl From<ObservationNameError> for FieldError {
    fn from(value: ObservationNameError) -> Self {
        match value {
            ObservationNameError::Empty => Self::Required,
            ObservationNameError::TooLong { max, actual } => Self::NameTooLong { max, actual },
        }
    }
}

/// Every field error found in one submission, in the order detected.
///
/// # Examples
/// ```
/// use observation_map::domain::{FieldError, ObservationField, ValidationErrors};
///
/// let mut errors = ValidationErrors::default();
/// errors.push(ObservationField::Name, FieldError::Required);
/// assert!(errors.contains(ObservationField::Name));
/// assert_eq!(errors.messages_for(ObservationField::Name), vec!["This field is required."]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("observation failed validation")]
pub struct ValidationErrors {
    entries: Vec<(ObservationField, FieldError)>,
}

impl ValidationErrors {
    /// Record an error against `field`.
    pub fn push(&mut self, field: ObservationField, error: FieldError) {
        self.entries.push((field, error));
    }

    /// Record a bounding-box violation against its coordinate field.
    pub fn push_out_of_bounds(&mut self, error: OutOfBounds) {
        self.push(error.field().into(), FieldError::OutOfBounds(error));
    }

    /// Keep the value of `result`, recording its error against `field`.
    pub fn capture<T, E>(&mut self, field: ObservationField, result: Result<T, E>) -> Option<T>
    where
        E: Into<FieldError>,
    {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.push(field, error.into());
                None
            }
        }
    }

    /// Whether no errors were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any error was recorded against `field`.
    #[must_use]
    pub fn contains(&self, field: ObservationField) -> bool {
        self.entries.iter().any(|(candidate, _)| *candidate == field)
    }

    /// Fields with at least one error, deduplicated, in reporting order.
    #[must_use]
    pub fn fields(&self) -> Vec<ObservationField> {
        let mut fields: Vec<_> = self.entries.iter().map(|(field, _)| *field).collect();
        fields.sort_unstable();
        fields.dedup();
        fields
    }

    /// User-facing messages recorded against `field`.
    #[must_use]
    pub fn messages_for(&self, field: ObservationField) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(candidate, _)| *candidate == field)
            .map(|(_, error)| error.to_string())
            .collect()
    }

    /// Iterate over `(field, error)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = &(ObservationField, FieldError)> {
        self.entries.iter()
    }

    /// Structured details for API responses:
    /// `{"fieldErrors": {"<field>": ["<message>", ...]}}`.
    #[must_use]
    pub fn to_details(&self) -> Value {
        let mut by_field: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();
        for (field, error) in &self.entries {
            by_field
                .entry(field.as_str())
                .or_default()
                .push(error.to_string());
        }
        json!({ "fieldErrors": by_field })
    }
}

impl From<ValidationErrors> for Error {
    fn from(value: ValidationErrors) -> Self {
        Self::invalid_request("observation failed validation").with_details(value.to_details())
    }
}
