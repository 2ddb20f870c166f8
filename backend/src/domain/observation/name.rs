//! Observation name value object.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of characters in an observation name.
pub const OBSERVATION_NAME_MAX: usize = 100;

/// Validation errors returned by [`ObservationName::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ObservationNameError {
    /// The name is empty once surrounding whitespace is removed.
    #[error("observation name must not be empty")]
    Empty,
    /// The name exceeds [`OBSERVATION_NAME_MAX`] characters.
    #[error("observation name must be at most {max} characters (it has {actual})")]
    TooLong {
        /// Maximum permitted length.
        max: usize,
        /// Length of the rejected name.
        actual: usize,
    },
}

/// Name of the mapped phenomenon, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObservationName(String);

impl ObservationName {
    /// Trim and validate a name.
    ///
    /// # Examples
    /// ```
    /// use observation_map::domain::ObservationName;
    ///
    /// let name = ObservationName::new("  Arvore ").expect("valid name");
    /// assert_eq!(name.as_ref(), "Arvore");
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, ObservationNameError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ObservationNameError::Empty);
        }

        let actual = trimmed.chars().count();
        if actual > OBSERVATION_NAME_MAX {
            return Err(ObservationNameError::TooLong {
                max: OBSERVATION_NAME_MAX,
                actual,
            });
        }

        if trimmed.len() == raw.len() {
            Ok(Self(raw))
        } else {
            Ok(Self(trimmed.to_owned()))
        }
    }
}

impl AsRef<str> for ObservationName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ObservationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ObservationName> for String {
    fn from(value: ObservationName) -> Self {
        value.0
    }
}

impl TryFrom<String> for ObservationName {
    type Error = ObservationNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
