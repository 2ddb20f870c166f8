//! Process configuration loaded via OrthoConfig.
//!
//! Values layer command-line flags over `OBSERVATION_MAP_*` environment
//! variables over the configuration file. The bounding box has no built-in
//! default: all four keys must be supplied.

use std::fmt;
use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{
    BoundingBox, BoundingBoxError, LAT_MAX_KEY, LAT_MIN_KEY, LON_MAX_KEY, LON_MIN_KEY,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Errors raised while turning loaded settings into runtime values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    /// A bounding-box key was not supplied.
    #[error("missing bounding box setting `{key}`")]
    MissingBound {
        /// Configuration key of the missing value.
        key: &'static str,
    },
    /// The supplied bounds do not form a valid box.
    #[error(transparent)]
    InvalidBounds(#[from] BoundingBoxError),
    /// The bind address is not `host:port`.
    #[error("invalid bind address `{value}`: {message}")]
    InvalidBindAddr {
        /// Rejected value.
        value: String,
        /// Parser message.
        message: String,
    },
}

/// Settings for the observation service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "OBSERVATION_MAP")]
pub struct ObservationMapSettings {
    /// Socket address to listen on, `0.0.0.0:8080` when unset.
    pub bind_addr: Option<String>,
    /// Western edge of the admissible area.
    #[ortho_config(file_key = "lonMin")]
    pub lon_min: Option<f64>,
    /// Eastern edge of the admissible area.
    #[ortho_config(file_key = "lonMax")]
    pub lon_max: Option<f64>,
    /// Southern edge of the admissible area.
    #[ortho_config(file_key = "latMin")]
    pub lat_min: Option<f64>,
    /// Northern edge of the admissible area.
    #[ortho_config(file_key = "latMax")]
    pub lat_max: Option<f64>,
}

fn required(value: Option<f64>, key: &'static str) -> Result<f64, SettingsError> {
    value.ok_or(SettingsError::MissingBound { key })
}

impl ObservationMapSettings {
    /// Configured bounding box.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingBound`] when a key is absent and
    /// [`SettingsError::InvalidBounds`] when the values are rejected by
    /// [`BoundingBox::new`].
    pub fn bounding_box(&self) -> Result<BoundingBox, SettingsError> {
        let bounds = BoundingBox::new(
            required(self.lon_min, LON_MIN_KEY)?,
            required(self.lon_max, LON_MAX_KEY)?,
            required(self.lat_min, LAT_MIN_KEY)?,
            required(self.lat_max, LAT_MAX_KEY)?,
        )?;
        Ok(bounds)
    }

    /// Socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindAddr`] when the value does not
    /// parse as a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value
            .parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::InvalidBindAddr {
                value: value.to_owned(),
                message: err.to_string(),
            })
    }
}

impl fmt::Display for ObservationMapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bind_addr={} lonMin={:?} lonMax={:?} latMin={:?} latMax={:?}",
            self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR),
            self.lon_min,
            self.lon_max,
            self.lat_min,
            self.lat_max,
        )
    }
}
