//! Domain primitives, aggregates, and use cases.
//!
//! Purpose: validate observation input against the configured bounding box,
//! build GeoJSON geometry, and expose the driving ports consumed by inbound
//! adapters. Nothing here depends on actix or persistence details.
//!
//! Public surface:
//! - [`BoundingBox`]: configured rectangle of admissible coordinates.
//! - [`validate_longitude`] / [`validate_latitude`]: inclusive bounds checks.
//! - [`build_geometry`]: total constructor for a GeoJSON [`Point`].
//! - [`submit_observation`] and [`ObservationForm::clean`]: collect every
//!   field error of a submission.
//! - [`FeatureCollection`]: the map feed.
//! - [`Error`] / [`ErrorCode`]: API error payload.

mod bounding_box;
mod coordinates;
pub mod error;
mod feed;
mod geometry;
mod observation;
mod observation_form;
mod observation_service;
pub mod ports;
mod trace_id;

pub use self::bounding_box::{
    BoundingBox, BoundingBoxError, LAT_MAX_KEY, LAT_MIN_KEY, LON_MAX_KEY, LON_MIN_KEY,
};
pub use self::coordinates::{CoordinateField, OutOfBounds, validate_latitude, validate_longitude};
pub use self::error::{Error, ErrorCode};
pub use self::feed::{
    CrsProperties, FEED_CRS_NAME, FEED_MODEL, Feature, FeatureCollection, FeatureProperties,
    NamedCrs,
};
pub use self::geometry::{Point, PointValidationError, build_geometry};
pub use self::observation::{
    FieldError, OBSERVATION_NAME_MAX, Observation, ObservationDraft, ObservationField,
    ObservationId, ObservationName, ObservationNameError, ObservationRecord, ValidationErrors,
    submit_observation,
};
pub use self::observation_form::{NumericInput, ObservationForm, TextInput};
pub use self::observation_service::ObservationService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
